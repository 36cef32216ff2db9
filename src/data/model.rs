use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single raw cell before it is bound to a typed field
// ---------------------------------------------------------------------------

/// A dynamically-typed cell as read from CSV, JSON or Parquet.
/// Extra (non-required) columns keep this representation for display.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        use CellValue::*;
        fn rank(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
            }
        }
        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, ""),
        }
    }
}

impl CellValue {
    /// A text cell exactly as written, minus surrounding whitespace.
    /// Empty text is null; typing happens once the column is known.
    pub fn from_source(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            CellValue::Null
        } else {
            CellValue::String(s.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one Pokémon
// ---------------------------------------------------------------------------

/// Base stats plus the precomputed total. Null cells stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseStats {
    pub hp: Option<f64>,
    pub attack: Option<f64>,
    pub defense: Option<f64>,
    pub sp_atk: Option<f64>,
    pub sp_def: Option<f64>,
    pub speed: Option<f64>,
    pub total: Option<f64>,
}

/// One row of the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: i64,
    /// Primary type, never empty.
    pub type_1: String,
    /// Secondary type; `None` means the Pokémon has a single type.
    pub type_2: Option<String>,
    /// Categorical generation marker, kept as its textual form.
    pub generation: String,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub is_pseudo_legendary: bool,
    pub stats: BaseStats,
    pub height_m: Option<f64>,
    pub weight_kg: Option<f64>,
    /// Columns that are neither required nor dropped, e.g. `Name`.
    pub extra: BTreeMap<String, CellValue>,
}

impl Record {
    /// True when any rarity flag is set.
    pub fn is_restricted(&self) -> bool {
        self.is_legendary || self.is_mythical || self.is_pseudo_legendary
    }
}

// ---------------------------------------------------------------------------
// StatColumn – the numeric fields summarised by `describe`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatColumn {
    Hp,
    Attack,
    Defense,
    SpAtk,
    SpDef,
    Speed,
    Total,
}

impl StatColumn {
    pub const ALL: [StatColumn; 7] = [
        StatColumn::Hp,
        StatColumn::Attack,
        StatColumn::Defense,
        StatColumn::SpAtk,
        StatColumn::SpDef,
        StatColumn::Speed,
        StatColumn::Total,
    ];

    /// Source column header.
    pub fn header(self) -> &'static str {
        match self {
            StatColumn::Hp => "HP",
            StatColumn::Attack => "Attack",
            StatColumn::Defense => "Defense",
            StatColumn::SpAtk => "Sp.Atk",
            StatColumn::SpDef => "Sp.Def",
            StatColumn::Speed => "Speed",
            StatColumn::Total => "Total_Stats",
        }
    }

    pub fn get(self, stats: &BaseStats) -> Option<f64> {
        match self {
            StatColumn::Hp => stats.hp,
            StatColumn::Attack => stats.attack,
            StatColumn::Defense => stats.defense,
            StatColumn::SpAtk => stats.sp_atk,
            StatColumn::SpDef => stats.sp_def,
            StatColumn::Speed => stats.speed,
            StatColumn::Total => stats.total,
        }
    }

    pub(crate) fn slot(self, stats: &mut BaseStats) -> &mut Option<f64> {
        match self {
            StatColumn::Hp => &mut stats.hp,
            StatColumn::Attack => &mut stats.attack,
            StatColumn::Defense => &mut stats.defense,
            StatColumn::SpAtk => &mut stats.sp_atk,
            StatColumn::SpDef => &mut stats.sp_def,
            StatColumn::Speed => &mut stats.speed,
            StatColumn::Total => &mut stats.total,
        }
    }
}

// ---------------------------------------------------------------------------
// PokemonTable – an owned table of records
// ---------------------------------------------------------------------------

/// A loaded or derived table. Transformations always build a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonTable {
    pub records: Vec<Record>,
    /// Ordered names of the extra columns, in source order (first-seen
    /// key order for JSON).
    pub extra_columns: Vec<String>,
}

impl PokemonTable {
    pub fn new(records: Vec<Record>, extra_columns: Vec<String>) -> Self {
        PokemonTable {
            records,
            extra_columns,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Same columns, different rows.
    pub fn with_records(&self, records: Vec<Record>) -> Self {
        PokemonTable {
            records,
            extra_columns: self.extra_columns.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(id: i64, type_1: &str, type_2: Option<&str>) -> Record {
        Record {
            id,
            type_1: type_1.to_string(),
            type_2: type_2.map(str::to_string),
            generation: "1".to_string(),
            is_legendary: false,
            is_mythical: false,
            is_pseudo_legendary: false,
            stats: BaseStats::default(),
            height_m: None,
            weight_kg: None,
            extra: BTreeMap::new(),
        }
    }

    /// The three-record table used throughout the tests.
    pub fn fire_water_table() -> PokemonTable {
        let mut water = record(2, "Water", Some("Ice"));
        water.is_legendary = true;
        PokemonTable::new(
            vec![
                record(1, "Fire", None),
                water,
                record(3, "Fire", Some("Flying")),
            ],
            Vec::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_text_is_kept_verbatim() {
        assert_eq!(CellValue::from_source(""), CellValue::Null);
        assert_eq!(CellValue::from_source("   "), CellValue::Null);
        assert_eq!(CellValue::from_source(" 01 "), CellValue::String("01".into()));
        assert_eq!(CellValue::from_source("TRUE"), CellValue::String("TRUE".into()));
        assert_eq!(CellValue::from_source("1e1"), CellValue::String("1e1".into()));
    }

    #[test]
    fn restricted_is_any_flag() {
        let mut r = fixtures::record(1, "Dragon", None);
        assert!(!r.is_restricted());
        r.is_pseudo_legendary = true;
        assert!(r.is_restricted());
        r.is_pseudo_legendary = false;
        r.is_mythical = true;
        assert!(r.is_restricted());
    }

    #[test]
    fn cell_ordering_groups_by_kind() {
        let mut v = vec![
            CellValue::String("b".into()),
            CellValue::Integer(3),
            CellValue::Null,
            CellValue::Float(1.5),
            CellValue::Integer(1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                CellValue::Null,
                CellValue::Integer(1),
                CellValue::Integer(3),
                CellValue::Float(1.5),
                CellValue::String("b".into()),
            ]
        );
    }
}
