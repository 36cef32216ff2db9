use std::fmt;

use super::model::{PokemonTable, Record};

// ---------------------------------------------------------------------------
// Choice: one combo-box entry, "All" is out of band
// ---------------------------------------------------------------------------

/// A single filter constraint. `All` never collides with a data value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Choice<T> {
    #[default]
    All,
    Is(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Is(wanted) => wanted == value,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Choice::Is(_))
    }
}

/// Secondary type as offered in the filter: `None` means "no secondary type".
pub type SecondaryType = Option<String>;

/// Label for a secondary type, with the missing category named.
pub fn secondary_label(value: &SecondaryType) -> &str {
    value.as_deref().unwrap_or("None")
}

impl fmt::Display for Choice<String> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => write!(f, "All"),
            Choice::Is(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for Choice<SecondaryType> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => write!(f, "All"),
            Choice::Is(v) => write!(f, "{}", secondary_label(v)),
        }
    }
}

impl fmt::Display for Choice<bool> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => write!(f, "All"),
            Choice::Is(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterSelection: the constraints for one render cycle
// ---------------------------------------------------------------------------

/// One constraint per filterable field; default is "match everything".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub primary_type: Choice<String>,
    pub secondary_type: Choice<SecondaryType>,
    pub legendary: Choice<bool>,
    pub mythical: Choice<bool>,
    pub pseudo_legendary: Choice<bool>,
    pub generation: Choice<String>,
}

impl FilterSelection {
    /// Whether a record satisfies every active constraint.
    pub fn matches(&self, r: &Record) -> bool {
        self.primary_type.matches(&r.type_1)
            && self.secondary_type.matches(&r.type_2)
            && self.legendary.matches(&r.is_legendary)
            && self.mythical.matches(&r.is_mythical)
            && self.pseudo_legendary.matches(&r.is_pseudo_legendary)
            && self.generation.matches(&r.generation)
    }

    pub fn is_unconstrained(&self) -> bool {
        !(self.primary_type.is_active()
            || self.secondary_type.is_active()
            || self.legendary.is_active()
            || self.mythical.is_active()
            || self.pseudo_legendary.is_active()
            || self.generation.is_active())
    }
}

/// Return a new table holding the records that pass `selection`, in order.
pub fn apply_filters(table: &PokemonTable, selection: &FilterSelection) -> PokemonTable {
    let records = table
        .records
        .iter()
        .filter(|r| selection.matches(r))
        .cloned()
        .collect();
    table.with_records(records)
}

// ---------------------------------------------------------------------------
// FilterOptions: what each combo box offers
// ---------------------------------------------------------------------------

/// Per-field choices, each list starting with `Choice::All`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterOptions {
    pub primary_type: Vec<Choice<String>>,
    pub secondary_type: Vec<Choice<SecondaryType>>,
    pub legendary: Vec<Choice<bool>>,
    pub mythical: Vec<Choice<bool>>,
    pub pseudo_legendary: Vec<Choice<bool>>,
    pub generation: Vec<Choice<String>>,
}

/// Distinct values in first-seen order.
fn distinct<T: Clone + PartialEq>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

fn with_all<T>(values: Vec<T>) -> Vec<Choice<T>> {
    std::iter::once(Choice::All)
        .chain(values.into_iter().map(Choice::Is))
        .collect()
}

/// Build the combo-box contents from the loaded table.
///
/// Type lists are sorted by label with the missing secondary type named
/// "None" before sorting; flag and generation lists keep encounter order.
pub fn build_filter_options(table: &PokemonTable) -> FilterOptions {
    let records = &table.records;

    let mut primary = distinct(records.iter().map(|r| r.type_1.clone()));
    primary.sort();

    let mut secondary = distinct(records.iter().map(|r| r.type_2.clone()));
    secondary.sort_by(|a, b| secondary_label(a).cmp(secondary_label(b)));

    FilterOptions {
        primary_type: with_all(primary),
        secondary_type: with_all(secondary),
        legendary: with_all(distinct(records.iter().map(|r| r.is_legendary))),
        mythical: with_all(distinct(records.iter().map(|r| r.is_mythical))),
        pseudo_legendary: with_all(distinct(records.iter().map(|r| r.is_pseudo_legendary))),
        generation: with_all(distinct(records.iter().map(|r| r.generation.clone()))),
    }
}
