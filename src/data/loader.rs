use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int16Type, Int32Type, Int64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::DataLoadError;
use super::model::{BaseStats, CellValue, PokemonTable, Record, StatColumn};

type Result<T> = std::result::Result<T, DataLoadError>;

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

pub const ID: &str = "id";
pub const TYPE_1: &str = "Type_1";
pub const TYPE_2: &str = "Type_2";
pub const GENERATION: &str = "Generation";
pub const IS_LEGENDARY: &str = "Is_Legendary";
pub const IS_MYTHICAL: &str = "Is_Mythical";
pub const IS_PSEUDO_LEGENDARY: &str = "Is_Pseudo_Legendary";
pub const HEIGHT: &str = "Height(m)";
pub const WEIGHT: &str = "Weight{kg}";

/// Metadata columns never used downstream; discarded at load.
pub const DROPPED_COLUMNS: [&str; 5] = [
    "Capture_Rate",
    "Base_Happiness",
    "Is_Baby",
    "Egg_Cycles",
    "Past_Type",
];

fn required_columns() -> Vec<&'static str> {
    let mut cols = vec![
        ID,
        TYPE_1,
        TYPE_2,
        GENERATION,
        IS_LEGENDARY,
        IS_MYTHICAL,
        IS_PSEUDO_LEGENDARY,
        HEIGHT,
        WEIGHT,
    ];
    cols.extend(StatColumn::ALL.iter().map(|c| c.header()));
    cols
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a Pokémon table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row plus one row per Pokémon (the reference format)
/// * `.json`    – `[{ "id": 1, "Type_1": "Grass", ... }, ...]`
/// * `.parquet` – flat columns with the same names as the CSV headers
pub fn load_file(path: &Path) -> Result<PokemonTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let raw = match ext.as_str() {
        "csv" => read_csv(path)?,
        "json" => read_json(path)?,
        "parquet" | "pq" => read_parquet(path)?,
        other => return Err(DataLoadError::UnsupportedExtension(other.to_string())),
    };
    let table = build_table(raw)?;
    log::debug!(
        "parsed {} records from {} ({} extra columns)",
        table.len(),
        path.display(),
        table.extra_columns.len()
    );
    Ok(table)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Raw table: every format lands here before validation
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

fn build_table(raw: RawTable) -> Result<PokemonTable> {
    let index_of = |name: &str| -> Result<usize> {
        raw.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
    };

    let required = required_columns();
    let mut idx: BTreeMap<&'static str, usize> = BTreeMap::new();
    for name in required.iter().copied() {
        idx.insert(name, index_of(name)?);
    }

    let extra_columns: Vec<(usize, String)> = raw
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !required.contains(&h.as_str()) && !DROPPED_COLUMNS.contains(&h.as_str()))
        .map(|(i, h)| (i, h.clone()))
        .collect();

    let mut seen_ids = HashSet::with_capacity(raw.rows.len());
    let mut records = Vec::with_capacity(raw.rows.len());

    for (i, cells) in raw.rows.iter().enumerate() {
        let row = RowReader {
            row: i + 1,
            cells,
            idx: &idx,
        };

        let id = row.id()?;
        if !seen_ids.insert(id) {
            return Err(DataLoadError::DuplicateId { row: row.row, id });
        }

        let mut stats = BaseStats::default();
        for col in StatColumn::ALL {
            *col.slot(&mut stats) = row.number(col.header())?;
        }

        let extra = extra_columns
            .iter()
            .map(|(ci, name)| (name.clone(), cells.get(*ci).cloned().unwrap_or(CellValue::Null)))
            .collect();

        records.push(Record {
            id,
            type_1: row.required_text(TYPE_1)?,
            type_2: row.text(TYPE_2),
            generation: row.required_text(GENERATION)?,
            is_legendary: row.flag(IS_LEGENDARY)?,
            is_mythical: row.flag(IS_MYTHICAL)?,
            is_pseudo_legendary: row.flag(IS_PSEUDO_LEGENDARY)?,
            stats,
            height_m: row.number(HEIGHT)?,
            weight_kg: row.number(WEIGHT)?,
            extra,
        });
    }

    Ok(PokemonTable::new(
        records,
        extra_columns.into_iter().map(|(_, name)| name).collect(),
    ))
}

static NULL_CELL: CellValue = CellValue::Null;

/// Text that pandas reads as a missing number.
const MISSING_MARKERS: [&str; 6] = ["NaN", "nan", "NA", "N/A", "null", "<NA>"];

/// Typed access to one raw row.
struct RowReader<'a> {
    row: usize,
    cells: &'a [CellValue],
    idx: &'a BTreeMap<&'static str, usize>,
}

impl RowReader<'_> {
    fn cell(&self, column: &str) -> &CellValue {
        self.idx
            .get(column)
            .and_then(|i| self.cells.get(*i))
            .unwrap_or(&NULL_CELL)
    }

    fn invalid(&self, column: &str, value: &CellValue) -> DataLoadError {
        DataLoadError::InvalidValue {
            row: self.row,
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    fn missing(&self, column: &str) -> DataLoadError {
        DataLoadError::MissingValue {
            row: self.row,
            column: column.to_string(),
        }
    }

    fn id(&self) -> Result<i64> {
        match self.cell(ID) {
            CellValue::Integer(i) => Ok(*i),
            CellValue::String(s) => s.parse().map_err(|_| self.invalid(ID, self.cell(ID))),
            CellValue::Null => Err(self.missing(ID)),
            other => Err(self.invalid(ID, other)),
        }
    }

    /// Source text for string cells; typed cells use their display form.
    fn text(&self, column: &str) -> Option<String> {
        match self.cell(column) {
            CellValue::Null => None,
            CellValue::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    fn required_text(&self, column: &str) -> Result<String> {
        self.text(column).ok_or_else(|| self.missing(column))
    }

    fn flag(&self, column: &str) -> Result<bool> {
        match self.cell(column) {
            CellValue::Bool(b) => Ok(*b),
            CellValue::String(s) => match s.as_str() {
                "true" | "True" | "TRUE" => Ok(true),
                "false" | "False" | "FALSE" => Ok(false),
                _ => Err(self.invalid(column, self.cell(column))),
            },
            CellValue::Null => Err(self.missing(column)),
            other => Err(self.invalid(column, other)),
        }
    }

    /// Finite number or null. Missing-value markers and a float NaN read
    /// as null; any other non-finite or non-numeric value is rejected.
    fn number(&self, column: &str) -> Result<Option<f64>> {
        let cell = self.cell(column);
        let value = match cell {
            CellValue::Null => return Ok(None),
            CellValue::Integer(i) => *i as f64,
            CellValue::Float(f) if f.is_nan() => return Ok(None),
            CellValue::Float(f) => *f,
            CellValue::String(s) if MISSING_MARKERS.contains(&s.as_str()) => return Ok(None),
            CellValue::String(s) => s.parse::<f64>().map_err(|_| self.invalid(column, cell))?,
            CellValue::Bool(_) => return Err(self.invalid(column, cell)),
        };
        if value.is_finite() {
            Ok(Some(value))
        } else {
            Err(self.invalid(column, cell))
        }
    }
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

fn read_csv(path: &Path) -> Result<RawTable> {
    let mut reader = csv::Reader::from_reader(open(path)?);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(CellValue::from_source).collect());
    }

    Ok(RawTable { headers, rows })
}

// ---------------------------------------------------------------------------
// JSON reader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
/// A key missing from some objects reads as null for those rows.
fn read_json(path: &Path) -> Result<RawTable> {
    let root: JsonValue = serde_json::from_reader(BufReader::new(open(path)?))?;
    let records = root
        .as_array()
        .ok_or_else(|| DataLoadError::Layout("expected a top-level JSON array".into()))?;

    let mut headers: Vec<String> = Vec::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| DataLoadError::Layout(format!("row {} is not a JSON object", i + 1)))?;
        for key in obj.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .filter_map(|rec| rec.as_object())
        .map(|obj| {
            headers
                .iter()
                .map(|h| obj.get(h).map(json_to_cell).unwrap_or(CellValue::Null))
                .collect()
        })
        .collect();

    Ok(RawTable { headers, rows })
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::from_source(s),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet reader
// ---------------------------------------------------------------------------

/// Flat Parquet file as written by `df.to_parquet()` or `generate_sample`.
fn read_parquet(path: &Path) -> Result<RawTable> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?.build()?;

    let mut raw = RawTable::default();
    for batch in reader {
        let batch = batch?;
        if raw.headers.is_empty() {
            raw.headers = batch
                .schema()
                .fields()
                .iter()
                .map(|f| f.name().clone())
                .collect();
        }
        for row in 0..batch.num_rows() {
            let cells = batch
                .columns()
                .iter()
                .map(|col| arrow_cell(col, row))
                .collect::<Result<Vec<_>>>()?;
            raw.rows.push(cells);
        }
    }

    Ok(raw)
}

/// Extract a single cell from an Arrow column at a given row.
fn arrow_cell(col: &ArrayRef, row: usize) -> Result<CellValue> {
    if col.is_null(row) {
        return Ok(CellValue::Null);
    }
    let cell = match col.data_type() {
        DataType::Utf8 => CellValue::from_source(col.as_string::<i32>().value(row)),
        DataType::LargeUtf8 => CellValue::from_source(col.as_string::<i64>().value(row)),
        DataType::Boolean => CellValue::Bool(col.as_boolean().value(row)),
        DataType::Int16 => CellValue::Integer(col.as_primitive::<Int16Type>().value(row) as i64),
        DataType::Int32 => CellValue::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => CellValue::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => CellValue::Float(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => CellValue::Float(col.as_primitive::<Float64Type>().value(row)),
        other => {
            return Err(DataLoadError::Layout(format!(
                "unsupported Parquet column type {other:?}"
            )))
        }
    };
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{BooleanArray, Date32Array, Float64Array, Int32Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    const HEADER: &str = "id,Name,Generation,Type_1,Type_2,Is_Legendary,Is_Mythical,Is_Pseudo_Legendary,\
HP,Attack,Defense,Sp.Atk,Sp.Def,Speed,Total_Stats,Height(m),Weight{kg},Capture_Rate,Is_Baby";

    fn write_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    fn csv_with(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        write_file(".csv", &text)
    }

    #[test]
    fn loads_csv_and_drops_metadata_columns() {
        let file = csv_with(&[
            "1,Bulbasaur,1,Grass,Poison,False,False,False,45,49,49,65,65,45,318,0.7,6.9,45,False",
            "4,Charmander,1,Fire,,False,False,False,39,52,43,60,50,65,309,0.6,8.5,45,False",
        ]);
        let table = load_file(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.extra_columns, vec!["Name".to_string()]);

        let bulbasaur = &table.records[0];
        assert_eq!(bulbasaur.type_2.as_deref(), Some("Poison"));
        assert_eq!(bulbasaur.stats.total, Some(318.0));
        assert_eq!(bulbasaur.height_m, Some(0.7));
        assert_eq!(
            bulbasaur.extra.get("Name"),
            Some(&CellValue::String("Bulbasaur".into()))
        );
        assert!(!bulbasaur.extra.contains_key("Capture_Rate"));

        let charmander = &table.records[1];
        assert_eq!(charmander.type_2, None);
        assert_eq!(charmander.generation, "1");
    }

    #[test]
    fn empty_numeric_cell_is_null() {
        let file = csv_with(&["7,Squirtle,1,Water,,False,False,False,44,48,65,50,64,43,314,,9.0,45,False"]);
        let table = load_file(file.path()).unwrap();
        assert_eq!(table.records[0].height_m, None);
        assert_eq!(table.records[0].weight_kg, Some(9.0));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_file(Path::new("/nonexistent/pokedata.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }), "{err}");
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let file = write_file(".csv", "id,Type_1\n1,Fire\n");
        let err = load_file(file.path()).unwrap_err();
        match err {
            DataLoadError::MissingColumn(col) => assert_eq!(col, "Type_2"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unparseable_number_rejects_the_load() {
        let file = csv_with(&["1,Bulbasaur,1,Grass,Poison,False,False,False,lots,49,49,65,65,45,318,0.7,6.9,45,False"]);
        let err = load_file(file.path()).unwrap_err();
        match err {
            DataLoadError::InvalidValue { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "HP");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_flag_and_empty_primary_type_are_rejected() {
        let file = csv_with(&["1,Bulbasaur,1,Grass,,maybe,False,False,45,49,49,65,65,45,318,0.7,6.9,45,False"]);
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DataLoadError::InvalidValue { .. }
        ));

        let file = csv_with(&["1,Bulbasaur,1,,,False,False,False,45,49,49,65,65,45,318,0.7,6.9,45,False"]);
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DataLoadError::MissingValue { .. }
        ));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let file = csv_with(&[
            "1,Bulbasaur,1,Grass,,False,False,False,45,49,49,65,65,45,318,0.7,6.9,45,False",
            "1,Ivysaur,1,Grass,,False,False,False,60,62,63,80,80,60,405,1.0,13.0,45,False",
        ]);
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DataLoadError::DuplicateId { row: 2, id: 1 }
        ));
    }

    #[test]
    fn ragged_csv_is_malformed() {
        let file = csv_with(&["1,Bulbasaur,1"]);
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DataLoadError::Csv(_)
        ));
    }

    #[test]
    fn loads_records_oriented_json() {
        let file = write_file(
            ".json",
            r#"[{"id":150,"Type_1":"Psychic","Type_2":null,"Generation":1,
                "Is_Legendary":true,"Is_Mythical":false,"Is_Pseudo_Legendary":false,
                "HP":106,"Attack":110,"Defense":90,"Sp.Atk":154,"Sp.Def":90,"Speed":130,
                "Total_Stats":680,"Height(m)":2.0,"Weight{kg}":122.0,"Past_Type":null}]"#,
        );
        let table = load_file(file.path()).unwrap();
        let mewtwo = &table.records[0];
        assert!(mewtwo.is_legendary);
        assert!(mewtwo.is_restricted());
        assert_eq!(mewtwo.type_2, None);
        assert_eq!(mewtwo.generation, "1");
        assert!(table.extra_columns.is_empty());
    }

    #[test]
    fn json_extra_columns_keep_key_order() {
        let file = write_file(
            ".json",
            r#"[{"id":25,"Zeta":"z","Type_1":"Electric","Type_2":null,"Generation":"1",
                "Is_Legendary":false,"Is_Mythical":false,"Is_Pseudo_Legendary":false,
                "HP":35,"Attack":55,"Defense":40,"Sp.Atk":50,"Sp.Def":50,"Speed":90,
                "Total_Stats":320,"Height(m)":0.4,"Weight{kg}":6.0,"Alpha":"a"}]"#,
        );
        let table = load_file(file.path()).unwrap();
        assert_eq!(table.extra_columns, vec!["Zeta".to_string(), "Alpha".to_string()]);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = write_file(".xlsx", "");
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DataLoadError::UnsupportedExtension(ext) if ext == "xlsx"
        ));
    }

    #[test]
    fn text_columns_keep_their_source_spelling() {
        let file = csv_with(&[
            "1,Bulbasaur,01,Grass,TRUE,False,False,False,45,49,49,65,65,45,318,0.7,6.9,45,False",
            "2,Ivysaur,1e1,Grass,Poison,False,False,False,60,62,63,80,80,60,405,1.0,13.0,45,False",
        ]);
        let table = load_file(file.path()).unwrap();
        assert_eq!(table.records[0].generation, "01");
        assert_eq!(table.records[0].type_2.as_deref(), Some("TRUE"));
        assert_eq!(table.records[1].generation, "1e1");
    }

    #[test]
    fn missing_value_markers_read_as_null() {
        let mut rows = Vec::new();
        for (i, marker) in ["NaN", "nan", "NA", "N/A", "null", "<NA>"].iter().enumerate() {
            rows.push(format!(
                "{},Mon,1,Normal,,False,False,False,50,50,50,50,50,50,300,{marker},10.0,45,False",
                i + 1
            ));
        }
        rows.push("7,Mon,1,Normal,,False,False,False,50,50,50,50,50,50,300,2.0,10.0,45,False".into());
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();

        let table = load_file(csv_with(&rows).path()).unwrap();
        let heights: Vec<Option<f64>> = table.records.iter().map(|r| r.height_m).collect();
        assert_eq!(heights[..6], [None; 6]);
        assert_eq!(heights[6], Some(2.0));

        let metrics = crate::data::stats::summary_metrics(&table);
        assert_eq!(metrics.mean_height_m, Some(2.0));
    }

    #[test]
    fn infinite_number_rejects_the_load() {
        for bad in ["inf", "-inf", "infinity", "NAN"] {
            let row = format!(
                "1,Mon,1,Normal,,False,False,False,50,50,50,50,50,50,300,{bad},10.0,45,False"
            );
            let err = load_file(csv_with(&[row.as_str()]).path()).unwrap_err();
            match err {
                DataLoadError::InvalidValue { column, value, .. } => {
                    assert_eq!(column, "Height(m)");
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error for {bad}: {other}"),
            }
        }
    }

    fn write_parquet(extra: Option<(Field, ArrayRef)>) -> tempfile::NamedTempFile {
        let mut columns: Vec<(Field, ArrayRef)> = vec![
            (Field::new("id", DataType::Int64, false), Arc::new(Int64Array::from(vec![1, 4]))),
            (
                Field::new("Name", DataType::Utf8, false),
                Arc::new(StringArray::from(vec!["Bulbasaur", "Charmander"])),
            ),
            (Field::new("Generation", DataType::Int64, false), Arc::new(Int64Array::from(vec![1, 1]))),
            (
                Field::new("Type_1", DataType::Utf8, false),
                Arc::new(StringArray::from(vec!["Grass", "Fire"])),
            ),
            (
                Field::new("Type_2", DataType::Utf8, true),
                Arc::new(StringArray::from(vec![Some("Poison"), None])),
            ),
        ];
        for flag in [IS_LEGENDARY, IS_MYTHICAL, IS_PSEUDO_LEGENDARY] {
            columns.push((
                Field::new(flag, DataType::Boolean, false),
                Arc::new(BooleanArray::from(vec![false, false])),
            ));
        }
        for stat in StatColumn::ALL {
            columns.push((
                Field::new(stat.header(), DataType::Int32, false),
                Arc::new(Int32Array::from(vec![45, 39])),
            ));
        }
        columns.push((
            Field::new(HEIGHT, DataType::Float64, true),
            Arc::new(Float64Array::from(vec![0.7, f64::NAN])),
        ));
        columns.push((
            Field::new(WEIGHT, DataType::Float64, true),
            Arc::new(Float64Array::from(vec![Some(6.9), None])),
        ));
        columns.push((
            Field::new("Past_Type", DataType::Utf8, true),
            Arc::new(StringArray::from(vec![None::<&str>, None])),
        ));
        columns.extend(extra);

        let schema = Arc::new(Schema::new(
            columns.iter().map(|(f, _)| f.clone()).collect::<Vec<_>>(),
        ));
        let batch =
            RecordBatch::try_new(schema.clone(), columns.into_iter().map(|(_, a)| a).collect())
                .unwrap();

        let file = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(file.reopen().unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();
        file
    }

    #[test]
    fn loads_parquet_columns() {
        let file = write_parquet(None);
        let table = load_file(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.extra_columns, vec!["Name".to_string()]);

        let bulbasaur = &table.records[0];
        assert_eq!(bulbasaur.generation, "1");
        assert_eq!(bulbasaur.type_2.as_deref(), Some("Poison"));
        assert_eq!(bulbasaur.stats.hp, Some(45.0));
        assert_eq!(bulbasaur.height_m, Some(0.7));

        let charmander = &table.records[1];
        assert_eq!(charmander.type_2, None);
        assert_eq!(charmander.height_m, None);
        assert_eq!(charmander.weight_kg, None);
        assert!(!charmander.is_restricted());
    }

    #[test]
    fn unsupported_parquet_type_is_a_layout_error() {
        let caught_on: ArrayRef = Arc::new(Date32Array::from(vec![19000, 19001]));
        let file = write_parquet(Some((
            Field::new("Caught_On", DataType::Date32, false),
            caught_on,
        )));
        assert!(matches!(
            load_file(file.path()).unwrap_err(),
            DataLoadError::Layout(_)
        ));
    }
}
