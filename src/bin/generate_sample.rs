use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const TYPES: [&str; 18] = [
    "Normal", "Fire", "Water", "Grass", "Electric", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            // splitmix64
            x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = x;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            *slot = z ^ (z >> 31);
        }
        Self { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    fn stat(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_f64() * (hi - lo) as f64) as i64
    }
}

/// One row with the full source column set, including the columns the
/// dashboard drops at load time.
#[derive(Debug, Serialize)]
struct Row {
    id: i64,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Generation")]
    generation: i64,
    #[serde(rename = "Type_1")]
    type_1: String,
    #[serde(rename = "Type_2")]
    type_2: Option<String>,
    #[serde(rename = "Is_Legendary")]
    is_legendary: bool,
    #[serde(rename = "Is_Mythical")]
    is_mythical: bool,
    #[serde(rename = "Is_Pseudo_Legendary")]
    is_pseudo_legendary: bool,
    #[serde(rename = "HP")]
    hp: i64,
    #[serde(rename = "Attack")]
    attack: i64,
    #[serde(rename = "Defense")]
    defense: i64,
    #[serde(rename = "Sp.Atk")]
    sp_atk: i64,
    #[serde(rename = "Sp.Def")]
    sp_def: i64,
    #[serde(rename = "Speed")]
    speed: i64,
    #[serde(rename = "Total_Stats")]
    total_stats: i64,
    #[serde(rename = "Height(m)")]
    height_m: f64,
    #[serde(rename = "Weight{kg}")]
    weight_kg: f64,
    #[serde(rename = "Capture_Rate")]
    capture_rate: i64,
    #[serde(rename = "Base_Happiness")]
    base_happiness: i64,
    #[serde(rename = "Is_Baby")]
    is_baby: bool,
    #[serde(rename = "Egg_Cycles")]
    egg_cycles: i64,
    #[serde(rename = "Past_Type")]
    past_type: Option<String>,
}

fn generate_rows(rng: &mut SimpleRng, per_generation: i64) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut id = 1;
    for generation in 1..=9 {
        for _ in 0..per_generation {
            let type_1 = TYPES[rng.below(TYPES.len())];
            let type_2 = rng
                .chance(0.5)
                .then(|| TYPES[rng.below(TYPES.len())])
                .filter(|t| *t != type_1);

            let is_legendary = rng.chance(0.05);
            let is_mythical = !is_legendary && rng.chance(0.03);
            let is_pseudo_legendary = !is_legendary && !is_mythical && rng.chance(0.02);
            let strong = is_legendary || is_mythical || is_pseudo_legendary;
            let (lo, hi) = if strong { (80, 150) } else { (20, 110) };

            let stats: [i64; 6] = std::array::from_fn(|_| rng.stat(lo, hi));
            let height_m = (rng.next_f64() * 3.0 * 10.0).round() / 10.0 + 0.1;

            rows.push(Row {
                id,
                name: format!("Mon{id:04}"),
                generation,
                type_1: type_1.to_string(),
                type_2: type_2.map(str::to_string),
                is_legendary,
                is_mythical,
                is_pseudo_legendary,
                hp: stats[0],
                attack: stats[1],
                defense: stats[2],
                sp_atk: stats[3],
                sp_def: stats[4],
                speed: stats[5],
                total_stats: stats.iter().sum(),
                height_m,
                weight_kg: (height_m * rng.stat(10, 80) as f64 * 10.0).round() / 10.0,
                capture_rate: if strong { 3 } else { 45 },
                base_happiness: 50,
                is_baby: !strong && rng.chance(0.04),
                egg_cycles: if strong { 120 } else { 20 },
                past_type: None,
            });
            id += 1;
        }
    }
    rows
}

fn write_csv(path: &str, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &str, rows: &[Row]) -> Result<()> {
    let int = |f: fn(&Row) -> i64| -> ArrayRef { Arc::new(Int64Array::from_iter_values(rows.iter().map(f))) };
    let float = |f: fn(&Row) -> f64| -> ArrayRef { Arc::new(Float64Array::from_iter_values(rows.iter().map(f))) };
    let flag = |f: fn(&Row) -> bool| -> ArrayRef {
        Arc::new(BooleanArray::from(rows.iter().map(f).collect::<Vec<_>>()))
    };

    let columns: Vec<(&str, DataType, bool, ArrayRef)> = vec![
        ("id", DataType::Int64, false, int(|r| r.id)),
        (
            "Name",
            DataType::Utf8,
            false,
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.name.as_str()))),
        ),
        ("Generation", DataType::Int64, false, int(|r| r.generation)),
        (
            "Type_1",
            DataType::Utf8,
            false,
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.type_1.as_str()))),
        ),
        (
            "Type_2",
            DataType::Utf8,
            true,
            Arc::new(rows.iter().map(|r| r.type_2.as_deref()).collect::<StringArray>()),
        ),
        ("Is_Legendary", DataType::Boolean, false, flag(|r| r.is_legendary)),
        ("Is_Mythical", DataType::Boolean, false, flag(|r| r.is_mythical)),
        ("Is_Pseudo_Legendary", DataType::Boolean, false, flag(|r| r.is_pseudo_legendary)),
        ("HP", DataType::Int64, false, int(|r| r.hp)),
        ("Attack", DataType::Int64, false, int(|r| r.attack)),
        ("Defense", DataType::Int64, false, int(|r| r.defense)),
        ("Sp.Atk", DataType::Int64, false, int(|r| r.sp_atk)),
        ("Sp.Def", DataType::Int64, false, int(|r| r.sp_def)),
        ("Speed", DataType::Int64, false, int(|r| r.speed)),
        ("Total_Stats", DataType::Int64, false, int(|r| r.total_stats)),
        ("Height(m)", DataType::Float64, false, float(|r| r.height_m)),
        ("Weight{kg}", DataType::Float64, false, float(|r| r.weight_kg)),
        ("Capture_Rate", DataType::Int64, false, int(|r| r.capture_rate)),
        ("Base_Happiness", DataType::Int64, false, int(|r| r.base_happiness)),
        ("Is_Baby", DataType::Boolean, false, flag(|r| r.is_baby)),
        ("Egg_Cycles", DataType::Int64, false, int(|r| r.egg_cycles)),
        (
            "Past_Type",
            DataType::Utf8,
            true,
            Arc::new(rows.iter().map(|r| r.past_type.as_deref()).collect::<StringArray>()),
        ),
    ];

    let schema = Arc::new(Schema::new(
        columns
            .iter()
            .map(|(name, ty, nullable, _)| Field::new(*name, ty.clone(), *nullable))
            .collect::<Vec<_>>(),
    ));
    let arrays = columns.into_iter().map(|(_, _, _, a)| a).collect();
    let batch = RecordBatch::try_new(schema.clone(), arrays).context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating Parquet writer")?;
    writer.write(&batch).context("writing Parquet batch")?;
    writer.close().context("closing Parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate_rows(&mut rng, 40);

    write_csv("pokedata.csv", &rows)?;
    write_parquet("pokedata.parquet", &rows)?;

    println!(
        "Wrote {} Pokémon to pokedata.csv and pokedata.parquet",
        rows.len()
    );
    Ok(())
}
