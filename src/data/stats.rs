use super::model::{PokemonTable, StatColumn};

// ---------------------------------------------------------------------------
// Summary metrics – the four headline tiles
// ---------------------------------------------------------------------------

/// Headline numbers for a filtered view. A mean is `None` when there is no
/// non-null value to average.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryMetrics {
    pub count: usize,
    pub mean_height_m: Option<f64>,
    pub mean_weight_kg: Option<f64>,
    pub mean_total_stats: Option<f64>,
}

pub fn summary_metrics(view: &PokemonTable) -> SummaryMetrics {
    let records = &view.records;
    SummaryMetrics {
        count: records.len(),
        mean_height_m: mean(records.iter().filter_map(|r| r.height_m)),
        mean_weight_kg: mean(records.iter().filter_map(|r| r.weight_kg)),
        mean_total_stats: mean(records.iter().filter_map(|r| r.stats.total)),
    }
}

/// Arithmetic mean, or `None` for an empty input.
pub fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

// ---------------------------------------------------------------------------
// Descriptive statistics – one row per stat column
// ---------------------------------------------------------------------------

/// count / mean / std / min / quartiles / max over the non-null values.
///
/// `std` is the sample standard deviation and needs two values; every
/// other field is `None` only when `count` is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: StatColumn,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnSummary {
    fn from_values(column: StatColumn, mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        let count = values.len();
        let mean = mean(values.iter().copied());
        let std = match (mean, count) {
            (Some(m), n) if n > 1 => {
                let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
                Some((ss / (n - 1) as f64).sqrt())
            }
            _ => None,
        };
        ColumnSummary {
            column,
            count,
            mean,
            std,
            min: values.first().copied(),
            q25: quantile(&values, 0.25),
            median: quantile(&values, 0.5),
            q75: quantile(&values, 0.75),
            max: values.last().copied(),
        }
    }
}

/// Linear-interpolated quantile of already sorted values.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    match sorted.len() {
        0 => None,
        1 => Some(sorted[0]),
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
        }
    }
}

/// Summarise every stat column of the view, in `StatColumn::ALL` order.
pub fn describe(view: &PokemonTable) -> Vec<ColumnSummary> {
    StatColumn::ALL
        .iter()
        .map(|&col| {
            let values = view
                .records
                .iter()
                .filter_map(|r| col.get(&r.stats))
                .collect();
            ColumnSummary::from_values(col, values)
        })
        .collect()
}
