use std::collections::BTreeMap;

use super::aggregate::{
    count_by_type, count_by_type_and_restricted, derive_restricted, long_form_types,
    TypeRestrictedMatrix,
};
use super::filter::{apply_filters, FilterSelection};
use super::model::PokemonTable;
use super::stats::{describe, summary_metrics, ColumnSummary, SummaryMetrics};

/// Everything the UI draws for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub filtered: PokemonTable,
    pub summary: SummaryMetrics,
    pub describe: Vec<ColumnSummary>,
    pub type_matrix: TypeRestrictedMatrix,
    pub per_type: BTreeMap<String, usize>,
}

impl DashboardView {
    /// Run the whole pipeline: filter, summarise, reshape, count.
    pub fn compute(table: &PokemonTable, selection: &FilterSelection) -> Self {
        let filtered = apply_filters(table, selection);
        let entries = long_form_types(&derive_restricted(&filtered));
        log::debug!(
            "{} of {} records pass the filters ({} type rows)",
            filtered.len(),
            table.len(),
            entries.len()
        );
        DashboardView {
            summary: summary_metrics(&filtered),
            describe: describe(&filtered),
            type_matrix: count_by_type_and_restricted(&entries),
            per_type: count_by_type(&entries),
            filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::Choice;
    use crate::data::model::fixtures::fire_water_table;

    #[test]
    fn pipeline_over_fire_filter() {
        let table = fire_water_table();
        let selection = FilterSelection {
            primary_type: Choice::Is("Fire".into()),
            ..Default::default()
        };
        let view = DashboardView::compute(&table, &selection);

        assert_eq!(view.summary.count, 2);
        assert_eq!(view.per_type.get("Fire"), Some(&2));
        assert_eq!(view.per_type.get("Flying"), Some(&1));
        assert!(!view.per_type.contains_key("Water"));
        assert_eq!(view.type_matrix.rows["Fire"].restricted, 0);
    }

    #[test]
    fn empty_result_renders_empty_tables() {
        let table = fire_water_table();
        let selection = FilterSelection {
            generation: Choice::Is("9".into()),
            ..Default::default()
        };
        let view = DashboardView::compute(&table, &selection);

        assert!(view.filtered.is_empty());
        assert_eq!(view.summary, SummaryMetrics::default());
        assert!(view.describe.iter().all(|c| c.count == 0 && c.mean.is_none()));
        assert!(view.type_matrix.is_empty());
        assert!(view.per_type.is_empty());
    }
}
