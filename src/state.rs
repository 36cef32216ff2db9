use std::path::Path;

use crate::color::ColorMap;
use crate::data::dashboard::DashboardView;
use crate::data::filter::{build_filter_options, FilterOptions, FilterSelection};
use crate::data::source::CachedDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is opened).
    pub dataset: Option<CachedDataset>,

    /// Combo-box contents derived from the dataset.
    pub options: FilterOptions,

    /// Current filter selection, edited by the side panel.
    pub selection: FilterSelection,

    /// Pipeline output for `view_selection` (cached).
    pub view: Option<DashboardView>,
    view_selection: Option<FilterSelection>,

    /// One bar colour per type, stable across filter changes.
    pub type_colors: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Open a dataset file. On failure the current dataset stays loaded.
    pub fn open(&mut self, path: &Path) {
        match CachedDataset::open(path) {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and reset filters.
    pub fn set_dataset(&mut self, dataset: CachedDataset) {
        self.selection = FilterSelection::default();
        self.dataset = Some(dataset);
        self.status_message = None;
        self.rebuild_from_table();
    }

    /// Re-read the source if it changed on disk.
    pub fn reload(&mut self) {
        let Some(dataset) = self.dataset.as_mut() else {
            return;
        };
        match dataset.refresh() {
            Ok(true) => {
                self.status_message = None;
                self.rebuild_from_table();
            }
            Ok(false) => self.status_message = Some("Source unchanged".to_string()),
            Err(e) => {
                log::error!("Failed to reload {}: {e}", dataset.path().display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    fn rebuild_from_table(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        let table = dataset.table();
        self.options = build_filter_options(table);
        self.type_colors = Some(ColorMap::new(
            table
                .records
                .iter()
                .flat_map(|r| std::iter::once(&r.type_1).chain(r.type_2.as_ref())),
        ));
        self.view = None;
        self.view_selection = None;
        self.refresh_view();
    }

    /// Clear every constraint.
    pub fn reset_filters(&mut self) {
        self.selection = FilterSelection::default();
        self.refresh_view();
    }

    /// Recompute the dashboard view if the selection moved since last time.
    pub fn refresh_view(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        if self.view.is_some() && self.view_selection.as_ref() == Some(&self.selection) {
            return;
        }
        self.view = Some(DashboardView::compute(dataset.table(), &self.selection));
        self.view_selection = Some(self.selection.clone());
    }

    /// Records in the source table.
    pub fn total_records(&self) -> usize {
        self.dataset.as_ref().map_or(0, |d| d.table().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::Choice;
    use std::io::Write;

    fn sample_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(
            file,
            "id,Type_1,Type_2,Generation,Is_Legendary,Is_Mythical,Is_Pseudo_Legendary,\
HP,Attack,Defense,Sp.Atk,Sp.Def,Speed,Total_Stats,Height(m),Weight{{kg}}"
        )
        .unwrap();
        writeln!(file, "1,Fire,,1,False,False,False,39,52,43,60,50,65,309,0.6,8.5").unwrap();
        writeln!(file, "2,Water,Ice,1,True,False,False,130,85,80,85,95,60,535,2.5,220.0").unwrap();
        writeln!(file, "3,Fire,Flying,1,False,False,False,78,84,78,109,85,100,534,1.7,90.5").unwrap();
        file
    }

    #[test]
    fn opening_builds_options_and_view() {
        let file = sample_file();
        let mut state = AppState::default();
        state.open(file.path());

        assert!(state.status_message.is_none());
        assert_eq!(state.total_records(), 3);
        assert_eq!(state.options.primary_type.len(), 3);
        assert_eq!(state.view.as_ref().map(|v| v.summary.count), Some(3));
    }

    #[test]
    fn selection_change_recomputes_the_view() {
        let file = sample_file();
        let mut state = AppState::default();
        state.open(file.path());

        state.selection.primary_type = Choice::Is("Fire".into());
        state.refresh_view();
        assert_eq!(state.view.as_ref().map(|v| v.summary.count), Some(2));

        state.reset_filters();
        assert_eq!(state.view.as_ref().map(|v| v.summary.count), Some(3));
    }

    #[test]
    fn failed_open_keeps_existing_dataset() {
        let file = sample_file();
        let mut state = AppState::default();
        state.open(file.path());
        state.open(Path::new("/nonexistent/pokedata.csv"));

        assert_eq!(state.total_records(), 3);
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Error:")));
    }
}
