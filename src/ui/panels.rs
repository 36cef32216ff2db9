use std::fmt::Display;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::Choice;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// One combo box bound to a single `Choice`. Returns true on change.
fn choice_combo<T>(ui: &mut Ui, label: &str, current: &mut Choice<T>, options: &[Choice<T>]) -> bool
where
    T: Clone + PartialEq,
    Choice<T>: Display,
{
    let mut changed = false;
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(current.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for opt in options {
                changed |= ui
                    .selectable_value(current, opt.clone(), opt.to_string())
                    .changed();
            }
        });
    ui.add_space(4.0);
    changed
}

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    let options = state.options.clone();
    let sel = &mut state.selection;
    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            changed |= choice_combo(ui, "Primary Type", &mut sel.primary_type, &options.primary_type);
            changed |= choice_combo(
                ui,
                "Secondary Type",
                &mut sel.secondary_type,
                &options.secondary_type,
            );
            changed |= choice_combo(ui, "Legendary", &mut sel.legendary, &options.legendary);
            changed |= choice_combo(ui, "Mythical", &mut sel.mythical, &options.mythical);
            changed |= choice_combo(
                ui,
                "Pseudo-Legendary",
                &mut sel.pseudo_legendary,
                &options.pseudo_legendary,
            );
            changed |= choice_combo(ui, "Generation", &mut sel.generation, &options.generation);

            ui.separator();
            if ui
                .add_enabled(!sel.is_unconstrained(), egui::Button::new("Reset filters"))
                .clicked()
            {
                *sel = Default::default();
                changed = true;
            }
        });

    if changed {
        state.refresh_view();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let visible = state.view.as_ref().map_or(0, |v| v.filtered.len());
            ui.label(format!(
                "{}: {} records loaded, {} visible",
                ds.path().display(),
                state.total_records(),
                visible
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open Pokémon data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
