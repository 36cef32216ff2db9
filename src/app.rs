use eframe::egui::{self, ScrollArea, Ui};

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{charts, panels, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PokeDashApp {
    pub state: AppState,
}

impl PokeDashApp {
    pub fn new(config: &DashboardConfig) -> Self {
        let mut app = Self::default();
        if let Some(path) = &config.data_path {
            app.state.open(path);
        }
        app
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    let Some(view) = &state.view else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a Pokémon table to begin  (File → Open…)");
        });
        return;
    };

    ui.heading("Gen 1-9 Pokémon Stats Interactive Dashboard");
    ui.add_space(6.0);
    tables::summary_tiles(ui, &view.summary);
    ui.separator();

    ui.heading("Descriptive Statistics");
    tables::describe_table(ui, &view.describe);
    ui.separator();

    ui.heading("Pokémon Type vs Restricted Status");
    charts::type_restricted_heatmap(ui, &view.type_matrix);
    ui.separator();

    ui.heading("Total Pokémon per Type");
    charts::per_type_bar_chart(ui, &view.per_type, state.type_colors.as_ref());
    ui.separator();

    egui::CollapsingHeader::new("View filtered data")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            tables::filtered_data_table(ui, &view.filtered);
        });
}

impl eframe::App for PokeDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| dashboard(ui, &self.state));
        });
    }
}
