use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::secondary_label;
use crate::data::model::{PokemonTable, Record, StatColumn};
use crate::data::stats::{ColumnSummary, SummaryMetrics};

const NO_DATA: &str = "no data";

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| NO_DATA.to_string(), |v| format!("{v:.2}"))
}

// ---------------------------------------------------------------------------
// Metric tiles
// ---------------------------------------------------------------------------

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(label);
        ui.label(RichText::new(value).size(26.0).strong());
    });
}

pub fn summary_tiles(ui: &mut Ui, summary: &SummaryMetrics) {
    ui.columns(4, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Pokémon", summary.count.to_string());
        metric(&mut cols[1], "Average Height (m)", fmt_opt(summary.mean_height_m));
        metric(&mut cols[2], "Average Weight (kg)", fmt_opt(summary.mean_weight_kg));
        metric(&mut cols[3], "Average Stats Total", fmt_opt(summary.mean_total_stats));
    });
}

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

pub fn describe_table(ui: &mut Ui, rows: &[ColumnSummary]) {
    const HEADERS: [&str; 9] = ["", "count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    ui.push_id("describe_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(80.0))
            .columns(Column::auto().at_least(64.0), HEADERS.len() - 1)
            .header(20.0, |mut header| {
                for h in HEADERS {
                    header.col(|ui: &mut Ui| {
                        ui.strong(h);
                    });
                }
            })
            .body(|mut body| {
                for s in rows {
                    body.row(18.0, |mut row| {
                        let cells = [
                            s.column.header().to_string(),
                            s.count.to_string(),
                            fmt_opt(s.mean),
                            fmt_opt(s.std),
                            fmt_opt(s.min),
                            fmt_opt(s.q25),
                            fmt_opt(s.median),
                            fmt_opt(s.q75),
                            fmt_opt(s.max),
                        ];
                        for cell in cells {
                            row.col(|ui: &mut Ui| {
                                ui.label(cell);
                            });
                        }
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Raw filtered data
// ---------------------------------------------------------------------------

fn num(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

fn record_cells(r: &Record, extra_columns: &[String]) -> Vec<String> {
    let mut cells = vec![r.id.to_string()];
    cells.extend(
        extra_columns
            .iter()
            .map(|c| r.extra.get(c).map(|v| v.to_string()).unwrap_or_default()),
    );
    cells.extend([
        r.generation.clone(),
        r.type_1.clone(),
        secondary_label(&r.type_2).to_string(),
        r.is_legendary.to_string(),
        r.is_mythical.to_string(),
        r.is_pseudo_legendary.to_string(),
    ]);
    cells.extend(StatColumn::ALL.iter().map(|c| num(c.get(&r.stats))));
    cells.push(num(r.height_m));
    cells.push(num(r.weight_kg));
    cells
}

fn record_headers(extra_columns: &[String]) -> Vec<String> {
    let mut headers = vec!["id".to_string()];
    headers.extend(extra_columns.iter().cloned());
    headers.extend(
        [
            "Generation",
            "Type_1",
            "Type_2",
            "Is_Legendary",
            "Is_Mythical",
            "Is_Pseudo_Legendary",
        ]
        .map(String::from),
    );
    headers.extend(StatColumn::ALL.iter().map(|c| c.header().to_string()));
    headers.push("Height(m)".to_string());
    headers.push("Weight{kg}".to_string());
    headers
}

pub fn filtered_data_table(ui: &mut Ui, view: &PokemonTable) {
    let headers = record_headers(&view.extra_columns);

    ui.push_id("filtered_data_table", |ui: &mut Ui| {
        egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .max_scroll_height(400.0)
                .columns(Column::auto().at_least(48.0), headers.len())
                .header(20.0, |mut header| {
                    for h in &headers {
                        header.col(|ui: &mut Ui| {
                            ui.strong(h);
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, view.len(), |mut row| {
                        let r = &view.records[row.index()];
                        for cell in record_cells(r, &view.extra_columns) {
                            row.col(|ui: &mut Ui| {
                                ui.label(cell);
                            });
                        }
                    });
                });
        });
    });
}
