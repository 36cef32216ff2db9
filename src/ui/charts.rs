use std::collections::BTreeMap;

use eframe::egui::{self, Align2, Color32, FontId, Rect, Sense, Ui, Vec2};
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};

use crate::color::{blues, label_on_blues, ColorMap};
use crate::data::aggregate::TypeRestrictedMatrix;

const ROW_HEIGHT: f32 = 22.0;
const LABEL_WIDTH: f32 = 90.0;
const CELL_WIDTH: f32 = 120.0;

// ---------------------------------------------------------------------------
// Heatmap: type × restricted
// ---------------------------------------------------------------------------

/// Paint the Type vs Restricted count matrix with counts in every cell.
pub fn type_restricted_heatmap(ui: &mut Ui, matrix: &TypeRestrictedMatrix) {
    if matrix.is_empty() {
        ui.label("No data for the current filters.");
        return;
    }

    let max = matrix.max_cell().max(1) as f32;
    let size = Vec2::new(
        LABEL_WIDTH + 2.0 * CELL_WIDTH,
        ROW_HEIGHT * (matrix.rows.len() + 1) as f32,
    );
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let origin = response.rect.min;
    let text_color = ui.visuals().text_color();
    let font = FontId::proportional(13.0);

    for (col, restricted) in [false, true].into_iter().enumerate() {
        let x = origin.x + LABEL_WIDTH + col as f32 * CELL_WIDTH;
        painter.text(
            egui::pos2(x + CELL_WIDTH / 2.0, origin.y + ROW_HEIGHT / 2.0),
            Align2::CENTER_CENTER,
            format!("Restricted = {restricted}"),
            font.clone(),
            text_color,
        );
    }

    for (row, (type_name, counts)) in matrix.rows.iter().enumerate() {
        let y = origin.y + (row + 1) as f32 * ROW_HEIGHT;
        painter.text(
            egui::pos2(origin.x + LABEL_WIDTH - 6.0, y + ROW_HEIGHT / 2.0),
            Align2::RIGHT_CENTER,
            type_name,
            font.clone(),
            text_color,
        );

        for (col, restricted) in [false, true].into_iter().enumerate() {
            let count = counts.get(restricted);
            let t = count as f32 / max;
            let rect = Rect::from_min_size(
                egui::pos2(origin.x + LABEL_WIDTH + col as f32 * CELL_WIDTH, y),
                Vec2::new(CELL_WIDTH, ROW_HEIGHT),
            )
            .shrink(1.0);
            painter.rect_filled(rect, 2.0, blues(t));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                count.to_string(),
                font.clone(),
                label_on_blues(t),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Bar chart: total per type
// ---------------------------------------------------------------------------

/// One coloured bar per type, labelled with its count.
pub fn per_type_bar_chart(ui: &mut Ui, counts: &BTreeMap<String, usize>, colors: Option<&ColorMap>) {
    if counts.is_empty() {
        ui.label("No data for the current filters.");
        return;
    }

    let names: Vec<String> = counts.keys().cloned().collect();
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, (name, &n))| {
            let fill = colors.map_or(Color32::LIGHT_BLUE, |c| c.color_for(name));
            Bar::new(i as f64, n as f64).name(name).fill(fill).width(0.7)
        })
        .collect();

    Plot::new("per_type_bar_chart")
        .height(320.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .y_axis_label("Total Pokémon")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > f64::EPSILON || i < 0.0 {
                return String::new();
            }
            names.get(i as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for (i, &n) in counts.values().enumerate() {
                plot_ui.text(
                    Text::new(PlotPoint::new(i as f64, n as f64), n.to_string())
                        .anchor(Align2::CENTER_BOTTOM),
                );
            }
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
