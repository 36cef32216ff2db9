use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

/// Sequential white-to-blue scale for the heatmap; `t` in `[0, 1]`.
pub fn blues(t: f32) -> Color32 {
    let light: LinSrgb = Srgb::new(0.97_f32, 0.98, 1.0).into_linear();
    let dark: LinSrgb = Srgb::new(0.03_f32, 0.19, 0.42).into_linear();
    let mixed = light.mix(dark, t.clamp(0.0, 1.0));
    to_color32(Srgb::from_linear(mixed))
}

/// Text colour that stays readable on a `blues(t)` cell.
pub fn label_on_blues(t: f32) -> Color32 {
    if t > 0.5 {
        Color32::WHITE
    } else {
        Color32::from_rgb(8, 48, 107)
    }
}

// ---------------------------------------------------------------------------
// Color mapping: type name → Color32
// ---------------------------------------------------------------------------

/// Maps each type name to a distinct colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from every name observed (duplicates ignored).
    pub fn new<'a>(names: impl IntoIterator<Item = &'a String>) -> Self {
        let mut mapping: BTreeMap<String, Color32> =
            names.into_iter().map(|n| (n.clone(), Color32::GRAY)).collect();
        let palette = generate_palette(mapping.len());
        for (slot, c) in mapping.values_mut().zip(palette) {
            *slot = c;
        }

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given type name.
    pub fn color_for(&self, name: &str) -> Color32 {
        self.mapping
            .get(name)
            .copied()
            .unwrap_or(self.default_color)
    }
}
