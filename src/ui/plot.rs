use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::color::{self, ColorTheme};
use crate::data::model::{PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Bill dimensions scatter plot
// ---------------------------------------------------------------------------

/// Marker radius buckets by body mass, lightest to heaviest.
fn mass_radius(mass: Option<f64>) -> f32 {
    match mass {
        Some(m) if m < 3500.0 => 2.5,
        Some(m) if m < 4750.0 => 4.0,
        Some(_) => 5.5,
        None => 2.5,
    }
}

/// Render the scatter of bill length vs bill depth for the filtered view,
/// coloured by species under the active theme and sized by body mass.
pub fn scatter_plot(ui: &mut Ui, dataset: &PenguinDataset, rows: &[usize], theme: ColorTheme) {
    if rows.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No penguins match the current filters");
        });
        return;
    }

    Plot::new("bill_scatter")
        .legend(Legend::default())
        .x_axis_label("Bill Length (mm)")
        .y_axis_label("Bill Depth (mm)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for species in &Species::known() {
                let color = color::species_color(theme, species);

                // One series per (species, size bucket); same-name series
                // share a single legend entry.
                for radius in [2.5_f32, 4.0, 5.5] {
                    let points: PlotPoints = rows
                        .iter()
                        .filter_map(|&i| {
                            let r = &dataset.records()[i];
                            if r.species != *species || mass_radius(r.body_mass_g) != radius {
                                return None;
                            }
                            Some([r.bill_length_mm?, r.bill_depth_mm?])
                        })
                        .collect();

                    plot_ui.points(
                        Points::new(points)
                            .name(species.to_string())
                            .color(color)
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(radius),
                    );
                }
            }
        });
}
