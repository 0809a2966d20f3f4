use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::{self, ColorTheme};
use crate::data::filter::{MASS_MAX, MASS_MIN, MASS_STEP};
use crate::data::metrics::{self, Metrics};
use crate::data::model::Species;
use crate::state::Session;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the sidebar filter controls.
pub fn side_panel(ui: &mut Ui, session: &mut Session) {
    ui.heading("Filter Data");
    ui.separator();

    // ---- Body-mass slider ----
    ui.strong("Body Mass (g)");
    ui.add(
        egui::Slider::new(&mut session.filters.max_body_mass, MASS_MIN..=MASS_MAX)
            .step_by(MASS_STEP)
            .suffix(" g"),
    );
    ui.add_space(8.0);

    // ---- Species checkboxes ----
    ui.strong("Select Species");
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            session.select_all_species();
        }
        if ui.small_button("None").clicked() {
            session.select_no_species();
        }
    });

    let theme = session.filters.color_theme;
    for species in Species::known() {
        let mut checked = session.filters.species.contains(&species);
        let label =
            RichText::new(species.to_string()).color(color::species_color(theme, &species));
        if ui.checkbox(&mut checked, label).changed() {
            session.toggle_species(&species);
        }
    }
    ui.add_space(8.0);

    // ---- Colour theme selector ----
    ui.strong("Color Theme");
    egui::ComboBox::from_id_salt("color_theme")
        .selected_text(theme.label())
        .show_ui(ui, |ui: &mut Ui| {
            for candidate in ColorTheme::ALL {
                if ui
                    .selectable_label(theme == candidate, candidate.label())
                    .clicked()
                {
                    session.set_color_theme(candidate);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Value boxes – the three summary metrics
// ---------------------------------------------------------------------------

/// Render the row of metric boxes above the plot and grid.
pub fn value_boxes(ui: &mut Ui, m: &Metrics) {
    ui.columns(3, |cols: &mut [Ui]| {
        value_box(
            &mut cols[0],
            "Penguins in Selection",
            &metrics::format_count(m.count),
        );
        value_box(
            &mut cols[1],
            "Average Bill Length",
            &metrics::format_mm(m.mean_bill_length_mm),
        );
        value_box(
            &mut cols[2],
            "Average Bill Depth",
            &metrics::format_mm(m.mean_bill_depth_mm),
        );
    });
}

fn value_box(ui: &mut Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(title);
            ui.heading(RichText::new(value).size(24.0));
        });
        ui.set_width(ui.available_width());
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, session: &mut Session) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(session);
                ui.close_menu();
            }
        });

        ui.separator();
        let total = session.dataset().len();
        let visible = session.filtered().len();
        ui.label(format!("{total} penguins loaded, {visible} in selection"));

        if let Some(msg) = &session.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(session: &mut Session) {
    let file = rfd::FileDialog::new()
        .set_title("Open penguin data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} penguin records from {}", dataset.len(), path.display());
                session.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                session.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
