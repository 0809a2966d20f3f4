use std::sync::Arc;

use eframe::egui;

use crate::data::metrics;
use crate::data::model::PenguinDataset;
use crate::state::Session;
use crate::ui::grid::{self, GridState};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    pub session: Session,
    grid: GridState,
}

impl PenguinDashApp {
    pub fn new(dataset: Arc<PenguinDataset>) -> Self {
        PenguinDashApp {
            session: Session::new(dataset),
            grid: GridState::default(),
        }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.session);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.session);
            });

        // ---- Central panel: value boxes, plot, grid ----
        let rows: Vec<usize> = self.session.filtered().to_vec();
        let theme = self.session.filters.color_theme;

        egui::CentralPanel::default().show(ctx, |ui| {
            let dataset = self.session.dataset();

            panels::value_boxes(ui, &metrics::compute(dataset, &rows));
            ui.add_space(8.0);

            ui.columns(2, |cols: &mut [egui::Ui]| {
                cols[0].group(|ui: &mut egui::Ui| {
                    ui.strong("Bill Dimensions Analysis");
                    plot::scatter_plot(ui, dataset, &rows, theme);
                });
                cols[1].group(|ui: &mut egui::Ui| {
                    ui.strong("Dataset Explorer");
                    grid::data_grid(ui, &mut self.grid, dataset, &rows);
                });
            });
        });
    }
}
