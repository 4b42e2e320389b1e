use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpaceXDashApp {
    pub state: AppState,
}

impl SpaceXDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SpaceXDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: controls and charts, top to bottom ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    let state = &mut self.state;

                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.heading(
                            RichText::new(&state.config.heading)
                                .size(40.0)
                                .color(state.config.heading_color),
                        );
                    });
                    ui.add_space(8.0);

                    panels::site_dropdown(ui, state);
                    ui.add_space(12.0);

                    plot::pie_chart(ui, &state.pie);
                    ui.add_space(12.0);

                    ui.label("Payload range (Kg):");
                    panels::payload_slider(ui, state);
                    ui.add_space(12.0);

                    plot::scatter_chart(ui, &state.scatter, &state.color_map);
                });
        });
    }
}
