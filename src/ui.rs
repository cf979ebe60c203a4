// src/ui.rs
use egui;

use crate::app::PaintStatus;

/// Draws the overlay. Returns true when the user asked for a new mosaic.
pub fn build_ui(ctx: &egui::Context, status: &PaintStatus) -> bool {
    let mut regenerate = false;

    egui::Window::new("Stained Glass")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .default_open(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                match &status.summary {
                    Some(summary) => {
                        ui.label(format!("Seed: {}", status.seed));
                        ui.label(format!("Polygons: {}", summary.final_polygons));
                        ui.label(format!("Retired early: {}", summary.retired_polygons));
                        ui.label(format!(
                            "Outline: {} polygons from pass {}",
                            summary.outline_polygons, summary.base_depth
                        ));
                    }
                    None => {
                        ui.label("No mosaic yet");
                    }
                }
                if let Some(error) = &status.last_error {
                    ui.colored_label(egui::Color32::LIGHT_RED, error);
                }
                ui.separator();

                ui.label("Click anywhere: new mosaic");
                if ui.button("Regenerate").clicked() {
                    regenerate = true;
                }
            });
        });

    regenerate
}
