use std::sync::Arc;

use egui::color_picker::{Alpha, color_edit_button_srgba};
use parking_lot::Mutex;

use crate::brush::BrushShape;
use crate::glow_backend::GlowCanvas;
use crate::session::DrawingSession;

pub fn tools_panel(
    session: &mut DrawingSession,
    canvas: &Arc<Mutex<GlowCanvas>>,
    ctx: &egui::Context,
) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Brush");

            let brush = session.brush_mut();
            for (shape, label) in [
                (BrushShape::Triangle, "▲ Triangle"),
                (BrushShape::Square, "■ Square"),
                (BrushShape::Circle, "● Circle"),
            ] {
                if ui.selectable_label(brush.shape == shape, label).clicked() {
                    log::info!("brush shape selected: {shape:?}");
                    brush.shape = shape;
                }
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                color_edit_button_srgba(ui, &mut brush.color, Alpha::Opaque);
            });
            ui.add(egui::Slider::new(&mut brush.size, 1.0..=50.0).text("Size"));
            ui.add(egui::Slider::new(&mut brush.segments, 3..=100).text("Segments"));

            ui.separator();
            ui.heading("Canvas");

            let available = session.availability();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(available.undo, egui::Button::new("Undo"))
                    .clicked()
                {
                    session.undo();
                }
                if ui
                    .add_enabled(available.redo, egui::Button::new("Redo"))
                    .clicked()
                {
                    session.redo();
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    session.clear();
                }
                if ui
                    .add_enabled(available.restore, egui::Button::new("Restore"))
                    .clicked()
                {
                    session.restore();
                }
            });

            ui.separator();

            if ui.button("Triangle man").clicked() {
                session.place_figure();
            }
            if ui.button("Save PNG").clicked() {
                canvas.lock().request_export();
            }
        });
}
