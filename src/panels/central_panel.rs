use std::sync::Arc;

use eframe::egui_glow;
use egui::{Color32, Sense, Vec2};
use parking_lot::Mutex;

use crate::glow_backend::GlowCanvas;
use crate::session::DrawingSession;

/// The canvas: a square drawing area that stamps one brush shape per frame
/// while the pointer is held down over it, then hands the frame's render
/// batch to the GL canvas via a paint callback.
pub fn central_panel(
    session: &mut DrawingSession,
    canvas: &Arc<Mutex<GlowCanvas>>,
    ctx: &egui::Context,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let device_failure = canvas.lock().last_error().map(|err| err.to_string());
        if let Some(message) = device_failure {
            ui.colored_label(Color32::RED, format!("Rendering failed: {message}"));
            return;
        }

        let side = ui.available_size().min_elem().max(64.0);
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click_and_drag());

        if response.is_pointer_button_down_on() {
            if let Some(pos) = response.interact_pointer_pos() {
                if rect.contains(pos) {
                    session.draw_at(pos, rect);
                }
            }
        }

        let batch = session.take_render_batch();
        let canvas = canvas.clone();
        ui.painter().add(egui::PaintCallback {
            rect,
            callback: Arc::new(egui_glow::CallbackFn::new(move |info, painter| {
                canvas.lock().paint(painter.gl(), &info, &batch);
            })),
        });
    });
}
