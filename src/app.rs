use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use log::{error, info};
#[cfg(target_arch = "wasm32")]
use log::warn;
use parking_lot::Mutex;

use crate::brush::BrushConfig;
use crate::device::DeviceError;
#[cfg(not(target_arch = "wasm32"))]
use crate::glow_backend::CANVAS_RESOLUTION;
use crate::glow_backend::GlowCanvas;
use crate::panels;
use crate::session::DrawingSession;

pub struct PaintApp {
    session: DrawingSession,
    canvas: Arc<Mutex<GlowCanvas>>,
}

impl PaintApp {
    /// Called once before the first frame. Fails fatally when the glow
    /// backend is missing or canvas setup fails.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, DeviceError> {
        let gl = cc.gl.as_ref().ok_or_else(|| {
            DeviceError::DeviceInit("eframe was started without the glow backend".to_owned())
        })?;
        let canvas = GlowCanvas::new(gl)?;

        let mut session = DrawingSession::new();
        if let Some(storage) = cc.storage {
            if let Some(brush) = eframe::get_value::<BrushConfig>(storage, eframe::APP_KEY) {
                *session.brush_mut() = brush;
            }
        }

        Ok(Self {
            session,
            canvas: Arc::new(Mutex::new(canvas)),
        })
    }

    fn handle_pending_export(&mut self) {
        let Some(pixels) = self.canvas.lock().take_export() else {
            return;
        };
        save_png(pixels);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (undo, redo) = ctx.input(|input| {
            let undo = input.modifiers.command
                && !input.modifiers.shift
                && input.key_pressed(egui::Key::Z);
            let redo = input.modifiers.command
                && (input.key_pressed(egui::Key::Y)
                    || (input.modifiers.shift && input.key_pressed(egui::Key::Z)));
            (undo, redo)
        });
        if undo {
            self.session.undo();
        }
        if redo {
            self.session.redo();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the framework to save state before shutdown. Only the
    /// brush settings persist; the shape history is transient.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.session.brush());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_pending_export();
        self.handle_shortcuts(ctx);

        panels::tools_panel(&mut self.session, &self.canvas, ctx);
        panels::central_panel(&mut self.session, &self.canvas, ctx);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        if let Some(gl) = gl {
            self.canvas.lock().destroy(gl);
        }
    }
}

/// Writes the exported framebuffer readback next to the executable.
#[cfg(not(target_arch = "wasm32"))]
fn save_png(pixels: Vec<u8>) {
    let side = CANVAS_RESOLUTION as u32;
    let Some(image) = image::RgbaImage::from_raw(side, side, pixels) else {
        error!("export failed: pixel readback had an unexpected length");
        return;
    };
    // GL returns rows bottom-up.
    let image = image::imageops::flip_vertical(&image);
    match image.save("drawing.png") {
        Ok(()) => info!("canvas exported to drawing.png"),
        Err(err) => error!("export failed: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn save_png(_pixels: Vec<u8>) {
    warn!("image export is not supported in the web build");
}
