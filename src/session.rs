use egui::{Pos2, Rect};
use log::info;

use crate::brush::BrushConfig;
use crate::history::{ActionAvailability, CanvasHistory, RenderBatch};
use crate::input;
use crate::shape::figure;

/// All mutable drawing state, threaded through every handler.
///
/// One session per canvas: the current brush plus the shape history. Every
/// interaction entry point goes through here, so there is no global state
/// and no ownership ambiguity between handlers.
pub struct DrawingSession {
    history: CanvasHistory,
    brush: BrushConfig,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self {
            history: CanvasHistory::new(),
            brush: BrushConfig::default(),
        }
    }

    /// Handles one pointer event over the canvas: converts to NDC, stamps
    /// the brush's shape, records it in history.
    pub fn draw_at(&mut self, screen_pos: Pos2, canvas_rect: Rect) {
        let ndc = input::pointer_to_ndc(screen_pos, canvas_rect);
        self.history.draw(self.brush.shape_at(ndc));
    }

    pub fn undo(&mut self) {
        if !self.history.undo() {
            info!("undo ignored: nothing to undo");
        }
    }

    pub fn redo(&mut self) {
        if !self.history.redo() {
            info!("redo ignored: nothing to redo");
        }
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn restore(&mut self) {
        if !self.history.restore() {
            info!("restore ignored: no cleared canvas to restore");
        }
    }

    /// Stamps the decorative composite figure, one polygon per draw so the
    /// history semantics match ordinary drawing.
    pub fn place_figure(&mut self) {
        for shape in figure::triangle_man() {
            self.history.draw(shape);
        }
    }

    pub fn availability(&self) -> ActionAvailability {
        self.history.availability()
    }

    pub fn take_render_batch(&mut self) -> RenderBatch {
        self.history.take_render_batch()
    }

    pub fn brush(&self) -> &BrushConfig {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut BrushConfig {
        &mut self.brush
    }

    pub fn history(&self) -> &CanvasHistory {
        &self.history
    }
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}
