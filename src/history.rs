use std::sync::Arc;

use crate::shape::{Shape, ShapeRef};

/// Which history actions are currently meaningful. Derived from stack
/// emptiness after every transition; the UI uses it to enable and disable
/// controls. Acting on an unavailable action is a silent no-op, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionAvailability {
    pub undo: bool,
    pub redo: bool,
    pub restore: bool,
}

/// One frame's worth of render work: whether the framebuffer must be cleared
/// first, and the shapes not yet on it.
#[derive(Clone)]
pub struct RenderBatch {
    pub clear: bool,
    pub shapes: Vec<ShapeRef>,
}

/// Three-stack undo/redo/restore engine over the canvas shape list.
///
/// `active` is the ordered list of shapes on the canvas. Undo moves its tail
/// onto `redo_stack`; clear moves the whole list as one unit onto
/// `snapshots`, from where restore brings it back. Redo history survives
/// undos but not new draws or clears.
pub struct CanvasHistory {
    active: Vec<ShapeRef>,
    redo_stack: Vec<ShapeRef>,
    snapshots: Vec<Vec<ShapeRef>>,
    /// How many leading shapes of `active` are already on the framebuffer.
    render_cursor: usize,
    /// Set whenever the framebuffer no longer matches `active[..cursor]`.
    framebuffer_dirty: bool,
}

impl CanvasHistory {
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            redo_stack: Vec::new(),
            snapshots: Vec::new(),
            render_cursor: 0,
            // The surface starts with undefined contents.
            framebuffer_dirty: true,
        }
    }

    /// Appends a newly drawn shape. Any redo history is invalidated.
    pub fn draw(&mut self, shape: Shape) {
        self.active.push(Arc::new(shape));
        self.redo_stack.clear();
    }

    /// Moves the most recent shape onto the redo stack. Returns `false` when
    /// there is nothing to undo. Undo never reaches into the snapshot stack:
    /// once `active` is empty it stays a no-op even if cleared canvases
    /// remain restorable.
    pub fn undo(&mut self) -> bool {
        let Some(shape) = self.active.pop() else {
            return false;
        };
        self.redo_stack.push(shape);
        self.invalidate_framebuffer();
        true
    }

    /// Re-appends the most recently undone shape. Returns `false` when the
    /// redo stack is empty. Append-only, so no framebuffer reset is needed;
    /// the next incremental render picks the shape up.
    pub fn redo(&mut self) -> bool {
        let Some(shape) = self.redo_stack.pop() else {
            return false;
        };
        self.active.push(shape);
        true
    }

    /// Empties the canvas, saving the current shape list as one restorable
    /// snapshot. An empty canvas pushes no snapshot.
    pub fn clear(&mut self) {
        if !self.active.is_empty() {
            self.snapshots.push(std::mem::take(&mut self.active));
        }
        self.redo_stack.clear();
        self.invalidate_framebuffer();
    }

    /// Brings back the most recently cleared shape list, replacing whatever
    /// is on the canvas. Returns `false` when no snapshot exists.
    pub fn restore(&mut self) -> bool {
        let Some(snapshot) = self.snapshots.pop() else {
            return false;
        };
        self.active = snapshot;
        self.redo_stack.clear();
        self.invalidate_framebuffer();
        true
    }

    pub fn availability(&self) -> ActionAvailability {
        ActionAvailability {
            undo: !self.active.is_empty(),
            redo: !self.redo_stack.is_empty(),
            restore: !self.snapshots.is_empty(),
        }
    }

    /// Takes the shapes appended since the last call and advances the render
    /// cursor past them. `clear` is set when the framebuffer must be wiped
    /// and fully redrawn instead.
    pub fn take_render_batch(&mut self) -> RenderBatch {
        let batch = RenderBatch {
            clear: self.framebuffer_dirty,
            shapes: self.active[self.render_cursor..].to_vec(),
        };
        self.render_cursor = self.active.len();
        self.framebuffer_dirty = false;
        batch
    }

    fn invalidate_framebuffer(&mut self) {
        self.render_cursor = 0;
        self.framebuffer_dirty = true;
    }

    pub fn active(&self) -> &[ShapeRef] {
        &self.active
    }

    pub fn redo_stack(&self) -> &[ShapeRef] {
        &self.redo_stack
    }

    pub fn snapshots(&self) -> &[Vec<ShapeRef>] {
        &self.snapshots
    }

    pub fn render_cursor(&self) -> usize {
        self.render_cursor
    }
}

impl Default for CanvasHistory {
    fn default() -> Self {
        Self::new()
    }
}
