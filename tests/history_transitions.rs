use egui::{Color32, pos2};
use glow_sketch::history::CanvasHistory;
use glow_sketch::shape::{Shape, ShapeRef};

// Helper: a point shape tagged by its x coordinate so stack order is
// observable.
fn dot(tag: f32) -> Shape {
    Shape::point(pos2(tag, 0.0), 5.0, Color32::WHITE)
}

fn tags(shapes: &[ShapeRef]) -> Vec<f32> {
    shapes
        .iter()
        .map(|shape| match shape.as_ref() {
            Shape::Point(p) => p.position().x,
            _ => panic!("expected point shapes in this test"),
        })
        .collect()
}

#[test]
fn undoing_everything_moves_shapes_to_redo_stack_in_undo_order() {
    let mut history = CanvasHistory::new();
    history.draw(dot(1.0));
    history.draw(dot(2.0));
    history.draw(dot(3.0));

    assert!(history.undo());
    assert!(history.undo());
    assert!(history.undo());

    assert!(history.active().is_empty());
    // Most recently drawn shape was undone first.
    assert_eq!(tags(history.redo_stack()), vec![3.0, 2.0, 1.0]);
    assert!(!history.undo(), "nothing left to undo");
}

#[test]
fn undo_then_redo_is_identity_on_active() {
    let mut history = CanvasHistory::new();
    history.draw(dot(1.0));
    history.draw(dot(2.0));

    assert!(history.undo());
    assert!(history.redo());

    assert_eq!(tags(history.active()), vec![1.0, 2.0]);
    assert!(history.redo_stack().is_empty());
}

#[test]
fn drawing_after_undo_invalidates_redo_history() {
    let mut history = CanvasHistory::new();
    history.draw(dot(1.0));
    history.draw(dot(2.0));
    assert!(history.undo());
    assert_eq!(history.redo_stack().len(), 1);

    history.draw(dot(3.0));

    assert!(history.redo_stack().is_empty());
    assert!(!history.redo());
    assert_eq!(tags(history.active()), vec![1.0, 3.0]);
}

#[test]
fn clearing_an_empty_canvas_pushes_no_snapshot() {
    let mut history = CanvasHistory::new();
    history.clear();
    assert!(history.snapshots().is_empty());
    assert!(!history.availability().restore);

    // Also after a clear that did snapshot, a second clear stays silent.
    history.draw(dot(1.0));
    history.clear();
    history.clear();
    assert_eq!(history.snapshots().len(), 1);
}

#[test]
fn restore_pops_snapshots_most_recent_first() {
    let mut history = CanvasHistory::new();
    history.draw(dot(1.0));
    history.draw(dot(2.0));
    history.clear(); // snapshot L1 = [1, 2]
    history.draw(dot(3.0));
    history.clear(); // snapshot L2 = [3]

    assert!(history.restore());
    assert_eq!(tags(history.active()), vec![3.0]);

    assert!(history.restore());
    assert_eq!(tags(history.active()), vec![1.0, 2.0]);

    assert!(!history.restore(), "no snapshots left");
}

#[test]
fn restore_replaces_active_and_drops_redo() {
    let mut history = CanvasHistory::new();
    history.draw(dot(1.0));
    history.clear();
    history.draw(dot(2.0));
    assert!(history.undo());
    assert_eq!(history.redo_stack().len(), 1);

    assert!(history.restore());

    assert_eq!(tags(history.active()), vec![1.0]);
    assert!(history.redo_stack().is_empty());
}

#[test]
fn undo_never_reaches_into_snapshots() {
    let mut history = CanvasHistory::new();
    history.draw(dot(1.0));
    history.clear();

    // Active is empty but a snapshot exists: undo stays a disabled no-op.
    assert!(!history.undo());
    let available = history.availability();
    assert!(!available.undo);
    assert!(available.restore);
}

#[test]
fn availability_tracks_stack_emptiness_after_every_transition() {
    let mut history = CanvasHistory::new();

    let a = history.availability();
    assert!(!a.undo && !a.redo && !a.restore);

    history.draw(dot(1.0));
    let a = history.availability();
    assert!(a.undo && !a.redo && !a.restore);

    history.undo();
    let a = history.availability();
    assert!(!a.undo && a.redo && !a.restore);

    history.redo();
    let a = history.availability();
    assert!(a.undo && !a.redo && !a.restore);

    history.clear();
    let a = history.availability();
    assert!(!a.undo && !a.redo && a.restore);

    history.restore();
    let a = history.availability();
    assert!(a.undo && !a.redo && !a.restore);
}

#[test]
fn render_batches_follow_the_cursor() {
    let mut history = CanvasHistory::new();

    // The very first batch clears the undefined surface.
    let batch = history.take_render_batch();
    assert!(batch.clear);
    assert!(batch.shapes.is_empty());

    history.draw(dot(1.0));
    history.draw(dot(2.0));
    let batch = history.take_render_batch();
    assert!(!batch.clear, "appends render incrementally");
    assert_eq!(batch.shapes.len(), 2);
    assert_eq!(history.render_cursor(), 2);

    // Redo is append-only as well: no clear needed.
    history.undo();
    let _ = history.take_render_batch();
    history.redo();
    let batch = history.take_render_batch();
    assert!(!batch.clear);
    assert_eq!(batch.shapes.len(), 1);

    // Undo forces a full redraw from cursor zero.
    history.undo();
    assert_eq!(history.render_cursor(), 0);
    let batch = history.take_render_batch();
    assert!(batch.clear);
    assert_eq!(batch.shapes.len(), history.active().len());
}
