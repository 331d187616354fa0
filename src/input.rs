use egui::{Pos2, Rect};

/// Converts a screen-space pointer position into normalized device
/// coordinates relative to the canvas rect: [-1, 1] on both axes, origin at
/// the canvas center, y pointing up.
///
/// Positions outside the rect map outside [-1, 1] and will be clipped by the
/// rasterizer; callers normally gate on hit-testing the rect first.
pub fn pointer_to_ndc(pos: Pos2, canvas: Rect) -> Pos2 {
    let half_w = canvas.width() / 2.0;
    let half_h = canvas.height() / 2.0;
    Pos2::new(
        ((pos.x - canvas.left()) - half_w) / half_w,
        (half_h - (pos.y - canvas.top())) / half_h,
    )
}
