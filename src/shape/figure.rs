use egui::{Color32, pos2};

use super::Shape;
use crate::device::Topology;

const RED: Color32 = Color32::RED;
const YELLOW: Color32 = Color32::YELLOW;
const BLACK: Color32 = Color32::BLACK;
const GREEN: Color32 = Color32::GREEN;
const TORSO: Color32 = Color32::from_rgb(205, 95, 0);
const EYE_HIGHLIGHT: Color32 = Color32::from_rgb(255, 128, 128);

fn tri(color: Color32, v: [f32; 6]) -> Shape {
    Shape::polygon(
        color,
        vec![pos2(v[0], v[1]), pos2(v[2], v[3]), pos2(v[4], v[5])],
        Topology::TriangleList,
    )
}

/// The fixed decorative figure ("triangle man"), as the ordered polygon list
/// to append to the canvas. Some background triangles deliberately extend
/// past the NDC range and get clipped.
pub fn triangle_man() -> Vec<Shape> {
    vec![
        // Background
        tri(RED, [-1.0, 1.0, -1.0, -5.0, 5.0, 1.0]),
        tri(YELLOW, [-1.0, 1.0, 0.4, 1.0, -1.0, -2.5]),
        tri(RED, [-1.0, 1.0, 0.0, 1.0, -1.4, -2.5]),
        tri(YELLOW, [-1.0, 1.0, -0.4, 1.0, -1.8, -2.5]),
        tri(YELLOW, [1.0, 1.5, 1.0, -1.0, 0.1, -1.0]),
        tri(RED, [1.0, 0.5, 1.0, -1.0, 0.5, -1.0]),
        tri(RED, [-1.0, 1.0, -0.8, 1.0, -1.0, 0.5]),
        // Head
        tri(BLACK, [-0.2, 0.5, -0.3, 0.0, 0.2, 0.5]),
        tri(BLACK, [-0.3, 0.0, 0.3, 0.0, 0.2, 0.5]),
        // Eye
        tri(RED, [0.0, 0.3, 0.1, 0.2, 0.2, 0.3]),
        tri(EYE_HIGHLIGHT, [0.05, 0.3, 0.1, 0.25, 0.15, 0.3]),
        // Mohawk
        tri(GREEN, [-0.1, 0.5, 0.1, 0.5, 0.0, 0.8]),
        // Torso
        tri(TORSO, [0.0, -3.0, 0.6, 0.0, -0.6, 0.0]),
        // Left arm
        tri(TORSO, [-0.6, 0.0, -1.1, -0.6, -0.7, -0.6]),
        tri(TORSO, [-0.6, 0.0, -0.5, -0.4, -0.7, -0.6]),
        tri(BLACK, [-0.8, -1.0, -1.1, -0.6, -0.7, -0.6]),
        tri(BLACK, [-0.8, -1.0, -0.5, -1.0, -0.7, -0.6]),
        // Right arm
        tri(TORSO, [0.6, 0.0, 1.1, -0.6, 0.7, -0.6]),
        tri(TORSO, [0.6, 0.0, 0.5, -0.4, 0.7, -0.6]),
        tri(BLACK, [0.8, -1.0, 1.1, -0.6, 0.7, -0.6]),
        tri(BLACK, [0.8, -1.0, 0.5, -1.0, 0.7, -0.6]),
        // Shirt and belt
        tri(YELLOW, [-0.3, -0.2, 0.3, -0.2, 0.0, -0.8]),
        tri(TORSO, [-0.3, -0.3, -0.1, -0.3, -0.1, -0.6]),
        tri(TORSO, [0.3, -0.3, 0.1, -0.3, 0.1, -0.6]),
    ]
}
