use egui::{Color32, Pos2};

use crate::shape::Shape;

/// What the brush stamps onto the canvas per pointer event.
///
/// `Square` draws a square point sprite; the name matches the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BrushShape {
    Triangle,
    Square,
    Circle,
}

/// Current brush settings. Mutated only by explicit UI action and read,
/// never written, when constructing a shape from a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct BrushConfig {
    pub shape: BrushShape,
    pub size: f32,
    pub color: Color32,
    pub segments: u32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            shape: BrushShape::Triangle,
            size: 5.0,
            color: Color32::WHITE,
            segments: 50,
        }
    }
}

impl BrushConfig {
    /// Constructs the configured shape at the given canvas position (in
    /// normalized device coordinates).
    pub fn shape_at(&self, position: Pos2) -> Shape {
        match self.shape {
            BrushShape::Triangle => Shape::triangle(position, self.size, self.color),
            BrushShape::Square => Shape::point(position, self.size, self.color),
            BrushShape::Circle => Shape::circle(position, self.size, self.color, self.segments),
        }
    }
}
