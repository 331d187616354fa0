use std::sync::Arc;

use egui::{Color32, Pos2};

use crate::device::Topology;

mod circle;
mod point;
mod polygon;
mod triangle;

pub mod figure;

pub use circle::Circle;
pub use point::Point;
pub use polygon::Polygon;
pub use triangle::Triangle;

/// Brush size to NDC scale factor shared by triangles and circles.
pub(crate) const SIZE_SCALE: f32 = 0.01;

/// Everything the render driver needs to draw one shape.
///
/// The only asymmetry between shape kinds is that points carry their size as
/// a rasterizer hint instead of baking it into geometry; that is the
/// `point_size` option here, so the driver never branches on the shape kind.
pub struct RenderRequest<'a> {
    pub topology: Topology,
    pub vertices: &'a [Pos2],
    pub color: [f32; 4],
    pub point_size: Option<f32>,
}

/// A drawable primitive on the canvas.
///
/// Geometry is computed once at construction, in normalized device
/// coordinates, and never mutated afterwards.
#[derive(Clone, Debug)]
pub enum Shape {
    Point(Point),
    Triangle(Triangle),
    Circle(Circle),
    Polygon(Polygon),
}

/// Shapes are shared between the history stacks and render batches.
pub type ShapeRef = Arc<Shape>;

impl Shape {
    /// A single square point sprite at `position`.
    pub fn point(position: Pos2, size: f32, color: Color32) -> Self {
        Self::Point(Point::new(position, size, color))
    }

    /// An isoceles triangle centered on `position`.
    pub fn triangle(position: Pos2, size: f32, color: Color32) -> Self {
        Self::Triangle(Triangle::new(position, size, color))
    }

    /// A triangle-fan circle approximation with `segments` perimeter edges.
    pub fn circle(position: Pos2, size: f32, color: Color32, segments: u32) -> Self {
        Self::Circle(Circle::new(position, size, color, segments))
    }

    /// A raw vertex list with caller-supplied topology.
    pub fn polygon(color: Color32, vertices: Vec<Pos2>, topology: Topology) -> Self {
        Self::Polygon(Polygon::new(color, vertices, topology))
    }

    pub fn render_request(&self) -> RenderRequest<'_> {
        match self {
            Shape::Point(p) => p.render_request(),
            Shape::Triangle(t) => t.render_request(),
            Shape::Circle(c) => c.render_request(),
            Shape::Polygon(p) => p.render_request(),
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Shape::Point(p) => p.color(),
            Shape::Triangle(t) => t.color(),
            Shape::Circle(c) => c.color(),
            Shape::Polygon(p) => p.color(),
        }
    }
}
