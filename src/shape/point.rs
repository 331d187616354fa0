use egui::{Color32, Pos2};

use super::RenderRequest;
use crate::device::Topology;

/// A square point sprite.
///
/// The size is not baked into the geometry; it rides along as a point-size
/// hint for the rasterizer.
#[derive(Clone, Debug)]
pub struct Point {
    position: Pos2,
    size: f32,
    color: Color32,
    vertices: Vec<Pos2>,
}

impl Point {
    pub fn new(position: Pos2, size: f32, color: Color32) -> Self {
        Self {
            position,
            size,
            color,
            vertices: vec![position],
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn render_request(&self) -> RenderRequest<'_> {
        RenderRequest {
            topology: Topology::Points,
            vertices: &self.vertices,
            color: self.color.to_normalized_gamma_f32(),
            point_size: Some(self.size),
        }
    }
}
