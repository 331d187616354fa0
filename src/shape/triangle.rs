use egui::{Color32, Pos2};

use super::{RenderRequest, SIZE_SCALE};
use crate::device::Topology;

/// Unit isoceles triangle, scaled and translated per instance.
const BASE_VERTICES: [(f32, f32); 3] = [(0.0, 0.5), (-1.0, -0.5), (1.0, -0.5)];

#[derive(Clone, Debug)]
pub struct Triangle {
    position: Pos2,
    size: f32,
    color: Color32,
    vertices: Vec<Pos2>,
}

impl Triangle {
    /// Builds a fresh vertex list from the base template; the template
    /// itself is never mutated or shared between instances.
    pub fn new(position: Pos2, size: f32, color: Color32) -> Self {
        let scale = size * SIZE_SCALE;
        let vertices = BASE_VERTICES
            .iter()
            .map(|&(bx, by)| Pos2::new(position.x + bx * scale, position.y + by * scale))
            .collect();

        Self {
            position,
            size,
            color,
            vertices,
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
            topology: Topology::TriangleList,
            vertices: &self.vertices,
            color: self.color.to_normalized_gamma_f32(),
            point_size: None,
        }
    }
}
