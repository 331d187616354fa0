use egui::{Color32, Pos2};

use super::RenderRequest;
use crate::device::Topology;

/// A caller-supplied vertex list drawn with a caller-supplied topology.
///
/// Used for static decorative composites; there is no brush position or
/// size, the vertices are already in normalized device coordinates.
#[derive(Clone, Debug)]
pub struct Polygon {
    color: Color32,
    vertices: Vec<Pos2>,
    topology: Topology,
}

impl Polygon {
    pub fn new(color: Color32, vertices: Vec<Pos2>, topology: Topology) -> Self {
        Self {
            color,
            vertices,
            topology,
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn render_request(&self) -> RenderRequest<'_> {
        RenderRequest {
            topology: self.topology,
            vertices: &self.vertices,
            color: self.color.to_normalized_gamma_f32(),
            point_size: None,
        }
    }
}
