use egui::{Color32, Pos2};

use super::{RenderRequest, SIZE_SCALE};
use crate::device::Topology;

/// A circle approximated by a triangle fan.
///
/// Vertices are the center followed by `segments + 1` perimeter points; the
/// last ring point repeats the first to close the fan. Callers must supply
/// `segments >= 3`; below that the fan degenerates and is drawn as-is.
#[derive(Clone, Debug)]
pub struct Circle {
    position: Pos2,
    size: f32,
    color: Color32,
    segments: u32,
    vertices: Vec<Pos2>,
}

impl Circle {
    pub fn new(position: Pos2, size: f32, color: Color32, segments: u32) -> Self {
        let radius = size * SIZE_SCALE;
        let mut vertices = Vec::with_capacity(segments as usize + 2);
        vertices.push(position);
        for i in 0..=segments {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            vertices.push(Pos2::new(
                position.x + angle.cos() * radius,
                position.y + angle.sin() * radius,
            ));
        }

        Self {
            position,
            size,
            color,
            segments,
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

    pub fn segments(&self) -> u32 {
        self.segments
    }

    pub fn render_request(&self) -> RenderRequest<'_> {
        RenderRequest {
            topology: Topology::TriangleFan,
            vertices: &self.vertices,
            color: self.color.to_normalized_gamma_f32(),
            point_size: None,
        }
    }
}
