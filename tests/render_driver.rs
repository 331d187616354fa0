use std::sync::Arc;

use egui::{Color32, Pos2, pos2};
use glow_sketch::device::{DeviceError, RenderingDevice, Topology};
use glow_sketch::renderer::render_incremental;
use glow_sketch::shape::{Shape, ShapeRef};

/// Records the device call sequence instead of touching a GPU.
#[derive(Debug, PartialEq)]
enum Call {
    Color([f32; 4]),
    PointSize(f32),
    Upload(usize),
    Draw(Topology, usize),
}

#[derive(Default)]
struct RecordingDevice {
    calls: Vec<Call>,
    fail_uploads: bool,
}

impl RenderingDevice for RecordingDevice {
    fn upload_vertices(&mut self, vertices: &[Pos2]) -> Result<(), DeviceError> {
        if self.fail_uploads {
            return Err(DeviceError::BufferAllocation("out of memory".to_owned()));
        }
        self.calls.push(Call::Upload(vertices.len()));
        Ok(())
    }

    fn set_point_size(&mut self, size: f32) {
        self.calls.push(Call::PointSize(size));
    }

    fn set_color(&mut self, rgba: [f32; 4]) {
        self.calls.push(Call::Color(rgba));
    }

    fn draw_primitives(&mut self, topology: Topology, vertex_count: usize) {
        self.calls.push(Call::Draw(topology, vertex_count));
    }

    fn clear_framebuffer(&mut self) {}
}

fn triangle_at(x: f32) -> ShapeRef {
    Arc::new(Shape::triangle(pos2(x, 0.0), 10.0, Color32::WHITE))
}

fn draw_count(calls: &[Call]) -> usize {
    calls
        .iter()
        .filter(|call| matches!(call, Call::Draw(..)))
        .count()
}

#[test]
fn renders_only_shapes_past_the_cursor() {
    let mut shapes = vec![triangle_at(0.0), triangle_at(0.1)];
    let mut device = RecordingDevice::default();

    let cursor = render_incremental(&shapes, 0, &mut device).unwrap();
    assert_eq!(cursor, 2);
    assert_eq!(draw_count(&device.calls), 2);

    // One shape appended: the second pass draws exactly that one.
    shapes.push(triangle_at(0.2));
    let mut device = RecordingDevice::default();
    let cursor = render_incremental(&shapes, cursor, &mut device).unwrap();
    assert_eq!(cursor, 3);
    assert_eq!(draw_count(&device.calls), 1);
}

#[test]
fn cursor_at_or_past_the_end_draws_nothing() {
    let shapes = vec![triangle_at(0.0)];
    let mut device = RecordingDevice::default();

    assert_eq!(render_incremental(&shapes, 1, &mut device).unwrap(), 1);
    assert_eq!(render_incremental(&shapes, 7, &mut device).unwrap(), 1);
    assert!(device.calls.is_empty());
}

#[test]
fn each_shape_sets_color_uploads_then_draws() {
    let shapes = vec![Arc::new(Shape::triangle(
        pos2(0.0, 0.0),
        10.0,
        Color32::RED,
    ))];
    let mut device = RecordingDevice::default();
    render_incremental(&shapes, 0, &mut device).unwrap();

    assert_eq!(
        device.calls,
        vec![
            Call::Color([1.0, 0.0, 0.0, 1.0]),
            Call::Upload(3),
            Call::Draw(Topology::TriangleList, 3),
        ]
    );
}

#[test]
fn only_points_carry_a_point_size() {
    let shapes: Vec<ShapeRef> = vec![
        Arc::new(Shape::point(pos2(0.0, 0.0), 7.0, Color32::WHITE)),
        Arc::new(Shape::circle(pos2(0.0, 0.0), 5.0, Color32::WHITE, 4)),
    ];
    let mut device = RecordingDevice::default();
    render_incremental(&shapes, 0, &mut device).unwrap();

    assert_eq!(
        device.calls,
        vec![
            Call::Color([1.0, 1.0, 1.0, 1.0]),
            Call::PointSize(7.0),
            Call::Upload(1),
            Call::Draw(Topology::Points, 1),
            Call::Color([1.0, 1.0, 1.0, 1.0]),
            Call::Upload(6),
            Call::Draw(Topology::TriangleFan, 6),
        ]
    );
}

#[test]
fn buffer_allocation_failure_is_fatal_and_keeps_partial_progress() {
    let shapes = vec![triangle_at(0.0), triangle_at(0.1)];
    let mut device = RecordingDevice {
        calls: Vec::new(),
        fail_uploads: true,
    };

    let result = render_incremental(&shapes, 0, &mut device);
    assert!(matches!(result, Err(DeviceError::BufferAllocation(_))));
    // The first shape's color was already set; nothing is rolled back.
    assert_eq!(device.calls, vec![Call::Color([1.0, 1.0, 1.0, 1.0])]);
}
