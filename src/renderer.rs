use crate::device::{DeviceError, RenderingDevice};
use crate::shape::ShapeRef;

/// Draws `shapes[cursor..]` in order, one draw call per shape, and returns
/// the new cursor (`shapes.len()`).
///
/// Repeated calls with the returned cursor pay only for newly appended
/// shapes. A full redraw is the caller clearing the framebuffer and invoking
/// with `cursor = 0`. On buffer-allocation failure the error propagates and
/// whatever was drawn before the failing shape stays on the framebuffer.
pub fn render_incremental(
    shapes: &[ShapeRef],
    cursor: usize,
    device: &mut dyn RenderingDevice,
) -> Result<usize, DeviceError> {
    let start = cursor.min(shapes.len());
    for shape in &shapes[start..] {
        let request = shape.render_request();
        device.set_color(request.color);
        if let Some(size) = request.point_size {
            device.set_point_size(size);
        }
        device.upload_vertices(request.vertices)?;
        device.draw_primitives(request.topology, request.vertices.len());
    }
    Ok(shapes.len())
}
