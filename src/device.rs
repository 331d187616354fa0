use egui::Pos2;
use thiserror::Error;

/// How a flat vertex list is grouped into drawable primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Points,
    TriangleList,
    TriangleFan,
}

/// Errors from the rendering device or its setup.
///
/// All of these indicate environment failure rather than transient
/// conditions; there is no retry path. A `BufferAllocation` error during a
/// render leaves whatever was drawn before the failing shape on the
/// framebuffer.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("rendering device unavailable: {0}")]
    DeviceInit(String),
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),
    #[error("missing attribute or uniform: {0}")]
    ResourceLocation(&'static str),
    #[error("could not allocate vertex transfer buffer: {0}")]
    BufferAllocation(String),
}

/// The narrow seam between the shape renderer and the GPU.
///
/// One shape is drawn as: `set_color`, optionally `set_point_size`,
/// `upload_vertices`, `draw_primitives`. `upload_vertices` owns the transfer
/// buffer lifecycle (allocate, fill with x/y float pairs, bind the position
/// attribute); allocation failure is the only fallible step.
pub trait RenderingDevice {
    fn upload_vertices(&mut self, vertices: &[Pos2]) -> Result<(), DeviceError>;

    /// Point-size hint used by the `Points` topology only.
    fn set_point_size(&mut self, size: f32);

    fn set_color(&mut self, rgba: [f32; 4]);

    fn draw_primitives(&mut self, topology: Topology, vertex_count: usize);

    /// Clears the drawing surface. The caller is expected to follow up with
    /// a full redraw from cursor 0.
    fn clear_framebuffer(&mut self);
}
