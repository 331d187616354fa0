use eframe::glow::{self, HasContext as _};
use egui::Pos2;
use log::{error, info};

use crate::device::{DeviceError, RenderingDevice, Topology};
use crate::history::RenderBatch;
use crate::renderer;

/// Edge length in pixels of the persistent offscreen drawing surface.
pub const CANVAS_RESOLUTION: i32 = 512;

const SHAPE_VERTEX_SHADER: &str = r#"
in vec2 a_position;
in float a_size;
void main() {
    gl_Position = vec4(a_position, 0.0, 1.0);
    gl_PointSize = a_size;
}
"#;

const SHAPE_FRAGMENT_SHADER: &str = r#"
precision mediump float;
uniform vec4 u_color;
out vec4 frag_color;
void main() {
    frag_color = u_color;
}
"#;

// Fullscreen triangle, no vertex buffer needed.
const BLIT_VERTEX_SHADER: &str = r#"
const vec2 verts[3] = vec2[3](vec2(-1.0, -1.0), vec2(3.0, -1.0), vec2(-1.0, 3.0));
out vec2 v_uv;
void main() {
    vec2 pos = verts[gl_VertexID];
    v_uv = (pos + 1.0) * 0.5;
    gl_Position = vec4(pos, 0.0, 1.0);
}
"#;

const BLIT_FRAGMENT_SHADER: &str = r#"
precision mediump float;
uniform sampler2D u_canvas;
in vec2 v_uv;
out vec4 frag_color;
void main() {
    frag_color = texture(u_canvas, v_uv);
}
"#;

/// GL-side canvas state shared with the egui paint callback.
///
/// The canvas keeps its own fixed-resolution framebuffer so incremental
/// rendering has a surface that survives between frames (the window
/// framebuffer is redrawn by egui every frame). Each paint: render the
/// frame's batch into the offscreen target, then blit its texture into the
/// callback viewport. Only GL object handles live here; the context itself
/// is passed in per call, which keeps the struct shareable with the paint
/// callback on every target.
pub struct GlowCanvas {
    shape_program: glow::Program,
    a_position: u32,
    a_size: u32,
    u_color: glow::UniformLocation,
    blit_program: glow::Program,
    u_canvas: glow::UniformLocation,
    vertex_array: glow::VertexArray,
    framebuffer: glow::Framebuffer,
    texture: glow::Texture,
    export_requested: bool,
    pending_export: Option<Vec<u8>>,
    last_error: Option<DeviceError>,
}

impl GlowCanvas {
    /// Compiles the shader programs and allocates the offscreen target.
    /// Every failure here is fatal for the application.
    pub fn new(gl: &glow::Context) -> Result<Self, DeviceError> {
        let shader_version = if cfg!(target_arch = "wasm32") {
            "#version 300 es"
        } else {
            "#version 330"
        };

        unsafe {
            let shape_program = compile_program(
                gl,
                shader_version,
                SHAPE_VERTEX_SHADER,
                SHAPE_FRAGMENT_SHADER,
            )?;
            let a_position = gl
                .get_attrib_location(shape_program, "a_position")
                .ok_or(DeviceError::ResourceLocation("a_position"))?;
            let a_size = gl
                .get_attrib_location(shape_program, "a_size")
                .ok_or(DeviceError::ResourceLocation("a_size"))?;
            let u_color = gl
                .get_uniform_location(shape_program, "u_color")
                .ok_or(DeviceError::ResourceLocation("u_color"))?;

            let blit_program = compile_program(
                gl,
                shader_version,
                BLIT_VERTEX_SHADER,
                BLIT_FRAGMENT_SHADER,
            )?;
            let u_canvas = gl
                .get_uniform_location(blit_program, "u_canvas")
                .ok_or(DeviceError::ResourceLocation("u_canvas"))?;

            let vertex_array = gl.create_vertex_array().map_err(DeviceError::DeviceInit)?;

            let texture = gl.create_texture().map_err(DeviceError::DeviceInit)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA8 as i32,
                CANVAS_RESOLUTION,
                CANVAS_RESOLUTION,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(None),
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.bind_texture(glow::TEXTURE_2D, None);

            let framebuffer = gl.create_framebuffer().map_err(DeviceError::DeviceInit)?;
            gl.bind_framebuffer(glow::FRAMEBUFFER, Some(framebuffer));
            gl.framebuffer_texture_2d(
                glow::FRAMEBUFFER,
                glow::COLOR_ATTACHMENT0,
                glow::TEXTURE_2D,
                Some(texture),
                0,
            );
            let complete =
                gl.check_framebuffer_status(glow::FRAMEBUFFER) == glow::FRAMEBUFFER_COMPLETE;
            gl.bind_framebuffer(glow::FRAMEBUFFER, None);
            if !complete {
                return Err(DeviceError::DeviceInit(
                    "offscreen canvas framebuffer is incomplete".to_owned(),
                ));
            }

            // Desktop GL ignores gl_PointSize unless this is enabled.
            #[cfg(not(target_arch = "wasm32"))]
            gl.enable(glow::PROGRAM_POINT_SIZE);

            info!(
                "canvas initialized: {res}x{res} offscreen target",
                res = CANVAS_RESOLUTION
            );

            Ok(Self {
                shape_program,
                a_position,
                a_size,
                u_color,
                blit_program,
                u_canvas,
                vertex_array,
                framebuffer,
                texture,
                export_requested: false,
                pending_export: None,
                last_error: None,
            })
        }
    }

    /// Renders one frame's batch into the offscreen target, then blits the
    /// target into the callback viewport. Called from the egui paint
    /// callback with the GL state egui_glow set up for it.
    pub fn paint(
        &mut self,
        gl: &glow::Context,
        info: &egui::PaintCallbackInfo,
        batch: &RenderBatch,
    ) {
        // Device errors are unrecoverable; stop touching GL once one occurred.
        if self.last_error.is_some() {
            return;
        }

        unsafe {
            // egui_glow scissors to the callback rect; that must not clip
            // the offscreen pass.
            let scissor_was_enabled = gl.is_enabled(glow::SCISSOR_TEST);
            gl.disable(glow::SCISSOR_TEST);

            #[cfg(not(target_arch = "wasm32"))]
            let previous_framebuffer = {
                let raw = gl.get_parameter_i32(glow::FRAMEBUFFER_BINDING) as u32;
                std::num::NonZeroU32::new(raw).map(glow::NativeFramebuffer)
            };

            gl.bind_framebuffer(glow::FRAMEBUFFER, Some(self.framebuffer));
            gl.viewport(0, 0, CANVAS_RESOLUTION, CANVAS_RESOLUTION);
            gl.bind_vertex_array(Some(self.vertex_array));
            gl.use_program(Some(self.shape_program));

            let render_result = {
                let mut device = GlowDevice {
                    gl,
                    a_position: self.a_position,
                    a_size: self.a_size,
                    u_color: &self.u_color,
                    transfer_buffer: None,
                };
                if batch.clear {
                    device.clear_framebuffer();
                }
                renderer::render_incremental(&batch.shapes, 0, &mut device)
            };
            if let Err(err) = render_result {
                error!("canvas render failed: {err}");
                self.last_error = Some(err);
            }

            if self.export_requested {
                self.export_requested = false;
                let mut pixels = vec![0_u8; (CANVAS_RESOLUTION * CANVAS_RESOLUTION * 4) as usize];
                gl.read_pixels(
                    0,
                    0,
                    CANVAS_RESOLUTION,
                    CANVAS_RESOLUTION,
                    glow::RGBA,
                    glow::UNSIGNED_BYTE,
                    glow::PixelPackData::Slice(Some(&mut pixels)),
                );
                self.pending_export = Some(pixels);
            }

            // Back to the caller's framebuffer and viewport for the blit.
            #[cfg(not(target_arch = "wasm32"))]
            gl.bind_framebuffer(glow::FRAMEBUFFER, previous_framebuffer);
            #[cfg(target_arch = "wasm32")]
            gl.bind_framebuffer(glow::FRAMEBUFFER, None);

            let viewport = info.viewport_in_pixels();
            gl.viewport(
                viewport.left_px,
                viewport.from_bottom_px,
                viewport.width_px,
                viewport.height_px,
            );
            if scissor_was_enabled {
                gl.enable(glow::SCISSOR_TEST);
            }

            gl.use_program(Some(self.blit_program));
            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.texture));
            gl.uniform_1_i32(Some(&self.u_canvas), 0);
            gl.draw_arrays(glow::TRIANGLES, 0, 3);

            gl.bind_texture(glow::TEXTURE_2D, None);
            gl.bind_vertex_array(None);
            gl.use_program(None);
        }
    }

    /// Asks the next paint to read back the canvas pixels.
    pub fn request_export(&mut self) {
        self.export_requested = true;
    }

    /// RGBA pixels from the last requested export, bottom row first.
    pub fn take_export(&mut self) -> Option<Vec<u8>> {
        self.pending_export.take()
    }

    pub fn last_error(&self) -> Option<&DeviceError> {
        self.last_error.as_ref()
    }

    /// Frees the GL objects. Call on application exit.
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.shape_program);
            gl.delete_program(self.blit_program);
            gl.delete_vertex_array(self.vertex_array);
            gl.delete_framebuffer(self.framebuffer);
            gl.delete_texture(self.texture);
        }
    }
}

/// One-frame rendering device over the bound offscreen framebuffer.
struct GlowDevice<'a> {
    gl: &'a glow::Context,
    a_position: u32,
    a_size: u32,
    u_color: &'a glow::UniformLocation,
    transfer_buffer: Option<glow::Buffer>,
}

impl RenderingDevice for GlowDevice<'_> {
    fn upload_vertices(&mut self, vertices: &[Pos2]) -> Result<(), DeviceError> {
        let mut data = Vec::with_capacity(vertices.len() * 8);
        for vertex in vertices {
            data.extend_from_slice(&vertex.x.to_ne_bytes());
            data.extend_from_slice(&vertex.y.to_ne_bytes());
        }

        unsafe {
            let buffer = self
                .gl
                .create_buffer()
                .map_err(DeviceError::BufferAllocation)?;
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.gl
                .buffer_data_u8_slice(glow::ARRAY_BUFFER, &data, glow::DYNAMIC_DRAW);
            self.gl
                .vertex_attrib_pointer_f32(self.a_position, 2, glow::FLOAT, false, 0, 0);
            self.gl.enable_vertex_attrib_array(self.a_position);

            // The previous shape's buffer is no longer referenced once its
            // draw has been issued.
            if let Some(old) = self.transfer_buffer.replace(buffer) {
                self.gl.delete_buffer(old);
            }
        }
        Ok(())
    }

    fn set_point_size(&mut self, size: f32) {
        // Constant vertex attribute; no array is enabled for a_size.
        unsafe { self.gl.vertex_attrib_1_f32(self.a_size, size) };
    }

    fn set_color(&mut self, rgba: [f32; 4]) {
        unsafe {
            self.gl
                .uniform_4_f32(Some(self.u_color), rgba[0], rgba[1], rgba[2], rgba[3]);
        }
    }

    fn draw_primitives(&mut self, topology: Topology, vertex_count: usize) {
        let mode = match topology {
            Topology::Points => glow::POINTS,
            Topology::TriangleList => glow::TRIANGLES,
            Topology::TriangleFan => glow::TRIANGLE_FAN,
        };
        unsafe { self.gl.draw_arrays(mode, 0, vertex_count as i32) };
    }

    fn clear_framebuffer(&mut self) {
        unsafe {
            self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }
}

impl Drop for GlowDevice<'_> {
    fn drop(&mut self) {
        if let Some(buffer) = self.transfer_buffer.take() {
            unsafe { self.gl.delete_buffer(buffer) };
        }
    }
}

fn compile_program(
    gl: &glow::Context,
    shader_version: &str,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<glow::Program, DeviceError> {
    unsafe {
        let program = gl.create_program().map_err(DeviceError::ShaderCompile)?;

        let stages = [
            (glow::VERTEX_SHADER, vertex_source),
            (glow::FRAGMENT_SHADER, fragment_source),
        ];
        let mut shaders = Vec::with_capacity(stages.len());
        for (stage, source) in stages {
            let shader = gl.create_shader(stage).map_err(DeviceError::ShaderCompile)?;
            gl.shader_source(shader, &format!("{shader_version}\n{source}"));
            gl.compile_shader(shader);
            if !gl.get_shader_compile_status(shader) {
                return Err(DeviceError::ShaderCompile(gl.get_shader_info_log(shader)));
            }
            gl.attach_shader(program, shader);
            shaders.push(shader);
        }

        gl.link_program(program);
        if !gl.get_program_link_status(program) {
            return Err(DeviceError::ShaderCompile(gl.get_program_info_log(program)));
        }

        for shader in shaders {
            gl.detach_shader(program, shader);
            gl.delete_shader(shader);
        }
        Ok(program)
    }
}
