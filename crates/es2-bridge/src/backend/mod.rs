//! Host graphics context abstraction.
//!
//! The bridge is backend-agnostic; in production the embedder hands it a
//! context backed by a real GL ES2 (or WebGL2-class) implementation. For
//! tests we provide a deterministic software context that records every
//! call.

mod soft;

pub use soft::{GlCall, SoftGl, SoftGlSource};

use crate::error::BridgeError;

/// Opaque reference to a host-owned GPU object.
///
/// Minted by the context on resource creation; the bridge never interprets
/// the value, it only stores it in the registry and hands it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlObject(pub u64);

/// Uniform location as reported by the host. `-1` is the GL "not found"
/// convention and is accepted by every upload call as a silent no-op.
pub type UniformLocation = i32;

/// The immediate-mode host context the bridge drives.
///
/// Method shapes deliberately mirror the GL ES2 entry points one to one;
/// enumeration parameters are raw GL tokens (see [`crate::gl`]). The bridge
/// issues these calls in exactly the order it received protocol commands,
/// and reads `get_error` after mutating sequences.
pub trait GlContext {
    // Shaders and programs.
    fn create_shader(&mut self, kind: u32) -> GlObject;
    fn shader_source(&mut self, shader: GlObject, source: &str);
    fn compile_shader(&mut self, shader: GlObject);
    fn shader_info_log(&mut self, shader: GlObject) -> String;
    fn create_program(&mut self) -> GlObject;
    fn attach_shader(&mut self, program: GlObject, shader: GlObject);
    fn bind_attrib_location(&mut self, program: GlObject, index: u32, name: &str);
    fn link_program(&mut self, program: GlObject);
    fn link_status(&mut self, program: GlObject) -> bool;
    fn program_info_log(&mut self, program: GlObject) -> String;
    fn use_program(&mut self, program: Option<GlObject>);
    fn get_uniform_location(&mut self, program: GlObject, name: &str) -> Option<UniformLocation>;

    // Textures.
    fn create_texture(&mut self) -> GlObject;
    fn bind_texture(&mut self, target: u32, texture: Option<GlObject>);
    fn active_texture(&mut self, unit: u32);
    #[allow(clippy::too_many_arguments)]
    fn tex_image_2d(
        &mut self,
        target: u32,
        level: i32,
        internal_format: u32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: Option<&[u8]>,
    );
    #[allow(clippy::too_many_arguments)]
    fn tex_sub_image_2d(
        &mut self,
        target: u32,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        width: i32,
        height: i32,
        format: u32,
        ty: u32,
        pixels: &[u8],
    );
    fn tex_parameter_i(&mut self, target: u32, pname: u32, value: u32);
    fn pixel_store_i(&mut self, pname: u32, value: i32);

    // Framebuffers.
    fn create_framebuffer(&mut self) -> GlObject;
    fn bind_framebuffer(&mut self, target: u32, framebuffer: Option<GlObject>);
    fn framebuffer_texture_2d(
        &mut self,
        target: u32,
        attachment: u32,
        tex_target: u32,
        texture: GlObject,
        level: i32,
    );

    // Buffers and vertex attributes.
    fn create_buffer(&mut self) -> GlObject;
    fn bind_buffer(&mut self, target: u32, buffer: Option<GlObject>);
    fn buffer_data(&mut self, target: u32, data: &[u8], usage: u32);
    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        ty: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn enable_vertex_attrib_array(&mut self, index: u32);
    fn disable_vertex_attrib_array(&mut self, index: u32);
    fn draw_elements(&mut self, mode: u32, count: i32, ty: u32, offset: i32);

    // Global state.
    fn enable(&mut self, cap: u32);
    fn disable(&mut self, cap: u32);
    fn blend_func(&mut self, src: u32, dst: u32);
    fn depth_mask(&mut self, enabled: bool);
    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&mut self, mask: u32);

    // Uniform uploads.
    fn uniform1i(&mut self, location: UniformLocation, v0: i32);
    fn uniform1f(&mut self, location: UniformLocation, v0: f32);
    fn uniform2f(&mut self, location: UniformLocation, v0: f32, v1: f32);
    fn uniform3f(&mut self, location: UniformLocation, v0: f32, v1: f32, v2: f32);
    fn uniform4f(&mut self, location: UniformLocation, v0: f32, v1: f32, v2: f32, v3: f32);
    fn uniform4fv(&mut self, location: UniformLocation, values: &[f32]);
    fn uniform_matrix4fv(&mut self, location: UniformLocation, transpose: bool, values: &[f32; 16]);

    // Queries.
    fn get_integer(&mut self, pname: u32) -> i32;
    fn get_error(&mut self) -> u32;
}

/// Lazily creates the host context on the bridge's first use.
///
/// The bridge holds the source for the whole session and asks it for a
/// context exactly once; creation failure is surfaced as
/// [`BridgeError::ContextUnavailable`] by whatever command triggered it.
pub trait ContextSource {
    type Context: GlContext;

    fn create_context(&mut self) -> Result<Self::Context, BridgeError>;
}

impl<C, F> ContextSource for F
where
    C: GlContext,
    F: FnMut() -> Result<C, BridgeError>,
{
    type Context = C;

    fn create_context(&mut self) -> Result<C, BridgeError> {
        self()
    }
}
