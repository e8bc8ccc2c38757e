//! Deterministic software GL context.
//!
//! Records every call issued by the bridge so tests can assert on exact
//! call order, and supports injecting host errors, shader logs and link
//! failures. No rasterization happens here.

use std::collections::{HashMap, HashSet, VecDeque};

use super::{ContextSource, GlContext, GlObject, UniformLocation};
use crate::error::BridgeError;
use crate::gl;

/// One recorded host call. Payloads are kept where tests assert on them
/// (buffer/texture uploads); pure getters are not recorded.
#[derive(Clone, Debug, PartialEq)]
pub enum GlCall {
    CreateShader { kind: u32, object: GlObject },
    ShaderSource { shader: GlObject, source: String },
    CompileShader { shader: GlObject },
    CreateProgram { object: GlObject },
    AttachShader { program: GlObject, shader: GlObject },
    BindAttribLocation { program: GlObject, index: u32, name: String },
    LinkProgram { program: GlObject },
    UseProgram { program: Option<GlObject> },

    CreateTexture { object: GlObject },
    BindTexture { target: u32, texture: Option<GlObject> },
    ActiveTexture { unit: u32 },
    TexImage2d { target: u32, level: i32, internal_format: u32, width: i32, height: i32, format: u32, ty: u32, len: usize },
    TexSubImage2d { target: u32, level: i32, x_offset: i32, y_offset: i32, width: i32, height: i32, format: u32, ty: u32, len: usize },
    TexParameterI { target: u32, pname: u32, value: u32 },
    PixelStoreI { pname: u32, value: i32 },

    CreateFramebuffer { object: GlObject },
    BindFramebuffer { target: u32, framebuffer: Option<GlObject> },
    FramebufferTexture2d { target: u32, attachment: u32, tex_target: u32, texture: GlObject, level: i32 },

    CreateBuffer { object: GlObject },
    BindBuffer { target: u32, buffer: Option<GlObject> },
    BufferData { target: u32, data: Vec<u8>, usage: u32 },
    VertexAttribPointer { index: u32, size: i32, ty: u32, normalized: bool, stride: i32, offset: i32 },
    EnableVertexAttribArray { index: u32 },
    DisableVertexAttribArray { index: u32 },
    DrawElements { mode: u32, count: i32, ty: u32, offset: i32 },

    Enable { cap: u32 },
    Disable { cap: u32 },
    BlendFunc { src: u32, dst: u32 },
    DepthMask { enabled: bool },
    Scissor { x: i32, y: i32, width: i32, height: i32 },
    Viewport { x: i32, y: i32, width: i32, height: i32 },
    ClearColor { r: f32, g: f32, b: f32, a: f32 },
    Clear { mask: u32 },

    Uniform1i { location: UniformLocation, v0: i32 },
    Uniform1f { location: UniformLocation, v0: f32 },
    Uniform2f { location: UniformLocation, v0: f32, v1: f32 },
    Uniform3f { location: UniformLocation, v0: f32, v1: f32, v2: f32 },
    Uniform4f { location: UniformLocation, v0: f32, v1: f32, v2: f32, v3: f32 },
    Uniform4fv { location: UniformLocation, values: Vec<f32> },
    UniformMatrix4fv { location: UniformLocation, transpose: bool, values: Vec<f32> },
}

#[derive(Default)]
pub struct SoftGl {
    next_object: u64,
    calls: Vec<GlCall>,

    // Injected behaviour.
    error_queue: VecDeque<u32>,
    next_shader_log: Option<String>,
    next_link_failure: Option<String>,
    missing_uniforms: HashSet<String>,

    shader_logs: HashMap<GlObject, String>,
    link_status: HashMap<GlObject, bool>,
    program_logs: HashMap<GlObject, String>,
    uniform_locations: HashMap<(GlObject, String), UniformLocation>,
    next_uniform_location: UniformLocation,
}

impl SoftGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls recorded so far, in issue order.
    pub fn calls(&self) -> &[GlCall] {
        &self.calls
    }

    /// Drain the recorded calls, leaving the log empty.
    pub fn take_calls(&mut self) -> Vec<GlCall> {
        std::mem::take(&mut self.calls)
    }

    /// Queue a GL error code; the next `get_error` returns it once.
    pub fn push_gl_error(&mut self, code: u32) {
        self.error_queue.push_back(code);
    }

    /// The next compiled shader reports this info log.
    pub fn set_next_shader_log(&mut self, log: impl Into<String>) {
        self.next_shader_log = Some(log.into());
    }

    /// The next linked program reports link failure with this info log.
    pub fn set_next_link_failure(&mut self, log: impl Into<String>) {
        self.next_link_failure = Some(log.into());
    }

    /// `get_uniform_location` answers `None` for this name.
    pub fn set_missing_uniform(&mut self, name: impl Into<String>) {
        self.missing_uniforms.insert(name.into());
    }

    fn mint(&mut self) -> GlObject {
        self.next_object += 1;
        GlObject(self.next_object)
    }
}

impl GlContext for SoftGl {
    fn create_shader(&mut self, kind: u32) -> GlObject {
        let object = self.mint();
        if let Some(log) = self.next_shader_log.take() {
            self.shader_logs.insert(object, log);
        }
        self.calls.push(GlCall::CreateShader { kind, object });
        object
    }

    fn shader_source(&mut self, shader: GlObject, source: &str) {
        self.calls.push(GlCall::ShaderSource {
            shader,
            source: source.to_owned(),
        });
    }

    fn compile_shader(&mut self, shader: GlObject) {
        self.calls.push(GlCall::CompileShader { shader });
    }

    fn shader_info_log(&mut self, shader: GlObject) -> String {
        self.shader_logs.get(&shader).cloned().unwrap_or_default()
    }

    fn create_program(&mut self) -> GlObject {
        let object = self.mint();
        match self.next_link_failure.take() {
            Some(log) => {
                self.link_status.insert(object, false);
                self.program_logs.insert(object, log);
            }
            None => {
                self.link_status.insert(object, true);
            }
        }
        self.calls.push(GlCall::CreateProgram { object });
        object
    }

    fn attach_shader(&mut self, program: GlObject, shader: GlObject) {
        self.calls.push(GlCall::AttachShader { program, shader });
    }

    fn bind_attrib_location(&mut self, program: GlObject, index: u32, name: &str) {
        self.calls.push(GlCall::BindAttribLocation {
            program,
            index,
            name: name.to_owned(),
        });
    }

    fn link_program(&mut self, program: GlObject) {
        self.calls.push(GlCall::LinkProgram { program });
    }

    fn link_status(&mut self, program: GlObject) -> bool {
        self.link_status.get(&program).copied().unwrap_or(true)
    }

    fn program_info_log(&mut self, program: GlObject) -> String {
        self.program_logs.get(&program).cloned().unwrap_or_default()
    }

    fn use_program(&mut self, program: Option<GlObject>) {
        self.calls.push(GlCall::UseProgram { program });
    }

    fn get_uniform_location(&mut self, program: GlObject, name: &str) -> Option<UniformLocation> {
        if self.missing_uniforms.contains(name) {
            return None;
        }
        let key = (program, name.to_owned());
        if let Some(&loc) = self.uniform_locations.get(&key) {
            return Some(loc);
        }
        let loc = self.next_uniform_location;
        self.next_uniform_location += 1;
        self.uniform_locations.insert(key, loc);
        Some(loc)
    }

    fn create_texture(&mut self) -> GlObject {
        let object = self.mint();
        self.calls.push(GlCall::CreateTexture { object });
        object
    }

    fn bind_texture(&mut self, target: u32, texture: Option<GlObject>) {
        self.calls.push(GlCall::BindTexture { target, texture });
    }

    fn active_texture(&mut self, unit: u32) {
        self.calls.push(GlCall::ActiveTexture { unit });
    }

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
    ) {
        self.calls.push(GlCall::TexImage2d {
            target,
            level,
            internal_format,
            width,
            height,
            format,
            ty,
            len: pixels.map_or(0, <[u8]>::len),
        });
    }

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
    ) {
        self.calls.push(GlCall::TexSubImage2d {
            target,
            level,
            x_offset,
            y_offset,
            width,
            height,
            format,
            ty,
            len: pixels.len(),
        });
    }

    fn tex_parameter_i(&mut self, target: u32, pname: u32, value: u32) {
        self.calls.push(GlCall::TexParameterI { target, pname, value });
    }

    fn pixel_store_i(&mut self, pname: u32, value: i32) {
        self.calls.push(GlCall::PixelStoreI { pname, value });
    }

    fn create_framebuffer(&mut self) -> GlObject {
        let object = self.mint();
        self.calls.push(GlCall::CreateFramebuffer { object });
        object
    }

    fn bind_framebuffer(&mut self, target: u32, framebuffer: Option<GlObject>) {
        self.calls.push(GlCall::BindFramebuffer { target, framebuffer });
    }

    fn framebuffer_texture_2d(
        &mut self,
        target: u32,
        attachment: u32,
        tex_target: u32,
        texture: GlObject,
        level: i32,
    ) {
        self.calls.push(GlCall::FramebufferTexture2d {
            target,
            attachment,
            tex_target,
            texture,
            level,
        });
    }

    fn create_buffer(&mut self) -> GlObject {
        let object = self.mint();
        self.calls.push(GlCall::CreateBuffer { object });
        object
    }

    fn bind_buffer(&mut self, target: u32, buffer: Option<GlObject>) {
        self.calls.push(GlCall::BindBuffer { target, buffer });
    }

    fn buffer_data(&mut self, target: u32, data: &[u8], usage: u32) {
        self.calls.push(GlCall::BufferData {
            target,
            data: data.to_vec(),
            usage,
        });
    }

    fn vertex_attrib_pointer(
        &mut self,
        index: u32,
        size: i32,
        ty: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.calls.push(GlCall::VertexAttribPointer {
            index,
            size,
            ty,
            normalized,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&mut self, index: u32) {
        self.calls.push(GlCall::EnableVertexAttribArray { index });
    }

    fn disable_vertex_attrib_array(&mut self, index: u32) {
        self.calls.push(GlCall::DisableVertexAttribArray { index });
    }

    fn draw_elements(&mut self, mode: u32, count: i32, ty: u32, offset: i32) {
        self.calls.push(GlCall::DrawElements {
            mode,
            count,
            ty,
            offset,
        });
    }

    fn enable(&mut self, cap: u32) {
        self.calls.push(GlCall::Enable { cap });
    }

    fn disable(&mut self, cap: u32) {
        self.calls.push(GlCall::Disable { cap });
    }

    fn blend_func(&mut self, src: u32, dst: u32) {
        self.calls.push(GlCall::BlendFunc { src, dst });
    }

    fn depth_mask(&mut self, enabled: bool) {
        self.calls.push(GlCall::DepthMask { enabled });
    }

    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(GlCall::Scissor { x, y, width, height });
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(GlCall::Viewport { x, y, width, height });
    }

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.calls.push(GlCall::ClearColor { r, g, b, a });
    }

    fn clear(&mut self, mask: u32) {
        self.calls.push(GlCall::Clear { mask });
    }

    fn uniform1i(&mut self, location: UniformLocation, v0: i32) {
        self.calls.push(GlCall::Uniform1i { location, v0 });
    }

    fn uniform1f(&mut self, location: UniformLocation, v0: f32) {
        self.calls.push(GlCall::Uniform1f { location, v0 });
    }

    fn uniform2f(&mut self, location: UniformLocation, v0: f32, v1: f32) {
        self.calls.push(GlCall::Uniform2f { location, v0, v1 });
    }

    fn uniform3f(&mut self, location: UniformLocation, v0: f32, v1: f32, v2: f32) {
        self.calls.push(GlCall::Uniform3f { location, v0, v1, v2 });
    }

    fn uniform4f(&mut self, location: UniformLocation, v0: f32, v1: f32, v2: f32, v3: f32) {
        self.calls.push(GlCall::Uniform4f {
            location,
            v0,
            v1,
            v2,
            v3,
        });
    }

    fn uniform4fv(&mut self, location: UniformLocation, values: &[f32]) {
        self.calls.push(GlCall::Uniform4fv {
            location,
            values: values.to_vec(),
        });
    }

    fn uniform_matrix4fv(&mut self, location: UniformLocation, transpose: bool, values: &[f32; 16]) {
        self.calls.push(GlCall::UniformMatrix4fv {
            location,
            transpose,
            values: values.to_vec(),
        });
    }

    fn get_integer(&mut self, pname: u32) -> i32 {
        match pname {
            gl::MAX_TEXTURE_SIZE => 4096,
            gl::MAX_VERTEX_ATTRIBS => 16,
            gl::MAX_TEXTURE_IMAGE_UNITS => 16,
            gl::MAX_VERTEX_TEXTURE_IMAGE_UNITS => 4,
            gl::MAX_FRAGMENT_UNIFORM_VECTORS => 224,
            gl::MAX_VERTEX_UNIFORM_VECTORS => 256,
            gl::MAX_VARYING_VECTORS => 15,
            _ => 0,
        }
    }

    fn get_error(&mut self) -> u32 {
        self.error_queue.pop_front().unwrap_or(gl::NO_ERROR)
    }
}

/// [`ContextSource`] that hands out one prepared [`SoftGl`].
pub struct SoftGlSource {
    context: Option<SoftGl>,
}

impl SoftGlSource {
    pub fn new() -> Self {
        Self::with(SoftGl::new())
    }

    /// Use a preconfigured context (injected errors, link failures, ...).
    pub fn with(context: SoftGl) -> Self {
        Self {
            context: Some(context),
        }
    }
}

impl Default for SoftGlSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextSource for SoftGlSource {
    type Context = SoftGl;

    fn create_context(&mut self) -> Result<SoftGl, BridgeError> {
        self.context
            .take()
            .ok_or_else(|| BridgeError::ContextUnavailable("soft context already taken".into()))
    }
}
