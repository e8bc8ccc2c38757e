//! Command dispatcher: one method per protocol command.
//!
//! The embedding pipeline calls these synchronously, one at a time, on its
//! render thread. Host calls are issued immediately and in exactly the
//! order received; the binding state one command sets up is consumed by
//! the next. After every state-mutating sequence the host error state is
//! read and a non-zero value aborts the in-flight command (never the
//! session).

use es2_protocol::{CodeSpace, Handle, IntParam};
use tracing::{debug, error, warn};

use crate::backend::{ContextSource, GlContext};
use crate::error::BridgeError;
use crate::gl;
use crate::registry::{ResourceKind, ResourceTable};
use crate::state::ShadowState;
use crate::translate::translate;

/// The fixed handle reported for the (single) native context.
pub const NATIVE_CONTEXT_HANDLE: u64 = 1;

/// Interleaved vertex layout used by the quad draw: 3 position floats,
/// then two 2-float texcoord pairs, all in one buffer; colors travel in a
/// second buffer as 4 normalized unsigned bytes per vertex.
const TEXCOORD_BYTES: i32 = 2 * 4;
const POSITION_BYTES: i32 = 3 * 4;
const VERTEX_STRIDE_BYTES: i32 = 2 * TEXCOORD_BYTES + POSITION_BYTES;
const COLOR_STRIDE_BYTES: i32 = 4;

/// Number of vertex attribute slots the quad pipeline uses
/// (0: position, 1: color, 2: texcoord A, 3: texcoord B).
const VERTEX_ATTRIB_SLOTS: u32 = 4;

/// Session-scoped translation layer from the protocol's driver calls to a
/// host GL context.
///
/// The context is acquired from `S` lazily, on the first command that
/// needs it, and lives for the rest of the session. Registry and shadow
/// state are per-executor, so independent sessions and tests stay
/// isolated.
pub struct Es2Executor<S: ContextSource> {
    source: S,
    ctx: Option<S::Context>,
    resources: ResourceTable,
    shadow: ShadowState,
}

impl<S: ContextSource> Es2Executor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            ctx: None,
            resources: ResourceTable::new(),
            shadow: ShadowState::default(),
        }
    }

    /// The live host context, if one has been created yet. Intended for
    /// inspection (tests, diagnostics); commands go through the methods
    /// below.
    pub fn host_context(&mut self) -> Option<&mut S::Context> {
        self.ctx.as_mut()
    }

    pub fn resources(&self) -> &ResourceTable {
        &self.resources
    }

    pub fn shadow(&self) -> ShadowState {
        self.shadow
    }

    /// Borrow the context (creating it on first use), registry and shadow
    /// state together.
    fn session(
        &mut self,
    ) -> Result<(&mut S::Context, &mut ResourceTable, &mut ShadowState), BridgeError> {
        if self.ctx.is_none() {
            self.ctx = Some(self.source.create_context()?);
        }
        let Some(ctx) = self.ctx.as_mut() else {
            return Err(BridgeError::ContextUnavailable(
                "context creation yielded nothing".into(),
            ));
        };
        Ok((ctx, &mut self.resources, &mut self.shadow))
    }

    // --- Context lifecycle -------------------------------------------------

    /// Context bootstrap: Prism-style premultiplied-alpha blending, depth
    /// writes and depth test off, transparent clear color. Returns the
    /// native context handle.
    pub fn initialize(&mut self) -> Result<u64, BridgeError> {
        let (ctx, _, shadow) = self.session()?;
        ctx.enable(gl::BLEND);
        ctx.blend_func(gl::ONE, gl::ONE_MINUS_SRC_ALPHA);
        ctx.depth_mask(false);
        ctx.disable(gl::DEPTH_TEST);
        ctx.clear_color(0.0, 0.0, 0.0, 0.0);
        shadow.depth_writes_enabled = false;
        check_host_error(ctx)?;
        Ok(NATIVE_CONTEXT_HANDLE)
    }

    /// The session has exactly one context; making it current is a no-op.
    pub fn make_current(&mut self) {
        debug!("make_current: single-context session, nothing to do");
    }

    pub fn native_context_handle(&self) -> u64 {
        NATIVE_CONTEXT_HANDLE
    }

    // --- Resource creation -------------------------------------------------

    /// Compile a shader of the requested stage. A non-empty compile log is
    /// reported but does not abort: the link-status check on program
    /// creation is the actual gate.
    pub fn compile_shader(&mut self, source: &str, vertex: bool) -> Result<Handle, BridgeError> {
        let (ctx, resources, _) = self.session()?;
        let kind = if vertex {
            gl::VERTEX_SHADER
        } else {
            gl::FRAGMENT_SHADER
        };
        let shader = ctx.create_shader(kind);
        ctx.shader_source(shader, source);
        ctx.compile_shader(shader);
        let log = ctx.shader_info_log(shader);
        if !log.is_empty() {
            warn!(vertex, %log, "shader compile log");
        }
        let handle = resources.allocate(ResourceKind::Shader, shader);
        check_host_error(ctx)?;
        Ok(handle)
    }

    /// Create a program from one vertex shader and a sequence of fragment
    /// shaders, binding every named attribute to its explicit index before
    /// linking. Link failure is reported as a diagnostic; the (unusable)
    /// handle is still returned.
    pub fn create_program(
        &mut self,
        vertex: Handle,
        fragments: &[Handle],
        attributes: &[(&str, u32)],
    ) -> Result<Handle, BridgeError> {
        let (ctx, resources, _) = self.session()?;
        let program = ctx.create_program();
        let handle = resources.allocate(ResourceKind::Program, program);

        let vertex_shader = resources.get_kind(vertex, ResourceKind::Shader)?;
        ctx.attach_shader(program, vertex_shader);
        for &fragment in fragments {
            let fragment_shader = resources.get_kind(fragment, ResourceKind::Shader)?;
            ctx.attach_shader(program, fragment_shader);
        }
        for &(name, index) in attributes {
            debug!(name, index, "bind attribute location");
            ctx.bind_attrib_location(program, index, name);
        }
        ctx.link_program(program);
        if !ctx.link_status(program) {
            let log = ctx.program_info_log(program);
            error!(%log, "program link failed");
        }
        check_host_error(ctx)?;
        Ok(handle)
    }

    /// Create a `width` x `height` RGBA8 texture, zero-initialized, with
    /// linear min/mag filtering, and leave it bound.
    pub fn create_texture(&mut self, width: u32, height: u32) -> Result<Handle, BridgeError> {
        let (ctx, resources, _) = self.session()?;
        let texture = ctx.create_texture();
        ctx.bind_texture(gl::TEXTURE_2D, Some(texture));
        let zeroed = vec![0u8; 4 * width as usize * height as usize];
        ctx.tex_image_2d(
            gl::TEXTURE_2D,
            0,
            gl::RGBA,
            width as i32,
            height as i32,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            Some(&zeroed),
        );
        let handle = resources.allocate(ResourceKind::Texture, texture);
        ctx.tex_parameter_i(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR);
        ctx.tex_parameter_i(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR);
        check_host_error(ctx)?;
        Ok(handle)
    }

    /// Create an empty texture and leave it bound; no storage is allocated
    /// until a later image upload.
    pub fn gen_and_bind_texture(&mut self) -> Result<Handle, BridgeError> {
        let (ctx, resources, _) = self.session()?;
        let texture = ctx.create_texture();
        let handle = resources.allocate(ResourceKind::Texture, texture);
        ctx.bind_texture(gl::TEXTURE_2D, Some(texture));
        check_host_error(ctx)?;
        Ok(handle)
    }

    /// Create a framebuffer with `texture` as color attachment 0 at mip
    /// level 0, and leave it bound.
    pub fn create_fbo(&mut self, texture: Handle) -> Result<Handle, BridgeError> {
        let (ctx, resources, _) = self.session()?;
        let framebuffer = ctx.create_framebuffer();
        let texture_object = resources.get_kind(texture, ResourceKind::Texture)?;
        ctx.bind_framebuffer(gl::FRAMEBUFFER, Some(framebuffer));
        ctx.framebuffer_texture_2d(
            gl::FRAMEBUFFER,
            gl::COLOR_ATTACHMENT0,
            gl::TEXTURE_2D,
            texture_object,
            0,
        );
        let handle = resources.allocate(ResourceKind::Framebuffer, framebuffer);
        check_host_error(ctx)?;
        Ok(handle)
    }

    /// Upload the first `count` elements of `data` as a 16-bit index
    /// buffer with static usage, and leave it bound.
    pub fn create_index_buffer16(
        &mut self,
        data: &[u16],
        count: usize,
    ) -> Result<Handle, BridgeError> {
        let indices = data
            .get(..count)
            .ok_or(BridgeError::PayloadRange("index buffer count exceeds payload"))?;
        let (ctx, resources, _) = self.session()?;
        let buffer = ctx.create_buffer();
        ctx.bind_buffer(gl::ELEMENT_ARRAY_BUFFER, Some(buffer));
        ctx.buffer_data(
            gl::ELEMENT_ARRAY_BUFFER,
            bytemuck::cast_slice(indices),
            gl::STATIC_DRAW,
        );
        let handle = resources.allocate(ResourceKind::IndexBuffer, buffer);
        check_host_error(ctx)?;
        Ok(handle)
    }

    // --- Binding -----------------------------------------------------------

    pub fn bind_texture(&mut self, texture: Handle) -> Result<(), BridgeError> {
        let (ctx, resources, _) = self.session()?;
        let object = resources.get_kind(texture, ResourceKind::Texture)?;
        ctx.bind_texture(gl::TEXTURE_2D, Some(object));
        check_host_error(ctx)
    }

    /// Bind a framebuffer; handle `0` names the default framebuffer.
    pub fn bind_fbo(&mut self, framebuffer: Handle) -> Result<(), BridgeError> {
        let (ctx, resources, _) = self.session()?;
        let object = if framebuffer == 0 {
            None
        } else {
            Some(resources.get_kind(framebuffer, ResourceKind::Framebuffer)?)
        };
        ctx.bind_framebuffer(gl::FRAMEBUFFER, object);
        check_host_error(ctx)
    }

    pub fn set_index_buffer(&mut self, buffer: Handle) -> Result<(), BridgeError> {
        let (ctx, resources, _) = self.session()?;
        let object = resources.get_kind(buffer, ResourceKind::IndexBuffer)?;
        ctx.bind_buffer(gl::ELEMENT_ARRAY_BUFFER, Some(object));
        check_host_error(ctx)
    }

    pub fn use_program(&mut self, program: Handle) -> Result<(), BridgeError> {
        let (ctx, resources, _) = self.session()?;
        let object = resources.get_kind(program, ResourceKind::Program)?;
        ctx.use_program(Some(object));
        check_host_error(ctx)
    }

    // --- Global state ------------------------------------------------------

    pub fn active_texture(&mut self, unit: u32) -> Result<(), BridgeError> {
        let (ctx, _, _) = self.session()?;
        ctx.active_texture(gl::TEXTURE0 + unit);
        check_host_error(ctx)
    }

    pub fn blend_func(&mut self, src_code: u32, dst_code: u32) -> Result<(), BridgeError> {
        let src = translate(CodeSpace::BlendFactor, src_code);
        let dst = translate(CodeSpace::BlendFactor, dst_code);
        let (ctx, _, _) = self.session()?;
        ctx.blend_func(src, dst);
        check_host_error(ctx)
    }

    /// Enable or disable the scissor test, updating the shadow flag in the
    /// same step so the clear command can consult it without re-querying
    /// the host.
    pub fn scissor_test(
        &mut self,
        enabled: bool,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), BridgeError> {
        let (ctx, _, shadow) = self.session()?;
        if enabled {
            ctx.enable(gl::SCISSOR_TEST);
            ctx.scissor(x, y, width, height);
        } else {
            ctx.disable(gl::SCISSOR_TEST);
        }
        shadow.scissor_enabled = enabled;
        check_host_error(ctx)
    }

    /// Toggle depth writes. Observed traffic only ever passes `false`.
    pub fn set_depth_writes(&mut self, enabled: bool) -> Result<(), BridgeError> {
        let (ctx, _, shadow) = self.session()?;
        ctx.depth_mask(enabled);
        shadow.depth_writes_enabled = enabled;
        check_host_error(ctx)
    }

    pub fn pixel_store(&mut self, param_code: u32, value: i32) -> Result<(), BridgeError> {
        let pname = translate(CodeSpace::PixelStore, param_code);
        let (ctx, _, _) = self.session()?;
        ctx.pixel_store_i(pname, value);
        check_host_error(ctx)
    }

    pub fn update_viewport(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), BridgeError> {
        let (ctx, _, _) = self.session()?;
        ctx.viewport(x, y, width, height);
        check_host_error(ctx)
    }

    /// Set texture wrap state on the currently bound texture. Both axes
    /// are driven to clamp-to-edge regardless of the requested mode; the
    /// repeat path has never been exercised by the pipeline and is
    /// deliberately left unwired (see DESIGN.md).
    pub fn update_wrap_state(
        &mut self,
        _texture: Handle,
        wrap_code: u32,
    ) -> Result<(), BridgeError> {
        debug!(wrap_code, "update_wrap_state: clamping both axes");
        let (ctx, _, _) = self.session()?;
        ctx.tex_parameter_i(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE);
        ctx.tex_parameter_i(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE);
        check_host_error(ctx)
    }

    /// Set min/mag filters on the currently bound texture from protocol
    /// filter codes.
    pub fn tex_params_min_max(&mut self, min_code: u32, max_code: u32) -> Result<(), BridgeError> {
        let min = translate(CodeSpace::TextureParam, min_code);
        let max = translate(CodeSpace::TextureParam, max_code);
        let (ctx, _, _) = self.session()?;
        ctx.tex_parameter_i(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, min);
        ctx.tex_parameter_i(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, max);
        check_host_error(ctx)
    }

    pub fn enable_vertex_attributes(&mut self) -> Result<(), BridgeError> {
        let (ctx, _, _) = self.session()?;
        for index in 0..VERTEX_ATTRIB_SLOTS {
            ctx.enable_vertex_attrib_array(index);
        }
        check_host_error(ctx)
    }

    pub fn disable_vertex_attributes(&mut self) -> Result<(), BridgeError> {
        let (ctx, _, _) = self.session()?;
        for index in 0..VERTEX_ATTRIB_SLOTS {
            ctx.disable_vertex_attrib_array(index);
        }
        check_host_error(ctx)
    }

    // --- Texture uploads ---------------------------------------------------

    /// Full level upload to the currently bound texture. The translated
    /// pixel format doubles as the internal format. With `use_mipmap` the
    /// min filter is switched to a mipmapped mode first.
    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_2d(
        &mut self,
        target_code: u32,
        level: i32,
        width: i32,
        height: i32,
        format_code: u32,
        type_code: u32,
        pixels: Option<&[u8]>,
        use_mipmap: bool,
    ) -> Result<(), BridgeError> {
        let target = translate(CodeSpace::TextureParam, target_code);
        let format = translate(CodeSpace::PixelFormat, format_code);
        let ty = translate(CodeSpace::DataType, type_code);
        let (ctx, _, _) = self.session()?;
        if use_mipmap {
            ctx.tex_parameter_i(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR_MIPMAP_NEAREST);
        }
        ctx.tex_image_2d(target, level, format, width, height, format, ty, pixels);
        check_host_error(ctx)
    }

    /// Sub-region upload against whatever texture is currently bound; the
    /// caller must have bound the target texture first (protocol contract,
    /// not enforced here).
    #[allow(clippy::too_many_arguments)]
    pub fn tex_sub_image_2d(
        &mut self,
        target_code: u32,
        level: i32,
        x_offset: i32,
        y_offset: i32,
        width: i32,
        height: i32,
        format_code: u32,
        type_code: u32,
        pixels: &[u8],
    ) -> Result<(), BridgeError> {
        let target = translate(CodeSpace::TextureParam, target_code);
        let format = translate(CodeSpace::PixelFormat, format_code);
        let ty = translate(CodeSpace::DataType, type_code);
        let (ctx, _, _) = self.session()?;
        ctx.tex_sub_image_2d(target, level, x_offset, y_offset, width, height, format, ty, pixels);
        check_host_error(ctx)
    }

    // --- Draw and clear ----------------------------------------------------

    /// Upload interleaved vertex data and per-vertex colors as two fresh
    /// buffers, point the four attribute slots at them, and draw
    /// `num_vertices / 4` quads (two triangles each) through the currently
    /// bound 16-bit index buffer. Attribute arrays must already be enabled
    /// by a prior [`Self::enable_vertex_attributes`] call.
    pub fn draw_indexed_quads(
        &mut self,
        num_vertices: u32,
        coords: &[f32],
        colors: &[u8],
    ) -> Result<(), BridgeError> {
        let (ctx, _, _) = self.session()?;

        let coord_buffer = ctx.create_buffer();
        ctx.bind_buffer(gl::ARRAY_BUFFER, Some(coord_buffer));
        ctx.buffer_data(gl::ARRAY_BUFFER, bytemuck::cast_slice(coords), gl::STATIC_DRAW);
        ctx.vertex_attrib_pointer(0, 3, gl::FLOAT, false, VERTEX_STRIDE_BYTES, 0);
        ctx.vertex_attrib_pointer(2, 2, gl::FLOAT, false, VERTEX_STRIDE_BYTES, POSITION_BYTES);
        ctx.vertex_attrib_pointer(
            3,
            2,
            gl::FLOAT,
            false,
            VERTEX_STRIDE_BYTES,
            POSITION_BYTES + TEXCOORD_BYTES,
        );

        let color_buffer = ctx.create_buffer();
        ctx.bind_buffer(gl::ARRAY_BUFFER, Some(color_buffer));
        ctx.buffer_data(gl::ARRAY_BUFFER, colors, gl::STATIC_DRAW);
        ctx.vertex_attrib_pointer(1, 4, gl::UNSIGNED_BYTE, true, COLOR_STRIDE_BYTES, 0);

        let quad_count = num_vertices / 4;
        debug!(num_vertices, quad_count, "draw_indexed_quads");
        ctx.draw_elements(
            gl::TRIANGLES,
            (quad_count * 2 * 3) as i32,
            gl::UNSIGNED_SHORT,
            0,
        );
        check_host_error(ctx)
    }

    /// Clear color and/or depth. `glClear` honours the current scissor, so
    /// with `ignore_scissor` the scissor test is suspended around the
    /// clear when the shadow state says it is on; likewise depth writes
    /// are forced on around a depth clear and forced back afterwards. The
    /// shadow state is unchanged on exit.
    #[allow(clippy::too_many_arguments)]
    pub fn clear_buffers(
        &mut self,
        red: f32,
        green: f32,
        blue: f32,
        alpha: f32,
        clear_color: bool,
        clear_depth: bool,
        ignore_scissor: bool,
    ) -> Result<(), BridgeError> {
        let (ctx, _, shadow) = self.session()?;

        // With nothing to clear, the zero-mask clear is still issued but no
        // state is toggled around it.
        let suspend_scissor =
            ignore_scissor && shadow.scissor_enabled && (clear_color || clear_depth);
        if suspend_scissor {
            ctx.disable(gl::SCISSOR_TEST);
        }

        let mut mask = 0;
        if clear_color {
            mask |= gl::COLOR_BUFFER_BIT;
            ctx.clear_color(red, green, blue, alpha);
        }
        if clear_depth {
            mask |= gl::DEPTH_BUFFER_BIT;
            if shadow.depth_writes_enabled {
                ctx.depth_mask(true);
            }
            ctx.clear(mask);
            if shadow.depth_writes_enabled {
                ctx.depth_mask(false);
            }
        } else {
            // Possibly a zero mask; issuing the no-op clear keeps the host
            // call sequence identical to the protocol's.
            ctx.clear(mask);
        }

        if suspend_scissor {
            ctx.enable(gl::SCISSOR_TEST);
        }
        check_host_error(ctx)
    }

    // --- Uniform uploads ---------------------------------------------------

    /// Uniform location for `name` in `program`, `-1` when absent.
    pub fn get_uniform_location(
        &mut self,
        program: Handle,
        name: &str,
    ) -> Result<i32, BridgeError> {
        let (ctx, resources, _) = self.session()?;
        let object = resources.get_kind(program, ResourceKind::Program)?;
        let location = ctx.get_uniform_location(object, name).unwrap_or(-1);
        check_host_error(ctx)?;
        Ok(location)
    }

    pub fn uniform1i(&mut self, location: i32, v0: i32) -> Result<(), BridgeError> {
        let (ctx, _, _) = self.session()?;
        ctx.uniform1i(location, v0);
        check_host_error(ctx)
    }

    pub fn uniform1f(&mut self, location: i32, v0: f32) -> Result<(), BridgeError> {
        let (ctx, _, _) = self.session()?;
        ctx.uniform1f(location, v0);
        check_host_error(ctx)
    }

    pub fn uniform2f(&mut self, location: i32, v0: f32, v1: f32) -> Result<(), BridgeError> {
        let (ctx, _, _) = self.session()?;
        ctx.uniform2f(location, v0, v1);
        check_host_error(ctx)
    }

    pub fn uniform3f(&mut self, location: i32, v0: f32, v1: f32, v2: f32) -> Result<(), BridgeError> {
        let (ctx, _, _) = self.session()?;
        ctx.uniform3f(location, v0, v1, v2);
        check_host_error(ctx)
    }

    pub fn uniform4f(
        &mut self,
        location: i32,
        v0: f32,
        v1: f32,
        v2: f32,
        v3: f32,
    ) -> Result<(), BridgeError> {
        let (ctx, _, _) = self.session()?;
        ctx.uniform4f(location, v0, v1, v2, v3);
        check_host_error(ctx)
    }

    /// Upload `float_count` floats taken from `data` starting at
    /// `byte_offset` as a vec4 array.
    pub fn uniform4fv(
        &mut self,
        location: i32,
        float_count: usize,
        data: &[f32],
        byte_offset: usize,
    ) -> Result<(), BridgeError> {
        if byte_offset % 4 != 0 {
            return Err(BridgeError::PayloadRange("uniform4fv offset not float-aligned"));
        }
        let start = byte_offset / 4;
        let values = start
            .checked_add(float_count)
            .and_then(|end| data.get(start..end))
            .ok_or(BridgeError::PayloadRange("uniform4fv range exceeds payload"))?;
        let (ctx, _, _) = self.session()?;
        ctx.uniform4fv(location, values);
        check_host_error(ctx)
    }

    /// Upload a 4x4 matrix, never transposed.
    pub fn uniform_matrix4fv(
        &mut self,
        location: i32,
        values: &[f32; 16],
    ) -> Result<(), BridgeError> {
        let (ctx, _, _) = self.session()?;
        ctx.uniform_matrix4fv(location, false, values);
        check_host_error(ctx)
    }

    // --- Queries -----------------------------------------------------------

    /// Integer implementation-limit query. The "components" parameters
    /// (125, 128) scale the host's "vectors" answer by 4; undocumented
    /// codes answer `1`.
    pub fn get_int_param(&mut self, param_code: u32) -> Result<i32, BridgeError> {
        let (ctx, _, _) = self.session()?;
        let answer = match IntParam::from_code(param_code) {
            Some(IntParam::MaxFragmentUniformComponents) => {
                ctx.get_integer(gl::MAX_FRAGMENT_UNIFORM_VECTORS)
            }
            Some(IntParam::MaxTextureUnits) => ctx.get_integer(gl::MAX_TEXTURE_IMAGE_UNITS),
            Some(IntParam::MaxTextureSize) => ctx.get_integer(gl::MAX_TEXTURE_SIZE),
            Some(IntParam::MaxVertexAttributes) => ctx.get_integer(gl::MAX_VERTEX_ATTRIBS),
            Some(IntParam::MaxVaryingComponents) => 4 * ctx.get_integer(gl::MAX_VARYING_VECTORS),
            Some(IntParam::MaxVertexTextureUnits) => {
                ctx.get_integer(gl::MAX_VERTEX_TEXTURE_IMAGE_UNITS)
            }
            Some(IntParam::MaxVertexUniformComponents) => {
                4 * ctx.get_integer(gl::MAX_VERTEX_UNIFORM_VECTORS)
            }
            None => {
                debug!(param_code, "unknown int parameter, answering 1");
                1
            }
        };
        Ok(answer)
    }
}

/// Error sentinel: read the host error state and escalate non-zero values.
/// The in-flight command is aborted; registry, shadow state and context
/// are left as-is for the next command.
fn check_host_error<C: GlContext>(ctx: &mut C) -> Result<(), BridgeError> {
    let code = ctx.get_error();
    if code != gl::NO_ERROR {
        error!("host GL error 0x{code:04x}");
        return Err(BridgeError::HostGl(code));
    }
    Ok(())
}
