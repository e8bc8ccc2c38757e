//! Windowing-toolkit boundary stubs.
//!
//! The embedding toolkit drives a handful of window/view lifecycle calls
//! through the same native surface as the GL commands. None of them affect
//! rendering here: they are no-ops or trivial property mirrors, logged at
//! debug level so traffic stays visible. No state in this module feeds
//! back into the executor.

use tracing::debug;

/// Fixed native view handle reported to the toolkit.
pub const NATIVE_VIEW_HANDLE: u64 = 1;

/// Synchronous handoff of work to the host-controlled UI thread.
///
/// The call must not return until the task has run to completion; it is a
/// blocking call-through, not a fire-and-forget dispatch.
pub trait UiDispatcher {
    fn invoke_and_wait(&self, task: &mut dyn FnMut());
}

/// Dispatcher for hosts whose UI thread is the calling thread: runs the
/// task inline, which trivially satisfies the completion guarantee.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineDispatcher;

impl UiDispatcher for InlineDispatcher {
    fn invoke_and_wait(&self, task: &mut dyn FnMut()) {
        debug!("invoke_and_wait: running task inline");
        task();
        debug!("invoke_and_wait: task done");
    }
}

/// Property mirror for the toolkit's window stub.
#[derive(Clone, Debug, Default)]
pub struct WindowStub {
    pub alpha: f32,
    pub background: [f32; 3],
    pub visible: bool,
    pub resizable: bool,
    pub focusable: bool,
    pub minimum_size: Option<(u32, u32)>,
    pub maximum_size: Option<(u32, u32)>,
    pub view: Option<u64>,
}

impl WindowStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        debug!(alpha, "window set_alpha");
        self.alpha = alpha;
    }

    pub fn set_background(&mut self, r: f32, g: f32, b: f32) {
        debug!(r, g, b, "window set_background");
        self.background = [r, g, b];
    }

    pub fn set_visible(&mut self, visible: bool) {
        debug!(visible, "window set_visible");
        self.visible = visible;
    }

    pub fn set_resizable(&mut self, resizable: bool) {
        debug!(resizable, "window set_resizable");
        self.resizable = resizable;
    }

    pub fn set_focusable(&mut self, focusable: bool) {
        debug!(focusable, "window set_focusable");
        self.focusable = focusable;
    }

    pub fn request_focus(&mut self) {
        debug!("window request_focus (no-op)");
    }

    pub fn set_icon(&mut self) {
        debug!("window set_icon (no-op)");
    }

    pub fn set_minimum_size(&mut self, width: u32, height: u32) {
        debug!(width, height, "window set_minimum_size");
        self.minimum_size = Some((width, height));
    }

    pub fn set_maximum_size(&mut self, width: u32, height: u32) {
        debug!(width, height, "window set_maximum_size");
        self.maximum_size = Some((width, height));
    }

    pub fn set_view(&mut self, view: u64) {
        debug!(view, "window set_view");
        self.view = Some(view);
    }
}

/// View stub: fixed native handle, origin position.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewStub;

impl ViewStub {
    pub fn native_view(&self) -> u64 {
        NATIVE_VIEW_HANDLE
    }

    pub fn x(&self) -> i32 {
        0
    }

    pub fn y(&self) -> i32 {
        0
    }

    pub fn set_parent(&self, _parent: u64) {
        debug!("view set_parent (no-op)");
    }
}

/// Image-loader lifecycle hooks. The host image pipeline needs these to
/// exist; nothing is loaded natively.
pub mod image_loader {
    use tracing::debug;

    pub fn init_native_loading() {
        debug!("image loader: init_native_loading");
    }

    pub fn dispose_loader() {
        debug!("image loader: dispose_loader");
    }

    pub fn load_image() -> u32 {
        debug!("image loader: load_image");
        1
    }
}
