//! Translation layer from an ES2-class driver-call protocol to a host
//! immediate-mode GL context.
//!
//! The embedding rendering pipeline addresses GPU resources by small
//! integer handles and assumes persistent GL-style global state. This
//! crate virtualizes those handles ([`registry::ResourceTable`]), shadows
//! the toggle state that compound commands must save and restore
//! ([`state::ShadowState`]), re-issues every command against a
//! host-provided [`backend::GlContext`] in the exact order received
//! ([`Es2Executor`]), and escalates host errors to fatal per-command
//! failures ([`BridgeError::HostGl`]).

pub mod backend;
pub mod factory;
pub mod gl;
pub mod glass;
pub mod registry;
pub mod state;
pub mod translate;

mod error;
mod executor;

pub use backend::{
    ContextSource, GlCall, GlContext, GlObject, SoftGl, SoftGlSource, UniformLocation,
};
pub use error::BridgeError;
pub use executor::{Es2Executor, NATIVE_CONTEXT_HANDLE};
pub use registry::{ResourceKind, ResourceTable};
pub use state::ShadowState;
pub use translate::{translate, INVALID_TOKEN};
