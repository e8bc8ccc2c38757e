use crate::registry::ResourceKind;
use es2_protocol::Handle;

/// Failure of a single bridged command.
///
/// Every variant aborts the in-flight command only; the session (registry,
/// shadow state, host context) stays live and the next command may proceed.
/// There is no retry path anywhere in the bridge.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The handle was never allocated, or was released.
    #[error("unknown resource handle {0}")]
    HandleNotFound(Handle),

    /// The handle is live but tagged with a different resource kind than the
    /// command expects.
    #[error("handle {handle} is a {actual:?}, expected {expected:?}")]
    HandleKindMismatch {
        handle: Handle,
        expected: ResourceKind,
        actual: ResourceKind,
    },

    /// The host context reported a non-zero error after a state-mutating
    /// call. Fatal for the current command; the protocol defines no
    /// recovery.
    #[error("host GL error 0x{0:04x}")]
    HostGl(u32),

    /// The host context could not be created on first use.
    #[error("host GL context unavailable: {0}")]
    ContextUnavailable(String),

    /// A payload slice was smaller than the command's offset/count claimed.
    #[error("payload range out of bounds: {0}")]
    PayloadRange(&'static str),
}
