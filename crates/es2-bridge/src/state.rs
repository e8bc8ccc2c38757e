//! Shadowed host toggle state.

/// Locally tracked mirror of host state that compound commands must save
/// and restore. GL exposes no push/pop for these, so the bridge records the
/// last value it set instead of querying the host back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShadowState {
    /// Last value set through the scissor-test command.
    pub scissor_enabled: bool,
    /// Last value set through the depth-mask path. Observed traffic only
    /// ever drives this to `false`, but the clear override honours both
    /// values.
    pub depth_writes_enabled: bool,
}
