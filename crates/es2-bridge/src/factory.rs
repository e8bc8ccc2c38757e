//! Driver identity and capability answers for the factory handshake.

use tracing::debug;

pub const VENDOR: &str = "es2-bridge";
pub const RENDERER: &str = "es2-bridge host context";
pub const VERSION: &str = "OpenGL ES 2.0 (bridged)";

/// Extension support answers. BGRA8888 uploads and multisampling are not
/// offered through the bridge; everything else is assumed present and
/// left for the host's own error state to veto.
pub fn is_extension_supported(name: &str) -> bool {
    let supported = !matches!(
        name,
        "GL_EXT_texture_format_BGRA8888" | "GL_ARB_multisample"
    );
    debug!(name, supported, "extension query");
    supported
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bgra_and_multisample_are_refused() {
        assert!(!is_extension_supported("GL_EXT_texture_format_BGRA8888"));
        assert!(!is_extension_supported("GL_ARB_multisample"));
        assert!(is_extension_supported("GL_OES_standard_derivatives"));
    }
}
