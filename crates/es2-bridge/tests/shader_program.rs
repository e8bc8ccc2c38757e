mod common;

use common::{executor, executor_with, take_calls};
use es2_bridge::{gl, BridgeError, GlCall, SoftGl};
use pretty_assertions::assert_eq;

const VS: &str = "attribute vec3 pos; void main() { gl_Position = vec4(pos, 1.0); }";
const FS: &str = "void main() { gl_FragColor = vec4(1.0); }";

#[test]
fn compile_link_use_end_to_end() {
    let mut exec = executor();

    let vs = exec.compile_shader(VS, true).unwrap();
    let fs = exec.compile_shader(FS, false).unwrap();
    assert_eq!((vs, fs), (1, 2));

    let program = exec.create_program(vs, &[fs], &[("pos", 0)]).unwrap();
    assert_eq!(program, 3);

    exec.use_program(program).unwrap();

    let calls = take_calls(&mut exec);
    let kinds: Vec<_> = calls
        .iter()
        .filter_map(|c| match c {
            GlCall::CreateShader { kind, .. } => Some(*kind),
            _ => None,
        })
        .collect();
    assert_eq!(kinds, vec![gl::VERTEX_SHADER, gl::FRAGMENT_SHADER]);

    // Attribute binding must precede the link.
    let bind_at = calls
        .iter()
        .position(|c| matches!(c, GlCall::BindAttribLocation { .. }))
        .expect("attribute never bound");
    let link_at = calls
        .iter()
        .position(|c| matches!(c, GlCall::LinkProgram { .. }))
        .expect("program never linked");
    assert!(bind_at < link_at);

    assert!(matches!(
        calls.iter().find(|c| matches!(c, GlCall::BindAttribLocation { .. })),
        Some(GlCall::BindAttribLocation { index: 0, name, .. }) if name == "pos"
    ));
    assert!(matches!(calls.last(), Some(GlCall::UseProgram { program: Some(_) })));
}

#[test]
fn fragment_shaders_attach_in_sequence_order() {
    let mut exec = executor();
    let vs = exec.compile_shader(VS, true).unwrap();
    let fs_a = exec.compile_shader(FS, false).unwrap();
    let fs_b = exec.compile_shader(FS, false).unwrap();
    take_calls(&mut exec);

    exec.create_program(vs, &[fs_a, fs_b], &[]).unwrap();

    let calls = take_calls(&mut exec);
    let attached: Vec<_> = calls
        .iter()
        .filter_map(|c| match c {
            GlCall::AttachShader { shader, .. } => Some(*shader),
            _ => None,
        })
        .collect();
    // Vertex shader first, then fragments in call order.
    assert_eq!(attached.len(), 3);
    assert!(attached[1].0 < attached[2].0);
}

#[test]
fn compile_log_is_a_diagnostic_not_a_failure() {
    let mut soft = SoftGl::new();
    soft.set_next_shader_log("warning: something dubious");
    let mut exec = executor_with(soft);

    let handle = exec.compile_shader("not even glsl", true).unwrap();
    assert_eq!(handle, 1);
}

#[test]
fn link_failure_still_returns_the_handle() {
    let mut soft = SoftGl::new();
    soft.set_next_link_failure("varying mismatch");
    let mut exec = executor_with(soft);

    let vs = exec.compile_shader(VS, true).unwrap();
    let fs = exec.compile_shader(FS, false).unwrap();
    let program = exec.create_program(vs, &[fs], &[("pos", 0)]).unwrap();
    assert_eq!(program, 3);

    // The handle resolves; whether the program works is the host's affair.
    exec.use_program(program).unwrap();
}

#[test]
fn program_creation_rejects_non_shader_handles() {
    let mut exec = executor();
    let tex = exec.create_texture(2, 2).unwrap();
    let fs = exec.compile_shader(FS, false).unwrap();

    let err = exec.create_program(tex, &[fs], &[]).unwrap_err();
    assert!(matches!(err, BridgeError::HandleKindMismatch { handle, .. } if handle == tex));
}

#[test]
fn uniform_locations_resolve_and_default_to_minus_one() {
    let mut soft = SoftGl::new();
    soft.set_missing_uniform("absent");
    let mut exec = executor_with(soft);

    let vs = exec.compile_shader(VS, true).unwrap();
    let fs = exec.compile_shader(FS, false).unwrap();
    let program = exec.create_program(vs, &[fs], &[]).unwrap();

    let loc = exec.get_uniform_location(program, "mvp").unwrap();
    assert!(loc >= 0);
    // Stable across queries.
    assert_eq!(loc, exec.get_uniform_location(program, "mvp").unwrap());
    assert_eq!(exec.get_uniform_location(program, "absent").unwrap(), -1);
}
