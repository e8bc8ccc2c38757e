mod common;

use common::{executor, take_calls};
use es2_bridge::{gl, GlCall};
use pretty_assertions::assert_eq;

// Protocol codes, as the pipeline sends them.
const CODE_TEXTURE_2D: u32 = 50;
const CODE_LINEAR: u32 = 53;
const CODE_NEAREST: u32 = 52;
const CODE_RGBA: u32 = 40;
const CODE_UNSIGNED_BYTE: u32 = 21;
const CODE_UNPACK_ALIGNMENT: u32 = 60;

#[test]
fn create_texture_uploads_zeroed_rgba8_and_linear_filters() {
    let mut exec = executor();
    let handle = exec.create_texture(2, 2).unwrap();
    assert_eq!(handle, 1);

    let calls = take_calls(&mut exec);
    assert!(matches!(
        calls[..],
        [
            GlCall::CreateTexture { .. },
            GlCall::BindTexture { target: gl::TEXTURE_2D, texture: Some(_) },
            GlCall::TexImage2d {
                target: gl::TEXTURE_2D,
                level: 0,
                internal_format: gl::RGBA,
                width: 2,
                height: 2,
                format: gl::RGBA,
                ty: gl::UNSIGNED_BYTE,
                len: 16,
            },
            GlCall::TexParameterI { pname: gl::TEXTURE_MAG_FILTER, value: gl::LINEAR, .. },
            GlCall::TexParameterI { pname: gl::TEXTURE_MIN_FILTER, value: gl::LINEAR, .. },
        ]
    ));
}

#[test]
fn sub_image_upload_against_the_bound_texture() {
    let mut exec = executor();
    let tex = exec.create_texture(2, 2).unwrap();
    exec.bind_texture(tex).unwrap();
    take_calls(&mut exec);

    let pixels = [0xabu8; 16];
    exec.tex_sub_image_2d(CODE_TEXTURE_2D, 0, 0, 0, 2, 2, CODE_RGBA, CODE_UNSIGNED_BYTE, &pixels)
        .unwrap();

    let calls = take_calls(&mut exec);
    assert_eq!(
        calls,
        vec![GlCall::TexSubImage2d {
            target: gl::TEXTURE_2D,
            level: 0,
            x_offset: 0,
            y_offset: 0,
            width: 2,
            height: 2,
            format: gl::RGBA,
            ty: gl::UNSIGNED_BYTE,
            len: 16,
        }]
    );
}

#[test]
fn full_image_upload_with_mipmap_switches_the_min_filter_first() {
    let mut exec = executor();
    let tex = exec.gen_and_bind_texture().unwrap();
    assert_eq!(tex, 1);
    take_calls(&mut exec);

    let pixels = [0u8; 16];
    exec.tex_image_2d(CODE_TEXTURE_2D, 0, 2, 2, CODE_RGBA, CODE_UNSIGNED_BYTE, Some(&pixels), true)
        .unwrap();

    let calls = take_calls(&mut exec);
    assert_eq!(
        calls,
        vec![
            GlCall::TexParameterI {
                target: gl::TEXTURE_2D,
                pname: gl::TEXTURE_MIN_FILTER,
                value: gl::LINEAR_MIPMAP_NEAREST,
            },
            GlCall::TexImage2d {
                target: gl::TEXTURE_2D,
                level: 0,
                internal_format: gl::RGBA,
                width: 2,
                height: 2,
                format: gl::RGBA,
                ty: gl::UNSIGNED_BYTE,
                len: 16,
            },
        ]
    );
}

#[test]
fn min_max_filter_codes_translate_before_reaching_the_host() {
    let mut exec = executor();
    exec.tex_params_min_max(CODE_NEAREST, CODE_LINEAR).unwrap();

    let calls = take_calls(&mut exec);
    assert_eq!(
        calls,
        vec![
            GlCall::TexParameterI {
                target: gl::TEXTURE_2D,
                pname: gl::TEXTURE_MIN_FILTER,
                value: gl::NEAREST,
            },
            GlCall::TexParameterI {
                target: gl::TEXTURE_2D,
                pname: gl::TEXTURE_MAG_FILTER,
                value: gl::LINEAR,
            },
        ]
    );
}

#[test]
fn wrap_state_clamps_both_axes_whatever_the_mode() {
    for wrap_code in [es2_protocol::WRAP_REPEAT, es2_protocol::WRAP_CLAMP_TO_EDGE, 999] {
        let mut exec = executor();
        let tex = exec.gen_and_bind_texture().unwrap();
        take_calls(&mut exec);

        exec.update_wrap_state(tex, wrap_code).unwrap();
        let calls = take_calls(&mut exec);
        assert_eq!(
            calls,
            vec![
                GlCall::TexParameterI {
                    target: gl::TEXTURE_2D,
                    pname: gl::TEXTURE_WRAP_S,
                    value: gl::CLAMP_TO_EDGE,
                },
                GlCall::TexParameterI {
                    target: gl::TEXTURE_2D,
                    pname: gl::TEXTURE_WRAP_T,
                    value: gl::CLAMP_TO_EDGE,
                },
            ]
        );
    }
}

#[test]
fn pixel_store_translates_the_parameter_code() {
    let mut exec = executor();
    exec.pixel_store(CODE_UNPACK_ALIGNMENT, 1).unwrap();

    let calls = take_calls(&mut exec);
    assert_eq!(
        calls,
        vec![GlCall::PixelStoreI { pname: gl::UNPACK_ALIGNMENT, value: 1 }]
    );
}

#[test]
fn active_texture_offsets_from_texture0() {
    let mut exec = executor();
    exec.active_texture(2).unwrap();

    let calls = take_calls(&mut exec);
    assert_eq!(calls, vec![GlCall::ActiveTexture { unit: gl::TEXTURE0 + 2 }]);
}
