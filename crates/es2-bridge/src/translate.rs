//! Protocol code → host GL token translation.
//!
//! The mapping is a fixed bijection per code space. An undocumented code
//! translates to [`INVALID_TOKEN`] with a diagnostic instead of failing the
//! command: the callers feed the token straight into a host call, and the
//! host's own error state (read by the sentinel) is the authoritative gate.

use es2_protocol::{
    BlendFactor, CodeSpace, DataType, PixelFormat, PixelStoreParam, TextureParam,
};
use tracing::warn;

use crate::gl;

/// Sentinel returned for codes outside every documented range. Never a
/// valid GL token.
pub const INVALID_TOKEN: u32 = u32::MAX;

/// Translate one protocol code from the given space.
pub fn translate(space: CodeSpace, code: u32) -> u32 {
    let token = match space {
        CodeSpace::BlendFactor => BlendFactor::from_code(code).map(blend_factor_token),
        CodeSpace::DataType => DataType::from_code(code).map(data_type_token),
        CodeSpace::PixelFormat => PixelFormat::from_code(code).map(pixel_format_token),
        CodeSpace::TextureParam => TextureParam::from_code(code).map(texture_param_token),
        CodeSpace::PixelStore => PixelStoreParam::from_code(code).map(pixel_store_token),
    };
    match token {
        Some(token) => token,
        None => {
            warn!(?space, code, "no GL token for protocol code");
            INVALID_TOKEN
        }
    }
}

pub fn blend_factor_token(factor: BlendFactor) -> u32 {
    match factor {
        BlendFactor::Zero => gl::ZERO,
        BlendFactor::One => gl::ONE,
        BlendFactor::SrcColor => gl::SRC_COLOR,
        BlendFactor::OneMinusSrcColor => gl::ONE_MINUS_SRC_COLOR,
        BlendFactor::DstColor => gl::DST_COLOR,
        BlendFactor::OneMinusDstColor => gl::ONE_MINUS_DST_COLOR,
        BlendFactor::SrcAlpha => gl::SRC_ALPHA,
        BlendFactor::OneMinusSrcAlpha => gl::ONE_MINUS_SRC_ALPHA,
        BlendFactor::DstAlpha => gl::DST_ALPHA,
        BlendFactor::OneMinusDstAlpha => gl::ONE_MINUS_DST_ALPHA,
        BlendFactor::ConstantColor => gl::CONSTANT_COLOR,
        BlendFactor::OneMinusConstantColor => gl::ONE_MINUS_CONSTANT_COLOR,
        BlendFactor::ConstantAlpha => gl::CONSTANT_ALPHA,
        BlendFactor::OneMinusConstantAlpha => gl::ONE_MINUS_CONSTANT_ALPHA,
        BlendFactor::SrcAlphaSaturate => gl::SRC_ALPHA_SATURATE,
    }
}

pub fn data_type_token(ty: DataType) -> u32 {
    match ty {
        DataType::Float => gl::FLOAT,
        DataType::UnsignedByte => gl::UNSIGNED_BYTE,
        DataType::UnsignedInt2101010Rev => gl::UNSIGNED_INT_2_10_10_10_REV,
        DataType::UnsignedInt8888 => gl::UNSIGNED_INT_8_8_8_8,
    }
}

pub fn pixel_format_token(format: PixelFormat) -> u32 {
    match format {
        PixelFormat::Rgba => gl::RGBA,
        PixelFormat::Bgra => gl::BGRA,
        PixelFormat::Rgb => gl::RGB,
        PixelFormat::Luminance => gl::LUMINANCE,
        PixelFormat::Alpha => gl::ALPHA,
        PixelFormat::Rgba32F => gl::RGBA32F,
    }
}

pub fn texture_param_token(param: TextureParam) -> u32 {
    match param {
        TextureParam::Texture2d => gl::TEXTURE_2D,
        TextureParam::TextureBinding2d => gl::TEXTURE_BINDING_2D,
        TextureParam::Nearest => gl::NEAREST,
        TextureParam::Linear => gl::LINEAR,
        TextureParam::NearestMipmapNearest => gl::NEAREST_MIPMAP_NEAREST,
        TextureParam::LinearMipmapLinear => gl::LINEAR_MIPMAP_LINEAR,
    }
}

pub fn pixel_store_token(param: PixelStoreParam) -> u32 {
    match param {
        PixelStoreParam::UnpackAlignment => gl::UNPACK_ALIGNMENT,
        PixelStoreParam::UnpackRowLength => gl::UNPACK_ROW_LENGTH,
        PixelStoreParam::UnpackSkipPixels => gl::UNPACK_SKIP_PIXELS,
        PixelStoreParam::UnpackSkipRows => gl::UNPACK_SKIP_ROWS,
    }
}
