//! Constant tables for the ES2 driver-call protocol.
//!
//! The embedding rendering pipeline addresses the host GL context through a
//! flat command set whose enumerated parameters are small integers, grouped
//! into disjoint code spaces. This crate is the single source of truth for
//! those codes; the bridge crate maps them onto host GL tokens.
//!
//! The code values are part of the wire contract and must not be renumbered.

/// Protocol-level resource handle.
///
/// Positive, allocated consecutively by the bridge's resource registry.
/// `0` is reserved (it names the default framebuffer in bind commands).
pub type Handle = u32;

/// The five enumerated code spaces of the protocol.
///
/// The spaces are disjoint: no integer code is documented in more than one
/// space, but translation still takes the space explicitly so an
/// out-of-space code can be diagnosed instead of silently matching a
/// neighbouring table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeSpace {
    BlendFactor,
    DataType,
    PixelFormat,
    TextureParam,
    PixelStore,
}

/// Blend factor codes (space `BlendFactor`, 0–14).
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendFactor {
    Zero = 0,
    One = 1,
    SrcColor = 2,
    OneMinusSrcColor = 3,
    DstColor = 4,
    OneMinusDstColor = 5,
    SrcAlpha = 6,
    OneMinusSrcAlpha = 7,
    DstAlpha = 8,
    OneMinusDstAlpha = 9,
    ConstantColor = 10,
    OneMinusConstantColor = 11,
    ConstantAlpha = 12,
    OneMinusConstantAlpha = 13,
    SrcAlphaSaturate = 14,
}

impl BlendFactor {
    pub const fn from_code(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            2 => Some(Self::SrcColor),
            3 => Some(Self::OneMinusSrcColor),
            4 => Some(Self::DstColor),
            5 => Some(Self::OneMinusDstColor),
            6 => Some(Self::SrcAlpha),
            7 => Some(Self::OneMinusSrcAlpha),
            8 => Some(Self::DstAlpha),
            9 => Some(Self::OneMinusDstAlpha),
            10 => Some(Self::ConstantColor),
            11 => Some(Self::OneMinusConstantColor),
            12 => Some(Self::ConstantAlpha),
            13 => Some(Self::OneMinusConstantAlpha),
            14 => Some(Self::SrcAlphaSaturate),
            _ => None,
        }
    }
}

/// Pixel data type codes (space `DataType`, 20–23).
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    Float = 20,
    UnsignedByte = 21,
    UnsignedInt2101010Rev = 22,
    UnsignedInt8888 = 23,
}

impl DataType {
    pub const fn from_code(v: u32) -> Option<Self> {
        match v {
            20 => Some(Self::Float),
            21 => Some(Self::UnsignedByte),
            22 => Some(Self::UnsignedInt2101010Rev),
            23 => Some(Self::UnsignedInt8888),
            _ => None,
        }
    }
}

/// Pixel / texture format codes (space `PixelFormat`, 40–45).
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba = 40,
    Bgra = 41,
    Rgb = 42,
    Luminance = 43,
    Alpha = 44,
    Rgba32F = 45,
}

impl PixelFormat {
    pub const fn from_code(v: u32) -> Option<Self> {
        match v {
            40 => Some(Self::Rgba),
            41 => Some(Self::Bgra),
            42 => Some(Self::Rgb),
            43 => Some(Self::Luminance),
            44 => Some(Self::Alpha),
            45 => Some(Self::Rgba32F),
            _ => None,
        }
    }
}

/// Texture target / filter codes (space `TextureParam`, 50–55).
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureParam {
    Texture2d = 50,
    TextureBinding2d = 51,
    Nearest = 52,
    Linear = 53,
    NearestMipmapNearest = 54,
    LinearMipmapLinear = 55,
}

impl TextureParam {
    pub const fn from_code(v: u32) -> Option<Self> {
        match v {
            50 => Some(Self::Texture2d),
            51 => Some(Self::TextureBinding2d),
            52 => Some(Self::Nearest),
            53 => Some(Self::Linear),
            54 => Some(Self::NearestMipmapNearest),
            55 => Some(Self::LinearMipmapLinear),
            _ => None,
        }
    }
}

/// Pixel-store parameter codes (space `PixelStore`, 60–63).
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelStoreParam {
    UnpackAlignment = 60,
    UnpackRowLength = 61,
    UnpackSkipPixels = 62,
    UnpackSkipRows = 63,
}

impl PixelStoreParam {
    pub const fn from_code(v: u32) -> Option<Self> {
        match v {
            60 => Some(Self::UnpackAlignment),
            61 => Some(Self::UnpackRowLength),
            62 => Some(Self::UnpackSkipPixels),
            63 => Some(Self::UnpackSkipRows),
            _ => None,
        }
    }
}

/// Texture wrap-mode codes. Not one of the translated code spaces; consumed
/// directly by the wrap-state command.
pub const WRAP_REPEAT: u32 = 100;
pub const WRAP_CLAMP_TO_EDGE: u32 = 101;

/// Integer query parameter codes (120–128, with gaps).
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntParam {
    MaxFragmentUniformComponents = 120,
    MaxTextureUnits = 122,
    MaxTextureSize = 123,
    MaxVertexAttributes = 124,
    MaxVaryingComponents = 125,
    MaxVertexTextureUnits = 127,
    MaxVertexUniformComponents = 128,
}

impl IntParam {
    pub const fn from_code(v: u32) -> Option<Self> {
        match v {
            120 => Some(Self::MaxFragmentUniformComponents),
            122 => Some(Self::MaxTextureUnits),
            123 => Some(Self::MaxTextureSize),
            124 => Some(Self::MaxVertexAttributes),
            125 => Some(Self::MaxVaryingComponents),
            127 => Some(Self::MaxVertexTextureUnits),
            128 => Some(Self::MaxVertexUniformComponents),
            _ => None,
        }
    }
}

/// Documented codes per space, in ascending order. Used by conformance tests
/// and by anything that needs to iterate a whole space.
pub const fn documented_codes(space: CodeSpace) -> &'static [u32] {
    match space {
        CodeSpace::BlendFactor => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],
        CodeSpace::DataType => &[20, 21, 22, 23],
        CodeSpace::PixelFormat => &[40, 41, 42, 43, 44, 45],
        CodeSpace::TextureParam => &[50, 51, 52, 53, 54, 55],
        CodeSpace::PixelStore => &[60, 61, 62, 63],
    }
}
