//! Khronos Data Format Descriptor (DFD) decoding and rendering.
//!
//! The descriptor is a little-endian `u32` word stream: a total-size word,
//! then one or more descriptor blocks. Only the Basic Data Format
//! Descriptor block (BDFD) is modeled; its fields are bit-packed and are
//! accessed through explicit shift/mask accessors rather than bitfields.

mod block;
mod create;
mod names;
mod print;

pub use block::{
    words_from_bytes, BasicDescriptorBlock, DataFormatDescriptor, SampleInfo, SAMPLE_WORD_COUNT,
};
pub use create::create_dfd_for_format;
pub use names::*;
pub use print::{render_dfd_json, render_dfd_text};

/// Word index of the BDFD's first word inside the DFD (right after the
/// total-size word).
pub const BDFD_WORD_OFFSET: usize = 1;

/// Number of header words in a BDFD before the samples begin.
pub const BDFD_HEADER_WORDS: usize = 6;

/// Byte size of the BDFD header words.
pub const BDFD_HEADER_BYTE_SIZE: u32 = (BDFD_HEADER_WORDS as u32) * 4;

/// Words per sample descriptor.
pub const SAMPLE_WORDS: usize = 4;

/// Byte size of one sample descriptor.
pub const SAMPLE_BYTE_SIZE: u32 = (SAMPLE_WORDS as u32) * 4;

// khr_df_vendorid_e
pub const VENDOR_ID_KHRONOS: u32 = 0;

// khr_df_khr_descriptortype_e
pub const DESCRIPTOR_TYPE_BASICFORMAT: u32 = 0;
pub const DESCRIPTOR_TYPE_ADDITIONAL_PLANES: u32 = 0x6001;
pub const DESCRIPTOR_TYPE_ADDITIONAL_DIMENSIONS: u32 = 0x6002;

// khr_df_versionnumber_e; 1.0 and 1.1 share a value by design.
pub const VERSION_NUMBER_1_1: u32 = 0;
pub const VERSION_NUMBER_1_2: u32 = 1;
pub const VERSION_NUMBER_1_3: u32 = 2;

// khr_df_flags_e
pub const FLAG_ALPHA_STRAIGHT: u32 = 0;
pub const FLAG_ALPHA_PREMULTIPLIED: u32 = 1;

/// khr_df_model_e values the toolchain dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ColorModel {
    Unspecified = 0,
    Rgbsda = 1,
    Yuvsda = 2,
    Yiqsda = 3,
    Labsda = 4,
    Cmyka = 5,
    Xyzw = 6,
    HsvaAng = 7,
    HslaAng = 8,
    HsvaHex = 9,
    HslaHex = 10,
    Ycgcoa = 11,
    Yccbccrc = 12,
    Ictcp = 13,
    Ciexyz = 14,
    Ciexyy = 15,
    Bc1a = 128,
    Bc2 = 129,
    Bc3 = 130,
    Bc4 = 131,
    Bc5 = 132,
    Bc6h = 133,
    Bc7 = 134,
    Etc1 = 160,
    Etc2 = 161,
    Astc = 162,
    Etc1s = 163,
    Pvrtc = 164,
    Pvrtc2 = 165,
    Uastc = 166,
}

impl ColorModel {
    pub fn from_u32(value: u32) -> Option<Self> {
        let model = match value {
            0 => Self::Unspecified,
            1 => Self::Rgbsda,
            2 => Self::Yuvsda,
            3 => Self::Yiqsda,
            4 => Self::Labsda,
            5 => Self::Cmyka,
            6 => Self::Xyzw,
            7 => Self::HsvaAng,
            8 => Self::HslaAng,
            9 => Self::HsvaHex,
            10 => Self::HslaHex,
            11 => Self::Ycgcoa,
            12 => Self::Yccbccrc,
            13 => Self::Ictcp,
            14 => Self::Ciexyz,
            15 => Self::Ciexyy,
            128 => Self::Bc1a,
            129 => Self::Bc2,
            130 => Self::Bc3,
            131 => Self::Bc4,
            132 => Self::Bc5,
            133 => Self::Bc6h,
            134 => Self::Bc7,
            160 => Self::Etc1,
            161 => Self::Etc2,
            162 => Self::Astc,
            163 => Self::Etc1s,
            164 => Self::Pvrtc,
            165 => Self::Pvrtc2,
            166 => Self::Uastc,
            _ => return None,
        };
        Some(model)
    }

    /// First value of the block-compressed model range (`BC1A`).
    pub const FIRST_BLOCK_COMPRESSED: u32 = 128;
}

/// khr_df_transfer_e values the validator dispatches on. The full name
/// table in [`names`] covers the rest.
pub const TRANSFER_UNSPECIFIED: u32 = 0;
pub const TRANSFER_LINEAR: u32 = 1;
pub const TRANSFER_SRGB: u32 = 2;

/// Highest assigned khr_df_primaries_e value (`ADOBERGB`).
pub const PRIMARIES_MAX: u32 = 11;

// Sample datatype qualifier bits, in the 4-bit field as stored shifted down
// from the channel byte (`LINEAR` is bit 4 of the byte, bit 0 here).
pub const QUALIFIER_LINEAR: u32 = 1 << 0;
pub const QUALIFIER_EXPONENT: u32 = 1 << 1;
pub const QUALIFIER_SIGNED: u32 = 1 << 2;
pub const QUALIFIER_FLOAT: u32 = 1 << 3;

// Channel ids for the models the validator checks explicitly.
pub const CHANNEL_RGBSDA_RED: u32 = 0;
pub const CHANNEL_RGBSDA_GREEN: u32 = 1;
pub const CHANNEL_RGBSDA_BLUE: u32 = 2;
pub const CHANNEL_RGBSDA_STENCIL: u32 = 13;
pub const CHANNEL_RGBSDA_DEPTH: u32 = 14;
pub const CHANNEL_RGBSDA_ALPHA: u32 = 15;

pub const CHANNEL_ETC1S_RGB: u32 = 0;
pub const CHANNEL_ETC1S_RRR: u32 = 3;
pub const CHANNEL_ETC1S_GGG: u32 = 4;
pub const CHANNEL_ETC1S_AAA: u32 = 15;

pub const CHANNEL_UASTC_RGB: u32 = 0;
pub const CHANNEL_UASTC_RGBA: u32 = 3;
pub const CHANNEL_UASTC_RRR: u32 = 4;
pub const CHANNEL_UASTC_RRRG: u32 = 5;
pub const CHANNEL_UASTC_RG: u32 = 6;
