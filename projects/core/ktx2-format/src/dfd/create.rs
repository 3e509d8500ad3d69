//! Construction of the reference DFD for a concrete `VkFormat`.
//!
//! The validator compares a file's descriptor byte-for-byte against the
//! descriptor built here, so these encodings define what "matching DFD"
//! means for the toolchain. Conventions:
//!
//! * normalized samples carry `lower = 0`, `upper = 2^bits - 1` (unpacked)
//!   or `upper = u32::MAX` (block-compressed),
//! * integer samples carry `upper = 1` (`lower = -1` when signed),
//! * float samples carry the bit patterns of -1.0/0.0 and 1.0,
//! * the alpha sample of an sRGB format is marked LINEAR,
//! * depth/stencil formats use unspecified primaries.

use super::{
    ColorModel, BDFD_HEADER_BYTE_SIZE, CHANNEL_RGBSDA_ALPHA, CHANNEL_RGBSDA_BLUE,
    CHANNEL_RGBSDA_DEPTH, CHANNEL_RGBSDA_GREEN, CHANNEL_RGBSDA_RED, CHANNEL_RGBSDA_STENCIL,
    QUALIFIER_FLOAT, QUALIFIER_LINEAR, QUALIFIER_SIGNED, SAMPLE_BYTE_SIZE, TRANSFER_LINEAR,
    TRANSFER_SRGB, VERSION_NUMBER_1_3,
};
use crate::vk_format::VkFormat;

const PRIMARIES_UNSPECIFIED: u32 = 0;
const PRIMARIES_SRGB: u32 = 1;

const R: u32 = CHANNEL_RGBSDA_RED;
const G: u32 = CHANNEL_RGBSDA_GREEN;
const B: u32 = CHANNEL_RGBSDA_BLUE;
const A: u32 = CHANNEL_RGBSDA_ALPHA;
const D: u32 = CHANNEL_RGBSDA_DEPTH;
const S: u32 = CHANNEL_RGBSDA_STENCIL;

const F32_NEG_ONE: u32 = 0xBF80_0000;
const F32_ONE: u32 = 0x3F80_0000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Suffix {
    Unorm,
    Snorm,
    Uint,
    Sint,
    Srgb,
    Sfloat,
    Ufloat,
}

struct SampleSpec {
    bit_offset: u32,
    bit_length: u32,
    channel: u32,
    qualifiers: u32,
    lower: u32,
    upper: u32,
}

struct DfdSpec {
    model: u32,
    primaries: u32,
    transfer: u32,
    block_dims: [u32; 3],
    bytes_plane0: u32,
    samples: Vec<SampleSpec>,
}

impl DfdSpec {
    fn build(self) -> Vec<u32> {
        let block_size = BDFD_HEADER_BYTE_SIZE + SAMPLE_BYTE_SIZE * self.samples.len() as u32;
        let total_size = 4 + block_size;

        let mut words = Vec::with_capacity(1 + (block_size / 4) as usize);
        words.push(total_size);
        // vendorId KHRONOS, descriptorType BASICFORMAT
        words.push(0);
        words.push(VERSION_NUMBER_1_3 | (block_size << 16));
        words.push(self.model | (self.primaries << 8) | (self.transfer << 16));
        words.push(
            (self.block_dims[0] - 1)
                | ((self.block_dims[1] - 1) << 8)
                | ((self.block_dims[2] - 1) << 16),
        );
        words.push(self.bytes_plane0);
        words.push(0);

        for sample in &self.samples {
            words.push(
                sample.bit_offset
                    | ((sample.bit_length - 1) << 16)
                    | (sample.channel << 24)
                    | (sample.qualifiers << 28),
            );
            words.push(0); // sample positions
            words.push(sample.lower);
            words.push(sample.upper);
        }
        words
    }
}

fn max_unsigned(bits: u32) -> u32 {
    if bits >= 32 {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

impl Suffix {
    fn transfer(self) -> u32 {
        match self {
            Suffix::Srgb => TRANSFER_SRGB,
            _ => TRANSFER_LINEAR,
        }
    }

    /// Qualifier bits and lower/upper bounds for an unpacked color sample.
    fn sample_range(self, bits: u32, channel: u32) -> (u32, u32, u32) {
        match self {
            Suffix::Unorm => (0, 0, max_unsigned(bits)),
            Suffix::Srgb => {
                // Alpha stays linear under an sRGB transfer function.
                let qualifiers = if channel == A { QUALIFIER_LINEAR } else { 0 };
                (qualifiers, 0, max_unsigned(bits))
            }
            Suffix::Snorm => {
                let positive = (1u32 << (bits - 1)) - 1;
                (QUALIFIER_SIGNED, positive.wrapping_neg(), positive)
            }
            Suffix::Uint => (0, 0, 1),
            Suffix::Sint => (QUALIFIER_SIGNED, u32::MAX, 1),
            Suffix::Sfloat => (QUALIFIER_SIGNED | QUALIFIER_FLOAT, F32_NEG_ONE, F32_ONE),
            Suffix::Ufloat => (QUALIFIER_FLOAT, 0, F32_ONE),
        }
    }

    /// Qualifier bits and bounds for a block-compressed sample, which is
    /// always "the whole block normalizes to [0, 1] (or [-1, 1])".
    fn compressed_range(self) -> (u32, u32, u32) {
        match self {
            Suffix::Snorm => (QUALIFIER_SIGNED, 0x8000_0001, 0x7FFF_FFFF),
            Suffix::Sfloat => (QUALIFIER_SIGNED | QUALIFIER_FLOAT, F32_NEG_ONE, F32_ONE),
            Suffix::Ufloat => (QUALIFIER_FLOAT, 0, F32_ONE),
            _ => (0, 0, u32::MAX),
        }
    }
}

/// An unpacked or packed single-plane color format: channels listed from
/// bit 0 upwards as `(channel, bits)`.
fn color(channels: &[(u32, u32)], suffix: Suffix, byte_size: u32) -> DfdSpec {
    let mut samples = Vec::with_capacity(channels.len());
    let mut bit_offset = 0;
    for &(channel, bits) in channels {
        let (qualifiers, lower, upper) = suffix.sample_range(bits, channel);
        samples.push(SampleSpec {
            bit_offset,
            bit_length: bits,
            channel,
            qualifiers,
            lower,
            upper,
        });
        bit_offset += bits;
    }
    DfdSpec {
        model: ColorModel::Rgbsda as u32,
        primaries: PRIMARIES_SRGB,
        transfer: suffix.transfer(),
        block_dims: [1, 1, 1],
        bytes_plane0: byte_size,
        samples,
    }
}

/// A depth and/or stencil format; `channels` as `(channel, offset, bits)`.
fn depth_stencil(channels: &[(u32, u32, u32)], suffix: Suffix, byte_size: u32) -> DfdSpec {
    let samples = channels
        .iter()
        .map(|&(channel, bit_offset, bits)| {
            let (qualifiers, lower, upper) = suffix.sample_range(bits, channel);
            SampleSpec {
                bit_offset,
                bit_length: bits,
                channel,
                qualifiers,
                lower,
                upper,
            }
        })
        .collect();
    DfdSpec {
        model: ColorModel::Rgbsda as u32,
        primaries: PRIMARIES_UNSPECIFIED,
        transfer: TRANSFER_LINEAR,
        block_dims: [1, 1, 1],
        bytes_plane0: byte_size,
        samples,
    }
}

/// A block-compressed format; `channels` as `(channel, bit_offset, bits)`.
fn compressed(
    model: ColorModel,
    dims: [u32; 3],
    byte_size: u32,
    suffix: Suffix,
    channels: &[(u32, u32, u32)],
) -> DfdSpec {
    let samples = channels
        .iter()
        .map(|&(channel, bit_offset, bits)| {
            let (qualifiers, lower, upper) = suffix.compressed_range();
            SampleSpec {
                bit_offset,
                bit_length: bits,
                channel,
                qualifiers,
                lower,
                upper,
            }
        })
        .collect();
    DfdSpec {
        model: model as u32,
        primaries: PRIMARIES_SRGB,
        transfer: suffix.transfer(),
        block_dims: dims,
        bytes_plane0: byte_size,
        samples,
    }
}

/// Builds the reference DFD word stream for a concrete format.
///
/// # Return
///
/// `None` for `UNDEFINED`, for formats whose descriptor has no canonical
/// single-plane encoding (multi-plane and combined depth-stencil families,
/// shared-exponent `E5B9G9R9`) and for the 64-bit channel formats; the
/// validator skips the byte-comparison for those and relies on the generic
/// descriptor rules instead.
pub fn create_dfd_for_format(format: VkFormat) -> Option<Vec<u32>> {
    use ColorModel as M;
    use Suffix::*;
    use VkFormat as F;

    let spec = match format {
        F::R4G4_UNORM_PACK8 => color(&[(G, 4), (R, 4)], Unorm, 1),
        F::R4G4B4A4_UNORM_PACK16 => color(&[(A, 4), (B, 4), (G, 4), (R, 4)], Unorm, 2),
        F::B4G4R4A4_UNORM_PACK16 => color(&[(A, 4), (R, 4), (G, 4), (B, 4)], Unorm, 2),
        F::A4R4G4B4_UNORM_PACK16_EXT => color(&[(B, 4), (G, 4), (R, 4), (A, 4)], Unorm, 2),
        F::A4B4G4R4_UNORM_PACK16_EXT => color(&[(R, 4), (G, 4), (B, 4), (A, 4)], Unorm, 2),
        F::R5G6B5_UNORM_PACK16 => color(&[(B, 5), (G, 6), (R, 5)], Unorm, 2),
        F::B5G6R5_UNORM_PACK16 => color(&[(R, 5), (G, 6), (B, 5)], Unorm, 2),
        F::R5G5B5A1_UNORM_PACK16 => color(&[(A, 1), (B, 5), (G, 5), (R, 5)], Unorm, 2),
        F::B5G5R5A1_UNORM_PACK16 => color(&[(A, 1), (R, 5), (G, 5), (B, 5)], Unorm, 2),
        F::A1R5G5B5_UNORM_PACK16 => color(&[(B, 5), (G, 5), (R, 5), (A, 1)], Unorm, 2),

        F::R8_UNORM => color(&[(R, 8)], Unorm, 1),
        F::R8_SNORM => color(&[(R, 8)], Snorm, 1),
        F::R8_UINT => color(&[(R, 8)], Uint, 1),
        F::R8_SINT => color(&[(R, 8)], Sint, 1),
        F::R8_SRGB => color(&[(R, 8)], Srgb, 1),
        F::R8G8_UNORM => color(&[(R, 8), (G, 8)], Unorm, 2),
        F::R8G8_SNORM => color(&[(R, 8), (G, 8)], Snorm, 2),
        F::R8G8_UINT => color(&[(R, 8), (G, 8)], Uint, 2),
        F::R8G8_SINT => color(&[(R, 8), (G, 8)], Sint, 2),
        F::R8G8_SRGB => color(&[(R, 8), (G, 8)], Srgb, 2),
        F::R8G8B8_UNORM => color(&[(R, 8), (G, 8), (B, 8)], Unorm, 3),
        F::R8G8B8_SNORM => color(&[(R, 8), (G, 8), (B, 8)], Snorm, 3),
        F::R8G8B8_UINT => color(&[(R, 8), (G, 8), (B, 8)], Uint, 3),
        F::R8G8B8_SINT => color(&[(R, 8), (G, 8), (B, 8)], Sint, 3),
        F::R8G8B8_SRGB => color(&[(R, 8), (G, 8), (B, 8)], Srgb, 3),
        F::B8G8R8_UNORM => color(&[(B, 8), (G, 8), (R, 8)], Unorm, 3),
        F::B8G8R8_SNORM => color(&[(B, 8), (G, 8), (R, 8)], Snorm, 3),
        F::B8G8R8_UINT => color(&[(B, 8), (G, 8), (R, 8)], Uint, 3),
        F::B8G8R8_SINT => color(&[(B, 8), (G, 8), (R, 8)], Sint, 3),
        F::B8G8R8_SRGB => color(&[(B, 8), (G, 8), (R, 8)], Srgb, 3),
        F::R8G8B8A8_UNORM => color(&[(R, 8), (G, 8), (B, 8), (A, 8)], Unorm, 4),
        F::R8G8B8A8_SNORM => color(&[(R, 8), (G, 8), (B, 8), (A, 8)], Snorm, 4),
        F::R8G8B8A8_UINT => color(&[(R, 8), (G, 8), (B, 8), (A, 8)], Uint, 4),
        F::R8G8B8A8_SINT => color(&[(R, 8), (G, 8), (B, 8), (A, 8)], Sint, 4),
        F::R8G8B8A8_SRGB => color(&[(R, 8), (G, 8), (B, 8), (A, 8)], Srgb, 4),
        F::B8G8R8A8_UNORM => color(&[(B, 8), (G, 8), (R, 8), (A, 8)], Unorm, 4),
        F::B8G8R8A8_SNORM => color(&[(B, 8), (G, 8), (R, 8), (A, 8)], Snorm, 4),
        F::B8G8R8A8_UINT => color(&[(B, 8), (G, 8), (R, 8), (A, 8)], Uint, 4),
        F::B8G8R8A8_SINT => color(&[(B, 8), (G, 8), (R, 8), (A, 8)], Sint, 4),
        F::B8G8R8A8_SRGB => color(&[(B, 8), (G, 8), (R, 8), (A, 8)], Srgb, 4),

        F::A2R10G10B10_UNORM_PACK32 => color(&[(B, 10), (G, 10), (R, 10), (A, 2)], Unorm, 4),
        F::A2R10G10B10_SNORM_PACK32 => color(&[(B, 10), (G, 10), (R, 10), (A, 2)], Snorm, 4),
        F::A2R10G10B10_UINT_PACK32 => color(&[(B, 10), (G, 10), (R, 10), (A, 2)], Uint, 4),
        F::A2R10G10B10_SINT_PACK32 => color(&[(B, 10), (G, 10), (R, 10), (A, 2)], Sint, 4),
        F::A2B10G10R10_UNORM_PACK32 => color(&[(R, 10), (G, 10), (B, 10), (A, 2)], Unorm, 4),
        F::A2B10G10R10_SNORM_PACK32 => color(&[(R, 10), (G, 10), (B, 10), (A, 2)], Snorm, 4),
        F::A2B10G10R10_UINT_PACK32 => color(&[(R, 10), (G, 10), (B, 10), (A, 2)], Uint, 4),
        F::A2B10G10R10_SINT_PACK32 => color(&[(R, 10), (G, 10), (B, 10), (A, 2)], Sint, 4),

        F::R16_UNORM => color(&[(R, 16)], Unorm, 2),
        F::R16_SNORM => color(&[(R, 16)], Snorm, 2),
        F::R16_UINT => color(&[(R, 16)], Uint, 2),
        F::R16_SINT => color(&[(R, 16)], Sint, 2),
        F::R16_SFLOAT => color(&[(R, 16)], Sfloat, 2),
        F::R16G16_UNORM => color(&[(R, 16), (G, 16)], Unorm, 4),
        F::R16G16_SNORM => color(&[(R, 16), (G, 16)], Snorm, 4),
        F::R16G16_UINT => color(&[(R, 16), (G, 16)], Uint, 4),
        F::R16G16_SINT => color(&[(R, 16), (G, 16)], Sint, 4),
        F::R16G16_SFLOAT => color(&[(R, 16), (G, 16)], Sfloat, 4),
        F::R16G16B16_UNORM => color(&[(R, 16), (G, 16), (B, 16)], Unorm, 6),
        F::R16G16B16_SNORM => color(&[(R, 16), (G, 16), (B, 16)], Snorm, 6),
        F::R16G16B16_UINT => color(&[(R, 16), (G, 16), (B, 16)], Uint, 6),
        F::R16G16B16_SINT => color(&[(R, 16), (G, 16), (B, 16)], Sint, 6),
        F::R16G16B16_SFLOAT => color(&[(R, 16), (G, 16), (B, 16)], Sfloat, 6),
        F::R16G16B16A16_UNORM => color(&[(R, 16), (G, 16), (B, 16), (A, 16)], Unorm, 8),
        F::R16G16B16A16_SNORM => color(&[(R, 16), (G, 16), (B, 16), (A, 16)], Snorm, 8),
        F::R16G16B16A16_UINT => color(&[(R, 16), (G, 16), (B, 16), (A, 16)], Uint, 8),
        F::R16G16B16A16_SINT => color(&[(R, 16), (G, 16), (B, 16), (A, 16)], Sint, 8),
        F::R16G16B16A16_SFLOAT => color(&[(R, 16), (G, 16), (B, 16), (A, 16)], Sfloat, 8),

        F::R32_UINT => color(&[(R, 32)], Uint, 4),
        F::R32_SINT => color(&[(R, 32)], Sint, 4),
        F::R32_SFLOAT => color(&[(R, 32)], Sfloat, 4),
        F::R32G32_UINT => color(&[(R, 32), (G, 32)], Uint, 8),
        F::R32G32_SINT => color(&[(R, 32), (G, 32)], Sint, 8),
        F::R32G32_SFLOAT => color(&[(R, 32), (G, 32)], Sfloat, 8),
        F::R32G32B32_UINT => color(&[(R, 32), (G, 32), (B, 32)], Uint, 12),
        F::R32G32B32_SINT => color(&[(R, 32), (G, 32), (B, 32)], Sint, 12),
        F::R32G32B32_SFLOAT => color(&[(R, 32), (G, 32), (B, 32)], Sfloat, 12),
        F::R32G32B32A32_UINT => color(&[(R, 32), (G, 32), (B, 32), (A, 32)], Uint, 16),
        F::R32G32B32A32_SINT => color(&[(R, 32), (G, 32), (B, 32), (A, 32)], Sint, 16),
        F::R32G32B32A32_SFLOAT => color(&[(R, 32), (G, 32), (B, 32), (A, 32)], Sfloat, 16),

        F::B10G11R11_UFLOAT_PACK32 => color(&[(R, 11), (G, 11), (B, 10)], Ufloat, 4),

        F::D16_UNORM => depth_stencil(&[(D, 0, 16)], Unorm, 2),
        F::X8_D24_UNORM_PACK32 => depth_stencil(&[(D, 8, 24)], Unorm, 4),
        F::D32_SFLOAT => depth_stencil(&[(D, 0, 32)], Sfloat, 4),
        F::S8_UINT => depth_stencil(&[(S, 0, 8)], Uint, 1),

        F::BC1_RGB_UNORM_BLOCK => compressed(M::Bc1a, [4, 4, 1], 8, Unorm, &[(0, 0, 64)]),
        F::BC1_RGB_SRGB_BLOCK => compressed(M::Bc1a, [4, 4, 1], 8, Srgb, &[(0, 0, 64)]),
        F::BC1_RGBA_UNORM_BLOCK => compressed(M::Bc1a, [4, 4, 1], 8, Unorm, &[(1, 0, 64)]),
        F::BC1_RGBA_SRGB_BLOCK => compressed(M::Bc1a, [4, 4, 1], 8, Srgb, &[(1, 0, 64)]),
        F::BC2_UNORM_BLOCK => {
            compressed(M::Bc2, [4, 4, 1], 16, Unorm, &[(15, 0, 64), (0, 64, 64)])
        }
        F::BC2_SRGB_BLOCK => compressed(M::Bc2, [4, 4, 1], 16, Srgb, &[(15, 0, 64), (0, 64, 64)]),
        F::BC3_UNORM_BLOCK => {
            compressed(M::Bc3, [4, 4, 1], 16, Unorm, &[(15, 0, 64), (0, 64, 64)])
        }
        F::BC3_SRGB_BLOCK => compressed(M::Bc3, [4, 4, 1], 16, Srgb, &[(15, 0, 64), (0, 64, 64)]),
        F::BC4_UNORM_BLOCK => compressed(M::Bc4, [4, 4, 1], 8, Unorm, &[(0, 0, 64)]),
        F::BC4_SNORM_BLOCK => compressed(M::Bc4, [4, 4, 1], 8, Snorm, &[(0, 0, 64)]),
        F::BC5_UNORM_BLOCK => {
            compressed(M::Bc5, [4, 4, 1], 16, Unorm, &[(0, 0, 64), (1, 64, 64)])
        }
        F::BC5_SNORM_BLOCK => {
            compressed(M::Bc5, [4, 4, 1], 16, Snorm, &[(0, 0, 64), (1, 64, 64)])
        }
        F::BC6H_UFLOAT_BLOCK => compressed(M::Bc6h, [4, 4, 1], 16, Ufloat, &[(0, 0, 128)]),
        F::BC6H_SFLOAT_BLOCK => compressed(M::Bc6h, [4, 4, 1], 16, Sfloat, &[(0, 0, 128)]),
        F::BC7_UNORM_BLOCK => compressed(M::Bc7, [4, 4, 1], 16, Unorm, &[(0, 0, 128)]),
        F::BC7_SRGB_BLOCK => compressed(M::Bc7, [4, 4, 1], 16, Srgb, &[(0, 0, 128)]),

        F::ETC2_R8G8B8_UNORM_BLOCK => compressed(M::Etc2, [4, 4, 1], 8, Unorm, &[(2, 0, 64)]),
        F::ETC2_R8G8B8_SRGB_BLOCK => compressed(M::Etc2, [4, 4, 1], 8, Srgb, &[(2, 0, 64)]),
        F::ETC2_R8G8B8A1_UNORM_BLOCK => compressed(M::Etc2, [4, 4, 1], 8, Unorm, &[(2, 0, 64)]),
        F::ETC2_R8G8B8A1_SRGB_BLOCK => compressed(M::Etc2, [4, 4, 1], 8, Srgb, &[(2, 0, 64)]),
        F::ETC2_R8G8B8A8_UNORM_BLOCK => {
            compressed(M::Etc2, [4, 4, 1], 16, Unorm, &[(15, 0, 64), (2, 64, 64)])
        }
        F::ETC2_R8G8B8A8_SRGB_BLOCK => {
            compressed(M::Etc2, [4, 4, 1], 16, Srgb, &[(15, 0, 64), (2, 64, 64)])
        }
        F::EAC_R11_UNORM_BLOCK => compressed(M::Etc2, [4, 4, 1], 8, Unorm, &[(0, 0, 64)]),
        F::EAC_R11_SNORM_BLOCK => compressed(M::Etc2, [4, 4, 1], 8, Snorm, &[(0, 0, 64)]),
        F::EAC_R11G11_UNORM_BLOCK => {
            compressed(M::Etc2, [4, 4, 1], 16, Unorm, &[(0, 0, 64), (1, 64, 64)])
        }
        F::EAC_R11G11_SNORM_BLOCK => {
            compressed(M::Etc2, [4, 4, 1], 16, Snorm, &[(0, 0, 64), (1, 64, 64)])
        }

        _ => {
            // ASTC shares one shape across all footprints.
            let Some(info) = format.texel_block_info() else {
                return None;
            };
            let name = format.name();
            if !name.contains("ASTC") {
                return None;
            }
            let suffix = if name.contains("SRGB") {
                Srgb
            } else if name.contains("SFLOAT") {
                Sfloat
            } else {
                Unorm
            };
            compressed(
                M::Astc,
                [info.block_width, info.block_height, info.block_depth],
                info.block_byte_size,
                suffix,
                &[(0, 0, 128)],
            )
        }
    };

    Some(spec.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfd::DataFormatDescriptor;
    use rstest::rstest;

    #[test]
    fn rgba8_reference_descriptor() {
        let words = create_dfd_for_format(VkFormat::R8G8B8A8_UNORM).unwrap();
        let dfd = DataFormatDescriptor::parse(&words).unwrap();
        assert_eq!(dfd.total_size, 4 + 24 + 4 * 16);
        assert_eq!(dfd.descriptor_block_size, 24 + 4 * 16);
        assert_eq!(dfd.color_model, ColorModel::Rgbsda as u32);
        assert_eq!(dfd.transfer_function, TRANSFER_LINEAR);
        assert_eq!(dfd.texel_block_dimension, [0, 0, 0, 0]);
        assert_eq!(dfd.bytes_plane[0], 4);
        assert_eq!(dfd.samples.len(), 4);
        let red = dfd.samples[0];
        assert_eq!(red.bit_offset, 0);
        assert_eq!(red.bit_length, 7);
        assert_eq!(red.channel_id, R);
        assert_eq!(red.upper, 255);
        let alpha = dfd.samples[3];
        assert_eq!(alpha.bit_offset, 24);
        assert_eq!(alpha.channel_id, A);
    }

    #[test]
    fn srgb_alpha_sample_is_linear() {
        let words = create_dfd_for_format(VkFormat::R8G8B8A8_SRGB).unwrap();
        let dfd = DataFormatDescriptor::parse(&words).unwrap();
        assert_eq!(dfd.transfer_function, TRANSFER_SRGB);
        assert_eq!(dfd.samples[0].qualifiers, 0);
        assert_eq!(dfd.samples[3].qualifiers, QUALIFIER_LINEAR);
    }

    #[test]
    fn snorm_bounds_are_symmetric() {
        let words = create_dfd_for_format(VkFormat::R8_SNORM).unwrap();
        let dfd = DataFormatDescriptor::parse(&words).unwrap();
        let sample = dfd.samples[0];
        assert_eq!(sample.qualifiers, QUALIFIER_SIGNED);
        assert_eq!(sample.lower as i32, -127);
        assert_eq!(sample.upper, 127);
    }

    #[test]
    fn bc7_reference_descriptor() {
        let words = create_dfd_for_format(VkFormat::BC7_SRGB_BLOCK).unwrap();
        let dfd = DataFormatDescriptor::parse(&words).unwrap();
        assert_eq!(dfd.color_model, ColorModel::Bc7 as u32);
        assert_eq!(dfd.transfer_function, TRANSFER_SRGB);
        assert_eq!(dfd.texel_block_dimension, [3, 3, 0, 0]);
        assert_eq!(dfd.bytes_plane[0], 16);
        assert_eq!(dfd.samples.len(), 1);
        assert_eq!(dfd.samples[0].bit_length, 127);
        assert_eq!(dfd.samples[0].upper, u32::MAX);
    }

    #[test]
    fn astc_3d_block_dimensions() {
        let words = create_dfd_for_format(VkFormat::ASTC_6x6x6_SRGB_BLOCK_EXT).unwrap();
        let dfd = DataFormatDescriptor::parse(&words).unwrap();
        assert_eq!(dfd.color_model, ColorModel::Astc as u32);
        assert_eq!(dfd.texel_block_dimension, [5, 5, 5, 0]);
    }

    #[rstest]
    #[case(VkFormat::UNDEFINED)]
    #[case(VkFormat::E5B9G9R9_UFLOAT_PACK32)]
    #[case(VkFormat::D24_UNORM_S8_UINT)]
    #[case(VkFormat::G8_B8R8_2PLANE_420_UNORM)]
    #[case(VkFormat::R64_UINT)]
    fn formats_without_reference_descriptors(#[case] format: VkFormat) {
        assert!(create_dfd_for_format(format).is_none());
    }

    #[test]
    fn total_size_matches_word_count() {
        for format in [
            VkFormat::R8_UNORM,
            VkFormat::R5G6B5_UNORM_PACK16,
            VkFormat::BC3_UNORM_BLOCK,
            VkFormat::ASTC_12x12_SRGB_BLOCK,
        ] {
            let words = create_dfd_for_format(format).unwrap();
            assert_eq!(words[0] as usize, words.len() * 4);
        }
    }
}
