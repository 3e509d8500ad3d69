//! `VkFormat` values and the predicates the validator needs over them.
//!
//! The table covers the full standard range (0..=184) plus the extension
//! families KTX2 files are seen with in the wild: PVRTC (IMG), HDR ASTC
//! (EXT), 3D ASTC (EXT), the Y'CbCr / multi-plane families (KHR, all
//! prohibited in KTX2) and the 4:4:4:4 pack16 formats (EXT).

/// Highest value of the standard (non-extension) `VkFormat` range.
pub const VK_FORMAT_MAX_STANDARD_ENUM: u32 = 184;

/// Upper bound of the registered extension number space. Values above this
/// cannot be extension formats and are treated as invalid rather than
/// unknown.
pub const VK_FORMAT_MAX_EXTENSION_ENUM: u32 = 0x1001_0000;

macro_rules! vk_formats {
    ($($name:ident = $value:literal,)+) => {
        /// A known `VkFormat` value.
        ///
        /// Variant names mirror the Vulkan spelling without the
        /// `VK_FORMAT_` prefix so the name table can be generated from the
        /// declaration itself.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum VkFormat {
            $($name = $value,)+
        }

        impl VkFormat {
            /// Looks up a raw header value.
            ///
            /// # Return
            ///
            /// `None` when the value names no format known to this table;
            /// the caller decides between "invalid" and "possibly an
            /// extension" using the range constants.
            pub fn from_u32(value: u32) -> Option<Self> {
                match value {
                    $($value => Some(Self::$name),)+
                    _ => None,
                }
            }

            /// The canonical `VK_FORMAT_*` spelling.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$name => concat!("VK_FORMAT_", stringify!($name)),)+
                }
            }
        }
    };
}

vk_formats! {
    UNDEFINED = 0,
    R4G4_UNORM_PACK8 = 1,
    R4G4B4A4_UNORM_PACK16 = 2,
    B4G4R4A4_UNORM_PACK16 = 3,
    R5G6B5_UNORM_PACK16 = 4,
    B5G6R5_UNORM_PACK16 = 5,
    R5G5B5A1_UNORM_PACK16 = 6,
    B5G5R5A1_UNORM_PACK16 = 7,
    A1R5G5B5_UNORM_PACK16 = 8,
    R8_UNORM = 9,
    R8_SNORM = 10,
    R8_USCALED = 11,
    R8_SSCALED = 12,
    R8_UINT = 13,
    R8_SINT = 14,
    R8_SRGB = 15,
    R8G8_UNORM = 16,
    R8G8_SNORM = 17,
    R8G8_USCALED = 18,
    R8G8_SSCALED = 19,
    R8G8_UINT = 20,
    R8G8_SINT = 21,
    R8G8_SRGB = 22,
    R8G8B8_UNORM = 23,
    R8G8B8_SNORM = 24,
    R8G8B8_USCALED = 25,
    R8G8B8_SSCALED = 26,
    R8G8B8_UINT = 27,
    R8G8B8_SINT = 28,
    R8G8B8_SRGB = 29,
    B8G8R8_UNORM = 30,
    B8G8R8_SNORM = 31,
    B8G8R8_USCALED = 32,
    B8G8R8_SSCALED = 33,
    B8G8R8_UINT = 34,
    B8G8R8_SINT = 35,
    B8G8R8_SRGB = 36,
    R8G8B8A8_UNORM = 37,
    R8G8B8A8_SNORM = 38,
    R8G8B8A8_USCALED = 39,
    R8G8B8A8_SSCALED = 40,
    R8G8B8A8_UINT = 41,
    R8G8B8A8_SINT = 42,
    R8G8B8A8_SRGB = 43,
    B8G8R8A8_UNORM = 44,
    B8G8R8A8_SNORM = 45,
    B8G8R8A8_USCALED = 46,
    B8G8R8A8_SSCALED = 47,
    B8G8R8A8_UINT = 48,
    B8G8R8A8_SINT = 49,
    B8G8R8A8_SRGB = 50,
    A8B8G8R8_UNORM_PACK32 = 51,
    A8B8G8R8_SNORM_PACK32 = 52,
    A8B8G8R8_USCALED_PACK32 = 53,
    A8B8G8R8_SSCALED_PACK32 = 54,
    A8B8G8R8_UINT_PACK32 = 55,
    A8B8G8R8_SINT_PACK32 = 56,
    A8B8G8R8_SRGB_PACK32 = 57,
    A2R10G10B10_UNORM_PACK32 = 58,
    A2R10G10B10_SNORM_PACK32 = 59,
    A2R10G10B10_USCALED_PACK32 = 60,
    A2R10G10B10_SSCALED_PACK32 = 61,
    A2R10G10B10_UINT_PACK32 = 62,
    A2R10G10B10_SINT_PACK32 = 63,
    A2B10G10R10_UNORM_PACK32 = 64,
    A2B10G10R10_SNORM_PACK32 = 65,
    A2B10G10R10_USCALED_PACK32 = 66,
    A2B10G10R10_SSCALED_PACK32 = 67,
    A2B10G10R10_UINT_PACK32 = 68,
    A2B10G10R10_SINT_PACK32 = 69,
    R16_UNORM = 70,
    R16_SNORM = 71,
    R16_USCALED = 72,
    R16_SSCALED = 73,
    R16_UINT = 74,
    R16_SINT = 75,
    R16_SFLOAT = 76,
    R16G16_UNORM = 77,
    R16G16_SNORM = 78,
    R16G16_USCALED = 79,
    R16G16_SSCALED = 80,
    R16G16_UINT = 81,
    R16G16_SINT = 82,
    R16G16_SFLOAT = 83,
    R16G16B16_UNORM = 84,
    R16G16B16_SNORM = 85,
    R16G16B16_USCALED = 86,
    R16G16B16_SSCALED = 87,
    R16G16B16_UINT = 88,
    R16G16B16_SINT = 89,
    R16G16B16_SFLOAT = 90,
    R16G16B16A16_UNORM = 91,
    R16G16B16A16_SNORM = 92,
    R16G16B16A16_USCALED = 93,
    R16G16B16A16_SSCALED = 94,
    R16G16B16A16_UINT = 95,
    R16G16B16A16_SINT = 96,
    R16G16B16A16_SFLOAT = 97,
    R32_UINT = 98,
    R32_SINT = 99,
    R32_SFLOAT = 100,
    R32G32_UINT = 101,
    R32G32_SINT = 102,
    R32G32_SFLOAT = 103,
    R32G32B32_UINT = 104,
    R32G32B32_SINT = 105,
    R32G32B32_SFLOAT = 106,
    R32G32B32A32_UINT = 107,
    R32G32B32A32_SINT = 108,
    R32G32B32A32_SFLOAT = 109,
    R64_UINT = 110,
    R64_SINT = 111,
    R64_SFLOAT = 112,
    R64G64_UINT = 113,
    R64G64_SINT = 114,
    R64G64_SFLOAT = 115,
    R64G64B64_UINT = 116,
    R64G64B64_SINT = 117,
    R64G64B64_SFLOAT = 118,
    R64G64B64A64_UINT = 119,
    R64G64B64A64_SINT = 120,
    R64G64B64A64_SFLOAT = 121,
    B10G11R11_UFLOAT_PACK32 = 122,
    E5B9G9R9_UFLOAT_PACK32 = 123,
    D16_UNORM = 124,
    X8_D24_UNORM_PACK32 = 125,
    D32_SFLOAT = 126,
    S8_UINT = 127,
    D16_UNORM_S8_UINT = 128,
    D24_UNORM_S8_UINT = 129,
    D32_SFLOAT_S8_UINT = 130,
    BC1_RGB_UNORM_BLOCK = 131,
    BC1_RGB_SRGB_BLOCK = 132,
    BC1_RGBA_UNORM_BLOCK = 133,
    BC1_RGBA_SRGB_BLOCK = 134,
    BC2_UNORM_BLOCK = 135,
    BC2_SRGB_BLOCK = 136,
    BC3_UNORM_BLOCK = 137,
    BC3_SRGB_BLOCK = 138,
    BC4_UNORM_BLOCK = 139,
    BC4_SNORM_BLOCK = 140,
    BC5_UNORM_BLOCK = 141,
    BC5_SNORM_BLOCK = 142,
    BC6H_UFLOAT_BLOCK = 143,
    BC6H_SFLOAT_BLOCK = 144,
    BC7_UNORM_BLOCK = 145,
    BC7_SRGB_BLOCK = 146,
    ETC2_R8G8B8_UNORM_BLOCK = 147,
    ETC2_R8G8B8_SRGB_BLOCK = 148,
    ETC2_R8G8B8A1_UNORM_BLOCK = 149,
    ETC2_R8G8B8A1_SRGB_BLOCK = 150,
    ETC2_R8G8B8A8_UNORM_BLOCK = 151,
    ETC2_R8G8B8A8_SRGB_BLOCK = 152,
    EAC_R11_UNORM_BLOCK = 153,
    EAC_R11_SNORM_BLOCK = 154,
    EAC_R11G11_UNORM_BLOCK = 155,
    EAC_R11G11_SNORM_BLOCK = 156,
    ASTC_4x4_UNORM_BLOCK = 157,
    ASTC_4x4_SRGB_BLOCK = 158,
    ASTC_5x4_UNORM_BLOCK = 159,
    ASTC_5x4_SRGB_BLOCK = 160,
    ASTC_5x5_UNORM_BLOCK = 161,
    ASTC_5x5_SRGB_BLOCK = 162,
    ASTC_6x5_UNORM_BLOCK = 163,
    ASTC_6x5_SRGB_BLOCK = 164,
    ASTC_6x6_UNORM_BLOCK = 165,
    ASTC_6x6_SRGB_BLOCK = 166,
    ASTC_8x5_UNORM_BLOCK = 167,
    ASTC_8x5_SRGB_BLOCK = 168,
    ASTC_8x6_UNORM_BLOCK = 169,
    ASTC_8x6_SRGB_BLOCK = 170,
    ASTC_8x8_UNORM_BLOCK = 171,
    ASTC_8x8_SRGB_BLOCK = 172,
    ASTC_10x5_UNORM_BLOCK = 173,
    ASTC_10x5_SRGB_BLOCK = 174,
    ASTC_10x6_UNORM_BLOCK = 175,
    ASTC_10x6_SRGB_BLOCK = 176,
    ASTC_10x8_UNORM_BLOCK = 177,
    ASTC_10x8_SRGB_BLOCK = 178,
    ASTC_10x10_UNORM_BLOCK = 179,
    ASTC_10x10_SRGB_BLOCK = 180,
    ASTC_12x10_UNORM_BLOCK = 181,
    ASTC_12x10_SRGB_BLOCK = 182,
    ASTC_12x12_UNORM_BLOCK = 183,
    ASTC_12x12_SRGB_BLOCK = 184,
    PVRTC1_2BPP_UNORM_BLOCK_IMG = 1000054000,
    PVRTC1_4BPP_UNORM_BLOCK_IMG = 1000054001,
    PVRTC2_2BPP_UNORM_BLOCK_IMG = 1000054002,
    PVRTC2_4BPP_UNORM_BLOCK_IMG = 1000054003,
    PVRTC1_2BPP_SRGB_BLOCK_IMG = 1000054004,
    PVRTC1_4BPP_SRGB_BLOCK_IMG = 1000054005,
    PVRTC2_2BPP_SRGB_BLOCK_IMG = 1000054006,
    PVRTC2_4BPP_SRGB_BLOCK_IMG = 1000054007,
    ASTC_4x4_SFLOAT_BLOCK_EXT = 1000066000,
    ASTC_5x4_SFLOAT_BLOCK_EXT = 1000066001,
    ASTC_5x5_SFLOAT_BLOCK_EXT = 1000066002,
    ASTC_6x5_SFLOAT_BLOCK_EXT = 1000066003,
    ASTC_6x6_SFLOAT_BLOCK_EXT = 1000066004,
    ASTC_8x5_SFLOAT_BLOCK_EXT = 1000066005,
    ASTC_8x6_SFLOAT_BLOCK_EXT = 1000066006,
    ASTC_8x8_SFLOAT_BLOCK_EXT = 1000066007,
    ASTC_10x5_SFLOAT_BLOCK_EXT = 1000066008,
    ASTC_10x6_SFLOAT_BLOCK_EXT = 1000066009,
    ASTC_10x8_SFLOAT_BLOCK_EXT = 1000066010,
    ASTC_10x10_SFLOAT_BLOCK_EXT = 1000066011,
    ASTC_12x10_SFLOAT_BLOCK_EXT = 1000066012,
    ASTC_12x12_SFLOAT_BLOCK_EXT = 1000066013,
    G8B8G8R8_422_UNORM = 1000156000,
    B8G8R8G8_422_UNORM = 1000156001,
    G8_B8_R8_3PLANE_420_UNORM = 1000156002,
    G8_B8R8_2PLANE_420_UNORM = 1000156003,
    G8_B8_R8_3PLANE_422_UNORM = 1000156004,
    G8_B8R8_2PLANE_422_UNORM = 1000156005,
    G8_B8_R8_3PLANE_444_UNORM = 1000156006,
    R10X6_UNORM_PACK16 = 1000156007,
    R10X6G10X6_UNORM_2PACK16 = 1000156008,
    R10X6G10X6B10X6A10X6_UNORM_4PACK16 = 1000156009,
    G10X6B10X6G10X6R10X6_422_UNORM_4PACK16 = 1000156010,
    B10X6G10X6R10X6G10X6_422_UNORM_4PACK16 = 1000156011,
    G10X6_B10X6_R10X6_3PLANE_420_UNORM_3PACK16 = 1000156012,
    G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16 = 1000156013,
    G10X6_B10X6_R10X6_3PLANE_422_UNORM_3PACK16 = 1000156014,
    G10X6_B10X6R10X6_2PLANE_422_UNORM_3PACK16 = 1000156015,
    G10X6_B10X6_R10X6_3PLANE_444_UNORM_3PACK16 = 1000156016,
    R12X4_UNORM_PACK16 = 1000156017,
    R12X4G12X4_UNORM_2PACK16 = 1000156018,
    R12X4G12X4B12X4A12X4_UNORM_4PACK16 = 1000156019,
    G12X4B12X4G12X4R12X4_422_UNORM_4PACK16 = 1000156020,
    B12X4G12X4R12X4G12X4_422_UNORM_4PACK16 = 1000156021,
    G12X4_B12X4_R12X4_3PLANE_420_UNORM_3PACK16 = 1000156022,
    G12X4_B12X4R12X4_2PLANE_420_UNORM_3PACK16 = 1000156023,
    G12X4_B12X4_R12X4_3PLANE_422_UNORM_3PACK16 = 1000156024,
    G12X4_B12X4R12X4_2PLANE_422_UNORM_3PACK16 = 1000156025,
    G12X4_B12X4_R12X4_3PLANE_444_UNORM_3PACK16 = 1000156026,
    G16B16G16R16_422_UNORM = 1000156027,
    B16G16R16G16_422_UNORM = 1000156028,
    G16_B16_R16_3PLANE_420_UNORM = 1000156029,
    G16_B16R16_2PLANE_420_UNORM = 1000156030,
    G16_B16_R16_3PLANE_422_UNORM = 1000156031,
    G16_B16R16_2PLANE_422_UNORM = 1000156032,
    G16_B16_R16_3PLANE_444_UNORM = 1000156033,
    ASTC_3x3x3_UNORM_BLOCK_EXT = 1000288000,
    ASTC_3x3x3_SRGB_BLOCK_EXT = 1000288001,
    ASTC_3x3x3_SFLOAT_BLOCK_EXT = 1000288002,
    ASTC_4x3x3_UNORM_BLOCK_EXT = 1000288003,
    ASTC_4x3x3_SRGB_BLOCK_EXT = 1000288004,
    ASTC_4x3x3_SFLOAT_BLOCK_EXT = 1000288005,
    ASTC_4x4x3_UNORM_BLOCK_EXT = 1000288006,
    ASTC_4x4x3_SRGB_BLOCK_EXT = 1000288007,
    ASTC_4x4x3_SFLOAT_BLOCK_EXT = 1000288008,
    ASTC_4x4x4_UNORM_BLOCK_EXT = 1000288009,
    ASTC_4x4x4_SRGB_BLOCK_EXT = 1000288010,
    ASTC_4x4x4_SFLOAT_BLOCK_EXT = 1000288011,
    ASTC_5x4x4_UNORM_BLOCK_EXT = 1000288012,
    ASTC_5x4x4_SRGB_BLOCK_EXT = 1000288013,
    ASTC_5x4x4_SFLOAT_BLOCK_EXT = 1000288014,
    ASTC_5x5x4_UNORM_BLOCK_EXT = 1000288015,
    ASTC_5x5x4_SRGB_BLOCK_EXT = 1000288016,
    ASTC_5x5x4_SFLOAT_BLOCK_EXT = 1000288017,
    ASTC_5x5x5_UNORM_BLOCK_EXT = 1000288018,
    ASTC_5x5x5_SRGB_BLOCK_EXT = 1000288019,
    ASTC_5x5x5_SFLOAT_BLOCK_EXT = 1000288020,
    ASTC_6x5x5_UNORM_BLOCK_EXT = 1000288021,
    ASTC_6x5x5_SRGB_BLOCK_EXT = 1000288022,
    ASTC_6x5x5_SFLOAT_BLOCK_EXT = 1000288023,
    ASTC_6x6x5_UNORM_BLOCK_EXT = 1000288024,
    ASTC_6x6x5_SRGB_BLOCK_EXT = 1000288025,
    ASTC_6x6x5_SFLOAT_BLOCK_EXT = 1000288026,
    ASTC_6x6x6_UNORM_BLOCK_EXT = 1000288027,
    ASTC_6x6x6_SRGB_BLOCK_EXT = 1000288028,
    ASTC_6x6x6_SFLOAT_BLOCK_EXT = 1000288029,
    A4R4G4B4_UNORM_PACK16_EXT = 1000340000,
    A4B4G4R4_UNORM_PACK16_EXT = 1000340001,
}

/// Renders a raw format value as its `VK_FORMAT_*` name, or `(0xHEX)` when
/// the value is not in the table.
pub fn format_name_or_hex(raw: u32) -> String {
    match VkFormat::from_u32(raw) {
        Some(format) => format.name().to_string(),
        None => format!("(0x{raw:X})"),
    }
}

/// Texel block geometry and size of a concrete format, used to compute
/// exact level sizes and the required level alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexelBlockInfo {
    pub block_width: u32,
    pub block_height: u32,
    pub block_depth: u32,
    pub block_byte_size: u32,
}

impl TexelBlockInfo {
    const fn uncompressed(byte_size: u32) -> Self {
        Self {
            block_width: 1,
            block_height: 1,
            block_depth: 1,
            block_byte_size: byte_size,
        }
    }

    const fn compressed(width: u32, height: u32, byte_size: u32) -> Self {
        Self {
            block_width: width,
            block_height: height,
            block_depth: 1,
            block_byte_size: byte_size,
        }
    }

    const fn compressed_3d(width: u32, height: u32, depth: u32, byte_size: u32) -> Self {
        Self {
            block_width: width,
            block_height: height,
            block_depth: depth,
            block_byte_size: byte_size,
        }
    }
}

impl VkFormat {
    /// Whether this format is prohibited from appearing in a KTX2 file
    /// (`_SCALED` variants, the `A8B8G8R8` pack32 family and the chroma
    /// subsampled / multi-plane Y'CbCr families).
    pub fn is_prohibited(self) -> bool {
        use VkFormat::*;
        matches!(
            self,
            R8_USCALED
                | R8_SSCALED
                | R8G8_USCALED
                | R8G8_SSCALED
                | R8G8B8_USCALED
                | R8G8B8_SSCALED
                | B8G8R8_USCALED
                | B8G8R8_SSCALED
                | R8G8B8A8_USCALED
                | R8G8B8A8_SSCALED
                | B8G8R8A8_USCALED
                | B8G8R8A8_SSCALED
                | A8B8G8R8_UNORM_PACK32
                | A8B8G8R8_SNORM_PACK32
                | A8B8G8R8_USCALED_PACK32
                | A8B8G8R8_SSCALED_PACK32
                | A8B8G8R8_UINT_PACK32
                | A8B8G8R8_SINT_PACK32
                | A8B8G8R8_SRGB_PACK32
                | A2R10G10B10_USCALED_PACK32
                | A2R10G10B10_SSCALED_PACK32
                | A2B10G10R10_USCALED_PACK32
                | A2B10G10R10_SSCALED_PACK32
                | R16_USCALED
                | R16_SSCALED
                | R16G16_USCALED
                | R16G16_SSCALED
                | R16G16B16_USCALED
                | R16G16B16_SSCALED
                | R16G16B16A16_USCALED
                | R16G16B16A16_SSCALED
                | G8B8G8R8_422_UNORM
                | B8G8R8G8_422_UNORM
                | G8_B8_R8_3PLANE_420_UNORM
                | G8_B8R8_2PLANE_420_UNORM
                | G8_B8_R8_3PLANE_422_UNORM
                | G8_B8R8_2PLANE_422_UNORM
                | G8_B8_R8_3PLANE_444_UNORM
                | G10X6B10X6G10X6R10X6_422_UNORM_4PACK16
                | B10X6G10X6R10X6G10X6_422_UNORM_4PACK16
                | G10X6_B10X6_R10X6_3PLANE_420_UNORM_3PACK16
                | G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16
                | G10X6_B10X6_R10X6_3PLANE_422_UNORM_3PACK16
                | G10X6_B10X6R10X6_2PLANE_422_UNORM_3PACK16
                | G10X6_B10X6_R10X6_3PLANE_444_UNORM_3PACK16
                | G12X4B12X4G12X4R12X4_422_UNORM_4PACK16
                | B12X4G12X4R12X4G12X4_422_UNORM_4PACK16
                | G12X4_B12X4_R12X4_3PLANE_420_UNORM_3PACK16
                | G12X4_B12X4R12X4_2PLANE_420_UNORM_3PACK16
                | G12X4_B12X4_R12X4_3PLANE_422_UNORM_3PACK16
                | G12X4_B12X4R12X4_2PLANE_422_UNORM_3PACK16
                | G12X4_B12X4_R12X4_3PLANE_444_UNORM_3PACK16
                | G16B16G16R16_422_UNORM
                | B16G16R16G16_422_UNORM
                | G16_B16_R16_3PLANE_420_UNORM
                | G16_B16R16_2PLANE_420_UNORM
                | G16_B16_R16_3PLANE_422_UNORM
                | G16_B16R16_2PLANE_422_UNORM
                | G16_B16_R16_3PLANE_444_UNORM
        )
    }

    /// Whether this format stores texels in compressed blocks.
    pub fn is_block_compressed(self) -> bool {
        let raw = self as u32;
        (131..=184).contains(&raw)
            || (1000054000..=1000054007).contains(&raw)
            || (1000066000..=1000066013).contains(&raw)
            || (1000288000..=1000288029).contains(&raw)
    }

    /// Whether this format's texel block spans more than one depth slice.
    pub fn is_3d_block_compressed(self) -> bool {
        let raw = self as u32;
        (1000288000..=1000288029).contains(&raw)
    }

    /// Whether this format carries a depth aspect.
    pub fn is_depth(self) -> bool {
        use VkFormat::*;
        matches!(
            self,
            D16_UNORM
                | X8_D24_UNORM_PACK32
                | D32_SFLOAT
                | D16_UNORM_S8_UINT
                | D24_UNORM_S8_UINT
                | D32_SFLOAT_S8_UINT
        )
    }

    /// Whether this format carries a stencil aspect.
    pub fn is_stencil(self) -> bool {
        use VkFormat::*;
        matches!(
            self,
            S8_UINT | D16_UNORM_S8_UINT | D24_UNORM_S8_UINT | D32_SFLOAT_S8_UINT
        )
    }

    /// Whether the format name carries the sRGB transfer function.
    pub fn is_srgb(self) -> bool {
        self.name().contains("SRGB")
    }

    /// Texel block geometry and byte size.
    ///
    /// # Return
    ///
    /// `None` for `UNDEFINED`, the prohibited multi-plane families and the
    /// combined depth-stencil formats whose plane layout is
    /// implementation-defined; level sizes cannot be predicted for those.
    pub fn texel_block_info(self) -> Option<TexelBlockInfo> {
        use VkFormat::*;
        let info = match self {
            R4G4_UNORM_PACK8 | R8_UNORM | R8_SNORM | R8_USCALED | R8_SSCALED | R8_UINT
            | R8_SINT | R8_SRGB | S8_UINT => TexelBlockInfo::uncompressed(1),

            R4G4B4A4_UNORM_PACK16 | B4G4R4A4_UNORM_PACK16 | R5G6B5_UNORM_PACK16
            | B5G6R5_UNORM_PACK16 | R5G5B5A1_UNORM_PACK16 | B5G5R5A1_UNORM_PACK16
            | A1R5G5B5_UNORM_PACK16 | R8G8_UNORM | R8G8_SNORM | R8G8_USCALED | R8G8_SSCALED
            | R8G8_UINT | R8G8_SINT | R8G8_SRGB | R16_UNORM | R16_SNORM | R16_USCALED
            | R16_SSCALED | R16_UINT | R16_SINT | R16_SFLOAT | D16_UNORM
            | R10X6_UNORM_PACK16 | R12X4_UNORM_PACK16 | A4R4G4B4_UNORM_PACK16_EXT
            | A4B4G4R4_UNORM_PACK16_EXT => TexelBlockInfo::uncompressed(2),

            R8G8B8_UNORM | R8G8B8_SNORM | R8G8B8_USCALED | R8G8B8_SSCALED | R8G8B8_UINT
            | R8G8B8_SINT | R8G8B8_SRGB | B8G8R8_UNORM | B8G8R8_SNORM | B8G8R8_USCALED
            | B8G8R8_SSCALED | B8G8R8_UINT | B8G8R8_SINT | B8G8R8_SRGB => {
                TexelBlockInfo::uncompressed(3)
            }

            R8G8B8A8_UNORM | R8G8B8A8_SNORM | R8G8B8A8_USCALED | R8G8B8A8_SSCALED
            | R8G8B8A8_UINT | R8G8B8A8_SINT | R8G8B8A8_SRGB | B8G8R8A8_UNORM
            | B8G8R8A8_SNORM | B8G8R8A8_USCALED | B8G8R8A8_SSCALED | B8G8R8A8_UINT
            | B8G8R8A8_SINT | B8G8R8A8_SRGB | A8B8G8R8_UNORM_PACK32 | A8B8G8R8_SNORM_PACK32
            | A8B8G8R8_USCALED_PACK32 | A8B8G8R8_SSCALED_PACK32 | A8B8G8R8_UINT_PACK32
            | A8B8G8R8_SINT_PACK32 | A8B8G8R8_SRGB_PACK32 | A2R10G10B10_UNORM_PACK32
            | A2R10G10B10_SNORM_PACK32 | A2R10G10B10_USCALED_PACK32
            | A2R10G10B10_SSCALED_PACK32 | A2R10G10B10_UINT_PACK32 | A2R10G10B10_SINT_PACK32
            | A2B10G10R10_UNORM_PACK32 | A2B10G10R10_SNORM_PACK32
            | A2B10G10R10_USCALED_PACK32 | A2B10G10R10_SSCALED_PACK32
            | A2B10G10R10_UINT_PACK32 | A2B10G10R10_SINT_PACK32 | R16G16_UNORM
            | R16G16_SNORM | R16G16_USCALED | R16G16_SSCALED | R16G16_UINT | R16G16_SINT
            | R16G16_SFLOAT | R32_UINT | R32_SINT | R32_SFLOAT | B10G11R11_UFLOAT_PACK32
            | E5B9G9R9_UFLOAT_PACK32 | X8_D24_UNORM_PACK32 | D32_SFLOAT
            | R10X6G10X6_UNORM_2PACK16 | R12X4G12X4_UNORM_2PACK16 => {
                TexelBlockInfo::uncompressed(4)
            }

            R16G16B16_UNORM | R16G16B16_SNORM | R16G16B16_USCALED | R16G16B16_SSCALED
            | R16G16B16_UINT | R16G16B16_SINT | R16G16B16_SFLOAT => {
                TexelBlockInfo::uncompressed(6)
            }

            R16G16B16A16_UNORM | R16G16B16A16_SNORM | R16G16B16A16_USCALED
            | R16G16B16A16_SSCALED | R16G16B16A16_UINT | R16G16B16A16_SINT
            | R16G16B16A16_SFLOAT | R32G32_UINT | R32G32_SINT | R32G32_SFLOAT | R64_UINT
            | R64_SINT | R64_SFLOAT | R10X6G10X6B10X6A10X6_UNORM_4PACK16
            | R12X4G12X4B12X4A12X4_UNORM_4PACK16 => TexelBlockInfo::uncompressed(8),

            R32G32B32_UINT | R32G32B32_SINT | R32G32B32_SFLOAT => {
                TexelBlockInfo::uncompressed(12)
            }

            R32G32B32A32_UINT | R32G32B32A32_SINT | R32G32B32A32_SFLOAT | R64G64_UINT
            | R64G64_SINT | R64G64_SFLOAT => TexelBlockInfo::uncompressed(16),

            R64G64B64_UINT | R64G64B64_SINT | R64G64B64_SFLOAT => {
                TexelBlockInfo::uncompressed(24)
            }

            R64G64B64A64_UINT | R64G64B64A64_SINT | R64G64B64A64_SFLOAT => {
                TexelBlockInfo::uncompressed(32)
            }

            BC1_RGB_UNORM_BLOCK | BC1_RGB_SRGB_BLOCK | BC1_RGBA_UNORM_BLOCK
            | BC1_RGBA_SRGB_BLOCK | BC4_UNORM_BLOCK | BC4_SNORM_BLOCK
            | ETC2_R8G8B8_UNORM_BLOCK | ETC2_R8G8B8_SRGB_BLOCK | ETC2_R8G8B8A1_UNORM_BLOCK
            | ETC2_R8G8B8A1_SRGB_BLOCK | EAC_R11_UNORM_BLOCK | EAC_R11_SNORM_BLOCK => {
                TexelBlockInfo::compressed(4, 4, 8)
            }

            BC2_UNORM_BLOCK | BC2_SRGB_BLOCK | BC3_UNORM_BLOCK | BC3_SRGB_BLOCK
            | BC5_UNORM_BLOCK | BC5_SNORM_BLOCK | BC6H_UFLOAT_BLOCK | BC6H_SFLOAT_BLOCK
            | BC7_UNORM_BLOCK | BC7_SRGB_BLOCK | ETC2_R8G8B8A8_UNORM_BLOCK
            | ETC2_R8G8B8A8_SRGB_BLOCK | EAC_R11G11_UNORM_BLOCK | EAC_R11G11_SNORM_BLOCK => {
                TexelBlockInfo::compressed(4, 4, 16)
            }

            ASTC_4x4_UNORM_BLOCK | ASTC_4x4_SRGB_BLOCK | ASTC_4x4_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(4, 4, 16)
            }
            ASTC_5x4_UNORM_BLOCK | ASTC_5x4_SRGB_BLOCK | ASTC_5x4_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(5, 4, 16)
            }
            ASTC_5x5_UNORM_BLOCK | ASTC_5x5_SRGB_BLOCK | ASTC_5x5_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(5, 5, 16)
            }
            ASTC_6x5_UNORM_BLOCK | ASTC_6x5_SRGB_BLOCK | ASTC_6x5_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(6, 5, 16)
            }
            ASTC_6x6_UNORM_BLOCK | ASTC_6x6_SRGB_BLOCK | ASTC_6x6_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(6, 6, 16)
            }
            ASTC_8x5_UNORM_BLOCK | ASTC_8x5_SRGB_BLOCK | ASTC_8x5_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(8, 5, 16)
            }
            ASTC_8x6_UNORM_BLOCK | ASTC_8x6_SRGB_BLOCK | ASTC_8x6_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(8, 6, 16)
            }
            ASTC_8x8_UNORM_BLOCK | ASTC_8x8_SRGB_BLOCK | ASTC_8x8_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(8, 8, 16)
            }
            ASTC_10x5_UNORM_BLOCK | ASTC_10x5_SRGB_BLOCK | ASTC_10x5_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(10, 5, 16)
            }
            ASTC_10x6_UNORM_BLOCK | ASTC_10x6_SRGB_BLOCK | ASTC_10x6_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(10, 6, 16)
            }
            ASTC_10x8_UNORM_BLOCK | ASTC_10x8_SRGB_BLOCK | ASTC_10x8_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(10, 8, 16)
            }
            ASTC_10x10_UNORM_BLOCK | ASTC_10x10_SRGB_BLOCK | ASTC_10x10_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(10, 10, 16)
            }
            ASTC_12x10_UNORM_BLOCK | ASTC_12x10_SRGB_BLOCK | ASTC_12x10_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(12, 10, 16)
            }
            ASTC_12x12_UNORM_BLOCK | ASTC_12x12_SRGB_BLOCK | ASTC_12x12_SFLOAT_BLOCK_EXT => {
                TexelBlockInfo::compressed(12, 12, 16)
            }

            // PVRTC1 2bpp blocks are 8x4, everything else in the family 4x4.
            PVRTC1_2BPP_UNORM_BLOCK_IMG | PVRTC1_2BPP_SRGB_BLOCK_IMG
            | PVRTC2_2BPP_UNORM_BLOCK_IMG | PVRTC2_2BPP_SRGB_BLOCK_IMG => {
                TexelBlockInfo::compressed(8, 4, 8)
            }
            PVRTC1_4BPP_UNORM_BLOCK_IMG | PVRTC1_4BPP_SRGB_BLOCK_IMG
            | PVRTC2_4BPP_UNORM_BLOCK_IMG | PVRTC2_4BPP_SRGB_BLOCK_IMG => {
                TexelBlockInfo::compressed(4, 4, 8)
            }

            ASTC_3x3x3_UNORM_BLOCK_EXT | ASTC_3x3x3_SRGB_BLOCK_EXT
            | ASTC_3x3x3_SFLOAT_BLOCK_EXT => TexelBlockInfo::compressed_3d(3, 3, 3, 16),
            ASTC_4x3x3_UNORM_BLOCK_EXT | ASTC_4x3x3_SRGB_BLOCK_EXT
            | ASTC_4x3x3_SFLOAT_BLOCK_EXT => TexelBlockInfo::compressed_3d(4, 3, 3, 16),
            ASTC_4x4x3_UNORM_BLOCK_EXT | ASTC_4x4x3_SRGB_BLOCK_EXT
            | ASTC_4x4x3_SFLOAT_BLOCK_EXT => TexelBlockInfo::compressed_3d(4, 4, 3, 16),
            ASTC_4x4x4_UNORM_BLOCK_EXT | ASTC_4x4x4_SRGB_BLOCK_EXT
            | ASTC_4x4x4_SFLOAT_BLOCK_EXT => TexelBlockInfo::compressed_3d(4, 4, 4, 16),
            ASTC_5x4x4_UNORM_BLOCK_EXT | ASTC_5x4x4_SRGB_BLOCK_EXT
            | ASTC_5x4x4_SFLOAT_BLOCK_EXT => TexelBlockInfo::compressed_3d(5, 4, 4, 16),
            ASTC_5x5x4_UNORM_BLOCK_EXT | ASTC_5x5x4_SRGB_BLOCK_EXT
            | ASTC_5x5x4_SFLOAT_BLOCK_EXT => TexelBlockInfo::compressed_3d(5, 5, 4, 16),
            ASTC_5x5x5_UNORM_BLOCK_EXT | ASTC_5x5x5_SRGB_BLOCK_EXT
            | ASTC_5x5x5_SFLOAT_BLOCK_EXT => TexelBlockInfo::compressed_3d(5, 5, 5, 16),
            ASTC_6x5x5_UNORM_BLOCK_EXT | ASTC_6x5x5_SRGB_BLOCK_EXT
            | ASTC_6x5x5_SFLOAT_BLOCK_EXT => TexelBlockInfo::compressed_3d(6, 5, 5, 16),
            ASTC_6x6x5_UNORM_BLOCK_EXT | ASTC_6x6x5_SRGB_BLOCK_EXT
            | ASTC_6x6x5_SFLOAT_BLOCK_EXT => TexelBlockInfo::compressed_3d(6, 6, 5, 16),
            ASTC_6x6x6_UNORM_BLOCK_EXT | ASTC_6x6x6_SRGB_BLOCK_EXT
            | ASTC_6x6x6_SFLOAT_BLOCK_EXT => TexelBlockInfo::compressed_3d(6, 6, 6, 16),

            _ => return None,
        };
        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, VkFormat::UNDEFINED)]
    #[case(37, VkFormat::R8G8B8A8_UNORM)]
    #[case(131, VkFormat::BC1_RGB_UNORM_BLOCK)]
    #[case(184, VkFormat::ASTC_12x12_SRGB_BLOCK)]
    #[case(1000054000, VkFormat::PVRTC1_2BPP_UNORM_BLOCK_IMG)]
    #[case(1000288029, VkFormat::ASTC_6x6x6_SFLOAT_BLOCK_EXT)]
    fn from_u32_finds_known_values(#[case] raw: u32, #[case] expected: VkFormat) {
        assert_eq!(VkFormat::from_u32(raw), Some(expected));
    }

    #[test]
    fn from_u32_rejects_unknown_values() {
        assert_eq!(VkFormat::from_u32(185), None);
        assert_eq!(VkFormat::from_u32(0xDEADBEEF), None);
    }

    #[test]
    fn names_carry_the_vulkan_prefix() {
        assert_eq!(VkFormat::R8G8B8A8_UNORM.name(), "VK_FORMAT_R8G8B8A8_UNORM");
        assert_eq!(
            VkFormat::ASTC_4x4_SRGB_BLOCK.name(),
            "VK_FORMAT_ASTC_4x4_SRGB_BLOCK"
        );
        assert_eq!(format_name_or_hex(37), "VK_FORMAT_R8G8B8A8_UNORM");
        assert_eq!(format_name_or_hex(0xABCD0000), "(0xABCD0000)");
    }

    #[rstest]
    #[case(VkFormat::R8_USCALED)]
    #[case(VkFormat::R16G16B16A16_SSCALED)]
    #[case(VkFormat::A8B8G8R8_SRGB_PACK32)]
    #[case(VkFormat::G8B8G8R8_422_UNORM)]
    #[case(VkFormat::G8_B8R8_2PLANE_420_UNORM)]
    #[case(VkFormat::G16_B16_R16_3PLANE_444_UNORM)]
    fn prohibited_formats_are_flagged(#[case] format: VkFormat) {
        assert!(format.is_prohibited());
    }

    #[rstest]
    #[case(VkFormat::R8G8B8A8_UNORM)]
    #[case(VkFormat::BC7_SRGB_BLOCK)]
    #[case(VkFormat::R10X6_UNORM_PACK16)]
    fn allowed_formats_are_not_flagged(#[case] format: VkFormat) {
        assert!(!format.is_prohibited());
    }

    #[test]
    fn block_compression_predicates() {
        assert!(VkFormat::BC1_RGB_UNORM_BLOCK.is_block_compressed());
        assert!(VkFormat::ASTC_12x12_SRGB_BLOCK.is_block_compressed());
        assert!(VkFormat::PVRTC2_4BPP_SRGB_BLOCK_IMG.is_block_compressed());
        assert!(VkFormat::ASTC_3x3x3_UNORM_BLOCK_EXT.is_block_compressed());
        assert!(!VkFormat::R8G8B8A8_UNORM.is_block_compressed());

        assert!(VkFormat::ASTC_4x4x4_SRGB_BLOCK_EXT.is_3d_block_compressed());
        assert!(!VkFormat::ASTC_4x4_SRGB_BLOCK.is_3d_block_compressed());
    }

    #[test]
    fn depth_stencil_predicates() {
        assert!(VkFormat::D16_UNORM.is_depth());
        assert!(!VkFormat::D16_UNORM.is_stencil());
        assert!(VkFormat::S8_UINT.is_stencil());
        assert!(!VkFormat::S8_UINT.is_depth());
        assert!(VkFormat::D32_SFLOAT_S8_UINT.is_depth());
        assert!(VkFormat::D32_SFLOAT_S8_UINT.is_stencil());
        assert!(!VkFormat::R8G8B8A8_UNORM.is_depth());
    }

    #[rstest]
    #[case(VkFormat::R8G8B8A8_UNORM, 1, 1, 4)]
    #[case(VkFormat::R5G6B5_UNORM_PACK16, 1, 1, 2)]
    #[case(VkFormat::R32G32B32A32_SFLOAT, 1, 1, 16)]
    #[case(VkFormat::BC1_RGB_UNORM_BLOCK, 4, 4, 8)]
    #[case(VkFormat::BC7_UNORM_BLOCK, 4, 4, 16)]
    #[case(VkFormat::ASTC_12x10_SRGB_BLOCK, 12, 10, 16)]
    #[case(VkFormat::PVRTC1_2BPP_UNORM_BLOCK_IMG, 8, 4, 8)]
    fn texel_block_info_table(
        #[case] format: VkFormat,
        #[case] width: u32,
        #[case] height: u32,
        #[case] bytes: u32,
    ) {
        let info = format.texel_block_info().unwrap();
        assert_eq!(info.block_width, width);
        assert_eq!(info.block_height, height);
        assert_eq!(info.block_byte_size, bytes);
    }

    #[test]
    fn texel_block_info_is_absent_for_unpredictable_layouts() {
        assert!(VkFormat::UNDEFINED.texel_block_info().is_none());
        assert!(VkFormat::G8_B8R8_2PLANE_420_UNORM.texel_block_info().is_none());
        assert!(VkFormat::D32_SFLOAT_S8_UINT.texel_block_info().is_none());
    }
}
