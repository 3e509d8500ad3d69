//! The diagnostic catalog: every issue the validator can raise, with its
//! stable numeric id, severity, short message and detail template.
//!
//! Ids are grouped by domain: 1xxx I/O, 2xxx file, 3xxx header data, 4xxx
//! level index, 5xxx DFD, 7xxx metadata, 8xxx supercompression global
//! data, 9xxx transcode compatibility, 10xxx system. Detail templates use
//! positional `{}` placeholders; callers pre-format values that need a
//! non-decimal rendering (hex, binary).

use std::fmt::Display;

/// Issue severity. Warnings may be upgraded to errors by policy; fatals
/// end the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Warning,
    Error,
    Fatal,
}

impl IssueSeverity {
    pub fn name(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Issue {
    pub severity: IssueSeverity,
    pub id: u16,
    pub message: &'static str,
    pub details_template: &'static str,
}

impl Issue {
    const fn warning(id: u16, message: &'static str, details_template: &'static str) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            id,
            message,
            details_template,
        }
    }

    const fn error(id: u16, message: &'static str, details_template: &'static str) -> Self {
        Self {
            severity: IssueSeverity::Error,
            id,
            message,
            details_template,
        }
    }

    const fn fatal(id: u16, message: &'static str, details_template: &'static str) -> Self {
        Self {
            severity: IssueSeverity::Fatal,
            id,
            message,
            details_template,
        }
    }

    /// Renders the detail template, substituting `{}` placeholders from
    /// `args` in order. Surplus placeholders stay verbatim; surplus
    /// arguments are ignored.
    pub fn format_details(&self, args: &[&dyn Display]) -> String {
        let mut out = String::with_capacity(self.details_template.len());
        let mut rest = self.details_template;
        let mut next_arg = 0;
        while let Some(position) = rest.find("{}") {
            out.push_str(&rest[..position]);
            match args.get(next_arg) {
                Some(arg) => out.push_str(&arg.to_string()),
                None => out.push_str("{}"),
            }
            next_arg += 1;
            rest = &rest[position + 2..];
        }
        out.push_str(rest);
        out
    }
}

/// 1xxx: I/O failures. All fatal.
pub struct IoError;
impl IoError {
    pub const FILE_OPEN: Issue = Issue::fatal(
        1001,
        "Failed to open file.",
        "Failed to open file {}: {}.",
    );
    pub const FILE_READ: Issue = Issue::fatal(
        1002,
        "Failed to read the file.",
        "File read failed: {}.",
    );
    pub const UNEXPECTED_EOF: Issue = Issue::fatal(
        1003,
        "Unexpected end of file.",
        "Unexpected end of file. Expected {} more byte for {} but only found {} byte.",
    );
    pub const UNEXPECTED_EOF_SEEK: Issue = Issue::fatal(
        1007,
        "Unexpected end of file. Requested seek position is not in the file.",
        "Requested seek position is {} for accessing {}, but the file is only {} byte long.",
    );
}

/// 2xxx: file-level failures.
pub struct FileError;
impl FileError {
    pub const NOT_KTX2: Issue = Issue::fatal(
        2001,
        "Not a KTX2 file.",
        "Not a KTX2 file. The beginning of the file does not matches the expected file identifier \"\u{AB}KTX 20\u{BB}\\r\\n\\x1A\\n\".",
    );
    pub const INCORRECT_DATA_SIZE: Issue = Issue::error(
        2003,
        "Size of image data in file does not match size calculated from levelIndex.",
        "The level index describes {} byte of image data, but the file has {} byte after the last non-payload region.",
    );
}

/// 3xxx: header data, including the region index entries.
pub struct HeaderData;
impl HeaderData {
    pub const PROHIBITED_FORMAT: Issue = Issue::error(
        3001,
        "Prohibited VkFormat.",
        "Prohibited VkFormat {} cannot be used in a KTX2 file.",
    );
    pub const INVALID_FORMAT: Issue =
        Issue::error(3002, "Invalid VkFormat.", "Invalid VkFormat {}.");
    pub const UNKNOWN_FORMAT: Issue = Issue::warning(
        3003,
        "Unknown VkFormat. Possibly an extension format.",
        "Unknown VkFormat {}, possibly an extension format.",
    );
    pub const VK_FORMAT_AND_BASIS: Issue = Issue::error(
        3004,
        "Invalid VkFormat. VkFormat must be VK_FORMAT_UNDEFINED for BASIS_LZ supercompression.",
        "VkFormat is {} but for supercompressionScheme BASIS_LZ it must be VK_FORMAT_UNDEFINED.",
    );
    pub const TYPE_SIZE_NOT_ONE: Issue = Issue::error(
        3005,
        "Invalid typeSize. typeSize must be 1 for block-compressed or supercompressed formats.",
        "typeSize is {} but for block-compressed or supercompressed format {} it must be 1.",
    );
    pub const WIDTH_ZERO: Issue = Issue::error(
        3006,
        "Invalid pixelWidth. pixelWidth cannot be 0.",
        "pixelWidth is 0, but textures must have width.",
    );
    pub const BLOCK_COMPRESSED_NO_HEIGHT: Issue = Issue::error(
        3007,
        "Invalid pixelHeight. pixelHeight cannot be 0 for a block compressed formats.",
        "pixelHeight is 0, but for block-compressed format {} it cannot be 0.",
    );
    pub const CUBE_HEIGHT_WIDTH_MISMATCH: Issue = Issue::error(
        3008,
        "Mismatching pixelWidth and pixelHeight for a cube map.",
        "pixelWidth is {} and pixelHeight is {}, but for a cube map they must be equal.",
    );
    pub const DEPTH_NO_HEIGHT: Issue = Issue::error(
        3009,
        "Invalid pixelHeight. pixelHeight cannot be 0 if pixelDepth is not also 0.",
        "pixelHeight is 0 and pixelDepth is {}, but pixelHeight cannot be 0 if pixelDepth is not 0 as well.",
    );
    pub const DEPTH_BLOCK_COMPRESSED_NO_DEPTH: Issue = Issue::error(
        3010,
        "Invalid pixelDepth. pixelDepth cannot be 0 for block-compressed formats with non-zero block depth.",
        "pixelDepth is 0, but for format {} (which is a block-compressed format with non-zero block depth) it cannot be 0.",
    );
    pub const DEPTH_STENCIL_FORMAT_WITH_DEPTH: Issue = Issue::error(
        3011,
        "Invalid pixelDepth. pixelDepth must be 0 for depth or stencil formats.",
        "pixelDepth is {} but for depth or stencil format {} it must be 0.",
    );
    pub const CUBE_WITH_DEPTH: Issue = Issue::error(
        3013,
        "Invalid pixelDepth. pixelDepth must be 0 for cube maps.",
        "pixelDepth is {} but for cube maps it must be 0 (cube map faces must be 2D).",
    );
    pub const THREE_D_ARRAY: Issue = Issue::warning(
        3014,
        "File contains a 3D array texture.",
        "File contains a 3D array texture. No APIs support these.",
    );
    pub const INVALID_FACE_COUNT: Issue = Issue::error(
        3015,
        "Invalid faceCount. faceCount must be either 6 for Cubemaps and Cubemap Arrays or 1 otherwise.",
        "faceCount is {} but it must be either 6 for Cubemaps and Cubemap Arrays or 1 otherwise.",
    );
    pub const TOO_MANY_MIP_LEVELS: Issue = Issue::error(
        3016,
        "Too many mip levels",
        "levelCount is {} for the largest image dimension {} is too many levels.",
    );
    pub const BLOCK_COMPRESSED_NO_LEVEL: Issue = Issue::error(
        3017,
        "Invalid levelCount. levelCount cannot be 0 for block-compressed formats.",
        "levelCount is 0 but for block-compressed format {} it cannot be 0.",
    );
    pub const VENDOR_SUPERCOMPRESSION: Issue = Issue::warning(
        3018,
        "Using vendor supercompressionScheme. Cannot validate.",
        "supercompressionScheme is {} which falls into the reserved vendor range. Cannot validate.",
    );
    pub const INVALID_SUPERCOMPRESSION: Issue = Issue::error(
        3019,
        "Invalid supercompressionScheme.",
        "Invalid supercompressionScheme: {}.",
    );

    pub const INDEX_DFD_ZERO_OFFSET: Issue = Issue::error(
        3020,
        "Invalid dataFormatDescriptor.byteOffset. byteOffset cannot be 0.",
        "dataFormatDescriptor.byteOffset is 0, but the file must have a dataFormatDescriptor.",
    );
    pub const INDEX_DFD_ALIGNMENT: Issue = Issue::error(
        3021,
        "Invalid dataFormatDescriptor.byteOffset. Defined region must be aligned to 4 byte.",
        "dataFormatDescriptor.byteOffset is {}, but the byteOffset must be aligned to 4 byte.",
    );
    pub const INDEX_DFD_ZERO_LENGTH: Issue = Issue::error(
        3022,
        "Invalid dataFormatDescriptor.byteLength. byteLength cannot be 0.",
        "dataFormatDescriptor.byteLength is 0, but the file must have a dataFormatDescriptor.",
    );
    pub const INDEX_DFD_INVALID: Issue = Issue::error(
        3023,
        "Invalid dataFormatDescriptor index. Defined region cannot exceed the size of the file.",
        "dataFormatDescriptor.byteOffset is {} and dataFormatDescriptor.byteLength is {}, but the file is only {} byte long.",
    );
    pub const INDEX_KVD_OFFSET_WITHOUT_LENGTH: Issue = Issue::error(
        3024,
        "Invalid keyValueData.byteOffset. byteOffset must be 0 if the byteLength is 0.",
        "keyValueData.byteOffset is {}, but if the byteLength is 0 it must also be 0.",
    );
    pub const INDEX_KVD_ALIGNMENT: Issue = Issue::error(
        3025,
        "Invalid keyValueData.byteOffset. Defined region must be aligned to 4 byte.",
        "keyValueData.byteOffset is {}, but the byteOffset must be aligned to 4 byte.",
    );
    pub const INDEX_KVD_INVALID: Issue = Issue::error(
        3026,
        "Invalid keyValueData index. Defined region cannot exceed the size of the file.",
        "keyValueData.byteOffset is {} and keyValueData.byteLength is {}, but the file is only {} byte long.",
    );
    pub const INDEX_SGD_OFFSET_WITHOUT_LENGTH: Issue = Issue::error(
        3027,
        "Invalid supercompressionGlobalData.byteOffset. byteOffset must be 0 if the byteLength is 0.",
        "supercompressionGlobalData.byteOffset is {}, but if the byteLength is 0 it must also be 0.",
    );
    pub const INDEX_SGD_ALIGNMENT: Issue = Issue::error(
        3028,
        "Invalid supercompressionGlobalData.byteOffset. Defined region must be aligned to 8 byte.",
        "supercompressionGlobalData.byteOffset is {}, but the byteOffset must be aligned to 8 byte.",
    );
    pub const INDEX_SGD_MISSING: Issue = Issue::error(
        3029,
        "Invalid supercompressionGlobalData.byteLength. byteLength cannot be 0 for supercompression schemes with global data.",
        "supercompressionGlobalData.byteLength is 0, but for supercompression scheme {} (which has global data) it cannot be 0.",
    );
    pub const INDEX_SGD_EXISTS: Issue = Issue::error(
        3030,
        "Invalid supercompressionGlobalData.byteLength. byteLength must be 0 for supercompression schemes without global data.",
        "supercompressionGlobalData.byteLength is {}, but for supercompression scheme {} (which has no global data) it must be 0.",
    );
    pub const INDEX_SGD_INVALID: Issue = Issue::error(
        3031,
        "Invalid supercompressionGlobalData index. Defined region cannot exceed the size of the file.",
        "supercompressionGlobalData.byteOffset is {} and supercompressionGlobalData.byteLength is {}, but the file is only {} byte long.",
    );
    pub const INDEX_DFD_CONTINUITY: Issue = Issue::error(
        3032,
        "Invalid dataFormatDescriptor.byteOffset. DFD region must immediately follow the level index.",
        "dataFormatDescriptor.byteOffset is {}, but DFD region must immediately follow (with 4 byte alignment) the level index so it must {}.",
    );
    pub const INDEX_KVD_CONTINUITY: Issue = Issue::error(
        3033,
        "Invalid keyValueData.byteOffset. KVD region must immediately follow the DFD region.",
        "keyValueData.byteOffset is {}, but KVD region must immediately follow (with 4 byte alignment) the DFD region so it must {}.",
    );
    pub const INDEX_SGD_CONTINUITY: Issue = Issue::error(
        3034,
        "Invalid supercompressionGlobalData.byteOffset. SGD region must immediately follow the KVD region.",
        "supercompressionGlobalData.byteOffset is {}, but SGD region must immediately follow (with 8 byte alignment) the KVD region so it must {}.",
    );
    pub const TYPE_SIZE_MISMATCH: Issue = Issue::error(
        3035,
        "Invalid typeSize. typeSize must match the texel size described by the DFD.",
        "typeSize is {}, but for format {} it must be {}.",
    );
}

/// 4xxx: level index.
pub struct LevelIndex;
impl LevelIndex {
    pub const INCORRECT_BYTE_OFFSET: Issue = Issue::error(
        4001,
        "Invalid level index. byteOffset does not match the expected value.",
        "Level {} byteOffset is {} but the expected value is {}.",
    );
    pub const BYTE_OFFSET_TOO_SMALL: Issue = Issue::error(
        4002,
        "Invalid level index. byteOffset is smaller than the expected value.",
        "Level {} byteOffset is {} which is smaller than the expected value {}.",
    );
    pub const INCORRECT_BYTE_LENGTH: Issue = Issue::error(
        4003,
        "Invalid level index. byteLength does not match the expected value.",
        "Level {} byteLength is {} but the expected value is {}.",
    );
    pub const INCORRECT_UNCOMPRESSED_BYTE_LENGTH: Issue = Issue::error(
        4004,
        "Invalid level index. uncompressedByteLength does not match the expected value.",
        "Level {} uncompressedByteLength is {} but the expected value is {}.",
    );
    pub const UNEQUAL_BYTE_LENGTHS: Issue = Issue::error(
        4005,
        "Invalid level index. uncompressedByteLength must match byteLength for files without supercompression.",
        "Level {} uncompressedByteLength is {} and byteLength is {}, but without supercompression they must be equal.",
    );
    pub const UNALIGNED_OFFSET: Issue = Issue::error(
        4006,
        "Invalid level index. byteOffset is not aligned to the required level alignment.",
        "Level {} byteOffset is {} which is not aligned to the required {} byte alignment.",
    );
    pub const EXTRA_PADDING: Issue = Issue::error(
        4007,
        "Invalid level index. Level has disallowed extra padding before it.",
        "Level {} byteOffset is {} which leaves disallowed padding after the expected offset {}.",
    );
    pub const ZERO_OFFSET_OR_LENGTH: Issue = Issue::error(
        4008,
        "Invalid level index. byteOffset and byteLength cannot be 0.",
        "Level {} byteOffset or byteLength is 0.",
    );
    pub const ZERO_UNCOMPRESSED_LENGTH: Issue = Issue::error(
        4009,
        "Invalid level index. uncompressedByteLength cannot be 0.",
        "Level {} uncompressedByteLength is 0.",
    );
    pub const INCORRECT_LEVEL_ORDER: Issue = Issue::error(
        4010,
        "Invalid level index. Larger mip levels are stored before smaller ones.",
        "Level {} byteLength is {} which is smaller than byteLength {} of a smaller mip level, but levels must be stored smallest mip first.",
    );
}

/// 5xxx: data format descriptor semantics.
pub struct Dfd;
impl Dfd {
    pub const SIZE_MISMATCH: Issue = Issue::error(
        5001,
        "Invalid DFD. DFD totalSize differs from the header's dataFormatDescriptor.byteLength.",
        "DFD totalSize is {} but dataFormatDescriptor.byteLength is {}, and they must match.",
    );
    pub const INVALID_TRANSFER_FUNCTION: Issue = Issue::error(
        5002,
        "Invalid DFD transfer function. Transfer function must be KHR_DF_TRANSFER_LINEAR or KHR_DF_TRANSFER_SRGB.",
        "DFD transfer function is {}, but KTX2 files must use KHR_DF_TRANSFER_LINEAR or KHR_DF_TRANSFER_SRGB.",
    );
    pub const INCORRECT_BASICS: Issue = Issue::error(
        5003,
        "Invalid DFD. DFD format is not the correct type or version.",
        "DFD vendor id is {}, descriptor type is {} and version is {}, but the basic descriptor block requires KHR_DF_VENDORID_KHRONOS, KHR_DF_KHR_DESCRIPTORTYPE_BASICFORMAT and at least version 1.3.",
    );
    pub const ZERO_SAMPLES: Issue = Issue::error(
        5004,
        "Invalid DFD. The DFD must have sample information.",
        "DFD for a {} texture must have sample information.",
    );
    pub const INVALID_SAMPLE_COUNT: Issue = Issue::error(
        5005,
        "Invalid DFD sample count.",
        "DFD for a {} texture must have {} sample(s).",
    );
    pub const INVALID_TEXEL_BLOCK_DIMENSION: Issue = Issue::error(
        5006,
        "Invalid DFD texel block dimension.",
        "DFD texel block dimension must be {}x{} for {} textures.",
    );
    pub const NOT_UNSIZED: Issue = Issue::error(
        5007,
        "Invalid DFD bytesPlane. bytesPlane must be 0 for supercompressed textures.",
        "DFD bytes/plane must be 0 for a supercompressed texture.",
    );
    pub const BYTES_PLANE0_ZERO: Issue = Issue::error(
        5008,
        "Invalid DFD bytesPlane0. bytesPlane0 must be non-zero for non-supercompressed textures.",
        "DFD bytesPlane0 must be non-zero for non-supercompressed {} texture.",
    );
    pub const BYTES_PLANE0_MISMATCH: Issue = Issue::error(
        5009,
        "Invalid DFD bytesPlane0. bytesPlane0 differs from the expected value.",
        "DFD bytesPlane0 value {} differs from expected {}.",
    );
    pub const MULTIPLANE_FORMATS_NOT_SUPPORTED: Issue = Issue::error(
        5010,
        "Invalid DFD bytesPlane. Multiplane formats are not supported.",
        "DFD has non-zero value in bytesPlane[1-7] indicating unsupported multiplane format.",
    );
    pub const TEXEL_BLOCK_DIMENSION_ZERO_FOR_UNDEFINED: Issue = Issue::error(
        5011,
        "Invalid DFD texel block dimension for VK_FORMAT_UNDEFINED.",
        "DFD texel block dimensions must be non-zero for non-supercompressed texture with VK_FORMAT_UNDEFINED.",
    );
    pub const FOUR_DIMENSIONAL_TEXTURES_NOT_SUPPORTED: Issue = Issue::error(
        5012,
        "Invalid DFD texel block dimension. Four-dimensional textures are not supported.",
        "DFD texelBlockDimension3 is non-zero indicating an unsupported four-dimensional texture.",
    );
    pub const INCORRECT_MODEL_FOR_BLZE: Issue = Issue::error(
        5013,
        "Invalid DFD color model for BasisLZ/ETC1S.",
        "DFD colorModel for BasisLZ/ETC1S must be KHR_DF_MODEL_ETC1S.",
    );
    pub const INVALID_CHANNEL_FOR_BLZE: Issue = Issue::error(
        5014,
        "Invalid DFD channel for BasisLZ/ETC1S.",
        "Only ETC1S_RGB (0), ETC1S_RRR (3), ETC1S_GGG (4) or ETC1S_AAA (15) channels allowed for BasisLZ/ETC1S textures.",
    );
    pub const INVALID_BIT_OFFSET_FOR_BLZE: Issue = Issue::error(
        5015,
        "Invalid DFD sample bitOffset for BasisLZ/ETC1S.",
        "DFD sample bitOffsets for BasisLZ/ETC1S textures must be 0 and 64.",
    );
    pub const INVALID_BIT_LENGTH: Issue = Issue::error(
        5016,
        "Invalid DFD sample bitLength.",
        "DFD sample bitLength for {} textures must be {}.",
    );
    pub const INVALID_LOWER_OR_UPPER: Issue = Issue::error(
        5017,
        "Invalid DFD sampleLower or sampleUpper.",
        "All DFD samples' sampleLower must be 0 and sampleUpper must be 0xFFFFFFFF for {} textures.",
    );
    pub const INVALID_CHANNEL_FOR_UASTC: Issue = Issue::error(
        5018,
        "Invalid DFD channel for UASTC.",
        "Only UASTC_RGB (0), UASTC_RGBA (3), UASTC_RRR (4) or UASTC_RRRG (5) channels allowed for UASTC textures.",
    );
    pub const INVALID_BIT_OFFSET_FOR_UASTC: Issue = Issue::error(
        5019,
        "Invalid DFD sample bitOffset for UASTC.",
        "DFD sample bitOffset for UASTC textures must be 0.",
    );
    pub const INCORRECT_MODEL_FOR_BLOCK: Issue = Issue::error(
        5020,
        "Invalid DFD color model for a block-compressed format.",
        "DFD color model is not that of a block-compressed texture.",
    );
    pub const INVALID_COLOR_MODEL: Issue = Issue::error(
        5021,
        "Invalid DFD color model.",
        "DFD colorModel for non block-compressed textures must be RGBSDA.",
    );
    pub const MULTIPLE_PLANES: Issue = Issue::error(
        5022,
        "Invalid DFD. Multiplane formats are not supported.",
        "DFD is for a multiplane format. These are not supported.",
    );
    pub const MIXED_CHANNELS: Issue = Issue::error(
        5023,
        "Invalid DFD. Channels have differing flags.",
        "DFD has channels with differing flags, e.g. some float, some integer.",
    );
    pub const MULTISAMPLE: Issue = Issue::error(
        5024,
        "Invalid DFD. Multiple sample locations are not supported.",
        "DFD indicates multiple sample locations.",
    );
    pub const NON_TRIVIAL_ENDIANNESS: Issue = Issue::error(
        5025,
        "Invalid DFD. Non little-endian data is not supported.",
        "DFD describes non little-endian data.",
    );
    pub const SRGB_MISMATCH: Issue = Issue::error(
        5026,
        "Mismatching DFD transfer function and VkFormat.",
        "DFD says sRGB but vkFormat {} is not an sRGB format.",
    );
    pub const FORMAT_MISMATCH: Issue = Issue::error(
        5027,
        "Mismatching DFD and VkFormat.",
        "DFD does not match vkFormat {} w.r.t. sign, float or normalization.",
    );
    pub const UNSIGNED_FLOAT: Issue = Issue::warning(
        5028,
        "DFD describes an unsigned float format.",
        "DFD says data is unsigned float but there are no such texture formats.",
    );
    pub const INVALID_PRIMARIES: Issue = Issue::error(
        5029,
        "Invalid DFD primaries value.",
        "DFD primaries value, {}, is invalid.",
    );
    pub const SAMPLE_COUNT_MISMATCH: Issue = Issue::error(
        5030,
        "Mismatching DFD sample count.",
        "DFD sample count {} differs from expected {}.",
    );
}

/// 7xxx: key-value data.
pub struct Metadata;
impl Metadata {
    /// Hard cap on processed key-value entries.
    pub const MAX_ENTRY_COUNT: usize = 100;

    pub const TOO_MANY_ENTRY: Issue = Issue::error(
        7001,
        "Invalid keyValueData. The number of key-value entries exceeds the maximum allowed.",
        "The number of key-value entries exceeds the maximum allowed {}.",
    );
    pub const NOT_ENOUGH_DATA_FOR_AN_ENTRY: Issue = Issue::error(
        7002,
        "Invalid keyValueData. Not enough data left in keyValueData to process another key-value entry",
        "KeyValueData has {} byte unprocessed, but for a key value entry at least 6 byte is required (4 byte size + 1 byte key + 1 byte \\0).",
    );
    pub const KEY_VALUE_PAIR_SIZE_TOO_BIG: Issue = Issue::error(
        7003,
        "Invalid keyAndValueByteLength. The value is bigger than the amount of bytes left in the keyValueData.",
        "keyAndValueByteLength is {}, but the keyValueData only has {} byte left for the key-value pair.",
    );
    pub const KEY_VALUE_PAIR_SIZE_TOO_SMALL: Issue = Issue::error(
        7004,
        "Invalid keyAndValueByteLength. keyAndValueByteLength must be at least 2.",
        "keyAndValueByteLength is {}, but it must be at least 2 (1 byte key + 1 byte \\0).",
    );
    pub const KEY_MISSING_NULL_TERMINATOR: Issue = Issue::error(
        7005,
        "Invalid keyValueData entry is missing the NULL terminator. Every key-value entry must have a NULL terminator separating the key from the value.",
        "The key-value entry \"{}\" is missing the NULL terminator, but every key-value entry must have a NULL terminator separating the key from the value.",
    );
    pub const KEY_FORBIDDEN_BOM: Issue = Issue::error(
        7006,
        "Invalid key in keyValueData. Key cannot contain BOM.",
        "The beginning of the key \"{}\" has forbidden BOM.",
    );
    pub const KEY_INVALID_UTF8: Issue = Issue::error(
        7007,
        "Invalid key in keyValueData. Key must be a valid UTF8 string.",
        "Key is \"{}\", which contains an invalid UTF8 character at position: {}.",
    );
    pub const SIZES_DONT_ADD_UP: Issue = Issue::error(
        7008,
        "Invalid keyValueData. keyValueData.byteLength must add up to sum of the key-value entries with paddings.",
        "The processed keyValueData length is {}, but keyValueData.byteLength is {}, but they must match.",
    );
    pub const UNKNOWN_RESERVED_KEY: Issue = Issue::error(
        7009,
        "Invalid key in keyValueData. Keys with \"KTX\" or \"ktx\" prefix are reserved.",
        "The key is \"{}\", but its not recognized and every key with \"KTX\" or \"ktx\" prefix are reserved.",
    );
    pub const CUSTOM_METADATA: Issue = Issue::warning(
        7010,
        "Custom key in keyValueData.",
        "Custom key \"{}\" found in keyValueData.",
    );
    pub const PADDING_NOT_ZERO: Issue = Issue::error(
        7011,
        "Invalid padding byte value. Every padding byte's value must be 0.",
        "A padding byte value is {} {}, but it must be 0.",
    );
    pub const OUT_OF_ORDER: Issue = Issue::error(
        7012,
        "Invalid keyValueData. Key-value entries must be sorted by their key.",
        "Key-value entries are not sorted, but they must be sorted by their key.",
    );
    pub const DUPLICATE_KEY: Issue = Issue::error(
        7013,
        "Invalid keyValueData. Keys must be unique.",
        "There is a duplicate key, but the keys must be unique.",
    );
    pub const EMPTY_KEY: Issue = Issue::error(
        7014,
        "Invalid key in keyValueData. Key cannot be empty.",
        "The key is empty, but keys must have at least 1 character.",
    );

    pub const KTX_CUBEMAP_INCOMPLETE_INVALID_SIZE: Issue = Issue::error(
        7100,
        "Invalid KTXcubemapIncomplete metadata. The size of the value must be 1 byte.",
        "The size of the KTXcubemapIncomplete value is {}, but it must be 1 byte.",
    );
    pub const KTX_CUBEMAP_INCOMPLETE_INVALID_VALUE: Issue = Issue::error(
        7101,
        "Invalid KTXcubemapIncomplete value. The two MSB must be 0.",
        "The value is {} but the two MSB must be 0 (00XXXXXX).",
    );
    pub const KTX_CUBEMAP_INCOMPLETE_ALL_BIT_SET: Issue = Issue::warning(
        7102,
        "KTXcubemapIncomplete is not incomplete. All face is marked present.",
        "All face bit is set as present. Prefer using normal Cube maps instead.",
    );
    pub const KTX_CUBEMAP_INCOMPLETE_NO_BIT_SET: Issue = Issue::error(
        7103,
        "Invalid KTXcubemapIncomplete value. No face is marked present.",
        "No face bit is set as present, but at least 1 face must be present.",
    );
    pub const KTX_CUBEMAP_INCOMPLETE_INCOMPATIBLE_LAYER_COUNT: Issue = Issue::error(
        7104,
        "Incompatible KTXcubemapIncomplete and layerCount. layerCount must be the multiple of the number of faces present.",
        "layerCount is {} and KTXcubemapIncomplete indicates {} faces present, but layerCount must the multiple of the number of faces present.",
    );
    pub const KTX_CUBEMAP_INCOMPLETE_WITH_FACE_COUNT_NOT_1: Issue = Issue::error(
        7105,
        "Invalid faceCount. faceCount must be 1 if KTXcubemapIncomplete is present.",
        "faceCount is {}, but if KTXcubemapIncomplete is present it must be 1.",
    );
    pub const KTX_CUBEMAP_INCOMPLETE_DIMENSIONS: Issue = Issue::error(
        7132,
        "Invalid dimensions for KTXcubemapIncomplete. pixelWidth must equal pixelHeight and pixelDepth must be 0.",
        "pixelWidth is {}, pixelHeight is {} and pixelDepth is {}, but incomplete cube map faces must be square and 2D.",
    );

    pub const KTX_ORIENTATION_INVALID_SIZE: Issue = Issue::error(
        7106,
        "Invalid KTXorientation metadata. The size of the value must be 2 to 4 byte (including the NULL terminator).",
        "The size of the KTXorientation value is {}, but it must be 2 to 4 byte (including the NULL terminator).",
    );
    pub const KTX_ORIENTATION_MISSING_NULL: Issue = Issue::error(
        7107,
        "Invalid KTXorientation metadata. The value is missing the NULL terminator.",
        "The last byte of the value must be a NULL terminator.",
    );
    pub const KTX_ORIENTATION_INCORRECT_DIMENSION: Issue = Issue::error(
        7108,
        "Invalid KTXorientation value. The number of dimensions specified must match the number of dimension in the texture type.",
        "The value has {} dimension, but the dimension of the texture type has {} and they must match.",
    );
    pub const KTX_ORIENTATION_INVALID_VALUE: Issue = Issue::error(
        7109,
        "Invalid KTXorientation value. The value must match /^[rl]$/ for 1D, /^[rl][du]$/ for 2D and /^[rl][du][oi]$/ for 3D texture types.",
        "Dimension {} is \"{}\", but for it must be either \"{}\" or \"{}\".",
    );

    pub const KTX_GL_FORMAT_INVALID_SIZE: Issue = Issue::error(
        7110,
        "Invalid KTXglFormat metadata. The size of the value must be 12 byte.",
        "The size of KTXglFormat value is {}, but it must be 12 byte.",
    );
    pub const KTX_GL_FORMAT_WITH_VK_FORMAT: Issue = Issue::error(
        7111,
        "Incompatible KTXglFormat with vkFormat. vkFormat must be VK_FORMAT_UNDEFINED if KTXglFormat is present.",
        "vkFormat is {}, but if KTXglFormat is present it must VK_FORMAT_UNDEFINED.",
    );
    pub const KTX_GL_FORMAT_INVALID_VALUE_FOR_COMPRESSED: Issue = Issue::error(
        7112,
        "Invalid KTXglFormat value. glFormat and glType must be zero for compressed formats.",
        "glFormat is {} and glType is {}, but for compressed formats both must be zero.",
    );

    pub const KTX_DXGI_FORMAT_INVALID_SIZE: Issue = Issue::error(
        7113,
        "Invalid KTXdxgiFormat__ metadata. The size of the value must be 4 byte.",
        "The size of KTXdxgiFormat__ value is {}, but it must be 4 byte.",
    );
    pub const KTX_DXGI_FORMAT_WITH_VK_FORMAT: Issue = Issue::error(
        7114,
        "Incompatible KTXdxgiFormat__ with vkFormat. vkFormat must be VK_FORMAT_UNDEFINED if KTXdxgiFormat__ is present.",
        "vkFormat is {}, but if KTXdxgiFormat__ is present it must VK_FORMAT_UNDEFINED.",
    );

    pub const KTX_METAL_PIXEL_FORMAT_INVALID_SIZE: Issue = Issue::error(
        7115,
        "Invalid KTXmetalPixelFormat metadata. The size of the value must be 4 byte.",
        "The size of KTXmetalPixelFormat value is {}, but it must be 4 byte.",
    );
    pub const KTX_METAL_PIXEL_FORMAT_WITH_VK_FORMAT: Issue = Issue::error(
        7116,
        "Incompatible KTXmetalPixelFormat with vkFormat. vkFormat must be VK_FORMAT_UNDEFINED if KTXmetalPixelFormat is present.",
        "vkFormat is {}, but if KTXmetalPixelFormat is present it must VK_FORMAT_UNDEFINED.",
    );

    pub const KTX_SWIZZLE_INVALID_SIZE: Issue = Issue::error(
        7117,
        "Invalid KTXswizzle metadata. The size of the value must be 5 byte (including the NULL terminator).",
        "The size of KTXswizzle value is {}, but it must be 5 byte (including the NULL terminator).",
    );
    pub const KTX_SWIZZLE_MISSING_NULL: Issue = Issue::error(
        7118,
        "Invalid KTXswizzle metadata. The value is missing the NULL terminator.",
        "The last byte of the value must be a NULL terminator.",
    );
    pub const KTX_SWIZZLE_INVALID_VALUE: Issue = Issue::error(
        7119,
        "Invalid KTXswizzle value. The value must match /^[rgba01]{4}$/.",
        "The character at position {} is \"{}\", but it must be one of \"rgba01\".",
    );
    pub const KTX_SWIZZLE_INVALID_VALUE_MISSING_CHANNEL: Issue = Issue::error(
        7120,
        "Invalid KTXswizzle value. The value must be \"0\" for color or \"1\" for alpha if the channels is not present.",
        "The character at position {} is \"{}\", but that {} channel is not present so the value must be \"{}\".",
    );
    pub const KTX_SWIZZLE_WITH_DEPTH_OR_STENCIL: Issue = Issue::warning(
        7121,
        "KTXswizzle has no effect on depth or stencil texture formats.",
        "KTXswizzle is present but for vkFormat {} it has no effect.",
    );

    pub const KTX_WRITER_MISSING_NULL: Issue = Issue::error(
        7122,
        "Invalid KTXwriter metadata. The value is missing the NULL terminator.",
        "The last byte of the value must be a NULL terminator.",
    );
    pub const KTX_WRITER_INVALID_UTF8: Issue = Issue::warning(
        7123,
        "Invalid KTXwriter value. The value must be a valid UTF8 string.",
        "The value contains an invalid UTF8 character at position: {}.",
    );
    pub const KTX_WRITER_REQUIRED_BUT_MISSING: Issue = Issue::error(
        7124,
        "Missing KTXwriter metadata. When KTXwriterScParams is present KTXwriter must also be present",
        "KTXwriter metadata is missing. When KTXwriterScParams is present KTXwriter must also be present",
    );
    pub const KTX_WRITER_MISSING: Issue = Issue::warning(
        7125,
        "Missing KTXwriter metadata. Writers are strongly urged to identify themselves via this.",
        "KTXwriter metadata is missing. Writers are strongly urged to identify themselves via this.",
    );

    pub const KTX_WRITER_SC_PARAMS_MISSING_NULL: Issue = Issue::error(
        7126,
        "Invalid KTXwriterScParams metadata. The value is missing the NULL terminator.",
        "The last byte of the value must be a NULL terminator.",
    );
    pub const KTX_WRITER_SC_PARAMS_INVALID_UTF8: Issue = Issue::warning(
        7127,
        "Invalid KTXwriterScParams value. The value must be a valid UTF8 string.",
        "The value contains an invalid UTF8 character at position: {}.",
    );

    pub const KTX_ASTC_DECODE_MODE_INVALID_VALUE: Issue = Issue::error(
        7128,
        "Invalid KTXastcDecodeMode value. The value must be \"rgb9e5\" or \"unorm8\".",
        "The value is \"{}\", but it must be \"rgb9e5\" or \"unorm8\".",
    );
    pub const KTX_ASTC_DECODE_MODE_NOT_ALLOWED: Issue = Issue::error(
        7129,
        "KTXastcDecodeMode is not allowed for this texture.",
        "KTXastcDecodeMode is present but it is not allowed {}.",
    );
    pub const KTX_ANIM_DATA_INVALID_SIZE: Issue = Issue::error(
        7130,
        "Invalid KTXanimData metadata. The size of the value must be 12 byte.",
        "The size of KTXanimData value is {}, but it must be 12 byte.",
    );
    pub const KTX_ANIM_DATA_NOT_ALLOWED: Issue = Issue::error(
        7131,
        "KTXanimData is not allowed for this texture.",
        "KTXanimData is present but it is not allowed {}.",
    );
}

/// 8xxx: supercompression global data.
pub struct Sgd;
impl Sgd {
    pub const MISSING_GLOBAL_DATA: Issue = Issue::error(
        8001,
        "Basis supercompression global data missing.",
        "supercompressionGlobalData.byteLength is 0, but BasisLZ files must store global data.",
    );
    pub const UNEXPECTED_GLOBAL_DATA: Issue = Issue::error(
        8002,
        "Supercompression global data found for scheme that is not BasisLZ.",
        "supercompressionGlobalData.byteLength is {}, but scheme {} stores no global data.",
    );
    pub const INVALID_IMAGE_FLAG_BIT: Issue = Issue::error(
        8003,
        "Basis supercompression global data imageDesc.imageFlags has an invalid bit set.",
        "imageDesc {} imageFlags is {} which has bits outside the valid ETC1S flag mask set.",
    );
    pub const INCORRECT_GLOBAL_DATA_SIZE: Issue = Issue::error(
        8004,
        "Basis supercompression global data has incorrect size.",
        "supercompressionGlobalData.byteLength is {} but the global header describes {} byte.",
    );
    pub const EXTENDED_BYTE_LENGTH_NOT_ZERO: Issue = Issue::error(
        8005,
        "extendedByteLength != 0 in Basis supercompression global data.",
        "extendedByteLength is {}, but it must be 0.",
    );
    pub const DFD_MISMATCH_ALPHA: Issue = Issue::error(
        8006,
        "supercompressionGlobalData indicates no alpha but DFD indicates alpha channel.",
        "imageDesc {} alphaSliceByteOffset is 0 but the DFD has 2 samples.",
    );
    pub const DFD_MISMATCH_NO_ALPHA: Issue = Issue::error(
        8007,
        "supercompressionGlobalData indicates an alpha channel but DFD indicates no alpha channel.",
        "imageDesc {} alphaSliceByteOffset is {} but the DFD has 1 sample.",
    );
}

/// 9xxx: KHR_texture_basisu (glTF) compatibility, checked on request.
pub struct Transcode;
impl Transcode {
    pub const NOT_BASIS_COMPATIBLE_MODEL: Issue = Issue::error(
        9001,
        "Texture is not compatible with KHR_texture_basisu. The payload must be ETC1S or UASTC.",
        "DFD color model is {}, but KHR_texture_basisu requires ETC1S or UASTC.",
    );
    pub const DIMENSIONS_NOT_MULTIPLE_OF_FOUR: Issue = Issue::error(
        9002,
        "Texture is not compatible with KHR_texture_basisu. Dimensions must be multiples of 4.",
        "pixelWidth is {} and pixelHeight is {}, but KHR_texture_basisu requires multiples of 4.",
    );
    pub const NOT_TWO_DIMENSIONAL: Issue = Issue::error(
        9003,
        "Texture is not compatible with KHR_texture_basisu. The texture must be 2D.",
        "pixelHeight is {} and pixelDepth is {}, but KHR_texture_basisu requires a 2D texture.",
    );
    pub const CUBEMAP_NOT_ALLOWED: Issue = Issue::error(
        9004,
        "Texture is not compatible with KHR_texture_basisu. Cube maps are not allowed.",
        "faceCount is {}, but KHR_texture_basisu requires 1.",
    );
    pub const LAYERED_NOT_ALLOWED: Issue = Issue::error(
        9005,
        "Texture is not compatible with KHR_texture_basisu. Array textures are not allowed.",
        "layerCount is {}, but KHR_texture_basisu requires 0.",
    );
    pub const INCOMPLETE_MIP_PYRAMID: Issue = Issue::error(
        9006,
        "Texture is not compatible with KHR_texture_basisu. The mip pyramid must be full or absent.",
        "levelCount is {}, but KHR_texture_basisu requires either 1 or the full pyramid of {} levels.",
    );
}

/// 10xxx: system failures.
pub struct System;
impl System {
    pub const OUT_OF_MEMORY: Issue =
        Issue::error(10001, "System out of memory.", "System out of memory.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_details_substitutes_in_order() {
        let details = HeaderData::CUBE_HEIGHT_WIDTH_MISMATCH.format_details(&[&64, &32]);
        assert_eq!(
            details,
            "pixelWidth is 64 and pixelHeight is 32, but for a cube map they must be equal."
        );
    }

    #[test]
    fn format_details_handles_surplus_placeholders_and_args() {
        let issue = Issue::error(1, "m", "a {} b {} c");
        assert_eq!(issue.format_details(&[&"x"]), "a x b {} c");
        assert_eq!(issue.format_details(&[&"x", &"y", &"z"]), "a x b y c");
    }

    #[test]
    fn severities_match_the_catalog_groups() {
        assert_eq!(IoError::UNEXPECTED_EOF.severity, IssueSeverity::Fatal);
        assert_eq!(FileError::NOT_KTX2.severity, IssueSeverity::Fatal);
        assert_eq!(HeaderData::UNKNOWN_FORMAT.severity, IssueSeverity::Warning);
        assert_eq!(HeaderData::THREE_D_ARRAY.severity, IssueSeverity::Warning);
        assert_eq!(Metadata::CUSTOM_METADATA.severity, IssueSeverity::Warning);
        assert_eq!(Metadata::KTX_WRITER_MISSING.severity, IssueSeverity::Warning);
        assert_eq!(Dfd::UNSIGNED_FLOAT.severity, IssueSeverity::Warning);
        assert_eq!(Sgd::MISSING_GLOBAL_DATA.severity, IssueSeverity::Error);
    }

    #[test]
    fn ids_live_in_their_domain_ranges() {
        assert_eq!(FileError::NOT_KTX2.id, 2001);
        assert_eq!(HeaderData::CUBE_HEIGHT_WIDTH_MISMATCH.id, 3008);
        assert_eq!(HeaderData::INDEX_SGD_CONTINUITY.id, 3034);
        assert_eq!(LevelIndex::INCORRECT_LEVEL_ORDER.id, 4010);
        assert_eq!(Dfd::SAMPLE_COUNT_MISMATCH.id, 5030);
        assert_eq!(Metadata::TOO_MANY_ENTRY.id, 7001);
        assert_eq!(Metadata::KTX_WRITER_REQUIRED_BUT_MISSING.id, 7124);
        assert_eq!(Sgd::DFD_MISMATCH_NO_ALPHA.id, 8007);
        assert_eq!(Transcode::INCOMPLETE_MIP_PYRAMID.id, 9006);
    }
}
