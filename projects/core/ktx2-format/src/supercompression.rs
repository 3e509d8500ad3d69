//! Supercompression scheme values and their predicates.

/// First scheme value of the reserved vendor range.
pub const VENDOR_RANGE_BEGIN: u32 = 0x1_0000;
/// Last scheme value of the reserved vendor range.
pub const VENDOR_RANGE_END: u32 = 0x1_FFFF;

/// A known supercompression scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SupercompressionScheme {
    None = 0,
    BasisLz = 1,
    Zstd = 2,
    Zlib = 3,
}

impl SupercompressionScheme {
    /// Looks up a raw header value.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::BasisLz),
            2 => Some(Self::Zstd),
            3 => Some(Self::Zlib),
            _ => None,
        }
    }

    /// The canonical `KTX_SS_*` spelling.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "KTX_SS_NONE",
            Self::BasisLz => "KTX_SS_BASIS_LZ",
            Self::Zstd => "KTX_SS_ZSTD",
            Self::Zlib => "KTX_SS_ZLIB",
        }
    }

    /// Whether the scheme stores a Supercompression Global Data region.
    pub fn has_global_data(self) -> bool {
        matches!(self, Self::BasisLz)
    }

    /// Whether the scheme implies a block-compressed payload, which couples
    /// into the header's `levelCount`/`typeSize` rules the same way a
    /// block-compressed `VkFormat` does.
    pub fn is_block_compressed(self) -> bool {
        matches!(self, Self::BasisLz)
    }
}

/// Whether a raw scheme value falls into the reserved vendor range.
pub fn is_vendor_scheme(raw: u32) -> bool {
    (VENDOR_RANGE_BEGIN..=VENDOR_RANGE_END).contains(&raw)
}

/// Renders a raw scheme value: known schemes by name, vendor schemes as
/// `Vendor (0xHEX)`, anything else as `(0xHEX)`.
pub fn scheme_name_or_hex(raw: u32) -> String {
    match SupercompressionScheme::from_u32(raw) {
        Some(scheme) => scheme.name().to_string(),
        None if is_vendor_scheme(raw) => format!("Vendor (0x{raw:X})"),
        None => format!("(0x{raw:X})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_schemes_round_trip() {
        for raw in 0..=3 {
            let scheme = SupercompressionScheme::from_u32(raw).unwrap();
            assert_eq!(scheme as u32, raw);
        }
        assert_eq!(SupercompressionScheme::from_u32(4), None);
    }

    #[test]
    fn only_basis_lz_has_global_data() {
        assert!(SupercompressionScheme::BasisLz.has_global_data());
        assert!(!SupercompressionScheme::None.has_global_data());
        assert!(!SupercompressionScheme::Zstd.has_global_data());
        assert!(!SupercompressionScheme::Zlib.has_global_data());
    }

    #[test]
    fn vendor_range_bounds() {
        assert!(!is_vendor_scheme(0xFFFF));
        assert!(is_vendor_scheme(0x1_0000));
        assert!(is_vendor_scheme(0x1_FFFF));
        assert!(!is_vendor_scheme(0x2_0000));
    }

    #[test]
    fn scheme_rendering() {
        assert_eq!(scheme_name_or_hex(1), "KTX_SS_BASIS_LZ");
        assert_eq!(scheme_name_or_hex(0x1_0001), "Vendor (0x10001)");
        assert_eq!(scheme_name_or_hex(0xFF), "(0xFF)");
    }
}
