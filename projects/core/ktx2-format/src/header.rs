//! Fixed-layout structures of a KTX2 file: identifier, 80-byte header,
//! region index entries and the level index.
//!
//! All multi-byte fields are little-endian. Parsing here is purely
//! structural; nothing is judged beyond "enough bytes to read".

/// The 12-byte KTX2 file identifier: `«KTX 20»\r\n\x1A\n`.
pub const KTX2_IDENTIFIER: [u8; 12] = [
    0xAB, 0x4B, 0x54, 0x58, 0x20, 0x32, 0x30, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
];

/// Size of the fixed KTX2 header including the three region index entries.
pub const KTX2_HEADER_SIZE: usize = 80;

/// Size of one level index entry (3 x u64).
pub const LEVEL_INDEX_ENTRY_SIZE: usize = 24;

/// A `{byteOffset, byteLength}` region index entry with 32-bit fields.
/// Used for the DFD and KVD regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexEntry32 {
    pub byte_offset: u32,
    pub byte_length: u32,
}

impl IndexEntry32 {
    /// End of the region described by this entry.
    pub fn end(&self) -> u64 {
        self.byte_offset as u64 + self.byte_length as u64
    }
}

/// A `{byteOffset, byteLength}` region index entry with 64-bit fields.
/// Used for the SGD region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexEntry64 {
    pub byte_offset: u64,
    pub byte_length: u64,
}

impl IndexEntry64 {
    /// End of the region described by this entry.
    pub fn end(&self) -> u64 {
        self.byte_offset + self.byte_length
    }
}

/// One mip level's entry in the level index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelIndexEntry {
    pub byte_offset: u64,
    pub byte_length: u64,
    pub uncompressed_byte_length: u64,
}

/// The fixed 80-byte KTX2 header.
///
/// `vk_format` and `supercompression_scheme` are kept as raw `u32` values;
/// classifying them is the job of [`crate::vk_format`] and
/// [`crate::supercompression`] so that out-of-range values survive parsing
/// and can be diagnosed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    pub identifier: [u8; 12],
    pub vk_format: u32,
    pub type_size: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_depth: u32,
    pub layer_count: u32,
    pub face_count: u32,
    pub level_count: u32,
    pub supercompression_scheme: u32,
    pub data_format_descriptor: IndexEntry32,
    pub key_value_data: IndexEntry32,
    pub supercompression_global_data: IndexEntry64,
}

impl Header {
    /// Parses the fixed header from the first [`KTX2_HEADER_SIZE`] bytes.
    ///
    /// # Return
    ///
    /// `None` if `data` is shorter than the fixed header. The identifier is
    /// *not* checked here.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < KTX2_HEADER_SIZE {
            return None;
        }

        let mut identifier = [0u8; 12];
        identifier.copy_from_slice(&data[0..12]);

        Some(Self {
            identifier,
            vk_format: read_u32(data, 12),
            type_size: read_u32(data, 16),
            pixel_width: read_u32(data, 20),
            pixel_height: read_u32(data, 24),
            pixel_depth: read_u32(data, 28),
            layer_count: read_u32(data, 32),
            face_count: read_u32(data, 36),
            level_count: read_u32(data, 40),
            supercompression_scheme: read_u32(data, 44),
            data_format_descriptor: IndexEntry32 {
                byte_offset: read_u32(data, 48),
                byte_length: read_u32(data, 52),
            },
            key_value_data: IndexEntry32 {
                byte_offset: read_u32(data, 56),
                byte_length: read_u32(data, 60),
            },
            supercompression_global_data: IndexEntry64 {
                byte_offset: read_u64(data, 64),
                byte_length: read_u64(data, 72),
            },
        })
    }

    /// Whether the identifier bytes match [`KTX2_IDENTIFIER`] exactly.
    pub fn has_valid_identifier(&self) -> bool {
        self.identifier == KTX2_IDENTIFIER
    }

    /// Number of levels actually stored; a `levelCount` of 0 means one
    /// unmipped level.
    pub fn effective_level_count(&self) -> u32 {
        self.level_count.max(1)
    }

    /// Number of layers actually stored; `layerCount` 0 and 1 are
    /// equivalent downstream.
    pub fn effective_layer_count(&self) -> u32 {
        self.layer_count.max(1)
    }

    /// Byte size of the level index that follows the header.
    pub fn level_index_byte_length(&self) -> u64 {
        self.effective_level_count() as u64 * LEVEL_INDEX_ENTRY_SIZE as u64
    }
}

impl LevelIndexEntry {
    /// Parses one 24-byte level index entry.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < LEVEL_INDEX_ENTRY_SIZE {
            return None;
        }
        Some(Self {
            byte_offset: read_u64(data, 0),
            byte_length: read_u64(data, 8),
            uncompressed_byte_length: read_u64(data, 16),
        })
    }
}

/// Rounds `value` up to the next multiple of `alignment`.
///
/// `alignment` must be non-zero; it is not required to be a power of two
/// because level alignment can be e.g. 12 or 24.
pub fn align_up(value: u64, alignment: u64) -> u64 {
    value.div_ceil(alignment) * alignment
}

#[inline]
fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
}

#[inline]
fn read_u64(data: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn header_bytes() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&KTX2_IDENTIFIER);
        for value in [37u32, 4, 4, 4, 0, 0, 1, 1, 0] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        // DFD and KVD index entries
        for value in [104u32, 92, 196, 60] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        // SGD index entry
        for value in [0u64, 0] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        data
    }

    #[test]
    fn parse_reads_all_fields() {
        let data = header_bytes();
        assert_eq!(data.len(), KTX2_HEADER_SIZE);
        let header = Header::parse(&data).unwrap();
        assert!(header.has_valid_identifier());
        assert_eq!(header.vk_format, 37);
        assert_eq!(header.type_size, 4);
        assert_eq!(header.pixel_width, 4);
        assert_eq!(header.pixel_height, 4);
        assert_eq!(header.pixel_depth, 0);
        assert_eq!(header.layer_count, 0);
        assert_eq!(header.face_count, 1);
        assert_eq!(header.level_count, 1);
        assert_eq!(header.supercompression_scheme, 0);
        assert_eq!(header.data_format_descriptor.byte_offset, 104);
        assert_eq!(header.data_format_descriptor.byte_length, 92);
        assert_eq!(header.key_value_data.byte_offset, 196);
        assert_eq!(header.key_value_data.byte_length, 60);
        assert_eq!(header.supercompression_global_data, IndexEntry64::default());
    }

    #[test]
    fn parse_rejects_truncated_header() {
        let data = header_bytes();
        assert!(Header::parse(&data[..KTX2_HEADER_SIZE - 1]).is_none());
    }

    #[test]
    fn effective_counts_treat_zero_as_one() {
        let mut header = Header::parse(&header_bytes()).unwrap();
        header.level_count = 0;
        header.layer_count = 0;
        assert_eq!(header.effective_level_count(), 1);
        assert_eq!(header.effective_layer_count(), 1);
        header.layer_count = 6;
        assert_eq!(header.effective_layer_count(), 6);
    }

    #[test]
    fn level_index_entry_parses() {
        let mut data = Vec::new();
        for value in [104u64, 64, 64] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        let entry = LevelIndexEntry::parse(&data).unwrap();
        assert_eq!(entry.byte_offset, 104);
        assert_eq!(entry.byte_length, 64);
        assert_eq!(entry.uncompressed_byte_length, 64);
        assert!(LevelIndexEntry::parse(&data[..23]).is_none());
    }

    #[rstest]
    #[case(0, 4, 0)]
    #[case(1, 4, 4)]
    #[case(4, 4, 4)]
    #[case(5, 4, 8)]
    #[case(92, 8, 96)]
    #[case(13, 12, 24)]
    fn align_up_rounds_to_next_multiple(
        #[case] value: u64,
        #[case] alignment: u64,
        #[case] expected: u64,
    ) {
        assert_eq!(align_up(value, alignment), expected);
    }
}
