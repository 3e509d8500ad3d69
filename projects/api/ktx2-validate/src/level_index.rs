//! Level index validation.
//!
//! Two regimes exist. With a concrete `vkFormat` and no supercompression,
//! every offset and length is predictable and compared exactly. With
//! `VK_FORMAT_UNDEFINED` or any supercompression, only the structural
//! rules hold: non-zero entries, the expected packing (no gaps, no extra
//! padding), alignment, and mip sizes non-increasing in stored order
//! (the smallest mip is stored last in the index but first on disk).

use ktx2_format::header::{align_up, LevelIndexEntry, LEVEL_INDEX_ENTRY_SIZE};
use ktx2_format::supercompression::SupercompressionScheme;
use ktx2_format::vk_format::{TexelBlockInfo, VkFormat};

use crate::context::{ValidationContext, ValidationResult};
use crate::issues::LevelIndex;
use crate::reports::ValidationReport;

/// Byte alignment each level's data must start at.
///
/// Supercompressed payloads pack tightly; everything else aligns to the
/// texel block size rounded up to a multiple of 4.
fn required_level_alignment(
    block_info: Option<TexelBlockInfo>,
    scheme: Option<SupercompressionScheme>,
) -> u64 {
    match scheme {
        Some(SupercompressionScheme::None) | None => {}
        Some(_) => return 1,
    }
    match block_info {
        Some(info) => {
            let block = info.block_byte_size as u64;
            // lcm(block, 4) for the block sizes that occur (1,2,3,4,6,...)
            block * 4 / gcd(block, 4)
        }
        None => 4,
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

impl<F: FnMut(&ValidationReport)> ValidationContext<'_, F> {
    pub(crate) fn validate_level_index(&mut self) -> ValidationResult {
        let header = self.header;
        let level_count = self.level_count as usize;

        let bytes = self.read_bytes(level_count * LEVEL_INDEX_ENTRY_SIZE, "the level index")?;
        let entries: Vec<LevelIndexEntry> = bytes
            .chunks_exact(LEVEL_INDEX_ENTRY_SIZE)
            .filter_map(LevelIndexEntry::parse)
            .collect();

        let format = VkFormat::from_u32(header.vk_format);
        let scheme = SupercompressionScheme::from_u32(header.supercompression_scheme);
        let block_info = format.and_then(VkFormat::texel_block_info);
        let alignment = required_level_alignment(block_info, scheme);

        // First level on disk follows the last populated non-payload
        // region, aligned up.
        let sgd = header.supercompression_global_data;
        let kvd = header.key_value_data;
        let dfd = header.data_format_descriptor;
        let previous_end = if sgd.byte_length != 0 {
            sgd.end()
        } else if kvd.byte_length != 0 {
            kvd.end()
        } else {
            dfd.end()
        };
        let mut expected_offset = align_up(previous_end, alignment);
        self.payload_start = Some(expected_offset);
        self.expected_file_end = entries
            .iter()
            .map(|entry| entry.byte_offset + entry.byte_length)
            .max();

        let exact_sizes = scheme == Some(SupercompressionScheme::None)
            && format.is_some_and(|format| format != VkFormat::UNDEFINED)
            && block_info.is_some();

        // The smallest mip is stored last; walk in on-disk order.
        let mut previous_byte_length = 0u64;
        for level in (0..level_count).rev() {
            let entry = entries[level];

            if exact_sizes {
                let info = block_info.unwrap_or(TexelBlockInfo {
                    block_width: 1,
                    block_height: 1,
                    block_depth: 1,
                    block_byte_size: 1,
                });
                let expected_size = self.level_byte_size(level as u32, info);

                if entry.uncompressed_byte_length != expected_size {
                    self.error(
                        &LevelIndex::INCORRECT_UNCOMPRESSED_BYTE_LENGTH,
                        &[&level, &entry.uncompressed_byte_length, &expected_size],
                    );
                }
                if entry.byte_length != expected_size {
                    self.error(
                        &LevelIndex::INCORRECT_BYTE_LENGTH,
                        &[&level, &entry.byte_length, &expected_size],
                    );
                }
                if entry.byte_length != entry.uncompressed_byte_length {
                    self.error(
                        &LevelIndex::UNEQUAL_BYTE_LENGTHS,
                        &[&level, &entry.uncompressed_byte_length, &entry.byte_length],
                    );
                }

                if entry.byte_offset != expected_offset {
                    if entry.byte_offset % alignment != 0 {
                        self.error(
                            &LevelIndex::UNALIGNED_OFFSET,
                            &[&level, &entry.byte_offset, &alignment],
                        );
                    }
                    if entry.byte_offset > expected_offset {
                        self.error(
                            &LevelIndex::EXTRA_PADDING,
                            &[&level, &entry.byte_offset, &expected_offset],
                        );
                    } else {
                        self.error(
                            &LevelIndex::BYTE_OFFSET_TOO_SMALL,
                            &[&level, &entry.byte_offset, &expected_offset],
                        );
                    }
                }

                expected_offset += align_up(expected_size, alignment);
            } else {
                // Unknown sizes: byteLengths have to be trusted, but the
                // packing is still fully determined.
                if entry.byte_length == 0 || entry.byte_offset == 0 {
                    self.error(&LevelIndex::ZERO_OFFSET_OR_LENGTH, &[&level]);
                    continue;
                }
                if entry.byte_offset != expected_offset {
                    self.error(
                        &LevelIndex::INCORRECT_BYTE_OFFSET,
                        &[&level, &entry.byte_offset, &expected_offset],
                    );
                }
                if scheme == Some(SupercompressionScheme::None) {
                    if entry.byte_length < previous_byte_length {
                        self.error(
                            &LevelIndex::INCORRECT_LEVEL_ORDER,
                            &[&level, &entry.byte_length, &previous_byte_length],
                        );
                    }
                    if entry.byte_offset % alignment != 0 {
                        self.error(
                            &LevelIndex::UNALIGNED_OFFSET,
                            &[&level, &entry.byte_offset, &alignment],
                        );
                    }
                    if entry.uncompressed_byte_length == 0 {
                        self.error(&LevelIndex::ZERO_UNCOMPRESSED_LENGTH, &[&level]);
                    }
                    previous_byte_length = entry.byte_length;
                }
                expected_offset += align_up(entry.byte_length, alignment);

                // With a concrete format the uncompressed size is still
                // predictable even under supercompression.
                if let (Some(info), true) = (block_info, format != Some(VkFormat::UNDEFINED)) {
                    let expected_size = self.level_byte_size(level as u32, info);
                    if entry.uncompressed_byte_length != expected_size {
                        self.error(
                            &LevelIndex::INCORRECT_UNCOMPRESSED_BYTE_LENGTH,
                            &[&level, &entry.uncompressed_byte_length, &expected_size],
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// Size of one level's image data: texel blocks across all layers,
    /// faces and depth slices of that level.
    fn level_byte_size(&self, level: u32, info: TexelBlockInfo) -> u64 {
        let header = self.header;
        let width = (header.pixel_width >> level).max(1) as u64;
        let height = (header.pixel_height.max(1) >> level).max(1) as u64;
        let depth = (header.pixel_depth.max(1) >> level).max(1) as u64;

        let blocks_x = width.div_ceil(info.block_width as u64);
        let blocks_y = height.div_ceil(info.block_height as u64);
        let blocks_z = depth.div_ceil(info.block_depth as u64);

        blocks_x
            * blocks_y
            * blocks_z
            * info.block_byte_size as u64
            * self.layer_count as u64
            * header.face_count.max(1) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_is_lcm_of_block_size_and_four() {
        let info = |bytes| {
            Some(TexelBlockInfo {
                block_width: 1,
                block_height: 1,
                block_depth: 1,
                block_byte_size: bytes,
            })
        };
        let none = Some(SupercompressionScheme::None);
        assert_eq!(required_level_alignment(info(1), none), 4);
        assert_eq!(required_level_alignment(info(2), none), 4);
        assert_eq!(required_level_alignment(info(3), none), 12);
        assert_eq!(required_level_alignment(info(4), none), 4);
        assert_eq!(required_level_alignment(info(6), none), 12);
        assert_eq!(required_level_alignment(info(8), none), 8);
        assert_eq!(required_level_alignment(info(16), none), 16);
    }

    #[test]
    fn supercompressed_payloads_pack_tightly() {
        assert_eq!(
            required_level_alignment(None, Some(SupercompressionScheme::Zstd)),
            1
        );
        assert_eq!(
            required_level_alignment(None, Some(SupercompressionScheme::BasisLz)),
            1
        );
        assert_eq!(required_level_alignment(None, Some(SupercompressionScheme::None)), 4);
    }
}
