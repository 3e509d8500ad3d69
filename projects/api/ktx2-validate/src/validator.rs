//! The stage driver plus the header and region-index stages.
//!
//! Stages run in file order; a non-fatal issue in one stage never skips a
//! later stage, but a stage short-circuits locally when its prerequisite
//! header fields are implausible (the issue for those fields has already
//! been recorded).

use ktx2_format::header::{align_up, Header, KTX2_HEADER_SIZE};
use ktx2_format::supercompression::{is_vendor_scheme, scheme_name_or_hex, SupercompressionScheme};
use ktx2_format::vk_format::{
    format_name_or_hex, VkFormat, VK_FORMAT_MAX_EXTENSION_ENUM, VK_FORMAT_MAX_STANDARD_ENUM,
};

use crate::context::{ValidationContext, ValidationResult};
use crate::issues::{FileError, HeaderData, IoError, Metadata};
use crate::reports::ValidationReport;

impl<F: FnMut(&ValidationReport)> ValidationContext<'_, F> {
    /// Runs all stages in order. Only fatals cut the run short.
    pub(crate) fn run(&mut self) -> ValidationResult {
        self.validate_header()?;
        self.validate_indices()?;
        self.validate_level_index()?;
        self.validate_dfd()?;
        self.validate_kvd()?;
        self.validate_sgd()?;
        self.validate_data_size()?;
        if self.options().check_gltf_basisu {
            self.validate_gltf_basisu();
        }
        Ok(())
    }

    fn validate_header(&mut self) -> ValidationResult {
        let bytes = self.read_bytes(KTX2_HEADER_SIZE, "the header")?;
        let header = match Header::parse(bytes) {
            Some(header) => header,
            None => return Err(self.fatal(&IoError::UNEXPECTED_EOF, &[&KTX2_HEADER_SIZE, &"the header", &bytes.len()])),
        };
        self.header = header;

        if !header.has_valid_identifier() {
            return Err(self.fatal(&FileError::NOT_KTX2, &[]));
        }

        let format = VkFormat::from_u32(header.vk_format);
        let format_name = format_name_or_hex(header.vk_format);

        if format.is_some_and(VkFormat::is_prohibited) {
            self.error(&HeaderData::PROHIBITED_FORMAT, &[&format_name]);
        }
        if format.is_none() {
            if header.vk_format <= VK_FORMAT_MAX_STANDARD_ENUM
                || header.vk_format > VK_FORMAT_MAX_EXTENSION_ENUM
            {
                self.error(&HeaderData::INVALID_FORMAT, &[&format_name]);
            } else {
                self.warning(&HeaderData::UNKNOWN_FORMAT, &[&format_name]);
            }
        }

        let scheme = SupercompressionScheme::from_u32(header.supercompression_scheme);
        if scheme == Some(SupercompressionScheme::BasisLz)
            && format != Some(VkFormat::UNDEFINED)
        {
            self.error(&HeaderData::VK_FORMAT_AND_BASIS, &[&format_name]);
        }

        // typeSize: 1 for anything whose payload is not plain texels;
        // otherwise the texel block size described by the format.
        let block_compressed = format.is_some_and(VkFormat::is_block_compressed);
        if format == Some(VkFormat::UNDEFINED)
            || block_compressed
            || header.supercompression_scheme != 0
        {
            if header.type_size != 1 {
                self.error(
                    &HeaderData::TYPE_SIZE_NOT_ONE,
                    &[&header.type_size, &format_name],
                );
            }
        } else if let Some(info) = format.and_then(VkFormat::texel_block_info) {
            if header.type_size != info.block_byte_size {
                self.error(
                    &HeaderData::TYPE_SIZE_MISMATCH,
                    &[&header.type_size, &format_name, &info.block_byte_size],
                );
            }
        }

        // Image dimensions
        if header.pixel_width == 0 {
            self.error(&HeaderData::WIDTH_ZERO, &[]);
        }
        if block_compressed && header.pixel_height == 0 {
            self.error(&HeaderData::BLOCK_COMPRESSED_NO_HEIGHT, &[&format_name]);
        }
        if header.face_count == 6 && header.pixel_width != header.pixel_height {
            self.error(
                &HeaderData::CUBE_HEIGHT_WIDTH_MISMATCH,
                &[&header.pixel_width, &header.pixel_height],
            );
        }
        if header.pixel_depth != 0 && header.pixel_height == 0 {
            self.error(&HeaderData::DEPTH_NO_HEIGHT, &[&header.pixel_depth]);
        }
        if format.is_some_and(VkFormat::is_3d_block_compressed) && header.pixel_depth == 0 {
            self.error(
                &HeaderData::DEPTH_BLOCK_COMPRESSED_NO_DEPTH,
                &[&format_name],
            );
        }
        if format.is_some_and(VkFormat::is_depth) && header.pixel_depth != 0 {
            self.error(
                &HeaderData::DEPTH_STENCIL_FORMAT_WITH_DEPTH,
                &[&header.pixel_depth, &format_name],
            );
        }
        if format.is_some_and(VkFormat::is_stencil) && header.pixel_depth != 0 {
            self.error(
                &HeaderData::DEPTH_STENCIL_FORMAT_WITH_DEPTH,
                &[&header.pixel_depth, &format_name],
            );
        }
        if header.face_count == 6 && header.pixel_depth != 0 {
            self.error(&HeaderData::CUBE_WITH_DEPTH, &[&header.pixel_depth]);
        }

        // Dimension count; 3D arrays exist in the format but no API takes
        // them, hence the warning.
        self.dimension_count = if header.pixel_depth != 0 {
            if header.layer_count != 0 {
                self.warning(&HeaderData::THREE_D_ARRAY, &[]);
                4
            } else {
                3
            }
        } else if header.pixel_height != 0 {
            2
        } else {
            1
        };

        self.layer_count = header.effective_layer_count();

        if header.face_count != 6 && header.face_count != 1 {
            self.error(&HeaderData::INVALID_FACE_COUNT, &[&header.face_count]);
        }

        self.level_count = header.effective_level_count();
        let max_dim = header
            .pixel_width
            .max(header.pixel_height)
            .max(header.pixel_depth);
        if self.level_count > 32 || max_dim < 1u32 << (self.level_count - 1) {
            let level_count = self.level_count;
            self.error(&HeaderData::TOO_MANY_MIP_LEVELS, &[&level_count, &max_dim]);
        }

        let scheme_block_compressed =
            scheme.is_some_and(SupercompressionScheme::is_block_compressed);
        if (block_compressed || scheme_block_compressed) && header.level_count == 0 {
            self.error(&HeaderData::BLOCK_COMPRESSED_NO_LEVEL, &[&format_name]);
        }

        // Supercompression scheme
        if is_vendor_scheme(header.supercompression_scheme) {
            let rendered = format!("0x{:X}", header.supercompression_scheme);
            self.warning(&HeaderData::VENDOR_SUPERCOMPRESSION, &[&rendered]);
        } else if scheme.is_none() {
            let rendered = format!("0x{:X}", header.supercompression_scheme);
            self.error(&HeaderData::INVALID_SUPERCOMPRESSION, &[&rendered]);
        }

        Ok(())
    }

    fn validate_indices(&mut self) -> ValidationResult {
        let header = self.header;
        let file_size = self.file_size();
        let dfd = header.data_format_descriptor;
        let kvd = header.key_value_data;
        let sgd = header.supercompression_global_data;

        if dfd.byte_offset == 0 {
            self.error(&HeaderData::INDEX_DFD_ZERO_OFFSET, &[]);
        } else if dfd.byte_offset % 4 != 0 {
            self.error(&HeaderData::INDEX_DFD_ALIGNMENT, &[&dfd.byte_offset]);
        }
        if dfd.byte_length == 0 {
            self.error(&HeaderData::INDEX_DFD_ZERO_LENGTH, &[]);
        }
        if dfd.end() > file_size {
            self.error(
                &HeaderData::INDEX_DFD_INVALID,
                &[&dfd.byte_offset, &dfd.byte_length, &file_size],
            );
        }

        if kvd.byte_length == 0 {
            if kvd.byte_offset != 0 {
                self.error(
                    &HeaderData::INDEX_KVD_OFFSET_WITHOUT_LENGTH,
                    &[&kvd.byte_offset],
                );
            }
        } else {
            if kvd.byte_offset % 4 != 0 {
                self.error(&HeaderData::INDEX_KVD_ALIGNMENT, &[&kvd.byte_offset]);
            }
            if kvd.end() > file_size {
                self.error(
                    &HeaderData::INDEX_KVD_INVALID,
                    &[&kvd.byte_offset, &kvd.byte_length, &file_size],
                );
            }
        }

        let scheme = SupercompressionScheme::from_u32(header.supercompression_scheme);
        let has_global_data = scheme.is_some_and(SupercompressionScheme::has_global_data);
        let scheme_name = scheme_name_or_hex(header.supercompression_scheme);
        if sgd.byte_length == 0 {
            if sgd.byte_offset != 0 {
                self.error(
                    &HeaderData::INDEX_SGD_OFFSET_WITHOUT_LENGTH,
                    &[&sgd.byte_offset],
                );
            }
            if has_global_data {
                self.error(&HeaderData::INDEX_SGD_MISSING, &[&scheme_name]);
            }
        } else {
            if sgd.byte_offset % 8 != 0 {
                self.error(&HeaderData::INDEX_SGD_ALIGNMENT, &[&sgd.byte_offset]);
            }
            // Vendor and unrecognized schemes cannot be judged here.
            if scheme.is_some() && !has_global_data {
                self.error(
                    &HeaderData::INDEX_SGD_EXISTS,
                    &[&sgd.byte_length, &scheme_name],
                );
            }
            if sgd.end() > file_size {
                self.error(
                    &HeaderData::INDEX_SGD_INVALID,
                    &[&sgd.byte_offset, &sgd.byte_length, &file_size],
                );
            }
        }

        // Region continuity: each region starts at the previous region's
        // end rounded up to its required alignment.
        let level_index_end = KTX2_HEADER_SIZE as u64 + header.level_index_byte_length();
        let expected_dfd = align_up(level_index_end, 4);
        if dfd.byte_offset != 0 && dfd.byte_offset as u64 != expected_dfd {
            self.error(
                &HeaderData::INDEX_DFD_CONTINUITY,
                &[&dfd.byte_offset, &expected_dfd],
            );
        }

        let mut previous_end = if dfd.byte_offset != 0 {
            dfd.end()
        } else {
            expected_dfd
        };
        if kvd.byte_length != 0 {
            let expected_kvd = align_up(previous_end, 4);
            if kvd.byte_offset as u64 != expected_kvd {
                self.error(
                    &HeaderData::INDEX_KVD_CONTINUITY,
                    &[&kvd.byte_offset, &expected_kvd],
                );
            }
            previous_end = kvd.end();
        }
        if sgd.byte_length != 0 {
            let expected_sgd = align_up(previous_end, 8);
            if sgd.byte_offset != expected_sgd {
                self.error(
                    &HeaderData::INDEX_SGD_CONTINUITY,
                    &[&sgd.byte_offset, &expected_sgd],
                );
            }
        }

        Ok(())
    }

    /// Verifies the bytes between the cursor and `target` are zero, as
    /// required for inter-region alignment padding.
    pub(crate) fn check_zero_padding(&mut self, target: u64, location: &str) -> ValidationResult {
        if target <= self.position() {
            return Ok(());
        }
        let length = (target - self.position()) as usize;
        let bytes = self.read_bytes(length, "alignment padding")?;
        for (index, byte) in bytes.iter().enumerate() {
            if *byte != 0 {
                let position = format!("{location} (padding byte {index})");
                self.error(&Metadata::PADDING_NOT_ZERO, &[byte, &position]);
            }
        }
        Ok(())
    }

    /// Compares the payload size described by the level index with the
    /// bytes actually present after the last non-payload region.
    fn validate_data_size(&mut self) -> ValidationResult {
        let (Some(payload_start), Some(expected_end)) =
            (self.payload_start, self.expected_file_end)
        else {
            return Ok(());
        };
        let described = expected_end.saturating_sub(payload_start);
        let actual = self.file_size().saturating_sub(payload_start);
        if described != actual {
            self.error(&FileError::INCORRECT_DATA_SIZE, &[&described, &actual]);
        }
        Ok(())
    }
}
