//! Supercompression Global Data validation for BasisLZ files.
//!
//! The region is a global header (endpoint/selector counts and the byte
//! lengths of the three appended blobs) followed by one descriptor per
//! image. The image count is fully determined by the header: layers x
//! faces x depth slices, summed over the levels.

use ktx2_format::supercompression::{scheme_name_or_hex, SupercompressionScheme};

use crate::context::{ValidationContext, ValidationResult};
use crate::issues::Sgd;
use crate::reports::ValidationReport;

/// Byte size of the BasisLZ global header.
const GLOBAL_HEADER_SIZE: u64 = 20;
/// Byte size of one per-image ETC1S descriptor.
const IMAGE_DESC_SIZE: u64 = 20;
/// The only imageFlags bit ETC1S defines (P-frame).
const ETC1S_P_FRAME: u32 = 0x02;

struct BasisLzGlobalHeader {
    endpoints_byte_length: u32,
    selectors_byte_length: u32,
    tables_byte_length: u32,
    extended_byte_length: u32,
}

impl BasisLzGlobalHeader {
    fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < GLOBAL_HEADER_SIZE as usize {
            return None;
        }
        // endpointCount and selectorCount (2 x u16) precede the lengths;
        // nothing here validates them, the transcoder owns their meaning.
        Some(Self {
            endpoints_byte_length: read_u32(bytes, 4),
            selectors_byte_length: read_u32(bytes, 8),
            tables_byte_length: read_u32(bytes, 12),
            extended_byte_length: read_u32(bytes, 16),
        })
    }
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

impl<F: FnMut(&ValidationReport)> ValidationContext<'_, F> {
    pub(crate) fn validate_sgd(&mut self) -> ValidationResult {
        let header = self.header;
        let sgd = header.supercompression_global_data;
        let scheme = SupercompressionScheme::from_u32(header.supercompression_scheme);

        if scheme != Some(SupercompressionScheme::BasisLz) {
            if sgd.byte_length > 0 && scheme.is_some() {
                let scheme_name = scheme_name_or_hex(header.supercompression_scheme);
                self.error(
                    &Sgd::UNEXPECTED_GLOBAL_DATA,
                    &[&sgd.byte_length, &scheme_name],
                );
            }
            return Ok(());
        }
        if sgd.byte_length == 0 {
            self.error(&Sgd::MISSING_GLOBAL_DATA, &[]);
            return Ok(());
        }
        if sgd.byte_offset < self.position() || sgd.end() > self.file_size() {
            return Ok(());
        }

        // Only genuine alignment padding is checked for zeroes; a larger
        // gap means an earlier stage was skipped and already diagnosed.
        if sgd.byte_offset - self.position() < 8 {
            self.check_zero_padding(
                sgd.byte_offset,
                "between the keyValueData and supercompressionGlobalData regions",
            )?;
        } else {
            self.seek_to(sgd.byte_offset, "the supercompressionGlobalData")?;
        }
        let region = self.read_bytes(sgd.byte_length as usize, "the supercompressionGlobalData")?;

        let Some(global) = BasisLzGlobalHeader::parse(region) else {
            self.error(
                &Sgd::INCORRECT_GLOBAL_DATA_SIZE,
                &[&sgd.byte_length, &GLOBAL_HEADER_SIZE],
            );
            return Ok(());
        };

        // layers x faces x depth slices per level; no 3D cube maps exist,
        // so faces and depth never both exceed 1.
        let layers_faces = self.layer_count as u64 * header.face_count.max(1) as u64;
        let image_count: u64 = (0..self.level_count)
            .map(|level| layers_faces * (header.pixel_depth >> level).max(1) as u64)
            .sum();

        let expected_length = GLOBAL_HEADER_SIZE
            + IMAGE_DESC_SIZE * image_count
            + global.endpoints_byte_length as u64
            + global.selectors_byte_length as u64
            + global.tables_byte_length as u64;

        let sample_count = self
            .dfd
            .as_ref()
            .map(|dfd| dfd.samples.len())
            .unwrap_or(0);

        for image in 0..image_count {
            let offset = (GLOBAL_HEADER_SIZE + IMAGE_DESC_SIZE * image) as usize;
            if offset + IMAGE_DESC_SIZE as usize > region.len() {
                break;
            }
            let image_flags = read_u32(region, offset);
            let alpha_slice_byte_offset = read_u32(region, offset + 12);

            if image_flags & !ETC1S_P_FRAME != 0 {
                self.error(&Sgd::INVALID_IMAGE_FLAG_BIT, &[&image, &image_flags]);
            }
            if alpha_slice_byte_offset == 0 && sample_count == 2 {
                self.error(&Sgd::DFD_MISMATCH_ALPHA, &[&image]);
            }
            if alpha_slice_byte_offset > 0 && sample_count == 1 {
                self.error(
                    &Sgd::DFD_MISMATCH_NO_ALPHA,
                    &[&image, &alpha_slice_byte_offset],
                );
            }
        }

        if sgd.byte_length != expected_length {
            self.error(
                &Sgd::INCORRECT_GLOBAL_DATA_SIZE,
                &[&sgd.byte_length, &expected_length],
            );
        }
        if global.extended_byte_length != 0 {
            self.error(
                &Sgd::EXTENDED_BYTE_LENGTH_NOT_ZERO,
                &[&global.extended_byte_length],
            );
        }

        Ok(())
    }
}
