//! Key-value data validation: the entry scan, the key-list invariants and
//! the per-key rules for the reserved `KTX*` keys.
//!
//! Recovery is deliberate: an oversized entry is truncated to the bytes
//! available so later entries still parse, an unsorted list is re-sorted
//! before the per-key checks run, and a missing NUL still yields an entry
//! (with an empty value) so key-specific checks can fire.

use ktx2_format::dfd::{ColorModel, TRANSFER_SRGB};
use ktx2_format::vk_format::{format_name_or_hex, VkFormat};

use crate::context::{ValidationContext, ValidationResult};
use crate::issues::Metadata;
use crate::reports::ValidationReport;

struct KeyValueEntry {
    key: Vec<u8>,
    value: Vec<u8>,
}

impl<F: FnMut(&ValidationReport)> ValidationContext<'_, F> {
    pub(crate) fn validate_kvd(&mut self) -> ValidationResult {
        let kvd = self.header.key_value_data;
        if kvd.byte_length == 0 {
            return Ok(());
        }
        // Region-level defects were recorded by the index stage.
        if (kvd.byte_offset as u64) < self.position() || kvd.end() > self.file_size() {
            return Ok(());
        }

        // Only genuine alignment padding is checked for zeroes; a larger
        // gap means an earlier stage was skipped and already diagnosed.
        if kvd.byte_offset as u64 - self.position() < 4 {
            self.check_zero_padding(
                kvd.byte_offset as u64,
                "between the dataFormatDescriptor and keyValueData regions",
            )?;
        } else {
            self.seek_to(kvd.byte_offset as u64, "the keyValueData")?;
        }
        let region = self.read_bytes(kvd.byte_length as usize, "the keyValueData")?;

        let entries = self.scan_entries(region);

        let mut is_sorted = true;
        for pair in entries.windows(2) {
            if pair[0].key > pair[1].key {
                self.error(&Metadata::OUT_OF_ORDER, &[]);
                is_sorted = false;
                break;
            }
        }

        // Per-key checks still run on unsorted files, over a sorted view.
        let mut sorted: Vec<&KeyValueEntry> = entries.iter().collect();
        if !is_sorted {
            sorted.sort_by(|left, right| left.key.cmp(&right.key));
        }
        for pair in sorted.windows(2) {
            if pair[0].key == pair[1].key {
                self.error(&Metadata::DUPLICATE_KEY, &[]);
                break;
            }
        }

        self.cubemap_incomplete_found = entries
            .iter()
            .any(|entry| entry.key == b"KTXcubemapIncomplete");

        let mut writer_found = false;
        let mut sc_params_found = false;
        for entry in &sorted {
            match entry.key.as_slice() {
                b"KTXcubemapIncomplete" => self.validate_cubemap_incomplete(&entry.value),
                b"KTXorientation" => self.validate_orientation(&entry.value),
                b"KTXglFormat" => self.validate_gl_format(&entry.value),
                b"KTXdxgiFormat__" => self.validate_dxgi_format(&entry.value),
                b"KTXmetalPixelFormat" => self.validate_metal_pixel_format(&entry.value),
                b"KTXswizzle" => self.validate_swizzle(&entry.value),
                b"KTXwriter" => {
                    writer_found = true;
                    self.validate_writer(&entry.value);
                }
                b"KTXwriterScParams" => {
                    sc_params_found = true;
                    self.validate_writer_sc_params(&entry.value);
                }
                b"KTXastcDecodeMode" => self.validate_astc_decode_mode(&entry.value),
                b"KTXanimData" => self.validate_anim_data(&entry.value),
                key if key.starts_with(b"KTX") || key.starts_with(b"ktx") => {
                    let rendered = String::from_utf8_lossy(key).into_owned();
                    self.error(&Metadata::UNKNOWN_RESERVED_KEY, &[&rendered]);
                }
                key => {
                    let rendered = String::from_utf8_lossy(key).into_owned();
                    self.warning(&Metadata::CUSTOM_METADATA, &[&rendered]);
                }
            }
        }

        if !writer_found {
            if sc_params_found {
                self.error(&Metadata::KTX_WRITER_REQUIRED_BUT_MISSING, &[]);
            } else {
                self.warning(&Metadata::KTX_WRITER_MISSING, &[]);
            }
        }

        Ok(())
    }

    fn scan_entries(&mut self, region: &[u8]) -> Vec<KeyValueEntry> {
        let mut entries = Vec::new();
        let mut offset = 0usize;

        while offset < region.len() {
            if entries.len() >= Metadata::MAX_ENTRY_COUNT {
                self.error(&Metadata::TOO_MANY_ENTRY, &[&Metadata::MAX_ENTRY_COUNT]);
                break;
            }
            let remaining = region.len() - offset;
            if remaining < 6 {
                self.error(&Metadata::NOT_ENOUGH_DATA_FOR_AN_ENTRY, &[&remaining]);
                break;
            }

            let declared =
                u32::from_le_bytes(region[offset..offset + 4].try_into().unwrap()) as usize;
            offset += 4;
            let remaining = region.len() - offset;

            if declared < 2 {
                self.error(&Metadata::KEY_VALUE_PAIR_SIZE_TOO_SMALL, &[&declared]);
            }
            let size = if declared > remaining {
                self.error(
                    &Metadata::KEY_VALUE_PAIR_SIZE_TOO_BIG,
                    &[&declared, &remaining],
                );
                remaining
            } else {
                declared
            };

            let bytes = &region[offset..offset + size];
            offset += size;

            let (key_bytes, value) = match bytes.iter().position(|byte| *byte == 0) {
                Some(position) => (&bytes[..position], &bytes[position + 1..]),
                None => {
                    let rendered = String::from_utf8_lossy(bytes).into_owned();
                    self.error(&Metadata::KEY_MISSING_NULL_TERMINATOR, &[&rendered]);
                    (bytes, &bytes[bytes.len()..])
                }
            };

            let key_bytes = if key_bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
                let stripped = &key_bytes[3..];
                let rendered = String::from_utf8_lossy(stripped).into_owned();
                self.error(&Metadata::KEY_FORBIDDEN_BOM, &[&rendered]);
                stripped
            } else {
                key_bytes
            };

            if key_bytes.is_empty() {
                self.error(&Metadata::EMPTY_KEY, &[]);
            } else if let Err(error) = std::str::from_utf8(key_bytes) {
                let rendered = String::from_utf8_lossy(key_bytes).into_owned();
                let position = error.valid_up_to();
                self.error(&Metadata::KEY_INVALID_UTF8, &[&rendered, &position]);
            }

            let padding = (4 - size % 4) % 4;
            if offset + padding > region.len() {
                let processed = offset + padding;
                let declared_length = region.len();
                self.error(&Metadata::SIZES_DONT_ADD_UP, &[&processed, &declared_length]);
            }
            for index in 0..padding.min(region.len() - offset) {
                let byte = region[offset + index];
                if byte != 0 {
                    let position = format!(
                        "after the \"{}\" key-value entry",
                        String::from_utf8_lossy(key_bytes)
                    );
                    self.error(&Metadata::PADDING_NOT_ZERO, &[&byte, &position]);
                }
            }
            offset = (offset + padding).min(region.len());

            entries.push(KeyValueEntry {
                key: key_bytes.to_vec(),
                value: value.to_vec(),
            });
        }

        entries
    }

    fn validate_cubemap_incomplete(&mut self, value: &[u8]) {
        if value.len() != 1 {
            let length = value.len();
            self.error(&Metadata::KTX_CUBEMAP_INCOMPLETE_INVALID_SIZE, &[&length]);
            return;
        }
        let mut bits = value[0];
        if bits & 0xC0 != 0 {
            let rendered = format!("{bits:08b}");
            self.error(&Metadata::KTX_CUBEMAP_INCOMPLETE_INVALID_VALUE, &[&rendered]);
            // The reserved bits are masked off for the remaining checks.
            bits &= 0x3F;
        }

        let present_faces = bits.count_ones();
        if bits == 0x3F {
            self.warning(&Metadata::KTX_CUBEMAP_INCOMPLETE_ALL_BIT_SET, &[]);
        }
        if present_faces == 0 {
            self.error(&Metadata::KTX_CUBEMAP_INCOMPLETE_NO_BIT_SET, &[]);
        } else if self.layer_count % present_faces != 0 {
            let layer_count = self.layer_count;
            self.error(
                &Metadata::KTX_CUBEMAP_INCOMPLETE_INCOMPATIBLE_LAYER_COUNT,
                &[&layer_count, &present_faces],
            );
        }
        if self.header.face_count != 1 {
            let face_count = self.header.face_count;
            self.error(
                &Metadata::KTX_CUBEMAP_INCOMPLETE_WITH_FACE_COUNT_NOT_1,
                &[&face_count],
            );
        }
        if self.header.pixel_width != self.header.pixel_height || self.header.pixel_depth != 0 {
            let pixel_width = self.header.pixel_width;
            let pixel_height = self.header.pixel_height;
            let pixel_depth = self.header.pixel_depth;
            self.error(
                &Metadata::KTX_CUBEMAP_INCOMPLETE_DIMENSIONS,
                &[&pixel_width, &pixel_height, &pixel_depth],
            );
        }
    }

    fn validate_orientation(&mut self, value: &[u8]) {
        let length = value.len();
        if !(2..=4).contains(&length) {
            self.error(&Metadata::KTX_ORIENTATION_INVALID_SIZE, &[&length]);
            if length == 0 {
                return;
            }
        }
        let characters = if value.last() == Some(&0) {
            &value[..length - 1]
        } else {
            self.error(&Metadata::KTX_ORIENTATION_MISSING_NULL, &[]);
            value
        };

        if characters.len() != self.dimension_count as usize {
            let actual = characters.len();
            let wanted = self.dimension_count;
            self.error(
                &Metadata::KTX_ORIENTATION_INCORRECT_DIMENSION,
                &[&actual, &wanted],
            );
        }

        const EXPECTED: [(char, char); 3] = [('r', 'l'), ('d', 'u'), ('o', 'i')];
        for (index, byte) in characters.iter().take(3).enumerate() {
            let character = *byte as char;
            let (first, second) = EXPECTED[index];
            if character != first && character != second {
                self.error(
                    &Metadata::KTX_ORIENTATION_INVALID_VALUE,
                    &[&index, &character, &first, &second],
                );
            }
        }
    }

    fn validate_gl_format(&mut self, value: &[u8]) {
        if self.header.vk_format != VkFormat::UNDEFINED as u32 {
            let rendered = format_name_or_hex(self.header.vk_format);
            self.error(&Metadata::KTX_GL_FORMAT_WITH_VK_FORMAT, &[&rendered]);
        }
        if value.len() != 12 {
            let length = value.len();
            self.error(&Metadata::KTX_GL_FORMAT_INVALID_SIZE, &[&length]);
            return;
        }
        // Layout: glInternalformat, glFormat, glType.
        let gl_format = u32::from_le_bytes(value[4..8].try_into().unwrap());
        let gl_type = u32::from_le_bytes(value[8..12].try_into().unwrap());
        if (gl_format == 0) != (gl_type == 0) {
            self.error(
                &Metadata::KTX_GL_FORMAT_INVALID_VALUE_FOR_COMPRESSED,
                &[&gl_format, &gl_type],
            );
        }
    }

    fn validate_dxgi_format(&mut self, value: &[u8]) {
        if value.len() != 4 {
            let length = value.len();
            self.error(&Metadata::KTX_DXGI_FORMAT_INVALID_SIZE, &[&length]);
        }
        if self.header.vk_format != VkFormat::UNDEFINED as u32 {
            let rendered = format_name_or_hex(self.header.vk_format);
            self.error(&Metadata::KTX_DXGI_FORMAT_WITH_VK_FORMAT, &[&rendered]);
        }
    }

    fn validate_metal_pixel_format(&mut self, value: &[u8]) {
        if value.len() != 4 {
            let length = value.len();
            self.error(&Metadata::KTX_METAL_PIXEL_FORMAT_INVALID_SIZE, &[&length]);
        }
        if self.header.vk_format != VkFormat::UNDEFINED as u32 {
            let rendered = format_name_or_hex(self.header.vk_format);
            self.error(&Metadata::KTX_METAL_PIXEL_FORMAT_WITH_VK_FORMAT, &[&rendered]);
        }
    }

    fn validate_swizzle(&mut self, value: &[u8]) {
        if value.len() != 5 {
            let length = value.len();
            self.error(&Metadata::KTX_SWIZZLE_INVALID_SIZE, &[&length]);
            if value.is_empty() {
                return;
            }
        }
        if value.last() != Some(&0) {
            self.error(&Metadata::KTX_SWIZZLE_MISSING_NULL, &[]);
        }

        // Channel presence from the actual descriptor, when one parsed.
        let present = self.dfd.as_ref().map(|dfd| {
            let has = |channel: u32| dfd.samples.iter().any(|s| s.channel_id == channel);
            [has(0), has(1), has(2), has(15)]
        });

        const POSITIONS: [(&str, char); 4] = [
            ("red", '0'),
            ("green", '0'),
            ("blue", '0'),
            ("alpha", '1'),
        ];
        for (index, byte) in value.iter().take(4).enumerate() {
            let character = *byte as char;
            if !"rgba01".contains(character) {
                self.error(&Metadata::KTX_SWIZZLE_INVALID_VALUE, &[&index, &character]);
                continue;
            }
            if let Some(present) = present {
                let (channel_name, replacement) = POSITIONS[index];
                if !present[index] && character != '0' && character != '1' {
                    self.error(
                        &Metadata::KTX_SWIZZLE_INVALID_VALUE_MISSING_CHANNEL,
                        &[&index, &character, &channel_name, &replacement],
                    );
                }
            }
        }

        let format = VkFormat::from_u32(self.header.vk_format);
        if format.is_some_and(|format| format.is_depth() || format.is_stencil()) {
            let rendered = format_name_or_hex(self.header.vk_format);
            self.warning(&Metadata::KTX_SWIZZLE_WITH_DEPTH_OR_STENCIL, &[&rendered]);
        }
    }

    fn validate_writer(&mut self, value: &[u8]) {
        if value.last() != Some(&0) {
            self.error(&Metadata::KTX_WRITER_MISSING_NULL, &[]);
        }
        let text = strip_trailing_nul(value);
        if let Err(error) = std::str::from_utf8(text) {
            let position = error.valid_up_to();
            self.warning(&Metadata::KTX_WRITER_INVALID_UTF8, &[&position]);
        }
    }

    fn validate_writer_sc_params(&mut self, value: &[u8]) {
        if value.last() != Some(&0) {
            self.error(&Metadata::KTX_WRITER_SC_PARAMS_MISSING_NULL, &[]);
        }
        let text = strip_trailing_nul(value);
        if let Err(error) = std::str::from_utf8(text) {
            let position = error.valid_up_to();
            self.warning(&Metadata::KTX_WRITER_SC_PARAMS_INVALID_UTF8, &[&position]);
        }
    }

    fn validate_astc_decode_mode(&mut self, value: &[u8]) {
        let text = strip_trailing_nul(value);
        if text != b"rgb9e5" && text != b"unorm8" {
            let rendered = String::from_utf8_lossy(text).into_owned();
            self.error(&Metadata::KTX_ASTC_DECODE_MODE_INVALID_VALUE, &[&rendered]);
        }

        let Some((model, transfer)) = self
            .dfd
            .as_ref()
            .map(|dfd| (dfd.color_model, dfd.transfer_function))
        else {
            return;
        };
        if model != ColorModel::Astc as u32 {
            self.error(
                &Metadata::KTX_ASTC_DECODE_MODE_NOT_ALLOWED,
                &[&"for non-ASTC texture formats"],
            );
        }
        if transfer == TRANSFER_SRGB {
            self.error(
                &Metadata::KTX_ASTC_DECODE_MODE_NOT_ALLOWED,
                &[&"with sRGB transfer function"],
            );
        }
    }

    fn validate_anim_data(&mut self, value: &[u8]) {
        if self.cubemap_incomplete_found {
            self.error(
                &Metadata::KTX_ANIM_DATA_NOT_ALLOWED,
                &[&"together with KTXcubemapIncomplete"],
            );
        }
        if self.header.layer_count == 0 {
            self.error(
                &Metadata::KTX_ANIM_DATA_NOT_ALLOWED,
                &[&"except with array textures"],
            );
        }
        if value.len() != 12 {
            let length = value.len();
            self.error(&Metadata::KTX_ANIM_DATA_INVALID_SIZE, &[&length]);
        }
    }
}

fn strip_trailing_nul(value: &[u8]) -> &[u8] {
    match value.split_last() {
        Some((0, rest)) => rest,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_trailing_nul_removes_exactly_one() {
        assert_eq!(strip_trailing_nul(b"abc\0"), b"abc");
        assert_eq!(strip_trailing_nul(b"abc"), b"abc");
        assert_eq!(strip_trailing_nul(b"abc\0\0"), b"abc\0");
        assert_eq!(strip_trailing_nul(b""), b"");
    }
}
