//! DFD semantics: the descriptor must both be well-formed and agree with
//! the header's `vkFormat` and supercompression scheme.
//!
//! For a concrete format without supercompression the descriptor is
//! compared byte-for-byte against the reference descriptor; when that
//! comparison fails, a deeper analysis re-interprets the descriptor to
//! report the most specific defect instead of a generic mismatch.

use ktx2_format::dfd::{
    create_dfd_for_format, transfer_function_name, words_from_bytes,
    ColorModel, DataFormatDescriptor, SampleInfo, CHANNEL_ETC1S_AAA, CHANNEL_ETC1S_GGG,
    CHANNEL_ETC1S_RGB, CHANNEL_ETC1S_RRR, CHANNEL_UASTC_RGB, CHANNEL_UASTC_RGBA,
    CHANNEL_UASTC_RRR, CHANNEL_UASTC_RRRG, DESCRIPTOR_TYPE_BASICFORMAT, PRIMARIES_MAX,
    QUALIFIER_FLOAT, QUALIFIER_SIGNED, TRANSFER_LINEAR, TRANSFER_SRGB, VENDOR_ID_KHRONOS,
    VERSION_NUMBER_1_3,
};
use ktx2_format::supercompression::SupercompressionScheme;
use ktx2_format::vk_format::{format_name_or_hex, VkFormat};

use crate::context::{ValidationContext, ValidationResult};
use crate::issues::Dfd;
use crate::reports::ValidationReport;

impl<F: FnMut(&ValidationReport)> ValidationContext<'_, F> {
    pub(crate) fn validate_dfd(&mut self) -> ValidationResult {
        let header = self.header;
        let index = header.data_format_descriptor;

        // Index errors for these cases were already recorded.
        if index.byte_offset == 0 || index.byte_length == 0 {
            return Ok(());
        }
        if (index.byte_offset as u64) < self.position() || index.end() > self.file_size() {
            return Ok(());
        }

        self.seek_to(index.byte_offset as u64, "the dataFormatDescriptor")?;
        let bytes = self.read_bytes(index.byte_length as usize, "the dataFormatDescriptor")?;
        let words = words_from_bytes(bytes);

        let Some(dfd) = DataFormatDescriptor::parse(&words) else {
            let total = words.first().copied().unwrap_or(0);
            self.error(&Dfd::SIZE_MISMATCH, &[&total, &index.byte_length]);
            return Ok(());
        };

        if dfd.total_size != index.byte_length {
            self.error(&Dfd::SIZE_MISMATCH, &[&dfd.total_size, &index.byte_length]);
        }

        if dfd.transfer_function != TRANSFER_LINEAR && dfd.transfer_function != TRANSFER_SRGB {
            let rendered = enum_or_int(dfd.transfer_function, transfer_function_name);
            self.error(&Dfd::INVALID_TRANSFER_FUNCTION, &[&rendered]);
        }

        let format = VkFormat::from_u32(header.vk_format);
        let scheme = SupercompressionScheme::from_u32(header.supercompression_scheme);

        match scheme {
            Some(SupercompressionScheme::None)
            | Some(SupercompressionScheme::Zstd)
            | Some(SupercompressionScheme::Zlib) => match format {
                Some(VkFormat::UNDEFINED) => self.check_undefined_dfd(&dfd, scheme),
                Some(format) => self.check_known_format_dfd(&dfd, &words, format, scheme),
                None => {}
            },
            Some(SupercompressionScheme::BasisLz) => self.check_basis_lz_dfd(&dfd),
            None => {}
        }

        self.dfd = Some(dfd);
        Ok(())
    }

    /// Concrete `vkFormat`: compare against the reference descriptor;
    /// dig deeper on mismatch.
    fn check_known_format_dfd(
        &mut self,
        dfd: &DataFormatDescriptor,
        words: &[u32],
        format: VkFormat,
        scheme: Option<SupercompressionScheme>,
    ) {
        let Some(reference) = create_dfd_for_format(format) else {
            return;
        };
        let supercompressed = scheme != Some(SupercompressionScheme::None);

        let analyze = if !supercompressed {
            words.len() < reference.len() || words[..reference.len()] != reference[..]
        } else {
            // Sized fields cannot match a supercompressed payload: compare
            // the header words before bytesPlane, require bytesPlane to be
            // all zero, then compare the sample words.
            let mut analyze =
                words.len() < 5 || words[..5] != reference[..5];
            if dfd.bytes_plane.iter().any(|&plane| plane != 0) {
                self.error(&Dfd::NOT_UNSIZED, &[]);
            }
            if !analyze {
                let samples = &words[7.min(words.len())..];
                let reference_samples = &reference[7..];
                analyze = samples != reference_samples;
            }
            analyze
        };

        if analyze {
            self.analyze_dfd_mismatch(dfd, format, scheme, &reference);
        }
    }

    /// `VK_FORMAT_UNDEFINED` without BasisLZ: either UASTC or a custom
    /// descriptor that must still be structurally sound.
    fn check_undefined_dfd(
        &mut self,
        dfd: &DataFormatDescriptor,
        scheme: Option<SupercompressionScheme>,
    ) {
        let supercompressed = scheme != Some(SupercompressionScheme::None);

        if dfd.color_model == ColorModel::Uastc as u32 {
            if dfd.samples.is_empty() {
                self.error(&Dfd::ZERO_SAMPLES, &[&"UASTC"]);
                return;
            }
            if dfd.samples.len() > 1 {
                self.error(&Dfd::INVALID_SAMPLE_COUNT, &[&"UASTC", &"1"]);
            }
            if dfd.texel_block_dimension != [3, 3, 0, 0] {
                self.error(&Dfd::INVALID_TEXEL_BLOCK_DIMENSION, &[&4, &4, &"UASTC"]);
            }
            if supercompressed {
                if dfd.bytes_plane[0] != 0 {
                    self.error(&Dfd::NOT_UNSIZED, &[]);
                }
            } else if dfd.bytes_plane[0] != 16 {
                self.error(&Dfd::BYTES_PLANE0_MISMATCH, &[&dfd.bytes_plane[0], &16]);
            }

            let sample = dfd.samples[0];
            let valid_channel = [
                CHANNEL_UASTC_RGB,
                CHANNEL_UASTC_RGBA,
                CHANNEL_UASTC_RRR,
                CHANNEL_UASTC_RRRG,
            ]
            .contains(&sample.channel_id);
            if !valid_channel {
                self.error(&Dfd::INVALID_CHANNEL_FOR_UASTC, &[]);
            }
            if sample.bit_offset != 0 {
                self.error(&Dfd::INVALID_BIT_OFFSET_FOR_UASTC, &[]);
            }
            if sample.bit_length != 127 {
                self.error(&Dfd::INVALID_BIT_LENGTH, &[&"UASTC", &127]);
            }
            if sample.lower != 0 || sample.upper != u32::MAX {
                self.error(&Dfd::INVALID_LOWER_OR_UPPER, &[&"UASTC"]);
            }
        } else {
            if dfd.vendor_id != VENDOR_ID_KHRONOS
                || dfd.descriptor_type != DESCRIPTOR_TYPE_BASICFORMAT
                || dfd.version_number < VERSION_NUMBER_1_3
            {
                self.error(
                    &Dfd::INCORRECT_BASICS,
                    &[&dfd.vendor_id, &dfd.descriptor_type, &dfd.version_number],
                );
            }
            if dfd.samples.is_empty() {
                self.error(
                    &Dfd::ZERO_SAMPLES,
                    &[&"non-supercompressed texture with VK_FORMAT_UNDEFINED"],
                );
            }
            if dfd.texel_block_dimension == [0, 0, 0, 0] {
                self.error(&Dfd::TEXEL_BLOCK_DIMENSION_ZERO_FOR_UNDEFINED, &[]);
            }
            if dfd.texel_block_dimension[3] != 0 {
                self.error(&Dfd::FOUR_DIMENSIONAL_TEXTURES_NOT_SUPPORTED, &[]);
            }
            if supercompressed {
                if dfd.bytes_plane[0] != 0 {
                    self.error(&Dfd::NOT_UNSIZED, &[]);
                }
            } else if dfd.bytes_plane[0] == 0 {
                self.error(&Dfd::BYTES_PLANE0_ZERO, &[&"VK_FORMAT_UNDEFINED"]);
            }
            if dfd.bytes_plane[1..].iter().any(|&plane| plane != 0) {
                self.error(&Dfd::MULTIPLANE_FORMATS_NOT_SUPPORTED, &[]);
            }
        }
    }

    /// BasisLZ: ETC1S model with one or two 64-bit samples.
    fn check_basis_lz_dfd(&mut self, dfd: &DataFormatDescriptor) {
        if dfd.color_model != ColorModel::Etc1s as u32 {
            self.error(&Dfd::INCORRECT_MODEL_FOR_BLZE, &[]);
        }
        if dfd.samples.is_empty() {
            self.error(&Dfd::ZERO_SAMPLES, &[&"BasisLZ/ETC1S"]);
        }
        if dfd.samples.len() > 2 {
            self.error(&Dfd::INVALID_SAMPLE_COUNT, &[&"BasisLZ/ETC1S", &"1 or 2"]);
        }
        if dfd.texel_block_dimension != [3, 3, 0, 0] {
            self.error(
                &Dfd::INVALID_TEXEL_BLOCK_DIMENSION,
                &[&4, &4, &"BasisLZ/ETC1S"],
            );
        }
        if dfd.bytes_plane.iter().any(|&plane| plane != 0) {
            self.error(&Dfd::NOT_UNSIZED, &[]);
        }

        for (index, sample) in dfd.samples.iter().enumerate() {
            let valid_channel = [
                CHANNEL_ETC1S_RGB,
                CHANNEL_ETC1S_RRR,
                CHANNEL_ETC1S_GGG,
                CHANNEL_ETC1S_AAA,
            ]
            .contains(&sample.channel_id);
            if !valid_channel {
                self.error(&Dfd::INVALID_CHANNEL_FOR_BLZE, &[]);
            }
            let expected_offset = if index == 0 { 0 } else { 64 };
            if sample.bit_offset != expected_offset {
                self.error(&Dfd::INVALID_BIT_OFFSET_FOR_BLZE, &[]);
            }
            if sample.bit_length != 63 {
                self.error(&Dfd::INVALID_BIT_LENGTH, &[&"BasisLZ/ETC1S", &63]);
            }
            if sample.lower != 0 || sample.upper != u32::MAX {
                self.error(&Dfd::INVALID_LOWER_OR_UPPER, &[&"BasisLZ/ETC1S"]);
            }
        }
    }

    /// The descriptor differs from the reference. Re-interpret it to name
    /// the defect precisely.
    fn analyze_dfd_mismatch(
        &mut self,
        dfd: &DataFormatDescriptor,
        format: VkFormat,
        scheme: Option<SupercompressionScheme>,
        reference: &[u32],
    ) {
        let format_name = format_name_or_hex(format as u32);
        let expected = DataFormatDescriptor::parse(reference);

        if dfd.vendor_id != VENDOR_ID_KHRONOS
            || dfd.descriptor_type != DESCRIPTOR_TYPE_BASICFORMAT
            || dfd.version_number < VERSION_NUMBER_1_3
        {
            self.error(
                &Dfd::INCORRECT_BASICS,
                &[&dfd.vendor_id, &dfd.descriptor_type, &dfd.version_number],
            );
        }

        if let Some(expected) = &expected {
            // Any valid primaries value is accepted; only out-of-range
            // values are flagged.
            if dfd.color_primaries != expected.color_primaries
                && dfd.color_primaries > PRIMARIES_MAX
            {
                self.error(&Dfd::INVALID_PRIMARIES, &[&dfd.color_primaries]);
            }

            if dfd.samples.is_empty() {
                self.error(&Dfd::ZERO_SAMPLES, &[&format_name]);
            } else if dfd.samples.len() != expected.samples.len() {
                let actual = dfd.samples.len();
                let wanted = expected.samples.len();
                self.error(&Dfd::SAMPLE_COUNT_MISMATCH, &[&actual, &wanted]);
            }

            if scheme == Some(SupercompressionScheme::None)
                && dfd.bytes_plane[0] != expected.bytes_plane[0]
            {
                if dfd.bytes_plane[0] == 0 {
                    self.error(&Dfd::BYTES_PLANE0_ZERO, &[&format_name]);
                } else {
                    self.error(
                        &Dfd::BYTES_PLANE0_MISMATCH,
                        &[&dfd.bytes_plane[0], &expected.bytes_plane[0]],
                    );
                }
            }
        }

        if format.is_block_compressed() {
            if dfd.color_model < ColorModel::FIRST_BLOCK_COMPRESSED {
                self.error(&Dfd::INCORRECT_MODEL_FOR_BLOCK, &[]);
            }
            return;
        }

        // Re-interpret an uncompressed descriptor.
        if dfd.color_model != ColorModel::Rgbsda as u32 {
            self.error(&Dfd::INVALID_COLOR_MODEL, &[]);
            return;
        }
        if dfd.bytes_plane[1..].iter().any(|&plane| plane != 0) {
            self.error(&Dfd::MULTIPLE_PLANES, &[]);
            return;
        }
        if let Some(issue) = interpret_samples(&dfd.samples) {
            match issue {
                SampleDefect::MixedChannels => self.error(&Dfd::MIXED_CHANNELS, &[]),
                SampleDefect::Multisample => self.error(&Dfd::MULTISAMPLE, &[]),
                SampleDefect::NonTrivialEndianness => {
                    self.error(&Dfd::NON_TRIVIAL_ENDIANNESS, &[])
                }
            }
            return;
        }

        let signed = dfd
            .samples
            .first()
            .is_some_and(|sample| sample.qualifiers & QUALIFIER_SIGNED != 0);
        let float = dfd
            .samples
            .first()
            .is_some_and(|sample| sample.qualifiers & QUALIFIER_FLOAT != 0);
        let normalized = dfd
            .samples
            .first()
            .is_some_and(|sample| sample.upper > 1);

        if float && !signed {
            self.warning(&Dfd::UNSIGNED_FLOAT, &[]);
        }

        if dfd.transfer_function == TRANSFER_SRGB {
            if !format.is_srgb() {
                self.error(&Dfd::SRGB_MISMATCH, &[&format_name]);
            }
        } else {
            let mut wanted = String::from(if signed { "S" } else { "U" });
            if float {
                wanted.push_str("FLOAT");
            } else if normalized {
                wanted.push_str("NORM");
            } else {
                wanted.push_str("INT");
            }
            if !format_name.contains(&wanted) {
                self.error(&Dfd::FORMAT_MISMATCH, &[&format_name]);
            }
        }
    }
}

enum SampleDefect {
    MixedChannels,
    Multisample,
    NonTrivialEndianness,
}

/// Structural defects the reference comparison cannot name: channels with
/// inconsistent datatype qualifiers, repeated channels at different sample
/// positions (multisample) or at the same position (a byte-swapped,
/// big-endian description).
fn interpret_samples(samples: &[SampleInfo]) -> Option<SampleDefect> {
    let mut qualifier_signature = None;
    for sample in samples {
        // Alpha samples of sRGB formats legitimately carry LINEAR.
        let signature = sample.qualifiers & (QUALIFIER_SIGNED | QUALIFIER_FLOAT);
        match qualifier_signature {
            None => qualifier_signature = Some(signature),
            Some(previous) if previous != signature => {
                return Some(SampleDefect::MixedChannels)
            }
            Some(_) => {}
        }
    }

    for (index, sample) in samples.iter().enumerate() {
        for other in &samples[index + 1..] {
            if sample.channel_id == other.channel_id {
                if sample.sample_position != other.sample_position {
                    return Some(SampleDefect::Multisample);
                }
                return Some(SampleDefect::NonTrivialEndianness);
            }
        }
    }

    None
}

fn enum_or_int(value: u32, name: impl Fn(u32) -> Option<&'static str>) -> String {
    match name(value) {
        Some(name) => name.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ktx2_format::dfd::QUALIFIER_LINEAR;

    fn sample(channel_id: u32, qualifiers: u32, position: [u32; 4]) -> SampleInfo {
        SampleInfo {
            bit_offset: 0,
            bit_length: 7,
            channel_id,
            qualifiers,
            sample_position: position,
            lower: 0,
            upper: 255,
        }
    }

    #[test]
    fn consistent_samples_have_no_defect() {
        let samples = [
            sample(0, 0, [0; 4]),
            sample(1, 0, [0; 4]),
            sample(2, 0, [0; 4]),
        ];
        assert!(interpret_samples(&samples).is_none());
    }

    #[test]
    fn linear_alpha_does_not_count_as_mixed() {
        let samples = [sample(0, 0, [0; 4]), sample(15, QUALIFIER_LINEAR, [0; 4])];
        assert!(interpret_samples(&samples).is_none());
    }

    #[test]
    fn differing_float_qualifiers_are_mixed_channels() {
        let samples = [sample(0, QUALIFIER_FLOAT | QUALIFIER_SIGNED, [0; 4]), sample(1, 0, [0; 4])];
        assert!(matches!(
            interpret_samples(&samples),
            Some(SampleDefect::MixedChannels)
        ));
    }

    #[test]
    fn repeated_channel_with_moved_position_is_multisample() {
        let samples = [sample(0, 0, [0; 4]), sample(0, 0, [1, 0, 0, 0])];
        assert!(matches!(
            interpret_samples(&samples),
            Some(SampleDefect::Multisample)
        ));
    }

    #[test]
    fn repeated_channel_in_place_is_endianness() {
        let samples = [sample(0, 0, [0; 4]), sample(0, 0, [0; 4])];
        assert!(matches!(
            interpret_samples(&samples),
            Some(SampleDefect::NonTrivialEndianness)
        ));
    }
}
