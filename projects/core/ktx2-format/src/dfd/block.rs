//! Shift/mask access to the bit-packed Basic Data Format Descriptor block
//! and the parsed, structured form of a whole DFD.

use super::{BDFD_HEADER_WORDS, BDFD_WORD_OFFSET, SAMPLE_WORDS};

/// Words per sample descriptor, re-exported for size arithmetic.
pub const SAMPLE_WORD_COUNT: usize = SAMPLE_WORDS;

#[inline]
fn field(word: u32, shift: u32, bits: u32) -> u32 {
    (word >> shift) & ((1u32 << bits) - 1)
}

/// Borrowed view of a BDFD word slice providing field accessors.
///
/// The slice starts at the BDFD's first word (the word *after* the DFD
/// total-size word). Accessors index into the slice and therefore require
/// it to be long enough; [`BasicDescriptorBlock::new`] enforces the header
/// words, sample accessors bound-check per sample.
#[derive(Debug, Clone, Copy)]
pub struct BasicDescriptorBlock<'a> {
    words: &'a [u32],
}

impl<'a> BasicDescriptorBlock<'a> {
    /// Wraps a BDFD word slice.
    ///
    /// # Return
    ///
    /// `None` when fewer than the six header words are present.
    pub fn new(words: &'a [u32]) -> Option<Self> {
        if words.len() < BDFD_HEADER_WORDS {
            return None;
        }
        Some(Self { words })
    }

    pub fn vendor_id(&self) -> u32 {
        field(self.words[0], 0, 17)
    }

    pub fn descriptor_type(&self) -> u32 {
        field(self.words[0], 17, 15)
    }

    pub fn version_number(&self) -> u32 {
        field(self.words[1], 0, 16)
    }

    pub fn descriptor_block_size(&self) -> u32 {
        field(self.words[1], 16, 16)
    }

    pub fn color_model(&self) -> u32 {
        field(self.words[2], 0, 8)
    }

    pub fn color_primaries(&self) -> u32 {
        field(self.words[2], 8, 8)
    }

    pub fn transfer_function(&self) -> u32 {
        field(self.words[2], 16, 8)
    }

    pub fn flags(&self) -> u32 {
        field(self.words[2], 24, 8)
    }

    /// Texel block dimension field `index` (0..=3), as stored (one less
    /// than the real dimension).
    pub fn texel_block_dimension(&self, index: usize) -> u32 {
        field(self.words[3], (index as u32) * 8, 8)
    }

    /// Raw word 3, all four texel block dimensions at once.
    pub fn texel_block_dimensions_word(&self) -> u32 {
        self.words[3]
    }

    /// `bytesPlane` field `index` (0..=7).
    pub fn bytes_plane(&self, index: usize) -> u32 {
        let word = &self.words[4 + index / 4];
        field(*word, ((index % 4) as u32) * 8, 8)
    }

    /// Raw words 4 and 5 (`bytesPlane0..3`, `bytesPlane4..7`).
    pub fn bytes_plane_words(&self) -> (u32, u32) {
        (self.words[4], self.words[5])
    }

    /// Number of samples advertised by `descriptorBlockSize`.
    pub fn sample_count(&self) -> usize {
        let block_size = self.descriptor_block_size() as usize;
        block_size.saturating_sub(BDFD_HEADER_WORDS * 4) / (SAMPLE_WORDS * 4)
    }

    /// Number of samples actually backed by the word slice.
    pub fn available_sample_count(&self) -> usize {
        let backed = (self.words.len() - BDFD_HEADER_WORDS) / SAMPLE_WORDS;
        self.sample_count().min(backed)
    }

    fn sample_word(&self, sample: usize, word: usize) -> u32 {
        self.words[BDFD_HEADER_WORDS + sample * SAMPLE_WORDS + word]
    }

    pub fn sample_bit_offset(&self, sample: usize) -> u32 {
        field(self.sample_word(sample, 0), 0, 16)
    }

    pub fn sample_bit_length(&self, sample: usize) -> u32 {
        field(self.sample_word(sample, 0), 16, 8)
    }

    pub fn sample_channel_id(&self, sample: usize) -> u32 {
        field(self.sample_word(sample, 0), 24, 4)
    }

    /// Datatype qualifier nibble (LINEAR/EXPONENT/SIGNED/FLOAT bits).
    pub fn sample_qualifiers(&self, sample: usize) -> u32 {
        field(self.sample_word(sample, 0), 28, 4)
    }

    pub fn sample_position(&self, sample: usize, index: usize) -> u32 {
        field(self.sample_word(sample, 1), (index as u32) * 8, 8)
    }

    pub fn sample_lower(&self, sample: usize) -> u32 {
        self.sample_word(sample, 2)
    }

    pub fn sample_upper(&self, sample: usize) -> u32 {
        self.sample_word(sample, 3)
    }
}

/// One decoded sample descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleInfo {
    pub bit_offset: u32,
    pub bit_length: u32,
    pub channel_id: u32,
    pub qualifiers: u32,
    pub sample_position: [u32; 4],
    pub lower: u32,
    pub upper: u32,
}

/// A decoded DFD: the total-size word, the BDFD header fields and the
/// samples that were actually present in the word stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFormatDescriptor {
    pub total_size: u32,
    pub vendor_id: u32,
    pub descriptor_type: u32,
    pub version_number: u32,
    pub descriptor_block_size: u32,
    pub color_model: u32,
    pub color_primaries: u32,
    pub transfer_function: u32,
    pub flags: u32,
    pub texel_block_dimension: [u32; 4],
    pub bytes_plane: [u32; 8],
    pub samples: Vec<SampleInfo>,
}

impl DataFormatDescriptor {
    /// Decodes a DFD word stream (total-size word first).
    ///
    /// # Return
    ///
    /// `None` when the stream is too short to hold the BDFD header words.
    /// Samples advertised by `descriptorBlockSize` but not backed by words
    /// are dropped; the advertised count is still visible through
    /// [`Self::advertised_sample_count`].
    pub fn parse(words: &[u32]) -> Option<Self> {
        let bdfd = BasicDescriptorBlock::new(words.get(BDFD_WORD_OFFSET..)?)?;

        let mut texel_block_dimension = [0u32; 4];
        for (index, dimension) in texel_block_dimension.iter_mut().enumerate() {
            *dimension = bdfd.texel_block_dimension(index);
        }
        let mut bytes_plane = [0u32; 8];
        for (index, plane) in bytes_plane.iter_mut().enumerate() {
            *plane = bdfd.bytes_plane(index);
        }

        let samples = (0..bdfd.available_sample_count())
            .map(|sample| SampleInfo {
                bit_offset: bdfd.sample_bit_offset(sample),
                bit_length: bdfd.sample_bit_length(sample),
                channel_id: bdfd.sample_channel_id(sample),
                qualifiers: bdfd.sample_qualifiers(sample),
                sample_position: [
                    bdfd.sample_position(sample, 0),
                    bdfd.sample_position(sample, 1),
                    bdfd.sample_position(sample, 2),
                    bdfd.sample_position(sample, 3),
                ],
                lower: bdfd.sample_lower(sample),
                upper: bdfd.sample_upper(sample),
            })
            .collect();

        Some(Self {
            total_size: words[0],
            vendor_id: bdfd.vendor_id(),
            descriptor_type: bdfd.descriptor_type(),
            version_number: bdfd.version_number(),
            descriptor_block_size: bdfd.descriptor_block_size(),
            color_model: bdfd.color_model(),
            color_primaries: bdfd.color_primaries(),
            transfer_function: bdfd.transfer_function(),
            flags: bdfd.flags(),
            texel_block_dimension,
            bytes_plane,
            samples,
        })
    }

    /// Sample count implied by `descriptorBlockSize`, which may exceed
    /// `samples.len()` for truncated streams.
    pub fn advertised_sample_count(&self) -> usize {
        (self.descriptor_block_size as usize).saturating_sub(BDFD_HEADER_WORDS * 4)
            / (SAMPLE_WORDS * 4)
    }
}

/// Reinterprets a little-endian byte region as DFD words. A trailing
/// partial word is dropped.
pub fn words_from_bytes(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes(chunk.try_into().unwrap()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Word images assembled by hand; each test pins the bit range of one
    // field so a misplaced shift cannot survive.

    fn zero_bdfd_with(word_index: usize, value: u32) -> Vec<u32> {
        let mut words = vec![0u32; BDFD_HEADER_WORDS + SAMPLE_WORDS];
        words[word_index] = value;
        // Advertise one sample so sample accessors are in range.
        words[1] |= ((BDFD_HEADER_WORDS * 4 + SAMPLE_WORDS * 4) as u32) << 16;
        words
    }

    #[test]
    fn vendor_id_occupies_low_17_bits_of_word_0() {
        let words = zero_bdfd_with(0, 0x0001_FFFF);
        let bdfd = BasicDescriptorBlock::new(&words).unwrap();
        assert_eq!(bdfd.vendor_id(), 0x1FFFF);
        assert_eq!(bdfd.descriptor_type(), 0);

        let words = zero_bdfd_with(0, 0xFFFE_0000);
        let bdfd = BasicDescriptorBlock::new(&words).unwrap();
        assert_eq!(bdfd.vendor_id(), 0);
        assert_eq!(bdfd.descriptor_type(), 0x7FFF);
    }

    #[test]
    fn version_and_block_size_split_word_1() {
        let mut words = vec![0u32; BDFD_HEADER_WORDS];
        words[1] = 0x0058_0002;
        let bdfd = BasicDescriptorBlock::new(&words).unwrap();
        assert_eq!(bdfd.version_number(), 2);
        assert_eq!(bdfd.descriptor_block_size(), 0x58);
    }

    #[test]
    fn model_primaries_transfer_flags_pack_word_2() {
        let words = zero_bdfd_with(2, 0x0102_01A6);
        let bdfd = BasicDescriptorBlock::new(&words).unwrap();
        assert_eq!(bdfd.color_model(), 0xA6);
        assert_eq!(bdfd.color_primaries(), 1);
        assert_eq!(bdfd.transfer_function(), 2);
        assert_eq!(bdfd.flags(), 1);
    }

    #[test]
    fn texel_block_dimensions_are_bytes_of_word_3() {
        let words = zero_bdfd_with(3, 0x0403_0203);
        let bdfd = BasicDescriptorBlock::new(&words).unwrap();
        assert_eq!(bdfd.texel_block_dimension(0), 3);
        assert_eq!(bdfd.texel_block_dimension(1), 2);
        assert_eq!(bdfd.texel_block_dimension(2), 3);
        assert_eq!(bdfd.texel_block_dimension(3), 4);
    }

    #[test]
    fn bytes_plane_spans_words_4_and_5() {
        let mut words = zero_bdfd_with(4, 0x0403_0201);
        words[5] = 0x0807_0605;
        let bdfd = BasicDescriptorBlock::new(&words).unwrap();
        for index in 0..8 {
            assert_eq!(bdfd.bytes_plane(index), index as u32 + 1);
        }
    }

    #[test]
    fn sample_word_0_packs_offset_length_channel_qualifiers() {
        let mut words = zero_bdfd_with(0, 0);
        words[BDFD_HEADER_WORDS] = 0x4F3F_0040;
        let bdfd = BasicDescriptorBlock::new(&words).unwrap();
        assert_eq!(bdfd.sample_bit_offset(0), 0x40);
        assert_eq!(bdfd.sample_bit_length(0), 0x3F);
        assert_eq!(bdfd.sample_channel_id(0), 0xF);
        assert_eq!(bdfd.sample_qualifiers(0), 0x4);
    }

    #[test]
    fn sample_positions_lower_upper() {
        let mut words = zero_bdfd_with(0, 0);
        words[BDFD_HEADER_WORDS + 1] = 0x0403_0201;
        words[BDFD_HEADER_WORDS + 2] = 0x0000_0000;
        words[BDFD_HEADER_WORDS + 3] = 0xFFFF_FFFF;
        let bdfd = BasicDescriptorBlock::new(&words).unwrap();
        assert_eq!(bdfd.sample_position(0, 0), 1);
        assert_eq!(bdfd.sample_position(0, 3), 4);
        assert_eq!(bdfd.sample_lower(0), 0);
        assert_eq!(bdfd.sample_upper(0), u32::MAX);
    }

    #[test]
    fn parse_decodes_counted_samples() {
        let mut words = vec![0u32; 1 + BDFD_HEADER_WORDS + 2 * SAMPLE_WORDS];
        words[0] = (words.len() * 4) as u32;
        // descriptorBlockSize advertises two samples
        words[2] = ((BDFD_HEADER_WORDS * 4 + 2 * SAMPLE_WORDS * 4) as u32) << 16;
        words[1 + BDFD_HEADER_WORDS] = 0x0F3F_0000;
        words[1 + BDFD_HEADER_WORDS + SAMPLE_WORDS] = 0x0F3F_0040;
        let dfd = DataFormatDescriptor::parse(&words).unwrap();
        assert_eq!(dfd.samples.len(), 2);
        assert_eq!(dfd.advertised_sample_count(), 2);
        assert_eq!(dfd.samples[0].bit_offset, 0);
        assert_eq!(dfd.samples[1].bit_offset, 64);
        assert_eq!(dfd.samples[1].channel_id, 15);
    }

    #[test]
    fn parse_tolerates_truncated_sample_words() {
        let mut words = vec![0u32; 1 + BDFD_HEADER_WORDS + SAMPLE_WORDS];
        words[0] = (words.len() * 4) as u32;
        // Advertises two samples but only one is backed.
        words[2] = ((BDFD_HEADER_WORDS * 4 + 2 * SAMPLE_WORDS * 4) as u32) << 16;
        let dfd = DataFormatDescriptor::parse(&words).unwrap();
        assert_eq!(dfd.samples.len(), 1);
        assert_eq!(dfd.advertised_sample_count(), 2);
    }

    #[test]
    fn parse_rejects_too_short_streams() {
        let words = vec![0u32; BDFD_HEADER_WORDS];
        assert!(DataFormatDescriptor::parse(&words).is_none());
    }

    #[test]
    fn words_from_bytes_is_little_endian() {
        let bytes = [0x5C, 0x00, 0x00, 0x00, 0xAB, 0xCD, 0x01, 0x02, 0xFF];
        assert_eq!(words_from_bytes(&bytes), vec![0x5C, 0x0201_CDAB]);
    }
}
