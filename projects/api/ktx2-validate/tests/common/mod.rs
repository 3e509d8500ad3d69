//! Shared test helpers: an in-memory KTX2 writer that produces files the
//! validator accepts, so tests corrupt exactly one aspect at a time.
#![allow(dead_code)]

use ktx2_format::dfd::{create_dfd_for_format, ColorModel, TRANSFER_LINEAR, VERSION_NUMBER_1_3};
use ktx2_format::header::{align_up, KTX2_IDENTIFIER};
use ktx2_format::vk_format::{TexelBlockInfo, VkFormat};

pub struct Ktx2FileBuilder {
    pub vk_format: u32,
    pub type_size: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_depth: u32,
    pub layer_count: u32,
    pub face_count: u32,
    pub level_count: u32,
    pub supercompression_scheme: u32,
    pub dfd_words: Vec<u32>,
    pub key_values: Vec<(Vec<u8>, Vec<u8>)>,
    pub sgd: Vec<u8>,
    /// Per-level byte lengths for formats whose sizes the builder cannot
    /// derive (UNDEFINED, supercompressed payloads).
    pub level_sizes: Option<Vec<u64>>,
}

impl Ktx2FileBuilder {
    pub fn for_format(format: VkFormat, width: u32, height: u32) -> Self {
        let info = format.texel_block_info();
        Self {
            vk_format: format as u32,
            type_size: info.map_or(1, |info| info.block_byte_size),
            pixel_width: width,
            pixel_height: height,
            pixel_depth: 0,
            layer_count: 0,
            face_count: 1,
            level_count: 1,
            supercompression_scheme: 0,
            dfd_words: create_dfd_for_format(format).unwrap_or_default(),
            key_values: Vec::new(),
            sgd: Vec::new(),
            level_sizes: None,
        }
    }

    /// The S1-style well-formed RGBA8 4x4 mip-free 2D texture.
    pub fn rgba8_4x4() -> Self {
        Self::for_format(VkFormat::R8G8B8A8_UNORM, 4, 4)
    }

    pub fn with_key_value(mut self, key: &str, value: &[u8]) -> Self {
        self.key_values.push((key.as_bytes().to_vec(), value.to_vec()));
        self
    }

    /// Switches to ZSTD supercompression, zeroing the descriptor's
    /// bytesPlane fields as required for supercompressed payloads.
    pub fn with_zstd(mut self) -> Self {
        self.supercompression_scheme = 2;
        self.type_size = 1;
        if self.dfd_words.len() > 6 {
            self.dfd_words[5] = 0;
            self.dfd_words[6] = 0;
        }
        self
    }

    /// A BasisLZ/ETC1S file: UNDEFINED format, ETC1S descriptor with
    /// `sample_count` samples, matching global data and one 64-byte level.
    pub fn basis_lz(sample_count: usize) -> Self {
        let mut builder = Self::for_format(VkFormat::UNDEFINED, 4, 4);
        builder.supercompression_scheme = 1;
        builder.dfd_words = etc1s_dfd(sample_count);
        builder.sgd = basis_lz_sgd(1, sample_count == 2);
        builder.level_sizes = Some(vec![64]);
        builder
    }

    /// A UASTC file without supercompression and one 4x4 block level.
    pub fn uastc_4x4() -> Self {
        let mut builder = Self::for_format(VkFormat::UNDEFINED, 4, 4);
        builder.dfd_words = uastc_dfd();
        builder.level_sizes = Some(vec![16]);
        builder
    }

    fn block_info(&self) -> Option<TexelBlockInfo> {
        VkFormat::from_u32(self.vk_format).and_then(VkFormat::texel_block_info)
    }

    fn required_level_alignment(&self) -> u64 {
        if self.supercompression_scheme != 0 {
            return 1;
        }
        match self.block_info() {
            Some(info) => {
                let block = info.block_byte_size as u64;
                block * 4 / gcd(block, 4)
            }
            None => 4,
        }
    }

    fn level_size(&self, level: u32) -> u64 {
        if let Some(sizes) = &self.level_sizes {
            return sizes[level as usize];
        }
        let info = self.block_info().unwrap_or(TexelBlockInfo {
            block_width: 1,
            block_height: 1,
            block_depth: 1,
            block_byte_size: 4,
        });
        let width = (self.pixel_width >> level).max(1) as u64;
        let height = (self.pixel_height.max(1) >> level).max(1) as u64;
        let depth = (self.pixel_depth.max(1) >> level).max(1) as u64;
        width.div_ceil(info.block_width as u64)
            * height.div_ceil(info.block_height as u64)
            * depth.div_ceil(info.block_depth as u64)
            * info.block_byte_size as u64
            * self.layer_count.max(1) as u64
            * self.face_count.max(1) as u64
    }

    pub fn build(&self) -> Vec<u8> {
        let level_count = self.level_count.max(1);
        let level_index_end = 80 + 24 * level_count as u64;

        let dfd_offset = level_index_end;
        let dfd_length = (self.dfd_words.len() * 4) as u32;
        let dfd_end = dfd_offset + dfd_length as u64;

        let mut kvd_bytes = Vec::new();
        for (key, value) in &self.key_values {
            let size = (key.len() + 1 + value.len()) as u32;
            kvd_bytes.extend_from_slice(&size.to_le_bytes());
            kvd_bytes.extend_from_slice(key);
            kvd_bytes.push(0);
            kvd_bytes.extend_from_slice(value);
            while kvd_bytes.len() % 4 != 0 {
                kvd_bytes.push(0);
            }
        }
        let (kvd_offset, kvd_length) = if kvd_bytes.is_empty() {
            (0u64, 0u32)
        } else {
            (align_up(dfd_end, 4), kvd_bytes.len() as u32)
        };
        let kvd_end = if kvd_length > 0 {
            kvd_offset + kvd_length as u64
        } else {
            dfd_end
        };

        let (sgd_offset, sgd_length) = if self.sgd.is_empty() {
            (0u64, 0u64)
        } else {
            (align_up(kvd_end, 8), self.sgd.len() as u64)
        };
        let last_end = if sgd_length > 0 {
            sgd_offset + sgd_length
        } else {
            kvd_end
        };

        // Levels: smallest mip first on disk, i.e. highest index first.
        let alignment = self.required_level_alignment();
        let mut offsets = vec![0u64; level_count as usize];
        let mut sizes = vec![0u64; level_count as usize];
        let mut cursor = align_up(last_end, alignment);
        for level in (0..level_count).rev() {
            cursor = align_up(cursor, alignment);
            offsets[level as usize] = cursor;
            sizes[level as usize] = self.level_size(level);
            cursor += sizes[level as usize];
        }
        let file_end = cursor;

        let mut data = Vec::with_capacity(file_end as usize);
        data.extend_from_slice(&KTX2_IDENTIFIER);
        for value in [
            self.vk_format,
            self.type_size,
            self.pixel_width,
            self.pixel_height,
            self.pixel_depth,
            self.layer_count,
            self.face_count,
            self.level_count,
            self.supercompression_scheme,
        ] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        for value in [dfd_offset as u32, dfd_length, kvd_offset as u32, kvd_length] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        for value in [sgd_offset, sgd_length] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        for level in 0..level_count as usize {
            for value in [offsets[level], sizes[level], sizes[level]] {
                data.extend_from_slice(&value.to_le_bytes());
            }
        }
        for word in &self.dfd_words {
            data.extend_from_slice(&word.to_le_bytes());
        }
        if kvd_length > 0 {
            while (data.len() as u64) < kvd_offset {
                data.push(0);
            }
            data.extend_from_slice(&kvd_bytes);
        }
        if sgd_length > 0 {
            while (data.len() as u64) < sgd_offset {
                data.push(0);
            }
            data.extend_from_slice(&self.sgd);
        }
        while (data.len() as u64) < file_end {
            data.push(0);
        }
        data
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Hand-assembled ETC1S descriptor for BasisLZ payloads: RGB sample and
/// optionally an alpha sample.
pub fn etc1s_dfd(sample_count: usize) -> Vec<u32> {
    let block_size = 24 + 16 * sample_count as u32;
    let mut words = vec![
        4 + block_size,
        0,
        VERSION_NUMBER_1_3 | (block_size << 16),
        ColorModel::Etc1s as u32 | (1 << 8) | (TRANSFER_LINEAR << 16),
        0x0000_0303,
        0,
        0,
    ];
    // RGB sample in the first 64 bits.
    words.extend_from_slice(&[63 << 16, 0, 0, u32::MAX]);
    if sample_count == 2 {
        // AAA sample in the second 64 bits.
        words.extend_from_slice(&[64 | (63 << 16) | (15 << 24), 0, 0, u32::MAX]);
    }
    words
}

/// Hand-assembled UASTC descriptor: single RGBA sample covering the whole
/// 16-byte block.
pub fn uastc_dfd() -> Vec<u32> {
    let block_size = 24 + 16;
    vec![
        4 + block_size,
        0,
        VERSION_NUMBER_1_3 | (block_size << 16),
        ColorModel::Uastc as u32 | (1 << 8) | (TRANSFER_LINEAR << 16),
        0x0000_0303,
        16,
        0,
        (127 << 16) | (3 << 24),
        0,
        0,
        u32::MAX,
    ]
}

/// BasisLZ global data for `image_count` images; `with_alpha` drives the
/// alpha slice offsets the DFD cross-check looks at.
pub fn basis_lz_sgd(image_count: u32, with_alpha: bool) -> Vec<u8> {
    let mut sgd = Vec::new();
    // endpointCount, selectorCount
    sgd.extend_from_slice(&0u16.to_le_bytes());
    sgd.extend_from_slice(&0u16.to_le_bytes());
    // endpoints/selectors/tables/extended byte lengths
    for value in [0u32, 0, 0, 0] {
        sgd.extend_from_slice(&value.to_le_bytes());
    }
    for _ in 0..image_count {
        let alpha_offset: u32 = if with_alpha { 32 } else { 0 };
        for value in [0u32, 0, 32, alpha_offset, if with_alpha { 32 } else { 0 }] {
            sgd.extend_from_slice(&value.to_le_bytes());
        }
    }
    sgd
}
