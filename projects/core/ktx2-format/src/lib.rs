#![doc = include_str!("../README.md")]

pub mod dfd;
pub mod header;
pub mod supercompression;
pub mod vk_format;

pub use header::{Header, IndexEntry64, LevelIndexEntry, KTX2_IDENTIFIER};
pub use supercompression::SupercompressionScheme;
pub use vk_format::VkFormat;
