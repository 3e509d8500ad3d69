//! `ktx info` - dump the header, region index, level index, DFD and
//! key-value metadata of a KTX2 file.

use argh::FromArgs;
use serde_json::{json, Map, Value};
use std::path::PathBuf;

use ktx2_format::dfd::{render_dfd_json, render_dfd_text, words_from_bytes};
use ktx2_format::header::{Header, LevelIndexEntry, KTX2_HEADER_SIZE, LEVEL_INDEX_ENTRY_SIZE};
use ktx2_format::supercompression::scheme_name_or_hex;
use ktx2_format::vk_format::format_name_or_hex;

use crate::error::ToolError;
use crate::output::OutputFormat;

/// Exit code for open/parse failures of `info`.
const EXIT_PARSE_FAILURE: i32 = 2;

#[derive(FromArgs, Debug)]
/// Print information about a KTX2 file
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// output format (text, json or mini-json) [default: text]
    #[argh(option)]
    pub format: Option<OutputFormat>,

    /// input file
    #[argh(positional)]
    pub input: PathBuf,
}

struct FileInfo {
    header: Header,
    levels: Vec<LevelIndexEntry>,
    dfd_words: Vec<u32>,
    key_values: Vec<(Vec<u8>, Vec<u8>)>,
}

pub fn handle_info_command(cmd: InfoCmd) -> i32 {
    let data = match std::fs::read(&cmd.input) {
        Ok(data) => data,
        Err(source) => {
            eprintln!(
                "ktx info: {}",
                ToolError::FileOpen {
                    path: cmd.input,
                    source
                }
            );
            return EXIT_PARSE_FAILURE;
        }
    };

    let info = match parse_file(&data) {
        Ok(info) => info,
        Err(kind) => {
            let error = match kind {
                ParseFailure::Truncated => ToolError::UnexpectedEof(cmd.input),
                ParseFailure::NotKtx2 => ToolError::NotKtx2(cmd.input),
            };
            eprintln!("ktx info: {error}");
            return EXIT_PARSE_FAILURE;
        }
    };

    match cmd.format.unwrap_or_default() {
        OutputFormat::Text => print_text(&info),
        format => print_json(&info, format.is_minified()),
    }
    0
}

enum ParseFailure {
    Truncated,
    NotKtx2,
}

fn parse_file(data: &[u8]) -> Result<FileInfo, ParseFailure> {
    let header = Header::parse(data).ok_or(ParseFailure::Truncated)?;
    if !header.has_valid_identifier() {
        return Err(ParseFailure::NotKtx2);
    }

    let level_count = header.effective_level_count() as usize;
    let index_end = KTX2_HEADER_SIZE + level_count * LEVEL_INDEX_ENTRY_SIZE;
    let index_bytes = data
        .get(KTX2_HEADER_SIZE..index_end)
        .ok_or(ParseFailure::Truncated)?;
    let levels = index_bytes
        .chunks_exact(LEVEL_INDEX_ENTRY_SIZE)
        .filter_map(LevelIndexEntry::parse)
        .collect();

    let dfd = header.data_format_descriptor;
    let dfd_words = data
        .get(dfd.byte_offset as usize..dfd.end() as usize)
        .map(words_from_bytes)
        .unwrap_or_default();

    let kvd = header.key_value_data;
    let key_values = data
        .get(kvd.byte_offset as usize..kvd.end() as usize)
        .map(parse_key_values)
        .unwrap_or_default();

    Ok(FileInfo {
        header,
        levels,
        dfd_words,
        key_values,
    })
}

/// Lenient key-value scan: stops at the first malformed entry, the
/// validator is the place for diagnostics.
fn parse_key_values(region: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut entries = Vec::new();
    let mut offset = 0usize;
    while offset + 4 <= region.len() {
        let size = u32::from_le_bytes(region[offset..offset + 4].try_into().unwrap()) as usize;
        offset += 4;
        if size == 0 || offset + size > region.len() {
            break;
        }
        let bytes = &region[offset..offset + size];
        offset += size + (4 - size % 4) % 4;
        match bytes.iter().position(|byte| *byte == 0) {
            Some(position) => {
                entries.push((bytes[..position].to_vec(), bytes[position + 1..].to_vec()))
            }
            None => entries.push((bytes.to_vec(), Vec::new())),
        }
    }
    entries
}

fn print_text(info: &FileInfo) {
    let header = &info.header;
    println!("identifier: \u{AB}KTX 20\u{BB}\\r\\n\\x1A\\n");
    println!("vkFormat: {}", format_name_or_hex(header.vk_format));
    println!("typeSize: {}", header.type_size);
    println!("pixelWidth: {}", header.pixel_width);
    println!("pixelHeight: {}", header.pixel_height);
    println!("pixelDepth: {}", header.pixel_depth);
    println!("layerCount: {}", header.layer_count);
    println!("faceCount: {}", header.face_count);
    println!("levelCount: {}", header.level_count);
    println!(
        "supercompressionScheme: {}",
        scheme_name_or_hex(header.supercompression_scheme)
    );
    let dfd = header.data_format_descriptor;
    let kvd = header.key_value_data;
    let sgd = header.supercompression_global_data;
    println!("dataFormatDescriptor.byteOffset: {:#x}", dfd.byte_offset);
    println!("dataFormatDescriptor.byteLength: {}", dfd.byte_length);
    println!("keyValueData.byteOffset: {:#x}", kvd.byte_offset);
    println!("keyValueData.byteLength: {}", kvd.byte_length);
    println!("supercompressionGlobalData.byteOffset: {:#x}", sgd.byte_offset);
    println!("supercompressionGlobalData.byteLength: {}", sgd.byte_length);

    println!();
    println!("Level Index");
    for (level, entry) in info.levels.iter().enumerate() {
        println!("Level{level}.byteOffset: {:#x}", entry.byte_offset);
        println!("Level{level}.byteLength: {}", entry.byte_length);
        println!(
            "Level{level}.uncompressedByteLength: {}",
            entry.uncompressed_byte_length
        );
    }

    if !info.dfd_words.is_empty() {
        println!();
        println!("Data Format Descriptor");
        print!("{}", render_dfd_text(&info.dfd_words));
    }

    if !info.key_values.is_empty() {
        println!();
        println!("Key/Value Data");
        for (key, value) in &info.key_values {
            println!(
                "{}: {}",
                String::from_utf8_lossy(key),
                render_value_text(value)
            );
        }
    }
}

fn render_value_text(value: &[u8]) -> String {
    let trimmed = match value.split_last() {
        Some((0, rest)) => rest,
        _ => value,
    };
    match std::str::from_utf8(trimmed) {
        Ok(text) if text.chars().all(|c| !c.is_control()) => text.to_string(),
        _ => value
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn print_json(info: &FileInfo, minified: bool) {
    let header = &info.header;
    let dfd = header.data_format_descriptor;
    let kvd = header.key_value_data;
    let sgd = header.supercompression_global_data;

    let mut root = Map::new();
    root.insert("$id".to_string(), json!("ktx-info-schema-1.0"));
    root.insert(
        "header".to_string(),
        json!({
            "vkFormat": format_name_or_hex(header.vk_format),
            "typeSize": header.type_size,
            "pixelWidth": header.pixel_width,
            "pixelHeight": header.pixel_height,
            "pixelDepth": header.pixel_depth,
            "layerCount": header.layer_count,
            "faceCount": header.face_count,
            "levelCount": header.level_count,
            "supercompressionScheme": scheme_name_or_hex(header.supercompression_scheme),
        }),
    );
    root.insert(
        "index".to_string(),
        json!({
            "dataFormatDescriptor": { "byteOffset": dfd.byte_offset, "byteLength": dfd.byte_length },
            "keyValueData": { "byteOffset": kvd.byte_offset, "byteLength": kvd.byte_length },
            "supercompressionGlobalData": { "byteOffset": sgd.byte_offset, "byteLength": sgd.byte_length },
        }),
    );
    root.insert(
        "levelIndex".to_string(),
        Value::Array(
            info.levels
                .iter()
                .map(|entry| {
                    json!({
                        "byteOffset": entry.byte_offset,
                        "byteLength": entry.byte_length,
                        "uncompressedByteLength": entry.uncompressed_byte_length,
                    })
                })
                .collect(),
        ),
    );

    // The DFD renderer owns the enum-or-integer convention; re-parse its
    // document instead of re-encoding the descriptor here.
    let dfd_json = render_dfd_json(&info.dfd_words, 0, 0, true);
    if let Ok(value) = serde_json::from_str::<Value>(&dfd_json) {
        root.insert("dataFormatDescriptor".to_string(), value);
    }

    if !info.key_values.is_empty() {
        let mut key_values = Map::new();
        for (key, value) in &info.key_values {
            key_values.insert(
                String::from_utf8_lossy(key).into_owned(),
                json!(render_value_text(value)),
            );
        }
        root.insert("keyValueData".to_string(), Value::Object(key_values));
    }

    let document = Value::Object(root);
    let rendered = if minified {
        serde_json::to_string(&document)
    } else {
        serde_json::to_string_pretty(&document)
    };
    println!("{}", rendered.unwrap_or_default());
}
