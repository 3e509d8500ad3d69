//! Human-readable and JSON renderings of a DFD word stream.
//!
//! Known enum values render as their canonical `KHR_DF_*` names, unknown
//! values as bare integers. The JSON renderer indents every line by
//! `(base_indent + depth) * indent_width` spaces so the document can be
//! embedded into a larger dump; minified mode suppresses all whitespace.

use std::fmt::Write;

use super::block::BasicDescriptorBlock;
use super::names::*;
use super::{BDFD_WORD_OFFSET, QUALIFIER_SIGNED};

fn enum_or_int(value: u32, name: Option<&'static str>) -> String {
    match name {
        Some(name) => name.to_string(),
        None => value.to_string(),
    }
}

/// Lists the set bits of `value` as comma-separated names, using the bare
/// bit value when a bit has no name.
fn bit_list(value: u32, name_of: impl Fn(u32) -> Option<&'static str>) -> String {
    let mut out = String::new();
    for shift in 0..32 {
        let bit = 1u32 << shift;
        if value & bit == 0 {
            continue;
        }
        if !out.is_empty() {
            out.push_str(", ");
        }
        match name_of(bit) {
            Some(name) => out.push_str(name),
            None => {
                let _ = write!(out, "{bit}");
            }
        }
    }
    out
}

/// Renders the text interpretation of a DFD word stream.
///
/// The layout follows the established `info` dump: a header paragraph, then
/// one block per sample. Returns an empty string when the stream is too
/// short to hold a BDFD header.
pub fn render_dfd_text(words: &[u32]) -> String {
    let Some(bdfd) = words
        .get(BDFD_WORD_OFFSET..)
        .and_then(BasicDescriptorBlock::new)
    else {
        return String::new();
    };

    let mut out = String::new();
    let model = bdfd.color_model();

    let _ = writeln!(out, "DFD total bytes: {}", words[0]);
    let _ = writeln!(
        out,
        "BDB descriptor type: {}",
        enum_or_int(bdfd.descriptor_type(), descriptor_type_name(bdfd.descriptor_type()))
    );
    let _ = writeln!(
        out,
        "Vendor ID: {}",
        enum_or_int(bdfd.vendor_id(), vendor_id_name(bdfd.vendor_id()))
    );
    let _ = writeln!(
        out,
        "Descriptor block size: {} ({} samples)",
        bdfd.descriptor_block_size(),
        bdfd.sample_count()
    );
    let _ = writeln!(
        out,
        "VersionNumber: {}",
        enum_or_int(bdfd.version_number(), version_number_name(bdfd.version_number()))
    );

    let flags = bdfd.flags();
    let flag_names = if flags == 0 {
        // ALPHA_STRAIGHT is value 0; not a bit, but still spelled out.
        flags_bit_name(0).unwrap().to_string()
    } else {
        bit_list(flags, flags_bit_name)
    };
    let _ = writeln!(out, "Flags: 0x{flags:x} ({flag_names})");

    let _ = writeln!(
        out,
        "Transfer: {}",
        enum_or_int(
            bdfd.transfer_function(),
            transfer_function_name(bdfd.transfer_function())
        )
    );
    let _ = writeln!(
        out,
        "Primaries: {}",
        enum_or_int(
            bdfd.color_primaries(),
            color_primaries_name(bdfd.color_primaries())
        )
    );
    let _ = writeln!(out, "Model: {}", enum_or_int(model, color_model_name(model)));
    let _ = writeln!(
        out,
        "Dimensions: {}, {}, {}, {}",
        bdfd.texel_block_dimension(0) + 1,
        bdfd.texel_block_dimension(1) + 1,
        bdfd.texel_block_dimension(2) + 1,
        bdfd.texel_block_dimension(3) + 1,
    );
    let _ = writeln!(
        out,
        "Plane bytes: {}, {}, {}, {}, {}, {}, {}, {}",
        bdfd.bytes_plane(0),
        bdfd.bytes_plane(1),
        bdfd.bytes_plane(2),
        bdfd.bytes_plane(3),
        bdfd.bytes_plane(4),
        bdfd.bytes_plane(5),
        bdfd.bytes_plane(6),
        bdfd.bytes_plane(7),
    );

    for sample in 0..bdfd.available_sample_count() {
        let _ = writeln!(out, "Sample {sample}:");

        let qualifiers = bdfd.sample_qualifiers(sample);
        let _ = writeln!(
            out,
            "    Qualifiers: 0x{qualifiers:x} ({})",
            bit_list(qualifiers, sample_qualifier_name)
        );

        let channel = bdfd.sample_channel_id(sample);
        match channel_id_name(model, channel) {
            Some(name) => {
                let _ = writeln!(out, "    Channel: 0x{channel:x} ({name})");
            }
            None => {
                let _ = writeln!(out, "    Channel: 0x{channel:x} ({channel})");
            }
        }

        let _ = writeln!(
            out,
            "    Length: {} bits Offset: {}",
            bdfd.sample_bit_length(sample) + 1,
            bdfd.sample_bit_offset(sample)
        );
        let _ = writeln!(
            out,
            "    Position: {}, {}, {}, {}",
            bdfd.sample_position(sample, 0),
            bdfd.sample_position(sample, 1),
            bdfd.sample_position(sample, 2),
            bdfd.sample_position(sample, 3),
        );
        let _ = writeln!(out, "    Lower: 0x{:08x}", bdfd.sample_lower(sample));
        let _ = writeln!(out, "    Upper: 0x{:08x}", bdfd.sample_upper(sample));
    }

    out
}

struct JsonWriter {
    out: String,
    base_indent: u32,
    indent_width: u32,
    space: &'static str,
    nl: &'static str,
}

impl JsonWriter {
    fn line(&mut self, depth: u32, text: &str) {
        let spaces = (self.base_indent + depth) * self.indent_width;
        for _ in 0..spaces {
            self.out.push(' ');
        }
        self.out.push_str(text);
        self.out.push_str(self.nl);
    }

    fn enum_line(
        &mut self,
        depth: u32,
        key: &str,
        value: u32,
        name: Option<&'static str>,
        comma: bool,
    ) {
        let comma = if comma { "," } else { "" };
        let rendered = match name {
            Some(name) => format!("\"{key}\":{}\"{name}\"{comma}", self.space),
            None => format!("\"{key}\":{}{value}{comma}", self.space),
        };
        self.line(depth, &rendered);
    }
}

/// Renders the JSON interpretation of a DFD word stream.
///
/// Matches the text renderer's enum handling: known values as strings,
/// unknown values as integers. `sampleLower`/`sampleUpper` are emitted
/// signed when the sample carries the SIGNED qualifier. No trailing
/// newline, so the document can be embedded mid-line.
pub fn render_dfd_json(words: &[u32], base_indent: u32, indent_width: u32, minified: bool) -> String {
    let Some(bdfd) = words
        .get(BDFD_WORD_OFFSET..)
        .and_then(BasicDescriptorBlock::new)
    else {
        return String::new();
    };

    let mut w = JsonWriter {
        out: String::new(),
        base_indent: if minified { 0 } else { base_indent },
        indent_width: if minified { 0 } else { indent_width },
        space: if minified { "" } else { " " },
        nl: if minified { "" } else { "\n" },
    };
    let space = w.space;
    let model = bdfd.color_model();

    w.line(0, "{");
    w.line(1, &format!("\"totalSize\":{space}{},", words[0]));
    w.line(1, &format!("\"blocks\":{space}["));

    w.line(2, "{");
    w.enum_line(
        3,
        "descriptorType",
        bdfd.descriptor_type(),
        descriptor_type_name(bdfd.descriptor_type()),
        true,
    );
    w.enum_line(3, "vendorId", bdfd.vendor_id(), vendor_id_name(bdfd.vendor_id()), true);
    w.line(
        3,
        &format!(
            "\"descriptorBlockSize\":{space}{},",
            bdfd.descriptor_block_size()
        ),
    );
    w.enum_line(
        3,
        "versionNumber",
        bdfd.version_number(),
        version_number_name(bdfd.version_number()),
        true,
    );

    w.line(3, &format!("\"flags\":{space}["));
    let flags = bdfd.flags();
    if flags == 0 {
        w.line(4, &format!("\"{}\"", flags_bit_name(0).unwrap()));
    } else {
        for shift in 0..32 {
            let bit = 1u32 << shift;
            if flags & bit == 0 {
                continue;
            }
            let comma = if flags >= bit << 1 { "," } else { "" };
            match flags_bit_name(bit) {
                Some(name) => w.line(4, &format!("\"{name}\"{comma}")),
                None => w.line(4, &format!("{bit}{comma}")),
            }
        }
    }
    w.line(3, "],");

    w.enum_line(
        3,
        "transferFunction",
        bdfd.transfer_function(),
        transfer_function_name(bdfd.transfer_function()),
        true,
    );
    w.enum_line(
        3,
        "colorPrimaries",
        bdfd.color_primaries(),
        color_primaries_name(bdfd.color_primaries()),
        true,
    );
    w.enum_line(3, "colorModel", model, color_model_name(model), true);
    w.line(
        3,
        &format!(
            "\"texelBlockDimension\":{space}[{},{space}{},{space}{},{space}{}],",
            bdfd.texel_block_dimension(0) + 1,
            bdfd.texel_block_dimension(1) + 1,
            bdfd.texel_block_dimension(2) + 1,
            bdfd.texel_block_dimension(3) + 1,
        ),
    );
    w.line(
        3,
        &format!(
            "\"bytesPlane\":{space}[{},{space}{},{space}{},{space}{},{space}{},{space}{},{space}{},{space}{}],",
            bdfd.bytes_plane(0),
            bdfd.bytes_plane(1),
            bdfd.bytes_plane(2),
            bdfd.bytes_plane(3),
            bdfd.bytes_plane(4),
            bdfd.bytes_plane(5),
            bdfd.bytes_plane(6),
            bdfd.bytes_plane(7),
        ),
    );

    w.line(3, &format!("\"samples\":{space}["));
    let samples = bdfd.available_sample_count();
    for sample in 0..samples {
        w.line(4, "{");

        let qualifiers = bdfd.sample_qualifiers(sample);
        if qualifiers == 0 {
            w.line(5, &format!("\"qualifiers\":{space}[],"));
        } else {
            w.line(5, &format!("\"qualifiers\":{space}["));
            for shift in 0..32 {
                let bit = 1u32 << shift;
                if qualifiers & bit == 0 {
                    continue;
                }
                let comma = if qualifiers >= bit << 1 { "," } else { "" };
                match sample_qualifier_name(bit) {
                    Some(name) => w.line(6, &format!("\"{name}\"{comma}")),
                    None => w.line(6, &format!("{bit}{comma}")),
                }
            }
            w.line(5, "],");
        }

        let channel = bdfd.sample_channel_id(sample);
        w.enum_line(5, "channelType", channel, channel_id_name(model, channel), true);
        w.line(
            5,
            &format!("\"bitLength\":{space}{},", bdfd.sample_bit_length(sample)),
        );
        w.line(
            5,
            &format!("\"bitOffset\":{space}{},", bdfd.sample_bit_offset(sample)),
        );
        w.line(
            5,
            &format!(
                "\"samplePosition\":{space}[{},{space}{},{space}{},{space}{}],",
                bdfd.sample_position(sample, 0),
                bdfd.sample_position(sample, 1),
                bdfd.sample_position(sample, 2),
                bdfd.sample_position(sample, 3),
            ),
        );

        let lower = bdfd.sample_lower(sample);
        let upper = bdfd.sample_upper(sample);
        if qualifiers & QUALIFIER_SIGNED != 0 {
            w.line(5, &format!("\"sampleLower\":{space}{},", lower as i32));
            w.line(5, &format!("\"sampleUpper\":{space}{}", upper as i32));
        } else {
            w.line(5, &format!("\"sampleLower\":{space}{lower},"));
            w.line(5, &format!("\"sampleUpper\":{space}{upper}"));
        }

        if sample + 1 != samples {
            w.line(4, "},");
        } else {
            w.line(4, "}");
        }
    }
    w.line(3, "]");

    w.line(2, "}");
    w.line(1, "]");

    // No newline after the final brace; the caller decides.
    let spaces = w.base_indent * w.indent_width;
    for _ in 0..spaces {
        w.out.push(' ');
    }
    w.out.push('}');

    w.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfd::create_dfd_for_format;
    use crate::vk_format::VkFormat;

    fn r8_dfd() -> Vec<u32> {
        create_dfd_for_format(VkFormat::R8_UNORM).unwrap()
    }

    #[test]
    fn text_render_for_r8_unorm() {
        let text = render_dfd_text(&r8_dfd());
        let expected = "\
DFD total bytes: 44
BDB descriptor type: KHR_DF_KHR_DESCRIPTORTYPE_BASICFORMAT
Vendor ID: KHR_DF_VENDORID_KHRONOS
Descriptor block size: 40 (1 samples)
VersionNumber: KHR_DF_VERSIONNUMBER_1_3
Flags: 0x0 (KHR_DF_FLAG_ALPHA_STRAIGHT)
Transfer: KHR_DF_TRANSFER_LINEAR
Primaries: KHR_DF_PRIMARIES_SRGB
Model: KHR_DF_MODEL_RGBSDA
Dimensions: 1, 1, 1, 1
Plane bytes: 1, 0, 0, 0, 0, 0, 0, 0
Sample 0:
    Qualifiers: 0x0 ()
    Channel: 0x0 (KHR_DF_CHANNEL_RGBSDA_RED)
    Length: 8 bits Offset: 0
    Position: 0, 0, 0, 0
    Lower: 0x00000000
    Upper: 0x000000ff
";
        assert_eq!(text, expected);
    }

    #[test]
    fn text_render_is_stable() {
        let first = render_dfd_text(&r8_dfd());
        let second = render_dfd_text(&r8_dfd());
        assert_eq!(first, second);
    }

    #[test]
    fn json_minified_has_no_whitespace() {
        let json = render_dfd_json(&r8_dfd(), 1, 4, true);
        assert!(!json.contains(' '));
        assert!(!json.contains('\n'));
        assert!(json.starts_with("{\"totalSize\":44,"));
        assert!(json.contains("\"channelType\":\"KHR_DF_CHANNEL_RGBSDA_RED\""));
        assert!(json.ends_with("}"));
    }

    #[test]
    fn json_pretty_indents_with_base_offset() {
        let json = render_dfd_json(&r8_dfd(), 1, 4, false);
        let mut lines = json.lines();
        assert_eq!(lines.next(), Some("    {"));
        assert_eq!(lines.next(), Some("        \"totalSize\": 44,"));
        // Closing brace back at the base indent.
        assert_eq!(json.lines().last(), Some("    }"));
    }

    #[test]
    fn json_signed_samples_render_negative_lower() {
        let words = create_dfd_for_format(VkFormat::R8_SNORM).unwrap();
        let json = render_dfd_json(&words, 0, 4, true);
        assert!(json.contains("\"sampleLower\":-127"));
        assert!(json.contains("\"sampleUpper\":127"));
    }

    #[test]
    fn unknown_enum_values_render_as_integers() {
        let mut words = r8_dfd();
        // Corrupt the model byte (word 2 of the BDFD, low byte).
        words[3] = (words[3] & !0xFF) | 0xC8;
        let text = render_dfd_text(&words);
        assert!(text.contains("Model: 200"));
        let json = render_dfd_json(&words, 0, 4, true);
        assert!(json.contains("\"colorModel\":200"));
    }
}
