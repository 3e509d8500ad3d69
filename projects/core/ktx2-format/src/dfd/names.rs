//! Enum-value → canonical `KHR_DF_*` name tables.
//!
//! Every function is total over `u32`: unknown values yield `None` and the
//! printers fall back to the raw integer. Aliased values (version 1.0/1.1,
//! NTSC/SMTPE170M, SRGB/BT709 primaries, the DXT aliases of the BC models)
//! resolve to a single canonical spelling.

/// Name of a vendor id.
pub fn vendor_id_name(value: u32) -> Option<&'static str> {
    match value {
        0 => Some("KHR_DF_VENDORID_KHRONOS"),
        _ => None,
    }
}

/// Name of a descriptor type.
pub fn descriptor_type_name(value: u32) -> Option<&'static str> {
    match value {
        0 => Some("KHR_DF_KHR_DESCRIPTORTYPE_BASICFORMAT"),
        0x6001 => Some("KHR_DF_KHR_DESCRIPTORTYPE_ADDITIONAL_PLANES"),
        0x6002 => Some("KHR_DF_KHR_DESCRIPTORTYPE_ADDITIONAL_DIMENSIONS"),
        _ => None,
    }
}

/// Name of a descriptor version. 1.0 and 1.1 share the value 0; the 1.1
/// spelling is emitted for both.
pub fn version_number_name(value: u32) -> Option<&'static str> {
    match value {
        0 => Some("KHR_DF_VERSIONNUMBER_1_1"),
        1 => Some("KHR_DF_VERSIONNUMBER_1_2"),
        2 => Some("KHR_DF_VERSIONNUMBER_1_3"),
        _ => None,
    }
}

/// Name of a single flags bit (or of the zero value, which still has a
/// canonical spelling).
pub fn flags_bit_name(value: u32) -> Option<&'static str> {
    match value {
        0 => Some("KHR_DF_FLAG_ALPHA_STRAIGHT"),
        1 => Some("KHR_DF_FLAG_ALPHA_PREMULTIPLIED"),
        _ => None,
    }
}

/// Name of a transfer function.
pub fn transfer_function_name(value: u32) -> Option<&'static str> {
    match value {
        0 => Some("KHR_DF_TRANSFER_UNSPECIFIED"),
        1 => Some("KHR_DF_TRANSFER_LINEAR"),
        2 => Some("KHR_DF_TRANSFER_SRGB"),
        3 => Some("KHR_DF_TRANSFER_ITU"),
        4 => Some("KHR_DF_TRANSFER_NTSC"),
        5 => Some("KHR_DF_TRANSFER_SLOG"),
        6 => Some("KHR_DF_TRANSFER_SLOG2"),
        7 => Some("KHR_DF_TRANSFER_BT1886"),
        8 => Some("KHR_DF_TRANSFER_HLG_OETF"),
        9 => Some("KHR_DF_TRANSFER_HLG_EOTF"),
        10 => Some("KHR_DF_TRANSFER_PQ_EOTF"),
        11 => Some("KHR_DF_TRANSFER_PQ_OETF"),
        12 => Some("KHR_DF_TRANSFER_DCIP3"),
        13 => Some("KHR_DF_TRANSFER_PAL_OETF"),
        14 => Some("KHR_DF_TRANSFER_PAL625_EOTF"),
        15 => Some("KHR_DF_TRANSFER_ST240"),
        16 => Some("KHR_DF_TRANSFER_ACESCC"),
        17 => Some("KHR_DF_TRANSFER_ACESCCT"),
        18 => Some("KHR_DF_TRANSFER_ADOBERGB"),
        _ => None,
    }
}

/// Name of a color-primaries value.
pub fn color_primaries_name(value: u32) -> Option<&'static str> {
    match value {
        0 => Some("KHR_DF_PRIMARIES_UNSPECIFIED"),
        1 => Some("KHR_DF_PRIMARIES_SRGB"),
        2 => Some("KHR_DF_PRIMARIES_BT601_EBU"),
        3 => Some("KHR_DF_PRIMARIES_BT601_SMPTE"),
        4 => Some("KHR_DF_PRIMARIES_BT2020"),
        5 => Some("KHR_DF_PRIMARIES_CIEXYZ"),
        6 => Some("KHR_DF_PRIMARIES_ACES"),
        7 => Some("KHR_DF_PRIMARIES_ACESCC"),
        8 => Some("KHR_DF_PRIMARIES_NTSC1953"),
        9 => Some("KHR_DF_PRIMARIES_PAL525"),
        10 => Some("KHR_DF_PRIMARIES_DISPLAYP3"),
        11 => Some("KHR_DF_PRIMARIES_ADOBERGB"),
        _ => None,
    }
}

/// Name of a color model.
pub fn color_model_name(value: u32) -> Option<&'static str> {
    match value {
        0 => Some("KHR_DF_MODEL_UNSPECIFIED"),
        1 => Some("KHR_DF_MODEL_RGBSDA"),
        2 => Some("KHR_DF_MODEL_YUVSDA"),
        3 => Some("KHR_DF_MODEL_YIQSDA"),
        4 => Some("KHR_DF_MODEL_LABSDA"),
        5 => Some("KHR_DF_MODEL_CMYKA"),
        6 => Some("KHR_DF_MODEL_XYZW"),
        7 => Some("KHR_DF_MODEL_HSVA_ANG"),
        8 => Some("KHR_DF_MODEL_HSLA_ANG"),
        9 => Some("KHR_DF_MODEL_HSVA_HEX"),
        10 => Some("KHR_DF_MODEL_HSLA_HEX"),
        11 => Some("KHR_DF_MODEL_YCGCOA"),
        12 => Some("KHR_DF_MODEL_YCCBCCRC"),
        13 => Some("KHR_DF_MODEL_ICTCP"),
        14 => Some("KHR_DF_MODEL_CIEXYZ"),
        15 => Some("KHR_DF_MODEL_CIEXYY"),
        128 => Some("KHR_DF_MODEL_BC1A"),
        129 => Some("KHR_DF_MODEL_BC2"),
        130 => Some("KHR_DF_MODEL_BC3"),
        131 => Some("KHR_DF_MODEL_BC4"),
        132 => Some("KHR_DF_MODEL_BC5"),
        133 => Some("KHR_DF_MODEL_BC6H"),
        134 => Some("KHR_DF_MODEL_BC7"),
        160 => Some("KHR_DF_MODEL_ETC1"),
        161 => Some("KHR_DF_MODEL_ETC2"),
        162 => Some("KHR_DF_MODEL_ASTC"),
        163 => Some("KHR_DF_MODEL_ETC1S"),
        164 => Some("KHR_DF_MODEL_PVRTC"),
        165 => Some("KHR_DF_MODEL_PVRTC2"),
        166 => Some("KHR_DF_MODEL_UASTC"),
        _ => None,
    }
}

/// Name of one datatype-qualifier bit, in the shifted 4-bit domain used by
/// the sample accessors.
pub fn sample_qualifier_name(value: u32) -> Option<&'static str> {
    match value {
        1 => Some("KHR_DF_SAMPLE_DATATYPE_LINEAR"),
        2 => Some("KHR_DF_SAMPLE_DATATYPE_EXPONENT"),
        4 => Some("KHR_DF_SAMPLE_DATATYPE_SIGNED"),
        8 => Some("KHR_DF_SAMPLE_DATATYPE_FLOAT"),
        _ => None,
    }
}

/// Name of a channel id, dispatched on the color model first.
///
/// Models outside the named set fall back to a short positional table
/// (`R`, `G`, `B`, `3`..`9`, `a`..`e`, `A`) for compatibility with the
/// established `info` output.
pub fn channel_id_name(model: u32, value: u32) -> Option<&'static str> {
    let named = match model {
        // RGBSDA
        1 => match value {
            0 => Some("KHR_DF_CHANNEL_RGBSDA_RED"),
            1 => Some("KHR_DF_CHANNEL_RGBSDA_GREEN"),
            2 => Some("KHR_DF_CHANNEL_RGBSDA_BLUE"),
            13 => Some("KHR_DF_CHANNEL_RGBSDA_STENCIL"),
            14 => Some("KHR_DF_CHANNEL_RGBSDA_DEPTH"),
            15 => Some("KHR_DF_CHANNEL_RGBSDA_ALPHA"),
            _ => None,
        },
        // YUVSDA
        2 => match value {
            0 => Some("KHR_DF_CHANNEL_YUVSDA_Y"),
            1 => Some("KHR_DF_CHANNEL_YUVSDA_U"),
            2 => Some("KHR_DF_CHANNEL_YUVSDA_V"),
            13 => Some("KHR_DF_CHANNEL_YUVSDA_STENCIL"),
            14 => Some("KHR_DF_CHANNEL_YUVSDA_DEPTH"),
            15 => Some("KHR_DF_CHANNEL_YUVSDA_ALPHA"),
            _ => None,
        },
        // YIQSDA
        3 => match value {
            0 => Some("KHR_DF_CHANNEL_YIQSDA_Y"),
            1 => Some("KHR_DF_CHANNEL_YIQSDA_I"),
            2 => Some("KHR_DF_CHANNEL_YIQSDA_Q"),
            13 => Some("KHR_DF_CHANNEL_YIQSDA_STENCIL"),
            14 => Some("KHR_DF_CHANNEL_YIQSDA_DEPTH"),
            15 => Some("KHR_DF_CHANNEL_YIQSDA_ALPHA"),
            _ => None,
        },
        // LABSDA
        4 => match value {
            0 => Some("KHR_DF_CHANNEL_LABSDA_L"),
            1 => Some("KHR_DF_CHANNEL_LABSDA_A"),
            2 => Some("KHR_DF_CHANNEL_LABSDA_B"),
            13 => Some("KHR_DF_CHANNEL_LABSDA_STENCIL"),
            14 => Some("KHR_DF_CHANNEL_LABSDA_DEPTH"),
            15 => Some("KHR_DF_CHANNEL_LABSDA_ALPHA"),
            _ => None,
        },
        // CMYKA
        5 => match value {
            0 => Some("KHR_DF_CHANNEL_CMYKSDA_CYAN"),
            1 => Some("KHR_DF_CHANNEL_CMYKSDA_MAGENTA"),
            2 => Some("KHR_DF_CHANNEL_CMYKSDA_YELLOW"),
            3 => Some("KHR_DF_CHANNEL_CMYKSDA_BLACK"),
            15 => Some("KHR_DF_CHANNEL_CMYKSDA_ALPHA"),
            _ => None,
        },
        // XYZW
        6 => match value {
            0 => Some("KHR_DF_CHANNEL_XYZW_X"),
            1 => Some("KHR_DF_CHANNEL_XYZW_Y"),
            2 => Some("KHR_DF_CHANNEL_XYZW_Z"),
            3 => Some("KHR_DF_CHANNEL_XYZW_W"),
            _ => None,
        },
        // HSVA_ANG
        7 => match value {
            0 => Some("KHR_DF_CHANNEL_HSVA_ANG_VALUE"),
            1 => Some("KHR_DF_CHANNEL_HSVA_ANG_SATURATION"),
            2 => Some("KHR_DF_CHANNEL_HSVA_ANG_HUE"),
            15 => Some("KHR_DF_CHANNEL_HSVA_ANG_ALPHA"),
            _ => None,
        },
        // HSLA_ANG
        8 => match value {
            0 => Some("KHR_DF_CHANNEL_HSLA_ANG_LIGHTNESS"),
            1 => Some("KHR_DF_CHANNEL_HSLA_ANG_SATURATION"),
            2 => Some("KHR_DF_CHANNEL_HSLA_ANG_HUE"),
            15 => Some("KHR_DF_CHANNEL_HSLA_ANG_ALPHA"),
            _ => None,
        },
        // HSVA_HEX
        9 => match value {
            0 => Some("KHR_DF_CHANNEL_HSVA_HEX_VALUE"),
            1 => Some("KHR_DF_CHANNEL_HSVA_HEX_SATURATION"),
            2 => Some("KHR_DF_CHANNEL_HSVA_HEX_HUE"),
            15 => Some("KHR_DF_CHANNEL_HSVA_HEX_ALPHA"),
            _ => None,
        },
        // HSLA_HEX
        10 => match value {
            0 => Some("KHR_DF_CHANNEL_HSLA_HEX_LIGHTNESS"),
            1 => Some("KHR_DF_CHANNEL_HSLA_HEX_SATURATION"),
            2 => Some("KHR_DF_CHANNEL_HSLA_HEX_HUE"),
            15 => Some("KHR_DF_CHANNEL_HSLA_HEX_ALPHA"),
            _ => None,
        },
        // YCGCOA
        11 => match value {
            0 => Some("KHR_DF_CHANNEL_YCGCOA_Y"),
            1 => Some("KHR_DF_CHANNEL_YCGCOA_CG"),
            2 => Some("KHR_DF_CHANNEL_YCGCOA_CO"),
            15 => Some("KHR_DF_CHANNEL_YCGCOA_ALPHA"),
            _ => None,
        },
        // CIEXYZ
        14 => match value {
            0 => Some("KHR_DF_CHANNEL_CIEXYZ_X"),
            1 => Some("KHR_DF_CHANNEL_CIEXYZ_Y"),
            2 => Some("KHR_DF_CHANNEL_CIEXYZ_Z"),
            _ => None,
        },
        // CIEXYY
        15 => match value {
            0 => Some("KHR_DF_CHANNEL_CIEXYY_X"),
            1 => Some("KHR_DF_CHANNEL_CIEXYY_YCHROMA"),
            2 => Some("KHR_DF_CHANNEL_CIEXYY_YLUMA"),
            _ => None,
        },
        // BC1A
        128 => match value {
            0 => Some("KHR_DF_CHANNEL_BC1A_COLOR"),
            1 => Some("KHR_DF_CHANNEL_BC1A_ALPHA"),
            _ => None,
        },
        // BC2
        129 => match value {
            0 => Some("KHR_DF_CHANNEL_BC2_COLOR"),
            15 => Some("KHR_DF_CHANNEL_BC2_ALPHA"),
            _ => None,
        },
        // BC3
        130 => match value {
            0 => Some("KHR_DF_CHANNEL_BC3_COLOR"),
            15 => Some("KHR_DF_CHANNEL_BC3_ALPHA"),
            _ => None,
        },
        // BC4
        131 => match value {
            0 => Some("KHR_DF_CHANNEL_BC4_DATA"),
            _ => None,
        },
        // BC5
        132 => match value {
            0 => Some("KHR_DF_CHANNEL_BC5_RED"),
            1 => Some("KHR_DF_CHANNEL_BC5_GREEN"),
            _ => None,
        },
        // BC6H
        133 => match value {
            0 => Some("KHR_DF_CHANNEL_BC6H_COLOR"),
            _ => None,
        },
        // BC7
        134 => match value {
            0 => Some("KHR_DF_CHANNEL_BC7_COLOR"),
            _ => None,
        },
        // ETC1
        160 => match value {
            0 => Some("KHR_DF_CHANNEL_ETC1_COLOR"),
            _ => None,
        },
        // ETC2
        161 => match value {
            0 => Some("KHR_DF_CHANNEL_ETC2_RED"),
            1 => Some("KHR_DF_CHANNEL_ETC2_GREEN"),
            2 => Some("KHR_DF_CHANNEL_ETC2_COLOR"),
            15 => Some("KHR_DF_CHANNEL_ETC2_ALPHA"),
            _ => None,
        },
        // ASTC
        162 => match value {
            0 => Some("KHR_DF_CHANNEL_ASTC_DATA"),
            _ => None,
        },
        // ETC1S
        163 => match value {
            0 => Some("KHR_DF_CHANNEL_ETC1S_RGB"),
            3 => Some("KHR_DF_CHANNEL_ETC1S_RRR"),
            4 => Some("KHR_DF_CHANNEL_ETC1S_GGG"),
            15 => Some("KHR_DF_CHANNEL_ETC1S_AAA"),
            _ => None,
        },
        // PVRTC
        164 => match value {
            0 => Some("KHR_DF_CHANNEL_PVRTC_COLOR"),
            _ => None,
        },
        // PVRTC2
        165 => match value {
            0 => Some("KHR_DF_CHANNEL_PVRTC2_COLOR"),
            _ => None,
        },
        // UASTC
        166 => match value {
            0 => Some("KHR_DF_CHANNEL_UASTC_RGB"),
            3 => Some("KHR_DF_CHANNEL_UASTC_RGBA"),
            4 => Some("KHR_DF_CHANNEL_UASTC_RRR"),
            5 => Some("KHR_DF_CHANNEL_UASTC_RRRG"),
            6 => Some("KHR_DF_CHANNEL_UASTC_RG"),
            _ => None,
        },
        // Only models outside the named set use the positional fallback.
        _ => return fallback_channel_name(value),
    };
    named
}

fn fallback_channel_name(value: u32) -> Option<&'static str> {
    match value {
        0 => Some("R"),
        1 => Some("G"),
        2 => Some("B"),
        3 => Some("3"),
        4 => Some("4"),
        5 => Some("5"),
        6 => Some("6"),
        7 => Some("7"),
        8 => Some("8"),
        9 => Some("9"),
        10 => Some("a"),
        11 => Some("b"),
        12 => Some("c"),
        13 => Some("d"),
        14 => Some("e"),
        15 => Some("A"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn version_aliases_resolve_to_1_1() {
        assert_eq!(version_number_name(0), Some("KHR_DF_VERSIONNUMBER_1_1"));
        assert_eq!(version_number_name(2), Some("KHR_DF_VERSIONNUMBER_1_3"));
        assert_eq!(version_number_name(9), None);
    }

    #[test]
    fn unknown_values_are_none() {
        assert_eq!(color_model_name(200), None);
        assert_eq!(transfer_function_name(19), None);
        assert_eq!(color_primaries_name(12), None);
        assert_eq!(sample_qualifier_name(3), None);
    }

    #[rstest]
    #[case(1, 0, "KHR_DF_CHANNEL_RGBSDA_RED")]
    #[case(1, 15, "KHR_DF_CHANNEL_RGBSDA_ALPHA")]
    #[case(163, 4, "KHR_DF_CHANNEL_ETC1S_GGG")]
    #[case(166, 5, "KHR_DF_CHANNEL_UASTC_RRRG")]
    #[case(130, 15, "KHR_DF_CHANNEL_BC3_ALPHA")]
    fn named_channels(#[case] model: u32, #[case] channel: u32, #[case] expected: &str) {
        assert_eq!(channel_id_name(model, channel), Some(expected));
    }

    #[rstest]
    #[case(0, "R")]
    #[case(2, "B")]
    #[case(3, "3")]
    #[case(10, "a")]
    #[case(15, "A")]
    fn unknown_model_falls_back_to_positional_table(#[case] channel: u32, #[case] expected: &str) {
        // Model 99 is not in the named set.
        assert_eq!(channel_id_name(99, channel), Some(expected));
    }

    #[test]
    fn named_model_with_unnamed_channel_is_unknown() {
        // BC7 only names channel 0; other values do not use the fallback.
        assert_eq!(channel_id_name(134, 5), None);
        assert_eq!(channel_id_name(99, 16), None);
    }
}
