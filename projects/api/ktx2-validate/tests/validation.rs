//! End-to-end validation scenarios over in-memory KTX2 files.

mod common;

use common::Ktx2FileBuilder;
use ktx2_validate::{validate_memory, ValidationOptions, ValidationReport};
use rstest::rstest;

fn run(data: &[u8]) -> (i32, Vec<ValidationReport>) {
    run_with(data, ValidationOptions::default())
}

fn run_with(data: &[u8], options: ValidationOptions) -> (i32, Vec<ValidationReport>) {
    let mut reports = Vec::new();
    let code = validate_memory(data, options, |report| reports.push(report.clone()));
    (code, reports)
}

fn ids(reports: &[ValidationReport]) -> Vec<u16> {
    reports.iter().map(|report| report.id).collect()
}

// ------------------------------------------------------------------ S1-S7

#[test]
fn well_formed_rgba8_is_clean() {
    let (code, reports) = run(&Ktx2FileBuilder::rgba8_4x4().build());
    assert_eq!(code, 0, "unexpected reports: {reports:?}");
    assert!(reports.is_empty());
}

#[test]
fn corrupted_identifier_is_fatal_2001_and_stops() {
    let mut data = Ktx2FileBuilder::rgba8_4x4().build();
    data[0] = 0x00;
    let (code, reports) = run(&data);
    assert_eq!(code, 3);
    assert_eq!(ids(&reports), vec![2001]);
    assert_eq!(reports[0].severity.name(), "fatal");
}

#[test]
fn cube_map_with_unequal_dimensions_reports_3008() {
    let mut builder = Ktx2FileBuilder::rgba8_4x4();
    builder.pixel_width = 64;
    builder.pixel_height = 32;
    builder.face_count = 6;
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 3);
    assert_eq!(ids(&reports), vec![3008]);
    assert_eq!(
        reports[0].details,
        "pixelWidth is 64 and pixelHeight is 32, but for a cube map they must be equal."
    );
}

#[test]
fn basis_lz_with_concrete_format_reports_3004() {
    let mut builder = Ktx2FileBuilder::rgba8_4x4();
    builder.supercompression_scheme = 1;
    builder.type_size = 1;
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&3004));
}

#[test]
fn writer_sc_params_without_writer_reports_7124() {
    let builder =
        Ktx2FileBuilder::rgba8_4x4().with_key_value("KTXwriterScParams", b"--uastc\0");
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&7124));
}

#[test]
fn writer_without_sc_params_is_clean() {
    let builder = Ktx2FileBuilder::rgba8_4x4().with_key_value("KTXwriter", b"test writer 1.0\0");
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 0, "unexpected reports: {reports:?}");
}

#[test]
fn missing_writer_with_other_metadata_warns_7125() {
    let builder = Ktx2FileBuilder::rgba8_4x4().with_key_value("KTXorientation", b"rd\0");
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 0);
    assert_eq!(ids(&reports), vec![7125]);
    assert_eq!(reports[0].severity.name(), "warning");
}

#[test]
fn out_of_order_keys_report_7012() {
    let builder = Ktx2FileBuilder::rgba8_4x4()
        .with_key_value("KTXwriter", b"w\0")
        .with_key_value("KTXorientation", b"rd\0");
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&7012));
    // Per-key checks still ran over the sorted copy, so no spurious
    // unknown-key or missing-writer issues appear.
    assert!(!ids(&reports).contains(&7009));
    assert!(!ids(&reports).contains(&7125));
}

#[test]
fn duplicate_keys_report_7013() {
    let builder = Ktx2FileBuilder::rgba8_4x4()
        .with_key_value("KTXwriter", b"first\0")
        .with_key_value("KTXwriter", b"second\0");
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&7013));
}

#[test]
fn dfd_total_size_mismatch_reports_5001() {
    let mut builder = Ktx2FileBuilder::rgba8_4x4();
    builder.dfd_words[0] = 36;
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&5001));
}

// ------------------------------------------------------------- boundaries

#[test]
fn layer_count_zero_and_one_are_equivalent() {
    let mut zero = Ktx2FileBuilder::rgba8_4x4();
    zero.layer_count = 0;
    let mut one = Ktx2FileBuilder::rgba8_4x4();
    one.layer_count = 1;
    let (zero_code, zero_reports) = run(&zero.build());
    let (one_code, one_reports) = run(&one.build());
    assert_eq!(zero_code, one_code);
    assert_eq!(ids(&zero_reports), ids(&one_reports));
}

#[test]
fn full_mip_pyramid_passes_and_one_extra_level_reports_3016() {
    let mut full = Ktx2FileBuilder::rgba8_4x4();
    full.level_count = 3;
    let (code, reports) = run(&full.build());
    assert_eq!(code, 0, "unexpected reports: {reports:?}");

    let mut excess = Ktx2FileBuilder::rgba8_4x4();
    excess.level_count = 4;
    let (code, reports) = run(&excess.build());
    assert_eq!(code, 3);
    assert_eq!(ids(&reports), vec![3016]);
}

#[test]
fn one_hundred_metadata_entries_pass_and_one_more_reports_7001() {
    let mut accepted = Ktx2FileBuilder::rgba8_4x4();
    for index in 0..100 {
        accepted = accepted.with_key_value(&format!("key{index:03}"), b"v\0");
    }
    let (code, reports) = run(&accepted.build());
    assert_eq!(code, 0, "unexpected errors: {reports:?}");
    assert!(!ids(&reports).contains(&7001));

    let mut rejected = Ktx2FileBuilder::rgba8_4x4();
    for index in 0..101 {
        rejected = rejected.with_key_value(&format!("key{index:03}"), b"v\0");
    }
    let (code, reports) = run(&rejected.build());
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&7001));
}

// ------------------------------------------------------------- properties

#[test]
fn every_flipped_identifier_byte_is_fatal_2001() {
    for position in 0..12 {
        let mut data = Ktx2FileBuilder::rgba8_4x4().build();
        data[position] ^= 0xFF;
        let (code, reports) = run(&data);
        assert_eq!(code, 3, "identifier byte {position}");
        assert_eq!(ids(&reports), vec![2001], "identifier byte {position}");
    }
}

#[test]
fn warnings_as_errors_is_monotonic() {
    let data = Ktx2FileBuilder::rgba8_4x4()
        .with_key_value("myCustomKey", b"v\0")
        .build();

    let (relaxed_code, relaxed_reports) = run(&data);
    assert_eq!(relaxed_code, 0);
    assert!(relaxed_reports
        .iter()
        .all(|report| report.severity.name() == "warning"));

    let strict = ValidationOptions {
        warnings_as_errors: true,
        ..Default::default()
    };
    let (strict_code, strict_reports) = run_with(&data, strict);
    assert_eq!(strict_code, 3);
    // The reports keep their warning severity; only counting changes.
    assert_eq!(ids(&relaxed_reports), ids(&strict_reports));
}

#[test]
fn contiguous_regions_produce_no_index_errors() {
    let data = Ktx2FileBuilder::rgba8_4x4()
        .with_key_value("KTXwriter", b"w\0")
        .build();
    let (_, reports) = run(&data);
    assert!(ids(&reports)
        .iter()
        .all(|id| !(3020..=3034).contains(id)));
}

// ----------------------------------------------------- format dispatches

#[test]
fn zstd_supercompressed_rgba8_is_clean() {
    let (code, reports) = run(&Ktx2FileBuilder::rgba8_4x4().with_zstd().build());
    assert_eq!(code, 0, "unexpected reports: {reports:?}");
}

#[test]
fn zstd_with_sized_bytes_plane_reports_5007() {
    let mut builder = Ktx2FileBuilder::rgba8_4x4();
    builder.supercompression_scheme = 2;
    builder.type_size = 1;
    // bytesPlane0 still carries the uncompressed value.
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&5007));
}

#[test]
fn basis_lz_rgb_file_is_clean() {
    let (code, reports) = run(&Ktx2FileBuilder::basis_lz(1).build());
    assert_eq!(code, 0, "unexpected reports: {reports:?}");
}

#[test]
fn basis_lz_rgba_file_is_clean() {
    let (code, reports) = run(&Ktx2FileBuilder::basis_lz(2).build());
    assert_eq!(code, 0, "unexpected reports: {reports:?}");
}

#[test]
fn basis_lz_alpha_mismatch_reports_8006() {
    let mut builder = Ktx2FileBuilder::basis_lz(2);
    // Global data claims no alpha slices while the DFD has two samples.
    builder.sgd = common::basis_lz_sgd(1, false);
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&8006));
}

#[test]
fn basis_lz_with_wrong_model_reports_5013() {
    let mut builder = Ktx2FileBuilder::basis_lz(1);
    // Patch the color model byte to RGBSDA.
    builder.dfd_words[3] = (builder.dfd_words[3] & !0xFF) | 1;
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&5013));
}

#[test]
fn uastc_file_is_clean() {
    let (code, reports) = run(&Ktx2FileBuilder::uastc_4x4().build());
    assert_eq!(code, 0, "unexpected reports: {reports:?}");
}

#[test]
fn uastc_with_wrong_bit_length_reports_5016() {
    let mut builder = Ktx2FileBuilder::uastc_4x4();
    let sample_word = builder.dfd_words[7];
    builder.dfd_words[7] = (sample_word & !(0xFF << 16)) | (63 << 16);
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&5016));
}

#[rstest]
#[case::prohibited(53, 3001)] // A8B8G8R8_USCALED_PACK32
#[case::invalid(185, 3002)]
fn format_classification(#[case] vk_format: u32, #[case] expected: u16) {
    let mut builder = Ktx2FileBuilder::rgba8_4x4();
    builder.vk_format = vk_format;
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&expected));
}

#[test]
fn unknown_extension_format_warns_3003() {
    let mut builder = Ktx2FileBuilder::rgba8_4x4();
    builder.vk_format = 100_000;
    let (_, reports) = run(&builder.build());
    assert!(ids(&reports).contains(&3003));
    let report = reports.iter().find(|report| report.id == 3003).unwrap();
    assert_eq!(report.severity.name(), "warning");
}

// ------------------------------------------------------------ glTF check

#[test]
fn gltf_basisu_accepts_uastc() {
    let options = ValidationOptions {
        check_gltf_basisu: true,
        ..Default::default()
    };
    let (code, reports) = run_with(&Ktx2FileBuilder::uastc_4x4().build(), options);
    assert_eq!(code, 0, "unexpected reports: {reports:?}");
}

#[test]
fn gltf_basisu_rejects_plain_rgba8() {
    let options = ValidationOptions {
        check_gltf_basisu: true,
        ..Default::default()
    };
    let (code, reports) = run_with(&Ktx2FileBuilder::rgba8_4x4().build(), options);
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&9001));
}

// ------------------------------------------------------- payload and SGD

#[test]
fn truncated_payload_reports_2003() {
    let mut data = Ktx2FileBuilder::rgba8_4x4().build();
    data.truncate(data.len() - 8);
    let (code, reports) = run(&data);
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&2003));
}

#[test]
fn sgd_for_scheme_without_global_data_reports_8002() {
    let mut builder = Ktx2FileBuilder::rgba8_4x4().with_zstd();
    builder.sgd = vec![0; 16];
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&8002));
}

#[test]
fn unsorted_level_lengths_report_4010() {
    // UNDEFINED format so only the structural rules apply; make the
    // larger mip smaller than the smaller one.
    let mut builder = Ktx2FileBuilder::uastc_4x4();
    builder.pixel_width = 8;
    builder.pixel_height = 8;
    builder.level_count = 2;
    builder.level_sizes = Some(vec![16, 64]);
    let (code, reports) = run(&builder.build());
    assert_eq!(code, 3);
    assert!(ids(&reports).contains(&4010));
}
