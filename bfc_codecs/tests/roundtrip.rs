use std::fs;
use std::path::Path;

use bfc_codecs::{
    available_algorithms, compress_file, decompress_file, decompress_file_to_folder,
};
use bfc_core::{CompressOptions, DecompressOptions, Error, Outcome};

/// Repeating-pattern bytes, sized past the internal stream buffers.
fn compressible_bytes(len: usize) -> Vec<u8> {
    let pattern = b"step,temp,pressure\n42,293.15,101.325\n";
    (0..len).map(|i| pattern[i % pattern.len()]).collect()
}

fn roundtrip(algorithm: &str, extension: &str) {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let source = dir.path().join("data.csv");
    let original = compressible_bytes(300 * 1024 + 17);
    fs::write(&source, &original).unwrap();

    let compressed = compress_file(&source, algorithm, &CompressOptions::default()).unwrap();
    assert!(compressed.is_success());
    assert_eq!(compressed.dest, dir.path().join(format!("data.csv{extension}")));
    assert_eq!(compressed.source_bytes, original.len() as u64);
    assert!(
        compressed.dest_bytes < compressed.source_bytes,
        "{algorithm} should shrink repetitive input: {} -> {}",
        compressed.source_bytes,
        compressed.dest_bytes
    );

    let restored =
        decompress_file_to_folder(&compressed.dest, out.path(), &DecompressOptions::default())
            .unwrap();
    assert!(restored.is_success());
    assert_eq!(restored.algorithm, algorithm);
    assert_eq!(restored.dest, out.path().join("data.csv"));
    assert_eq!(fs::read(&restored.dest).unwrap(), original);
}

#[test]
fn lzma_roundtrip_is_byte_exact() {
    roundtrip("lzma", ".xz");
}

#[test]
fn gzip_roundtrip_is_byte_exact() {
    roundtrip("gzip", ".gz");
}

#[test]
#[cfg(feature = "zstd")]
fn zstd_roundtrip_is_byte_exact() {
    roundtrip("zstd", ".zst");
}

#[test]
fn empty_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let source = dir.path().join("empty.csv");
    fs::write(&source, b"").unwrap();

    let compressed = compress_file(&source, "gzip", &CompressOptions::default()).unwrap();
    assert!(compressed.is_success());
    assert!(compressed.dest_bytes > 0, "gz framing is never zero bytes");

    let restored =
        decompress_file_to_folder(&compressed.dest, out.path(), &DecompressOptions::default())
            .unwrap();
    assert!(restored.is_success());
    assert_eq!(fs::read(&restored.dest).unwrap(), b"");
}

#[test]
fn decompress_in_place_strips_the_extension_next_to_the_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("data.csv");
    let original = compressible_bytes(4 * 1024);
    fs::write(&source, &original).unwrap();

    let compressed = compress_file(
        &source,
        "gzip",
        &CompressOptions {
            keep_original: false,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(compressed.is_success());
    assert!(!source.exists());

    let restored = decompress_file(&compressed.dest, &DecompressOptions::default()).unwrap();
    assert!(restored.is_success());
    assert_eq!(restored.dest, source);
    assert_eq!(fs::read(&source).unwrap(), original);
}

#[test]
fn keep_compressed_false_removes_the_archive_after_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let source = dir.path().join("data.csv");
    fs::write(&source, compressible_bytes(4 * 1024)).unwrap();

    let compressed = compress_file(&source, "gzip", &CompressOptions::default()).unwrap();
    let restored = decompress_file_to_folder(
        &compressed.dest,
        out.path(),
        &DecompressOptions {
            keep_compressed: false,
            ..Default::default()
        },
    )
    .unwrap();

    assert!(restored.is_success());
    assert!(!compressed.dest.exists());
    assert!(out.path().join("data.csv").exists());
}

#[test]
fn existing_destination_is_refused_unless_overwrite_is_set() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("data.csv");
    fs::write(&source, compressible_bytes(4 * 1024)).unwrap();

    let first = compress_file(&source, "gzip", &CompressOptions::default()).unwrap();
    assert!(first.is_success());

    let second = compress_file(&source, "gzip", &CompressOptions::default()).unwrap();
    assert!(matches!(
        second.outcome,
        Outcome::Failed(Error::DestinationExists(_))
    ));

    let forced = compress_file(
        &source,
        "gzip",
        &CompressOptions {
            overwrite: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(forced.is_success());
}

#[test]
fn out_of_range_level_is_rejected_before_any_io() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("data.csv");
    fs::write(&source, compressible_bytes(1024)).unwrap();

    let err = compress_file(
        &source,
        "gzip",
        &CompressOptions {
            level: Some(99),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidLevel { level: 99, .. }));
    assert!(!dir.path().join("data.csv.gz").exists());
}

#[test]
fn unrecognized_extension_is_rejected_up_front() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("data.bin");
    fs::write(&source, b"not compressed").unwrap();

    let err = decompress_file(&source, &DecompressOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnrecognizedExtension(_)));
}

#[test]
fn failed_decompression_reports_instead_of_crashing() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let source = dir.path().join("broken.csv.gz");
    fs::write(&source, b"this is not a gzip stream").unwrap();

    let result =
        decompress_file_to_folder(&source, out.path(), &DecompressOptions::default()).unwrap();
    assert!(matches!(result.outcome, Outcome::Failed(Error::Io { .. })));
    // No truncated destination is left behind.
    assert!(!out.path().join("broken.csv").exists());
}

#[test]
fn every_bundled_algorithm_is_listed() {
    let algorithms = available_algorithms();
    assert!(algorithms.contains(&"lzma"));
    assert!(algorithms.contains(&"gzip"));
    if cfg!(feature = "zstd") {
        assert!(algorithms.contains(&"zstd"));
    } else {
        assert!(!algorithms.contains(&"zstd"));
    }
}

#[test]
fn compression_appends_never_replaces_the_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("report.2024.csv");
    fs::write(&source, compressible_bytes(1024)).unwrap();

    let result = compress_file(&source, "gzip", &CompressOptions::default()).unwrap();
    assert_eq!(
        result.dest.file_name().unwrap(),
        Path::new("report.2024.csv.gz")
    );
}
