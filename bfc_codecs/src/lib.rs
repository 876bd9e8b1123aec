mod gzip_codec;
mod lzma_codec;
mod zstd_codec;

pub use gzip_codec::GzipCodec;
pub use lzma_codec::LzmaCodec;
pub use zstd_codec::ZstdCodec;

use std::path::Path;
use std::sync::Arc;

use bfc_core::{
    BatchResult, Codec, CompressOptions, DecompressOptions, Error, FileResult, Registry,
};

/// The standard registry: lzma, zstd, gzip, in listing order.
///
/// Built fresh per call; the codecs are stateless unit structs, so this is
/// a handful of allocations and nothing more.
pub fn default_registry() -> Registry {
    Registry::new(vec![
        Arc::new(LzmaCodec),
        Arc::new(ZstdCodec),
        Arc::new(GzipCodec),
    ])
}

/// Names of the algorithms whose backends are present in this build.
pub fn available_algorithms() -> Vec<&'static str> {
    default_registry()
        .list()
        .iter()
        .filter(|c| c.is_available())
        .map(|c| c.name())
        .collect()
}

// Convenience entry points over the standard registry, for callers that
// don't need to assemble their own codec table.

pub fn compress_file(
    source: &Path,
    algorithm: &str,
    opts: &CompressOptions,
) -> Result<FileResult, Error> {
    bfc_core::compress_file(&default_registry(), source, algorithm, opts)
}

pub fn compress_files_in_folder(
    folder: &Path,
    algorithm: &str,
    pattern: &str,
    opts: &CompressOptions,
) -> Result<BatchResult, Error> {
    bfc_core::compress_folder(&default_registry(), folder, algorithm, pattern, opts)
}

pub fn decompress_file(source: &Path, opts: &DecompressOptions) -> Result<FileResult, Error> {
    bfc_core::decompress_file(&default_registry(), source, opts)
}

pub fn decompress_file_to_folder(
    source: &Path,
    output_folder: &Path,
    opts: &DecompressOptions,
) -> Result<FileResult, Error> {
    bfc_core::decompress_file_to_folder(&default_registry(), source, output_folder, opts)
}

pub fn decompress_files_in_folder(
    folder: &Path,
    output_folder: &Path,
    algorithm: Option<&str>,
    opts: &DecompressOptions,
) -> Result<BatchResult, Error> {
    bfc_core::decompress_folder(&default_registry(), folder, output_folder, algorithm, opts)
}
