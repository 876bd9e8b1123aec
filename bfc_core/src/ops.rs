use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::codec::Codec;
use crate::error::Error;
use crate::registry::Registry;
use crate::result::{FileResult, Outcome};

/// Options for compressing a file or a folder of files.
#[derive(Debug, Clone)]
pub struct CompressOptions {
    /// Compression level; the codec's default when `None`.
    pub level: Option<u32>,
    /// Keep the source file after a successful compression.
    pub keep_original: bool,
    /// Replace an existing destination instead of refusing.
    pub overwrite: bool,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            level: None,
            keep_original: true,
            overwrite: false,
        }
    }
}

/// Options for decompressing a file or a folder of files.
#[derive(Debug, Clone)]
pub struct DecompressOptions {
    /// Keep the compressed source after a successful decompression.
    pub keep_compressed: bool,
    /// Replace an existing destination instead of refusing.
    pub overwrite: bool,
}

impl Default for DecompressOptions {
    fn default() -> Self {
        Self {
            keep_compressed: true,
            overwrite: false,
        }
    }
}

/// Compress a single file with the named algorithm.
///
/// Destination is the source path with the codec extension appended
/// (`data.csv` → `data.csv.gz`); an existing suffix is never replaced.
///
/// Registry and level errors propagate as `Err` — they are caller
/// mistakes. I/O trouble during the operation itself is captured in the
/// returned result's outcome instead, so batch callers can keep going.
pub fn compress_file(
    registry: &Registry,
    source: &Path,
    algorithm: &str,
    opts: &CompressOptions,
) -> Result<FileResult, Error> {
    let codec = registry.resolve(algorithm)?;
    let level = validate_level(codec.as_ref(), opts.level)?;
    Ok(compress_one(codec.as_ref(), level, source, opts))
}

/// Decompress a single file, inferring the algorithm from its extension.
/// The output lands next to the source with the extension stripped.
pub fn decompress_file(
    registry: &Registry,
    source: &Path,
    opts: &DecompressOptions,
) -> Result<FileResult, Error> {
    let codec = registry.by_extension(source)?;
    Ok(decompress_one(codec.as_ref(), source, None, opts))
}

/// Decompress a single file into `output_folder`, creating it if absent.
pub fn decompress_file_to_folder(
    registry: &Registry,
    source: &Path,
    output_folder: &Path,
    opts: &DecompressOptions,
) -> Result<FileResult, Error> {
    let codec = registry.by_extension(source)?;
    Ok(decompress_one(codec.as_ref(), source, Some(output_folder), opts))
}

/// Substitute the codec default for a missing level, reject an
/// out-of-range one. Runs before any file is touched.
pub(crate) fn validate_level(codec: &dyn Codec, level: Option<u32>) -> Result<u32, Error> {
    let range = codec.levels();
    match level {
        None => Ok(range.default),
        Some(level) if range.contains(level) => Ok(level),
        Some(level) => Err(Error::InvalidLevel {
            algorithm: codec.name(),
            level,
            min: range.min,
            max: range.max,
        }),
    }
}

pub(crate) fn compress_one(
    codec: &dyn Codec,
    level: u32,
    source: &Path,
    opts: &CompressOptions,
) -> FileResult {
    let dest = appended_path(source, codec.extension());
    let start = Instant::now();
    let run = run_compress(codec, level, source, &dest, opts);
    let elapsed = start.elapsed();
    match run {
        Ok((source_bytes, dest_bytes)) => {
            log::debug!(
                "compressed {} -> {} ({} -> {} bytes)",
                source.display(),
                dest.display(),
                source_bytes,
                dest_bytes
            );
            FileResult {
                source: source.to_path_buf(),
                dest,
                algorithm: codec.name(),
                source_bytes,
                dest_bytes,
                elapsed,
                outcome: Outcome::Success,
            }
        }
        Err(err) => {
            log::debug!("compressing {} failed: {}", source.display(), err);
            FileResult {
                source: source.to_path_buf(),
                dest,
                algorithm: codec.name(),
                source_bytes: 0,
                dest_bytes: 0,
                elapsed,
                outcome: Outcome::Failed(err),
            }
        }
    }
}

pub(crate) fn decompress_one(
    codec: &dyn Codec,
    source: &Path,
    output_folder: Option<&Path>,
    opts: &DecompressOptions,
) -> FileResult {
    let dest = stripped_path(source, output_folder);
    let start = Instant::now();
    let run = run_decompress(codec, source, &dest, opts);
    let elapsed = start.elapsed();
    match run {
        Ok((source_bytes, dest_bytes)) => {
            log::debug!(
                "decompressed {} -> {} ({} -> {} bytes)",
                source.display(),
                dest.display(),
                source_bytes,
                dest_bytes
            );
            FileResult {
                source: source.to_path_buf(),
                dest,
                algorithm: codec.name(),
                source_bytes,
                dest_bytes,
                elapsed,
                outcome: Outcome::Success,
            }
        }
        Err(err) => {
            log::debug!("decompressing {} failed: {}", source.display(), err);
            FileResult {
                source: source.to_path_buf(),
                dest,
                algorithm: codec.name(),
                source_bytes: 0,
                dest_bytes: 0,
                elapsed,
                outcome: Outcome::Failed(err),
            }
        }
    }
}

fn run_compress(
    codec: &dyn Codec,
    level: u32,
    source: &Path,
    dest: &Path,
    opts: &CompressOptions,
) -> Result<(u64, u64), Error> {
    if dest.exists() && !opts.overwrite {
        return Err(Error::DestinationExists(dest.to_path_buf()));
    }
    let source_bytes = fs::metadata(source)
        .map_err(|e| Error::io(source, e))?
        .len();

    stream(source, dest, |src, dst| codec.encode(level, src, dst))?;

    let dest_bytes = fs::metadata(dest).map_err(|e| Error::io(dest, e))?.len();
    // Delete-after-write only: the original goes away once the compressed
    // file is flushed to disk and observed nonzero.
    if !opts.keep_original && dest_bytes > 0 {
        fs::remove_file(source).map_err(|e| Error::io(source, e))?;
    }
    Ok((source_bytes, dest_bytes))
}

fn run_decompress(
    codec: &dyn Codec,
    source: &Path,
    dest: &Path,
    opts: &DecompressOptions,
) -> Result<(u64, u64), Error> {
    if !codec.is_available() {
        return Err(Error::AlgorithmUnavailable(codec.name()));
    }
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    if dest.exists() && !opts.overwrite {
        return Err(Error::DestinationExists(dest.to_path_buf()));
    }
    let source_bytes = fs::metadata(source)
        .map_err(|e| Error::io(source, e))?
        .len();

    stream(source, dest, |src, dst| codec.decode(src, dst))?;

    let dest_bytes = fs::metadata(dest).map_err(|e| Error::io(dest, e))?.len();
    if !opts.keep_compressed {
        fs::remove_file(source).map_err(|e| Error::io(source, e))?;
    }
    Ok((source_bytes, dest_bytes))
}

/// Pump `source` through a codec into `dest` with buffered handles on both
/// ends. The source is opened before the destination is created, and a
/// partial destination is removed on any failure so a crash mid-stream
/// never leaves a truncated file behind.
fn stream<F>(source: &Path, dest: &Path, run: F) -> Result<(), Error>
where
    F: FnOnce(&mut dyn Read, &mut dyn Write) -> std::io::Result<()>,
{
    let attempt = (|| {
        let mut reader = BufReader::new(File::open(source).map_err(|e| Error::io(source, e))?);
        let mut writer = BufWriter::new(File::create(dest).map_err(|e| Error::io(dest, e))?);
        run(&mut reader, &mut writer).map_err(|e| Error::io(dest, e))?;
        writer.flush().map_err(|e| Error::io(dest, e))
    })();
    if attempt.is_err() {
        let _ = fs::remove_file(dest);
    }
    attempt
}

/// `data.csv` + `".gz"` → `data.csv.gz`. Strictly appends; never replaces
/// an existing suffix.
fn appended_path(source: &Path, extension: &str) -> PathBuf {
    let mut name = source.as_os_str().to_os_string();
    name.push(extension);
    PathBuf::from(name)
}

/// `data.csv.gz` → `data.csv`, either next to the source or inside
/// `output_folder`. Strips the final extension only.
fn stripped_path(source: &Path, output_folder: Option<&Path>) -> PathBuf {
    match output_folder {
        Some(folder) => folder.join(source.file_stem().unwrap_or(source.as_os_str())),
        None => source.with_extension(""),
    }
}
