use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use globset::Glob;

use crate::codec::Codec;
use crate::error::Error;
use crate::ops::{self, CompressOptions, DecompressOptions};
use crate::registry::Registry;
use crate::result::BatchResult;

/// Compress every file directly under `folder` whose name matches
/// `pattern` (a glob such as `*.csv`; subfolders are not entered).
///
/// Configuration errors — unknown or unavailable algorithm, out-of-range
/// level, malformed pattern — fail the whole batch before any file I/O.
/// Per-file failures are recorded in that file's result and processing
/// continues; one bad file never aborts the rest.
///
/// A missing folder or zero matching files yields an empty batch, not an
/// error. Files are processed in lexicographic name order so repeated runs
/// over an unchanged folder report identically.
pub fn compress_folder(
    registry: &Registry,
    folder: &Path,
    algorithm: &str,
    pattern: &str,
    opts: &CompressOptions,
) -> Result<BatchResult, Error> {
    let codec = registry.resolve(algorithm)?;
    let level = ops::validate_level(codec.as_ref(), opts.level)?;
    let matcher = Glob::new(pattern)
        .map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();

    let files = matching_files(folder, |name| matcher.is_match(name));
    log::info!(
        "compressing {} file(s) under {} with {} level {}",
        files.len(),
        folder.display(),
        codec.name(),
        level
    );

    let mut batch = BatchResult::default();
    for file in &files {
        batch.push(ops::compress_one(codec.as_ref(), level, file, opts));
    }
    Ok(batch)
}

/// Decompress every recognized compressed file directly under `folder`
/// into `output_folder`, inferring each file's algorithm from its
/// extension.
///
/// `algorithm` optionally restricts the batch to one codec's extension;
/// when `None`, every registered extension is picked up. Ordering,
/// isolation, and empty-folder behavior match [`compress_folder`].
pub fn decompress_folder(
    registry: &Registry,
    folder: &Path,
    output_folder: &Path,
    algorithm: Option<&str>,
    opts: &DecompressOptions,
) -> Result<BatchResult, Error> {
    let selected: Vec<Arc<dyn Codec>> = match algorithm {
        Some(name) => vec![registry.resolve(name)?],
        None => registry.list().to_vec(),
    };

    let files = matching_files(folder, |name| {
        selected.iter().any(|c| has_extension(c.as_ref(), name))
    });
    log::info!(
        "decompressing {} file(s) from {} into {}",
        files.len(),
        folder.display(),
        output_folder.display()
    );

    let mut batch = BatchResult::default();
    for file in &files {
        // The filter above guarantees exactly one codec matches.
        if let Some(codec) = selected.iter().find(|c| has_extension(c.as_ref(), file)) {
            batch.push(ops::decompress_one(
                codec.as_ref(),
                file,
                Some(output_folder),
                opts,
            ));
        }
    }
    Ok(batch)
}

fn has_extension(codec: &dyn Codec, path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| codec.extension()[1..].eq_ignore_ascii_case(ext))
}

/// Regular files directly under `folder` whose name passes `keep`, sorted
/// lexicographically. A folder that does not exist or cannot be read
/// enumerates as empty.
fn matching_files(folder: &Path, keep: impl Fn(&Path) -> bool) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(folder) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| p.file_name().map(|n| keep(Path::new(n))).unwrap_or(false))
        .collect();
    files.sort();
    files
}
