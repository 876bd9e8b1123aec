use std::path::PathBuf;

/// Errors raised by codec resolution, single-file operations, and batch
/// configuration.
///
/// Configuration mistakes (`UnknownAlgorithm`, `AlgorithmUnavailable`,
/// `InvalidLevel`, `Pattern`) are global: they abort a batch before any
/// file is touched. Per-file conditions (`DestinationExists`, `Io`, and
/// `UnrecognizedExtension` met during enumeration) are local: they are
/// recorded in that file's result and the batch moves on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested identifier is not one of the registered algorithm names.
    #[error("unknown algorithm '{0}'; valid options: lzma, zstd, gzip")]
    UnknownAlgorithm(String),

    /// Valid identifier, but its backend is not present in this build.
    #[error("algorithm '{0}' is not available in this build")]
    AlgorithmUnavailable(&'static str),

    /// Compression level outside the codec's valid range.
    #[error("invalid level {level} for {algorithm}: valid range is {min}-{max}")]
    InvalidLevel {
        algorithm: &'static str,
        level: u32,
        min: u32,
        max: u32,
    },

    /// Decompression source whose extension matches no registered codec.
    #[error("unrecognized compressed extension: {0}")]
    UnrecognizedExtension(PathBuf),

    /// Refusal to overwrite an existing destination without explicit
    /// permission.
    #[error("destination already exists: {0} (pass overwrite to replace it)")]
    DestinationExists(PathBuf),

    /// Malformed glob pattern given for folder enumeration.
    #[error("invalid file pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Read/write/delete failure during an operation.
    #[error("i/o error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
