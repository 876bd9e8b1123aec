use std::path::Path;
use std::sync::Arc;

use crate::codec::Codec;
use crate::error::Error;

/// Ordered table of registered codecs.
///
/// Lookup is pure: resolving a name or extension never touches the
/// filesystem or loads anything. Availability of an optional backend is
/// asked of the codec itself at resolution time, so a build without one
/// backend still serves the others.
pub struct Registry {
    codecs: Vec<Arc<dyn Codec>>,
}

impl Registry {
    /// Build a registry from codecs in their display/listing order.
    ///
    /// Invariants: extensions are unique across the table, and every
    /// codec's default level lies inside its own range.
    pub fn new(codecs: Vec<Arc<dyn Codec>>) -> Self {
        debug_assert!(
            codecs
                .iter()
                .enumerate()
                .all(|(i, a)| codecs[..i].iter().all(|b| a.extension() != b.extension())),
            "codec extensions must be unique"
        );
        debug_assert!(
            codecs.iter().all(|c| c.levels().contains(c.levels().default)),
            "codec default level must lie within its range"
        );
        Self { codecs }
    }

    /// All registered codecs, available or not, in deterministic order.
    pub fn list(&self) -> &[Arc<dyn Codec>] {
        &self.codecs
    }

    /// Look up a codec by algorithm name.
    ///
    /// Fails with [`Error::UnknownAlgorithm`] for a name not in the table
    /// and [`Error::AlgorithmUnavailable`] for a registered codec whose
    /// backend is missing from this build.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Codec>, Error> {
        let codec = self
            .codecs
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))?;
        if !codec.is_available() {
            return Err(Error::AlgorithmUnavailable(codec.name()));
        }
        Ok(Arc::clone(codec))
    }

    /// Reverse lookup: infer the codec from a compressed file's extension.
    ///
    /// Matches the final extension only (`data.csv.gz` → gzip), case
    /// insensitively. Availability is not checked here; callers decide
    /// whether an unavailable backend is a hard error or a per-file one.
    pub fn by_extension(&self, path: &Path) -> Result<Arc<dyn Codec>, Error> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnrecognizedExtension(path.to_path_buf()))?;
        self.codecs
            .iter()
            .find(|c| c.extension()[1..].eq_ignore_ascii_case(ext))
            .cloned()
            .ok_or_else(|| Error::UnrecognizedExtension(path.to_path_buf()))
    }
}
