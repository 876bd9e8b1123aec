use std::io::{Read, Write};

/// Valid compression levels for a codec, plus the level used when the
/// caller does not ask for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRange {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl LevelRange {
    pub const fn new(min: u32, max: u32, default: u32) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, level: u32) -> bool {
        (self.min..=self.max).contains(&level)
    }
}

/// Core compression abstraction.
///
/// Each `Codec` implementation:
/// - Is identified by a stable lowercase `name()` used on the CLI and in the
///   programmatic API.
/// - Owns exactly one file extension (`".xz"`, `".zst"`, `".gz"`), appended
///   on compression and stripped on decompression. Extensions are unique
///   across the registry; that uniqueness is what makes reverse lookup for
///   decompression unambiguous.
/// - Streams bytes reader-to-writer, so multi-megabyte inputs never need to
///   be resident in memory.
pub trait Codec: Send + Sync {
    /// Stable lowercase algorithm name, e.g. `"gzip"`.
    fn name(&self) -> &'static str;

    /// Dotted file extension appended to compressed output, e.g. `".gz"`.
    fn extension(&self) -> &'static str;

    /// Valid compression levels for this codec.
    fn levels(&self) -> LevelRange;

    /// Whether the backing library is present in this build.
    ///
    /// Checked at resolution time, not at startup, so one missing backend
    /// never takes the other algorithms down with it.
    fn is_available(&self) -> bool {
        true
    }

    /// Compress everything from `src` into `dst`.
    ///
    /// `level` has already been validated against [`levels`](Self::levels).
    /// Implementations must finish their encoder before returning so that
    /// `dst` holds a complete, decodable stream.
    fn encode(&self, level: u32, src: &mut dyn Read, dst: &mut dyn Write) -> std::io::Result<()>;

    /// Decompress everything from `src` into `dst`.
    fn decode(&self, src: &mut dyn Read, dst: &mut dyn Write) -> std::io::Result<()>;
}

impl std::fmt::Debug for dyn Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec").field("name", &self.name()).finish()
    }
}
