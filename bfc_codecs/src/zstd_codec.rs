use std::io::{self, Read, Write};

use bfc_core::codec::{Codec, LevelRange};

/// Zstandard codec, extension `.zst`.
///
/// Best speed/ratio trade-off of the bundled codecs, but the backend is
/// optional: built only with the `zstd` cargo feature (on by default).
/// Without it the codec stays registered so `list` can report it, and
/// resolution fails with an unavailable error while lzma and gzip keep
/// working.
///
/// Best for: the general case — large tabular output at level 3.
pub struct ZstdCodec;

#[cfg(not(feature = "zstd"))]
fn unavailable() -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        "zstd backend not compiled into this build",
    )
}

impl Codec for ZstdCodec {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn extension(&self) -> &'static str {
        ".zst"
    }

    fn levels(&self) -> LevelRange {
        LevelRange::new(1, 22, 3)
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "zstd")
    }

    #[cfg(feature = "zstd")]
    fn encode(&self, level: u32, src: &mut dyn Read, dst: &mut dyn Write) -> io::Result<()> {
        let mut encoder = zstd::stream::write::Encoder::new(dst, level as i32)?;
        io::copy(src, &mut encoder)?;
        encoder.finish()?;
        Ok(())
    }

    #[cfg(not(feature = "zstd"))]
    fn encode(&self, _level: u32, _src: &mut dyn Read, _dst: &mut dyn Write) -> io::Result<()> {
        Err(unavailable())
    }

    #[cfg(feature = "zstd")]
    fn decode(&self, src: &mut dyn Read, dst: &mut dyn Write) -> io::Result<()> {
        let mut decoder = zstd::stream::read::Decoder::new(src)?;
        io::copy(&mut decoder, dst)?;
        Ok(())
    }

    #[cfg(not(feature = "zstd"))]
    fn decode(&self, _src: &mut dyn Read, _dst: &mut dyn Write) -> io::Result<()> {
        Err(unavailable())
    }
}
