use std::io::{self, Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use bfc_core::codec::{Codec, LevelRange};

/// DEFLATE-in-gzip codec, extension `.gz`.
///
/// The fastest of the bundled codecs but with the weakest ratio. Always
/// available: the backend builds everywhere.
///
/// Best for: quick compression passes where decode speed on any machine
/// matters more than size.
pub struct GzipCodec;

impl Codec for GzipCodec {
    fn name(&self) -> &'static str {
        "gzip"
    }

    fn extension(&self) -> &'static str {
        ".gz"
    }

    fn levels(&self) -> LevelRange {
        LevelRange::new(1, 9, 6)
    }

    fn encode(&self, level: u32, src: &mut dyn Read, dst: &mut dyn Write) -> io::Result<()> {
        let mut encoder = GzEncoder::new(dst, Compression::new(level));
        io::copy(src, &mut encoder)?;
        encoder.finish()?;
        Ok(())
    }

    fn decode(&self, src: &mut dyn Read, dst: &mut dyn Write) -> io::Result<()> {
        let mut decoder = GzDecoder::new(src);
        io::copy(&mut decoder, dst)?;
        Ok(())
    }
}
