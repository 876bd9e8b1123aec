use std::io::{self, Read, Write};

use xz2::read::XzDecoder;
use xz2::write::XzEncoder;

use bfc_core::codec::{Codec, LevelRange};

/// LZMA codec producing standard `.xz` streams.
///
/// Highest ratio of the bundled codecs and the slowest encoder. Level 0 is
/// valid xz preset territory (fast, larger output); 9 is maximum effort.
///
/// Best for: cold data where size matters more than encode time.
pub struct LzmaCodec;

impl Codec for LzmaCodec {
    fn name(&self) -> &'static str {
        "lzma"
    }

    fn extension(&self) -> &'static str {
        ".xz"
    }

    fn levels(&self) -> LevelRange {
        LevelRange::new(0, 9, 6)
    }

    fn encode(&self, level: u32, src: &mut dyn Read, dst: &mut dyn Write) -> io::Result<()> {
        let mut encoder = XzEncoder::new(dst, level);
        io::copy(src, &mut encoder)?;
        encoder.finish()?;
        Ok(())
    }

    fn decode(&self, src: &mut dyn Read, dst: &mut dyn Write) -> io::Result<()> {
        let mut decoder = XzDecoder::new(src);
        io::copy(&mut decoder, dst)?;
        Ok(())
    }
}
