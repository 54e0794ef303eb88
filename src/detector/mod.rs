use crate::error::Result;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes sampled from the head of each file for the guess.
pub const SAMPLE_LEN: usize = 32;

/// Best-effort encoding guesser.
///
/// Implementations may guess wrong and may decline to answer on short or
/// ambiguous samples; callers must handle `None`.
pub trait EncodingDetector {
    fn detect(&self, sample: &[u8]) -> Option<&'static Encoding>;
}

/// Statistical detector backed by the chardet port.
#[derive(Debug, Default)]
pub struct ChardetDetector;

impl EncodingDetector for ChardetDetector {
    fn detect(&self, sample: &[u8]) -> Option<&'static Encoding> {
        let (charset, confidence, _language) = chardet::detect(sample);
        if charset.is_empty() || confidence <= 0.0 {
            return None;
        }
        Encoding::for_label(chardet::charset2encoding(&charset).as_bytes())
    }
}

/// Read the first [`SAMPLE_LEN`] bytes of `path` and run the detector on them.
pub fn detect_encoding(
    detector: &dyn EncodingDetector,
    path: &Path,
) -> Result<Option<&'static Encoding>> {
    let mut file = File::open(path)?;
    let mut sample = [0u8; SAMPLE_LEN];
    let mut filled = 0;

    while filled < SAMPLE_LEN {
        let n = file.read(&mut sample[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    Ok(detector.detect(&sample[..filled]))
}
