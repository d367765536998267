//! Uniform decoded sample stream capability
//!
//! Both container readers (WAV via hound, MP3 via symphonia) expose the
//! same shape: a sample-rate-tagged stream of interleaved f32 samples,
//! readable in blocks. The loader never sees which container it came from.

use std::io::Cursor;

use crate::decode::mp3::Mp3Source;
use crate::decode::wav::WavSource;
use crate::error::{Result, SampleIoError};

/// A decoded, interleaved sample stream.
pub trait SampleSource {
    fn sample_rate(&self) -> u32;

    /// Channel count of the interleaved data, known up front (1 or 2).
    fn channels(&self) -> u16;

    /// Fill `out` with the next interleaved samples, returning how many
    /// were written. `Ok(0)` is the only end-of-stream signal.
    fn read_samples(&mut self, out: &mut [f32]) -> Result<usize>;
}

/// Select a container reader by the case-insensitive trailing extension
/// of `name` and open it over the fully buffered bytes.
pub fn open_source(name: &str, bytes: Vec<u8>) -> Result<Box<dyn SampleSource>> {
    let extension = name
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "wav" => Ok(Box::new(WavSource::new(Cursor::new(bytes))?)),
        "mp3" => Ok(Box::new(Mp3Source::new(Cursor::new(bytes))?)),
        _ => Err(SampleIoError::unsupported_format(format!(
            "audio format of '{}' is not supported (expected .wav or .mp3)",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_extension_rejected() {
        let err = open_source("clip.ogg", vec![]).err().unwrap();
        assert!(matches!(err, SampleIoError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("clip.ogg"));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        // Empty bytes are not a valid container, but the error must come
        // from the WAV reader, not the dispatch.
        let result = open_source("CLIP.WAV", vec![]);
        assert!(matches!(result, Err(SampleIoError::Decode(_))));
    }

    #[test]
    fn test_name_without_extension_rejected() {
        let result = open_source("clip", vec![]);
        assert!(matches!(result, Err(SampleIoError::UnsupportedFormat(_))));
    }
}
