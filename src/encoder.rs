//! WAV encoding of a `SampleBuffer`
//!
//! Writes a 32-bit float WAV container to an in-memory sink. Sample values
//! round-trip exactly since the buffer already stores single precision.

use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::buffer::SampleBuffer;
use crate::error::{Result, SampleIoError};

/// Merge per-channel data into one interleaved buffer: left[i] lands at
/// `i * channels`, and for stereo right[i] at `i * channels + 1`.
pub fn interleave(left: &[f32], right: Option<&[f32]>) -> Vec<f32> {
    let channels = if right.is_some() { 2 } else { 1 };
    let mut interleaved = vec![0.0f32; left.len() * channels];

    for (index, &sample) in left.iter().enumerate() {
        interleaved[index * channels] = sample;
    }
    if let Some(right) = right {
        for (index, &sample) in right.iter().enumerate() {
            interleaved[index * 2 + 1] = sample;
        }
    }

    interleaved
}

/// Encode the buffer as a WAV container in an in-memory byte sink.
///
/// The returned cursor is rewound to position 0 so it can be re-read
/// immediately. The writer finalizes the RIFF size fields on every exit
/// path (hound also finalizes on drop).
pub fn save_to_stream(buffer: &SampleBuffer) -> Result<Cursor<Vec<u8>>> {
    let interleaved = interleave(buffer.left(), buffer.right());
    let spec = WavSpec {
        channels: buffer.channels(),
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    log::debug!(
        "encoding WAV: {} Hz, {} channel(s), {} samples per channel",
        spec.sample_rate,
        spec.channels,
        buffer.len()
    );

    let mut sink = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut sink, spec)
            .map_err(|e| SampleIoError::encode(format!("cannot create WAV writer: {}", e)))?;
        for &sample in &interleaved {
            writer
                .write_sample(sample)
                .map_err(|e| SampleIoError::encode(format!("failed to write sample: {}", e)))?;
        }
        writer
            .finalize()
            .map_err(|e| SampleIoError::encode(format!("failed to finalize WAV: {}", e)))?;
    }

    sink.set_position(0);
    Ok(sink)
}
