//! Normalized in-memory audio representation
//!
//! A `SampleBuffer` is the canonical output of the decode pipeline and the
//! input of the encoder: a sample rate plus one (mono) or two (stereo)
//! channels of single-precision samples. Buffers are immutable after
//! construction and own their sample storage exclusively.

use crate::error::{Result, SampleIoError};

#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    sample_rate: u32,
    left: Vec<f32>,
    right: Option<Vec<f32>>,
}

impl SampleBuffer {
    /// Build a buffer from single-precision channel data.
    ///
    /// The left channel is required and must be non-empty; an absent right
    /// channel means mono. A present right channel must match the left
    /// channel's length, and the sample rate must be positive.
    pub fn from_f32(sample_rate: u32, left: Vec<f32>, right: Option<Vec<f32>>) -> Result<Self> {
        Self::validate(sample_rate, left.len(), right.as_ref().map(|r| r.len()))?;
        Ok(Self {
            sample_rate,
            left,
            right,
        })
    }

    /// Build a buffer from double-precision channel data.
    ///
    /// Samples are narrowed to single precision with the standard float
    /// cast; the stored representation is always single precision.
    pub fn from_f64(sample_rate: u32, left: &[f64], right: Option<&[f64]>) -> Result<Self> {
        Self::validate(sample_rate, left.len(), right.map(|r| r.len()))?;
        Ok(Self {
            sample_rate,
            left: left.iter().map(|&s| s as f32).collect(),
            right: right.map(|r| r.iter().map(|&s| s as f32).collect()),
        })
    }

    fn validate(sample_rate: u32, left_len: usize, right_len: Option<usize>) -> Result<()> {
        if left_len == 0 {
            return Err(SampleIoError::invalid_argument(
                "left channel samples are required",
            ));
        }
        if sample_rate == 0 {
            return Err(SampleIoError::invalid_argument("sample rate cannot be 0"));
        }
        if let Some(right_len) = right_len {
            if right_len != left_len {
                return Err(SampleIoError::invalid_argument(format!(
                    "channel length mismatch: left {} samples, right {} samples",
                    left_len, right_len
                )));
            }
        }
        Ok(())
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Single-precision view of the left channel (no conversion).
    pub fn left(&self) -> &[f32] {
        &self.left
    }

    /// Single-precision view of the right channel, `None` for mono.
    pub fn right(&self) -> Option<&[f32]> {
        self.right.as_deref()
    }

    pub fn channels(&self) -> u16 {
        if self.right.is_some() {
            2
        } else {
            1
        }
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Double-precision view: elementwise widening of both channels.
    pub fn to_f64(&self) -> (u32, Vec<f64>, Option<Vec<f64>>) {
        (
            self.sample_rate,
            self.left.iter().map(|&s| s as f64).collect(),
            self.right
                .as_ref()
                .map(|r| r.iter().map(|&s| s as f64).collect()),
        )
    }
}
