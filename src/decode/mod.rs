//! Decode pipeline: container dispatch, sample sources, deinterleaving

pub mod mp3;
pub mod source;
pub mod wav;

pub use source::{open_source, SampleSource};

use crate::error::Result;

/// Interleaved samples pulled per read. Throughput/memory tradeoff only;
/// correctness does not depend on it.
const READ_BLOCK_SAMPLES: usize = 16384;

/// Drain a decoded source into per-channel double-precision accumulators.
///
/// Reads fixed-size blocks of interleaved samples until a zero-length read,
/// striding through each block by the channel count: the sample at each
/// stride start goes left, and for stereo the following sample goes right.
pub fn collect_channels(source: &mut dyn SampleSource) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut block = vec![0.0f32; READ_BLOCK_SAMPLES];
    let channels = source.channels() as usize;

    loop {
        let count = source.read_samples(&mut block)?;
        if count == 0 {
            break;
        }
        for frame in block[..count].chunks(channels) {
            left.push(frame[0] as f64);
            if channels == 2 {
                if let Some(&sample) = frame.get(1) {
                    right.push(sample as f64);
                }
            }
        }
    }

    Ok((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SampleIoError;

    struct FixedSource {
        sample_rate: u32,
        channels: u16,
        samples: Vec<f32>,
        pos: usize,
        max_per_read: usize,
    }

    impl SampleSource for FixedSource {
        fn sample_rate(&self) -> u32 {
            self.sample_rate
        }
        fn channels(&self) -> u16 {
            self.channels
        }
        fn read_samples(&mut self, out: &mut [f32]) -> Result<usize> {
            let remaining = self.samples.len() - self.pos;
            let count = remaining.min(out.len()).min(self.max_per_read);
            out[..count].copy_from_slice(&self.samples[self.pos..self.pos + count]);
            self.pos += count;
            Ok(count)
        }
    }

    #[test]
    fn test_mono_collection() {
        let mut source = FixedSource {
            sample_rate: 8000,
            channels: 1,
            samples: vec![0.1, 0.2, 0.3],
            pos: 0,
            max_per_read: usize::MAX,
        };
        let (left, right) = collect_channels(&mut source).unwrap();
        assert_eq!(left, vec![0.1f32 as f64, 0.2f32 as f64, 0.3f32 as f64]);
        assert!(right.is_empty());
    }

    #[test]
    fn test_stereo_deinterleave() {
        let mut source = FixedSource {
            sample_rate: 8000,
            channels: 2,
            samples: vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0],
            pos: 0,
            max_per_read: usize::MAX,
        };
        let (left, right) = collect_channels(&mut source).unwrap();
        assert_eq!(left, vec![1.0, 2.0, 3.0]);
        assert_eq!(right, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_collection_spans_short_reads() {
        // Sources may return fewer samples than requested; deinterleaving
        // must stay aligned across block boundaries.
        let mut source = FixedSource {
            sample_rate: 8000,
            channels: 2,
            samples: vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0],
            pos: 0,
            max_per_read: 2,
        };
        let (left, right) = collect_channels(&mut source).unwrap();
        assert_eq!(left, vec![1.0, 2.0, 3.0]);
        assert_eq!(right, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_empty_source_yields_empty_accumulators() {
        let mut source = FixedSource {
            sample_rate: 8000,
            channels: 1,
            samples: vec![],
            pos: 0,
            max_per_read: usize::MAX,
        };
        let (left, right) = collect_channels(&mut source).unwrap();
        assert!(left.is_empty());
        assert!(right.is_empty());
    }

    struct FailingSource;

    impl SampleSource for FailingSource {
        fn sample_rate(&self) -> u32 {
            8000
        }
        fn channels(&self) -> u16 {
            1
        }
        fn read_samples(&mut self, _out: &mut [f32]) -> Result<usize> {
            Err(SampleIoError::decode("truncated data"))
        }
    }

    #[test]
    fn test_read_error_propagates() {
        let result = collect_channels(&mut FailingSource);
        assert!(matches!(result, Err(SampleIoError::Decode(_))));
    }
}
