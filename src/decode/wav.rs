//! WAV container reader
//!
//! Uncompressed container, decoded directly with hound. Integer PCM is
//! normalized to [-1.0, 1.0] so the stream looks identical to the MP3 path.

use std::io::Cursor;

use hound::{SampleFormat, WavReader};

use crate::decode::source::SampleSource;
use crate::error::{Result, SampleIoError};

pub struct WavSource {
    reader: WavReader<Cursor<Vec<u8>>>,
    sample_rate: u32,
    channels: u16,
    format: PcmLayout,
}

#[derive(Debug, Clone, Copy)]
enum PcmLayout {
    Int16,
    Float32,
}

impl WavSource {
    pub fn new(bytes: Cursor<Vec<u8>>) -> Result<Self> {
        let reader = WavReader::new(bytes)
            .map_err(|e| SampleIoError::decode(format!("cannot read WAV container: {}", e)))?;
        let spec = reader.spec();

        if spec.sample_rate == 0 {
            return Err(SampleIoError::decode("invalid sample rate"));
        }
        if spec.channels == 0 || spec.channels > 2 {
            return Err(SampleIoError::decode(
                "only mono or stereo audio is supported",
            ));
        }

        let format = match (spec.bits_per_sample, spec.sample_format) {
            (16, SampleFormat::Int) => PcmLayout::Int16,
            (32, SampleFormat::Float) => PcmLayout::Float32,
            (bits, format) => {
                return Err(SampleIoError::decode(format!(
                    "unsupported WAV sample layout: {} bits {:?}",
                    bits, format
                )))
            }
        };

        Ok(Self {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            format,
            reader,
        })
    }
}

impl SampleSource for WavSource {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn read_samples(&mut self, out: &mut [f32]) -> Result<usize> {
        let mut written = 0;
        match self.format {
            PcmLayout::Int16 => {
                let mut samples = self.reader.samples::<i16>();
                while written < out.len() {
                    match samples.next() {
                        Some(Ok(sample)) => {
                            out[written] = sample as f32 / 32767.0;
                            written += 1;
                        }
                        Some(Err(e)) => {
                            return Err(SampleIoError::decode(format!(
                                "failed to read sample: {}",
                                e
                            )))
                        }
                        None => break,
                    }
                }
            }
            PcmLayout::Float32 => {
                let mut samples = self.reader.samples::<f32>();
                while written < out.len() {
                    match samples.next() {
                        Some(Ok(sample)) => {
                            out[written] = sample;
                            written += 1;
                        }
                        Some(Err(e)) => {
                            return Err(SampleIoError::decode(format!(
                                "failed to read sample: {}",
                                e
                            )))
                        }
                        None => break,
                    }
                }
            }
        }
        Ok(written)
    }
}
