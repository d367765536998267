//! MP3 container reader
//!
//! Frame decompression is delegated to symphonia; this module adapts its
//! packet-oriented decode loop to the block-read `SampleSource` shape by
//! queueing decoded interleaved samples between reads.

use std::collections::VecDeque;
use std::io::Cursor;

use symphonia::core::audio::SampleBuffer as PcmBuffer;
use symphonia::core::codecs::{Decoder, DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::decode::source::SampleSource;
use crate::error::{Result, SampleIoError};

pub struct Mp3Source {
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    sample_rate: u32,
    channels: u16,
    pending: VecDeque<f32>,
    exhausted: bool,
}

impl Mp3Source {
    pub fn new(bytes: Cursor<Vec<u8>>) -> Result<Self> {
        let mss = MediaSourceStream::new(Box::new(bytes), Default::default());
        let mut hint = Hint::new();
        hint.with_extension("mp3");

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| SampleIoError::decode(format!("cannot read MP3 container: {}", e)))?;
        let format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| SampleIoError::decode("no audio track found"))?;

        let track_id = track.id;
        let sample_rate = track
            .codec_params
            .sample_rate
            .ok_or_else(|| SampleIoError::decode("unknown sample rate"))?;
        let channels = track
            .codec_params
            .channels
            .map(|c| c.count())
            .ok_or_else(|| SampleIoError::decode("unknown channel layout"))?;
        if channels == 0 || channels > 2 {
            return Err(SampleIoError::decode(
                "only mono or stereo audio is supported",
            ));
        }

        let decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| SampleIoError::decode(format!("cannot create MP3 decoder: {}", e)))?;

        Ok(Self {
            track_id,
            sample_rate,
            channels: channels as u16,
            format,
            decoder,
            pending: VecDeque::new(),
            exhausted: false,
        })
    }

    /// Decode packets until at least one sample is queued or the packet
    /// reader reaches end of stream.
    fn refill(&mut self) -> Result<()> {
        while self.pending.is_empty() && !self.exhausted {
            let packet = match self.format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(_)) => {
                    // The packet reader signals end of stream as an IO error.
                    self.exhausted = true;
                    return Ok(());
                }
                Err(SymphoniaError::ResetRequired) => continue,
                Err(e) => {
                    return Err(SampleIoError::decode(format!(
                        "failed to read MP3 packet: {}",
                        e
                    )))
                }
            };

            if packet.track_id() != self.track_id {
                continue;
            }

            match self.decoder.decode(&packet) {
                Ok(decoded) => {
                    let spec = *decoded.spec();
                    let mut pcm = PcmBuffer::<f32>::new(decoded.capacity() as u64, spec);
                    pcm.copy_interleaved_ref(decoded);
                    self.pending.extend(pcm.samples().iter().copied());
                }
                Err(SymphoniaError::DecodeError(e)) => {
                    // Recoverable frame corruption; skip the packet.
                    log::debug!("skipping undecodable MP3 packet: {}", e);
                }
                Err(e) => {
                    return Err(SampleIoError::decode(format!(
                        "MP3 frame decompression failed: {}",
                        e
                    )))
                }
            }
        }
        Ok(())
    }
}

impl SampleSource for Mp3Source {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn channels(&self) -> u16 {
        self.channels
    }

    fn read_samples(&mut self, out: &mut [f32]) -> Result<usize> {
        let mut written = 0;
        while written < out.len() {
            if self.pending.is_empty() {
                self.refill()?;
                if self.pending.is_empty() {
                    break;
                }
            }
            while written < out.len() {
                match self.pending.pop_front() {
                    Some(sample) => {
                        out[written] = sample;
                        written += 1;
                    }
                    None => break,
                }
            }
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_rejected() {
        let result = Mp3Source::new(Cursor::new(vec![0u8; 64]));
        assert!(matches!(result, Err(SampleIoError::Decode(_))));
    }

    #[test]
    fn test_empty_bytes_rejected() {
        let result = Mp3Source::new(Cursor::new(Vec::new()));
        assert!(matches!(result, Err(SampleIoError::Decode(_))));
    }
}
