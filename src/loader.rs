//! Load orchestration
//!
//! Turns a named byte stream or an HTTP resource into a `SampleBuffer`.
//! The input is fully buffered before decoding because container readers
//! need random access a one-pass stream cannot provide.

use std::io::Read;

use crate::buffer::SampleBuffer;
use crate::decode::{collect_channels, open_source};
use crate::error::{Result, SampleIoError};

/// Decode a named audio stream into a `SampleBuffer`.
///
/// `name` is used only for its case-insensitive trailing extension
/// (`.wav` or `.mp3`). The stream is read to the end before decoding.
pub fn load_from_stream<R: Read>(mut stream: R, name: &str) -> Result<SampleBuffer> {
    if name.is_empty() {
        return Err(SampleIoError::invalid_argument("name cannot be empty"));
    }

    let mut bytes = Vec::new();
    stream
        .read_to_end(&mut bytes)
        .map_err(|e| SampleIoError::io(format!("failed to buffer input stream: {}", e)))?;

    log::debug!("buffered {} bytes from '{}'", bytes.len(), name);

    let mut source = open_source(name, bytes)?;
    let sample_rate = source.sample_rate();
    let (left, right) = collect_channels(source.as_mut())?;

    if !right.is_empty() {
        SampleBuffer::from_f64(sample_rate, &left, Some(&right))
    } else if !left.is_empty() {
        SampleBuffer::from_f64(sample_rate, &left, None)
    } else {
        Err(SampleIoError::decode("no audio samples decoded"))
    }
}

/// Fetch a remote audio resource and decode it.
///
/// The URL's textual form doubles as the name for extension dispatch.
/// The response body is released on every exit path.
pub fn load_from_url(url: &str) -> Result<SampleBuffer> {
    if url.is_empty() {
        return Err(SampleIoError::invalid_argument("url cannot be empty"));
    }

    log::info!("fetching audio from {}", url);
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    load_from_stream(response, url)
}
