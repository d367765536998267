//! Error types

use thiserror::Error;

/// Main error type
#[derive(Debug, Clone, Error)]
pub enum SampleIoError {
    /// A required input (channel data, stream name, URL) was absent or empty.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The name's trailing extension is neither `wav` nor `mp3`.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Container parsing or frame decompression failed, or nothing decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The WAV writer failed while encoding.
    #[error("Encode error: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

impl SampleIoError {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }
    pub fn unsupported_format<S: Into<String>>(msg: S) -> Self {
        Self::UnsupportedFormat(msg.into())
    }
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Self::Decode(msg.into())
    }
    pub fn encode<S: Into<String>>(msg: S) -> Self {
        Self::Encode(msg.into())
    }
    pub fn io<S: Into<String>>(msg: S) -> Self {
        Self::Io(msg.into())
    }
    pub fn http<S: Into<String>>(msg: S) -> Self {
        Self::Http(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SampleIoError>;

impl From<std::io::Error> for SampleIoError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<reqwest::Error> for SampleIoError {
    fn from(err: reqwest::Error) -> Self {
        Self::http(err.to_string())
    }
}
