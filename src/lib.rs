//! SampleIo - Audio Load/Save Pipeline
//!
//! Loads WAV or MP3 content from a byte stream or URL into a normalized
//! in-memory `SampleBuffer`, and encodes a `SampleBuffer` back into a
//! WAV container held in an in-memory byte sink.

pub mod buffer;
pub mod decode;
pub mod encoder;
pub mod error;
pub mod loader;

pub use buffer::SampleBuffer;
pub use decode::{open_source, SampleSource};
pub use encoder::{interleave, save_to_stream};
pub use error::{Result, SampleIoError};
pub use loader::{load_from_stream, load_from_url};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

pub fn init_logging(verbose: bool) {
    env_logger::Builder::from_env("RUST_LOG")
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .try_init()
        .ok();
}
