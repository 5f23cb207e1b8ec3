//! Password generation, scoring and output.

pub mod charset;
mod error;
mod generate;
pub mod output;
pub mod strength;

pub use error::GenerationError;
pub use generate::{GenerationConfig, MAX_LENGTH, Password, generate};
pub use output::{AppendFile, Clipboard, Sink};
