//! Runtime settings for one invocation.
//!
//! Nothing is persisted: settings come from CLI flags or interactive prompts.

use std::path::PathBuf;

use crate::pass::GenerationConfig;
use crate::pass::output::DEFAULT_FILE;

#[derive(Debug, Clone)]
pub struct Settings {
    pub generation: GenerationConfig,
    pub number_of_passwords: usize,
    pub output_file_path: PathBuf,
    pub output_to_file: bool,
    pub to_clipboard: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            number_of_passwords: 1,
            output_file_path: PathBuf::from(DEFAULT_FILE),
            output_to_file: false,
            to_clipboard: false,
        }
    }
}
