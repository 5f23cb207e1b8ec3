//! Top-level errors and their exit codes.

use std::io;
use std::process::ExitCode;

use thiserror::Error;

use crate::cli::ParseError;
use crate::pass::GenerationError;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Args(#[from] ParseError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Failed to save password to {destination}: {source}")]
    Save {
        destination: String,
        #[source]
        source: io::Error,
    },

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl RunError {
    /// 2 for argument errors, 1 for everything else.
    pub fn code(&self) -> u8 {
        match self {
            RunError::Args(_) => 2,
            _ => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = RunError::from(GenerationError::NoClassSelected);
        assert_eq!(err.to_string(), "At least one character set must be selected.");

        let err = RunError::Save {
            destination: "out.txt".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to save password to out.txt: denied");

        let err = RunError::from(ParseError::UnknownArg("-z".into()));
        assert_eq!(err.to_string(), "Unknown argument: -z");
        assert_eq!(err.code(), 2);
        assert_eq!(RunError::from(GenerationError::EmptyAlphabet).code(), 1);
    }
}
