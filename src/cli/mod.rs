mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use std::process::ExitCode;

/// Run in CLI mode. Errors are reported on stderr and mapped to an exit code.
pub fn run(args: &[String]) -> ExitCode {
    let result = Context::new(args).and_then(|mut ctx| ctx.run());
    match result {
        Ok(code) => code,
        Err(e) => {
            log::debug!("exiting with error: {e:?}");
            prompts::error(&format!("Error: {e}"));
            e.exit_code()
        }
    }
}
