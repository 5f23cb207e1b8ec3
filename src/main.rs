use std::env;
use std::process::ExitCode;

mod cli;
mod error;
mod exits;
mod pass;
mod settings;
mod terminal;
mod tui;

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();
    init_logging();

    let mut args: Vec<String> = env::args().collect();
    if args.len() == 1 {
        args.push("--interactive".to_string());
    }
    cli::run(&args)
}

/// stderr logger, `warn` unless RUST_LOG says otherwise.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();
}
