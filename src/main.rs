//! dnspy-setup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use dnspy_setup::cli::{Cli, Command, RunCommand};
use dnspy_setup::shell::is_ci;
use dnspy_setup::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("dnspy_setup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dnspy_setup=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("dnspy-setup starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut ui = create_ui(!is_ci(), output_mode);

    let command = RunCommand::new(&project_root, cli.config.as_deref());
    match command.execute(ui.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
