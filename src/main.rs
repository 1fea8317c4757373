//! eightshift-create CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use eightshift_create::cli::{Cli, CommandDispatcher};
use eightshift_create::config::load_settings;
use eightshift_create::shell::{is_ci, SystemRunner};
use eightshift_create::ui::{create_ui, set_colors_enabled, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` or `--verbose` sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("eightshift_create=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("eightshift_create=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);
    init_tracing(cli.debug || output_mode.shows_command_output());

    tracing::debug!("eightshift-create starting with args: {:?}", cli);

    if cli.no_color {
        set_colors_enabled(false);
    }

    let is_interactive = !cli.non_interactive && !is_ci();
    let mut ui = create_ui(is_interactive, output_mode);

    let mut settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };
    cli.apply_overrides(&mut settings);

    let start_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            ui.error(&format!("Error: cannot read the current directory: {}", e));
            return ExitCode::from(1);
        }
    };

    let runner = SystemRunner;
    let dispatcher = CommandDispatcher::new(start_dir, settings, &runner);

    ExitCode::from(dispatcher.run(&cli, ui.as_mut()))
}
