//! metainfo CLI
//!
//! Command-line interface for inspecting, converting and validating
//! AppStream metadata files.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;
use settings::{Overrides, Settings};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut overrides = Overrides {
        locale: cli.locale,
        origin: None,
    };

    match cli.command {
        Commands::Show { file, json } => {
            let config = Settings::load()?.parser_config(&overrides);
            commands::show::run_show(&file, &config, json)
        }
        Commands::Convert {
            file,
            to,
            output,
            origin,
        } => {
            overrides.origin = origin;
            let config = Settings::load()?.parser_config(&overrides);
            commands::convert::run_convert(&file, to, output.as_deref(), &config)
        }
        Commands::Validate { file } => {
            let config = Settings::load()?.parser_config(&overrides);
            commands::validate::run_validate(&file, &config)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&overrides),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    }
}

/// Route `log` output to the terminal.
///
/// Normal runs print bare messages at info level; `--verbose` adds
/// timestamps and debug messages, `--quiet` keeps warnings and errors only.
/// `RUST_LOG` overrides both.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    builder.target(env_logger::Target::Stdout);
    if !verbose {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}
