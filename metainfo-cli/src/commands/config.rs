use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::settings::{Overrides, Resolved, Settings, settings_path};

/// Show the resolved parser settings and their sources.
pub(crate) fn run_config_show(overrides: &Overrides) -> Result<(), CliError> {
    let path = settings_path();
    let settings = Settings::load()?;

    log::info!(
        "{}",
        "metainfo Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let fields: [(&str, Resolved); 3] = [
        ("locale", settings.resolve_locale(overrides)),
        ("origin", settings.resolve_origin(overrides)),
        ("media_baseurl", settings.resolve_media_baseurl()),
    ];

    for (name, resolved) in &fields {
        let source_str = format!("({})", resolved.source);
        match &resolved.value {
            Some(v) => {
                log::info!(
                    "  {:<14} {} {}",
                    name,
                    v.if_supports_color(Stdout, |t| t.green()),
                    source_str.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
            None => {
                log::info!(
                    "  {:<14} {}",
                    name,
                    source_str.if_supports_color(Stdout, |t| t.dimmed()),
                );
            }
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}
