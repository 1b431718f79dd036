use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use metainfo_xml::{ParserConfig, ParserMode, parse_file, serialize_distro, serialize_upstream};

use crate::error::CliError;

/// Parse `file` and write it back out in the `to` shape.
pub(crate) fn run_convert(
    file: &Path,
    to: ParserMode,
    output: Option<&Path>,
    config: &ParserConfig,
) -> Result<(), CliError> {
    let components = parse_file(file, config)?;
    let xml = convert_components(&components, to, config)?;

    match output {
        Some(path) => {
            std::fs::write(path, &xml)?;
            log::info!(
                "{} Wrote {} component(s) as {} to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                components.len(),
                to,
                path.display().if_supports_color(Stdout, |t| t.cyan()),
            );
        }
        None => print!("{xml}"),
    }
    Ok(())
}

pub(crate) fn convert_components(
    components: &[metainfo_core::Component],
    to: ParserMode,
    config: &ParserConfig,
) -> Result<String, CliError> {
    match to {
        ParserMode::Upstream => match components {
            [single] => Ok(serialize_upstream(single)?),
            [] => Err(CliError::other("No components to convert")),
            many => Err(CliError::other(format!(
                "Found {} components, but an upstream file holds exactly one",
                many.len()
            ))),
        },
        ParserMode::Distro => serialize_distro(components, config)?
            .ok_or_else(|| CliError::other("No components to convert")),
    }
}
