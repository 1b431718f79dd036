use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use metainfo_core::Component;
use metainfo_xml::{MetadataError, ParserConfig, parse_file};

use crate::error::CliError;

/// Parse `file` and fail on the first invalid component.
pub(crate) fn run_validate(file: &Path, config: &ParserConfig) -> Result<(), CliError> {
    let components = parse_file(file, config)?;
    let count = check_components(&components)?;

    if count == 0 {
        log::warn!("No components found in {}", file.display());
    } else {
        log::info!(
            "{} {} valid component(s) in {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            count,
            file.display(),
        );
    }
    Ok(())
}

/// Number of components, or an error naming the first invalid one.
pub(crate) fn check_components(components: &[Component]) -> Result<usize, CliError> {
    for cpt in components {
        if !cpt.is_valid() {
            return Err(MetadataError::invalid_component(cpt.to_debug_string()).into());
        }
        for (i, shot) in cpt.screenshots.iter().enumerate() {
            if !shot.is_valid() {
                return Err(CliError::other(format!(
                    "{}: screenshot {} has no images",
                    cpt.id,
                    i + 1
                )));
            }
        }
    }
    Ok(components.len())
}
