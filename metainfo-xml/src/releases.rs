//! `<releases>` blocks.

use log::debug;
use metainfo_core::{ChecksumKind, NamedKind, Release, SizeKind, UrgencyKind};

use crate::config::{ParseContext, ParserMode};
use crate::description::{read_description, write_description};
use crate::error::MetadataError;
use crate::tree::Element;
use crate::util::{format_iso8601, parse_iso8601};

/// Read every `<release>` child of a `<releases>` element.
///
/// Releases without a version are dropped.
pub fn parse_releases(
    el: &Element,
    ctx: &ParseContext<'_>,
) -> Result<Vec<Release>, MetadataError> {
    let mut releases = Vec::new();
    for child in el.child_elements().filter(|c| c.name == "release") {
        if let Some(release) = parse_release(child, ctx)? {
            releases.push(release);
        }
    }
    Ok(releases)
}

fn parse_release(el: &Element, ctx: &ParseContext<'_>) -> Result<Option<Release>, MetadataError> {
    let Some(version) = el.attr("version").filter(|v| !v.is_empty()) else {
        debug!("Ignoring release without a version");
        return Ok(None);
    };

    let mut release = Release::new(version);
    release.active_locale = ctx.locale.to_string();

    if let Some(date) = el.attr("date") {
        match parse_iso8601(date) {
            Some(ts) => release.timestamp = Some(ts),
            None => debug!("Invalid ISO-8601 date in release {version}: {date}"),
        }
    }
    // applied after the date so it wins
    if let Some(raw) = el.attr("timestamp") {
        match raw.trim().parse::<u64>() {
            Ok(ts) => release.timestamp = Some(ts),
            Err(_) => debug!("Invalid timestamp in release {version}: {raw}"),
        }
    }
    if let Some(urgency) = el.attr("urgency") {
        release.urgency = UrgencyKind::from_str_loose(urgency);
    }

    for child in el.child_elements() {
        match child.name.as_str() {
            "location" => {
                if let Some(url) = child.trimmed_text() {
                    release.locations.push(url);
                }
            }
            "checksum" => {
                let kind = child.attr("type").and_then(ChecksumKind::from_name);
                match (kind, child.trimmed_text()) {
                    (Some(kind), Some(value)) => release.set_checksum(kind, value),
                    (None, _) => debug!(
                        "Ignoring checksum of unknown type '{}'",
                        child.attr("type").unwrap_or_default()
                    ),
                    (Some(_), None) => {}
                }
            }
            "size" => {
                let kind = child.attr("type").and_then(SizeKind::from_name);
                let size = child.trimmed_text().and_then(|t| t.parse::<u64>().ok());
                if let (Some(kind), Some(size)) = (kind, size) {
                    release.set_size(kind, size);
                }
            }
            "description" => read_description(child, ctx, &mut release.description)?,
            _ => {}
        }
    }

    Ok(Some(release))
}

/// Build a `<releases>` element. Upstream files get ISO-8601 dates,
/// catalogs get raw timestamps.
pub fn write_releases(releases: &[Release], mode: ParserMode) -> Element {
    let mut block = Element::new("releases");
    for release in releases {
        let mut el = Element::new("release").with_attr("version", release.version.as_str());
        if let Some(ts) = release.timestamp {
            match mode {
                ParserMode::Upstream => {
                    if let Some(date) = format_iso8601(ts) {
                        el.set_attr("date", date);
                    }
                }
                ParserMode::Distro => el.set_attr("timestamp", ts.to_string()),
            }
        }
        if release.urgency != UrgencyKind::Unknown {
            el.set_attr("urgency", release.urgency.as_str());
        }

        for location in &release.locations {
            el.push_element(Element::with_text("location", location.as_str()));
        }
        for (kind, value) in &release.checksums {
            el.push_element(Element::with_text("checksum", value.as_str()).with_attr("type", kind.as_str()));
        }
        for (kind, size) in &release.sizes {
            el.push_element(Element::with_text("size", size.to_string()).with_attr("type", kind.as_str()));
        }
        write_description(&mut el, &release.description, mode);

        block.push_element(el);
    }
    block
}

#[cfg(test)]
#[path = "tests/releases_tests.rs"]
mod tests;
