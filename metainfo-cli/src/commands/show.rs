use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use metainfo_core::{Component, NamedKind};
use metainfo_xml::util::format_iso8601;
use metainfo_xml::{ParserConfig, parse_file};

use crate::error::CliError;

/// Print every component in `file`, as a coloured summary or as JSON.
pub(crate) fn run_show(file: &Path, config: &ParserConfig, json: bool) -> Result<(), CliError> {
    let components = parse_file(file, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&components)?);
        return Ok(());
    }

    if components.is_empty() {
        log::warn!("No components found in {}", file.display());
        return Ok(());
    }

    for cpt in &components {
        print_component(cpt);
        log::info!("");
    }
    log::info!(
        "{} component(s) in {}",
        components.len().if_supports_color(Stdout, |t| t.bold()),
        file.display(),
    );
    Ok(())
}

fn print_component(cpt: &Component) {
    let id = if cpt.id.is_empty() { "<no id>" } else { &cpt.id };
    log::info!(
        "{} [{}]",
        id.if_supports_color(Stdout, |t| t.bold()),
        cpt.kind.if_supports_color(Stdout, |t| t.cyan()),
    );

    let field = |label: &str, value: &str| {
        log::info!("  {:<12} {}", format!("{label}:"), value);
    };

    if let Some(name) = cpt.name() {
        field("Name", name);
    }
    if let Some(summary) = cpt.summary() {
        field("Summary", summary);
    }
    if let Some(developer) = cpt.developer_name() {
        field("Developer", developer);
    }
    if let Some(license) = &cpt.project_license {
        field("License", license);
    }
    if !cpt.pkgnames.is_empty() {
        field("Packages", &cpt.pkgnames.join(", "));
    }
    if !cpt.categories.is_empty() {
        field("Categories", &cpt.categories.join(", "));
    }
    if !cpt.keywords().is_empty() {
        field("Keywords", &cpt.keywords().join(", "));
    }
    for (kind, url) in &cpt.urls {
        field(kind.as_str(), url);
    }
    for icon in &cpt.icons {
        field("Icon", &format!("{} ({})", icon.value(), icon.kind()));
    }
    for (kind, id) in &cpt.bundles {
        field("Bundle", &format!("{id} ({kind})"));
    }
    if let Some(release) = cpt.releases.first() {
        let date = release
            .timestamp
            .and_then(format_iso8601)
            .unwrap_or_else(|| "undated".to_string());
        field(
            "Release",
            &format!("{} ({date}, {} total)", release.version, cpt.releases.len()),
        );
    }
    if !cpt.screenshots.is_empty() {
        field("Screenshots", &cpt.screenshots.len().to_string());
    }
    if !cpt.provided.is_empty() {
        let items: Vec<String> = cpt
            .provided
            .iter()
            .map(|item| format!("{}:{}", item.kind, item.value))
            .collect();
        field("Provides", &items.join(", "));
    }
    if !cpt.languages.is_empty() {
        let langs: Vec<String> = cpt
            .languages
            .iter()
            .map(|(locale, pct)| format!("{locale} {pct}%"))
            .collect();
        field("Languages", &langs.join(", "));
    }
    if let Some(origin) = &cpt.origin {
        field(
            "Origin",
            &format!("{origin} (priority {})", cpt.priority),
        );
    }
    if !cpt.is_valid() {
        log::warn!(
            "  {} component has no id",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        );
    }
}
