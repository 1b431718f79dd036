//! CLI settings (`~/.config/metainfo/settings.toml`).
//!
//! Each parser setting resolves through a priority chain: command-line flag,
//! then the `[parser]` table of the settings file, then the built-in default.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use metainfo_core::ALL_LOCALES;
use metainfo_xml::ParserConfig;

use crate::error::CliError;

/// Locale used when neither a flag nor the settings file names one.
///
/// The CLI keeps every translation unless told otherwise, so conversions
/// never lose data.
pub(crate) const DEFAULT_LOCALE: &str = ALL_LOCALES;

/// Canonical path to the settings file: `~/.config/metainfo/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("metainfo").join("settings.toml")
}

/// TOML settings file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub parser: ParserSettings,
}

/// The `[parser]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct ParserSettings {
    pub locale: Option<String>,
    pub origin: Option<String>,
    pub media_baseurl: Option<String>,
}

/// Where a resolved setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingSource {
    Flag,
    ConfigFile,
    Default,
    Missing,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub(crate) struct Overrides {
    pub locale: Option<String>,
    pub origin: Option<String>,
}

/// A setting value together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolved {
    pub value: Option<String>,
    pub source: SettingSource,
}

impl Resolved {
    fn pick(flag: Option<&String>, file: Option<&String>, default: Option<&str>) -> Self {
        if let Some(v) = flag {
            Self { value: Some(v.clone()), source: SettingSource::Flag }
        } else if let Some(v) = file {
            Self { value: Some(v.clone()), source: SettingSource::ConfigFile }
        } else if let Some(v) = default {
            Self { value: Some(v.to_string()), source: SettingSource::Default }
        } else {
            Self { value: None, source: SettingSource::Missing }
        }
    }
}

impl Settings {
    /// Load the settings file, or defaults when it does not exist.
    pub(crate) fn load() -> Result<Self, CliError> {
        Self::load_from(&settings_path())
    }

    pub(crate) fn load_from(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            log::debug!("No settings file at {}", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
    }

    pub(crate) fn from_toml_str(contents: &str) -> Result<Self, CliError> {
        toml::from_str(contents).map_err(|e| CliError::config(e.to_string()))
    }

    pub(crate) fn resolve_locale(&self, overrides: &Overrides) -> Resolved {
        Resolved::pick(
            overrides.locale.as_ref(),
            self.parser.locale.as_ref(),
            Some(DEFAULT_LOCALE),
        )
    }

    pub(crate) fn resolve_origin(&self, overrides: &Overrides) -> Resolved {
        Resolved::pick(overrides.origin.as_ref(), self.parser.origin.as_ref(), None)
    }

    pub(crate) fn resolve_media_baseurl(&self) -> Resolved {
        Resolved::pick(None, self.parser.media_baseurl.as_ref(), None)
    }

    /// Build the parser configuration for one command invocation.
    pub(crate) fn parser_config(&self, overrides: &Overrides) -> ParserConfig {
        let mut config = ParserConfig::new();
        if let Some(locale) = self.resolve_locale(overrides).value {
            config = config.locale(locale);
        }
        if let Some(origin) = self.resolve_origin(overrides).value {
            config = config.origin(origin);
        }
        if let Some(url) = self.resolve_media_baseurl().value {
            config = config.media_baseurl(url);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_parser_table() {
        let settings = Settings::from_toml_str(
            r#"
[parser]
locale = "de_DE"
origin = "example-main"
media_baseurl = "https://media.example.org"
"#,
        )
        .unwrap();
        assert_eq!(settings.parser.locale.as_deref(), Some("de_DE"));
        assert_eq!(settings.parser.origin.as_deref(), Some("example-main"));
        assert_eq!(
            settings.parser.media_baseurl.as_deref(),
            Some("https://media.example.org")
        );
    }

    #[test]
    fn empty_and_partial_files_use_defaults() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
        let settings = Settings::from_toml_str("[parser]\norigin = \"x\"\n").unwrap();
        assert_eq!(settings.parser.locale, None);
        assert_eq!(settings.parser.origin.as_deref(), Some("x"));
    }

    #[test]
    fn malformed_file_is_config_error() {
        let err = Settings::from_toml_str("[parser\nlocale = ").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn flags_beat_file_beat_defaults() {
        let settings = Settings::from_toml_str("[parser]\nlocale = \"fr\"\n").unwrap();

        let resolved = settings.resolve_locale(&Overrides::default());
        assert_eq!(resolved.value.as_deref(), Some("fr"));
        assert_eq!(resolved.source, SettingSource::ConfigFile);

        let overrides = Overrides {
            locale: Some("de_DE".into()),
            origin: None,
        };
        let resolved = settings.resolve_locale(&overrides);
        assert_eq!(resolved.value.as_deref(), Some("de_DE"));
        assert_eq!(resolved.source, SettingSource::Flag);

        let resolved = Settings::default().resolve_locale(&Overrides::default());
        assert_eq!(resolved.value.as_deref(), Some("ALL"));
        assert_eq!(resolved.source, SettingSource::Default);

        let resolved = Settings::default().resolve_origin(&Overrides::default());
        assert_eq!(resolved.source, SettingSource::Missing);
    }

    #[test]
    fn parser_config_combines_sources() {
        let settings =
            Settings::from_toml_str("[parser]\nmedia_baseurl = \"https://m.example.org\"\n")
                .unwrap();
        let overrides = Overrides {
            locale: None,
            origin: Some("local".into()),
        };
        let config = settings.parser_config(&overrides);
        assert_eq!(config.locale, "ALL");
        assert_eq!(config.origin.as_deref(), Some("local"));
        assert_eq!(config.media_baseurl.as_deref(), Some("https://m.example.org"));
    }

    #[test]
    fn load_from_missing_and_existing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());

        std::fs::write(&path, "[parser]\nlocale = \"C\"\n").unwrap();
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.parser.locale.as_deref(), Some("C"));
    }

    #[test]
    fn settings_path_ends_in_metainfo_dir() {
        let path = settings_path();
        assert!(path.ends_with("metainfo/settings.toml"));
    }
}
