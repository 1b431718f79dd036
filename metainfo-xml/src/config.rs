//! Request-scoped parser configuration.
//!
//! A [`ParserConfig`] is built once and shared by reference; every parse
//! derives a small [`ParseContext`] from it. Nothing here is mutated while a
//! document is being read.

use std::fmt;
use std::str::FromStr;

use metainfo_core::{DEFAULT_LOCALE, locale_short};

/// Which of the two document shapes is being read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserMode {
    /// A single-component document shipped by the software's authors.
    #[default]
    Upstream,
    /// An aggregated catalog of many components.
    Distro,
}

impl ParserMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upstream => "upstream",
            Self::Distro => "distro",
        }
    }
}

impl fmt::Display for ParserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParserMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upstream" => Ok(Self::Upstream),
            "distro" | "catalog" => Ok(Self::Distro),
            other => Err(format!("unknown mode '{other}' (expected upstream or distro)")),
        }
    }
}

/// Settings shared by all parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Locale whose translations are kept; `"ALL"` keeps every translation.
    pub locale: String,
    /// Origin stamped on components unless the catalog names its own.
    pub origin: Option<String>,
    /// Base URL that relative media references are joined against.
    pub media_baseurl: Option<String>,
    /// Priority stamped on components unless the catalog names its own.
    pub default_priority: i32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            origin: None,
            media_baseurl: None,
            default_priority: 0,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn media_baseurl(mut self, url: impl Into<String>) -> Self {
        self.media_baseurl = Some(url.into());
        self
    }

    pub fn default_priority(mut self, priority: i32) -> Self {
        self.default_priority = priority;
        self
    }
}

/// Per-document view of a [`ParserConfig`].
///
/// Catalog root attributes override origin, media base URL and priority for
/// the components of that one document.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    pub mode: ParserMode,
    pub locale: &'a str,
    /// Language part of `locale`, precomputed for the resolver.
    pub locale_short: &'a str,
    pub origin: Option<&'a str>,
    pub media_baseurl: Option<&'a str>,
    pub priority: i32,
}

impl<'a> ParseContext<'a> {
    pub fn new(config: &'a ParserConfig, mode: ParserMode) -> Self {
        Self {
            mode,
            locale: &config.locale,
            locale_short: locale_short(&config.locale),
            origin: config.origin.as_deref(),
            media_baseurl: config.media_baseurl.as_deref(),
            priority: config.default_priority,
        }
    }

    pub fn with_origin(mut self, origin: Option<&'a str>) -> Self {
        if origin.is_some() {
            self.origin = origin;
        }
        self
    }

    pub fn with_media_baseurl(mut self, url: Option<&'a str>) -> Self {
        if url.is_some() {
            self.media_baseurl = url;
        }
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.locale, "C");
        assert_eq!(config.default_priority, 0);

        let config = ParserConfig::new()
            .locale("de_DE")
            .origin("debian")
            .media_baseurl("https://media.example.org")
            .default_priority(-5);
        let ctx = ParseContext::new(&config, ParserMode::Distro);
        assert_eq!(ctx.locale, "de_DE");
        assert_eq!(ctx.locale_short, "de");
        assert_eq!(ctx.origin, Some("debian"));
        assert_eq!(ctx.priority, -5);
    }

    #[test]
    fn test_context_overrides_keep_config_when_absent() {
        let config = ParserConfig::new().origin("debian");
        let ctx = ParseContext::new(&config, ParserMode::Distro)
            .with_origin(None)
            .with_media_baseurl(Some("https://cdn.example.org"));
        assert_eq!(ctx.origin, Some("debian"));
        assert_eq!(ctx.media_baseurl, Some("https://cdn.example.org"));
        assert_eq!(config.media_baseurl, None);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("distro".parse::<ParserMode>(), Ok(ParserMode::Distro));
        assert_eq!("upstream".parse::<ParserMode>(), Ok(ParserMode::Upstream));
        assert!("yaml".parse::<ParserMode>().is_err());
    }
}
