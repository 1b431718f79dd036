use serde::Serialize;

use crate::kinds::{ImageKind, ScreenshotKind};
use crate::locale::{DEFAULT_LOCALE, LocaleTable};

/// One rendition of a screenshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Image {
    pub kind: ImageKind,
    /// Width in pixels, 0 if unspecified.
    pub width: u32,
    /// Height in pixels, 0 if unspecified.
    pub height: u32,
    pub url: String,
}

impl Image {
    pub fn new(kind: ImageKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            width: 0,
            height: 0,
            url: url.into(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn has_size(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// A screenshot with its images and caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screenshot {
    pub kind: ScreenshotKind,
    pub caption: LocaleTable<String>,
    pub images: Vec<Image>,
    #[serde(skip)]
    pub active_locale: String,
}

impl Default for Screenshot {
    fn default() -> Self {
        Self {
            kind: ScreenshotKind::Normal,
            caption: LocaleTable::new(),
            images: Vec::new(),
            active_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Screenshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caption for the active locale.
    pub fn caption(&self) -> Option<&str> {
        self.caption.get_for(&self.active_locale).map(String::as_str)
    }

    /// A screenshot without any image has nothing to show.
    pub fn is_valid(&self) -> bool {
        !self.images.is_empty()
    }
}
