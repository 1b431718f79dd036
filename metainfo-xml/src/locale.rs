//! Locale resolution for translated elements.

use metainfo_core::{ALL_LOCALES, DEFAULT_LOCALE};

use crate::config::ParseContext;
use crate::tree::Element;

/// The locale an element is tagged with, from `xml:lang` or `lang`.
///
/// An empty attribute counts as untagged.
pub fn element_lang(el: &Element) -> Option<&str> {
    el.attr("xml:lang")
        .or_else(|| el.attr("lang"))
        .filter(|lang| !lang.is_empty())
}

/// Decide whether a translation tagged `lang` applies to the active locale.
///
/// Returns the label to store the value under, or `None` when the
/// translation is for some other locale.
pub fn resolve_locale(lang: Option<&str>, active: &str, active_short: &str) -> Option<String> {
    let Some(lang) = lang else {
        return Some(DEFAULT_LOCALE.to_string());
    };
    if active == ALL_LOCALES {
        return Some(lang.to_string());
    }
    if lang == active || lang == active_short {
        return Some(active.to_string());
    }
    None
}

/// [`resolve_locale`] for an element under a parse context.
pub fn element_locale(el: &Element, ctx: &ParseContext<'_>) -> Option<String> {
    resolve_locale(element_lang(el), ctx.locale, ctx.locale_short)
}
