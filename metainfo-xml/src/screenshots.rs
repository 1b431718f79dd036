//! `<screenshots>` blocks.

use log::debug;
use metainfo_core::{DEFAULT_LOCALE, Image, ImageKind, NamedKind, Screenshot, ScreenshotKind};

use crate::config::{ParseContext, ParserMode};
use crate::locale::element_locale;
use crate::media::resolve_media_url;
use crate::tree::Element;

/// Read every `<screenshot>` child. Screenshots left without an image are
/// dropped.
pub fn parse_screenshots(el: &Element, ctx: &ParseContext<'_>) -> Vec<Screenshot> {
    el.child_elements()
        .filter(|c| c.name == "screenshot")
        .map(|c| parse_screenshot(c, ctx))
        .filter(Screenshot::is_valid)
        .collect()
}

fn parse_screenshot(el: &Element, ctx: &ParseContext<'_>) -> Screenshot {
    let mut shot = Screenshot::new();
    shot.active_locale = ctx.locale.to_string();
    if el.attr("type") == Some("default") {
        shot.kind = ScreenshotKind::Default;
    }

    for child in el.child_elements() {
        match child.name.as_str() {
            "image" => {
                if let Some(image) = parse_image(child, ctx) {
                    shot.images.push(image);
                }
            }
            "caption" => {
                if let (Some(locale), Some(text)) = (element_locale(child, ctx), child.trimmed_text()) {
                    shot.caption.set(locale, text);
                }
            }
            _ => {}
        }
    }
    shot
}

fn parse_image(el: &Element, ctx: &ParseContext<'_>) -> Option<Image> {
    let url = el.trimmed_text()?;
    let dimension = |name: &str| {
        el.attr(name)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(0)
    };
    let width = dimension("width");
    let height = dimension("height");

    // catalogs must state the size of every image
    if ctx.mode == ParserMode::Distro && (width == 0 || height == 0) {
        debug!("Ignoring screenshot image without dimensions: {url}");
        return None;
    }

    let kind = if el.attr("type") == Some("thumbnail") {
        ImageKind::Thumbnail
    } else {
        ImageKind::Source
    };
    let url = resolve_media_url(ctx.media_baseurl, &url);
    Some(Image::new(kind, url).with_size(width, height))
}

pub fn write_screenshots(screenshots: &[Screenshot]) -> Element {
    let mut block = Element::new("screenshots");
    for shot in screenshots {
        let mut el = Element::new("screenshot");
        if shot.kind == ScreenshotKind::Default {
            el.set_attr("type", "default");
        }
        for (locale, caption) in shot.caption.iter() {
            let mut cap = Element::with_text("caption", caption.as_str());
            if locale != DEFAULT_LOCALE {
                cap.set_attr("xml:lang", locale);
            }
            el.push_element(cap);
        }
        for image in &shot.images {
            let mut img =
                Element::with_text("image", image.url.as_str()).with_attr("type", image.kind.as_str());
            if image.has_size() {
                img.set_attr("width", image.width.to_string());
                img.set_attr("height", image.height.to_string());
            }
            el.push_element(img);
        }
        block.push_element(el);
    }
    block
}

#[cfg(test)]
#[path = "tests/screenshots_tests.rs"]
mod tests;
