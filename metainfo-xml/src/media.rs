/// Join a media reference against the catalog's base URL.
///
/// Values that already carry a URL scheme are returned unchanged, as are all
/// values when no base is configured.
pub fn resolve_media_url(base: Option<&str>, value: &str) -> String {
    match base {
        Some(base) if !base.is_empty() && !value.contains("://") => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            value.trim_start_matches('/')
        ),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_with_single_slash() {
        let base = Some("https://media.example.org/");
        assert_eq!(
            resolve_media_url(base, "/shots/a.png"),
            "https://media.example.org/shots/a.png"
        );
        assert_eq!(
            resolve_media_url(Some("https://media.example.org"), "shots/a.png"),
            "https://media.example.org/shots/a.png"
        );
    }

    #[test]
    fn test_absolute_urls_and_missing_base_untouched() {
        let base = Some("https://media.example.org");
        assert_eq!(
            resolve_media_url(base, "http://other.org/a.png"),
            "http://other.org/a.png"
        );
        assert_eq!(resolve_media_url(None, "shots/a.png"), "shots/a.png");
        assert_eq!(resolve_media_url(Some(""), "shots/a.png"), "shots/a.png");
    }
}
