use crate::config::HEADER_OFFSET;

/// Element id referenced by a same-page link, `None` for `#` or external hrefs.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts the target just below the fixed header.
/// A missing target yields no scroll at all.
pub fn scroll_target(target_offset_top: Option<f64>) -> Option<f64> {
    target_offset_top.map(|top| top - HEADER_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_id_only_for_fragments() {
        assert_eq!(anchor_id("#courses"), Some("courses"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("https://wa.me/"), None);
    }

    #[test]
    fn target_accounts_for_header() {
        assert_eq!(scroll_target(Some(600.0)), Some(520.0));
        assert_eq!(scroll_target(None), None);
    }
}
