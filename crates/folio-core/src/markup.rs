//! Declarative page attributes: `data-bg` backgrounds and nav-link fragments.

/// CSS `background-image` value for a `data-bg` attribute, or `None` when
/// the attribute is empty.
pub fn background_image_value(data_bg: &str) -> Option<String> {
    let url = data_bg.trim();
    if url.is_empty() {
        return None;
    }
    Some(format!("url('{}')", url.replace('\'', "\\'")))
}

/// Element id a nav link scrolls to: its `href` without the leading `#`.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#').unwrap_or(href);
    if id.is_empty() { None } else { Some(id) }
}

/// Value for the track's `transform` style.
pub fn translate_x(offset: f64) -> String {
    format!("translateX({offset}px)")
}

/// Value for the track's `transition` style during a jump.
pub fn transform_transition(duration_ms: u32) -> String {
    format!("transform {duration_ms}ms ease")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_image_value() {
        assert_eq!(
            background_image_value("img/hero.jpg").as_deref(),
            Some("url('img/hero.jpg')")
        );
        assert_eq!(
            background_image_value("img/o'neil.jpg").as_deref(),
            Some("url('img/o\\'neil.jpg')")
        );
        assert_eq!(background_image_value("   "), None);
    }

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#about"), Some("about"));
        assert_eq!(fragment_id("contact"), Some("contact"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn test_style_values() {
        assert_eq!(translate_x(-12.5), "translateX(-12.5px)");
        assert_eq!(translate_x(0.0), "translateX(0px)");
        assert_eq!(transform_transition(450), "transform 450ms ease");
    }
}
