//! Modal viewer state: which image is shown and how clicks are handled.

/// How the modal behaves for the row that opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    /// Left/right clicks cycle through the row's images.
    Gallery,
    /// Single image plus an external-open control.
    #[default]
    Link,
}

impl ModalMode {
    /// Exactly `gallery_label` selects gallery mode; anything else, including
    /// no label at all, selects link mode.
    pub fn from_label(label: Option<&str>, gallery_label: &str) -> Self {
        match label.map(str::trim) {
            Some(label) if label == gallery_label => Self::Gallery,
            _ => Self::Link,
        }
    }
}

/// The image list of an open modal and the current position in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    urls: Vec<String>,
    index: usize,
    mode: ModalMode,
}

impl Gallery {
    /// Opens on `url`.
    ///
    /// A URL missing from `urls` is appended so the modal always has
    /// something to show.
    pub fn open(url: &str, urls: &[String], mode: ModalMode) -> Self {
        let mut urls = urls.to_vec();
        let index = match urls.iter().position(|u| u == url) {
            Some(index) => index,
            None => {
                urls.push(url.to_string());
                urls.len() - 1
            }
        };
        Self { urls, index, mode }
    }

    pub fn mode(&self) -> ModalMode {
        self.mode
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// URL of the image currently shown.
    pub fn current(&self) -> &str {
        &self.urls[self.index]
    }

    pub fn show_next(&mut self) -> &str {
        self.index = (self.index + 1) % self.urls.len();
        self.current()
    }

    pub fn show_prev(&mut self) -> &str {
        self.index = (self.index + self.urls.len() - 1) % self.urls.len();
        self.current()
    }

    /// Handles a click inside the content area.
    ///
    /// In gallery mode a click right of the midline advances and anything
    /// else goes back. Returns the new URL, or `None` in link mode.
    pub fn click(&mut self, offset_x: f64, content_width: f64) -> Option<&str> {
        match self.mode {
            ModalMode::Link => None,
            ModalMode::Gallery if offset_x > content_width / 2.0 => Some(self.show_next()),
            ModalMode::Gallery => Some(self.show_prev()),
        }
    }

    /// Target of the external-open control; only shown in link mode.
    pub fn external_href(&self) -> Option<&str> {
        match self.mode {
            ModalMode::Link => Some(self.current()),
            ModalMode::Gallery => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    #[test]
    fn test_mode_from_label() {
        assert_eq!(ModalMode::from_label(Some("포스터"), "포스터"), ModalMode::Gallery);
        assert_eq!(ModalMode::from_label(Some(" 포스터\n"), "포스터"), ModalMode::Gallery);
        assert_eq!(ModalMode::from_label(Some("영상"), "포스터"), ModalMode::Link);
        assert_eq!(ModalMode::from_label(None, "포스터"), ModalMode::Link);
    }

    #[test]
    fn test_gallery_cycles_circularly() {
        let mut gallery = Gallery::open("A", &abc(), ModalMode::Gallery);
        assert_eq!(gallery.index(), 0);
        assert_eq!(gallery.show_next(), "B");
        assert_eq!(gallery.index(), 1);

        let mut gallery = Gallery::open("A", &abc(), ModalMode::Gallery);
        assert_eq!(gallery.show_prev(), "C");
        assert_eq!(gallery.index(), 2);
        assert_eq!(gallery.show_next(), "A");
    }

    #[test]
    fn test_click_halves_in_gallery_mode() {
        let mut gallery = Gallery::open("B", &abc(), ModalMode::Gallery);
        assert_eq!(gallery.click(300.0, 400.0), Some("C"));
        assert_eq!(gallery.click(100.0, 400.0), Some("B"));
        // Exactly on the midline counts as the left half.
        assert_eq!(gallery.click(200.0, 400.0), Some("A"));
        assert_eq!(gallery.external_href(), None);
    }

    #[test]
    fn test_link_mode_ignores_clicks() {
        let mut gallery = Gallery::open("B", &abc(), ModalMode::Link);
        assert_eq!(gallery.click(390.0, 400.0), None);
        assert_eq!(gallery.current(), "B");
        assert_eq!(gallery.external_href(), Some("B"));
    }

    #[test]
    fn test_unknown_url_is_appended() {
        let gallery = Gallery::open("Z", &abc(), ModalMode::Gallery);
        assert_eq!(gallery.len(), 4);
        assert_eq!(gallery.current(), "Z");

        let gallery = Gallery::open("solo", &[], ModalMode::Link);
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.current(), "solo");
    }
}
