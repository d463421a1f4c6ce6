//! Page-chrome helpers shipped alongside the slider: a mobile nav toggle, the
//! header solidify-on-scroll rule, in-page anchor resolution, and the footer
//! year. These are one-line effects with no invariants; they live here so
//! adapters don't re-derive the thresholds and attribute strings.

/// Collapsible mobile navigation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the panel and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Escape key and in-panel link clicks both close the panel.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// `aria-expanded` attribute value for the toggle button.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Whether body scrolling should be locked: only while open and under the
    /// mobile media query.
    pub fn locks_body_scroll(&self, narrow_viewport: bool) -> bool {
        self.open && narrow_viewport
    }
}

/// Whether the header gains its "solid" visual state: once scroll position
/// exceeds 10% of the hero's height. A missing hero measures 0, so any scroll
/// at all solidifies.
pub fn header_is_solid(scroll_y: f64, hero_height: f64) -> bool {
    scroll_y > hero_height * 0.1
}

/// Resolves an in-page anchor href (`"#about"` → `Some("about")`).
///
/// Non-fragment links and the bare `"#"` yield `None`: the host should leave
/// those to default navigation.
pub fn anchor_fragment(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Text for the footer year element.
pub fn footer_year_text(year: i32) -> alloc::string::String {
    alloc::format!("{year}")
}
