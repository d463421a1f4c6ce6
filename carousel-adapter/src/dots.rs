use alloc::format;
use alloc::string::String;

use carousel::Carousel;

/// One dot-indicator marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// Iterates the dot indicator without allocations: one dot per page, exactly
/// one active, mirroring the carousel's current index.
pub fn for_each_dot(c: &Carousel, mut f: impl FnMut(Dot)) {
    let active = c.current_index();
    for index in 0..c.page_count() {
        f(Dot {
            index,
            active: index == active,
        });
    }
}

/// The accessible label for a dot button, matching the original markup
/// ("Go to slide 1" for the first page).
pub fn dot_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}

/// `aria-pressed` attribute value for a dot.
pub fn aria_pressed(active: bool) -> &'static str {
    if active { "true" } else { "false" }
}
