/// Number of pages needed to show `item_count` items, `items_per_page` at a time.
///
/// Never returns 0: an empty item set still addresses one (empty) page, which
/// keeps index math total.
pub fn page_count(item_count: usize, items_per_page: usize) -> usize {
    let per = items_per_page.max(1);
    item_count.div_ceil(per).max(1)
}

/// Page-index bookkeeping: clamping, looping, and the current index.
///
/// Out-of-range targets are always absorbed (wrapped or saturated), never
/// rejected — there are no error conditions here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paginator {
    page_count: usize,
    loop_enabled: bool,
    index: usize,
}

impl Paginator {
    pub fn new(page_count: usize, loop_enabled: bool) -> Self {
        Self {
            page_count: page_count.max(1),
            loop_enabled,
            index: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Maps an arbitrary target onto a valid page index.
    ///
    /// Looping wraps via euclidean modulo in both directions, so `-1` lands on
    /// the last page and `page_count` lands on the first, however far out the
    /// target is. Without looping the target saturates to `[0, page_count - 1]`.
    pub fn clamp(&self, target: i64) -> usize {
        let pages = self.page_count as i64;
        if self.loop_enabled {
            target.rem_euclid(pages) as usize
        } else {
            target.clamp(0, pages - 1) as usize
        }
    }

    /// Sets the current index to the clamped target and returns it.
    pub fn go_to(&mut self, target: i64) -> usize {
        self.index = self.clamp(target);
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.index as i64 + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.index as i64 - 1)
    }
}
