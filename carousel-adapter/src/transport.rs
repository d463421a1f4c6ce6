/// The rendering surface a carousel adapter drives.
///
/// The engine never touches UI objects; a concrete transport binds these
/// capabilities to the real surface (a DOM track element's `transform` and
/// class list, a TUI layout, ...). Implementations must be idempotent:
/// applying the same offset or flag twice is a visual no-op.
pub trait Transport {
    /// Translates the scrollable strip. `percent` is in percent of one item
    /// width and is ≤ 0 for committed pages; drag previews pass fractional
    /// values.
    fn apply_offset(&mut self, percent: f64);

    /// Enables/suppresses the strip's movement transition. Suppressed while a
    /// drag preview tracks the pointer, restored on release.
    fn set_transition_enabled(&mut self, enabled: bool);

    /// Toggles the container's "dragging" visual hint.
    fn set_drag_hint(&mut self, dragging: bool);

    /// Marks the dot at `index` active (and all others inactive).
    fn set_active_dot(&mut self, index: usize);
}
