/// A lightweight, serializable snapshot of the current page position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageState {
    pub index: usize,
}

/// A lightweight, serializable snapshot of the autoplay timer.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoplayState {
    /// The pending fire time, or `None` when autoplay is stopped.
    pub deadline_ms: Option<u64>,
}

/// A combined snapshot of page + autoplay state.
///
/// This is useful for restoring widget state across frames or sessions without
/// coupling the carousel to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetState {
    pub page: PageState,
    pub autoplay: AutoplayState,
}
