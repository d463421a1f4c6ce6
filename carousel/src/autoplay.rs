/// A deadline-driven repeating timer for autoplay.
///
/// This is headless: nothing runs in the background. The adapter advances it by
/// calling [`Autoplay::tick`] with its clock (milliseconds), the same way it
/// drives frame updates. At most one deadline is live per instance —
/// `start` while running is a no-op, and `restart` always stops first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Autoplay {
    interval_ms: u64,
    deadline_ms: Option<u64>,
}

impl Autoplay {
    /// Creates a stopped timer. `interval_ms == 0` disables autoplay: such a
    /// timer never schedules a deadline and never fires.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            deadline_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub(crate) fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Schedules the next fire at `now_ms + interval`.
    ///
    /// No-op when the interval is 0 or a deadline is already pending.
    pub fn start(&mut self, now_ms: u64) {
        if self.interval_ms == 0 || self.deadline_ms.is_some() {
            return;
        }
        self.deadline_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// Cancels the pending deadline. No-op when none is pending.
    pub fn stop(&mut self) {
        self.deadline_ms = None;
    }

    /// Resets the countdown from `now_ms`.
    pub fn restart(&mut self, now_ms: u64) {
        self.stop();
        self.start(now_ms);
    }

    /// Returns `true` (at most once per call) when the deadline has elapsed,
    /// and reschedules the next fire from that moment.
    ///
    /// A late tick fires once rather than bursting to catch up.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = Some(now_ms.saturating_add(self.interval_ms));
                true
            }
            _ => false,
        }
    }
}
