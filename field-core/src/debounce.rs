/// Coalesces bursts of events into a single delayed action.
///
/// Every [`Debouncer::schedule`] cancels whatever was pending and arms a
/// new deadline at `now + quiet`. [`Debouncer::poll`] hands out the
/// latest value once that deadline has passed, and only once.
///
/// Time is measured in host seconds (`f64`), e.g. egui's `InputState::time`.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: f64,
    pending: Option<(f64, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: f64) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Replaces any pending action with `value`, due at `now + quiet`.
    pub fn schedule(&mut self, value: T, now: f64) {
        self.pending = Some((now + self.quiet, value));
    }

    /// Returns the pending value if its deadline has been reached.
    pub fn poll(&mut self, now: f64) -> Option<T> {
        match self.pending {
            Some((deadline, _)) if now >= deadline => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending action fires, if any.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.pending
            .as_ref()
            .map(|(deadline, _)| (deadline - now).max(0.0))
    }
}
