//! Loading-state bookkeeping between screen transitions and skeletons.

/// Which skeleton to draw while a transition is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Stat-tile skeleton for the overview screen.
    Overview,
    /// Card-grid skeleton for the student listing.
    Listing,
}

/// Tracks whether an asynchronous screen transition is in flight and
/// which skeleton stands in for the screen meanwhile.
///
/// Owned by the root app state and mutated only on the event-loop task,
/// so transitions are applied strictly in event order. The render pass
/// reads the committed state once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadingCoordinator {
    active: Option<Placeholder>,
}

impl LoadingCoordinator {
    /// Create an idle coordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a transition as in flight, showing `view`'s skeleton.
    ///
    /// Calling this while already loading overwrites the active view
    /// (last writer wins).
    pub fn begin(&mut self, view: Placeholder) {
        self.active = Some(view);
    }

    /// Mark the in-flight transition as finished. Idempotent.
    pub fn end(&mut self) {
        self.active = None;
    }

    /// Whether a transition is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.active.is_some()
    }

    /// The skeleton to draw, when loading.
    pub fn active_view(&self) -> Option<Placeholder> {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_and_end_round_trip() {
        let mut coordinator = LoadingCoordinator::new();
        assert!(!coordinator.is_loading());
        assert_eq!(coordinator.active_view(), None);

        coordinator.begin(Placeholder::Listing);
        assert!(coordinator.is_loading());
        assert_eq!(coordinator.active_view(), Some(Placeholder::Listing));

        coordinator.end();
        assert!(!coordinator.is_loading());
        assert_eq!(coordinator.active_view(), None);
    }

    #[test]
    fn begin_while_loading_overwrites_the_view() {
        let mut coordinator = LoadingCoordinator::new();
        coordinator.begin(Placeholder::Listing);
        coordinator.begin(Placeholder::Overview);
        assert_eq!(coordinator.active_view(), Some(Placeholder::Overview));

        // No residual listing tag leaks into the next begin.
        coordinator.end();
        assert_eq!(coordinator.active_view(), None);
        coordinator.begin(Placeholder::Overview);
        assert_eq!(coordinator.active_view(), Some(Placeholder::Overview));
    }

    #[test]
    fn end_is_idempotent() {
        let mut coordinator = LoadingCoordinator::new();
        coordinator.begin(Placeholder::Overview);
        coordinator.end();
        coordinator.end();
        assert!(!coordinator.is_loading());
        assert_eq!(coordinator.active_view(), None);
    }
}
