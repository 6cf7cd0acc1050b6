//! Change monitor and refresh debouncer
//!
//! Both are plain state: the runtime owns the timers and delivers
//! `SampleTick` / `RefreshDue` messages carrying the generation or token that
//! was current when the timer was armed. Anything stale is dropped, which is
//! how stopping and superseding work without cancelling threads.

use super::tracker::TrackedDocument;

/// Periodic sampler for the tracked document.
///
/// At most one sampling chain is active: starting a new one bumps the
/// generation, which orphans any tick still in flight for the old one.
#[derive(Debug, Clone, Default)]
pub struct ChangeMonitor {
    target: Option<TrackedDocument>,
    generation: u64,
}

impl ChangeMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start monitoring `doc`, stopping any previous chain first.
    ///
    /// Returns the generation the first tick must carry.
    pub fn start(&mut self, doc: TrackedDocument) -> u64 {
        self.stop();
        tracing::debug!(
            "monitor: start gen={} for {} (view {})",
            self.generation,
            doc.path,
            doc.view.0
        );
        self.target = Some(doc);
        self.generation
    }

    /// Stop sampling. Safe to call when already stopped.
    pub fn stop(&mut self) {
        if let Some(doc) = self.target.take() {
            tracing::debug!("monitor: stop gen={} for {}", self.generation, doc.path);
        }
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_running(&self) -> bool {
        self.target.is_some()
    }

    /// Whether the running chain was started for exactly `doc`
    pub fn is_monitoring(&self, doc: &TrackedDocument) -> bool {
        self.target.as_ref() == Some(doc)
    }

    /// The document the running chain was started for
    pub fn target(&self) -> Option<&TrackedDocument> {
        self.target.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a tick armed with `generation` belongs to the running chain
    pub fn accepts(&self, generation: u64) -> bool {
        self.target.is_some() && generation == self.generation
    }
}

/// Single-slot delayed refresh.
///
/// Each [`RefreshDebouncer::schedule`] issues a new token and supersedes the
/// previous one, so a burst of triggers restarts the delay and only the last
/// timer to fire actually refreshes.
#[derive(Debug, Clone, Default)]
pub struct RefreshDebouncer {
    pending: Option<u64>,
    next_token: u64,
}

impl RefreshDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the pending refresh, returning its token
    pub fn schedule(&mut self) -> u64 {
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some(self.next_token);
        self.next_token
    }

    /// Consume the pending refresh if `token` is the latest one issued
    pub fn take_if_current(&mut self, token: u64) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop the pending refresh. Safe to call when nothing is pending.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ViewId;

    fn doc(view: u64, path: &str) -> TrackedDocument {
        TrackedDocument {
            view: ViewId(view),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_start_orphans_previous_generation() {
        let mut monitor = ChangeMonitor::new();
        let first = monitor.start(doc(1, "a.md"));
        assert!(monitor.accepts(first));

        let second = monitor.start(doc(2, "b.md"));
        assert_ne!(first, second);
        assert!(!monitor.accepts(first));
        assert!(monitor.accepts(second));
        assert!(monitor.is_monitoring(&doc(2, "b.md")));
        assert!(!monitor.is_monitoring(&doc(1, "a.md")));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut monitor = ChangeMonitor::new();
        let generation = monitor.start(doc(1, "a.md"));
        monitor.stop();
        monitor.stop();
        assert!(!monitor.is_running());
        assert!(!monitor.accepts(generation));
    }

    #[test]
    fn test_debouncer_only_latest_token_fires() {
        let mut debounce = RefreshDebouncer::new();
        let tokens: Vec<u64> = (0..5).map(|_| debounce.schedule()).collect();

        let fired = tokens
            .iter()
            .filter(|t| debounce.take_if_current(**t))
            .count();
        assert_eq!(fired, 1);
        assert!(!debounce.is_pending());
    }

    #[test]
    fn test_debouncer_cancel() {
        let mut debounce = RefreshDebouncer::new();
        let token = debounce.schedule();
        debounce.cancel();
        debounce.cancel();
        assert!(!debounce.take_if_current(token));
    }
}
