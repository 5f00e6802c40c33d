//! Per-session state: the consecutive-failure counter.
//!
//! The only mutable state shared across requests in one session. Passed
//! explicitly to the pipeline rather than living in a global.

/// Consecutive failures before the rephrase hint is shown.
const HINT_THRESHOLD: u32 = 3;

/// Per-session context for the orchestration layer.
#[derive(Debug, Default)]
pub struct Session {
    consecutive_failures: u32,
}

impl Session {
    /// Creates a fresh session with no recorded failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failed request (guard rejection or execution error).
    ///
    /// Returns true exactly when the failure count reaches the threshold,
    /// so the hint fires once rather than on every subsequent failure.
    pub fn record_failure(&mut self) -> bool {
        self.consecutive_failures += 1;
        self.consecutive_failures == HINT_THRESHOLD
    }

    /// Records a successful result. Only a non-empty result resets the
    /// counter; an empty result is neither success nor failure.
    pub fn record_success(&mut self, non_empty: bool) {
        if non_empty {
            self.consecutive_failures = 0;
        }
    }

    /// Current consecutive-failure count.
    pub fn failure_count(&self) -> u32 {
        self.consecutive_failures
    }
}
