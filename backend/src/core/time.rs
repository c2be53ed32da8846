//! Wall-clock budget for the settlement search
//!
//! The search runs against a hard wall-clock cutoff. The clock is started once
//! per search run and polled cooperatively at the top of every recursive call,
//! so there is no external interrupt: pending frames simply unwind once the
//! budget is spent.

use std::time::{Duration, Instant};

/// Tracks elapsed time against an optional search budget
///
/// # Example
/// ```
/// use settlement_planner_core_rs::SearchClock;
/// use std::time::Duration;
///
/// let clock = SearchClock::start(Some(Duration::from_secs(60)));
/// assert!(!clock.is_expired());
/// assert_eq!(clock.budget(), Some(Duration::from_secs(60)));
///
/// let unbounded = SearchClock::unbounded();
/// assert!(!unbounded.is_expired());
/// assert_eq!(unbounded.remaining(), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SearchClock {
    /// Instant the search run started
    started_at: Instant,
    /// Total allowed wall-clock time (None = no cutoff)
    budget: Option<Duration>,
}

impl SearchClock {
    /// Start a clock now with the given budget
    pub fn start(budget: Option<Duration>) -> Self {
        Self {
            started_at: Instant::now(),
            budget,
        }
    }

    /// Start a clock that never expires (exhaustive verification runs)
    pub fn unbounded() -> Self {
        Self::start(None)
    }

    /// Time spent since the clock was started
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Configured budget, if any
    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Time left before the cutoff (saturates at zero)
    ///
    /// Returns `None` for an unbounded clock.
    pub fn remaining(&self) -> Option<Duration> {
        self.budget
            .map(|budget| budget.saturating_sub(self.elapsed()))
    }

    /// Whether the budget has been used up
    ///
    /// # Example
    /// ```
    /// use settlement_planner_core_rs::SearchClock;
    /// use std::time::Duration;
    ///
    /// let clock = SearchClock::start(Some(Duration::ZERO));
    /// assert!(clock.is_expired());
    /// ```
    pub fn is_expired(&self) -> bool {
        match self.budget {
            Some(budget) => self.elapsed() >= budget,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_budget_has_no_time_remaining() {
        let clock = SearchClock::start(Some(Duration::ZERO));
        assert_eq!(clock.remaining(), Some(Duration::ZERO));
    }
}
