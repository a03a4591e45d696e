use std::time::{Duration, Instant};

use tracing::trace;

/// Proof that the scheduler fired under a particular arming.
///
/// A ticket issued before a `disarm` or a later `arm` is stale and must not
/// be applied.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[must_use]
pub struct TickTicket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Armed {
    period: Duration,
    /// `None` until the first poll after arming anchors it.
    due: Option<Instant>,
}

/// Single-slot periodic timer driven by explicit instants.
///
/// The scheduler never reads a clock; the host passes `now` to [`poll`],
/// so tests can drive it with synthetic instants. At most one tick is ever
/// pending: re-arming replaces the slot and `poll` yields at most one
/// ticket per call.
///
/// [`poll`]: TickScheduler::poll
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    armed: Option<Armed>,
    generation: u64,
}

impl TickScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms with `period`; the deadline is anchored by the next poll.
    pub fn arm(&mut self, period: Duration) {
        self.generation += 1;
        self.armed = Some(Armed { period, due: None });
        trace!(?period, generation = self.generation, "scheduler armed");
    }

    /// Arms with `period`, first tick due at `now + period`.
    pub fn rearm(&mut self, now: Instant, period: Duration) {
        self.generation += 1;
        self.armed = Some(Armed {
            period,
            due: Some(now + period),
        });
        trace!(?period, generation = self.generation, "scheduler re-armed");
    }

    /// Cancels the pending tick and invalidates outstanding tickets.
    pub fn disarm(&mut self) {
        if self.armed.take().is_some() {
            trace!(generation = self.generation, "scheduler disarmed");
        }
        self.generation += 1;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Period of the current arming, if any.
    #[must_use]
    pub fn period(&self) -> Option<Duration> {
        self.armed.map(|armed| armed.period)
    }

    /// Returns a ticket when the deadline has passed, then schedules the
    /// next one a full period after `now`. Missed periods are not replayed.
    pub fn poll(&mut self, now: Instant) -> Option<TickTicket> {
        let armed = self.armed.as_mut()?;

        match armed.due {
            None => {
                armed.due = Some(now + armed.period);
                None
            }
            Some(due) if now >= due => {
                armed.due = Some(now + armed.period);
                Some(TickTicket {
                    generation: self.generation,
                })
            }
            Some(_) => None,
        }
    }

    /// Returns true when `ticket` was issued under the current arming.
    #[must_use]
    pub fn is_current(&self, ticket: TickTicket) -> bool {
        self.armed.is_some() && ticket.generation == self.generation
    }
}
