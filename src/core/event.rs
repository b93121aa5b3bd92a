use crate::error::{Error, Result};
use ordered_float::NotNan;
use std::cmp::Ordering;

/// Kinds of events a particle can be scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind<const D: usize> {
    /// Collision with partner particle `n2`. `count2` snapshots the
    /// partner's collision counter at prediction time; a mismatch at
    /// processing time means the partner has collided since and the
    /// prediction is void.
    Collision { n2: u32, count2: u64 },
    /// Crossing into the neighboring cell `cell2`.
    Cell { cell2: [u32; D] },
}

/// The pending event of a single particle.
///
/// Every particle owns exactly one entry in the event list. The `t`
/// field doubles as the staleness check: a queue item whose time does
/// not match `t` bit for bit refers to a superseded prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<const D: usize> {
    /// Absolute event time.
    pub t: f64,
    /// What happens at `t`.
    pub kind: EventKind<D>,
}

impl<const D: usize> Event<D> {
    /// Placeholder for a particle without a predicted event. The time
    /// sorts after every reachable simulation time, so a stationary
    /// particle's queue entry is simply never popped.
    pub fn unscheduled(cell: [u32; D]) -> Self {
        Self {
            t: f64::MAX,
            kind: EventKind::Cell { cell2: cell },
        }
    }
}

/// Entry of the time-ordered event queue: an event time paired with the
/// index of the particle it belongs to.
///
/// Ordering is by time, then by particle index, so queue order is a
/// total order and runs are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueItem {
    t: NotNan<f64>,
    /// Index of the particle whose event this is.
    pub n: u32,
}

impl QueueItem {
    /// Create a queue item, rejecting NaN times.
    pub fn new(t: f64, n: u32) -> Result<Self> {
        let t = NotNan::new(t)
            .map_err(|_| Error::InvalidParam("event time cannot be NaN".into()))?;
        Ok(Self { t, n })
    }

    /// Returns the raw event time.
    #[inline]
    pub fn time(&self) -> f64 {
        self.t.into_inner()
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.t.cmp(&other.t) {
            Ordering::Equal => self.n.cmp(&other.n),
            o => o,
        }
    }
}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
