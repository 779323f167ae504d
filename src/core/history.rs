//! Status change history.
//!
//! Applied changes are immutable records; a history is an ordered list of
//! them that grows by returning new values. Keeping and persisting a history
//! is up to the caller.

use super::status::Status;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied status change.
///
/// Produced by [`plan_transition`](crate::status::plan_transition) once a
/// change has been validated. Persisting it is the caller's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StatusChange<S: Status> {
    /// The status being left
    pub from: S,
    /// The status being entered
    pub to: S,
    /// When the change was validated
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of status changes.
///
/// A caller-side convenience for services that keep an audit trail next to
/// the order record. Nothing in this crate stores or consults it; the status
/// machine only ever looks at the snapshot it is given.
///
/// History is immutable - [`record`](Self::record) returns a new history
/// with the change appended.
///
/// # Example
///
/// ```rust
/// use orderline::{plan_transition, OrderStatus, StatusHistory};
///
/// let history = StatusHistory::new();
/// let history = history.record(plan_transition(OrderStatus::Pending, OrderStatus::Confirmed)?);
/// let history = history.record(plan_transition(OrderStatus::Confirmed, OrderStatus::Paid)?);
///
/// assert_eq!(
///     history.path(),
///     vec![&OrderStatus::Pending, &OrderStatus::Confirmed, &OrderStatus::Paid]
/// );
/// assert_eq!(history.current(), Some(&OrderStatus::Paid));
/// # Ok::<(), orderline::StatusError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StatusHistory<S: Status> {
    changes: Vec<StatusChange<S>>,
}

impl<S: Status> Default for StatusHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Status> StatusHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, change: StatusChange<S>) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// Get the path of statuses traversed.
    ///
    /// Returns the `from` status of the first change, then the `to` status
    /// of every change, in order. Empty when nothing was recorded.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.changes.first() {
            path.push(&first.from);
        }
        for change in &self.changes {
            path.push(&change.to);
        }
        path
    }

    /// Status reached by the most recent change.
    pub fn current(&self) -> Option<&S> {
        self.changes.last().map(|change| &change.to)
    }

    /// Time elapsed between the first and last recorded change.
    ///
    /// Returns `None` when the history is empty or the timestamps run
    /// backwards.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.changes.first()?, self.changes.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Get all changes in order.
    pub fn changes(&self) -> &[StatusChange<S>] {
        &self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderStatus;

    fn change(
        from: OrderStatus,
        to: OrderStatus,
        timestamp: DateTime<Utc>,
    ) -> StatusChange<OrderStatus> {
        StatusChange {
            from,
            to,
            timestamp,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StatusHistory<OrderStatus> = StatusHistory::new();
        assert!(history.changes().is_empty());
        assert!(history.path().is_empty());
        assert!(history.current().is_none());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_does_not_mutate_original() {
        let history = StatusHistory::new();
        let updated = history.record(change(
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            Utc::now(),
        ));

        assert_eq!(history.changes().len(), 0);
        assert_eq!(updated.changes().len(), 1);
    }

    #[test]
    fn path_follows_recorded_order() {
        let now = Utc::now();
        let history = StatusHistory::new()
            .record(change(OrderStatus::Pending, OrderStatus::Confirmed, now))
            .record(change(OrderStatus::Confirmed, OrderStatus::Pending, now))
            .record(change(OrderStatus::Pending, OrderStatus::Cancelled, now));

        assert_eq!(
            history.path(),
            vec![
                &OrderStatus::Pending,
                &OrderStatus::Confirmed,
                &OrderStatus::Pending,
                &OrderStatus::Cancelled,
            ]
        );
        assert_eq!(history.current(), Some(&OrderStatus::Cancelled));
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = StatusHistory::new()
            .record(change(OrderStatus::Paid, OrderStatus::Shipped, start))
            .record(change(
                OrderStatus::Shipped,
                OrderStatus::Delivered,
                start + chrono::Duration::seconds(90),
            ));

        assert_eq!(history.duration(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn history_roundtrips_through_json() {
        let history = StatusHistory::new().record(change(
            OrderStatus::Paid,
            OrderStatus::Preparing,
            Utc::now(),
        ));

        let json = serde_json::to_string(&history).unwrap();
        let restored: StatusHistory<OrderStatus> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, history);
    }
}
