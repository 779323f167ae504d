//! Transition table and validation.

use super::error::StatusError;
use crate::core::StatusChange;
use crate::order::OrderStatus;
use chrono::Utc;
use tracing::debug;

/// Statuses reachable directly from `status`.
///
/// `Confirmed -> Pending` is the only backward edge. Nothing leaves
/// `Delivered` or `Cancelled`, and shipped orders cannot be cancelled.
pub const fn successors(status: OrderStatus) -> &'static [OrderStatus] {
    use OrderStatus::*;

    match status {
        Pending => &[Confirmed, Cancelled],
        Confirmed => &[Paid, Cancelled, Pending],
        Paid => &[Preparing, Shipped, Cancelled],
        Preparing => &[Shipped, Cancelled],
        Shipped => &[Received, Delivered],
        Received => &[Delivered],
        Delivered => &[],
        Cancelled => &[],
    }
}

/// Check whether `requested` is a direct successor of `current` (pure).
pub fn can_transition(current: OrderStatus, requested: OrderStatus) -> bool {
    successors(current).contains(&requested)
}

/// Validate a requested status change.
///
/// # Example
///
/// ```rust
/// use orderline::{validate_transition, OrderStatus, StatusError};
///
/// assert!(validate_transition(OrderStatus::Confirmed, OrderStatus::Pending).is_ok());
///
/// let err = validate_transition(OrderStatus::Shipped, OrderStatus::Cancelled).unwrap_err();
/// assert_eq!(err.to_string(), "cannot change order status from 'shipped' to 'cancelled'");
/// ```
pub fn validate_transition(
    current: OrderStatus,
    requested: OrderStatus,
) -> Result<(), StatusError> {
    if can_transition(current, requested) {
        return Ok(());
    }

    debug!(from = %current, to = %requested, "rejected order status transition");
    Err(StatusError::InvalidTransition {
        from: current,
        to: requested,
    })
}

/// Validate a status change given by wire names.
///
/// Names outside the enumeration fail with [`StatusError::InvalidArgument`]
/// before the table is consulted.
pub fn validate_named(current: &str, requested: &str) -> Result<(), StatusError> {
    let current: OrderStatus = current.parse()?;
    let requested: OrderStatus = requested.parse()?;
    validate_transition(current, requested)
}

/// Validate a change and stamp it for the order repository to persist.
pub fn plan_transition(
    current: OrderStatus,
    requested: OrderStatus,
) -> Result<StatusChange<OrderStatus>, StatusError> {
    validate_transition(current, requested)?;
    Ok(StatusChange {
        from: current,
        to: requested,
        timestamp: Utc::now(),
    })
}
