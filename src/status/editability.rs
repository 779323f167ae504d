//! Editability policy.
//!
//! An order may be edited by its customer only while nothing has locked it.
//! Checks accumulate, so callers can show every reason at once instead of
//! the first one found.

use crate::order::{Order, OrderStatus, PaymentStatus};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Statuses in which an order can still be edited.
pub const EDITABLE_STATUSES: [OrderStatus; 2] = [OrderStatus::Pending, OrderStatus::Confirmed];

/// Reasons an order is locked for editing.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EditBlock {
    #[error("editing was disabled for this order")]
    FlagCleared,

    #[error("payment has already been validated")]
    PaymentValidated,

    #[error("orders in status '{0}' can no longer be edited")]
    StatusLocked(OrderStatus),
}

fn require(allowed: bool, block: EditBlock) -> Validation<(), NonEmptyVec<EditBlock>> {
    if allowed {
        Validation::success(())
    } else {
        Validation::fail(block)
    }
}

/// Collect every reason `order` cannot be edited.
///
/// Succeeds only when the editable flag is set, payment is not validated,
/// and the status is one of [`EDITABLE_STATUSES`].
pub fn edit_blockers(order: &Order) -> Validation<(), NonEmptyVec<EditBlock>> {
    let checks = vec![
        require(order.editable, EditBlock::FlagCleared),
        require(
            order.payment_status != PaymentStatus::Paid,
            EditBlock::PaymentValidated,
        ),
        require(
            EDITABLE_STATUSES.contains(&order.status),
            EditBlock::StatusLocked(order.status),
        ),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Check whether the customer may still modify `order` (pure).
///
/// # Example
///
/// ```rust
/// use orderline::{is_editable, Order, OrderStatus, PaymentStatus};
///
/// let order = Order::new("1042", "Ana", "7121920418").with_status(OrderStatus::Confirmed);
/// assert!(is_editable(&order));
///
/// let paid = order.with_payment_status(PaymentStatus::Paid);
/// assert!(!is_editable(&paid));
/// ```
pub fn is_editable(order: &Order) -> bool {
    edit_blockers(order).is_success()
}
