//! Status machine errors.

use crate::order::OrderStatus;
use thiserror::Error;

/// Errors produced by the status machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusError {
    /// The requested status is not a direct successor of the current one.
    #[error("cannot change order status from '{from}' to '{to}'")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// A status name outside the fixed enumeration.
    #[error("'{value}' is not a valid {kind}")]
    InvalidArgument { kind: &'static str, value: String },
}
