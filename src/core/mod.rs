//! Core status types shared by the order model and the status machine.
//!
//! This module contains the pure building blocks:
//! - Status definitions via the `Status` trait and the `status_enum!` macro
//! - Immutable history of applied status changes
//!
//! Nothing here performs I/O.

mod history;
mod macros;
mod status;

pub use history::{StatusChange, StatusHistory};
pub use status::Status;
