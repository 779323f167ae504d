//! Order status machine.
//!
//! Pure decision logic over order snapshots:
//! - the transition table and transition validation
//! - the editability policy
//!
//! The table is a compile-time constant; every function here is safe to
//! call from any number of threads.

mod editability;
mod error;
mod transitions;

pub use editability::{edit_blockers, is_editable, EditBlock, EDITABLE_STATUSES};
pub use error::StatusError;
pub use transitions::{
    can_transition, plan_transition, successors, validate_named, validate_transition,
};
