//! Core Status trait for enumerated lifecycle values.
//!
//! Order status and payment status both implement this trait, which
//! exposes their stable wire names and terminal flags without side effects.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// Trait for fixed sets of lifecycle values.
///
/// Implementations are normally generated by [`status_enum!`](crate::status_enum),
/// which also provides `Display` and a `FromStr` that rejects names outside
/// the set.
///
/// # Example
///
/// ```rust
/// use orderline::{OrderStatus, Status};
///
/// assert_eq!(OrderStatus::Pending.as_str(), "pending");
/// assert!(OrderStatus::Delivered.is_terminal());
/// assert!(!OrderStatus::Shipped.is_terminal());
/// ```
pub trait Status:
    Copy + Eq + Hash + Debug + Display + FromStr + Serialize + DeserializeOwned + Send + Sync
{
    /// Stable wire name, as stored by the order repository.
    fn as_str(&self) -> &'static str;

    /// Check if no further changes are expected from this value.
    ///
    /// Default implementation returns `false`.
    fn is_terminal(&self) -> bool {
        false
    }
}
