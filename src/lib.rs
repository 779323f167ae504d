//! Orderline: order lifecycle rules and customer notifications
//!
//! Orderline is the decision core of a small commerce catalog's order
//! service. It keeps no state of its own: callers hand it an order snapshot
//! and get back a pure answer.
//!
//! # Core Concepts
//!
//! - **Status machine**: which order status changes are legal, and whether
//!   a customer may still edit an order
//! - **Notifications**: the customer-facing text for each lifecycle event,
//!   packaged with the recipient's contact handle
//! - **Display mapping**: optional labels, icons and colors for statuses,
//!   kept apart from the rules
//!
//! Persistence, HTTP, and message delivery live in the calling service.
//!
//! # Example
//!
//! ```rust
//! use orderline::{is_editable, validate_transition, Order, OrderStatus};
//!
//! let order = Order::new("1042", "Ana", "+52 712 192 0418");
//! assert!(is_editable(&order));
//!
//! assert!(validate_transition(OrderStatus::Pending, OrderStatus::Confirmed).is_ok());
//! assert!(validate_transition(OrderStatus::Shipped, OrderStatus::Cancelled).is_err());
//! ```

pub mod core;
pub mod display;
pub mod notify;
pub mod order;
pub mod status;

// Re-export commonly used types
pub use crate::core::{Status, StatusChange, StatusHistory};
pub use notify::{
    ComposeError, ConfigError, ConfigProvider, EventMetadata, LifecycleEvent, Notification,
    NotificationComposer, NotificationEvent, PaymentAccount, StaticConfig, StoreConfig,
};
pub use order::{LineItem, Order, OrderStatus, PaymentStatus};
pub use status::{
    can_transition, edit_blockers, is_editable, plan_transition, successors, validate_named,
    validate_transition, EditBlock, StatusError,
};
