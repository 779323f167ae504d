//! Customer notifications for order lifecycle events.
//!
//! The composer turns an order snapshot and a [`LifecycleEvent`] into a
//! [`Notification`]: the message text plus the digits-only contact handle
//! a delivery channel needs. Delivering it (building a chat link,
//! encoding, sending) belongs to the caller.
//!
//! Store configuration (payment accounts, public base URL) is read through
//! an injected [`ConfigProvider`] on every compose call.

mod composer;
mod config;
mod error;
mod event;
mod template;

pub use composer::{render, Notification, NotificationComposer};
pub use config::{ConfigProvider, PaymentAccount, StaticConfig, StoreConfig, DEFAULT_BASE_URL};
pub use error::{ComposeError, ConfigError};
pub use event::{EventMetadata, LifecycleEvent, NotificationEvent};
pub use template::{
    DEFAULT_CANCELLATION_REASON, DEFAULT_REJECTION_REASON, MISSING_ACCOUNTS_NOTICE,
};
