//! Notification event kinds and their typed metadata.

use super::error::ComposeError;
use crate::order::{OrderStatus, PaymentStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle milestone that triggers a customer-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationEvent {
    OrderReceived,
    OrderConfirmed,
    PaymentValidated,
    PaymentRejected,
    OrderShipped,
    OrderCancelled,
}

impl NotificationEvent {
    pub const ALL: [NotificationEvent; 6] = [
        Self::OrderReceived,
        Self::OrderConfirmed,
        Self::PaymentValidated,
        Self::PaymentRejected,
        Self::OrderShipped,
        Self::OrderCancelled,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OrderReceived => "order_received",
            Self::OrderConfirmed => "order_confirmed",
            Self::PaymentValidated => "payment_validated",
            Self::PaymentRejected => "payment_rejected",
            Self::OrderShipped => "order_shipped",
            Self::OrderCancelled => "order_cancelled",
        }
    }

    /// Event announced when an order enters `status`, if any.
    ///
    /// Entering `pending` (including un-confirming), `preparing`,
    /// `received` or `delivered` sends nothing.
    pub const fn for_status(status: OrderStatus) -> Option<Self> {
        match status {
            OrderStatus::Confirmed => Some(Self::OrderConfirmed),
            OrderStatus::Paid => Some(Self::PaymentValidated),
            OrderStatus::Shipped => Some(Self::OrderShipped),
            OrderStatus::Cancelled => Some(Self::OrderCancelled),
            OrderStatus::Pending
            | OrderStatus::Preparing
            | OrderStatus::Received
            | OrderStatus::Delivered => None,
        }
    }

    /// Event announced when proof of payment reaches `status`, if any.
    pub const fn for_payment(status: PaymentStatus) -> Option<Self> {
        match status {
            PaymentStatus::Paid => Some(Self::PaymentValidated),
            PaymentStatus::Rejected => Some(Self::PaymentRejected),
            PaymentStatus::Unpaid | PaymentStatus::PendingValidation => None,
        }
    }
}

impl fmt::Display for NotificationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationEvent {
    type Err = ComposeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ComposeError::UnknownEventKind(value.to_string()))
    }
}

/// Untyped event metadata as received from callers.
///
/// Each event kind picks the fields it understands; the rest are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub carrier: Option<String>,
}

fn present(value: Option<&String>) -> Option<String> {
    value.filter(|value| !value.is_empty()).cloned()
}

/// A notification event together with the optional fields its template uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    OrderReceived,
    OrderConfirmed,
    PaymentValidated,
    PaymentRejected {
        reason: Option<String>,
    },
    OrderShipped {
        tracking_number: Option<String>,
        carrier: Option<String>,
    },
    /// `reason` overrides the cancellation reason stored on the order.
    OrderCancelled {
        reason: Option<String>,
    },
}

impl LifecycleEvent {
    pub fn kind(&self) -> NotificationEvent {
        match self {
            Self::OrderReceived => NotificationEvent::OrderReceived,
            Self::OrderConfirmed => NotificationEvent::OrderConfirmed,
            Self::PaymentValidated => NotificationEvent::PaymentValidated,
            Self::PaymentRejected { .. } => NotificationEvent::PaymentRejected,
            Self::OrderShipped { .. } => NotificationEvent::OrderShipped,
            Self::OrderCancelled { .. } => NotificationEvent::OrderCancelled,
        }
    }

    /// Build an event of `kind`, taking its fields from `metadata`.
    ///
    /// Empty strings count as absent.
    pub fn with_metadata(kind: NotificationEvent, metadata: Option<&EventMetadata>) -> Self {
        match kind {
            NotificationEvent::OrderReceived => Self::OrderReceived,
            NotificationEvent::OrderConfirmed => Self::OrderConfirmed,
            NotificationEvent::PaymentValidated => Self::PaymentValidated,
            NotificationEvent::PaymentRejected => Self::PaymentRejected {
                reason: present(metadata.and_then(|meta| meta.reason.as_ref())),
            },
            NotificationEvent::OrderShipped => Self::OrderShipped {
                tracking_number: present(metadata.and_then(|meta| meta.tracking_number.as_ref())),
                carrier: present(metadata.and_then(|meta| meta.carrier.as_ref())),
            },
            NotificationEvent::OrderCancelled => Self::OrderCancelled {
                reason: present(metadata.and_then(|meta| meta.reason.as_ref())),
            },
        }
    }

    /// Build an event from its wire name and untyped metadata.
    ///
    /// # Example
    ///
    /// ```rust
    /// use orderline::{ComposeError, EventMetadata, LifecycleEvent};
    ///
    /// let metadata = EventMetadata {
    ///     tracking_number: Some("1Z999".to_string()),
    ///     ..Default::default()
    /// };
    /// let event = LifecycleEvent::from_parts("order_shipped", Some(&metadata))?;
    /// assert_eq!(
    ///     event,
    ///     LifecycleEvent::OrderShipped {
    ///         tracking_number: Some("1Z999".to_string()),
    ///         carrier: None,
    ///     }
    /// );
    ///
    /// assert_eq!(
    ///     LifecycleEvent::from_parts("order_lost", None),
    ///     Err(ComposeError::UnknownEventKind("order_lost".to_string()))
    /// );
    /// # Ok::<(), ComposeError>(())
    /// ```
    pub fn from_parts(kind: &str, metadata: Option<&EventMetadata>) -> Result<Self, ComposeError> {
        let kind: NotificationEvent = kind.parse()?;
        Ok(Self::with_metadata(kind, metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_roundtrip_through_from_str() {
        for kind in NotificationEvent::ALL {
            assert_eq!(kind.as_str().parse::<NotificationEvent>(), Ok(kind));
        }
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&NotificationEvent::PaymentRejected).unwrap();
        assert_eq!(json, "\"payment_rejected\"");
    }

    #[test]
    fn unknown_kind_is_named_in_error() {
        let err = "order_refunded".parse::<NotificationEvent>().unwrap_err();
        assert_eq!(err, ComposeError::UnknownEventKind("order_refunded".to_string()));
        assert!(err.to_string().contains("order_refunded"));
    }

    #[test]
    fn metadata_fields_not_used_by_kind_are_dropped() {
        let metadata = EventMetadata {
            reason: Some("duplicate".to_string()),
            tracking_number: Some("1Z999".to_string()),
            carrier: Some("DHL".to_string()),
        };

        assert_eq!(
            LifecycleEvent::with_metadata(NotificationEvent::PaymentValidated, Some(&metadata)),
            LifecycleEvent::PaymentValidated
        );
        assert_eq!(
            LifecycleEvent::with_metadata(NotificationEvent::OrderCancelled, Some(&metadata)),
            LifecycleEvent::OrderCancelled {
                reason: Some("duplicate".to_string())
            }
        );
    }

    #[test]
    fn empty_metadata_strings_count_as_absent() {
        let metadata = EventMetadata {
            reason: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(
            LifecycleEvent::with_metadata(NotificationEvent::PaymentRejected, Some(&metadata)),
            LifecycleEvent::PaymentRejected { reason: None }
        );
    }

    #[test]
    fn kind_roundtrips_through_with_metadata() {
        for kind in NotificationEvent::ALL {
            assert_eq!(LifecycleEvent::with_metadata(kind, None).kind(), kind);
        }
    }

    #[test]
    fn status_changes_map_to_events() {
        assert_eq!(
            NotificationEvent::for_status(OrderStatus::Confirmed),
            Some(NotificationEvent::OrderConfirmed)
        );
        assert_eq!(
            NotificationEvent::for_status(OrderStatus::Cancelled),
            Some(NotificationEvent::OrderCancelled)
        );
        assert_eq!(NotificationEvent::for_status(OrderStatus::Pending), None);
        assert_eq!(NotificationEvent::for_status(OrderStatus::Delivered), None);
        assert_eq!(
            NotificationEvent::for_payment(PaymentStatus::Rejected),
            Some(NotificationEvent::PaymentRejected)
        );
        assert_eq!(NotificationEvent::for_payment(PaymentStatus::Unpaid), None);
    }
}
