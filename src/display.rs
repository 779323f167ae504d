//! Presentation metadata for order statuses.
//!
//! Labels, icons and colors for order lists and detail pages. Nothing in
//! the status machine or the composer reads this module.

use crate::order::OrderStatus;
use serde::{Deserialize, Serialize};

/// Color family used to badge a status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Yellow,
    Blue,
    Green,
    Purple,
    Indigo,
    Teal,
    Emerald,
    Red,
    Gray,
}

/// Utility class names for a [`Tone`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneClasses {
    pub background: String,
    pub text: String,
    pub border: String,
}

impl Tone {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Indigo => "indigo",
            Self::Teal => "teal",
            Self::Emerald => "emerald",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }

    pub fn classes(&self) -> ToneClasses {
        let color = self.as_str();
        ToneClasses {
            background: format!("bg-{color}-100"),
            text: format!("text-{color}-800"),
            border: format!("border-{color}-200"),
        }
    }
}

/// How a status is shown to customers and staff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub description: &'static str,
    pub tone: Tone,
    pub icon: &'static str,
}

/// Source of display metadata for statuses.
pub trait DisplayMapping {
    /// Display metadata for `status`, if this mapping knows it.
    fn display(&self, status: OrderStatus) -> Option<StatusDisplay>;

    /// Badge classes for `status`; gray when the mapping has no entry.
    fn classes(&self, status: OrderStatus) -> ToneClasses {
        self.display(status)
            .map_or(Tone::Gray, |display| display.tone)
            .classes()
    }
}

/// Built-in English labels for every status.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultDisplay;

impl DisplayMapping for DefaultDisplay {
    fn display(&self, status: OrderStatus) -> Option<StatusDisplay> {
        let (label, description, tone, icon) = match status {
            OrderStatus::Pending => (
                "Pending",
                "Order received, awaiting confirmation",
                Tone::Yellow,
                "⏳",
            ),
            OrderStatus::Confirmed => (
                "Confirmed",
                "Stock validated, awaiting payment",
                Tone::Blue,
                "✓",
            ),
            OrderStatus::Paid => ("Paid", "Payment validated", Tone::Green, "💰"),
            OrderStatus::Preparing => (
                "Preparing",
                "Your order is being packed",
                Tone::Purple,
                "📦",
            ),
            OrderStatus::Shipped => ("Shipped", "On its way to you", Tone::Indigo, "🚚"),
            OrderStatus::Received => (
                "Received",
                "Customer confirmed receipt",
                Tone::Teal,
                "📬",
            ),
            OrderStatus::Delivered => ("Delivered", "Order completed", Tone::Emerald, "✅"),
            OrderStatus::Cancelled => ("Cancelled", "Order was cancelled", Tone::Red, "❌"),
        };

        Some(StatusDisplay {
            label,
            description,
            tone,
            icon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SparseDisplay;

    impl DisplayMapping for SparseDisplay {
        fn display(&self, status: OrderStatus) -> Option<StatusDisplay> {
            DefaultDisplay
                .display(status)
                .filter(|_| status == OrderStatus::Pending)
        }
    }

    #[test]
    fn default_display_covers_every_status() {
        for &status in OrderStatus::ALL {
            assert!(DefaultDisplay.display(status).is_some(), "{status}");
        }
    }

    #[test]
    fn classes_follow_tone() {
        assert_eq!(
            DefaultDisplay.classes(OrderStatus::Confirmed),
            ToneClasses {
                background: "bg-blue-100".to_string(),
                text: "text-blue-800".to_string(),
                border: "border-blue-200".to_string(),
            }
        );
    }

    #[test]
    fn unknown_entries_fall_back_to_gray() {
        assert_eq!(SparseDisplay.classes(OrderStatus::Pending), Tone::Yellow.classes());
        assert_eq!(SparseDisplay.classes(OrderStatus::Shipped), Tone::Gray.classes());
    }
}
