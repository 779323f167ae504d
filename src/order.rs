//! Order snapshot consumed by the status machine and the composer.
//!
//! Orders are created, stored and mutated by the calling service; this
//! crate only reads them.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

crate::status_enum! {
    /// Lifecycle stage of an order.
    pub enum OrderStatus as "order status" {
        Pending => "pending",
        Confirmed => "confirmed",
        Paid => "paid",
        Preparing => "preparing",
        Shipped => "shipped",
        Received => "received",
        Delivered => "delivered",
        Cancelled => "cancelled",
    }
    terminal: [Delivered, Cancelled]
}

crate::status_enum! {
    /// Proof-of-payment validation state, tracked apart from [`OrderStatus`].
    pub enum PaymentStatus as "payment status" {
        Unpaid => "unpaid",
        PendingValidation => "pending_validation",
        Paid => "paid",
        Rejected => "rejected",
    }
}

/// One line of an order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_name: String,
    pub quantity: u32,
    pub subtotal: Decimal,
}

impl LineItem {
    pub fn new(product_name: impl Into<String>, quantity: u32, subtotal: Decimal) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            subtotal,
        }
    }
}

fn default_editable() -> bool {
    true
}

/// Nullable columns: `null` means the flag was never set.
fn editable_or_default<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_editable))
}

fn amount_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or(Decimal::ZERO))
}

/// Snapshot of an order as loaded by the order repository.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Display number, e.g. `1042`
    pub number: String,
    pub customer_name: String,
    /// Phone-like contact handle as the customer typed it
    pub customer_contact: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    /// Explicit editing override; an absent or null flag means editable
    #[serde(default = "default_editable", deserialize_with = "editable_or_default")]
    pub editable: bool,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub total: Decimal,
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub shipping_cost: Decimal,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
}

impl Order {
    /// A freshly placed order: pending, unpaid, editable, with no items.
    pub fn new(
        number: impl Into<String>,
        customer_name: impl Into<String>,
        customer_contact: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            customer_name: customer_name.into(),
            customer_contact: customer_contact.into(),
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            editable: true,
            items: Vec::new(),
            total: Decimal::ZERO,
            shipping_cost: Decimal::ZERO,
            cancellation_reason: None,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = payment_status;
        self
    }

    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Append a line item. Totals are not recomputed.
    pub fn with_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_total(mut self, total: Decimal) -> Self {
        self.total = total;
        self
    }

    pub fn with_shipping_cost(mut self, shipping_cost: Decimal) -> Self {
        self.shipping_cost = shipping_cost;
        self
    }

    pub fn with_cancellation_reason(mut self, reason: impl Into<String>) -> Self {
        self.cancellation_reason = Some(reason.into());
        self
    }

    /// Contact handle with every non-digit character removed.
    pub fn recipient_handle(&self) -> String {
        self.customer_contact
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }
}
