//! Message templates, one per event kind.

use super::config::{PaymentAccount, StoreConfig};
use super::event::LifecycleEvent;
use crate::order::Order;
use rust_decimal::Decimal;

/// Used by `payment_rejected` when no reason was given.
pub const DEFAULT_REJECTION_REASON: &str = "Image is not legible";

/// Used by `order_cancelled` when neither the event nor the order has a reason.
pub const DEFAULT_CANCELLATION_REASON: &str = "Not specified";

/// Stands in for the account list when the store has no payment accounts.
pub const MISSING_ACCOUNTS_NOTICE: &str = "We will send you the bank details shortly.";

const ORDERS_PATH: &str = "/cart/my-orders";

/// Line-oriented text builder. Optional lines are skipped entirely.
#[derive(Default)]
struct Message {
    lines: Vec<String>,
}

impl Message {
    fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    fn blank(self) -> Self {
        self.line("")
    }

    fn maybe(self, text: Option<String>) -> Self {
        match text {
            Some(text) => self.line(text),
            None => self,
        }
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn item_lines(order: &Order) -> String {
    order
        .items
        .iter()
        .map(|item| format!("{}× {} — {}", item.quantity, item.product_name, item.subtotal))
        .collect::<Vec<_>>()
        .join("\n")
}

fn filled(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn account_block(account: &PaymentAccount) -> String {
    Message::default()
        .maybe(filled(Some(account.bank.as_str())).map(|bank| format!("🏦 *{bank}*")))
        .maybe(
            filled(Some(account.holder_name.as_str())).map(|holder| format!("Holder: {holder}")),
        )
        .maybe(
            filled(account.account_number.as_deref()).map(|number| format!("Account: {number}")),
        )
        .maybe(filled(account.clearing_key.as_deref()).map(|key| format!("CLABE: {key}")))
        .finish()
}

fn payment_instructions(accounts: &[PaymentAccount]) -> String {
    if accounts.is_empty() {
        return MISSING_ACCOUNTS_NOTICE.to_string();
    }

    accounts
        .iter()
        .map(account_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render the message body for `event`.
pub(crate) fn render_text(event: &LifecycleEvent, order: &Order, config: &StoreConfig) -> String {
    let name = &order.customer_name;
    let number = &order.number;
    let orders_link = format!("{}{ORDERS_PATH}", config.base_url());

    match event {
        LifecycleEvent::OrderReceived => Message::default()
            .line("🛍️ *Order Received*")
            .blank()
            .line(format!("Hi {name}!"))
            .blank()
            .line(format!("We received your order #{number}"))
            .blank()
            .line("📦 *Items:*")
            .line(item_lines(order))
            .blank()
            .line(format!("💰 *Total:* {}", order.total))
            .blank()
            .line("⏳ *Next step:*")
            .line("We will check stock and shipping costs and get back to you shortly.")
            .blank()
            .line("Questions? Just reply to this message.")
            .finish(),

        LifecycleEvent::OrderConfirmed => Message::default()
            .line("✅ *Order Confirmed*")
            .blank()
            .line(format!("{name}, your order #{number} is confirmed!"))
            .blank()
            .line("📦 *Items:*")
            .line(item_lines(order))
            .blank()
            .line(format!("💵 *Amount due:* {}", order.total))
            .maybe(
                (order.shipping_cost > Decimal::ZERO)
                    .then(|| format!("📦 Includes shipping: {}", order.shipping_cost)),
            )
            .blank()
            .line(payment_instructions(&config.payment_accounts))
            .blank()
            .line("📸 *IMPORTANT:*")
            .line("After paying, upload your proof of payment at:")
            .line(orders_link)
            .blank()
            .line(format!("Enter your phone number: {}", order.customer_contact))
            .finish(),

        LifecycleEvent::PaymentValidated => Message::default()
            .line("💚 *Payment Validated*")
            .blank()
            .line(format!("Great news, {name}!"))
            .blank()
            .line(format!("Your payment for order #{number} has been validated."))
            .blank()
            .line("✅ We are preparing your order")
            .line("📦 We will let you know when it is ready to ship")
            .blank()
            .line("Thank you for your purchase!")
            .finish(),

        LifecycleEvent::PaymentRejected { reason } => {
            let reason = filled(reason.as_deref()).unwrap_or(DEFAULT_REJECTION_REASON);

            Message::default()
                .line("⚠️ *Proof of Payment Needs Correction*")
                .blank()
                .line(format!("{name}, we reviewed the proof of payment for order #{number}"))
                .blank()
                .line(format!("❌ *Reason:* {reason}"))
                .blank()
                .line("Please upload a new proof of payment that:")
                .line("✓ Is clear and legible")
                .line(format!("✓ Shows the correct amount: {}", order.total))
                .line("✓ Includes the date and account holder")
                .blank()
                .line("Upload it here:")
                .line(orders_link)
                .finish()
        }

        LifecycleEvent::OrderShipped {
            tracking_number,
            carrier,
        } => {
            let tracking = filled(tracking_number.as_deref())
                .map(|number| format!("📦 Tracking number: {number}"));
            let carrier =
                filled(carrier.as_deref()).map(|carrier| format!("🚛 Carrier: {carrier}"));
            let has_details = tracking.is_some() || carrier.is_some();

            let message = Message::default()
                .line("🚚 *Order On Its Way*")
                .blank()
                .line(format!("{name}, your order #{number} is on its way!"))
                .blank()
                .maybe(tracking)
                .maybe(carrier);
            let message = if has_details { message.blank() } else { message };

            message
                .line("It will arrive soon. Confirm delivery once you receive it at:")
                .line(orders_link)
                .finish()
        }

        LifecycleEvent::OrderCancelled { reason } => {
            let reason = filled(reason.as_deref())
                .or_else(|| filled(order.cancellation_reason.as_deref()))
                .unwrap_or(DEFAULT_CANCELLATION_REASON);

            Message::default()
                .line("❌ *Order Cancelled*")
                .blank()
                .line(format!(
                    "{name}, we are sorry to let you know that your order #{number} was cancelled."
                ))
                .blank()
                .line(format!("Reason: {reason}"))
                .blank()
                .line("If you have any questions, contact us.")
                .finish()
        }
    }
}
