//! Order Notifications
//!
//! Walks one order through its lifecycle, validating each status change
//! and printing the message a customer would receive.
//!
//! Run with: cargo run --example order_notifications

use orderline::display::{DefaultDisplay, DisplayMapping};
use orderline::{
    is_editable, plan_transition, EventMetadata, LifecycleEvent, LineItem, NotificationComposer,
    NotificationEvent, Order, OrderStatus, StaticConfig, StatusHistory, StoreConfig,
};
use rust_decimal::Decimal;

const CONFIG: &str = r#"{
    "payment_accounts": [
        {"bank": "Bank A", "holder_name": "ACME Supplies", "account_number": "0123456789"},
        {"bank": "Bank B", "holder_name": "ACME Supplies", "clearing_key": "002180012345678901"}
    ],
    "base_url": "https://shop.example"
}"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let composer = NotificationComposer::new(StaticConfig::new(StoreConfig::from_json(CONFIG)?));

    let mut order = Order::new("1042", "Ana", "+52 712 192 0418")
        .with_item(LineItem::new("Widget", 2, Decimal::from(20)))
        .with_item(LineItem::new("Gizmo", 1, Decimal::new(750, 2)))
        .with_shipping_cost(Decimal::from(5))
        .with_total(Decimal::new(3250, 2));

    println!("=== Order #{} ===\n", order.number);
    let received = composer.compose(&order, &LifecycleEvent::OrderReceived).await?;
    println!("{}\n", received.text);

    let shipment = EventMetadata {
        tracking_number: Some("1Z999AA10123456784".to_string()),
        carrier: Some("DHL".to_string()),
        ..Default::default()
    };
    let steps = [
        OrderStatus::Confirmed,
        OrderStatus::Paid,
        OrderStatus::Preparing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    let mut history = StatusHistory::new();
    for requested in steps {
        let change = plan_transition(order.status, requested)?;
        history = history.record(change);
        order = order.with_status(requested);

        let display = DefaultDisplay.display(requested);
        let label = display.map_or(requested.as_str(), |d| d.label);
        println!("--- {label} (editable: {}) ---", is_editable(&order));

        if let Some(kind) = NotificationEvent::for_status(requested) {
            let event = LifecycleEvent::with_metadata(kind, Some(&shipment));
            let notification = composer.compose(&order, &event).await?;
            println!("To {}:\n{}\n", notification.recipient_handle, notification.text);
        }
    }

    let path: Vec<_> = history.path().iter().map(|s| s.as_str()).collect();
    println!("Path: {}", path.join(" -> "));

    if let Err(err) = plan_transition(order.status, OrderStatus::Cancelled) {
        println!("Refused: {err}");
    }

    Ok(())
}
