//! Notification composer.

use super::config::{ConfigProvider, StoreConfig};
use super::error::ComposeError;
use super::event::{EventMetadata, LifecycleEvent};
use super::template::render_text;
use crate::order::Order;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Rendered message ready for a delivery channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    /// Customer contact handle, digits only
    pub recipient_handle: String,
}

/// Render `event` for `order` against a configuration snapshot (pure).
///
/// The same inputs always produce byte-identical text.
pub fn render(order: &Order, event: &LifecycleEvent, config: &StoreConfig) -> Notification {
    Notification {
        text: render_text(event, order, config),
        recipient_handle: order.recipient_handle(),
    }
}

/// Composes notifications, reading store configuration from `P`.
///
/// Holds no mutable state; one composer can serve concurrent callers.
///
/// # Example
///
/// ```rust
/// use orderline::{LifecycleEvent, NotificationComposer, Order, StaticConfig, StoreConfig};
///
/// # #[tokio::main]
/// # async fn main() {
/// let composer = NotificationComposer::new(StaticConfig::new(StoreConfig::default()));
/// let order = Order::new("1042", "Ana", "+52 712 192 0418");
///
/// let notification = composer
///     .compose(&order, &LifecycleEvent::PaymentValidated)
///     .await
///     .unwrap();
/// assert!(notification.text.contains("#1042"));
/// assert_eq!(notification.recipient_handle, "527121920418");
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct NotificationComposer<P> {
    config: P,
}

impl<P: ConfigProvider> NotificationComposer<P> {
    pub fn new(config: P) -> Self {
        Self { config }
    }

    /// Compose the notification for `event`.
    ///
    /// Fails with [`ComposeError::ConfigurationUnavailable`] when the
    /// provider cannot supply configuration; nothing is retried here.
    #[instrument(skip_all, fields(order = %order.number, event = %event.kind()))]
    pub async fn compose(
        &self,
        order: &Order,
        event: &LifecycleEvent,
    ) -> Result<Notification, ComposeError> {
        let config = self.config.load().await.map_err(|err| {
            warn!(error = %err, "store configuration unavailable");
            ComposeError::ConfigurationUnavailable(err)
        })?;

        let notification = render(order, event, &config);
        debug!(chars = notification.text.chars().count(), "notification rendered");
        Ok(notification)
    }

    /// Compose from an event wire name and untyped metadata.
    ///
    /// An unknown `kind` fails with [`ComposeError::UnknownEventKind`]
    /// before configuration is read.
    #[instrument(skip_all, fields(order = %order.number, kind = %kind))]
    pub async fn compose_raw(
        &self,
        order: &Order,
        kind: &str,
        metadata: Option<&EventMetadata>,
    ) -> Result<Notification, ComposeError> {
        let event = LifecycleEvent::from_parts(kind, metadata).map_err(|err| {
            debug!(error = %err, "rejected notification event kind");
            err
        })?;
        self.compose(order, &event).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::error::ConfigError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Metadata, Subscriber};

    /// Collects the message of every event it sees.
    #[derive(Clone, Default)]
    struct MessageLog {
        messages: Arc<Mutex<Vec<String>>>,
        next_span: Arc<AtomicUsize>,
    }

    struct MessageVisitor<'a>(&'a mut Option<String>);

    impl Visit for MessageVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                *self.0 = Some(format!("{value:?}"));
            }
        }
    }

    impl Subscriber for MessageLog {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(self.next_span.fetch_add(1, Ordering::SeqCst) as u64 + 1)
        }

        fn record(&self, _: &Id, _: &Record<'_>) {}

        fn record_follows_from(&self, _: &Id, _: &Id) {}

        fn event(&self, event: &Event<'_>) {
            let mut message = None;
            event.record(&mut MessageVisitor(&mut message));
            if let Some(message) = message {
                self.messages.lock().unwrap().push(message);
            }
        }

        fn enter(&self, _: &Id) {}

        fn exit(&self, _: &Id) {}
    }

    struct CountingConfig {
        loads: AtomicUsize,
        result: Result<StoreConfig, ConfigError>,
    }

    impl CountingConfig {
        fn new(result: Result<StoreConfig, ConfigError>) -> Self {
            Self {
                loads: AtomicUsize::new(0),
                result,
            }
        }
    }

    #[async_trait]
    impl ConfigProvider for CountingConfig {
        async fn load(&self) -> Result<StoreConfig, ConfigError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn order() -> Order {
        Order::new("1042", "Ana", "(712) 192-0418")
    }

    #[tokio::test]
    async fn compose_reads_configuration_once() {
        let composer = NotificationComposer::new(CountingConfig::new(Ok(StoreConfig::default())));

        let notification = composer
            .compose(&order(), &LifecycleEvent::OrderReceived)
            .await
            .unwrap();

        assert_eq!(composer.config.loads.load(Ordering::SeqCst), 1);
        assert_eq!(notification.recipient_handle, "7121920418");
    }

    #[tokio::test]
    async fn provider_failure_is_configuration_unavailable() {
        let failure = ConfigError::Unavailable("connection refused".to_string());
        let composer = NotificationComposer::new(CountingConfig::new(Err(failure.clone())));

        let err = composer
            .compose(&order(), &LifecycleEvent::PaymentValidated)
            .await
            .unwrap_err();

        assert_eq!(err, ComposeError::ConfigurationUnavailable(failure));
        assert_eq!(composer.config.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_kind_fails_before_loading_configuration() {
        let composer = NotificationComposer::new(CountingConfig::new(Ok(StoreConfig::default())));

        let err = composer
            .compose_raw(&order(), "order_lost", None)
            .await
            .unwrap_err();

        assert_eq!(err, ComposeError::UnknownEventKind("order_lost".to_string()));
        assert_eq!(composer.config.loads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unknown_kind_rejection_is_logged() {
        let log = MessageLog::default();
        let _guard = tracing::subscriber::set_default(log.clone());
        let composer = NotificationComposer::new(CountingConfig::new(Ok(StoreConfig::default())));

        let result = composer.compose_raw(&order(), "order_lost", None).await;

        assert!(result.is_err());
        let messages = log.messages.lock().unwrap();
        assert!(messages.iter().any(|m| m == "rejected notification event kind"));
    }

    #[test]
    fn render_is_deterministic() {
        let config = StoreConfig::default();
        let event = LifecycleEvent::OrderShipped {
            tracking_number: Some("1Z999".to_string()),
            carrier: None,
        };

        assert_eq!(
            render(&order(), &event, &config),
            render(&order(), &event, &config)
        );
    }
}
