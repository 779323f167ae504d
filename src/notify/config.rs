//! Store configuration read by the composer.

use super::error::ConfigError;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// Base URL used in links when the store has none configured.
pub const DEFAULT_BASE_URL: &str = "https://yourdomain.com";

/// Bank account customers can pay into.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAccount {
    pub bank: String,
    pub holder_name: String,
    #[serde(default)]
    pub account_number: Option<String>,
    /// National interbank clearing key (CLABE)
    #[serde(default)]
    pub clearing_key: Option<String>,
}

/// Store-wide settings needed to render notifications.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default, deserialize_with = "accounts_from_list_or_text")]
    pub payment_accounts: Vec<PaymentAccount>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl StoreConfig {
    /// Parse a configuration document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use orderline::StoreConfig;
    ///
    /// let config = StoreConfig::from_json(
    ///     r#"{"payment_accounts": "[{\"bank\": \"Bank A\", \"holder_name\": \"ACME\"}]"}"#,
    /// )?;
    /// assert_eq!(config.payment_accounts[0].bank, "Bank A");
    /// assert_eq!(config.base_url(), "https://yourdomain.com");
    /// # Ok::<(), orderline::ConfigError>(())
    /// ```
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Malformed(err.to_string()))
    }

    /// Configured base URL without a trailing slash, or [`DEFAULT_BASE_URL`].
    pub fn base_url(&self) -> &str {
        match self.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/'),
            _ => DEFAULT_BASE_URL,
        }
    }
}

/// Accepts the account list either as an array or as a JSON string holding
/// one, since some stores keep it in a text column.
fn accounts_from_list_or_text<'de, D>(deserializer: D) -> Result<Vec<PaymentAccount>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAccounts {
        List(Vec<PaymentAccount>),
        Text(String),
    }

    match Option::<RawAccounts>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(RawAccounts::List(accounts)) => Ok(accounts),
        Some(RawAccounts::Text(text)) if text.trim().is_empty() => Ok(Vec::new()),
        Some(RawAccounts::Text(text)) => {
            serde_json::from_str(&text).map_err(serde::de::Error::custom)
        }
    }
}

/// Source of store configuration.
///
/// Implementations may perform I/O and may fail; retry policy belongs to
/// the implementation, not to the composer.
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Load the current configuration snapshot.
    async fn load(&self) -> Result<StoreConfig, ConfigError>;
}

#[async_trait]
impl<P: ConfigProvider + ?Sized> ConfigProvider for Arc<P> {
    async fn load(&self) -> Result<StoreConfig, ConfigError> {
        (**self).load().await
    }
}

/// In-memory provider serving a fixed snapshot.
#[derive(Clone, Debug, Default)]
pub struct StaticConfig {
    config: StoreConfig,
}

impl StaticConfig {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ConfigProvider for StaticConfig {
    async fn load(&self) -> Result<StoreConfig, ConfigError> {
        Ok(self.config.clone())
    }
}
