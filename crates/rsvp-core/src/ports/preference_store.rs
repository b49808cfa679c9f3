//! Preference store port
//!
//! Key/value storage that outlives the controller, the way browser local
//! storage does. Only the language preference is kept here.

use async_trait::async_trait;

use super::errors::PreferenceStoreError;

#[async_trait]
pub trait PreferenceStorePort: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceStoreError>;

    /// Overwrite `key`. Idempotent.
    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceStoreError>;
}
