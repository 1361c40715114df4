//! In-memory rate override store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, RatePercent};
use crate::ports::RateOverrideStore;

/// In-memory purpose-to-rate override table. Keys are stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateOverrideStore {
    overrides: Arc<RwLock<HashMap<String, RatePercent>>>,
}

impl InMemoryRateOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateOverrideStore for InMemoryRateOverrideStore {
    async fn get(&self, purpose: &str) -> Result<Option<RatePercent>, DomainError> {
        Ok(self
            .overrides
            .read()
            .await
            .get(&purpose.to_lowercase())
            .copied())
    }

    async fn set(&self, purpose: &str, rate: RatePercent) -> Result<(), DomainError> {
        let mut overrides = self.overrides.write().await;
        overrides.insert(purpose.to_lowercase(), rate);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<(String, RatePercent)>, DomainError> {
        let overrides = self.overrides.read().await;
        let mut entries: Vec<(String, RatePercent)> = overrides
            .iter()
            .map(|(purpose, rate)| (purpose.clone(), *rate))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let store = InMemoryRateOverrideStore::new();
        store
            .set("Housing", RatePercent::from_hundredths(450))
            .await
            .unwrap();

        let rate = store.get("HOUSING").await.unwrap();
        assert_eq!(rate, Some(RatePercent::from_hundredths(450)));
        assert_eq!(store.get("car").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_replaces_existing_override() {
        let store = InMemoryRateOverrideStore::new();
        store
            .set("car", RatePercent::from_hundredths(600))
            .await
            .unwrap();
        store
            .set("CAR", RatePercent::from_hundredths(550))
            .await
            .unwrap();

        let entries = store.list().await.unwrap();
        assert_eq!(entries, vec![("car".to_string(), RatePercent::from_hundredths(550))]);
    }
}
