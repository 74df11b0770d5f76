//! In-memory host configuration channel for development and tests.

use std::sync::PoisonError;

use async_trait::async_trait;
use formweaver_application::{ConfigChannel, ConfigListener, PersistedDashboardConfig};
use formweaver_core::AppResult;
use tokio::sync::Mutex;

/// Stores the configuration blob wholesale and notifies listeners on
/// every replacement, standing in for the host platform's channel.
#[derive(Default)]
pub struct InMemoryConfigChannel {
    config: Mutex<Option<PersistedDashboardConfig>>,
    listeners: std::sync::Mutex<Vec<ConfigListener>>,
}

impl InMemoryConfigChannel {
    /// Creates an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a channel pre-loaded with a configuration.
    #[must_use]
    pub fn with_config(config: PersistedDashboardConfig) -> Self {
        Self {
            config: Mutex::new(Some(config)),
            listeners: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ConfigChannel for InMemoryConfigChannel {
    async fn load(&self) -> AppResult<Option<PersistedDashboardConfig>> {
        Ok(self.config.lock().await.clone())
    }

    async fn save(&self, config: &PersistedDashboardConfig) -> AppResult<()> {
        *self.config.lock().await = Some(config.clone());

        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(config);
        }

        Ok(())
    }

    fn on_config_change(&self, listener: ConfigListener) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }
}
