//! In-memory host theme channel for development and tests.

use std::sync::PoisonError;

use async_trait::async_trait;
use formweaver_application::{ThemeChannel, ThemeListener, ThemeMode, ThemeSnapshot};
use formweaver_core::AppResult;
use tokio::sync::Mutex;

fn light_theme() -> ThemeSnapshot {
    ThemeSnapshot {
        mode: ThemeMode::Light,
        background_color: "#ffffff".to_owned(),
    }
}

/// Holds one theme snapshot and notifies listeners when it is replaced.
pub struct InMemoryThemeChannel {
    theme: Mutex<ThemeSnapshot>,
    listeners: std::sync::Mutex<Vec<ThemeListener>>,
}

impl InMemoryThemeChannel {
    /// Creates a channel starting on the light theme.
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Mutex::new(light_theme()),
            listeners: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Replaces the theme and notifies listeners.
    pub async fn set_theme(&self, theme: ThemeSnapshot) {
        *self.theme.lock().await = theme.clone();

        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(&theme);
        }
    }
}

impl Default for InMemoryThemeChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ThemeChannel for InMemoryThemeChannel {
    async fn theme(&self) -> AppResult<ThemeSnapshot> {
        Ok(self.theme.lock().await.clone())
    }

    fn on_theme_change(&self, listener: ThemeListener) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use formweaver_application::{ThemeChannel, ThemeMode, ThemeSnapshot};

    use super::InMemoryThemeChannel;

    #[tokio::test]
    async fn theme_changes_reach_listeners() {
        let channel = InMemoryThemeChannel::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_listener = Arc::clone(&seen);
        channel.on_theme_change(Box::new(move |_| {
            seen_in_listener.fetch_add(1, Ordering::SeqCst);
        }));

        channel
            .set_theme(ThemeSnapshot {
                mode: ThemeMode::Dark,
                background_color: "#1f1f1f".to_owned(),
            })
            .await;

        let theme = channel.theme().await.unwrap_or_else(|_| unreachable!());
        assert_eq!(theme.mode, ThemeMode::Dark);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
