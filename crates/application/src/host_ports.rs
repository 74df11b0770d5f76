use async_trait::async_trait;
use formweaver_core::AppResult;
use formweaver_domain::FormDefinition;
use serde::{Deserialize, Serialize};

/// Surface mode signaled by the host dashboard platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DashboardMode {
    /// Widget is being created; editor surface shown.
    Create,
    /// Widget is being reconfigured; editor surface shown.
    Config,
    /// Widget is displayed read-only.
    View,
    /// Widget fills the screen, read-only.
    FullScreen,
}

impl DashboardMode {
    /// Returns whether the editor surface should be shown.
    #[must_use]
    pub fn shows_editor(&self) -> bool {
        matches!(self, Self::Create | Self::Config)
    }
}

/// The wholesale configuration blob persisted by the host platform.
///
/// The engine never partially merges it; load and save replace it whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedDashboardConfig {
    /// The form definition authored by the editor.
    #[serde(rename = "customConfig")]
    pub custom_config: FormDefinition,
}

/// Callback invoked when the host replaces the persisted configuration.
pub type ConfigListener = Box<dyn Fn(&PersistedDashboardConfig) + Send + Sync>;

/// Host platform configuration channel.
#[async_trait]
pub trait ConfigChannel: Send + Sync {
    /// Loads the persisted configuration, if any exists yet.
    async fn load(&self) -> AppResult<Option<PersistedDashboardConfig>>;

    /// Persists the configuration wholesale.
    async fn save(&self, config: &PersistedDashboardConfig) -> AppResult<()>;

    /// Registers a listener fired on every configuration replacement.
    fn on_config_change(&self, listener: ConfigListener);
}

/// Light or dark host theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeMode {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
}

/// Theme values the host exposes to embedded widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSnapshot {
    /// Current theme mode.
    pub mode: ThemeMode,
    /// Widget background color, as a CSS color string.
    pub background_color: String,
}

/// Callback invoked when the host theme changes.
pub type ThemeListener = Box<dyn Fn(&ThemeSnapshot) + Send + Sync>;

/// Host platform theme channel.
#[async_trait]
pub trait ThemeChannel: Send + Sync {
    /// Returns the current theme.
    async fn theme(&self) -> AppResult<ThemeSnapshot>;

    /// Registers a listener fired on every theme change.
    fn on_theme_change(&self, listener: ThemeListener);
}

#[cfg(test)]
mod tests {
    use super::DashboardMode;

    #[test]
    fn editor_shows_only_in_authoring_modes() {
        assert!(DashboardMode::Create.shows_editor());
        assert!(DashboardMode::Config.shows_editor());
        assert!(!DashboardMode::View.shows_editor());
        assert!(!DashboardMode::FullScreen.shows_editor());
    }
}
