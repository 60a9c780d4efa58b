use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::diagnostics::{DiagnosticsSink, FilteredSink, NoopSink, TracingSink};
use crate::easing::EasingRegistry;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Registry key of the easing used when none is given
    #[serde(default = "default_easing")]
    pub default_easing: String,
    /// Run duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Player tick rate
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            default_easing: default_easing(),
            duration_ms: default_duration_ms(),
            fps: default_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Emit a TRACE record for every easing evaluation
    #[serde(default)]
    pub trace: bool,
    /// Warn when a non-overshooting easing gets progress outside [0, 1]
    #[serde(default = "default_true")]
    pub warn_out_of_range: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            trace: false,
            warn_out_of_range: default_true(),
        }
    }
}

impl DiagnosticsConfig {
    /// Whether easings need to be wrapped with a sink at all
    pub fn is_enabled(&self) -> bool {
        self.trace || self.warn_out_of_range
    }

    /// Tracing sink matching these settings
    pub fn sink(&self) -> Arc<dyn DiagnosticsSink> {
        self.filter(Arc::new(TracingSink))
    }

    /// Restrict `inner` to the reports these settings enable
    pub fn filter(&self, inner: Arc<dyn DiagnosticsSink>) -> Arc<dyn DiagnosticsSink> {
        if !self.is_enabled() {
            return Arc::new(NoopSink);
        }
        Arc::new(FilteredSink::new(inner, self.trace, self.warn_out_of_range))
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_easing() -> String {
    "quad-out".to_string()
}

fn default_duration_ms() -> u64 {
    500
}

fn default_fps() -> u32 {
    60
}

fn default_true() -> bool {
    true
}

/// Extension trait for AnimationConfig with utility methods
pub trait AnimationConfigExt {
    /// Get run duration as Duration
    fn duration(&self) -> Duration;

    /// Get tick duration for the player frame rate
    fn tick_duration(&self) -> Duration;

    /// Check the settings against a registry
    fn validate(&self, registry: &EasingRegistry) -> crate::Result<()>;
}

impl AnimationConfigExt for AnimationConfig {
    #[inline]
    fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn tick_duration(&self) -> Duration {
        if self.fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis((1000 / self.fps as u64).max(1))
        }
    }

    fn validate(&self, registry: &EasingRegistry) -> crate::Result<()> {
        if self.duration_ms == 0 {
            return Err(crate::Error::Config(
                "animation.duration_ms must be positive".to_string(),
            ));
        }
        if !registry.contains(&self.default_easing) {
            return Err(crate::Error::Config(format!(
                "animation.default_easing '{}' is not a known easing",
                self.default_easing
            )));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/easekit/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("easekit")
            .join("config.toml")
    }
}
