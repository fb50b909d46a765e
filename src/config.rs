// ~/quote-widget/src/config.rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::{info, warn, error};
use crate::paths::{resolve_against, widget_root_dir};
use crate::quote::{QuotePolicy, QUOTES};

/// Widget configuration persisted in config.yaml next to the executable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// How the quote of the day is chosen.
    #[serde(default)]
    pub quote_policy: QuotePolicy,

    /// One-record cache used by the cached_random policy.
    #[serde(default = "default_cache_file")]
    pub cache_file: PathBuf,

    /// Quotes to pick from. Empty means the built-in list.
    #[serde(default = "default_quotes")]
    pub quotes: Vec<String>,

    #[serde(default = "default_remote_url")]
    pub remote_url: String,

    #[serde(default = "default_remote_timeout_ms")]
    pub remote_timeout_ms: u64,

    /// Shown whenever the remote lookup fails.
    #[serde(default = "default_fallback_quote")]
    pub fallback_quote: String,

    /// Reparent the widget under the desktop icon layer.
    #[serde(default = "default_true")]
    pub attach_to_desktop: bool,

    /// Try acrylic/blur before plain layered alpha.
    #[serde(default = "default_true")]
    pub blur: bool,

    /// Layered-window alpha (0-255) when blur is unavailable.
    #[serde(default = "default_alpha")]
    pub alpha: u8,

    #[serde(default)]
    pub shadow: bool,

    /// Milliseconds between bottom-of-stack re-assertions, 0 disables.
    #[serde(default = "default_z_order_interval_ms")]
    pub z_order_interval_ms: u64,

    #[serde(default = "default_margin_right")]
    pub margin_right: f32,

    #[serde(default = "default_margin_bottom")]
    pub margin_bottom: f32,
}

fn default_cache_file() -> PathBuf {
    PathBuf::from("daily_quote.json")
}

fn default_quotes() -> Vec<String> {
    QUOTES.iter().map(|q| q.to_string()).collect()
}

fn default_remote_url() -> String {
    "https://zenquotes.io/api/today".to_string()
}

fn default_remote_timeout_ms() -> u64 {
    3000
}

fn default_fallback_quote() -> String {
    "Stay positive, work hard, make it happen.".to_string()
}

fn default_true() -> bool {
    true
}

fn default_alpha() -> u8 {
    230
}

fn default_z_order_interval_ms() -> u64 {
    500
}

fn default_margin_right() -> f32 {
    50.0
}

fn default_margin_bottom() -> f32 {
    120.0
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            quote_policy: QuotePolicy::default(),
            cache_file: default_cache_file(),
            quotes: default_quotes(),
            remote_url: default_remote_url(),
            remote_timeout_ms: default_remote_timeout_ms(),
            fallback_quote: default_fallback_quote(),
            attach_to_desktop: true,
            blur: true,
            alpha: default_alpha(),
            shadow: false,
            z_order_interval_ms: default_z_order_interval_ms(),
            margin_right: default_margin_right(),
            margin_bottom: default_margin_bottom(),
        }
    }
}

impl WidgetConfig {
    /// Configured quotes, or the built-in list when the config left it empty.
    pub fn quote_list(&self) -> Vec<String> {
        if self.quotes.is_empty() {
            default_quotes()
        } else {
            self.quotes.clone()
        }
    }

    /// Cache path with relative entries resolved against `root`.
    pub fn cache_path(&self, root: &Path) -> PathBuf {
        resolve_against(root, &self.cache_file)
    }
}

pub fn default_config_path() -> PathBuf {
    widget_root_dir().join("config.yaml")
}

/// Load config.yaml from disk (or create defaults). Call once at startup.
pub fn load_config(path: &Path) -> WidgetConfig {
    if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_yaml::from_str::<WidgetConfig>(&text) {
                Ok(c) => {
                    info!("Loaded widget config from {}", path.display());
                    c
                }
                Err(e) => {
                    warn!("Failed to parse {}, using defaults: {e}", path.display());
                    WidgetConfig::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}, using defaults: {e}", path.display());
                WidgetConfig::default()
            }
        }
    } else {
        info!("No config found, creating defaults at {}", path.display());
        let defaults = WidgetConfig::default();
        save_config_to_disk(path, &defaults);
        defaults
    }
}

fn save_config_to_disk(path: &Path, cfg: &WidgetConfig) {
    match serde_yaml::to_string(cfg) {
        Ok(text) => {
            if let Err(e) = std::fs::write(path, text) {
                error!("Failed to write {}: {e}", path.display());
            }
        }
        Err(e) => error!("Failed to serialize config: {e}"),
    }
}
