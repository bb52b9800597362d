//! Application Configuration
//!
//! Defaults can be overridden by a `window.TASK_LIST_CONFIG` object set
//! before the bundle loads.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Global the page may define to override defaults
pub const CONFIG_GLOBAL: &str = "TASK_LIST_CONFIG";

/// When a progress recomputation on an all-complete list fires the effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelebrationPolicy {
    /// Only on the move into all-complete
    #[default]
    OncePerTransition,
    /// On every recomputation while all-complete
    EveryRecompute,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    pub policy: CelebrationPolicy,
    pub duration_ms: u32,
    pub interval_ms: u32,
    /// Particles per burst at the start; decays linearly to zero
    pub max_particles: f64,
    pub start_velocity: u32,
    pub spread: u32,
    pub ticks: u32,
    pub z_index: i32,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            policy: CelebrationPolicy::default(),
            duration_ms: 1500,
            interval_ms: 250,
            max_particles: 50.0,
            start_velocity: 30,
            spread: 360,
            ticks: 60,
            z_index: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Local storage key holding the task list
    pub storage_key: String,
    /// `log` level name (`error`, `warn`, `info`, `debug`, `trace`, `off`)
    pub log_level: String,
    pub celebration: CelebrationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "tasks".to_string(),
            log_level: "info".to_string(),
            celebration: CelebrationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON override; missing fields keep their defaults
    #[cfg(test)]
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    /// Convert a JS object (the page global) into a config
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }

    /// Defaults merged with `window.TASK_LIST_CONFIG`, if the page set one.
    /// Runs before the logger exists, so problems go straight to the console.
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        match Self::from_js(value) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("[CONFIG] Ignoring invalid {}: {}", CONFIG_GLOBAL, e).into(),
                );
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "tasks");
        assert_eq!(config.celebration.duration_ms, 1500);
        assert_eq!(config.celebration.interval_ms, 250);
        assert_eq!(config.celebration.policy, CelebrationPolicy::OncePerTransition);
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(
            r#"{ "storage_key": "todo", "celebration": { "policy": "every_recompute" } }"#,
        )
        .unwrap();

        assert_eq!(config.storage_key, "todo");
        assert_eq!(config.celebration.policy, CelebrationPolicy::EveryRecompute);
        assert_eq!(config.celebration.spread, 360);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        let config = AppConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);

        let config = AppConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(AppConfig::from_json("{ not json").is_err());
    }
}
