// SPDX-License-Identifier: MPL-2.0
//! Toaster defaults, with optional persistence to a `toaster.toml` file.
//!
//! Every per-request option has a mount-level default here; a
//! [`ToastRequest`](crate::request::ToastRequest) only overrides the
//! fields it sets. Hosts that let users tune toast behavior can load and
//! save the defaults from the platform config directory.
//!
//! # Examples
//!
//! ```
//! use iced_toaster::config::ToasterConfig;
//! use std::time::Duration;
//!
//! let config = ToasterConfig::default();
//! assert_eq!(config.duration(), Duration::from_millis(3000));
//! assert!(!config.always_visible);
//! ```

use crate::error::Result;
use crate::gesture::{SwipeDirection, DEFAULT_CLAIM_THRESHOLD, DEFAULT_SWIPE_THRESHOLD};
use crate::request::Position;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toaster.toml";
const APP_NAME: &str = "IcedToaster";

/// Visible duration before auto-hide (ms).
pub const DEFAULT_DURATION_MS: u64 = 3000;
/// Enter/exit animation duration (ms).
pub const DEFAULT_ANIMATION_TIMING_MS: u64 = 600;

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

fn default_animation_ms() -> u64 {
    DEFAULT_ANIMATION_TIMING_MS
}

fn default_swipe_directions() -> Vec<SwipeDirection> {
    vec![
        SwipeDirection::Left,
        SwipeDirection::Right,
        SwipeDirection::Up,
    ]
}

fn default_swipe_threshold() -> f32 {
    DEFAULT_SWIPE_THRESHOLD
}

fn default_claim_threshold() -> f32 {
    DEFAULT_CLAIM_THRESHOLD
}

/// Mount-level defaults for a toast surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToasterConfig {
    /// Visible duration before auto-hide, in milliseconds.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Suppress the auto-hide timer entirely.
    #[serde(default)]
    pub always_visible: bool,
    /// Enter animation duration, in milliseconds.
    #[serde(default = "default_animation_ms")]
    pub animation_in_ms: u64,
    /// Exit animation duration, in milliseconds.
    #[serde(default = "default_animation_ms")]
    pub animation_out_ms: u64,
    /// Directions a toast may be swiped away in.
    #[serde(default = "default_swipe_directions")]
    pub swipe_directions: Vec<SwipeDirection>,
    /// Screen anchor for the surface.
    #[serde(default)]
    pub position: Position,
    /// Extra offset (px) from the anchored edge.
    #[serde(default)]
    pub offset: f32,
    /// Accumulated distance (px) a swipe needs to dismiss.
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32,
    /// Movement (px) before a drag claims the gesture.
    #[serde(default = "default_claim_threshold")]
    pub claim_threshold: f32,
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            always_visible: false,
            animation_in_ms: DEFAULT_ANIMATION_TIMING_MS,
            animation_out_ms: DEFAULT_ANIMATION_TIMING_MS,
            swipe_directions: default_swipe_directions(),
            position: Position::Top,
            offset: 0.0,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            claim_threshold: DEFAULT_CLAIM_THRESHOLD,
        }
    }
}

impl ToasterConfig {
    /// Visible duration before auto-hide.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Enter animation duration.
    #[must_use]
    pub fn animation_in(&self) -> Duration {
        Duration::from_millis(self.animation_in_ms)
    }

    /// Exit animation duration.
    #[must_use]
    pub fn animation_out(&self) -> Duration {
        Duration::from_millis(self.animation_out_ms)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<ToasterConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToasterConfig::default())
}

pub fn save(config: &ToasterConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<ToasterConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &ToasterConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_matches_documented_values() {
        let config = ToasterConfig::default();
        assert_eq!(config.duration(), Duration::from_millis(3000));
        assert_eq!(config.animation_in(), Duration::from_millis(600));
        assert_eq!(config.animation_out(), Duration::from_millis(600));
        assert!(!config.always_visible);
        assert_eq!(
            config.swipe_directions,
            vec![
                SwipeDirection::Left,
                SwipeDirection::Right,
                SwipeDirection::Up
            ]
        );
        assert_eq!(config.position, Position::Top);
        assert_eq!(config.offset, 0.0);
    }

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = ToasterConfig {
            duration_ms: 2000,
            always_visible: true,
            swipe_directions: vec![SwipeDirection::Down],
            position: Position::Bottom,
            offset: 24.0,
            ..ToasterConfig::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toaster.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.duration_ms, 2000);
        assert!(loaded.always_visible);
        assert_eq!(loaded.swipe_directions, vec![SwipeDirection::Down]);
        assert_eq!(loaded.position, Position::Bottom);
        assert_eq!(loaded.offset, 24.0);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toaster.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.duration_ms, DEFAULT_DURATION_MS);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toaster.toml");
        fs::write(&config_path, "duration_ms = 1500\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.duration_ms, 1500);
        assert_eq!(loaded.animation_in_ms, DEFAULT_ANIMATION_TIMING_MS);
        assert_eq!(loaded.swipe_directions.len(), 3);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("toaster.toml");

        save_to_path(&ToasterConfig::default(), &config_path).expect("save should succeed");
        assert!(config_path.exists());
    }
}
