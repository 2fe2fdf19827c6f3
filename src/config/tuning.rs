use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// All tunable panel parameters, loaded from tuning.ron.
#[derive(Debug, Clone, PartialEq, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Quiet period after the last keystroke before a slot is recomputed.
    pub debounce_ms: u64,
    /// Inclusive range accepted by the value field.
    pub value_min: i32,
    pub value_max: i32,
    /// Max characters the value field accepts (sign included).
    pub value_max_chars: usize,
    /// Slot count for newly created items.
    pub default_slot_count: usize,
    pub window_width: u32,
    pub window_height: u32,
    /// Optional catalog override (`.ron` or `.json`).
    pub catalog_path: Option<PathBuf>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            debounce_ms: 100,
            value_min: -999,
            value_max: 999,
            value_max_chars: 4,
            default_slot_count: 6,
            window_width: 720,
            window_height: 640,
            catalog_path: None,
        }
    }
}

impl Tuning {
    /// Get the data directory for tuning files.
    pub fn data_dir() -> PathBuf {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("stat_slots")
    }

    /// Path to the tuning file.
    pub fn file_path() -> PathBuf {
        Self::data_dir().join("tuning.ron")
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Clamp a raw field value into the accepted range.
    pub fn clamp_value(&self, value: i32) -> i32 {
        value.clamp(self.value_min, self.value_max)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Ok(ron::from_str(&contents)?)
    }

    /// Load from file, or create default if not found.
    pub fn load_or_default() -> Self {
        let path = Self::file_path();
        if path.exists() {
            match Self::load(&path) {
                Ok(tuning) => return tuning,
                Err(e) => {
                    warn!("Failed to load tuning.ron: {e}, using defaults");
                    return Self::default();
                }
            }
        }
        let tuning = Self::default();
        tuning.save();
        tuning
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }
        let pretty = ron::ser::PrettyConfig::default();
        let s = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(path, s).map_err(|e| ConfigError::io(path, e))
    }

    /// Save current tuning to file.
    pub fn save(&self) {
        if let Err(e) = self.save_to(&Self::file_path()) {
            warn!("Failed to write tuning.ron: {e}");
        }
    }

    /// Reload from file (called by key press).
    pub fn reload(&mut self) {
        *self = Self::load_or_default();
        info!("Tuning reloaded");
    }
}
