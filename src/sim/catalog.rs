use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::types::OptionId;
use crate::config::tuning::Tuning;
use crate::error::ConfigError;

/// Category excluded from armor option lists.
pub const AWAKEN_ELEMENTS: &str = "Awaken Elements";

/// One selectable stat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub category: String,
    pub name: String,
    /// Material cost per point of |value|.
    #[serde(default = "default_cost_per_point")]
    pub cost_per_point: u32,
    /// Largest |value| the stand-in engine accepts.
    #[serde(default = "default_max_value")]
    pub max_value: i32,
}

fn default_cost_per_point() -> u32 {
    1
}

fn default_max_value() -> i32 {
    999
}

impl CatalogEntry {
    pub fn new(category: &str, name: &str, cost_per_point: u32, max_value: i32) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            cost_per_point,
            max_value,
        }
    }
}

/// Ordered stat catalog. Entries of one category are contiguous; option
/// ids are positions in this list, starting at 1.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionCatalog {
    entries: Vec<CatalogEntry>,
}

impl OptionCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, ConfigError> {
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Built-in catalog.
    pub fn with_defaults() -> Self {
        let mut entries = Vec::new();
        let mut category = |cat: &str, items: &[(&str, u32, i32)]| {
            for &(name, cost, max) in items {
                entries.push(CatalogEntry::new(cat, name, cost, max));
            }
        };

        // ── Base stats ─────────────────────────────────────────────
        category(
            "Enhance Stats",
            &[
                ("STR", 5, 30),
                ("STR %", 10, 10),
                ("INT", 5, 30),
                ("INT %", 10, 10),
                ("VIT", 5, 30),
                ("VIT %", 10, 10),
                ("AGI", 5, 30),
                ("AGI %", 10, 10),
                ("DEX", 5, 30),
                ("DEX %", 10, 10),
            ],
        );
        category(
            "Enhance HP/MP",
            &[("MaxHP", 3, 330), ("MaxHP %", 10, 15), ("MaxMP", 30, 30)],
        );

        // ── Offense ────────────────────────────────────────────────
        category(
            "Enhance Attack",
            &[
                ("ATK", 3, 30),
                ("ATK %", 10, 15),
                ("MATK", 3, 30),
                ("MATK %", 10, 15),
                ("Physical Pierce %", 20, 10),
                ("Magic Pierce %", 20, 10),
            ],
        );
        category(
            "Enhance Critical",
            &[("Critical Rate", 1, 30), ("Critical Damage", 3, 22)],
        );
        category(
            "Enhance Speed",
            &[("ASPD", 1, 330), ("CSPD", 1, 330)],
        );

        // ── Defense ────────────────────────────────────────────────
        category(
            "Enhance Defense",
            &[("DEF", 3, 30), ("DEF %", 10, 15), ("MDEF", 3, 30), ("MDEF %", 10, 15)],
        );
        category(
            "Enhance Accuracy",
            &[("Accuracy", 20, 15), ("Dodge", 20, 15)],
        );

        // ── Elements ───────────────────────────────────────────────
        category(
            AWAKEN_ELEMENTS,
            &[
                ("Fire Element", 100, 1),
                ("Water Element", 100, 1),
                ("Wind Element", 100, 1),
                ("Earth Element", 100, 1),
                ("Light Element", 100, 1),
                ("Dark Element", 100, 1),
            ],
        );

        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: OptionId) -> Option<&CatalogEntry> {
        self.entries.get(id.catalog_index()?)
    }

    /// Entries paired with their option ids, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionId, &CatalogEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (OptionId::from_catalog_index(i), e))
    }

    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let entries: Vec<CatalogEntry> = ron::from_str(s)?;
        Self::new(entries)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(s)?;
        Self::new(entries)
    }

    /// Load a catalog file; `.json` is read as JSON, anything else as RON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_ron_str(&contents)
        }
    }

    /// Catalog named by the tuning, or the built-in one.
    pub fn load_or_default(tuning: &Tuning) -> Self {
        let Some(path) = tuning.catalog_path.as_deref() else {
            return Self::with_defaults();
        };
        match Self::load(path) {
            Ok(catalog) => {
                info!("Loaded {} catalog entries from {:?}", catalog.len(), path);
                catalog
            }
            Err(e) => {
                warn!("Failed to load catalog {:?}: {e}, using built-in catalog", path);
                Self::with_defaults()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.category.trim().is_empty() {
                return Err(ConfigError::BlankEntry { index, field: "category" });
            }
            if entry.name.trim().is_empty() {
                return Err(ConfigError::BlankEntry { index, field: "name" });
            }
        }
        Ok(())
    }
}
