use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::catalog::{CatalogEntry, OptionCatalog};
use super::slot::{ItemType, SlotState, StatItem};
use super::types::{OptionId, ResetSignal, ValidationColor};

/// Snapshots kept for undo.
const HISTORY_LIMIT: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub color: ValidationColor,
}

/// Engine answer for one slot change. Both fields are optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(default, rename = "matCost")]
    pub mat_cost: Option<String>,
    #[serde(default)]
    pub validation: Option<Validation>,
}

impl ValidationResult {
    pub fn new(mat_cost: impl Into<String>, color: ValidationColor) -> Self {
        Self {
            mat_cost: Some(mat_cost.into()),
            validation: Some(Validation { color }),
        }
    }
}

/// The single seam into the simulation engine.
///
/// `slot_changed` must be safe to call repeatedly with the same arguments.
/// `None` means "no update available".
pub trait SlotEngine {
    fn slot_changed(&mut self, slot_index: usize, option: OptionId, value: i32) -> Option<ValidationResult>;

    /// A row was switched back to "unselected". Not a recompute.
    fn slot_cleared(&mut self, _slot_index: usize) {}
}

impl<F> SlotEngine for F
where
    F: FnMut(usize, OptionId, i32) -> Option<ValidationResult>,
{
    fn slot_changed(&mut self, slot_index: usize, option: OptionId, value: i32) -> Option<ValidationResult> {
        self(slot_index, option, value)
    }
}

/// Stand-in simulation engine: owns the authoritative item and prices
/// each slot from the catalog.
#[derive(Resource, Debug, Clone)]
pub struct StatSimulator {
    catalog: OptionCatalog,
    item: StatItem,
    history: Vec<StatItem>,
    reset: ResetSignal,
}

impl StatSimulator {
    pub fn new(catalog: OptionCatalog, item: StatItem) -> Self {
        Self {
            catalog,
            item,
            history: Vec::new(),
            reset: ResetSignal::fresh(),
        }
    }

    pub fn item(&self) -> &StatItem {
        &self.item
    }

    pub fn reset_signal(&self) -> ResetSignal {
        self.reset
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Cost and color for `value` of `option`, without touching the item.
    pub fn evaluate(&self, option: OptionId, value: i32) -> Option<ValidationResult> {
        let entry = self.catalog.get(option)?;
        let cost = mat_cost(entry, value);
        let color = if value.unsigned_abs() > entry.max_value.unsigned_abs() {
            ValidationColor::Red
        } else if value < 0 {
            ValidationColor::Gray
        } else {
            ValidationColor::Green
        };
        Some(ValidationResult {
            mat_cost: (cost > 0).then(|| format!("{cost} mats")),
            validation: Some(Validation { color }),
        })
    }

    /// Sum of material cost over every set slot.
    pub fn total_cost(&self) -> u64 {
        self.item
            .slots
            .iter()
            .filter_map(|s| self.catalog.get(s.stat).map(|e| mat_cost(e, s.target)))
            .sum()
    }

    /// Replace the item with an empty one. Clears undo history.
    pub fn new_item(&mut self, item_type: ItemType, slot_count: usize) {
        self.item = StatItem::new(item_type, slot_count);
        self.history.clear();
        self.reset = ResetSignal::fresh();
        info!("New {} item with {} slots", item_type.label(), slot_count);
    }

    /// Restore the previous item state. Returns false when there is none.
    pub fn undo(&mut self) -> bool {
        let Some(prev) = self.history.pop() else {
            return false;
        };
        self.item = prev;
        self.reset = ResetSignal::fresh();
        info!("Undo ({} steps left)", self.history.len());
        true
    }

    pub fn set_finished(&mut self, finished: bool) {
        if self.item.finished != finished {
            self.record();
            self.item.finished = finished;
        }
    }

    fn record(&mut self) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(self.item.clone());
    }

    fn write_slot(&mut self, slot_index: usize, next: SlotState) -> bool {
        match self.item.slots.get(slot_index) {
            Some(current) if *current != next => {
                self.record();
                self.item.slots[slot_index] = next;
                true
            }
            _ => false,
        }
    }
}

fn mat_cost(entry: &CatalogEntry, value: i32) -> u64 {
    u64::from(value.unsigned_abs()) * u64::from(entry.cost_per_point)
}

impl SlotEngine for StatSimulator {
    fn slot_changed(&mut self, slot_index: usize, option: OptionId, value: i32) -> Option<ValidationResult> {
        if self.item.finished || slot_index >= self.item.slots.len() {
            return None;
        }
        let result = self.evaluate(option, value)?;
        if self.write_slot(slot_index, SlotState::new(option, value)) {
            debug!("Slot {} set to option {} = {}", slot_index, option, value);
        }
        Some(result)
    }

    fn slot_cleared(&mut self, slot_index: usize) {
        if !self.item.finished {
            self.write_slot(slot_index, SlotState::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator() -> StatSimulator {
        StatSimulator::new(OptionCatalog::with_defaults(), StatItem::new(ItemType::Weapon, 3))
    }

    #[test]
    fn result_json_uses_mat_cost_key() {
        let r: ValidationResult =
            serde_json::from_str(r#"{"matCost": "120g", "validation": {"color": "red"}}"#).unwrap();
        assert_eq!(r, ValidationResult::new("120g", ValidationColor::Red));
        let empty: ValidationResult = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ValidationResult::default());
    }

    #[test]
    fn closures_are_engines() {
        let mut calls = Vec::new();
        let mut engine = |slot: usize, option: OptionId, value: i32| -> Option<ValidationResult> {
            calls.push((slot, option, value));
            None
        };
        assert!(engine.slot_changed(2, OptionId(3), 7).is_none());
        engine.slot_cleared(2);
        assert_eq!(calls, vec![(2, OptionId(3), 7)]);
    }

    #[test]
    fn slot_change_writes_item_and_prices_it() {
        let mut sim = simulator();
        // STR: 5 mats per point, max 30
        let r = sim.slot_changed(0, OptionId(1), 10).unwrap();
        assert_eq!(r, ValidationResult::new("50 mats", ValidationColor::Green));
        assert_eq!(sim.item().slots[0], SlotState::new(OptionId(1), 10));
        assert_eq!(sim.total_cost(), 50);
    }

    #[test]
    fn colors_follow_range_and_sign() {
        let sim = simulator();
        let color = |v| sim.evaluate(OptionId(1), v).unwrap().validation.unwrap().color;
        assert_eq!(color(31), ValidationColor::Red);
        assert_eq!(color(-31), ValidationColor::Red);
        assert_eq!(color(-5), ValidationColor::Gray);
        assert_eq!(color(30), ValidationColor::Green);
        assert_eq!(sim.evaluate(OptionId(1), 0).unwrap().mat_cost, None);
    }

    #[test]
    fn extreme_values_are_priced_not_panicking() {
        let mut sim = simulator();
        let r = sim.slot_changed(0, OptionId(1), i32::MIN).unwrap();
        assert_eq!(r.validation.unwrap().color, ValidationColor::Red);
        assert_eq!(r.mat_cost.as_deref(), Some("10737418240 mats"));

        let r = sim.slot_changed(0, OptionId(1), i32::MAX).unwrap();
        assert_eq!(r.validation.unwrap().color, ValidationColor::Red);
    }

    #[test]
    fn identical_changes_do_not_grow_history() {
        let mut sim = simulator();
        sim.slot_changed(1, OptionId(2), 4);
        sim.slot_changed(1, OptionId(2), 4);
        assert!(sim.undo());
        assert!(!sim.can_undo());
        assert_eq!(sim.item().slots[1], SlotState::default());
    }

    #[test]
    fn undo_issues_fresh_reset_signal() {
        let mut sim = simulator();
        let before = sim.reset_signal();
        assert!(!sim.undo());
        assert_eq!(sim.reset_signal(), before);
        sim.slot_changed(0, OptionId(1), 3);
        assert!(sim.undo());
        assert_ne!(sim.reset_signal(), before);
    }

    #[test]
    fn finished_item_rejects_changes() {
        let mut sim = simulator();
        sim.set_finished(true);
        assert!(sim.slot_changed(0, OptionId(1), 3).is_none());
        sim.slot_cleared(0);
        assert_eq!(sim.item().slots[0], SlotState::default());
    }

    #[test]
    fn unknown_option_or_slot_yields_none() {
        let mut sim = simulator();
        assert!(sim.slot_changed(0, OptionId(999), 3).is_none());
        assert!(sim.slot_changed(9, OptionId(1), 3).is_none());
        assert!(!sim.can_undo());
    }

    #[test]
    fn clear_resets_slot() {
        let mut sim = simulator();
        sim.slot_changed(2, OptionId(1), 3);
        sim.slot_cleared(2);
        assert_eq!(sim.item().slots[2], SlotState::default());
    }

    #[test]
    fn new_item_replaces_slots_and_history() {
        let mut sim = simulator();
        sim.slot_changed(0, OptionId(1), 3);
        let before = sim.reset_signal();
        sim.new_item(ItemType::Armor, 5);
        assert_eq!(sim.item(), &StatItem::new(ItemType::Armor, 5));
        assert!(!sim.can_undo());
        assert_ne!(sim.reset_signal(), before);
    }

    #[test]
    fn history_is_bounded() {
        let mut sim = simulator();
        for v in 1..=(HISTORY_LIMIT as i32 + 10) {
            sim.slot_changed(0, OptionId(1), v);
        }
        let mut steps = 0;
        while sim.undo() {
            steps += 1;
        }
        assert_eq!(steps, HISTORY_LIMIT);
    }
}
