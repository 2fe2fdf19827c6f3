//! Editing state of a single slot row.
//!
//! A row keeps a local copy of the slot (selected stat + pending value)
//! so keystrokes show up immediately, and reconciles with the engine's
//! authoritative [`SlotState`] whenever that changes. Value edits are
//! debounced: only the value present when the quiet period ends is sent
//! to the engine.

use std::time::Duration;

use bevy::log::debug;

use crate::sim::engine::{SlotEngine, ValidationResult};
use crate::sim::slot::{SlotState, StatItem};
use crate::sim::types::{Countdown, OptionId, ValidityClass};

#[derive(Debug)]
pub struct RowController {
    slot_index: usize,
    selected: OptionId,
    pending_value: i32,
    cost_display: String,
    validity: ValidityClass,
    value_focused: bool,
    /// Last authoritative slot state this row reconciled against.
    observed: SlotState,
    /// A value resync was skipped because the field had focus.
    resync_deferred: bool,
    debounce_window: Duration,
    debounce: Option<Countdown>,
}

impl RowController {
    pub fn new(slot_index: usize, slot: &SlotState, debounce_window: Duration) -> Self {
        Self {
            slot_index,
            selected: slot.stat,
            pending_value: slot.target,
            cost_display: String::new(),
            validity: ValidityClass::Neutral,
            value_focused: false,
            observed: *slot,
            resync_deferred: false,
            debounce_window,
            debounce: None,
        }
    }

    pub fn slot_index(&self) -> usize {
        self.slot_index
    }

    pub fn selected(&self) -> OptionId {
        self.selected
    }

    pub fn pending_value(&self) -> i32 {
        self.pending_value
    }

    pub fn cost_display(&self) -> &str {
        &self.cost_display
    }

    pub fn validity(&self) -> ValidityClass {
        self.validity
    }

    pub fn is_value_focused(&self) -> bool {
        self.value_focused
    }

    pub fn has_pending_recompute(&self) -> bool {
        self.debounce.is_some()
    }

    /// Reconcile with the engine's slot state.
    ///
    /// Runs only when `slot` differs from the last observed state, or when
    /// an earlier value resync was held back by focus.
    pub fn observe(&mut self, slot: &SlotState) {
        if *slot == self.observed && !self.resync_deferred {
            return;
        }
        self.observed = *slot;
        self.selected = slot.stat;

        if slot.target != self.pending_value {
            if self.value_focused {
                self.resync_deferred = true;
                return;
            }
            self.pending_value = slot.target;
        }
        self.resync_deferred = false;
    }

    pub fn select_option(&mut self, option: OptionId, engine: &mut impl SlotEngine) {
        self.selected = option;

        if option.is_unset() {
            self.pending_value = 0;
            self.cost_display.clear();
            self.validity = ValidityClass::Neutral;
            engine.slot_cleared(self.slot_index);
            return;
        }

        let result = engine.slot_changed(self.slot_index, option, self.pending_value);
        self.apply_result(result);
    }

    /// Take a new value from the field and restart the quiet period.
    /// A local edit supersedes any resync held back by focus.
    pub fn set_value(&mut self, value: i32) {
        self.pending_value = value;
        self.resync_deferred = false;
        self.debounce = Some(Countdown::new(self.debounce_window));
    }

    /// Advance the debounce countdown. Returns true when a recompute was
    /// sent to the engine.
    pub fn tick(&mut self, dt: Duration, engine: &mut impl SlotEngine) -> bool {
        let Some(remaining) = self.debounce else {
            return false;
        };
        let remaining = remaining.dec(dt);
        if !remaining.is_expired() {
            self.debounce = Some(remaining);
            return false;
        }
        self.debounce = None;
        self.recompute(engine)
    }

    pub fn focus(&mut self) {
        self.value_focused = true;
    }

    pub fn blur(&mut self) {
        self.value_focused = false;
    }

    pub fn value_input_disabled(&self, item: &StatItem) -> bool {
        self.selected.is_unset() || item.finished
    }

    pub fn selector_disabled(&self, item: &StatItem) -> bool {
        item.finished
    }

    /// Cancel any armed recompute. Called before the row is dropped.
    pub fn teardown(&mut self) {
        if self.has_pending_recompute() {
            debug!("Slot {} dropped a pending recompute", self.slot_index + 1);
        }
        self.debounce = None;
    }

    fn recompute(&mut self, engine: &mut impl SlotEngine) -> bool {
        if self.selected.is_unset() {
            return false;
        }
        debug!(
            "Recompute slot {}: option {} = {}",
            self.slot_index + 1,
            self.selected,
            self.pending_value
        );
        let result = engine.slot_changed(self.slot_index, self.selected, self.pending_value);
        self.apply_result(result);
        true
    }

    fn apply_result(&mut self, result: Option<ValidationResult>) {
        // No result leaves the previous display as is.
        let Some(result) = result else {
            return;
        };
        self.cost_display = result.mat_cost.unwrap_or_default();
        self.validity = result
            .validation
            .map_or(ValidityClass::Neutral, |v| ValidityClass::from_color(v.color));
    }
}
