//! Slot panel: one [`RowController`] per slot of the current item.

pub mod options;
pub mod row;

use std::time::Duration;

use bevy::prelude::*;

use crate::sim::engine::SlotEngine;
use crate::sim::slot::StatItem;
use crate::sim::types::{OptionId, ResetSignal};
use self::row::RowController;

/// What `PanelController::observe` did to the row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelChange {
    /// Same rows; each reconciled with its slot.
    Unchanged,
    /// Rows were added or removed at the tail.
    Resized,
    /// Every row was torn down and rebuilt.
    Rebuilt,
}

/// Rows are identified by (position, reset signal): a new signal replaces
/// every row, a new position gets a new row.
#[derive(Resource, Debug)]
pub struct PanelController {
    rows: Vec<RowController>,
    reset: ResetSignal,
    debounce_window: Duration,
}

impl PanelController {
    pub fn new(item: &StatItem, reset: ResetSignal, debounce_window: Duration) -> Self {
        let mut panel = Self {
            rows: Vec::new(),
            reset,
            debounce_window,
        };
        panel.provision(item);
        panel
    }

    pub fn rows(&self) -> &[RowController] {
        &self.rows
    }

    pub fn row(&self, slot_index: usize) -> Option<&RowController> {
        self.rows.get(slot_index)
    }

    pub fn reset_signal(&self) -> ResetSignal {
        self.reset
    }

    /// Window for rows created from now on. Existing rows keep theirs.
    pub fn set_debounce_window(&mut self, window: Duration) {
        self.debounce_window = window;
    }

    /// Bring the rows in line with the engine's item.
    pub fn observe(&mut self, item: &StatItem, reset: ResetSignal) -> PanelChange {
        if reset != self.reset {
            self.teardown();
            self.reset = reset;
            self.provision(item);
            info!("Slot panel rebuilt ({} rows)", self.rows.len());
            return PanelChange::Rebuilt;
        }

        let mut change = PanelChange::Unchanged;
        if self.rows.len() > item.slots.len() {
            for row in &mut self.rows[item.slots.len()..] {
                row.teardown();
            }
            self.rows.truncate(item.slots.len());
            change = PanelChange::Resized;
        }
        for (row, slot) in self.rows.iter_mut().zip(&item.slots) {
            row.observe(slot);
        }
        if self.rows.len() < item.slots.len() {
            let start = self.rows.len();
            for (index, slot) in item.slots.iter().enumerate().skip(start) {
                self.rows.push(RowController::new(index, slot, self.debounce_window));
            }
            change = PanelChange::Resized;
        }
        change
    }

    pub fn select_option(&mut self, slot_index: usize, option: OptionId, engine: &mut impl SlotEngine) {
        if let Some(row) = self.rows.get_mut(slot_index) {
            row.select_option(option, engine);
        }
    }

    pub fn set_value(&mut self, slot_index: usize, value: i32) {
        if let Some(row) = self.rows.get_mut(slot_index) {
            row.set_value(value);
        }
    }

    pub fn focus(&mut self, slot_index: usize) {
        if let Some(row) = self.rows.get_mut(slot_index) {
            row.focus();
        }
    }

    pub fn blur(&mut self, slot_index: usize) {
        if let Some(row) = self.rows.get_mut(slot_index) {
            row.blur();
        }
    }

    /// Advance every row's debounce. Returns how many recomputes fired.
    pub fn tick(&mut self, dt: Duration, engine: &mut impl SlotEngine) -> usize {
        let mut fired = 0;
        for row in &mut self.rows {
            if row.tick(dt, engine) {
                fired += 1;
            }
        }
        fired
    }

    pub fn teardown(&mut self) {
        for row in &mut self.rows {
            row.teardown();
        }
        self.rows.clear();
    }

    fn provision(&mut self, item: &StatItem) {
        self.rows = item
            .slots
            .iter()
            .enumerate()
            .map(|(index, slot)| RowController::new(index, slot, self.debounce_window))
            .collect();
    }
}
