use serde::{Deserialize, Serialize};

use super::types::OptionId;

/// Authoritative state of one slot, owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlotState {
    pub stat: OptionId,
    pub target: i32,
}

impl SlotState {
    pub fn new(stat: OptionId, target: i32) -> Self {
        Self { stat, target }
    }
}

/// Item type discriminator. Armor cannot roll awakened elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemType {
    #[default]
    #[serde(rename = "w")]
    Weapon,
    #[serde(rename = "a")]
    Armor,
}

impl ItemType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Weapon => "Weapon",
            Self::Armor => "Armor",
        }
    }
}

/// The item whose slots the panel edits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatItem {
    pub item_type: ItemType,
    pub finished: bool,
    pub slots: Vec<SlotState>,
}

impl StatItem {
    /// Empty item with `slot_count` unset slots.
    pub fn new(item_type: ItemType, slot_count: usize) -> Self {
        Self {
            item_type,
            finished: false,
            slots: vec![SlotState::default(); slot_count],
        }
    }
}
