use bevy::prelude::*;

use super::slot::ItemType;

/// Item-level commands, applied to the simulator by `EnginePlugin`.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCommand {
    NewItem(ItemType),
    Undo,
    ToggleFinished,
}
