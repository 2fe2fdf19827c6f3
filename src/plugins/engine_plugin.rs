use bevy::prelude::*;

use crate::config::tuning::Tuning;
use crate::panel::PanelController;
use crate::sim::catalog::OptionCatalog;
use crate::sim::engine::StatSimulator;
use crate::sim::events::ItemCommand;
use crate::sim::slot::{ItemType, StatItem};

pub struct EnginePlugin;

impl Plugin for EnginePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ItemCommand>();
        app.add_systems(Startup, init_engine);
        app.add_systems(Update, (tuning_reload_input, apply_item_commands));
    }
}

fn init_engine(world: &mut World) {
    let tuning = world.get_resource::<Tuning>().cloned().unwrap_or_default();
    let catalog = OptionCatalog::load_or_default(&tuning);
    info!("Option catalog ready ({} stats)", catalog.len());

    let sim = StatSimulator::new(
        catalog.clone(),
        StatItem::new(ItemType::Weapon, tuning.default_slot_count),
    );
    let panel = PanelController::new(sim.item(), sim.reset_signal(), tuning.debounce());

    world.insert_resource(catalog);
    world.insert_resource(sim);
    world.insert_resource(panel);
}

fn apply_item_commands(
    mut commands: MessageReader<ItemCommand>,
    tuning: Res<Tuning>,
    mut sim: ResMut<StatSimulator>,
) {
    for command in commands.read() {
        match *command {
            ItemCommand::NewItem(item_type) => {
                sim.new_item(item_type, tuning.default_slot_count);
            }
            ItemCommand::Undo => {
                if !sim.undo() {
                    info!("Nothing to undo");
                }
            }
            ItemCommand::ToggleFinished => {
                let finished = !sim.item().finished;
                sim.set_finished(finished);
                info!("Item marked {}", if finished { "finished" } else { "in progress" });
            }
        }
    }
}

/// Reload tuning with F5. New rows pick up a changed debounce window.
fn tuning_reload_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut tuning: ResMut<Tuning>,
    mut panel: ResMut<PanelController>,
) {
    if keyboard.just_pressed(KeyCode::F5) {
        tuning.reload();
        panel.set_debounce_window(tuning.debounce());
    }
}
