mod config;
mod error;
mod panel;
mod plugins;
mod sim;

use bevy::prelude::*;

use config::tuning::Tuning;
use plugins::{engine_plugin::EnginePlugin, slots_plugin::SlotsPlugin, ui_plugin::UiPlugin};

fn main() {
    let tuning = Tuning::load_or_default();
    let resolution = (tuning.window_width, tuning.window_height);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Stat Slots".into(),
                resolution: resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(tuning)
        .add_plugins(EnginePlugin)
        .add_plugins(UiPlugin)
        .add_plugins(SlotsPlugin)
        .run();
}
