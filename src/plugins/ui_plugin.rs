use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::plugins::slots_plugin::SlotsContainer;
use crate::sim::engine::StatSimulator;
use crate::sim::events::ItemCommand;
use crate::sim::slot::{ItemType, StatItem};

const COLOR_BG: Color = Color::srgba(0.08, 0.08, 0.12, 1.0);
const COLOR_BTN: Color = Color::srgba(0.18, 0.20, 0.28, 1.0);
const COLOR_BTN_HOVER: Color = Color::srgba(0.28, 0.32, 0.42, 1.0);
const COLOR_TEXT: Color = Color::WHITE;
const COLOR_ACCENT: Color = Color::srgba(0.2, 0.7, 1.0, 1.0);

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ui);
        app.add_systems(Update, (toolbar_button_system, update_summary_display));
    }
}

#[derive(Component)]
struct SummaryText;

#[derive(Component)]
enum ToolbarButton {
    NewWeapon,
    NewArmor,
    Undo,
    ToggleFinished,
}

fn setup_ui(mut commands: Commands) {
    commands.spawn(Camera2d);

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(12.0),
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            BackgroundColor(COLOR_BG),
        ))
        .with_children(|root| {
            root.spawn((
                SummaryText,
                Text::new("---"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(COLOR_TEXT),
            ));

            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(10.0),
                ..default()
            })
            .with_children(|bar| {
                spawn_toolbar_button(bar, "New Weapon", ToolbarButton::NewWeapon);
                spawn_toolbar_button(bar, "New Armor", ToolbarButton::NewArmor);
                spawn_toolbar_button(bar, "Undo", ToolbarButton::Undo);
                spawn_toolbar_button(bar, "Finish", ToolbarButton::ToggleFinished);
            });

            root.spawn((
                Text::new("Slot Stats"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(COLOR_ACCENT),
                Node {
                    margin: UiRect::top(Val::Px(8.0)),
                    ..default()
                },
            ));

            root.spawn((
                SlotsContainer,
                Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(6.0),
                    ..default()
                },
            ));
        });
}

fn spawn_toolbar_button(parent: &mut ChildSpawnerCommands, label: &str, marker: ToolbarButton) {
    parent
        .spawn((
            marker,
            Button,
            Node {
                min_width: Val::Px(110.0),
                height: Val::Px(36.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                padding: UiRect::horizontal(Val::Px(12.0)),
                border_radius: BorderRadius::all(Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(COLOR_BTN),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(COLOR_TEXT),
            ));
        });
}

fn toolbar_button_system(
    mut q: Query<(&Interaction, &ToolbarButton, &mut BackgroundColor), Changed<Interaction>>,
    mut commands: MessageWriter<ItemCommand>,
) {
    for (interaction, button, mut bg) in &mut q {
        match interaction {
            Interaction::Pressed => {
                commands.write(match button {
                    ToolbarButton::NewWeapon => ItemCommand::NewItem(ItemType::Weapon),
                    ToolbarButton::NewArmor => ItemCommand::NewItem(ItemType::Armor),
                    ToolbarButton::Undo => ItemCommand::Undo,
                    ToolbarButton::ToggleFinished => ItemCommand::ToggleFinished,
                });
            }
            Interaction::Hovered => *bg = BackgroundColor(COLOR_BTN_HOVER),
            Interaction::None => *bg = BackgroundColor(COLOR_BTN),
        }
    }
}

fn summary_line(item: &StatItem, total_cost: u64, can_undo: bool) -> String {
    let used = item.slots.iter().filter(|s| !s.stat.is_unset()).count();
    format!(
        "{}  slots {}/{}  total {} mats{}{}",
        item.item_type.label(),
        used,
        item.slots.len(),
        total_cost,
        if item.finished { "  [finished]" } else { "" },
        if can_undo { "" } else { "  (no undo)" },
    )
}

fn update_summary_display(sim: Res<StatSimulator>, mut text_query: Query<&mut Text, With<SummaryText>>) {
    if !sim.is_changed() {
        return;
    }
    let line = summary_line(sim.item(), sim.total_cost(), sim.can_undo());
    for mut text in &mut text_query {
        **text = line.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::slot::SlotState;
    use crate::sim::types::OptionId;

    #[test]
    fn summary_counts_set_slots() {
        let mut item = StatItem::new(ItemType::Armor, 4);
        item.slots[1] = SlotState::new(OptionId(2), 3);
        item.finished = true;
        assert_eq!(
            summary_line(&item, 30, true),
            "Armor  slots 1/4  total 30 mats  [finished]"
        );
        assert_eq!(
            summary_line(&StatItem::new(ItemType::Weapon, 2), 0, false),
            "Weapon  slots 0/2  total 0 mats  (no undo)"
        );
    }
}
