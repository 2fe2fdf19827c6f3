use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::picking::hover::HoverMap;
use bevy::prelude::*;

use crate::config::tuning::Tuning;
use crate::panel::PanelController;
use crate::panel::PanelChange;
use crate::panel::options::{OptionEntry, build_option_list, selected_label};
use crate::sim::catalog::OptionCatalog;
use crate::sim::engine::StatSimulator;
use crate::sim::types::{OptionId, ValidityClass};

// ── Colors (match ui_plugin style) ──────────────────────────────────

const COLOR_BTN: Color = Color::srgba(0.18, 0.20, 0.28, 1.0);
const COLOR_BTN_HOVER: Color = Color::srgba(0.28, 0.32, 0.42, 1.0);
const COLOR_BTN_DISABLED: Color = Color::srgba(0.14, 0.14, 0.18, 1.0);
const COLOR_TEXT: Color = Color::WHITE;
const COLOR_TEXT_DIM: Color = Color::srgba(0.5, 0.5, 0.5, 1.0);
const COLOR_HEADER: Color = Color::srgba(0.35, 0.55, 1.0, 1.0);
const COLOR_CARD: Color = Color::srgba(0.12, 0.14, 0.20, 1.0);
const COLOR_INPUT_BG: Color = Color::srgba(0.10, 0.10, 0.16, 1.0);
const COLOR_INPUT_FOCUS: Color = Color::srgba(0.15, 0.15, 0.25, 1.0);
const COLOR_INVALID: Color = Color::srgba(0.55, 0.12, 0.12, 1.0);
const COLOR_NEGATIVE: Color = Color::srgba(0.30, 0.30, 0.32, 1.0);
const COLOR_VALID: Color = Color::srgba(0.12, 0.40, 0.18, 1.0);

// ── Plugin ──────────────────────────────────────────────────────────

pub struct SlotsPlugin;

impl Plugin for SlotsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OpenSelector>();
        app.init_resource::<ValueEditor>();

        app.add_systems(PostStartup, spawn_slot_rows);
        app.add_systems(
            Update,
            (
                sync_panel_system,
                selector_click_system,
                option_choice_system,
                value_focus_system,
                value_typing_system,
                tick_slot_debounce,
                render_selectors,
                render_dropdowns,
                render_value_inputs,
                render_cost_labels,
            )
                .chain(),
        );

        // Mouse-wheel scrolling for the option dropdowns
        app.add_systems(Update, ui_scroll_system);
    }
}

// ── Marker components ───────────────────────────────────────────────

/// Node the slot rows are spawned under.
#[derive(Component)]
pub struct SlotsContainer;

#[derive(Component)]
struct SlotRowUi;

#[derive(Component)]
struct StatSelector {
    slot: usize,
}

#[derive(Component)]
struct SelectorLabel {
    slot: usize,
}

#[derive(Component)]
struct OptionDropdown {
    slot: usize,
}

#[derive(Component)]
struct OptionChoice {
    slot: usize,
    option: OptionId,
}

#[derive(Component)]
struct ValueInput {
    slot: usize,
}

#[derive(Component)]
struct ValueDisplay {
    slot: usize,
}

#[derive(Component)]
struct CostLabel {
    slot: usize,
}

// ── UI state ────────────────────────────────────────────────────────

/// Row whose option dropdown is open.
#[derive(Resource, Default)]
struct OpenSelector(Option<usize>);

/// Text being typed into the focused value field.
#[derive(Resource, Default)]
struct ValueEditor {
    focused: Option<usize>,
    buffer: String,
}

// ── Value field editing ─────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
enum FieldEdit {
    /// Buffer changed; carries the parsed value when it is a number.
    Changed(Option<i32>),
    Unchanged,
    Commit,
}

/// Apply one key to the field buffer. Only digits and a leading minus are
/// accepted, up to `max_chars` characters.
fn edit_value_buffer(buffer: &mut String, key: &Key, tuning: &Tuning) -> FieldEdit {
    match key {
        Key::Backspace => {
            if buffer.pop().is_none() {
                return FieldEdit::Unchanged;
            }
        }
        Key::Escape | Key::Enter => return FieldEdit::Commit,
        Key::Character(c) => {
            let mut accepted = false;
            for ch in c.chars() {
                if buffer.chars().count() >= tuning.value_max_chars {
                    break;
                }
                let ok = ch.is_ascii_digit() || (ch == '-' && buffer.is_empty());
                if ok {
                    buffer.push(ch);
                    accepted = true;
                }
            }
            if !accepted {
                return FieldEdit::Unchanged;
            }
        }
        _ => return FieldEdit::Unchanged,
    }
    FieldEdit::Changed(buffer.parse::<i32>().ok().map(|v| tuning.clamp_value(v)))
}

fn input_color(validity: ValidityClass, disabled: bool, focused: bool) -> Color {
    if disabled {
        return COLOR_BTN_DISABLED;
    }
    match validity {
        ValidityClass::Invalid => COLOR_INVALID,
        ValidityClass::Negative => COLOR_NEGATIVE,
        ValidityClass::Valid => COLOR_VALID,
        ValidityClass::Neutral if focused => COLOR_INPUT_FOCUS,
        ValidityClass::Neutral => COLOR_INPUT_BG,
    }
}

// ── Spawning ────────────────────────────────────────────────────────

fn spawn_slot_rows(
    mut commands: Commands,
    containers: Query<Entity, With<SlotsContainer>>,
    panel: Res<PanelController>,
    sim: Res<StatSimulator>,
    catalog: Res<OptionCatalog>,
) {
    let Some(container) = containers.iter().next() else {
        warn!("No slot container to spawn rows into");
        return;
    };
    let options = build_option_list(&catalog, sim.item().item_type);
    commands.entity(container).with_children(|parent| {
        for row in panel.rows() {
            spawn_slot_row(parent, row.slot_index(), &options);
        }
    });
}

fn spawn_slot_row(parent: &mut ChildSpawnerCommands, slot: usize, options: &[OptionEntry]) {
    parent.spawn((
        SlotRowUi,
        Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(12.0),
            padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
            border_radius: BorderRadius::all(Val::Px(6.0)),
            ..default()
        },
        BackgroundColor(COLOR_CARD),
    )).with_children(|row| {
        // Position label
        row.spawn((
            Text::new(format!("{}", slot + 1)),
            TextFont { font_size: 18.0, ..default() },
            TextColor(COLOR_TEXT_DIM),
            Node { width: Val::Px(24.0), ..default() },
        ));

        // Stat selector + its dropdown
        row.spawn(Node {
            flex_direction: FlexDirection::Column,
            ..default()
        }).with_children(|col| {
            col.spawn((
                StatSelector { slot },
                Button,
                Node {
                    width: Val::Px(240.0),
                    height: Val::Px(32.0),
                    align_items: AlignItems::Center,
                    padding: UiRect::horizontal(Val::Px(8.0)),
                    border_radius: BorderRadius::all(Val::Px(4.0)),
                    ..default()
                },
                BackgroundColor(COLOR_BTN),
            )).with_children(|btn| {
                btn.spawn((
                    SelectorLabel { slot },
                    Text::new(""),
                    TextFont { font_size: 15.0, ..default() },
                    TextColor(COLOR_TEXT),
                ));
            });

            spawn_option_dropdown(col, slot, options);
        });

        // Value field
        row.spawn((
            ValueInput { slot },
            Button,
            Node {
                width: Val::Px(80.0),
                height: Val::Px(32.0),
                justify_content: JustifyContent::FlexEnd,
                align_items: AlignItems::Center,
                padding: UiRect::horizontal(Val::Px(8.0)),
                border_radius: BorderRadius::all(Val::Px(4.0)),
                ..default()
            },
            BackgroundColor(COLOR_INPUT_BG),
        )).with_children(|input| {
            input.spawn((
                ValueDisplay { slot },
                Text::new("0"),
                TextFont { font_size: 15.0, ..default() },
                TextColor(COLOR_TEXT),
            ));
        });

        // Material cost
        row.spawn((
            CostLabel { slot },
            Text::new(""),
            TextFont { font_size: 15.0, ..default() },
            TextColor(COLOR_TEXT_DIM),
            Node { min_width: Val::Px(100.0), ..default() },
        ));
    });
}

fn spawn_option_dropdown(parent: &mut ChildSpawnerCommands, slot: usize, options: &[OptionEntry]) {
    parent.spawn((
        OptionDropdown { slot },
        Node {
            display: Display::None,
            position_type: PositionType::Absolute,
            top: Val::Px(34.0),
            width: Val::Px(240.0),
            max_height: Val::Px(280.0),
            flex_direction: FlexDirection::Column,
            padding: UiRect::all(Val::Px(4.0)),
            overflow: Overflow::scroll_y(),
            border_radius: BorderRadius::all(Val::Px(4.0)),
            ..default()
        },
        ScrollPosition::default(),
        GlobalZIndex(10),
        BackgroundColor(COLOR_INPUT_BG),
    )).with_children(|list| {
        for entry in options {
            // Category headers are plain text: no Button, no Interaction
            if entry.is_disabled() {
                list.spawn((
                    Text::new(entry.label()),
                    TextFont { font_size: 13.0, ..default() },
                    TextColor(COLOR_HEADER),
                    Node { margin: UiRect::vertical(Val::Px(4.0)), ..default() },
                ));
                continue;
            }
            let Some(option) = entry.option_id() else { continue };
            list.spawn((
                OptionChoice { slot, option },
                Button,
                Node {
                    min_height: Val::Px(24.0),
                    align_items: AlignItems::Center,
                    padding: UiRect::horizontal(Val::Px(8.0)),
                    ..default()
                },
                BackgroundColor(Color::NONE),
            )).with_children(|btn| {
                btn.spawn((
                    Text::new(entry.label()),
                    TextFont { font_size: 14.0, ..default() },
                    TextColor(COLOR_TEXT),
                ));
            });
        }
    });
}

// ── Systems ─────────────────────────────────────────────────────────

/// Reconcile rows with the simulator; respawn the row UI when the row set
/// changed.
fn sync_panel_system(
    mut commands: Commands,
    sim: Res<StatSimulator>,
    catalog: Res<OptionCatalog>,
    mut panel: ResMut<PanelController>,
    mut open: ResMut<OpenSelector>,
    mut editor: ResMut<ValueEditor>,
    containers: Query<Entity, With<SlotsContainer>>,
    row_ui: Query<Entity, With<SlotRowUi>>,
) {
    let change = panel.observe(sim.item(), sim.reset_signal());
    if change == PanelChange::Unchanged {
        return;
    }

    for entity in &row_ui {
        commands.entity(entity).despawn();
    }
    open.0 = None;
    if change == PanelChange::Rebuilt {
        editor.focused = None;
        editor.buffer.clear();
    }

    let Some(container) = containers.iter().next() else {
        return;
    };
    let options = build_option_list(&catalog, sim.item().item_type);
    commands.entity(container).with_children(|parent| {
        for row in panel.rows() {
            spawn_slot_row(parent, row.slot_index(), &options);
        }
    });
}

fn selector_click_system(
    q: Query<(&Interaction, &StatSelector), Changed<Interaction>>,
    sim: Res<StatSimulator>,
    panel: Res<PanelController>,
    mut open: ResMut<OpenSelector>,
) {
    for (interaction, selector) in &q {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let disabled = panel
            .row(selector.slot)
            .is_none_or(|row| row.selector_disabled(sim.item()));
        if disabled {
            continue;
        }
        open.0 = if open.0 == Some(selector.slot) {
            None
        } else {
            Some(selector.slot)
        };
    }
}

fn option_choice_system(
    q: Query<(&Interaction, &OptionChoice), Changed<Interaction>>,
    mut sim: ResMut<StatSimulator>,
    mut panel: ResMut<PanelController>,
    mut open: ResMut<OpenSelector>,
) {
    for (interaction, choice) in &q {
        if *interaction != Interaction::Pressed || open.0 != Some(choice.slot) {
            continue;
        }
        panel.select_option(choice.slot, choice.option, &mut *sim);
        open.0 = None;
    }
}

/// Click focuses a value field; clicking anywhere else blurs it.
fn value_focus_system(
    inputs: Query<(&Interaction, &ValueInput)>,
    mouse: Res<ButtonInput<MouseButton>>,
    sim: Res<StatSimulator>,
    mut panel: ResMut<PanelController>,
    mut editor: ResMut<ValueEditor>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let clicked = inputs
        .iter()
        .find(|(interaction, _)| **interaction == Interaction::Pressed)
        .map(|(_, input)| input.slot)
        .filter(|&slot| {
            panel
                .row(slot)
                .is_some_and(|row| !row.value_input_disabled(sim.item()))
        });

    if clicked == editor.focused {
        return;
    }
    if let Some(prev) = editor.focused.take() {
        panel.blur(prev);
    }
    if let Some(slot) = clicked {
        panel.focus(slot);
        editor.focused = Some(slot);
        editor.buffer = panel
            .row(slot)
            .map(|row| row.pending_value().to_string())
            .unwrap_or_default();
    }
}

fn value_typing_system(
    mut keyboard_events: MessageReader<KeyboardInput>,
    tuning: Res<Tuning>,
    mut panel: ResMut<PanelController>,
    mut editor: ResMut<ValueEditor>,
) {
    let Some(slot) = editor.focused else {
        keyboard_events.clear();
        return;
    };

    for event in keyboard_events.read() {
        if !event.state.is_pressed() {
            continue;
        }
        match edit_value_buffer(&mut editor.buffer, &event.logical_key, &tuning) {
            FieldEdit::Changed(Some(value)) => panel.set_value(slot, value),
            FieldEdit::Changed(None) | FieldEdit::Unchanged => {}
            FieldEdit::Commit => {
                panel.blur(slot);
                editor.focused = None;
                editor.buffer.clear();
                break;
            }
        }
    }
}

fn tick_slot_debounce(time: Res<Time>, mut sim: ResMut<StatSimulator>, mut panel: ResMut<PanelController>) {
    panel.tick(time.delta(), &mut *sim);
}

fn render_selectors(
    sim: Res<StatSimulator>,
    catalog: Res<OptionCatalog>,
    panel: Res<PanelController>,
    mut selectors: Query<(&Interaction, &StatSelector, &mut BackgroundColor)>,
    mut labels: Query<(&SelectorLabel, &mut Text)>,
) {
    for (interaction, selector, mut bg) in &mut selectors {
        let Some(row) = panel.row(selector.slot) else { continue };
        *bg = BackgroundColor(if row.selector_disabled(sim.item()) {
            COLOR_BTN_DISABLED
        } else if *interaction == Interaction::Hovered {
            COLOR_BTN_HOVER
        } else {
            COLOR_BTN
        });
    }
    for (label, mut text) in &mut labels {
        let Some(row) = panel.row(label.slot) else { continue };
        let name = selected_label(&catalog, row.selected());
        if **text != name {
            **text = name;
        }
    }
}

fn render_dropdowns(
    open: Res<OpenSelector>,
    mut dropdowns: Query<(&OptionDropdown, &mut Node)>,
    mut choices: Query<(&Interaction, &mut BackgroundColor), With<OptionChoice>>,
) {
    for (dropdown, mut node) in &mut dropdowns {
        let display = if open.0 == Some(dropdown.slot) { Display::Flex } else { Display::None };
        if node.display != display {
            node.display = display;
        }
    }
    for (interaction, mut bg) in &mut choices {
        *bg = BackgroundColor(match interaction {
            Interaction::Hovered | Interaction::Pressed => COLOR_BTN_HOVER,
            Interaction::None => Color::NONE,
        });
    }
}

fn render_value_inputs(
    sim: Res<StatSimulator>,
    panel: Res<PanelController>,
    editor: Res<ValueEditor>,
    mut inputs: Query<(&ValueInput, &mut BackgroundColor)>,
    mut displays: Query<(&ValueDisplay, &mut Text, &mut TextColor)>,
) {
    for (input, mut bg) in &mut inputs {
        let Some(row) = panel.row(input.slot) else { continue };
        let disabled = row.value_input_disabled(sim.item());
        *bg = BackgroundColor(input_color(row.validity(), disabled, row.is_value_focused()));
    }
    for (display, mut text, mut color) in &mut displays {
        let Some(row) = panel.row(display.slot) else { continue };
        let shown = if editor.focused == Some(display.slot) {
            format!("{}|", editor.buffer)
        } else {
            row.pending_value().to_string()
        };
        if **text != shown {
            **text = shown;
        }
        color.0 = if row.value_input_disabled(sim.item()) { COLOR_TEXT_DIM } else { COLOR_TEXT };
    }
}

fn render_cost_labels(panel: Res<PanelController>, mut labels: Query<(&CostLabel, &mut Text)>) {
    for (label, mut text) in &mut labels {
        let Some(row) = panel.row(label.slot) else { continue };
        if text.as_str() != row.cost_display() {
            **text = row.cost_display().to_string();
        }
    }
}

// ── UI Scroll System ────────────────────────────────────────────────

const SCROLL_LINE_HEIGHT: f32 = 21.0;

fn ui_scroll_system(
    mut mouse_wheel: MessageReader<MouseWheel>,
    hover_map: Res<HoverMap>,
    mut scroll_q: Query<&mut ScrollPosition>,
) {
    for ev in mouse_wheel.read() {
        let mut dy = -ev.y;
        if ev.unit == MouseScrollUnit::Line {
            dy *= SCROLL_LINE_HEIGHT;
        }

        for pointer_map in hover_map.values() {
            for &entity in pointer_map.keys() {
                if let Ok(mut scroll) = scroll_q.get_mut(entity) {
                    scroll.y = (scroll.y + dy).max(0.0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use bevy::input::ButtonState;

    use crate::sim::slot::{ItemType, SlotState, StatItem};

    fn key(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn buffer_accepts_digits_and_leading_minus() {
        let tuning = Tuning::default();
        let mut buf = String::new();
        assert_eq!(edit_value_buffer(&mut buf, &key("-"), &tuning), FieldEdit::Changed(None));
        assert_eq!(edit_value_buffer(&mut buf, &key("1"), &tuning), FieldEdit::Changed(Some(-1)));
        assert_eq!(edit_value_buffer(&mut buf, &key("-"), &tuning), FieldEdit::Unchanged);
        assert_eq!(edit_value_buffer(&mut buf, &key("x"), &tuning), FieldEdit::Unchanged);
        assert_eq!(buf, "-1");
    }

    #[test]
    fn buffer_is_capped_at_max_chars() {
        let tuning = Tuning::default();
        let mut buf = String::new();
        for c in ["9", "9", "9", "9", "9"] {
            edit_value_buffer(&mut buf, &key(c), &tuning);
        }
        assert_eq!(buf, "9999");
        // The field shows what was typed; the row gets the clamped value.
        let mut buf = String::from("999");
        assert_eq!(edit_value_buffer(&mut buf, &key("9"), &tuning), FieldEdit::Changed(Some(999)));
    }

    #[test]
    fn backspace_and_commit_keys() {
        let tuning = Tuning::default();
        let mut buf = String::from("42");
        assert_eq!(edit_value_buffer(&mut buf, &Key::Backspace, &tuning), FieldEdit::Changed(Some(4)));
        assert_eq!(edit_value_buffer(&mut buf, &Key::Backspace, &tuning), FieldEdit::Changed(None));
        assert_eq!(edit_value_buffer(&mut buf, &Key::Backspace, &tuning), FieldEdit::Unchanged);
        assert_eq!(edit_value_buffer(&mut buf, &Key::Enter, &tuning), FieldEdit::Commit);
        assert_eq!(edit_value_buffer(&mut buf, &Key::Escape, &tuning), FieldEdit::Commit);
        assert_eq!(edit_value_buffer(&mut buf, &Key::ArrowUp, &tuning), FieldEdit::Unchanged);
    }

    #[test]
    fn disabled_input_color_wins() {
        assert_eq!(input_color(ValidityClass::Invalid, true, true), COLOR_BTN_DISABLED);
        assert_eq!(input_color(ValidityClass::Invalid, false, false), COLOR_INVALID);
        assert_eq!(input_color(ValidityClass::Neutral, false, true), COLOR_INPUT_FOCUS);
    }

    #[test]
    fn debounce_system_recomputes_after_quiet_period() {
        let catalog = OptionCatalog::with_defaults();
        let mut item = StatItem::new(ItemType::Weapon, 2);
        item.slots[0] = SlotState::new(OptionId(1), 0);
        let sim = StatSimulator::new(catalog, item);
        let panel = PanelController::new(sim.item(), sim.reset_signal(), Duration::from_millis(100));

        let mut app = App::new();
        app.init_resource::<Time>();
        app.insert_resource(sim);
        app.insert_resource(panel);
        app.add_systems(Update, tick_slot_debounce);

        app.world_mut().resource_mut::<PanelController>().set_value(0, 10);
        app.world_mut().resource_mut::<Time>().advance_by(Duration::from_millis(60));
        app.update();
        assert_eq!(app.world().resource::<StatSimulator>().item().slots[0].target, 0);

        app.world_mut().resource_mut::<Time>().advance_by(Duration::from_millis(60));
        app.update();
        assert_eq!(
            app.world().resource::<StatSimulator>().item().slots[0],
            SlotState::new(OptionId(1), 10)
        );
        let panel = app.world().resource::<PanelController>();
        assert_eq!(panel.row(0).unwrap().cost_display(), "50 mats");
        assert_eq!(panel.row(0).unwrap().validity(), ValidityClass::Valid);
    }

    fn key_press(logical_key: Key, key_code: KeyCode) -> KeyboardInput {
        KeyboardInput {
            key_code,
            logical_key,
            state: ButtonState::Pressed,
            text: None,
            repeat: false,
            window: Entity::PLACEHOLDER,
        }
    }

    fn click(app: &mut App) {
        let mut mouse = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        mouse.release(MouseButton::Left);
        mouse.clear();
        mouse.press(MouseButton::Left);
    }

    #[test]
    fn clicking_and_typing_drive_row_focus() {
        let mut item = StatItem::new(ItemType::Weapon, 2);
        item.slots[0] = SlotState::new(OptionId(1), 3);
        let sim = StatSimulator::new(OptionCatalog::with_defaults(), item);
        let panel = PanelController::new(sim.item(), sim.reset_signal(), Duration::from_millis(100));

        let mut app = App::new();
        app.insert_resource(Tuning::default());
        app.insert_resource(sim);
        app.insert_resource(panel);
        app.init_resource::<ValueEditor>();
        app.init_resource::<ButtonInput<MouseButton>>();
        app.add_message::<KeyboardInput>();
        app.add_systems(Update, (value_focus_system, value_typing_system).chain());

        let field = app.world_mut().spawn((Interaction::Pressed, ValueInput { slot: 0 })).id();
        let unset_field = app.world_mut().spawn((Interaction::None, ValueInput { slot: 1 })).id();

        // Click on the first field focuses its row and loads the buffer.
        click(&mut app);
        app.update();
        assert!(app.world().resource::<PanelController>().row(0).unwrap().is_value_focused());
        assert_eq!(app.world().resource::<ValueEditor>().focused, Some(0));
        assert_eq!(app.world().resource::<ValueEditor>().buffer, "3");

        // Typing edits the row and arms its debounce.
        app.world_mut().write_message(key_press(Key::Character("7".into()), KeyCode::Digit7));
        app.update();
        let row = app.world().resource::<PanelController>().row(0).unwrap();
        assert_eq!(row.pending_value(), 37);
        assert!(row.has_pending_recompute());

        // A field whose row has no stat cannot take focus; the click blurs.
        app.world_mut().entity_mut(field).insert(Interaction::None);
        app.world_mut().entity_mut(unset_field).insert(Interaction::Pressed);
        click(&mut app);
        app.update();
        let panel = app.world().resource::<PanelController>();
        assert!(!panel.row(0).unwrap().is_value_focused());
        assert!(!panel.row(1).unwrap().is_value_focused());
        assert_eq!(app.world().resource::<ValueEditor>().focused, None);

        // Enter commits and blurs.
        app.world_mut().entity_mut(unset_field).insert(Interaction::None);
        app.world_mut().entity_mut(field).insert(Interaction::Pressed);
        click(&mut app);
        app.update();
        assert!(app.world().resource::<PanelController>().row(0).unwrap().is_value_focused());
        app.world_mut().write_message(key_press(Key::Enter, KeyCode::Enter));
        app.update();
        assert!(!app.world().resource::<PanelController>().row(0).unwrap().is_value_focused());
        assert_eq!(app.world().resource::<ValueEditor>().focused, None);
    }
}
