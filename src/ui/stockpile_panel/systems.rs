// src/ui/stockpile_panel/systems.rs
//
// Systems for spawning the stockpile panel, handling presses and keeping the
// amount label in sync.

use bevy::prelude::*;

use super::components::{StockpileButton, StockpileLabel};
use super::config::StockpilePanelSettings;

const PANEL_BACKGROUND: Color = Color::srgba(0.08, 0.08, 0.1, 0.9);
const BUTTON_BACKGROUND: Color = Color::srgba(0.18, 0.18, 0.22, 0.95);
const BUTTON_PRESSED: Color = Color::srgba(0.28, 0.34, 0.28, 0.95);
const BUTTON_HOVERED: Color = Color::srgba(0.24, 0.24, 0.3, 0.95);
const RELOAD_KEY: KeyCode = KeyCode::F5;

/// Spawns the panel with one stockpile button and its amount label.
pub fn spawn_stockpile_panel(mut commands: Commands, settings: Res<StockpilePanelSettings>) {
    let mut button = StockpileButton::new("Stockpile Button");
    button.apply_panel_settings(&settings);
    let summary = button.summary();

    let button_entity = commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                padding: UiRect::all(Val::Px(8.0)),
                border: UiRect::all(Val::Px(1.5)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Button,
            Interaction::None,
            BackgroundColor(BUTTON_BACKGROUND),
            BorderColor::from(Color::srgb(0.4, 0.4, 0.45)),
            button,
            Name::new("Stockpile Button"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("Gather {} (+{})", settings.name, settings.increment)),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        })
        .id();

    let label_entity = commands
        .spawn((
            Text::new(summary),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(Color::WHITE),
            StockpileLabel {
                button: button_entity,
            },
        ))
        .id();

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(20.0),
                left: Val::Px(20.0),
                width: Val::Px(260.0),
                padding: UiRect::all(Val::Px(12.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
            Name::new("Stockpile Panel"),
        ))
        .add_children(&[label_entity, button_entity]);
}

/// Invokes the button's interaction when it is pressed.
#[allow(clippy::type_complexity)]
pub fn handle_stockpile_button_press(
    mut buttons: Query<
        (&Interaction, &mut StockpileButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, mut button, mut background) in buttons.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                background.0 = BUTTON_PRESSED;
                if !button.press() {
                    warn!("{} pressed with nothing subscribed", button.name());
                }
            }
            Interaction::Hovered => background.0 = BUTTON_HOVERED,
            Interaction::None => background.0 = BUTTON_BACKGROUND,
        }
    }
}

/// Rewrites labels whose button changed this frame.
pub fn refresh_stockpile_labels(
    buttons: Query<Ref<StockpileButton>>,
    mut labels: Query<(&StockpileLabel, &mut Text)>,
) {
    for (label, mut text) in labels.iter_mut() {
        let Ok(button) = buttons.get(label.button) else {
            continue;
        };
        if button.is_changed() {
            text.0 = button.summary();
        }
    }
}

/// Re-reads the panel settings and applies them to every button.
pub fn reload_stockpile_settings(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<StockpilePanelSettings>,
    mut buttons: Query<&mut StockpileButton>,
) {
    if !keyboard.just_pressed(RELOAD_KEY) {
        return;
    }

    *settings = StockpilePanelSettings::load_or_default();
    info!(
        "Stockpile settings reloaded: {} {}/{} (+{} per press)",
        settings.name, settings.amount, settings.capacity, settings.increment
    );

    for mut button in buttons.iter_mut() {
        button.apply_panel_settings(&settings);
    }
}
