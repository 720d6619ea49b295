//! Shoot button - on-screen trigger alongside the Space key

use bevy::prelude::*;

use crate::constants::*;
use crate::shooting::ShootTrigger;

/// Marker for the shoot button
#[derive(Component)]
pub struct ShootButton;

/// Spawn the shoot button (called from setup)
pub fn spawn_shoot_button(commands: &mut Commands) {
    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(24.0),
                right: Val::Px(24.0),
                width: Val::Px(160.0),
                height: Val::Px(56.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_NORMAL),
            ShootButton,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("SHOOT"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));
        });
}

/// Capture the shoot trigger from the button or the Space key.
/// The trigger accumulates until `resolve_shot` consumes it.
pub fn capture_shoot_trigger(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut trigger: ResMut<ShootTrigger>,
    mut button_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<ShootButton>),
    >,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        trigger.pressed = true;
    }

    for (interaction, mut background) in &mut button_query {
        match interaction {
            Interaction::Pressed => {
                trigger.pressed = true;
                *background = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => {
                *background = BackgroundColor(BUTTON_HOVERED);
            }
            Interaction::None => {
                *background = BackgroundColor(BUTTON_NORMAL);
            }
        }
    }
}
