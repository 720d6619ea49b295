//! HUD components and systems (score display)

use bevy::prelude::*;

use crate::constants::*;
use crate::scoring::Score;

/// Score text component
#[derive(Component)]
pub struct ScoreText;

/// Spawn the persistent score line (called from setup)
pub fn spawn_hud(commands: &mut Commands) {
    commands.spawn((
        Text::new("Score: 0 - 0"),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(TEXT_PRIMARY),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(16.0),
            ..default()
        },
        ScoreText,
    ));
}

/// Refresh the score display
pub fn update_score_text(score: Res<Score>, mut text_query: Query<&mut Text, With<ScoreText>>) {
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };
    text.0 = format!("Score: {} - {}", score.goals, score.saves);
}
