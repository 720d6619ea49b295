//! Outcome banner - transient GOAL!/SAVED! text after each judged shot

use bevy::prelude::*;

use crate::constants::*;
use crate::scoring::{Outcome, ShotOutcome};

/// Banner state: visible while the timer is above zero
#[derive(Component, Default)]
pub struct OutcomeBanner {
    pub timer: f32,
}

/// Spawn the (hidden) banner text (called from setup)
pub fn spawn_outcome_banner(commands: &mut Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 96.0,
            ..default()
        },
        TextColor(TEXT_GOAL),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(35.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Center),
        Visibility::Hidden,
        OutcomeBanner::default(),
    ));
}

/// Show the banner for each judged shot
pub fn show_outcome(
    mut outcomes: MessageReader<ShotOutcome>,
    mut banner_query: Query<(
        &mut OutcomeBanner,
        &mut Text,
        &mut TextColor,
        &mut Visibility,
    )>,
) {
    for shot in outcomes.read() {
        let Ok((mut banner, mut text, mut color, mut visibility)) = banner_query.single_mut()
        else {
            return;
        };
        text.0 = shot.outcome.banner().to_string();
        *color = TextColor(match shot.outcome {
            Outcome::Goal => TEXT_GOAL,
            Outcome::Save => TEXT_SAVE,
        });
        *visibility = Visibility::Visible;
        banner.timer = BANNER_DURATION;
    }
}

/// Hide the banner once its timer runs out
pub fn tick_outcome_banner(
    time: Res<Time>,
    mut banner_query: Query<(&mut OutcomeBanner, &mut Visibility)>,
) {
    for (mut banner, mut visibility) in &mut banner_query {
        if banner.timer > 0.0 {
            banner.timer = (banner.timer - time.delta_secs()).max(0.0);
            if banner.timer == 0.0 {
                *visibility = Visibility::Hidden;
            }
        }
    }
}
