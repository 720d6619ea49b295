//! Scoring module - outcome judgment and score tally

use bevy::prelude::*;

use crate::ball::FlightComplete;
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::keeper::{Keeper, KeeperState};
use crate::session::ShotPhase;

/// Score resource tracking goals against saves
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub goals: u32,
    pub saves: u32,
}

/// Result of a judged shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Goal,
    Save,
}

impl Outcome {
    /// Banner text for this outcome
    pub fn banner(self) -> &'static str {
        match self {
            Outcome::Goal => "GOAL!",
            Outcome::Save => "SAVED!",
        }
    }
}

/// Sent after each judged shot; the HUD banner consumes it.
#[derive(Message, Debug, Clone, Copy)]
pub struct ShotOutcome {
    pub outcome: Outcome,
    pub goals: u32,
    pub saves: u32,
}

/// The decision rule: the shot beats the keeper when their reach
/// magnitudes differ by more than the save threshold. Purely geometric;
/// timing and arc shape play no part.
pub fn judge(shot_lateral: f32, keeper_offset: f32) -> Outcome {
    let shot_magnitude = (shot_lateral * SHOT_SCALE).abs();
    let keeper_magnitude = keeper_offset.abs();
    if (shot_magnitude - keeper_magnitude).abs() > SAVE_THRESHOLD {
        Outcome::Goal
    } else {
        Outcome::Save
    }
}

/// Judge each completed flight against the keeper's current dive,
/// update the tally, and return the session to idle.
pub fn judge_shot(
    mut done: MessageReader<FlightComplete>,
    mut score: ResMut<Score>,
    mut phase: ResMut<ShotPhase>,
    mut outcomes: MessageWriter<ShotOutcome>,
    mut bus: ResMut<EventBus>,
    keeper_query: Query<&KeeperState, With<Keeper>>,
) {
    for flight in done.read() {
        let keeper_offset = keeper_query
            .single()
            .map(|state| state.offset)
            .unwrap_or(0.0);

        let outcome = judge(flight.lateral, keeper_offset);
        match outcome {
            Outcome::Goal => score.goals += 1,
            Outcome::Save => score.saves += 1,
        }
        bus.emit(match outcome {
            Outcome::Goal => GameEvent::Goal {
                goals: score.goals,
                saves: score.saves,
            },
            Outcome::Save => GameEvent::Save {
                goals: score.goals,
                saves: score.saves,
            },
        });
        info!(
            "{} Score: {} - {}",
            outcome.banner(),
            score.goals,
            score.saves
        );

        outcomes.write(ShotOutcome {
            outcome,
            goals: score.goals,
            saves: score.saves,
        });
        *phase = ShotPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_shot_beats_centered_keeper() {
        // One preview unit of drag kicks the ball 5 units wide
        assert_eq!(judge(1.0, 0.0), Outcome::Goal);
    }

    #[test]
    fn test_straight_shot_at_centered_keeper_is_saved() {
        assert_eq!(judge(0.0, 0.0), Outcome::Save);
    }

    #[test]
    fn test_shot_within_reach_of_dive_is_saved() {
        // Shot magnitude 1.0 against a dive of 1.0: difference 0 <= 0.5
        assert_eq!(judge(0.2, 1.0), Outcome::Save);
        assert_eq!(judge(-0.2, -1.0), Outcome::Save);
    }

    #[test]
    fn test_weak_shot_slips_past_a_dive() {
        // Shot magnitude 0.25 against a dive of 1.0: difference 0.75
        assert_eq!(judge(0.05, 1.0), Outcome::Goal);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Difference of exactly 0.5 stays a save
        assert_eq!(judge(0.3, 1.0), Outcome::Save);
        assert_eq!(judge(0.1, 0.0), Outcome::Save);
    }

    #[test]
    fn test_sides_do_not_matter() {
        // Magnitudes only: a left dive covers a right shot of equal reach
        assert_eq!(judge(0.2, -1.0), Outcome::Save);
        assert_eq!(judge(-0.2, 1.0), Outcome::Save);
    }
}
