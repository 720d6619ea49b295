//! Spotkick - a penalty-kick mini-game built with Bevy
//!
//! This crate provides all game components, resources, and systems organized into modules.

// Core modules
pub mod constants;
pub mod events;
pub mod session;
pub mod settings;
pub mod simulation;

// Game logic modules
pub mod aiming;
pub mod ball;
pub mod keeper;
pub mod scoring;
pub mod shooting;
pub mod ui;
pub mod world;

// Re-export commonly used types for convenience
pub use aiming::{AimDrag, AimVector, capture_aim_input, preview_drag};
pub use ball::{Ball, BallFlight, FlightComplete, launch_flight, tick_flight};
pub use constants::*;
pub use events::{
    BusEvent, EventBus, EventLogConfig, EventLogger, GameConfig, GameEvent, begin_session,
    flush_bus_to_log, update_event_bus_time,
};
pub use keeper::{DiveDirection, Keeper, KeeperRng, KeeperState, keeper_react, keeper_reset};
pub use scoring::{Outcome, Score, ShotOutcome, judge, judge_shot};
pub use session::{ShotPhase, not_in_flight, shot_in_flight};
pub use settings::{InitSettings, SETTINGS_FILE};
pub use shooting::{ShootTrigger, ShotFired, resolve_shot};
pub use ui::{
    OutcomeBanner, ScoreText, ShootButton, capture_shoot_trigger, show_outcome,
    spawn_hud, spawn_outcome_banner, spawn_shoot_button, tick_outcome_banner,
    update_score_text,
};
pub use world::{FigureAssets, Goal, Kicker, Stadium, load_figures, spawn_loaded_figures, spawn_pitch};

use bevy::prelude::Vec3;

// =============================================================================
// FLIGHT PATH (shared with tools like the simulate/sweep runners)
// =============================================================================

/// Ball position at a given point of a flight.
///
/// `lateral` is the preview-scale aim offset; the shot lands `lateral * 5`
/// off center. `progress` is clamped to [0, 1]: the path runs a straight
/// line from the penalty spot to the goal line with a single sinusoidal
/// hump, returning to base height at the end.
pub fn flight_position(lateral: f32, progress: f32) -> Vec3 {
    let progress = progress.clamp(0.0, 1.0);
    Vec3::new(
        lateral * constants::SHOT_SCALE * progress,
        constants::BALL_BASE_HEIGHT
            + (progress * std::f32::consts::PI).sin() * constants::FLIGHT_ARC_HEIGHT,
        constants::BALL_START_Z + (constants::GOAL_LINE_Z - constants::BALL_START_Z) * progress,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_close(a: Vec3, b: Vec3) {
        assert!(
            (a - b).length() < 1e-5,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn test_flight_starts_at_penalty_spot() {
        assert_vec3_close(flight_position(1.0, 0.0), Vec3::new(0.0, 0.3, -10.0));
        assert_vec3_close(flight_position(-2.5, 0.0), Vec3::new(0.0, 0.3, -10.0));
    }

    #[test]
    fn test_flight_ends_on_goal_line() {
        assert_vec3_close(flight_position(1.0, 1.0), Vec3::new(5.0, 0.3, -14.0));
        assert_vec3_close(flight_position(0.0, 1.0), Vec3::new(0.0, 0.3, -14.0));
        assert_vec3_close(flight_position(-0.4, 1.0), Vec3::new(-2.0, 0.3, -14.0));
    }

    #[test]
    fn test_flight_apex_at_midpoint() {
        let mid = flight_position(0.0, 0.5);
        assert!((mid.y - (0.3 + 2.0)).abs() < 1e-5);
        // The hump is symmetric and maximal at the midpoint
        assert!(flight_position(0.0, 0.25).y < mid.y);
        assert!(flight_position(0.0, 0.75).y < mid.y);
    }

    #[test]
    fn test_flight_progress_is_clamped() {
        assert_vec3_close(flight_position(1.0, 2.0), flight_position(1.0, 1.0));
        assert_vec3_close(flight_position(1.0, -1.0), flight_position(1.0, 0.0));
    }

    #[test]
    fn test_flight_lateral_interpolates_linearly() {
        let p = flight_position(2.0, 0.3);
        assert!((p.x - 2.0 * 5.0 * 0.3).abs() < 1e-5);
        let p = flight_position(2.0, 0.7);
        assert!((p.x - 2.0 * 5.0 * 0.7).abs() < 1e-5);
    }
}
