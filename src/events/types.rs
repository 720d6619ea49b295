//! Event type definitions for the logging system

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Game configuration snapshot, logged once per session so evlogs stay
/// interpretable when constants change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub drag_scale: f32,
    pub shot_scale: f32,
    pub flight_duration: f32,
    pub arc_height: f32,
    pub keeper_dive_offset: f32,
    pub keeper_reset_delay: f32,
    pub save_threshold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            drag_scale: DRAG_SCALE,
            shot_scale: SHOT_SCALE,
            flight_duration: FLIGHT_DURATION,
            arc_height: FLIGHT_ARC_HEIGHT,
            keeper_dive_offset: KEEPER_DIVE_OFFSET,
            keeper_reset_delay: KEEPER_RESET_DELAY,
            save_threshold: SAVE_THRESHOLD,
        }
    }
}

/// All game events that can be logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Session started (generated once per game launch)
    SessionStart {
        session_id: String, // UUID v4
        timestamp: String,  // ISO 8601
    },
    /// Configuration snapshot (logged after session start)
    Config(GameConfig),
    /// Shot resolved from the last drag gesture
    ShotTaken { lateral: f32, depth: f32 },
    /// Keeper rolled a dive
    KeeperDive { direction: String },
    /// Shot judged past the keeper
    Goal { goals: u32, saves: u32 },
    /// Shot judged within the keeper's reach
    Save { goals: u32, saves: u32 },
}

impl GameEvent {
    /// Get the event type code for compact serialization
    pub fn type_code(&self) -> &'static str {
        match self {
            GameEvent::SessionStart { .. } => "SE",
            GameEvent::Config(_) => "CF",
            GameEvent::ShotTaken { .. } => "ST",
            GameEvent::KeeperDive { .. } => "KD",
            GameEvent::Goal { .. } => "G",
            GameEvent::Save { .. } => "SV",
        }
    }
}
