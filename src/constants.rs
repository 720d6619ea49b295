//! Tunable constants for spotkick
//!
//! All gameplay values are defined here for easy tweaking.

use bevy::prelude::*;

// =============================================================================
// SCENE COLORS
// =============================================================================

pub const SKY_COLOR: Color = Color::srgb(0.53, 0.81, 0.92);
pub const PITCH_COLOR: Color = Color::srgb(0.18, 0.55, 0.34);
pub const GOAL_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const BALL_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);

// =============================================================================
// TEXT/UI COLORS
// =============================================================================

pub const TEXT_PRIMARY: Color = Color::srgb(0.95, 0.95, 0.95);
pub const TEXT_GOAL: Color = Color::srgb(0.25, 0.9, 0.3); // Banner on a goal
pub const TEXT_SAVE: Color = Color::srgb(0.95, 0.35, 0.25); // Banner on a save
pub const BUTTON_NORMAL: Color = Color::srgb(0.15, 0.15, 0.18);
pub const BUTTON_HOVERED: Color = Color::srgb(0.25, 0.25, 0.3);
pub const BUTTON_PRESSED: Color = Color::srgb(0.35, 0.55, 0.35);

// =============================================================================
// AIMING
// =============================================================================

pub const DRAG_SCALE: f32 = 0.01; // Screen pixels to preview-scale world units
pub const SHOT_SCALE: f32 = 5.0; // Preview-scale offset to shot magnitude

// =============================================================================
// BALL FLIGHT
// =============================================================================

pub const BALL_RADIUS: f32 = 0.3;
pub const BALL_BASE_HEIGHT: f32 = 0.3; // Resting height of the ball center
pub const BALL_START_Z: f32 = -10.0; // Penalty spot depth
pub const GOAL_LINE_Z: f32 = -14.0; // Target depth of every flight
pub const FLIGHT_DURATION: f32 = 1.0; // Seconds from kick to goal line
pub const FLIGHT_ARC_HEIGHT: f32 = 2.0; // Peak of the sinusoidal arc above base height

pub const BALL_START: Vec3 = Vec3::new(0.0, BALL_BASE_HEIGHT, BALL_START_Z);

// =============================================================================
// GOALKEEPER
// =============================================================================

pub const KEEPER_DIVE_OFFSET: f32 = 1.0; // Lateral displacement of a dive, either side
pub const KEEPER_RESET_DELAY: f32 = 1.5; // Seconds before the keeper recenters
pub const KEEPER_POS: Vec3 = Vec3::new(0.0, 0.0, -13.5);

// =============================================================================
// JUDGING
// =============================================================================

/// A shot within this distance of the keeper's reach is saved.
pub const SAVE_THRESHOLD: f32 = 0.5;

// =============================================================================
// PITCH LAYOUT
// =============================================================================

pub const PITCH_SIZE: f32 = 30.0;
pub const GOAL_SIZE: Vec3 = Vec3::new(7.2, 2.4, 0.2);
pub const GOAL_POS: Vec3 = Vec3::new(0.0, 1.2, -14.0);
pub const KICKER_POS: Vec3 = Vec3::new(0.0, 0.0, -10.0);
pub const FIGURE_SCALE: f32 = 0.5; // Kicker and keeper model scale
pub const STADIUM_SCALE: f32 = 0.1;

pub const CAMERA_POS: Vec3 = Vec3::new(0.0, 5.0, 10.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 1.0, -8.0);

// =============================================================================
// HUD
// =============================================================================

pub const BANNER_DURATION: f32 = 1.2; // Seconds the GOAL!/SAVED! banner stays up

// =============================================================================
// VIEWPORT PRESETS
// =============================================================================

/// (width, height, label)
pub const VIEWPORT_PRESETS: [(f32, f32, &str); 3] = [
    (1280.0, 720.0, "720p"),
    (1600.0, 900.0, "900p"),
    (1920.0, 1080.0, "1080p"),
];
