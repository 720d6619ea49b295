//! Aiming module - drag gesture capture and live ball preview

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::ball::Ball;
use crate::constants::*;
use crate::session::ShotPhase;

/// Derived aim offsets, computed once per shot from the drag deltas
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AimVector {
    /// Horizontal offset at preview scale; the shot lands at `lateral * 5`
    pub lateral: f32,
    /// Depth offset; drives the drag preview and telemetry only
    pub depth: f32,
}

impl AimVector {
    pub const ZERO: AimVector = AimVector {
        lateral: 0.0,
        depth: 0.0,
    };

    /// Aim from a drag's start and end points in screen coordinates
    pub fn from_points(start: Vec2, end: Vec2) -> Self {
        Self {
            lateral: (end.x - start.x) * DRAG_SCALE,
            depth: (end.y - start.y) * DRAG_SCALE,
        }
    }
}

/// The current (or last) drag gesture
#[derive(Resource, Default)]
pub struct AimDrag {
    pub start: Vec2,
    pub current: Vec2,
    pub active: bool,
    /// A cursor move has been seen since the last press
    pub recorded: bool,
}

impl AimDrag {
    /// Begin a fresh gesture at `point`
    pub fn begin(&mut self, point: Vec2) {
        self.start = point;
        self.current = point;
        self.active = true;
        self.recorded = false;
    }

    /// Track a cursor move while the gesture is active
    pub fn track(&mut self, point: Vec2) {
        if self.active && point != self.current {
            self.current = point;
            self.recorded = true;
        }
    }

    /// End the gesture, keeping its points for the pending shot
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Record a whole gesture at once (used by the headless runner and tests)
    pub fn record(&mut self, start: Vec2, end: Vec2) {
        self.start = start;
        self.current = end;
        self.active = false;
        self.recorded = true;
    }

    /// Aim derived from the last recorded gesture, zero if none was ever made
    pub fn vector(&self) -> AimVector {
        if self.recorded {
            AimVector::from_points(self.start, self.current)
        } else {
            AimVector::ZERO
        }
    }
}

/// Capture mouse press/move/release into the drag gesture.
/// Out-of-window coordinates are accepted as-is; there are no error cases.
pub fn capture_aim_input(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut drag: ResMut<AimDrag>,
    mut phase: ResMut<ShotPhase>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left)
        && let Some(point) = window.cursor_position()
    {
        drag.begin(point);
        if *phase == ShotPhase::Idle {
            *phase = ShotPhase::Aiming;
        }
    }

    if drag.active && let Some(point) = window.cursor_position() {
        drag.track(point);
    }

    if buttons.just_released(MouseButton::Left) {
        drag.end();
    }
}

/// Nudge the ball around the penalty spot while a drag is active.
/// Disabled during a flight; the flight path owns the ball then.
pub fn preview_drag(
    drag: Res<AimDrag>,
    mut ball_query: Query<&mut Transform, With<Ball>>,
) {
    if !drag.active {
        return;
    }
    let Ok(mut transform) = ball_query.single_mut() else {
        return;
    };

    let aim = AimVector::from_points(drag.start, drag.current);
    transform.translation.x = aim.lateral;
    transform.translation.z = BALL_START_Z + aim.depth;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aim_from_horizontal_drag() {
        // Drag from (100,100) to (200,100): one preview unit right
        let aim = AimVector::from_points(Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0));
        assert!((aim.lateral - 1.0).abs() < 1e-6);
        assert!(aim.depth.abs() < 1e-6);
    }

    #[test]
    fn test_aim_scales_both_axes() {
        let aim = AimVector::from_points(Vec2::new(0.0, 0.0), Vec2::new(-50.0, 150.0));
        assert!((aim.lateral - -0.5).abs() < 1e-6);
        assert!((aim.depth - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_unrecorded_drag_aims_zero() {
        let drag = AimDrag::default();
        assert_eq!(drag.vector(), AimVector::ZERO);
    }

    #[test]
    fn test_press_without_move_aims_zero() {
        let mut drag = AimDrag::default();
        drag.begin(Vec2::new(320.0, 240.0));
        drag.end();
        assert_eq!(drag.vector(), AimVector::ZERO);
    }

    #[test]
    fn test_last_gesture_is_retained_after_release() {
        let mut drag = AimDrag::default();
        drag.begin(Vec2::new(100.0, 100.0));
        drag.track(Vec2::new(160.0, 80.0));
        drag.end();
        let aim = drag.vector();
        assert!((aim.lateral - 0.6).abs() < 1e-6);
        assert!((aim.depth - -0.2).abs() < 1e-6);
    }

    #[test]
    fn test_new_press_supersedes_old_gesture() {
        let mut drag = AimDrag::default();
        drag.record(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        drag.begin(Vec2::new(500.0, 500.0));
        // No move yet: the fresh gesture has no vector
        assert_eq!(drag.vector(), AimVector::ZERO);
    }
}
