//! Ball-related components

use bevy::prelude::*;

use crate::aiming::AimVector;

/// Marker for the ball entity
#[derive(Component)]
pub struct Ball;

/// An active flight, advanced every tick until the goal line.
///
/// While this component is present the flight path owns the ball's
/// transform. There is no cancellation: a flight always runs to
/// completion, and the shot phase guard keeps a second one from
/// starting underneath it.
#[derive(Component, Debug, Clone, Copy)]
pub struct BallFlight {
    /// Seconds since the kick
    pub elapsed: f32,
    /// Aim fixed at kick time
    pub aim: AimVector,
}

impl BallFlight {
    pub fn new(aim: AimVector) -> Self {
        Self { elapsed: 0.0, aim }
    }
}

/// Sent when a flight reaches the goal line
#[derive(Message, Debug, Clone, Copy)]
pub struct FlightComplete {
    /// Preview-scale lateral offset the shot was kicked with
    pub lateral: f32,
}
