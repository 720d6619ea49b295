//! Shot phase state machine
//!
//! A shot moves Idle -> Aiming -> InFlight -> Idle. The phase gates the
//! shoot trigger so a second kick cannot start while a flight is running.

use bevy::prelude::*;

/// Current phase of the active shot
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShotPhase {
    /// No gesture or flight in progress
    #[default]
    Idle,
    /// A drag gesture has started; the aim is live
    Aiming,
    /// The ball is mid-flight; shoot triggers are rejected
    InFlight,
}

impl ShotPhase {
    /// Whether a shoot trigger is accepted in this phase
    pub fn accepts_shot(&self) -> bool {
        !matches!(self, ShotPhase::InFlight)
    }
}

/// Run condition: ball is NOT in flight
pub fn not_in_flight(phase: Res<ShotPhase>) -> bool {
    *phase != ShotPhase::InFlight
}

/// Run condition: ball IS in flight
pub fn shot_in_flight(phase: Res<ShotPhase>) -> bool {
    *phase == ShotPhase::InFlight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_and_aiming_accept_shots() {
        assert!(ShotPhase::Idle.accepts_shot());
        assert!(ShotPhase::Aiming.accepts_shot());
        assert!(!ShotPhase::InFlight.accepts_shot());
    }
}
