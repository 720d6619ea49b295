//! Ball flight systems

use bevy::prelude::*;

use crate::ball::{Ball, BallFlight, FlightComplete};
use crate::constants::*;
use crate::flight_position;
use crate::shooting::ShotFired;

/// Start a flight for each resolved shot.
pub fn launch_flight(
    mut commands: Commands,
    mut shots: MessageReader<ShotFired>,
    ball_query: Query<Entity, With<Ball>>,
) {
    for shot in shots.read() {
        let Ok(ball) = ball_query.single() else {
            continue;
        };
        commands.entity(ball).insert(BallFlight::new(shot.aim));
    }
}

/// Advance active flights and hand completed ones to the judge.
pub fn tick_flight(
    mut commands: Commands,
    time: Res<Time>,
    mut done: MessageWriter<FlightComplete>,
    mut ball_query: Query<(Entity, &mut Transform, &mut BallFlight), With<Ball>>,
) {
    // Use minimum dt for headless mode compatibility
    let dt = time.delta_secs().max(1.0 / 60.0);

    for (entity, mut transform, mut flight) in &mut ball_query {
        flight.elapsed += dt;
        let progress = (flight.elapsed / FLIGHT_DURATION).min(1.0);
        transform.translation = flight_position(flight.aim.lateral, progress);

        if progress >= 1.0 {
            done.write(FlightComplete {
                lateral: flight.aim.lateral,
            });
            commands.entity(entity).remove::<BallFlight>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aiming::AimVector;

    #[test]
    fn test_new_flight_starts_unelapsed() {
        let flight = BallFlight::new(AimVector {
            lateral: 1.0,
            depth: 0.5,
        });
        assert_eq!(flight.elapsed, 0.0);
        assert_eq!(flight.aim.lateral, 1.0);
    }

    #[test]
    fn test_flight_duration_spans_sixty_ticks() {
        // The fixed schedule runs at 60 Hz, so a flight finishes on the
        // 60th tick, give or take one tick of float accumulation.
        let dt = 1.0 / 60.0;
        let mut flight = BallFlight::new(AimVector::ZERO);
        let mut ticks = 0;
        while flight.elapsed / FLIGHT_DURATION < 1.0 {
            flight.elapsed += dt;
            ticks += 1;
        }
        assert!((60..=61).contains(&ticks), "flight took {ticks} ticks");
    }
}
