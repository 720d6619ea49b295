//! Shooting module - shoot trigger and shot resolution

use bevy::prelude::*;

use crate::aiming::{AimDrag, AimVector};
use crate::events::{EventBus, GameEvent};
use crate::keeper::Keeper;
use crate::session::ShotPhase;
use crate::world::Kicker;

/// Buffered shoot trigger, set by the UI button or Space and consumed
/// by `resolve_shot` (accumulates until consumed, like the drag input).
#[derive(Resource, Default)]
pub struct ShootTrigger {
    pub pressed: bool,
}

/// Sent once per accepted shot; the flight and the keeper reaction
/// both start from it.
#[derive(Message, Debug, Clone, Copy)]
pub struct ShotFired {
    pub aim: AimVector,
}

/// Turn a shoot trigger into a shot.
///
/// Both the kicker and the keeper must be loaded, otherwise the trigger
/// is silently dropped (the one guarded precondition). Triggers that
/// arrive mid-flight are rejected by the phase guard. The aim comes
/// from the last recorded drag; with no drag ever made it is zero.
pub fn resolve_shot(
    mut trigger: ResMut<ShootTrigger>,
    mut phase: ResMut<ShotPhase>,
    drag: Res<AimDrag>,
    mut shots: MessageWriter<ShotFired>,
    mut bus: ResMut<EventBus>,
    kicker_query: Query<(), With<Kicker>>,
    keeper_query: Query<(), With<Keeper>>,
) {
    if !trigger.pressed {
        return;
    }
    trigger.pressed = false;

    if !phase.accepts_shot() {
        debug!("shoot trigger rejected: ball already in flight");
        return;
    }
    if kicker_query.is_empty() || keeper_query.is_empty() {
        return;
    }

    let aim = drag.vector();
    *phase = ShotPhase::InFlight;
    bus.emit(GameEvent::ShotTaken {
        lateral: aim.lateral,
        depth: aim.depth,
    });
    shots.write(ShotFired { aim });
}
