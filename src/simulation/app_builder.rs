//! Headless App Builder
//!
//! Provides a reusable builder for creating headless Bevy apps that run
//! the core shot loop. Used by the shootout runner, the sweep tool, and
//! tests.

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use std::time::Duration;

use crate::aiming::AimDrag;
use crate::ball::{Ball, FlightComplete, launch_flight, tick_flight};
use crate::constants::*;
use crate::events::EventBus;
use crate::keeper::{Keeper, KeeperRng, KeeperState, keeper_react, keeper_reset};
use crate::scoring::{Score, ShotOutcome, judge_shot};
use crate::session::ShotPhase;
use crate::shooting::{ShootTrigger, ShotFired, resolve_shot};
use crate::world::Kicker;

/// Builder for creating headless Bevy apps
pub struct HeadlessAppBuilder {
    seed: u64,
    fps: f32,
    spawn_figures: bool,
}

impl HeadlessAppBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            seed: 0,
            fps: 60.0,
            spawn_figures: true,
        }
    }

    /// Set the keeper RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the target FPS (default: 60)
    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    /// Skip spawning the kicker and keeper, leaving the shoot guard
    /// holding (models the figures never finishing their load).
    pub fn without_figures(mut self) -> Self {
        self.spawn_figures = false;
        self
    }

    /// Build the app with minimal plugins and the core shot systems.
    ///
    /// The returned app has:
    /// - MinimalPlugins with ScheduleRunnerPlugin
    /// - Core resources (Score, ShotPhase, AimDrag, ShootTrigger,
    ///   EventBus, seeded KeeperRng)
    /// - The full shot chain in Update, ticking at the headless minimum
    ///   dt so each `app.update()` advances one 1/60 s step
    /// - Ball, kicker, and keeper entities (unless `without_figures`)
    pub fn build(self) -> App {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f32(1.0 / self.fps),
        )));

        app.add_message::<ShotFired>();
        app.add_message::<FlightComplete>();
        app.add_message::<ShotOutcome>();

        app.init_resource::<Score>();
        app.init_resource::<ShotPhase>();
        app.init_resource::<AimDrag>();
        app.init_resource::<ShootTrigger>();
        app.insert_resource(EventBus::new());
        app.insert_resource(KeeperRng::seeded(self.seed));

        app.add_systems(
            Update,
            (
                resolve_shot,
                launch_flight,
                keeper_react,
                tick_flight,
                keeper_reset,
                judge_shot,
            )
                .chain(),
        );

        let spawn_figures = self.spawn_figures;
        app.add_systems(Startup, move |mut commands: Commands| {
            commands.spawn((Ball, Transform::from_translation(BALL_START)));
            if spawn_figures {
                commands.spawn((Kicker, Transform::from_translation(KICKER_POS)));
                commands.spawn((
                    Keeper,
                    KeeperState::default(),
                    Transform::from_translation(KEEPER_POS),
                ));
            }
        });

        app
    }
}

impl Default for HeadlessAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_app() {
        let mut app = HeadlessAppBuilder::new().with_seed(1).build();
        app.update();
        assert!(app.world().contains_resource::<Score>());
        assert!(app.world().contains_resource::<ShotPhase>());
        assert_eq!(*app.world().resource::<ShotPhase>(), ShotPhase::Idle);
    }

    #[test]
    fn test_builder_spawns_figures() {
        let mut app = HeadlessAppBuilder::new().build();
        app.update();
        let mut keepers = app.world_mut().query::<&Keeper>();
        assert_eq!(keepers.iter(app.world()).count(), 1);
    }

    #[test]
    fn test_builder_without_figures() {
        let mut app = HeadlessAppBuilder::new().without_figures().build();
        app.update();
        let mut keepers = app.world_mut().query::<&Keeper>();
        assert_eq!(keepers.iter(app.world()).count(), 0);
    }
}
