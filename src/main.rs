//! Spotkick - a penalty-kick mini-game built with Bevy
//!
//! Main entry point: app setup and system registration.

use bevy::prelude::*;

use spotkick::{
    AimDrag, EventBus, EventLogConfig, EventLogger, FlightComplete, InitSettings, KeeperRng, Score,
    ShootTrigger, ShotFired, ShotOutcome, ShotPhase, aiming, ball, begin_session, constants::*,
    events, keeper, scoring, session, shooting, ui, world,
};

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --seed <num> override (fixes the keeper's dives)
    let seed_override = args
        .iter()
        .position(|a| a == "--seed")
        .and_then(|i| args.get(i + 1).and_then(|s| s.parse::<u64>().ok()));

    // Check for --log-events (writes .evlog files under logs/)
    let log_events = args.iter().any(|a| a == "--log-events");

    // Load persistent settings (uses defaults if file doesn't exist)
    let settings = InitSettings::load();

    // Save settings on first run to ensure file exists
    if let Err(e) = settings.save() {
        warn!("Failed to save initial settings: {}", e);
    }

    // Use loaded viewport preset (clamped to valid range)
    let viewport_index = settings.viewport_index.min(VIEWPORT_PRESETS.len() - 1);
    let (viewport_width, viewport_height, _) = VIEWPORT_PRESETS[viewport_index];

    // Keeper RNG: command line beats settings, otherwise entropy
    let keeper_rng = match seed_override.or(settings.keeper_seed) {
        Some(seed) => KeeperRng::seeded(seed),
        None => KeeperRng::from_entropy(),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                // Set scale_factor_override to 1.0 for consistent behavior on HiDPI displays
                resolution: bevy::window::WindowResolution::new(
                    viewport_width as u32,
                    viewport_height as u32,
                )
                .with_scale_factor_override(1.0),
                title: "Spotkick".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(SKY_COLOR))
        // Core logic ticks at 60 Hz so flights match the headless runner
        .insert_resource(Time::<Fixed>::from_hz(60.0))
        .init_resource::<Score>()
        .init_resource::<ShotPhase>()
        .init_resource::<AimDrag>()
        .init_resource::<ShootTrigger>()
        .insert_resource(EventBus::new())
        .insert_resource(keeper_rng)
        .insert_resource(EventLogger::new(EventLogConfig {
            log_dir: "logs".into(),
            enabled: log_events || settings.log_events,
        }))
        .add_message::<ShotFired>()
        .add_message::<FlightComplete>()
        .add_message::<ShotOutcome>()
        .add_systems(
            Startup,
            (world::spawn_pitch, world::load_figures, setup_ui, begin_session),
        )
        // Input systems must run in order: drag capture -> trigger capture
        .add_systems(
            Update,
            (aiming::capture_aim_input, ui::capture_shoot_trigger).chain(),
        )
        // Drag preview owns the ball only while no flight does
        .add_systems(
            Update,
            aiming::preview_drag.run_if(session::not_in_flight),
        )
        // Async figure spawning and HUD refresh
        .add_systems(
            Update,
            (
                world::spawn_loaded_figures,
                ui::update_score_text,
                ui::show_outcome,
                ui::tick_outcome_banner,
            ),
        )
        // Telemetry: stamp bus time, then drain to the evlog
        .add_systems(
            Update,
            (events::update_event_bus_time, events::flush_bus_to_log).chain(),
        )
        // Core shot chain: resolve -> launch + dive -> tick -> judge
        .add_systems(
            FixedUpdate,
            (
                shooting::resolve_shot,
                ball::launch_flight,
                keeper::keeper_react,
                ball::tick_flight,
                keeper::keeper_reset,
                scoring::judge_shot,
            )
                .chain(),
        )
        .run();
}

/// Spawn the HUD: score line, shoot button, and outcome banner
fn setup_ui(mut commands: Commands) {
    ui::spawn_hud(&mut commands);
    ui::spawn_shoot_button(&mut commands);
    ui::spawn_outcome_banner(&mut commands);
}
