//! World module - pitch scene, camera, lights, and figure asset loading
//!
//! The kicker, keeper, and stadium are glTF scenes loaded asynchronously;
//! their entities only exist once the asset arrives. A failed load is
//! logged and leaves the figure absent, which in turn keeps the shoot
//! guard holding — the render loop itself never depends on them.

use bevy::asset::LoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::ball::Ball;
use crate::constants::*;
use crate::keeper::{Keeper, KeeperState};

/// Marker for the penalty taker
#[derive(Component, Default)]
pub struct Kicker;

/// Marker for the stadium dressing
#[derive(Component, Default)]
pub struct Stadium;

/// Marker for the goal frame
#[derive(Component)]
pub struct Goal;

/// One async-loaded figure
pub struct FigureSlot {
    pub scene: Handle<Scene>,
    pub spawned: bool,
    pub failed: bool,
}

impl FigureSlot {
    fn new(scene: Handle<Scene>) -> Self {
        Self {
            scene,
            spawned: false,
            failed: false,
        }
    }

    /// Still waiting on the asset server
    fn pending(&self) -> bool {
        !self.spawned && !self.failed
    }
}

/// Handles to the three glTF figures
#[derive(Resource)]
pub struct FigureAssets {
    pub kicker: FigureSlot,
    pub keeper: FigureSlot,
    pub stadium: FigureSlot,
}

/// Kick off the async scene loads (called at startup)
pub fn load_figures(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(FigureAssets {
        kicker: FigureSlot::new(
            asset_server.load(GltfAssetLabel::Scene(0).from_asset("models/kicker.glb")),
        ),
        keeper: FigureSlot::new(
            asset_server.load(GltfAssetLabel::Scene(0).from_asset("models/keeper.glb")),
        ),
        stadium: FigureSlot::new(
            asset_server.load(GltfAssetLabel::Scene(0).from_asset("models/stadium.glb")),
        ),
    });
}

/// Spawn each figure once its scene finishes loading.
/// Failures leave the figure absent for the rest of the session.
pub fn spawn_loaded_figures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut figures: ResMut<FigureAssets>,
) {
    if figures.kicker.pending() {
        match asset_server.get_load_state(&figures.kicker.scene) {
            Some(LoadState::Loaded) => {
                commands.spawn((
                    SceneRoot(figures.kicker.scene.clone()),
                    Transform::from_translation(KICKER_POS).with_scale(Vec3::splat(FIGURE_SCALE)),
                    Kicker,
                ));
                figures.kicker.spawned = true;
            }
            Some(LoadState::Failed(err)) => {
                warn!("Kicker model failed to load: {err}");
                figures.kicker.failed = true;
            }
            _ => {}
        }
    }

    if figures.keeper.pending() {
        match asset_server.get_load_state(&figures.keeper.scene) {
            Some(LoadState::Loaded) => {
                commands.spawn((
                    SceneRoot(figures.keeper.scene.clone()),
                    Transform::from_translation(KEEPER_POS).with_scale(Vec3::splat(FIGURE_SCALE)),
                    Keeper,
                    KeeperState::default(),
                ));
                figures.keeper.spawned = true;
            }
            Some(LoadState::Failed(err)) => {
                warn!("Keeper model failed to load: {err}");
                figures.keeper.failed = true;
            }
            _ => {}
        }
    }

    if figures.stadium.pending() {
        match asset_server.get_load_state(&figures.stadium.scene) {
            Some(LoadState::Loaded) => {
                commands.spawn((
                    SceneRoot(figures.stadium.scene.clone()),
                    Transform::from_scale(Vec3::splat(STADIUM_SCALE)),
                    Stadium,
                ));
                figures.stadium.spawned = true;
            }
            Some(LoadState::Failed(err)) => {
                warn!("Stadium model failed to load: {err}");
                figures.stadium.failed = true;
            }
            _ => {}
        }
    }
}

/// Spawn the static scene: camera, lights, pitch, goal, and ball.
pub fn spawn_pitch(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Camera looking down the pitch toward the goal
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_POS).looking_at(CAMERA_TARGET, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 250.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 15.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Pitch
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(PITCH_SIZE, PITCH_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: PITCH_COLOR,
            perceptual_roughness: 0.8,
            ..default()
        })),
    ));

    // Goal frame on the goal line
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(GOAL_SIZE.x, GOAL_SIZE.y, GOAL_SIZE.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GOAL_COLOR,
            ..default()
        })),
        Transform::from_translation(GOAL_POS),
        Goal,
    ));

    // Ball on the penalty spot
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(BALL_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: BALL_COLOR,
            ..default()
        })),
        Transform::from_translation(BALL_START),
        Ball,
    ));
}
