//! Simulation module - headless shootouts without rendering
//!
//! Provides tools to run shots without a window, driven by fixed ticks,
//! for the simulate/sweep bins and for tests.

pub mod app_builder;
pub mod runner;

pub use app_builder::HeadlessAppBuilder;
pub use runner::{ShootoutTally, ShotScript, random_scripts, run_shootout};
