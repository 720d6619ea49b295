//! Ball module - components and flight systems

mod components;
mod flight;

pub use components::*;
pub use flight::*;
