//! Events module - event bus, types, text format, and evlog writer

mod bus;
mod format;
mod logger;
mod types;

pub use bus::*;
pub use format::*;
pub use logger::*;
pub use types::*;
