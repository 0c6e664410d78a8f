#![forbid(unsafe_code)]

pub mod model;
pub mod navigator;
pub mod time;

pub use navigator::{NavigationError, NavigationState, Navigator, Position, Progress};
pub use time::Clock;
