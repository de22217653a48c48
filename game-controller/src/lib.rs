pub mod commands;
pub mod config;
pub mod controller;
pub mod runtime;

pub use controller::{Effect, GameController};
pub use runtime::{GameRuntime, ScheduledTask};
