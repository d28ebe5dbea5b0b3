// Library entry so integration tests and external tools can reference
// internal modules. The binary (`main.rs`) links against this crate.
pub mod commands;
pub mod constants;
pub mod handler;
pub mod model;
pub mod ui;
pub mod util;
pub mod valorant;

// Convenient re-exports for frequently used types.
pub use model::{AppState, ShardManagerContainer};
