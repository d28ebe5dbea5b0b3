//! Valorant game data: view models, the in-process game-data cache, the
//! public game-data API loader, and the player-store provider seam.

pub mod api;
pub mod cache;
pub mod models;
pub mod store;
