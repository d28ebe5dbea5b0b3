//! This module defines the shared data structures used throughout the
//! application. They are stored in Serenity's global context via
//! `TypeMapKey`s.

use std::sync::Arc;

use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;
use tokio::sync::RwLock;

use crate::constants::DEFAULT_PRICE_LABEL;
use crate::valorant::cache::GameDataCache;
use crate::valorant::store::StoreProvider;

/// A container for the ShardManager, allowing it to be stored in the global
/// context. This provides access to shard-specific information, like
/// gateway latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for easy and safe
/// access from any command or event handler.
pub struct AppState {
    /// Game data loaded from the public game-data API.
    pub game_data: Arc<GameDataCache>,
    /// Source of per-player storefront data. The auth flow behind it lives
    /// outside this repo.
    pub store: Arc<dyn StoreProvider>,
    /// The current command prefix, which can be changed at runtime.
    pub prefix: Arc<RwLock<String>>,
    /// Resolved VP emoji mention for price lines, when one is available.
    pub price_emoji: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }

    /// The string prefixed to price values: the guild's VP emoji, or a
    /// plain-text label when none was resolved.
    pub async fn price_label(&self) -> String {
        self.price_emoji
            .read()
            .await
            .clone()
            .unwrap_or_else(|| DEFAULT_PRICE_LABEL.to_string())
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
