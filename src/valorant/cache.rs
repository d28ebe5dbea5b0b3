//! In-process store of game data loaded from the public game-data API.
//!
//! Read-mostly: loaded once at startup, then consulted by every render.
//! Lookups clone small values out rather than handing out guards.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::constants::GAME_DATA_TTL_SECS;

use super::models::{Bundle, BundleData, Rarity, Skin};

#[derive(Default)]
pub struct GameDataCache {
    skins: RwLock<HashMap<String, Skin>>,
    bundles: RwLock<HashMap<String, Bundle>>,
    rarities: RwLock<HashMap<String, Rarity>>,
    loaded_at: RwLock<Option<Instant>>,
}

impl GameDataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cache contents wholesale with a fresh game-data load.
    pub async fn load(&self, skins: Vec<Skin>, bundles: Vec<Bundle>, rarities: Vec<Rarity>) {
        let mut skin_map = self.skins.write().await;
        let mut bundle_map = self.bundles.write().await;
        let mut rarity_map = self.rarities.write().await;
        *skin_map = skins.into_iter().map(|s| (s.uuid.clone(), s)).collect();
        *bundle_map = bundles.into_iter().map(|b| (b.uuid.clone(), b)).collect();
        *rarity_map = rarities.into_iter().map(|r| (r.uuid.clone(), r)).collect();
        *self.loaded_at.write().await = Some(Instant::now());
        tracing::info!(
            target: "cache",
            skins = skin_map.len(),
            bundles = bundle_map.len(),
            rarities = rarity_map.len(),
            "game data loaded"
        );
    }

    pub async fn get_skin(&self, uuid: &str) -> Option<Skin> {
        self.skins.read().await.get(uuid).cloned()
    }

    pub async fn get_bundle(&self, uuid: &str) -> Option<Bundle> {
        self.bundles.read().await.get(uuid).cloned()
    }

    pub async fn get_rarity(&self, uuid: &str) -> Option<Rarity> {
        self.rarities.read().await.get(uuid).cloned()
    }

    /// Case-insensitive substring search over bundle names.
    /// Exact (case-insensitive) matches win over substring hits.
    pub async fn find_bundle_by_name(&self, query: &str) -> Option<Bundle> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        let bundles = self.bundles.read().await;
        let mut partial: Option<&Bundle> = None;
        for bundle in bundles.values() {
            let name = bundle.name.to_lowercase();
            if name == query {
                return Some(bundle.clone());
            }
            if partial.is_none() && name.contains(&query) {
                partial = Some(bundle);
            }
        }
        partial.cloned()
    }

    /// Merge store-offer prices into the cached skins.
    pub async fn apply_prices(&self, prices: &HashMap<String, u32>) {
        let mut skins = self.skins.write().await;
        for (uuid, price) in prices {
            if let Some(skin) = skins.get_mut(uuid) {
                skin.price = Some(*price);
            }
        }
    }

    /// Attach featured price/expiry/item data to a cached bundle.
    pub async fn apply_bundle_data(&self, uuid: &str, data: BundleData) {
        if let Some(bundle) = self.bundles.write().await.get_mut(uuid) {
            bundle.data = Some(data);
        }
    }

    /// Whether the last load is older than the freshness window (or never ran).
    pub async fn is_stale(&self) -> bool {
        match *self.loaded_at.read().await {
            Some(at) => at.elapsed() >= Duration::from_secs(GAME_DATA_TTL_SECS),
            None => true,
        }
    }
}
