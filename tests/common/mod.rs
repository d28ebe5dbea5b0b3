//! Shared fixtures for the embed output tests.
#![allow(dead_code)]

use serenity::builder::CreateEmbed;
use valshop_bot::valorant::cache::GameDataCache;
use valshop_bot::valorant::models::{Bundle, Rarity, Skin};

/// Stand-in VP emoji mention used across the tests.
pub const VP: &str = "<:vp:123>";

/// Serenity's builders are write-only; assertions go through their JSON form.
pub fn embed_json(embed: &CreateEmbed) -> serde_json::Value {
    serde_json::to_value(embed).expect("embed should serialize")
}

/// True when a field was never set on the embed.
pub fn absent(value: &serde_json::Value, key: &str) -> bool {
    match value.get(key) {
        None => true,
        Some(v) => v.is_null(),
    }
}

pub fn skin(uuid: &str, name: &str, rarity: Option<&str>, price: Option<u32>) -> Skin {
    Skin {
        uuid: uuid.to_string(),
        name: name.to_string(),
        icon: Some(format!("https://cdn.example/{uuid}.png")),
        rarity: rarity.map(str::to_string),
        price,
    }
}

pub fn premium_rarity() -> Rarity {
    Rarity {
        uuid: "tier-premium".to_string(),
        dev_name: "Premium".to_string(),
        rank: 3,
        highlight_color: Some("c072ffff".to_string()),
    }
}

pub fn bundle(uuid: &str, name: &str) -> Bundle {
    Bundle {
        uuid: uuid.to_string(),
        name: name.to_string(),
        subname: None,
        description: None,
        icon: Some(format!("https://cdn.example/{uuid}-banner.png")),
        data: None,
    }
}

pub async fn cache_with(skins: Vec<Skin>, bundles: Vec<Bundle>) -> GameDataCache {
    let cache = GameDataCache::new();
    cache.load(skins, bundles, vec![premium_rarity()]).await;
    cache
}
