//! One-shot loader for the public game-data API (valorant-api.com).
//!
//! No auth, no retries: a failed load is reported and the bot starts with
//! an empty cache.

use serde::Deserialize;
use thiserror::Error;

use super::models::{Bundle, Rarity, Skin};

const BASE_URL: &str = "https://valorant-api.com/v1";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("game-data request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("game-data response for `{endpoint}` carried no data payload")]
    MissingData { endpoint: &'static str },
}

/// Everything the cache is seeded with at startup.
pub struct GameData {
    pub skins: Vec<Skin>,
    pub bundles: Vec<Bundle>,
    pub rarities: Vec<Rarity>,
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    data: Option<Vec<T>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SkinDto {
    uuid: String,
    display_name: String,
    content_tier_uuid: Option<String>,
    display_icon: Option<String>,
    #[serde(default)]
    levels: Vec<SkinLevelDto>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SkinLevelDto {
    uuid: String,
    display_icon: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleDto {
    uuid: String,
    display_name: String,
    display_name_sub_text: Option<String>,
    description: Option<String>,
    display_icon: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TierDto {
    uuid: String,
    dev_name: String,
    rank: u32,
    highlight_color: Option<String>,
}

async fn fetch_list<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    endpoint: &'static str,
) -> Result<Vec<T>, ApiError> {
    let response = client
        .get(format!("{BASE_URL}/{endpoint}"))
        .send()
        .await?
        .error_for_status()?
        .json::<ApiResponse<T>>()
        .await?;
    response.data.ok_or(ApiError::MissingData { endpoint })
}

/// Fetch skins, bundles and content tiers in one pass.
pub async fn fetch_game_data(client: &reqwest::Client) -> Result<GameData, ApiError> {
    let skins = fetch_list::<SkinDto>(client, "weapons/skins").await?;
    let bundles = fetch_list::<BundleDto>(client, "bundles").await?;
    let tiers = fetch_list::<TierDto>(client, "contenttiers").await?;

    // Storefront offers reference the base level UUID, so skins are keyed
    // by it; the skin-level icon is sharper than the parent's where present.
    let skins = skins
        .into_iter()
        .map(|dto| {
            let base_level = dto.levels.first();
            Skin {
                uuid: base_level.map_or_else(|| dto.uuid.clone(), |l| l.uuid.clone()),
                name: dto.display_name,
                icon: base_level
                    .and_then(|l| l.display_icon.clone())
                    .or(dto.display_icon),
                rarity: dto.content_tier_uuid,
                price: None,
            }
        })
        .collect();

    let bundles = bundles
        .into_iter()
        .map(|dto| Bundle {
            uuid: dto.uuid,
            name: dto.display_name,
            subname: dto.display_name_sub_text,
            description: dto.description,
            icon: dto.display_icon,
            data: None,
        })
        .collect();

    let rarities = tiers
        .into_iter()
        .map(|dto| Rarity {
            uuid: dto.uuid,
            dev_name: dto.dev_name,
            rank: dto.rank,
            highlight_color: dto.highlight_color,
        })
        .collect();

    Ok(GameData {
        skins,
        bundles,
        rarities,
    })
}
