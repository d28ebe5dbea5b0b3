// Central constants for store rendering and caching.

/// Currency UUID Riot uses for Valorant Points in storefront cost maps.
pub const VP_CURRENCY_UUID: &str = "85ad13f7-3d1b-5128-9eb2-7cd8ee0b5741";

/// Name of the guild emoji looked up for price lines.
pub const VP_EMOJI_NAME: &str = "ValPoints";

/// Label used in price lines when no VP emoji could be resolved.
pub const DEFAULT_PRICE_LABEL: &str = "Price:";

/// How long loaded game data is considered fresh before a reload is advisable.
pub const GAME_DATA_TTL_SECS: u64 = 60 * 60 * 6;

use crate::valorant::models::Rarity;

/// Return a short icon for a content tier.
pub fn rarity_icon(rarity: &Rarity) -> Option<&'static str> {
    match rarity.dev_name.as_str() {
        "Select" => Some("🟢"),
        "Deluxe" => Some("🔵"),
        "Premium" => Some("🟣"),
        "Ultra" => Some("🟡"),
        "Exclusive" => Some("🟠"),
        _ => None,
    }
}
