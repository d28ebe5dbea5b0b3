//! Misc small formatting helpers shared across views.

use crate::constants::rarity_icon;
use crate::valorant::cache::GameDataCache;
use crate::valorant::models::Skin;

/// Escape Discord markdown control characters in externally-sourced text.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '~' | '`' | '|') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Format a custom guild emoji as a sendable mention (`<:name:id>`).
pub fn emoji_to_string(name: &str, id: u64, animated: bool) -> String {
    let prefix = if animated { "a" } else { "" };
    format!("<{prefix}:{name}:{id}>")
}

/// Discord relative-timestamp markup for a unix timestamp.
pub fn relative_timestamp(unix: i64) -> String {
    format!("<t:{unix}:R>")
}

/// Wording for an expiry timestamp relative to `now`.
pub fn expiry_phrase(expires_at: i64, now: i64) -> &'static str {
    if expires_at > now { "expires" } else { "expired" }
}

/// Skin display name prefixed with its rarity icon when the tier is known.
pub async fn skin_name_and_emoji(skin: &Skin, cache: &GameDataCache) -> String {
    let icon = match &skin.rarity {
        Some(uuid) => cache
            .get_rarity(uuid)
            .await
            .and_then(|r| rarity_icon(&r)),
        None => None,
    };
    match icon {
        Some(icon) => format!("{icon} {}", skin.name),
        None => skin.name.clone(),
    }
}
