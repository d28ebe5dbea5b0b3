//! Renders the daily shop view.

use crate::ui::auth::auth_failure_message;
use crate::ui::items::skin_embed;
use crate::ui::style::basic_embed;
use crate::ui::EmbedReply;
use crate::util::relative_timestamp;
use crate::valorant::cache::GameDataCache;
use crate::valorant::models::{ShopOffers, ValorantUser};

pub async fn render_offers(
    shop: &ShopOffers,
    user: &ValorantUser,
    cache: &GameDataCache,
    emoji: &str,
) -> EmbedReply {
    if !shop.success {
        return auth_failure_message(
            &shop.auth,
            "**Could not fetch your shop**, most likely you got logged out. Try logging in again.",
            false,
        );
    }

    let mut embeds = vec![basic_embed(format!(
        "Daily shop for **{}** (new shop {})",
        user.username,
        relative_timestamp(shop.expires)
    ))];

    for uuid in &shop.offers {
        match cache.get_skin(uuid).await {
            Some(skin) => embeds.push(skin_embed(&skin, skin.price, cache, emoji).await),
            None => {
                tracing::warn!(target: "shop", uuid = %uuid, "offer not in game data cache");
                embeds.push(basic_embed(format!("**Unknown skin!** `{uuid}`")));
            }
        }
    }

    EmbedReply::public(embeds)
}
