//! Renders the night-market view.

use chrono::Utc;

use crate::ui::auth::auth_failure_message;
use crate::ui::items::skin_embed;
use crate::ui::style::basic_embed;
use crate::ui::EmbedReply;
use crate::util::{expiry_phrase, relative_timestamp};
use crate::valorant::cache::GameDataCache;
use crate::valorant::models::{NightMarket, ValorantUser};

pub async fn render_night_market(
    market: &NightMarket,
    user: &ValorantUser,
    cache: &GameDataCache,
    emoji: &str,
) -> EmbedReply {
    if !market.success {
        return auth_failure_message(
            &market.auth,
            "**Could not fetch your night market**, most likely you got logged out. Try logging in again.",
            false,
        );
    }

    let Some(offers) = &market.offers else {
        return EmbedReply::public(vec![basic_embed("**There is no night market currently!**")]);
    };

    let now = Utc::now().timestamp();
    let mut embeds = vec![basic_embed(format!(
        "Night Market for **{}** ({} {})",
        user.username,
        expiry_phrase(market.expires, now),
        relative_timestamp(market.expires)
    ))];

    for offer in offers {
        match cache.get_skin(&offer.uuid).await {
            Some(skin) => {
                // The price line is replaced wholesale with the discount pair.
                let embed = skin_embed(&skin, Some(offer.discount_price), cache, emoji)
                    .await
                    .description(format!(
                        "{emoji} **{}**\n{emoji} ~~{}~~ (-{}%)",
                        offer.discount_price, offer.base_price, offer.discount_percent
                    ));
                embeds.push(embed);
            }
            None => {
                tracing::warn!(target: "nightmarket", uuid = %offer.uuid, "offer not in game data cache");
                embeds.push(basic_embed(format!("**Unknown skin!** `{}`", offer.uuid)));
            }
        }
    }

    EmbedReply::public(embeds)
}
