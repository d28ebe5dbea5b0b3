//! Renders the currently-featured bundles: a full bundle view when exactly
//! one is featured, a compact summary list otherwise.

use chrono::Utc;
use serenity::builder::CreateEmbed;

use crate::commands::bundle::ui::render_bundle;
use crate::ui::auth::auth_failure_message;
use crate::ui::style::{basic_embed, COLOR_PRIMARY, COLOR_SECONDARY};
use crate::ui::EmbedReply;
use crate::util::{expiry_phrase, relative_timestamp};
use crate::valorant::cache::GameDataCache;
use crate::valorant::models::FeaturedBundles;

pub async fn render_bundles(
    featured: &FeaturedBundles,
    cache: &GameDataCache,
    emoji: &str,
) -> EmbedReply {
    if !featured.success {
        return auth_failure_message(
            &featured.auth,
            "**Could not fetch your bundles**, most likely you got logged out. Try logging in again.",
            false,
        );
    }

    let now = Utc::now().timestamp();

    if let [entry] = featured.bundles.as_slice() {
        let Some(mut bundle) = cache.get_bundle(&entry.uuid).await else {
            tracing::warn!(target: "bundles", uuid = %entry.uuid, "featured bundle not in game data cache");
            return EmbedReply::public(vec![basic_embed(
                "**Couldn't load the featured bundle!** Try again later.",
            )]);
        };
        let expires = entry.expires;
        bundle.data = Some(entry.clone().into_data());

        let mut reply = render_bundle(&bundle, cache, emoji, false).await;
        if let Some(first) = reply.embeds.first_mut() {
            *first = first.clone().title(format!(
                "Featured bundle: **{} Collection** *({} {})*",
                bundle.name,
                expiry_phrase(expires, now),
                relative_timestamp(expires)
            ));
        }
        return reply;
    }

    let mut embeds = vec![CreateEmbed::new()
        .title("Currently featured bundles:")
        .description("Use `/bundle` to inspect a specific bundle")
        .color(COLOR_PRIMARY)];

    for entry in &featured.bundles {
        let Some(bundle) = cache.get_bundle(&entry.uuid).await else {
            tracing::warn!(target: "bundles", uuid = %entry.uuid, "featured bundle not in game data cache");
            continue;
        };

        let subname = bundle
            .subname
            .as_ref()
            .map(|s| format!("{s}\n"))
            .unwrap_or_default();
        let slanted = bundle
            .description
            .as_ref()
            .map(|d| format!("*{d}*\n"))
            .unwrap_or_default();
        let phrase = match expiry_phrase(entry.expires, now) {
            "expired" => "Expired",
            _ => "Expires",
        };

        let mut embed = CreateEmbed::new()
            .title(format!("{} Collection", bundle.name))
            .description(format!(
                "{subname}{slanted}{emoji} ~~{}~~ **{}**\n{phrase} {}",
                entry.base_price,
                entry.price,
                relative_timestamp(entry.expires)
            ))
            .color(COLOR_SECONDARY);
        if let Some(icon) = &bundle.icon {
            embed = embed.thumbnail(icon.clone());
        }
        embeds.push(embed);
    }

    EmbedReply::public(embeds)
}
