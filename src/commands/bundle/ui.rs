//! Renders a single bundle: the title embed followed by its items.

use chrono::Utc;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::ui::items::bundle_item_embeds;
use crate::ui::style::{basic_embed, COLOR_BUNDLE, COLOR_PRIMARY};
use crate::ui::EmbedReply;
use crate::util::{escape_markdown, expiry_phrase, relative_timestamp};
use crate::valorant::cache::GameDataCache;
use crate::valorant::models::Bundle;

/// Subname and italicized description lines that precede the price line.
fn header_lines(bundle: &Bundle) -> String {
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
    format!("{subname}{slanted}")
}

pub async fn render_bundle(
    bundle: &Bundle,
    cache: &GameDataCache,
    emoji: &str,
    include_expiry: bool,
) -> EmbedReply {
    let header = header_lines(bundle);

    // Riot exposes no price/item data for past or unreleased bundles.
    let Some(data) = &bundle.data else {
        let mut embed = CreateEmbed::new()
            .title(format!("{} Collection", bundle.name))
            .color(COLOR_PRIMARY)
            .footer(CreateEmbedFooter::new(
                "Riot doesn't provide data for previous/unreleased bundles :(",
            ));
        if !header.is_empty() {
            embed = embed.description(header);
        }
        if let Some(icon) = &bundle.icon {
            embed = embed.image(icon.clone());
        }
        return EmbedReply::public(vec![embed]);
    };

    let mut description = format!("{header}{emoji} ~~{}~~ **{}**", data.base_price, data.price);
    if include_expiry {
        let now = Utc::now().timestamp();
        description.push_str(&format!(
            " ({} {})",
            expiry_phrase(data.expires, now),
            relative_timestamp(data.expires)
        ));
    }

    let mut title_embed = CreateEmbed::new()
        .title(format!("{} Collection", bundle.name))
        .description(description)
        .color(COLOR_BUNDLE);
    if let Some(icon) = &bundle.icon {
        title_embed = title_embed.image(icon.clone());
    }

    let mut embeds = vec![title_embed];
    embeds.extend(bundle_item_embeds(data, cache, emoji).await);
    EmbedReply::public(embeds)
}

pub fn bundle_not_found(query: &str) -> EmbedReply {
    EmbedReply::ephemeral(basic_embed(format!(
        "**Couldn't find a bundle called \"{}\"!**",
        escape_markdown(query)
    )))
}
