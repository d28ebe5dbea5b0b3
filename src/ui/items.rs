//! Per-item embed builders shared by the shop, bundle and night-market views.

use serenity::builder::CreateEmbed;

use crate::ui::style::{basic_embed, COLOR_PRIMARY, COLOR_SECONDARY};
use crate::util::skin_name_and_emoji;
use crate::valorant::cache::GameDataCache;
use crate::valorant::models::{
    Buddy, BundleData, BundleItem, ItemKind, ItemPayload, PlayerCard, PlayerTitle, Skin, Spray,
};

/// Shared price line: `<emoji> <price>`. `None` when there is nothing to show.
pub fn price_description(emoji: &str, price: Option<u32>) -> Option<String> {
    match price {
        Some(p) if p > 0 => Some(format!("{emoji} {p}")),
        _ => None,
    }
}

fn with_price(embed: CreateEmbed, emoji: &str, price: Option<u32>) -> CreateEmbed {
    match price_description(emoji, price) {
        Some(line) => embed.description(line),
        None => embed,
    }
}

pub async fn skin_embed(
    skin: &Skin,
    price: Option<u32>,
    cache: &GameDataCache,
    emoji: &str,
) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(skin_name_and_emoji(skin, cache).await)
        .color(COLOR_SECONDARY);
    if let Some(icon) = &skin.icon {
        embed = embed.thumbnail(icon.clone());
    }
    with_price(embed, emoji, price)
}

pub fn buddy_embed(buddy: &Buddy, price: Option<u32>, emoji: &str) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(buddy.name.clone())
        .color(COLOR_SECONDARY);
    if let Some(icon) = &buddy.icon {
        embed = embed.thumbnail(icon.clone());
    }
    with_price(embed, emoji, price)
}

pub fn card_embed(card: &PlayerCard, price: Option<u32>, emoji: &str) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(card.name.clone())
        .color(COLOR_SECONDARY);
    if let Some(icon) = &card.icons.large {
        embed = embed.thumbnail(icon.clone());
    }
    with_price(embed, emoji, price)
}

pub fn spray_embed(spray: &Spray, price: Option<u32>, emoji: &str) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(spray.name.clone())
        .color(COLOR_SECONDARY);
    if let Some(icon) = &spray.icon {
        embed = embed.thumbnail(icon.clone());
    }
    with_price(embed, emoji, price)
}

/// Player titles carry their display text in backticks above the price line
/// and have no artwork to thumbnail.
pub fn title_embed(title: &PlayerTitle, price: Option<u32>, emoji: &str) -> CreateEmbed {
    let price_line = price_description(emoji, price).unwrap_or_default();
    let description = match &title.text {
        Some(text) => format!("`{text}`\n\n{price_line}"),
        None => price_line,
    };
    CreateEmbed::new()
        .title(title.name.clone())
        .description(description)
        .color(COLOR_SECONDARY)
}

pub fn unknown_item_embed(type_uuid: &str) -> CreateEmbed {
    basic_embed(format!("**Unknown item type!** `{type_uuid}`"))
}

/// Confirmation embed for a newly-set skin alert.
pub async fn skin_chosen_embed(skin: &Skin, cache: &GameDataCache) -> CreateEmbed {
    let mut description = format!(
        "Successfully set an alert for the **{}**!",
        skin_name_and_emoji(skin, cache).await
    );
    if skin.rarity.is_none() {
        description.push_str("\n***Note:** This is a battle pass skin!*");
    }
    let mut embed = CreateEmbed::new()
        .description(description)
        .color(COLOR_PRIMARY);
    if let Some(icon) = &skin.icon {
        embed = embed.thumbnail(icon.clone());
    }
    embed
}

/// Render one bundle entry, applying the amount prefix, the skin accent
/// color and the discount description override.
pub async fn bundle_item_embed(
    item: &BundleItem,
    cache: &GameDataCache,
    emoji: &str,
) -> CreateEmbed {
    let price = Some(item.price);
    let mut embed = match &item.payload {
        ItemPayload::Skin(skin) => skin_embed(skin, price, cache, emoji).await,
        ItemPayload::Buddy(buddy) => buddy_embed(buddy, price, emoji),
        ItemPayload::Card(card) => card_embed(card, price, emoji),
        ItemPayload::Spray(spray) => spray_embed(spray, price, emoji),
        ItemPayload::Title(title) => title_embed(title, price, emoji),
        ItemPayload::Other { type_uuid } => return unknown_item_embed(type_uuid),
    };

    if item.amount != 1 {
        let name = match &item.payload {
            ItemPayload::Skin(skin) => skin_name_and_emoji(skin, cache).await,
            other => other.name().unwrap_or_default().to_string(),
        };
        embed = embed.title(format!("{}x {name}", item.amount));
    }

    if item.payload.kind() == ItemKind::Skin {
        embed = embed.color(COLOR_PRIMARY);
    }

    if item.price != item.base_price {
        let discounted = if item.price > 0 {
            item.price.to_string()
        } else {
            "Free".to_string()
        };
        let mut description = format!("{emoji} ~~{}~~ **{discounted}**", item.base_price);
        if let ItemPayload::Title(title) = &item.payload {
            if let Some(text) = &title.text {
                description = format!("`{text}`\n\n{description}");
            }
        }
        embed = embed.description(description);
    }

    embed
}

/// All bundle entries, sorted by the fixed kind priority
/// (skin > buddy > spray > card > title, unknown kinds last).
pub async fn bundle_item_embeds(
    data: &BundleData,
    cache: &GameDataCache,
    emoji: &str,
) -> Vec<CreateEmbed> {
    let mut items: Vec<&BundleItem> = data.items.iter().collect();
    items.sort_by(|a, b| b.payload.kind().priority().cmp(&a.payload.kind().priority()));

    let mut embeds = Vec::with_capacity(items.len());
    for item in items {
        embeds.push(bundle_item_embed(item, cache, emoji).await);
    }
    embeds
}
