//! Literal output-shape assertions for the per-item embed builders.

mod common;

use common::{absent, cache_with, embed_json, skin, VP};
use serde_json::json;
use valshop_bot::ui::items::{
    bundle_item_embed, bundle_item_embeds, card_embed, price_description, skin_chosen_embed,
    skin_embed, title_embed, unknown_item_embed,
};
use valshop_bot::valorant::models::{
    BundleData, BundleItem, CardIcons, ItemPayload, PlayerCard, PlayerTitle, Spray,
};

#[test]
fn price_description_formats_emoji_and_price() {
    assert_eq!(price_description(VP, Some(1775)), Some(format!("{VP} 1775")));
}

#[test]
fn price_description_omits_missing_or_zero_price() {
    assert_eq!(price_description(VP, None), None);
    assert_eq!(price_description(VP, Some(0)), None);
}

#[tokio::test]
async fn skin_embed_shape() {
    let cache = cache_with(vec![], vec![]).await;
    let skin = skin("uuid-reaver", "Reaver Vandal", Some("tier-premium"), None);

    let value = embed_json(&skin_embed(&skin, Some(1775), &cache, VP).await);
    assert_eq!(value["title"], json!("🟣 Reaver Vandal"));
    assert_eq!(value["description"], json!(format!("{VP} 1775")));
    assert_eq!(value["color"], json!(0x0F1923));
    assert_eq!(
        value["thumbnail"]["url"],
        json!("https://cdn.example/uuid-reaver.png")
    );
}

#[tokio::test]
async fn skin_embed_without_price_has_no_description() {
    let cache = cache_with(vec![], vec![]).await;
    let skin = skin("uuid-ion", "Ion Phantom", None, None);

    let value = embed_json(&skin_embed(&skin, None, &cache, VP).await);
    assert_eq!(value["title"], json!("Ion Phantom"));
    assert!(absent(&value, "description"));
}

#[test]
fn card_embed_uses_large_icon() {
    let card = PlayerCard {
        uuid: "uuid-card".to_string(),
        name: "Viper's Embrace".to_string(),
        icons: CardIcons {
            small: Some("small.png".to_string()),
            large: Some("large.png".to_string()),
            wide: Some("wide.png".to_string()),
        },
    };

    let value = embed_json(&card_embed(&card, Some(375), VP));
    assert_eq!(value["thumbnail"]["url"], json!("large.png"));
    assert_eq!(value["description"], json!(format!("{VP} 375")));
}

#[test]
fn title_embed_shows_text_in_backticks_without_thumbnail() {
    let title = PlayerTitle {
        uuid: "uuid-title".to_string(),
        name: "Soulless Title".to_string(),
        text: Some("Soulless".to_string()),
    };

    let value = embed_json(&title_embed(&title, Some(125), VP));
    assert_eq!(value["description"], json!(format!("`Soulless`\n\n{VP} 125")));
    assert!(absent(&value, "thumbnail"));
}

#[test]
fn unknown_item_embed_names_the_type() {
    let value = embed_json(&unknown_item_embed("deadbeef"));
    assert_eq!(value["description"], json!("**Unknown item type!** `deadbeef`"));
    assert_eq!(value["color"], json!(0xFD4553));
}

#[tokio::test]
async fn skin_chosen_embed_flags_battle_pass_skins() {
    let cache = cache_with(vec![], vec![]).await;
    let bp_skin = skin("uuid-bp", "Snowfall Classic", None, None);

    let value = embed_json(&skin_chosen_embed(&bp_skin, &cache).await);
    assert_eq!(
        value["description"],
        json!(
            "Successfully set an alert for the **Snowfall Classic**!\n\
             ***Note:** This is a battle pass skin!*"
        )
    );
}

#[tokio::test]
async fn bundle_item_discount_overrides_description() {
    let cache = cache_with(vec![], vec![]).await;
    let item = BundleItem {
        payload: ItemPayload::Spray(Spray {
            uuid: "uuid-spray".to_string(),
            name: "Salt Shaker".to_string(),
            icon: None,
        }),
        price: 325,
        base_price: 425,
        amount: 1,
    };

    let value = embed_json(&bundle_item_embed(&item, &cache, VP).await);
    assert_eq!(value["description"], json!(format!("{VP} ~~425~~ **325**")));
}

#[tokio::test]
async fn bundle_item_equal_prices_keep_plain_price_line() {
    let cache = cache_with(vec![], vec![]).await;
    let item = BundleItem {
        payload: ItemPayload::Spray(Spray {
            uuid: "uuid-spray".to_string(),
            name: "Salt Shaker".to_string(),
            icon: None,
        }),
        price: 425,
        base_price: 425,
        amount: 1,
    };

    let value = embed_json(&bundle_item_embed(&item, &cache, VP).await);
    assert_eq!(value["description"], json!(format!("{VP} 425")));
}

#[tokio::test]
async fn bundle_item_free_when_discounted_to_zero() {
    let cache = cache_with(vec![], vec![]).await;
    let item = BundleItem {
        payload: ItemPayload::Title(PlayerTitle {
            uuid: "uuid-title".to_string(),
            name: "Bonus Title".to_string(),
            text: Some("Bonus".to_string()),
        }),
        price: 0,
        base_price: 125,
        amount: 1,
    };

    let value = embed_json(&bundle_item_embed(&item, &cache, VP).await);
    assert_eq!(
        value["description"],
        json!(format!("`Bonus`\n\n{VP} ~~125~~ **Free**"))
    );
}

#[tokio::test]
async fn bundle_item_amount_prefixes_title() {
    let cache = cache_with(vec![], vec![]).await;
    let item = BundleItem {
        payload: ItemPayload::Spray(Spray {
            uuid: "uuid-spray".to_string(),
            name: "Salt Shaker".to_string(),
            icon: None,
        }),
        price: 325,
        base_price: 325,
        amount: 2,
    };

    let value = embed_json(&bundle_item_embed(&item, &cache, VP).await);
    assert_eq!(value["title"], json!("2x Salt Shaker"));
}

#[tokio::test]
async fn bundle_items_sort_by_kind_priority() {
    let cache = cache_with(vec![], vec![]).await;
    let entry = |payload| BundleItem {
        payload,
        price: 100,
        base_price: 100,
        amount: 1,
    };
    let data = BundleData {
        price: 7100,
        base_price: 8000,
        expires: 0,
        items: vec![
            entry(ItemPayload::Title(PlayerTitle {
                uuid: "t".to_string(),
                name: "Title".to_string(),
                text: None,
            })),
            entry(ItemPayload::Card(PlayerCard {
                uuid: "c".to_string(),
                name: "Card".to_string(),
                icons: CardIcons {
                    small: None,
                    large: None,
                    wide: None,
                },
            })),
            entry(ItemPayload::Skin(skin("s", "Skin", None, None))),
            entry(ItemPayload::Spray(Spray {
                uuid: "sp".to_string(),
                name: "Spray".to_string(),
                icon: None,
            })),
        ],
    };

    let embeds = bundle_item_embeds(&data, &cache, VP).await;
    let titles: Vec<String> = embeds
        .iter()
        .map(|e| embed_json(e)["title"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(titles, vec!["Skin", "Spray", "Card", "Title"]);
}

#[tokio::test]
async fn bundle_item_skin_gets_primary_color() {
    let cache = cache_with(vec![], vec![]).await;
    let item = BundleItem {
        payload: ItemPayload::Skin(skin("s", "Skin", None, None)),
        price: 1775,
        base_price: 1775,
        amount: 1,
    };

    let value = embed_json(&bundle_item_embed(&item, &cache, VP).await);
    assert_eq!(value["color"], json!(0xFD4553));
}
