//! View models for store data. Everything here is transient and
//! externally sourced; optional fields may simply be absent upstream.

use serde::{Deserialize, Serialize};

/// A weapon skin, keyed in the cache by its base level UUID (the UUID
/// storefront offers reference).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skin {
    pub uuid: String,
    pub name: String,
    pub icon: Option<String>,
    /// Content-tier UUID. Battle-pass skins have none.
    pub rarity: Option<String>,
    /// VP price merged in from store offers; absent until prices are known.
    pub price: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buddy {
    pub uuid: String,
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardIcons {
    pub small: Option<String>,
    pub large: Option<String>,
    pub wide: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub uuid: String,
    pub name: String,
    pub icons: CardIcons,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spray {
    pub uuid: String,
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTitle {
    pub uuid: String,
    pub name: String,
    /// The in-game text the title displays.
    pub text: Option<String>,
}

/// A content tier ("rarity") as exposed by the game-data API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rarity {
    pub uuid: String,
    pub dev_name: String,
    pub rank: u32,
    pub highlight_color: Option<String>,
}

/// A themed collection of cosmetic items sold together.
///
/// `data` is only present for currently-featured bundles; Riot exposes no
/// price/item data for past or unreleased ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub uuid: String,
    pub name: String,
    pub subname: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub data: Option<BundleData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleData {
    pub price: u32,
    pub base_price: u32,
    pub expires: i64,
    pub items: Vec<BundleItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleItem {
    pub payload: ItemPayload,
    pub price: u32,
    pub base_price: u32,
    pub amount: u32,
}

/// Item kinds sold in bundles, ordered for display by [`ItemKind::priority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Skin,
    Buddy,
    Spray,
    Card,
    Title,
    Other,
}

// Riot item-type UUIDs as they appear in storefront payloads.
pub const TYPE_SKIN: &str = "e7c63390-eda7-46e0-bb7a-a6abdacd2433";
pub const TYPE_BUDDY: &str = "dd3bf334-87f3-40bd-b043-682a57a8dc3a";
pub const TYPE_SPRAY: &str = "d5f120f8-ff8c-4aac-92ea-f2b5acbe9475";
pub const TYPE_CARD: &str = "3f296c07-64c3-494c-923b-fe692a4fa1bd";
pub const TYPE_TITLE: &str = "de7caa6b-adf7-4588-bbd1-143831e786c6";

impl ItemKind {
    pub fn from_type_uuid(uuid: &str) -> Self {
        match uuid {
            TYPE_SKIN => Self::Skin,
            TYPE_BUDDY => Self::Buddy,
            TYPE_SPRAY => Self::Spray,
            TYPE_CARD => Self::Card,
            TYPE_TITLE => Self::Title,
            _ => Self::Other,
        }
    }

    /// Fixed display priority: skin > buddy > spray > card > title.
    /// Unknown kinds sort last.
    pub fn priority(self) -> u8 {
        match self {
            Self::Skin => 5,
            Self::Buddy => 4,
            Self::Spray => 3,
            Self::Card => 2,
            Self::Title => 1,
            Self::Other => 0,
        }
    }
}

/// The concrete item carried by a bundle entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemPayload {
    Skin(Skin),
    Buddy(Buddy),
    Card(PlayerCard),
    Spray(Spray),
    Title(PlayerTitle),
    /// An item type this bot does not know how to render yet.
    Other { type_uuid: String },
}

impl ItemPayload {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Skin(_) => ItemKind::Skin,
            Self::Buddy(_) => ItemKind::Buddy,
            Self::Card(_) => ItemKind::Card,
            Self::Spray(_) => ItemKind::Spray,
            Self::Title(_) => ItemKind::Title,
            Self::Other { .. } => ItemKind::Other,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Skin(s) => Some(&s.name),
            Self::Buddy(b) => Some(&b.name),
            Self::Card(c) => Some(&c.name),
            Self::Spray(s) => Some(&s.name),
            Self::Title(t) => Some(&t.name),
            Self::Other { .. } => None,
        }
    }
}

/// Upstream auth response surface. Only the flags the presentation layer
/// branches on; the auth flow itself lives outside this repo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthStatus {
    pub maintenance: bool,
    pub mfa: bool,
    pub method: Option<MfaMethod>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MfaMethod {
    Email,
    Other,
}

/// Daily shop response for one player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopOffers {
    pub success: bool,
    pub offers: Vec<String>,
    pub expires: i64,
    pub auth: AuthStatus,
}

impl ShopOffers {
    pub fn failure(auth: AuthStatus) -> Self {
        Self {
            success: false,
            auth,
            ..Self::default()
        }
    }
}

/// Night market response. `offers` is `None` while no rotation is live.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NightMarket {
    pub success: bool,
    pub offers: Option<Vec<NightMarketOffer>>,
    pub expires: i64,
    pub auth: AuthStatus,
}

impl NightMarket {
    pub fn failure(auth: AuthStatus) -> Self {
        Self {
            success: false,
            auth,
            ..Self::default()
        }
    }
}

/// One discounted night-market offer, flattened from Riot's
/// currency-UUID-keyed cost maps at the provider boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightMarketOffer {
    pub uuid: String,
    pub base_price: u32,
    pub discount_price: u32,
    pub discount_percent: u32,
}

/// Currently-featured bundles for one player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturedBundles {
    pub success: bool,
    pub bundles: Vec<FeaturedBundle>,
    pub auth: AuthStatus,
}

impl FeaturedBundles {
    pub fn failure(auth: AuthStatus) -> Self {
        Self {
            success: false,
            auth,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedBundle {
    pub uuid: String,
    pub price: u32,
    pub base_price: u32,
    pub expires: i64,
    pub items: Vec<BundleItem>,
}

impl FeaturedBundle {
    /// Convert into the bundle-attached form used by the renderers.
    pub fn into_data(self) -> BundleData {
        BundleData {
            price: self.price,
            base_price: self.base_price,
            expires: self.expires,
            items: self.items,
        }
    }
}

/// The player a view is rendered for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValorantUser {
    pub username: String,
}
