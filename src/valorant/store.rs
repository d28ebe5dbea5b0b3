//! Player-store provider seam.
//!
//! Fetching a player's storefront requires the Riot auth flow, which lives
//! outside this repo. Commands only depend on this trait; whatever fills it
//! in signals failure in-band through the `success` flag so the renderers
//! can fall back to the auth-failure message.

use serenity::async_trait;
use serenity::model::id::UserId;

use super::models::{AuthStatus, FeaturedBundles, NightMarket, ShopOffers};

#[async_trait]
pub trait StoreProvider: Send + Sync {
    /// The player's daily shop rotation.
    async fn fetch_shop(&self, user: UserId) -> ShopOffers;

    /// The current night-market rotation, if one is live.
    async fn fetch_night_market(&self, user: UserId) -> NightMarket;

    /// The currently featured bundles.
    async fn fetch_bundles(&self, user: UserId) -> FeaturedBundles;
}

/// Provider used when no storefront backend is wired up: every fetch reports
/// a plain logged-out failure.
pub struct OfflineStore;

#[async_trait]
impl StoreProvider for OfflineStore {
    async fn fetch_shop(&self, _user: UserId) -> ShopOffers {
        ShopOffers::failure(AuthStatus::default())
    }

    async fn fetch_night_market(&self, _user: UserId) -> NightMarket {
        NightMarket::failure(AuthStatus::default())
    }

    async fn fetch_bundles(&self, _user: UserId) -> FeaturedBundles {
        FeaturedBundles::failure(AuthStatus::default())
    }
}
