use std::env;
use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use tokio::sync::RwLock;

use valshop_bot::valorant::api;
use valshop_bot::valorant::cache::GameDataCache;
use valshop_bot::valorant::store::OfflineStore;
use valshop_bot::{handler, AppState, ShardManagerContainer};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let server_id = env::var("SERVER_ID")
        .expect("Expected SERVER_ID in the environment.")
        .parse::<u64>()
        .expect("SERVER_ID must be a valid number.");
    let allowed_guild_id = GuildId::new(server_id);

    let game_data = Arc::new(GameDataCache::new());
    let http = reqwest::Client::new();
    match api::fetch_game_data(&http).await {
        Ok(data) => game_data.load(data.skins, data.bundles, data.rarities).await,
        Err(e) => tracing::warn!(
            target: "cache",
            error = %e,
            "game data load failed; starting with an empty cache"
        ),
    }

    let app_state = Arc::new(AppState {
        game_data,
        store: Arc::new(OfflineStore),
        prefix: Arc::new(RwLock::new(
            env::var("PREFIX").unwrap_or_else(|_| "!".to_string()),
        )),
        price_emoji: Arc::new(RwLock::new(env::var("VP_EMOJI").ok())),
    });

    // Interactions arrive with GUILDS by default; the rest is for the
    // prefix commands.
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(handler::Handler { allowed_guild_id })
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        tracing::error!(target: "main", error = ?why, "client error");
    }
}
