//! Gateway latency check.

use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::ShardManagerContainer;

pub fn register() -> CreateCommand {
    CreateCommand::new("ping").description("Check the bot's gateway latency")
}

async fn latency_line(ctx: &Context) -> String {
    let data = ctx.data.read().await;
    let Some(shard_manager) = data.get::<ShardManagerContainer>() else {
        return "Pong!".to_string();
    };
    let runners = shard_manager.runners.lock().await;
    match runners.get(&ctx.shard_id) {
        Some(runner) => {
            let latency = runner.latency.map_or_else(
                || "N/A".to_string(),
                |latency| format!("{} ms", latency.as_millis()),
            );
            format!("Pong! Heartbeat Latency: `{latency}`")
        }
        None => "Pong!".to_string(),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let line = latency_line(ctx).await;
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().content(line),
    );
    interaction.create_response(&ctx.http, response).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let line = latency_line(ctx).await;
    if let Err(why) = msg.channel_id.say(&ctx.http, line).await {
        tracing::warn!(target: "ping", error = ?why, "error sending ping response");
    }
}
