//! Handles the command logic for `/bundle <name>` and its prefix form.

use serenity::builder::{CreateCommand, CreateCommandOption, CreateInteractionResponse};
use serenity::model::application::{CommandDataOptionValue, CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

use super::ui::{bundle_not_found, render_bundle};
use crate::ui::EmbedReply;
use crate::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("bundle")
        .description("Inspect a bundle by name")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "name",
                "The name of the bundle to look up.",
            )
            .required(true),
        )
}

fn name_option(interaction: &CommandInteraction) -> Option<String> {
    interaction
        .data
        .options
        .first()
        .and_then(|opt| match &opt.value {
            CommandDataOptionValue::String(s) => Some(s.clone()),
            _ => None,
        })
}

async fn render_for_query(app_state: &AppState, query: &str) -> EmbedReply {
    match app_state.game_data.find_bundle_by_name(query).await {
        Some(bundle) => {
            let emoji = app_state.price_label().await;
            render_bundle(&bundle, &app_state.game_data, &emoji, true).await
        }
        None => bundle_not_found(query),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(query) = name_option(interaction) else {
        return;
    };
    let reply = render_for_query(&app_state, &query).await;
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(reply.interaction_response()),
        )
        .await
        .ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let query = args.join(" ");
    if query.is_empty() {
        msg.reply(&ctx.http, "Usage: `bundle <name>`").await.ok();
        return;
    }
    let reply = render_for_query(&app_state, &query).await;
    msg.channel_id
        .send_message(&ctx.http, reply.message().reference_message(msg))
        .await
        .ok();
}
