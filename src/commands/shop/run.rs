//! Handles the command logic for `/shop` and its prefix form.

use serenity::builder::{CreateCommand, CreateInteractionResponse};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

use super::ui::render_offers;
use crate::valorant::models::ValorantUser;
use crate::valorant::store::StoreProvider;
use crate::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("shop").description("Show your daily item shop")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let shop = app_state.store.fetch_shop(interaction.user.id).await;
    let user = ValorantUser {
        username: interaction.user.name.clone(),
    };
    let emoji = app_state.price_label().await;
    let reply = render_offers(&shop, &user, &app_state.game_data, &emoji).await;
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(reply.interaction_response()),
        )
        .await
        .ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let shop = app_state.store.fetch_shop(msg.author.id).await;
    let user = ValorantUser {
        username: msg.author.name.clone(),
    };
    let emoji = app_state.price_label().await;
    let reply = render_offers(&shop, &user, &app_state.game_data, &emoji).await;
    msg.channel_id
        .send_message(&ctx.http, reply.message().reference_message(msg))
        .await
        .ok();
}
