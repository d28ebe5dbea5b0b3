//! Implements the `/help` command: one embed listing every command.

use serenity::builder::{
    CreateCommand, CreateEmbed, CreateEmbedFooter, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::ui::style::COLOR_SECONDARY;

const COMMANDS: &[(&str, &str)] = &[
    ("shop", "Show your daily item shop."),
    ("bundles", "Show the currently featured bundles."),
    ("bundle", "Inspect a bundle by name."),
    ("nightmarket", "Show your night market, if one is live."),
    ("help", "List available commands."),
    ("ping", "Check the bot's gateway latency."),
];

/// Every command name listed in the help embed, in display order.
pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|(name, _)| *name).collect()
}

pub fn build_help_embed() -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Commands")
        .description("Check your Valorant shop, bundles and night market right from Discord.")
        .color(COLOR_SECONDARY)
        .footer(CreateEmbedFooter::new(
            "Commands also work with the message prefix.",
        ));
    for (name, description) in COMMANDS {
        embed = embed.field(format!("/{name}"), *description, false);
    }
    embed
}

pub fn register() -> CreateCommand {
    CreateCommand::new("help").description("List available commands")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(build_help_embed())
            .ephemeral(true),
    );
    interaction.create_response(&ctx.http, response).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let builder = CreateMessage::new()
        .embed(build_help_embed())
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
