use crate::{commands, constants, util, AppState};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::Interaction;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::str::FromStr;

enum Command {
    Shop,
    Bundle,
    Bundles,
    NightMarket,
    Help,
    Ping,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shop" | "s" => Ok(Command::Shop),
            "bundle" | "b" => Ok(Command::Bundle),
            "bundles" | "featured" => Ok(Command::Bundles),
            "nightmarket" | "nm" | "market" => Ok(Command::NightMarket),
            "help" | "h" => Ok(Command::Help),
            "ping" => Ok(Command::Ping),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler {
    pub allowed_guild_id: GuildId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = &interaction {
            match command.data.name.as_str() {
                "shop" => commands::shop::run::run_slash(&ctx, command).await,
                "bundle" => commands::bundle::run::run_slash(&ctx, command).await,
                "bundles" => commands::bundles::run::run_slash(&ctx, command).await,
                "nightmarket" => commands::nightmarket::run::run_slash(&ctx, command).await,
                "help" => commands::help::run_slash(&ctx, command).await,
                "ping" => commands::ping::run_slash(&ctx, command).await,
                _ => {}
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.guild_id != Some(self.allowed_guild_id) || msg.author.bot {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        let prefix_string = app_state.prefix.read().await.clone();
        let Some(command_body) = msg.content.strip_prefix(&prefix_string) else {
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        let args_vec: Vec<&str> = args.collect();
        match command {
            Command::Shop => commands::shop::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Bundle => commands::bundle::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::Bundles => commands::bundles::run::run_prefix(&ctx, &msg, args_vec).await,
            Command::NightMarket => {
                commands::nightmarket::run::run_prefix(&ctx, &msg, args_vec).await
            }
            Command::Help => commands::help::run_prefix(&ctx, &msg, args_vec).await,
            Command::Ping => commands::ping::run_prefix(&ctx, &msg).await,
            Command::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(target: "handler", user = %ready.user.name, "connected and ready");

        let commands_to_register = vec![
            commands::shop::register(),
            commands::bundles::register(),
            commands::bundle::register(),
            commands::nightmarket::register(),
            commands::help::register(),
            commands::ping::register(),
        ];
        if let Err(e) = self
            .allowed_guild_id
            .set_commands(&ctx.http, commands_to_register)
            .await
        {
            tracing::error!(target: "handler", error = ?e, "error creating guild commands");
        }

        // Resolve the guild's VP emoji for price lines unless one was
        // already configured.
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        if app_state.price_emoji.read().await.is_some() {
            return;
        }
        match self.allowed_guild_id.emojis(&ctx.http).await {
            Ok(emojis) => {
                if let Some(emoji) = emojis.iter().find(|e| e.name == constants::VP_EMOJI_NAME) {
                    let mention =
                        util::emoji_to_string(&emoji.name, emoji.id.get(), emoji.animated);
                    *app_state.price_emoji.write().await = Some(mention);
                } else {
                    tracing::debug!(
                        target: "handler",
                        name = constants::VP_EMOJI_NAME,
                        "guild has no VP emoji; price lines fall back to text"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(target: "handler", error = ?e, "could not list guild emojis")
            }
        }
    }
}
