//! Shared embed styling, the per-item embed builders, and the
//! auth-failure message selector.

pub mod auth;
pub mod items;
pub mod style;

use serenity::builder::{CreateEmbed, CreateInteractionResponseMessage, CreateMessage};

/// A fully rendered view: one or more embeds plus the ephemeral flag.
#[derive(Debug, Clone)]
pub struct EmbedReply {
    pub embeds: Vec<CreateEmbed>,
    pub ephemeral: bool,
}

impl EmbedReply {
    pub fn public(embeds: Vec<CreateEmbed>) -> Self {
        Self {
            embeds,
            ephemeral: false,
        }
    }

    pub fn ephemeral(embed: CreateEmbed) -> Self {
        Self {
            embeds: vec![embed],
            ephemeral: true,
        }
    }

    pub fn interaction_response(&self) -> CreateInteractionResponseMessage {
        CreateInteractionResponseMessage::new()
            .embeds(self.embeds.clone())
            .ephemeral(self.ephemeral)
    }

    pub fn message(&self) -> CreateMessage {
        CreateMessage::new().embeds(self.embeds.clone())
    }
}
