//! Central embed style constants and helpers.
pub const COLOR_PRIMARY: u32 = 0xFD4553; // Valorant red
pub const COLOR_SECONDARY: u32 = 0x0F1923; // dark navy
pub const COLOR_BUNDLE: u32 = 0xEAEEB2; // pale bundle banner tint

use serenity::builder::CreateEmbed;

/// Description-only embed in the primary accent color.
pub fn basic_embed(content: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new().description(content).color(COLOR_PRIMARY)
}

/// Description-only embed in the secondary color.
pub fn secondary_embed(content: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new().description(content).color(COLOR_SECONDARY)
}
