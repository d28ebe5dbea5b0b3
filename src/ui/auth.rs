//! Auth-failure presentation: picks between the maintenance notice, an MFA
//! prompt and a caller-supplied fallback based on the upstream auth response.

use crate::ui::style::basic_embed;
use crate::ui::EmbedReply;
use crate::util::escape_markdown;
use crate::valorant::models::{AuthStatus, MfaMethod};

pub const MAINTENANCE_MESSAGE: &str =
    "**Valorant servers are currently down for maintenance!** Try again later.";

/// Pick the failure message for an upstream auth response.
///
/// Maintenance wins over MFA, MFA over the fallback. The reply is always
/// ephemeral; auth state is nobody else's business.
pub fn auth_failure_message(auth: &AuthStatus, fallback: &str, hide_email: bool) -> EmbedReply {
    let embed = if auth.maintenance {
        basic_embed(MAINTENANCE_MESSAGE)
    } else if auth.mfa {
        tracing::debug!(target: "auth", method = ?auth.method, "user needs a 2FA code");
        match (auth.method, auth.email.as_deref()) {
            (Some(MfaMethod::Email), Some(email)) if !hide_email => basic_embed(format!(
                "**Riot sent a code to {}!** Use `/2fa` to complete your login.",
                escape_markdown(email)
            )),
            (Some(MfaMethod::Email), _) => basic_embed(
                "**Riot sent a code to your email address!** Use `/2fa` to complete your login.",
            ),
            _ => basic_embed("**You have 2FA enabled!** use `/2fa` to enter your code."),
        }
    } else {
        basic_embed(fallback)
    };
    EmbedReply::ephemeral(embed)
}
