use serde_json::json;
use teloxide::Bot;

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::{config, output};
use crate::adapter::outbound::telegram::verify_token;
use crate::error::{Error, Result, SendError};

/// Verify the bot token with Telegram's `getMe`.
pub async fn execute_telegram(args: &ConfigPathArg) -> Result<()> {
    let (config, _) = config::load(args.config.as_deref())?;
    let token = config.require_bot_token()?;
    let masked = mask_token(token);

    if !output::is_json() {
        output::section("Telegram Check");
        output::action("Verifying", "bot token");
        output::field("Bot token", &masked);
    }

    let username = match verify_token(&Bot::new(token)).await {
        Ok(username) => username,
        Err(SendError::Rejected(reason)) => return Err(Error::CredentialRejected(reason)),
        Err(e) => return Err(e.into()),
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "check.telegram",
            "masked_token": masked,
            "bot": username,
            "status": "verified",
        }));
        return Ok(());
    }

    output::field("Bot", format!("@{username}"));
    output::action_done("Verified", "bot token");
    output::hint("send /start to the bot to begin receiving updates");
    Ok(())
}

/// Keep the first and last four characters of a token.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
