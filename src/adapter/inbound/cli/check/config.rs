use serde_json::json;

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::{config, output};
use crate::error::Result;
use crate::infrastructure::config::settings::BOT_TOKEN_ENV;

/// Validate configuration without starting the bot.
pub fn execute_config(args: &ConfigPathArg) -> Result<()> {
    let (config, source) = config::load(args.config.as_deref())?;
    let schedule = config.schedule.job_schedule();
    let token_present = config.telegram.bot_token.is_some();
    let channel = config.channel_destination().map(|c| c.to_string());

    if output::is_json() {
        output::json_output(json!({
            "command": "check.config",
            "source": source.to_string(),
            "api_url": config.market.api_url,
            "top_n": config.market.top_n,
            "excluded_symbols": config.market.excluded_symbols,
            "initial_delay_secs": schedule.initial_delay().as_secs(),
            "interval_secs": schedule.interval().as_secs(),
            "allowed_chats": config.telegram.allowed_chats,
            "channel": channel,
            "token_present": token_present,
            "status": "valid",
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", &source);
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("API", &config.market.api_url);
    output::field("Top", config.market.top_n);
    output::field("Excluded", config.market.excluded_symbols.join(", "));
    output::field("Interval", format!("{}s", schedule.interval().as_secs()));
    output::field("First", format!("{}s", schedule.initial_delay().as_secs()));
    output::field("Channel", channel.as_deref().unwrap_or("none"));
    if let Some(pid_file) = &config.runtime.pid_file {
        output::field("PID file", pid_file.display());
    }

    if token_present {
        output::success("Telegram bot token detected");
    } else {
        output::warning("Telegram bot token not configured");
        output::field("Missing", BOT_TOKEN_ENV);
    }

    output::success("Configuration check complete");
    Ok(())
}
