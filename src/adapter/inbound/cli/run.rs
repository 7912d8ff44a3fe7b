//! Handler for the `run` command.

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::{config, output};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Execute the run command.
pub async fn execute(args: &ConfigPathArg) -> Result<()> {
    let (config, source) = config::load(args.config.as_deref())?;
    config.require_bot_token()?;

    if !output::is_quiet() || output::is_json() {
        print_startup_config(&config, &source.to_string());
    }

    config.init_logging();
    bootstrap::run(config).await
}

/// Print startup configuration using Astral-style output.
fn print_startup_config(config: &Config, source: &str) {
    let schedule = config.schedule.job_schedule();

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Config", source);
    output::field("Top", config.market.top_n);
    output::field(
        "Updates",
        format!(
            "every {}s, first after {}s",
            schedule.interval().as_secs(),
            schedule.initial_delay().as_secs()
        ),
    );
    if output::verbosity() > 0 {
        output::field("API", &config.market.api_url);
        output::field("Excluded", config.market.excluded_symbols.join(", "));
    }

    match (&config.telegram.channel, config.channel_destination()) {
        (Some(channel), Some(destination)) if channel.auto_post => output::field(
            "Channel",
            format!(
                "{destination} (auto-post every {}s)",
                channel.job_schedule().interval().as_secs()
            ),
        ),
        (_, Some(destination)) => output::field("Channel", destination),
        _ => {}
    }

    if config.telegram.allowed_chats.is_empty() {
        output::warning("No allowed_chats configured - every chat may use the bot");
    }
}
