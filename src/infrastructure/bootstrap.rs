//! Composition root: builds every component from [`Config`] and runs the bot.

use std::sync::Arc;

use teloxide::Bot;
use tracing::{info, warn};

use crate::adapter::outbound::coingecko::CoinGeckoClient;
use crate::adapter::outbound::telegram::{
    run_listener, verify_token, TelegramControl, TelegramMessenger,
};
use crate::application::{ChatJobRegistry, MarketDataFetcher, MessageFormatter, Relay};
use crate::domain::JobId;
use crate::error::{Error, Result, SendError};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::pidfile::PidFile;
use crate::port::{MarketSource, Messenger};

/// Market source configured for the CoinGecko markets endpoint.
///
/// # Errors
///
/// Fails when the HTTP client cannot be built.
pub fn build_market_source(config: &Config) -> Result<Arc<dyn MarketSource>> {
    Ok(Arc::new(CoinGeckoClient::from_config(&config.market)?))
}

/// Fetcher with the configured exclusions and result size.
#[must_use]
pub fn build_fetcher(config: &Config, source: Arc<dyn MarketSource>) -> MarketDataFetcher {
    MarketDataFetcher::with_selection(
        source,
        config.market.excluded_symbols.clone(),
        config.market.top_n,
    )
}

/// Formatter carrying the configured footer lines.
#[must_use]
pub fn build_formatter(config: &Config) -> MessageFormatter {
    MessageFormatter::with_footer(config.telegram.footer.clone())
}

/// The shared relay pipeline and the job registry driving it.
pub struct RelayContext {
    pub relay: Arc<Relay>,
    pub registry: Arc<ChatJobRegistry>,
}

impl RelayContext {
    #[must_use]
    pub fn build(
        config: &Config,
        source: Arc<dyn MarketSource>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        let relay = Arc::new(Relay::new(
            build_fetcher(config, source),
            build_formatter(config),
            messenger,
        ));
        let registry = Arc::new(ChatJobRegistry::new(Arc::clone(&relay)));
        Self { relay, registry }
    }

    /// Command executor bound to this context.
    #[must_use]
    pub fn control(&self, config: &Config) -> TelegramControl {
        TelegramControl::new(
            Arc::clone(&self.relay),
            Arc::clone(&self.registry),
            config.schedule.job_schedule(),
            config.channel_destination(),
        )
    }

    /// Schedule the channel auto-post job when configured.
    ///
    /// # Errors
    ///
    /// Fails only if the registry has already been shut down.
    pub fn schedule_channel(&self, config: &Config) -> Result<Option<JobId>> {
        let Some(channel) = config.telegram.channel.as_ref().filter(|c| c.auto_post) else {
            return Ok(None);
        };
        let Some(destination) = config.channel_destination() else {
            return Ok(None);
        };

        let job_id = self
            .registry
            .start_or_replace(destination.clone(), channel.job_schedule())?;
        info!(channel = %destination, %job_id, "Channel auto-post enabled");
        Ok(Some(job_id))
    }

    /// Cancel every job. Returns how many were active.
    pub fn shutdown(&self) -> usize {
        self.registry.shutdown()
    }
}

/// Query the market source once; an empty result is only a warning.
pub async fn check_market(fetcher: &MarketDataFetcher) -> bool {
    let result = fetcher.fetch().await;
    if result.is_empty() {
        warn!("Market data check returned no entries; updates will retry on schedule");
        false
    } else {
        info!(entries = result.len(), "Market data check succeeded");
        true
    }
}

/// Run the bot until Ctrl-C.
///
/// # Errors
///
/// Fails when another instance holds the PID file, the bot token is missing,
/// or Telegram rejects it. Unreachable services only log warnings.
pub async fn run(config: Config) -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "Starting coinrelay");

    let _pid_guard = config
        .runtime
        .pid_file
        .as_ref()
        .map(|path| PidFile::acquire(path.clone()))
        .transpose()?;

    let bot = Bot::new(config.require_bot_token()?);
    let bot_username = match verify_token(&bot).await {
        Ok(username) => Some(username).filter(|name| !name.is_empty()),
        Err(SendError::Rejected(reason)) => return Err(Error::CredentialRejected(reason)),
        Err(e) => {
            warn!(error = %e, "Could not reach Telegram to verify the bot token");
            None
        }
    };

    let source = build_market_source(&config)?;
    check_market(&build_fetcher(&config, Arc::clone(&source))).await;

    let messenger: Arc<dyn Messenger> = Arc::new(TelegramMessenger::new(bot.clone()));
    let context = RelayContext::build(&config, source, messenger);
    context.schedule_channel(&config)?;

    run_listener(
        bot,
        context.control(&config),
        config.telegram.allowed_chat_ids(),
        bot_username,
    )
    .await;

    let cancelled = context.shutdown();
    info!(cancelled, "Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Destination;
    use crate::testkit::domain::top_ten;
    use crate::testkit::market::StubMarketSource;
    use crate::testkit::messenger::RecordingMessenger;

    fn context(config: &Config) -> RelayContext {
        RelayContext::build(
            config,
            Arc::new(StubMarketSource::returning(top_ten())),
            Arc::new(RecordingMessenger::new()),
        )
    }

    #[tokio::test]
    async fn channel_job_scheduled_only_with_auto_post() {
        let config = Config::parse_toml("[telegram.channel]\nname = \"@prices\"\n").unwrap();
        let ctx = context(&config);
        assert_eq!(ctx.schedule_channel(&config).unwrap(), None);

        let config = Config::parse_toml(
            "[telegram.channel]\nname = \"@prices\"\nauto_post = true\ninitial_delay_secs = 30\n",
        )
        .unwrap();
        let ctx = context(&config);
        assert!(ctx.schedule_channel(&config).unwrap().is_some());
        assert!(ctx
            .registry
            .is_active(&Destination::channel("@prices")));
        assert_eq!(ctx.shutdown(), 1);
    }

    #[tokio::test]
    async fn configured_selection_reaches_relay() {
        let config = Config::parse_toml("[market]\ntop_n = 3\n").unwrap();
        let ctx = context(&config);

        assert_eq!(ctx.relay.top_n(), 3);
        let text = ctx.relay.snapshot().await;
        assert!(text.starts_with("🚀 Top 3 Cryptocurrencies"));
    }

    #[tokio::test]
    async fn footer_is_rendered() {
        let config = Config::parse_toml("[telegram]\nfooter = [\"💎 Join us\"]\n").unwrap();
        let ctx = context(&config);

        assert!(ctx.relay.snapshot().await.ends_with("💎 Join us"));
    }

    #[tokio::test]
    async fn market_check_reports_empty_result() {
        let fetcher = MarketDataFetcher::new(Arc::new(StubMarketSource::failing()));
        assert!(!check_market(&fetcher).await);

        let fetcher = MarketDataFetcher::new(Arc::new(StubMarketSource::returning(top_ten())));
        assert!(check_market(&fetcher).await);
    }
}
