//! Handler for the `prices` command.

use serde_json::{json, Value};

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::{config, output};
use crate::domain::FetchResult;
use crate::error::Result;
use crate::infrastructure::bootstrap;

/// Fetch once and print the rendered summary.
pub async fn execute(args: &ConfigPathArg) -> Result<()> {
    let (config, _) = config::load(args.config.as_deref())?;

    let fetcher = bootstrap::build_fetcher(&config, bootstrap::build_market_source(&config)?);
    let result = fetcher.fetch().await;
    let text = bootstrap::build_formatter(&config).render_now(&result);

    if output::is_json() {
        output::json_output(prices_json(&result, &text)?);
        return Ok(());
    }

    println!("{text}");
    if result.is_empty() {
        output::warning("Market data unavailable");
    }
    Ok(())
}

fn prices_json(result: &FetchResult, text: &str) -> Result<Value> {
    Ok(json!({
        "command": "prices",
        "entries": serde_json::to_value(result)?,
        "message": text,
    }))
}
