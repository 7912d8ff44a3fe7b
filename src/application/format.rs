//! Message formatting for market summaries.

use chrono::{Local, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{FetchResult, MarketEntry};

/// Text sent when a fetch produced no data.
pub const UNAVAILABLE_MESSAGE: &str =
    "❌ Unable to fetch cryptocurrency data. Please try again later.";

/// Renders a [`FetchResult`] as a plain-text summary.
///
/// Rendering is pure: the output depends only on the entries, the render
/// time, and the configured footer.
#[derive(Debug, Clone, Default)]
pub struct MessageFormatter {
    footer: Vec<String>,
}

impl MessageFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `footer` lines after the timestamp (e.g. a channel promotion).
    #[must_use]
    pub fn with_footer(footer: Vec<String>) -> Self {
        Self { footer }
    }

    /// Render using the local wall clock.
    #[must_use]
    pub fn render_now(&self, entries: &FetchResult) -> String {
        self.render(entries, Local::now().time())
    }

    /// Render with an explicit render time.
    #[must_use]
    pub fn render(&self, entries: &FetchResult, at: NaiveTime) -> String {
        if entries.is_empty() {
            return UNAVAILABLE_MESSAGE.to_string();
        }

        let mut message = format!("🚀 Top {} Cryptocurrencies 🚀\n\n", entries.len());

        for (i, entry) in entries.iter().enumerate() {
            message.push_str(&format_entry(i + 1, entry));
        }

        message.push_str(&format!("🔄 Updated at {}", at.format("%H:%M:%S")));

        if !self.footer.is_empty() {
            message.push('\n');
            for line in &self.footer {
                message.push('\n');
                message.push_str(line);
            }
        }

        message
    }
}

fn format_entry(rank: usize, entry: &MarketEntry) -> String {
    format!(
        "{}. {} ({})\n   💰 {}\n   📊 {}\n\n",
        rank,
        entry.name(),
        entry.symbol(),
        format_price(entry.current_price()),
        format_change(entry.day_change_percent())
    )
}

/// Format a USD price.
///
/// Prices of at least one dollar get two decimals and thousands separators;
/// sub-dollar prices get six decimals so small assets stay readable.
#[must_use]
pub fn format_price(price: Decimal) -> String {
    if price >= Decimal::ONE {
        let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("${}", group_thousands(&format!("{rounded:.2}")))
    } else {
        let rounded = price.round_dp_with_strategy(6, RoundingStrategy::MidpointAwayFromZero);
        format!("${rounded:.6}")
    }
}

/// Format a 24h change with a direction marker and explicit sign.
#[must_use]
pub fn format_change(change: Decimal) -> String {
    let rounded = change.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    if change > Decimal::ZERO {
        format!("📈 +{rounded:.2}%")
    } else if change < Decimal::ZERO {
        format!("📉 {rounded:.2}%")
    } else {
        format!("➡️ {rounded:.2}%")
    }
}

/// Insert `,` every three digits of the integer part.
fn group_thousands(number: &str) -> String {
    let (integer, fraction) = number.split_once('.').unwrap_or((number, ""));
    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);

    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}
