use std::time::Duration;

use crate::domain::{Destination, JobSchedule};

/// Welcome text sent in reply to `/start`.
pub(super) fn welcome_text(
    user_name: &str,
    top_n: usize,
    schedule: JobSchedule,
    channel: Option<&Destination>,
) -> String {
    let mut text = format!(
        "👋 Hello {user_name}!\n\n\
         🤖 Crypto Price Bot is now active!\n\n\
         📊 You'll receive top {top_n} crypto prices {}\n\
         🔄 First update in {}...\n\n\
         Commands:\n\
         • /start - Start updates\n\
         • /stop - Stop updates\n\
         • /prices - Get prices now",
        every(schedule.interval()),
        span(schedule.initial_delay()),
    );

    if let Some(channel) = channel {
        text.push_str(&format!("\n• /channel - Post to {channel}"));
    }

    text
}

/// "every minute", "every 2 minutes", "every 90 seconds".
pub(super) fn every(interval: Duration) -> String {
    if interval.as_secs() == 60 {
        "every minute".to_string()
    } else {
        format!("every {}", span(interval))
    }
}

/// Human-readable whole-second duration.
pub(super) fn span(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 && secs % 60 == 0 {
        plural(secs / 60, "minute")
    } else {
        plural(secs, "second")
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
