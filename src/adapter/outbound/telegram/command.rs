//! Telegram command parsing.

/// Supported Telegram commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayCommand {
    Start,
    Stop,
    Prices,
    Channel,
    Help,
}

impl RelayCommand {
    /// Command name without the leading slash.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Prices => "prices",
            Self::Channel => "channel",
            Self::Help => "help",
        }
    }
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// Arguments after the command are ignored.
pub fn parse_command(text: &str) -> Result<RelayCommand, CommandParseError> {
    let Some(raw_command) = text.split_whitespace().next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(RelayCommand::Start),
        "/stop" => Ok(RelayCommand::Stop),
        "/prices" => Ok(RelayCommand::Prices),
        "/channel" => Ok(RelayCommand::Channel),
        "/help" => Ok(RelayCommand::Help),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Bot username a command is addressed to (`/stop@name` gives `name`).
#[must_use]
pub fn mentioned_bot(text: &str) -> Option<&str> {
    let raw_command = text.split_whitespace().next()?;
    if !raw_command.starts_with('/') {
        return None;
    }
    raw_command.split_once('@').map(|(_, bot)| bot)
}

/// Help text returned by `/help` and after invalid commands.
#[must_use]
pub const fn command_help() -> &'static str {
    "📋 Commands\n\n\
    /start - ▶️ Start periodic price updates\n\
    /stop - 🛑 Stop updates\n\
    /prices - 💰 Get prices now\n\
    /channel - 📢 Post an update to the channel\n\
    /help - 📋 Show all commands"
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        (RelayCommand::Start.name(), "Start periodic price updates"),
        (RelayCommand::Stop.name(), "Stop updates"),
        (RelayCommand::Prices.name(), "Get prices now"),
        (RelayCommand::Channel.name(), "Post an update to the channel"),
        (RelayCommand::Help.name(), "Show all commands"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Basic command parsing
    // -------------------------------------------------------------------------

    #[test]
    fn parse_all_commands() {
        assert_eq!(parse_command("/start").unwrap(), RelayCommand::Start);
        assert_eq!(parse_command("/stop").unwrap(), RelayCommand::Stop);
        assert_eq!(parse_command("/prices").unwrap(), RelayCommand::Prices);
        assert_eq!(parse_command("/channel").unwrap(), RelayCommand::Channel);
        assert_eq!(parse_command("/help").unwrap(), RelayCommand::Help);
    }

    #[test]
    fn parse_command_with_bot_mention() {
        assert_eq!(
            parse_command("/prices@coinrelay_bot").unwrap(),
            RelayCommand::Prices
        );
    }

    #[test]
    fn mentioned_bot_extracts_suffix() {
        assert_eq!(mentioned_bot("/stop@OtherBot now"), Some("OtherBot"));
        assert_eq!(mentioned_bot("/stop"), None);
        assert_eq!(mentioned_bot("mail me@example.com"), None);
        assert_eq!(mentioned_bot(""), None);
    }

    #[test]
    fn parse_ignores_arguments() {
        assert_eq!(parse_command("/start now please").unwrap(), RelayCommand::Start);
    }

    #[test]
    fn parse_command_with_surrounding_whitespace() {
        assert_eq!(parse_command("  /stop  ").unwrap(), RelayCommand::Stop);
        assert_eq!(parse_command("\t/prices\n").unwrap(), RelayCommand::Prices);
    }

    // -------------------------------------------------------------------------
    // Non-commands and unknown commands
    // -------------------------------------------------------------------------

    #[test]
    fn parse_not_a_command() {
        assert_eq!(parse_command("hello"), Err(CommandParseError::NotACommand));
        assert_eq!(parse_command(""), Err(CommandParseError::NotACommand));
        assert_eq!(parse_command("   "), Err(CommandParseError::NotACommand));
        assert_eq!(parse_command("start"), Err(CommandParseError::NotACommand));
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(
            parse_command("/status"),
            Err(CommandParseError::UnknownCommand("/status".to_string()))
        );
        assert_eq!(
            parse_command("/"),
            Err(CommandParseError::UnknownCommand("/".to_string()))
        );
    }

    #[test]
    fn parse_command_case_sensitivity() {
        assert!(matches!(
            parse_command("/START"),
            Err(CommandParseError::UnknownCommand(_))
        ));
    }

    // -------------------------------------------------------------------------
    // Help and menu registration
    // -------------------------------------------------------------------------

    #[test]
    fn bot_commands_cover_every_command() {
        let names: Vec<&str> = bot_commands().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["start", "stop", "prices", "channel", "help"]);
        assert!(bot_commands().iter().all(|(_, desc)| !desc.is_empty()));
    }

    #[test]
    fn command_help_lists_every_command() {
        let help = command_help();
        for (name, _) in bot_commands() {
            assert!(help.contains(&format!("/{name}")), "missing /{name}");
        }
    }

    #[test]
    fn command_parse_error_display() {
        assert_eq!(
            CommandParseError::NotACommand.to_string(),
            "message is not a command"
        );
        assert_eq!(
            CommandParseError::UnknownCommand("/foo".into()).to_string(),
            "unknown command `/foo`"
        );
    }
}
