//! Telegram delivery and command handling.
//!
//! Provides the [`TelegramMessenger`] used by every relay job and the command
//! listener that lets chats start, stop and request updates.

mod auth;
mod command;

pub mod control;
pub mod listener;
pub mod messenger;

pub use auth::{dispatch_for_message, Dispatch};
pub use command::{bot_commands, command_help, parse_command, CommandParseError, RelayCommand};
pub use control::TelegramControl;
pub use listener::{register_bot_commands, run_listener, verify_token};
pub use messenger::TelegramMessenger;
