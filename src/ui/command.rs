//! Command deck parsing.
//!
//! Supported input:
//! - `:q` or `:quit` → quit
//! - `:h` or `:help` → key summary in the status line
//! - `:bee`, `:dune`, `:rapture` → load a canned quote and scramble it
//! - `@filename` → load a text file
//! - `@@` → load the clipboard

use crate::app::AppEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    Quote(String),
    Unknown(String),
}

/// Parse command deck input into a Command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "bee" | "dune" | "rapture" => Command::Quote(cmd.to_string()),
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Translate a parsed command into an AppEvent for the App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Quote(name) => AppEvent::LoadQuote(name),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
