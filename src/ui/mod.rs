pub mod command;
pub mod render;
pub mod terminal;
pub mod theme;

pub use command::{command_to_app_event, parse_command, Command};
pub use terminal::TuiManager;
