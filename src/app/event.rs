/// Application events produced by command deck input.
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    LoadQuote(String),
    Quit,
    Help,
    InvalidCommand(String),
}
