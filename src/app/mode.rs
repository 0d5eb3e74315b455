#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Typing into the input pane.
    Editing,
    /// Walking the scrambled output word by word.
    Browsing,
    /// Command deck open, collecting a command line.
    Command,
    Quit,
}
