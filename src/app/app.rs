use super::event::AppEvent;
use super::mode::AppMode;
use super::state::HoverState;
use crate::input::{self, quotes};
use crate::scramble::scramble_text;

pub struct App {
    pub mode: AppMode,
    pub input_text: String,
    pub hover: Option<HoverState>,
    pub command_buffer: String,
    pub status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Editing,
            input_text: String::new(),
            hover: None,
            command_buffer: String::new(),
            status: Some(
                "type some text, Enter scrambles, Esc then : opens the command deck".to_string(),
            ),
        }
    }

    /// Scramble the current input and switch to browsing.
    pub fn scramble(&mut self) {
        let scrambled = scramble_text(&self.input_text);
        self.hover = Some(HoverState::new(&self.input_text, &scrambled));
        self.mode = AppMode::Browsing;
        self.status = None;
    }

    /// Replace the input text and scramble it right away, the way the
    /// original demo's quote buttons chained into the scramble button.
    pub fn set_input(&mut self, text: String) {
        self.input_text = text;
        self.scramble();
    }

    pub fn push_input_char(&mut self, c: char) {
        self.input_text.push(c);
    }

    pub fn pop_input_char(&mut self) {
        self.input_text.pop();
    }

    pub fn begin_editing(&mut self) {
        self.mode = AppMode::Editing;
    }

    pub fn begin_command(&mut self) {
        self.command_buffer.clear();
        self.mode = AppMode::Command;
    }

    pub fn cancel_command(&mut self) {
        self.command_buffer.clear();
        self.mode = if self.hover.is_some() {
            AppMode::Browsing
        } else {
            AppMode::Editing
        };
    }

    pub fn select_next_word(&mut self) {
        if let Some(hover) = &mut self.hover {
            hover.select_next();
        }
    }

    pub fn select_previous_word(&mut self) {
        if let Some(hover) = &mut self.hover {
            hover.select_previous();
        }
    }

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
            AppEvent::Help => {
                self.status = Some(
                    "e edit | Enter scramble | h/l pick word | r rescramble | \
                     :bee :dune :rapture quotes | @file load | @@ clipboard | :q quit"
                        .to_string(),
                );
                self.leave_command_deck();
            }
            AppEvent::LoadFile(path) => match input::load_text_file(&path) {
                Ok(text) => self.set_input(text),
                Err(err) => {
                    self.status = Some(err.to_string());
                    self.leave_command_deck();
                }
            },
            AppEvent::LoadClipboard => match input::clipboard::load() {
                Ok(text) => self.set_input(text),
                Err(err) => {
                    self.status = Some(err.to_string());
                    self.leave_command_deck();
                }
            },
            AppEvent::LoadQuote(name) => match quotes::by_name(&name) {
                Some(text) => self.set_input(text.to_string()),
                None => {
                    self.status = Some(format!("unknown quote: {}", name));
                    self.leave_command_deck();
                }
            },
            AppEvent::InvalidCommand(cmd) => {
                self.status = Some(format!("unknown command: {}", cmd));
                self.leave_command_deck();
            }
        }
    }

    fn leave_command_deck(&mut self) {
        if self.mode == AppMode::Command {
            self.cancel_command();
        }
    }
}
