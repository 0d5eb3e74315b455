use crate::app::{App, AppMode};
use crate::ui::command::{command_to_app_event, parse_command};
use crate::ui::render::{
    render_command_deck, render_editing_pane, render_status_line, render_word_pane,
};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position},
    widgets::Block,
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::Once;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

static PANIC_HOOK_SET: Once = Once::new();

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        set_panic_hook();

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager { terminal })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let mut last_tick = Instant::now();
        let render_tick = Duration::from_millis(1000 / 60);
        let poll_timeout = Duration::from_millis(50);

        self.render_frame(app)?;

        loop {
            if app.mode == AppMode::Quit {
                return Ok(());
            }

            match event::poll(poll_timeout) {
                Ok(true) => {
                    if let Event::Key(key) = event::read()? {
                        Self::handle_key(app, key.code);
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    // Propagate I/O errors instead of ignoring them
                    return Err(e);
                }
            }

            if last_tick.elapsed() >= render_tick {
                self.render_frame(app)?;
                last_tick = Instant::now();
            }
        }
    }

    fn handle_key(app: &mut App, code: KeyCode) {
        match app.mode {
            AppMode::Editing => match code {
                KeyCode::Char(c) => app.push_input_char(c),
                KeyCode::Backspace => app.pop_input_char(),
                KeyCode::Enter => app.scramble(),
                // Browsing handles quit and the command deck even before
                // anything has been scrambled.
                KeyCode::Esc => app.mode = AppMode::Browsing,
                _ => {}
            },
            AppMode::Browsing => match code {
                KeyCode::Char('e') => app.begin_editing(),
                KeyCode::Char('r') => app.scramble(),
                KeyCode::Char(':') => app.begin_command(),
                KeyCode::Char('q') => app.mode = AppMode::Quit,
                KeyCode::Char('h') | KeyCode::Left => app.select_previous_word(),
                KeyCode::Char('l') | KeyCode::Right => app.select_next_word(),
                _ => {}
            },
            AppMode::Command => match code {
                KeyCode::Char(c) => app.command_buffer.push(c),
                KeyCode::Backspace => {
                    app.command_buffer.pop();
                }
                KeyCode::Esc => app.cancel_command(),
                KeyCode::Enter => {
                    let command = parse_command(&app.command_buffer);
                    app.command_buffer.clear();
                    // Every event path leaves Command mode: loads scramble
                    // into Browsing, everything else falls back through
                    // cancel_command.
                    app.apply_event(command_to_app_event(command));
                }
                _ => {}
            },
            AppMode::Quit => {}
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(50),
                    Constraint::Percentage(50),
                    Constraint::Length(1),
                ])
                .split(area);

            let selected = app.hover.as_ref().map(|h| h.selected);

            let original_pane = match &app.hover {
                Some(hover) if app.mode != AppMode::Editing => {
                    render_word_pane(&hover.original, selected)
                }
                _ => render_editing_pane(&app.input_text),
            };
            frame.render_widget(
                original_pane.block(Block::bordered().title("original")),
                chunks[0],
            );

            let scrambled_pane = match &app.hover {
                Some(hover) => render_word_pane(&hover.scrambled, selected),
                None => render_editing_pane(""),
            };
            frame.render_widget(
                scrambled_pane.block(Block::bordered().title("scrambled")),
                chunks[1],
            );

            if app.mode == AppMode::Command {
                let deck = render_command_deck(&app.command_buffer);
                frame.render_widget(deck, chunks[2]);
                let cursor_x =
                    chunks[2].x + 1 + UnicodeWidthStr::width(app.command_buffer.as_str()) as u16;
                frame.set_cursor_position(Position::new(cursor_x, chunks[2].y));
            } else {
                let status = render_status_line(app.mode, app.status.as_deref());
                frame.render_widget(status, chunks[2]);
            }
        })?;

        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        std::panic::set_hook(Box::new(|panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            eprintln!("Panic: {}", panic_info);
            std::process::exit(1);
        }));
    });
}
