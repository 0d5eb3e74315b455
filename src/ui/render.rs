use crate::app::AppMode;
use crate::ui::theme::colors;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Render a pane of words with one of them optionally highlighted.
///
/// Words are joined by single spaces, mirroring the split that produced
/// them, so what the user sees is exactly the scrambler's output string.
pub fn render_word_pane(words: &[String], selected: Option<usize>) -> Paragraph<'static> {
    let word_style = Style::default().fg(colors::text());
    let selected_style = Style::default()
        .fg(colors::highlight())
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    for (index, word) in words.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" ", word_style));
        }
        let style = if selected == Some(index) {
            selected_style
        } else {
            word_style
        };
        spans.push(Span::styled(word.clone(), style));
    }

    Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(colors::background()))
}

/// Render raw input text while the user is still typing it.
pub fn render_editing_pane(text: &str) -> Paragraph<'static> {
    Paragraph::new(text.to_string())
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(colors::text()).bg(colors::background()))
}

pub fn render_status_line(mode: AppMode, status: Option<&str>) -> Line<'static> {
    let mode_label = match mode {
        AppMode::Editing => "EDIT",
        AppMode::Browsing => "BROWSE",
        AppMode::Command => "COMMAND",
        AppMode::Quit => "QUIT",
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", mode_label),
        Style::default()
            .fg(colors::background())
            .bg(colors::highlight()),
    )];

    if let Some(message) = status {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(colors::dimmed()),
        ));
    }

    Line::from(spans)
}

pub fn render_command_deck(buffer: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(">", Style::default().fg(colors::highlight())),
        Span::styled(buffer.to_string(), Style::default().fg(colors::text())),
    ])
}
