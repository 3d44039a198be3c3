//! Form Drawing
//!
//! Draws a [`FormView`] into a ratatui frame. Drawing reads the view and
//! nothing else, so the App can redraw after every state change without
//! tracking what changed.
//!
//! ```text
//! Indsend note
//! ┌Note──────────────────────────────────────┐
//! │Skriv en kort note der skal analyseres    │
//! └──────────────────────────────────────────┘
//! [ Send til analyse ]
//! <error>
//! ┌Sidste resultat───────────────────────────┐
//! │2023-11-14 22:13:20                       │
//! │Hello world                               │
//! │ neutral                                  │
//! │Score: 42%                                │
//! └──────────────────────────────────────────┘
//!  http://127.0.0.1:8000 | online | Enter send ...
//! ```

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use notes_core::view::{NOTE_LABEL, NOTE_PLACEHOLDER, RESULT_HEADING, TITLE};
use notes_core::{FormView, ResultView};

use crate::theme;
use crate::widgets::NoteField;

/// Visible rows of the note field
pub const NOTE_ROWS: u16 = 6;

const KEY_HINTS: &str = "Enter send | Alt+Enter new line | Ctrl+U clear | Esc quit";

/// Reachability of the analysis service, as last observed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendHealth {
    /// Not probed yet
    Unknown,
    /// Last probe or request reached the service
    Online,
    /// Last probe or request could not connect
    Offline,
}

impl BackendHealth {
    /// Status bar text
    pub fn description(self) -> &'static str {
        match self {
            Self::Unknown => "checking...",
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Unknown => theme::dim(),
            Self::Online => Style::default().fg(theme::SUCCESS_GREEN),
            Self::Offline => theme::error(),
        }
    }
}

/// Contents of the bottom status bar
#[derive(Clone, Debug)]
pub struct StatusLine<'a> {
    /// Analysis service in use
    pub base_url: &'a str,
    /// Last observed reachability
    pub health: BackendHealth,
}

/// Draw the whole form
pub fn draw(frame: &mut Frame, view: &FormView, status: &StatusLine<'_>) {
    let [title_area, note_area, button_area, error_area, result_area, status_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(NOTE_ROWS + 2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    frame.render_widget(Paragraph::new(Span::styled(TITLE, theme::title())), title_area);
    draw_note(frame, view, note_area);

    let button = Span::styled(
        format!("[ {} ]", view.submit_label),
        theme::button(view.submit_enabled),
    );
    frame.render_widget(Paragraph::new(button), button_area);

    if let Some(ref error) = view.error {
        frame.render_widget(Paragraph::new(error.as_str()).style(theme::error()), error_area);
    }

    if let Some(ref card) = view.result {
        draw_result(frame, card, result_area);
    }

    draw_status(frame, status, status_area);
}

fn draw_note(frame: &mut Frame, view: &FormView, area: Rect) {
    let block = Block::bordered()
        .title(NOTE_LABEL)
        .border_style(theme::dim());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field = NoteField::new(&view.text)
        .style(Style::default().fg(theme::INPUT_GREEN))
        .placeholder(NOTE_PLACEHOLDER, theme::dim())
        .cursor(!view.loading);
    frame.render_widget(field, inner);
}

/// Lines of the result card, top to bottom
pub fn result_lines(card: &ResultView) -> Vec<Line<'_>> {
    let mut lines = vec![Line::styled(card.timestamp.as_str(), theme::dim())];
    lines.extend(card.text.split('\n').map(Line::raw));

    if card.has_labels() {
        lines.push(tag_line(&card.labels));
    }
    if let Some(ref summary) = card.summary {
        lines.push(Line::styled(
            summary.as_str(),
            theme::dim().add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::styled(
        card.score_line(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    lines
}

/// One chip per label, separated by a space
pub fn tag_line(labels: &[String]) -> Line<'_> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {label} "), theme::chip()));
    }
    Line::from(spans)
}

fn draw_result(frame: &mut Frame, card: &ResultView, area: Rect) {
    let block = Block::bordered()
        .title(Span::styled(RESULT_HEADING, theme::title()))
        .border_style(theme::dim());
    let card = Paragraph::new(result_lines(card))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(card, area);
}

fn draw_status(frame: &mut Frame, status: &StatusLine<'_>, area: Rect) {
    let line = Line::from(vec![
        Span::styled(format!(" {} | ", status.base_url), theme::dim()),
        Span::styled(status.health.description(), status.health.style()),
        Span::styled(format!(" | {KEY_HINTS}"), theme::dim()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
