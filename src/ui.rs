//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, ListView, TranscriptState, TranscriptView};
use crate::config::UiSettings;
use crate::controller::{AudioOutput, Icon, RowView};

pub const LOADING_TEXT: &str = "Loading podcasts...";
pub const FAILED_TEXT: &str = "Could not load podcasts. Please try again later.";
pub const EMPTY_TEXT: &str = "No podcasts found. Generate some episodes on the server first!";

pub const TRANSCRIPT_LOADING_TEXT: &str = "Loading transcript...";
pub const TRANSCRIPT_MISSING_TEXT: &str = "No transcript for this episode.";
pub const TRANSCRIPT_NOT_FOUND_TEXT: &str = "Transcript not found.";
pub const TRANSCRIPT_FAILED_TEXT: &str = "Could not load transcript.";

const CONTROLS: [(&str, &str); 5] = [
    ("j/k", "up/down"),
    ("gg/G", "top/bottom"),
    ("enter/space", "play/pause"),
    ("t", "transcript"),
    ("q", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Glyph for `icon` according to the configured theme.
pub fn glyph(icon: Icon, ui: &UiSettings) -> &str {
    match icon {
        Icon::Play => ui.play_glyph.as_str(),
        Icon::Pause => ui.pause_glyph.as_str(),
    }
}

/// Text shown instead of the list, if the view has no rows.
pub fn placeholder(view: ListView) -> Option<&'static str> {
    match view {
        ListView::Loading => Some(LOADING_TEXT),
        ListView::Failed => Some(FAILED_TEXT),
        ListView::Empty => Some(EMPTY_TEXT),
        ListView::Rows => None,
    }
}

/// Body of the transcript popup.
pub fn transcript_text(state: &TranscriptState) -> &str {
    match state {
        TranscriptState::Loading => TRANSCRIPT_LOADING_TEXT,
        TranscriptState::Loaded(text) => text.as_str(),
        TranscriptState::Missing => TRANSCRIPT_MISSING_TEXT,
        TranscriptState::NotFound => TRANSCRIPT_NOT_FOUND_TEXT,
        TranscriptState::Failed => TRANSCRIPT_FAILED_TEXT,
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn draw_transcript(frame: &mut Frame, view: &TranscriptView, area: Rect) {
    let popup_area = centered_rect_sized(area.width.saturating_sub(4), area.height, area);
    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(transcript_text(&view.state))
        .block(
            Block::default()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .borders(Borders::ALL)
                .title(format!(" {} (t closes) ", view.label)),
        )
        .wrap(Wrap { trim: false })
        .scroll((view.scroll, 0));
    frame.render_widget(paragraph, popup_area);
}

fn row_line<'a>(label: &'a str, view: RowView, ui: &'a UiSettings) -> Line<'a> {
    let style = if view.is_playing() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(glyph(view.icon, ui), style),
        Span::raw(" "),
        Span::styled(label, style),
    ])
}

/// Render the entire UI into the provided `frame`.
pub fn draw<A: AudioOutput>(frame: &mut Frame, app: &App<A>, ui: &UiSettings, server: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" podplay ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = {
        let now = match app.now_playing() {
            Some(track) => format!("Playing: {}", track.label),
            None => "Stopped".to_string(),
        };
        [now, format!("Server: {}", server)].join(" • ")
    };
    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Main list, or a placeholder
    let list_block = Block::default().borders(Borders::ALL).title(" podcasts ");
    match placeholder(app.view) {
        Some(text) => {
            let par = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(list_block)
                .wrap(Wrap { trim: true });
            frame.render_widget(par, chunks[2]);
        }
        None => {
            let items: Vec<ListItem> = app
                .rows()
                .iter()
                .map(|row| ListItem::new(row_line(&row.track.label, row.view, ui)))
                .collect();

            let list = List::new(items)
                .block(list_block)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol("> ");
            let mut state = ListState::default();
            if app.has_rows() {
                state.select(Some(app.selected));
            }
            frame.render_stateful_widget(list, chunks[2], &mut state);
        }
    }

    // Overlay the transcript inside the list area so header/status/footer stay visible.
    if let Some(view) = &app.transcript {
        draw_transcript(frame, view, chunks[2]);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
