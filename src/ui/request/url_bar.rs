use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::app_state::AppState;
use crate::state::focus::Focus;
use crate::state::mode::Mode;
use crate::state::request_state::HttpMethod;
use super::super::layout::{ACCENT_BLUE, BORDER_INACTIVE, SPINNER_FRAMES};

fn method_color(method: &HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Rgb(115, 218, 202),
        HttpMethod::Post => Color::Rgb(158, 206, 106),
        HttpMethod::Put => Color::Rgb(224, 175, 104),
        HttpMethod::Patch => Color::Rgb(187, 154, 247),
        HttpMethod::Delete => Color::Rgb(247, 118, 142),
        HttpMethod::Head => Color::Rgb(122, 162, 247),
        HttpMethod::Options => Color::Rgb(65, 72, 104),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = matches!(state.focus, Focus::UrlBar);
    let border_color = if focused { ACCENT_BLUE } else { BORDER_INACTIVE };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let request = &state.request;

    // [method 9] [│] [url flex] [│] [send 8]
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(8),
        ])
        .split(inner);

    // Method badge
    let mc = method_color(&request.method);
    let method_para = Paragraph::new(Line::from(Span::styled(
        request.method.as_str(),
        Style::default().fg(mc).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(method_para, chunks[0]);

    frame.render_widget(
        Paragraph::new(Span::styled("│", Style::default().fg(BORDER_INACTIVE))),
        chunks[1],
    );

    let url_line = build_url_line(&request.url, request.url_cursor, focused && state.mode == Mode::Insert);
    frame.render_widget(Paragraph::new(url_line), chunks[2]);

    frame.render_widget(
        Paragraph::new(Span::styled("│", Style::default().fg(BORDER_INACTIVE))),
        chunks[3],
    );

    // Loading indicator replaces the send label while anything is in flight.
    if state.is_loading() {
        let idx = (state.spinner_tick as usize) % SPINNER_FRAMES.len();
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{} ..", SPINNER_FRAMES[idx]),
                Style::default().fg(Color::Yellow),
            ))),
            chunks[4],
        );
    } else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Send ↵",
                Style::default().fg(Color::Rgb(158, 206, 106)),
            ))),
            chunks[4],
        );
    }
}

fn build_url_line(url: &str, cursor: usize, editing: bool) -> Line<'static> {
    if url.is_empty() && !editing {
        return Line::from(Span::styled(
            "Enter URL…",
            Style::default().fg(Color::Rgb(65, 72, 104)),
        ));
    }
    if !editing {
        return Line::from(Span::raw(url.to_string()));
    }
    cursor_line(url, cursor)
}

/// A line with a block cursor drawn at byte offset `cursor`.
pub fn cursor_line(text: &str, cursor: usize) -> Line<'static> {
    let cursor = cursor.min(text.len());
    let before = text[..cursor].to_string();
    let (cursor_char, after) = match text[cursor..].chars().next() {
        Some(ch) => (ch.to_string(), text[cursor + ch.len_utf8()..].to_string()),
        None => (" ".to_string(), String::new()),
    };
    Line::from(vec![
        Span::raw(before),
        Span::styled(cursor_char, Style::default().bg(Color::White).fg(Color::Black)),
        Span::raw(after),
    ])
}
