pub mod tab_bar;
pub mod body_viewer;
pub mod headers_viewer;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;
use super::layout::BORDER_INACTIVE;

/// Status, reason, elapsed time, size and arrival time on one line above
/// the response tabs.
pub fn render_meta(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.response {
        None => Line::from(Span::styled("─", Style::default().fg(BORDER_INACTIVE))),
        Some(resp) => {
            let status_color = match resp.status_code {
                Some(200..=299) => Color::Rgb(158, 206, 106), // green
                Some(300..=399) => Color::Rgb(122, 162, 247), // blue
                Some(400..=499) => Color::Rgb(224, 175, 104), // orange/yellow
                Some(500..=599) => Color::Rgb(247, 118, 142), // red
                _ => Color::White,
            };
            let reason = if resp.reason.is_empty() {
                String::new()
            } else {
                format!(" {}", resp.reason)
            };
            Line::from(vec![
                Span::styled(
                    format!(" {}", resp.status),
                    Style::default()
                        .fg(status_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(reason, Style::default().fg(status_color)),
                Span::styled(
                    format!("  ·  {}  ·  {}  ·  {}", resp.elapsed, resp.size, resp.received),
                    Style::default().fg(Color::Rgb(65, 72, 104)),
                ),
            ])
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
