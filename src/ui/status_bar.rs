use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;
use crate::state::mode::Mode;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (mode_label, mode_color) = match state.mode {
        Mode::Normal => ("NORMAL", Color::Rgb(122, 162, 247)), // blue
        Mode::Insert => ("INSERT", Color::Rgb(158, 206, 106)), // green
    };

    let mode_span = Span::styled(
        format!(" {} ", mode_label),
        Style::default()
            .fg(Color::Black)
            .bg(mode_color)
            .add_modifier(Modifier::BOLD),
    );

    let hints = Span::styled(
        "  · Ctrl+R:send · [ ]:method · Tab:focus · a/x:add/remove row · t:resp tab · q:quit",
        Style::default().fg(Color::Rgb(65, 72, 104)),
    );

    let mut spans = vec![mode_span, hints];
    if state.in_flight.len() > 1 {
        spans.push(Span::styled(
            format!("  · {} in flight", state.in_flight.len()),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
