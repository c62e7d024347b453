use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(resp) = &state.response else {
        return;
    };

    let body = &state.response_body;
    let body_text = match (&state.response_highlight, &resp.error) {
        (Some(text), _) => text.clone(),
        (None, Some(msg)) => Text::from(Line::from(Span::styled(
            format!("  Error: {}", msg),
            Style::default().fg(Color::Red),
        ))),
        (None, None) if body.text().is_empty() => Text::raw("  (empty response body)"),
        (None, None) => Text::raw(body.text().to_string()),
    };

    let para = Paragraph::new(body_text).scroll((body.scroll_offset, 0));
    frame.render_widget(para, area);
}
