use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use crate::state::app_state::AppState;
use crate::ui::layout::TEXT_MUTED;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(resp) = &state.response else {
        return;
    };

    if resp.headers.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("  (no headers)", Style::default().fg(TEXT_MUTED))),
            area,
        );
        return;
    }

    let key_w = resp
        .headers
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(0)
        .min(area.width as usize / 2);

    let lines: Vec<Line> = resp
        .headers
        .iter()
        .map(|(key, value)| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", key, width = key_w),
                    Style::default()
                        .fg(Color::Rgb(122, 162, 247))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(value.as_str(), Style::default().fg(Color::Rgb(192, 202, 245))),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}
