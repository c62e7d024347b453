use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::{ActiveTab, AppState};
use crate::state::focus::Focus;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let params = format!("Params ({})", state.request.params.serialize().len());
    let headers = format!("Headers ({})", state.request.headers.serialize().len());
    let tabs = [
        (params, ActiveTab::Params),
        (headers, ActiveTab::Headers),
        ("JSON".to_string(), ActiveTab::Body),
    ];

    let tab_focused = state.focus == Focus::TabBar;

    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, (name, tab)) in tabs.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let is_active = state.active_tab == tab;
        let style = if is_active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Rgb(65, 72, 104))
        };
        let label = if is_active && tab_focused { format!("[{name}]") } else { name };
        spans.push(Span::styled(label, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
