// Request body editor (raw JSON)
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::app_state::AppState;
use crate::state::focus::Focus;
use crate::state::mode::Mode;
use crate::ui::highlight::highlight_text;
use crate::ui::layout::{ACCENT_BLUE, BORDER_INACTIVE, TEXT_MUTED};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Editor;
    let border_color = if focused { ACCENT_BLUE } else { BORDER_INACTIVE };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" JSON ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let body = &state.request.body;
    let editing = focused && state.mode == Mode::Insert;

    if body.text().is_empty() && !editing {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Empty body — press i to write JSON",
                Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
            ))),
            inner,
        );
        return;
    }

    let (row, col) = body.cursor_row_col();
    let visible = inner.height as usize;
    let scroll = if row >= visible { row + 1 - visible } else { 0 };

    let para = Paragraph::new(highlight_text(body.text(), "json")).scroll((scroll as u16, 0));
    frame.render_widget(para, inner);

    if editing {
        frame.set_cursor_position(Position {
            x: inner.x + (col as u16).min(inner.width.saturating_sub(1)),
            y: inner.y + (row - scroll) as u16,
        });
    }
}
