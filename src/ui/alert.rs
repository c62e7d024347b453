use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::layout::{BG, TEXT_MUTED};
use crate::ui::popup::centered_box;

const TEXT_PRIMARY: Color = Color::Rgb(192, 202, 245);
const STATUS_ERR: Color = Color::Rgb(247, 118, 142);

/// Blocking message box. Only Enter/Esc get through while it is up.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let popup_area = centered_box(50, 6, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERR))
        .title(" Alert ")
        .style(Style::default().bg(BG));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 3 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(message, Style::default().fg(TEXT_PRIMARY))))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(TEXT_MUTED),
        ))),
        chunks[1],
    );

    let hint = Line::from(vec![
        Span::styled("Enter/Esc", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" OK", Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().add_modifier(Modifier::DIM)),
        chunks[2],
    );
}
