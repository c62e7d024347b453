use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::action::ListKind;
use crate::state::app_state::AppState;
use crate::state::focus::Focus;
use crate::state::kv_list::Column;
use crate::state::mode::Mode;
use crate::ui::layout::{ACCENT_BLUE, BORDER_INACTIVE, TEXT_MUTED};

const TEXT_CELL: Color = Color::Rgb(169, 177, 214);

/// Table editor shared by the query-param and header lists.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, kind: ListKind) {
    if area.width < 4 || area.height < 2 {
        return;
    }

    let focused = state.focus == Focus::Editor;
    let border_color = if focused { ACCENT_BLUE } else { BORDER_INACTIVE };
    let title = match kind {
        ListKind::Params => " Query Params ",
        ListKind::Headers => " Headers ",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height < 2 {
        return;
    }

    // Reserve bottom line for hint bar
    let hint_area = Rect { y: inner.y + inner.height - 1, height: 1, ..inner };
    let body_area = Rect { height: inner.height - 1, ..inner };

    let hint_spans = vec![
        Span::styled("a", Style::default().fg(TEXT_CELL)),
        Span::styled(" add  ", Style::default().fg(Color::Rgb(100, 110, 140))),
        Span::styled("x", Style::default().fg(TEXT_CELL)),
        Span::styled(" remove  ", Style::default().fg(Color::Rgb(100, 110, 140))),
        Span::styled("←→", Style::default().fg(TEXT_CELL)),
        Span::styled(" col  ", Style::default().fg(Color::Rgb(100, 110, 140))),
        Span::styled("i", Style::default().fg(TEXT_CELL)),
        Span::styled(" edit", Style::default().fg(Color::Rgb(100, 110, 140))),
    ];
    let hint = Paragraph::new(Line::from(hint_spans))
        .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(hint, hint_area);

    let list = state.list(kind);

    if list.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "Press a to add a row",
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(placeholder, body_area);
        return;
    }

    // Column layout: [marker=2] [key=rest/2] [sep=1] [value=rest-key]
    let marker_w: u16 = 2;
    let sep_w: u16 = 1;
    let rest = body_area.width.saturating_sub(marker_w + sep_w);
    let key_w = rest / 2;
    let val_w = rest - key_w;

    let sel_row = list.selected_index();

    // Keep the selected row on screen.
    let visible = body_area.height as usize;
    let first = match sel_row {
        Some(i) if i >= visible => i + 1 - visible,
        _ => 0,
    };

    for (i, pair) in list.rows().iter().enumerate().skip(first) {
        let row_y = body_area.y + (i - first) as u16;
        if row_y >= body_area.y + body_area.height {
            break;
        }

        let is_selected = Some(i) == sel_row;
        let row_bg = if is_selected { Color::Rgb(41, 45, 62) } else { Color::Reset };
        let row_style = Style::default().bg(row_bg);

        let marker = if is_selected { "▸ " } else { "  " };
        frame.render_widget(
            Paragraph::new(Span::styled(marker, Style::default().fg(ACCENT_BLUE).bg(row_bg))),
            Rect { x: body_area.x, y: row_y, width: marker_w, height: 1 },
        );

        // Empty keys are kept but dimmed; they are not sent.
        let key_text: Span = if pair.key.is_empty() {
            Span::styled("key", Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM))
        } else {
            let active = focused && is_selected && list.column == Column::Key;
            let fg = if active { Color::White } else { TEXT_CELL };
            Span::styled(pair.key.as_str(), Style::default().fg(fg))
        };
        frame.render_widget(
            Paragraph::new(Line::from(key_text)).style(row_style),
            Rect { x: body_area.x + marker_w, y: row_y, width: key_w, height: 1 },
        );

        frame.render_widget(
            Paragraph::new(Span::styled("│", Style::default().fg(BORDER_INACTIVE).bg(row_bg))),
            Rect { x: body_area.x + marker_w + key_w, y: row_y, width: sep_w, height: 1 },
        );

        let val_active = focused && is_selected && list.column == Column::Value;
        let val_fg = if val_active { Color::White } else { TEXT_CELL };
        frame.render_widget(
            Paragraph::new(Span::styled(pair.value.as_str(), Style::default().fg(val_fg)))
                .style(row_style),
            Rect {
                x: body_area.x + marker_w + key_w + sep_w,
                y: row_y,
                width: val_w,
                height: 1,
            },
        );
    }

    // Cursor in Insert mode
    if focused && state.mode == Mode::Insert {
        if let (Some(row), Some(text)) = (sel_row, list.active_cell()) {
            let cell_x = match list.column {
                Column::Key => body_area.x + marker_w,
                Column::Value => body_area.x + marker_w + key_w + sep_w,
            };
            let col_offset = text[..list.cursor.min(text.len())].chars().count() as u16;
            let row_y = body_area.y + (row - first) as u16;
            if row_y < body_area.y + body_area.height {
                frame.set_cursor_position(Position { x: cell_x + col_offset, y: row_y });
            }
        }
    }
}
