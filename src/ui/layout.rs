use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Color,
};

use crate::action::ListKind;
use crate::state::app_state::{ActiveTab, AppState, ResponseTab};
use super::{
    alert,
    status_bar,
    request::{url_bar, tab_bar as req_tab_bar, kv_editor, body_editor},
    response::{render_meta, body_viewer, headers_viewer, tab_bar as resp_tab_bar},
};

// TokyoNight palette
pub const ACCENT_BLUE: Color = Color::Rgb(122, 162, 247);  // #7aa2f7
pub const BORDER_INACTIVE: Color = Color::Rgb(65, 72, 104); // #414868
pub const BG: Color = Color::Rgb(26, 27, 38);               // #1a1b26
pub const TEXT_MUTED: Color = Color::Rgb(86, 95, 137);      // #565f89

pub const SPINNER_FRAMES: &[char] = &['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

pub fn render(frame: &mut Frame, state: &AppState, editor_height_percent: u16) {
    let area = frame.area();

    // Split off status bar at bottom
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let main_area = vertical[0];
    let status_area = vertical[1];

    // chunks[0] = url bar (Length 3)
    // chunks[1] = request tab bar (Length 1)
    // chunks[2] = request editor
    // chunks[3] = response meta (Length 1)
    // chunks[4] = response tab bar (Length 1)
    // chunks[5] = response viewer
    let total_fixed: u16 = 3 + 1 + 1 + 1;
    let remaining = main_area.height.saturating_sub(total_fixed);
    let editor_h = if state.response_visible {
        ((remaining as u32 * editor_height_percent as u32 / 100) as u16).max(3)
    } else {
        remaining
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),        // url bar
            Constraint::Length(1),        // request tab bar
            Constraint::Length(editor_h), // request editor
            Constraint::Length(1),        // response meta line
            Constraint::Length(1),        // response tab bar
            Constraint::Min(0),           // response viewer
        ])
        .split(main_area);

    url_bar::render(frame, chunks[0], state);
    req_tab_bar::render(frame, chunks[1], state);

    match state.active_tab {
        ActiveTab::Params => kv_editor::render(frame, chunks[2], state, ListKind::Params),
        ActiveTab::Headers => kv_editor::render(frame, chunks[2], state, ListKind::Headers),
        ActiveTab::Body => body_editor::render(frame, chunks[2], state),
    }

    // The response section stays hidden until something has come back.
    if state.response_visible {
        render_meta(frame, chunks[3], state);
        resp_tab_bar::render(frame, chunks[4], state);
        match state.response_tab {
            ResponseTab::Body => body_viewer::render(frame, chunks[5], state),
            ResponseTab::Headers => headers_viewer::render(frame, chunks[5], state),
        }
    }

    status_bar::render(frame, status_area, state);

    // Alert goes last so it sits on top
    if let Some(message) = &state.alert {
        alert::render(frame, area, message);
    }
}
