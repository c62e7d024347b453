use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use crate::action::{Action, ListKind};
use crate::config::Config;
use crate::error::AppError;
use crate::event::{Event, RequestId};
use crate::http::{
    client::build_client,
    executor,
    timing::{Interceptor, TimingInterceptor},
};
use crate::render::response::ResponseView;
use crate::state::app_state::{ActiveTab, AppState};
use crate::state::focus::Focus;
use crate::state::kv_list::Column;
use crate::state::mode::Mode;
use crate::state::response_state::ResponseResult;
use crate::state::text_buffer::{next_char_boundary, prev_char_boundary};
use crate::ui::highlight::{detect_lang, highlight_text};

pub struct App {
    pub state: AppState,
    pub config: Config,
    client: reqwest::Client,
    interceptor: Arc<dyn Interceptor>,
    tx: UnboundedSender<Event>,
}

impl App {
    pub fn new(config: Config, tx: UnboundedSender<Event>) -> Result<Self, AppError> {
        let client = build_client(&config.http)?;
        Ok(Self {
            state: AppState { dirty: true, ..Default::default() },
            config,
            client,
            interceptor: Arc::new(TimingInterceptor),
            tx,
        })
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                self.state.dirty = true;
                self.handle_key(key);
            }
            Event::Key(_) => {}
            Event::Response { id, result } => {
                self.state.dirty = true;
                self.handle_response(id, result);
            }
            // Tick: only dirty when the spinner is visible; otherwise a no-op.
            Event::Tick => self.handle_tick(),
            Event::Mouse(mouse) => {
                if let Some(action) = self.mouse_action(mouse) {
                    self.state.dirty = true;
                    self.dispatch(action);
                }
            }
            Event::Resize(_, _) => self.state.dirty = true,
        }
    }

    /// Apply one action. This is the only place form state changes outside
    /// of in-place text editing.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::AddRow(kind) => {
                self.state.list_mut(kind).add_row();
                self.state.active_tab = match kind {
                    ListKind::Params => ActiveTab::Params,
                    ListKind::Headers => ActiveTab::Headers,
                };
                self.state.focus = Focus::Editor;
                self.state.mode = Mode::Insert;
            }
            Action::RemoveRow(kind, id) => {
                self.state.list_mut(kind).remove_row(id);
            }
            Action::SelectNextRow(kind) => self.state.list_mut(kind).select_next(),
            Action::SelectPrevRow(kind) => self.state.list_mut(kind).select_prev(),
            Action::SelectColumn(kind, column) => self.state.list_mut(kind).set_column(column),
            Action::Submit => {
                self.state.mode = Mode::Normal;
                self.submit();
            }
            Action::NextMethod => self.state.request.method = self.state.request.method.next(),
            Action::PrevMethod => self.state.request.method = self.state.request.method.prev(),
            Action::FocusNext => self.state.focus = self.state.focus.next(),
            Action::FocusPrev => self.state.focus = self.state.focus.prev(),
            Action::FocusOn(focus) => self.state.focus = focus,
            Action::NextTab => self.state.active_tab = self.state.active_tab.next(),
            Action::PrevTab => self.state.active_tab = self.state.active_tab.prev(),
            Action::ToggleResponseTab => {
                self.state.response_tab = self.state.response_tab.toggle();
            }
            Action::EnterInsert => self.enter_insert(),
            Action::LeaveInsert => self.state.mode = Mode::Normal,
            Action::DismissAlert => self.state.alert = None,
            Action::ScrollResponse(delta) => {
                let body = &mut self.state.response_body;
                if delta >= 0 {
                    body.scroll_down(delta as u16);
                } else {
                    body.scroll_up(delta.unsigned_abs());
                }
            }
            Action::Quit => self.state.should_quit = true,
        }
    }

    /// Validate the body and hand the request to the executor. A malformed
    /// body raises the alert and nothing is sent.
    pub fn submit(&mut self) -> Option<RequestId> {
        let desc = match self.state.request.to_descriptor() {
            Ok(desc) => desc,
            Err(e) => {
                log::warn!("submit rejected: {}", e);
                self.state.alert = Some(e.to_string());
                return None;
            }
        };

        let id = Uuid::new_v4();
        self.state.in_flight.insert(id);
        self.state.spinner_tick = 0;
        executor::spawn(
            self.client.clone(),
            Arc::clone(&self.interceptor),
            id,
            desc,
            self.tx.clone(),
        );
        Some(id)
    }

    /// Last completion wins the response panel.
    pub fn handle_response(&mut self, id: RequestId, result: ResponseResult) {
        if !self.state.in_flight.remove(&id) {
            log::debug!("response {} was not in flight", id);
        }
        let view = ResponseView::render(&result);
        self.state.response_highlight = (!view.body.is_empty())
            .then(|| highlight_text(&view.body, detect_lang(&view.body)));
        self.state.response_body.set_text(view.body.clone());
        self.state.response = Some(view);
        self.state.response_visible = true;
    }

    fn handle_tick(&mut self) {
        if self.state.is_loading() {
            self.state.spinner_tick = self.state.spinner_tick.wrapping_add(1);
            self.state.dirty = true;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.state.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dispatch(Action::DismissAlert);
            }
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        // Ctrl+R / Ctrl+S fire regardless of mode or focus
        if ctrl && matches!(key.code, KeyCode::Char('r') | KeyCode::Char('s')) {
            self.dispatch(Action::Submit);
            return;
        }
        if ctrl && key.code == KeyCode::Char('c') {
            self.dispatch(Action::Quit);
            return;
        }
        match self.state.mode {
            Mode::Normal => {
                if let Some(action) = self.normal_action(key) {
                    self.dispatch(action);
                }
            }
            Mode::Insert => self.handle_insert_key(key),
        }
    }

    /// Key → action table for Normal mode.
    pub fn normal_action(&self, key: KeyEvent) -> Option<Action> {
        let focus = self.state.focus;
        if focus == Focus::Editor {
            if let Some(kind) = self.state.active_tab.list_kind() {
                let action = match key.code {
                    KeyCode::Char('a') => Some(Action::AddRow(kind)),
                    KeyCode::Char('x') | KeyCode::Char('d') => {
                        return self
                            .state
                            .list(kind)
                            .selected_id()
                            .map(|id| Action::RemoveRow(kind, id));
                    }
                    KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNextRow(kind)),
                    KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrevRow(kind)),
                    KeyCode::Char('h') | KeyCode::Left => {
                        Some(Action::SelectColumn(kind, Column::Key))
                    }
                    KeyCode::Char('l') | KeyCode::Right => {
                        Some(Action::SelectColumn(kind, Column::Value))
                    }
                    _ => None,
                };
                if action.is_some() {
                    return action;
                }
            }
        }

        let action = match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrev,
            KeyCode::Char('[') => Action::PrevMethod,
            KeyCode::Char(']') => Action::NextMethod,
            KeyCode::Char('1') => Action::FocusOn(Focus::UrlBar),
            KeyCode::Char('2') => Action::FocusOn(Focus::Editor),
            KeyCode::Char('3') => Action::FocusOn(Focus::ResponseViewer),
            KeyCode::Left | KeyCode::Char('h') if focus == Focus::TabBar => Action::PrevTab,
            KeyCode::Right | KeyCode::Char('l') if focus == Focus::TabBar => Action::NextTab,
            KeyCode::Char('i') | KeyCode::Enter
                if matches!(focus, Focus::UrlBar | Focus::Editor) =>
            {
                Action::EnterInsert
            }
            KeyCode::Char('t') if focus == Focus::ResponseViewer => Action::ToggleResponseTab,
            KeyCode::Char('j') | KeyCode::Down if focus == Focus::ResponseViewer => {
                Action::ScrollResponse(1)
            }
            KeyCode::Char('k') | KeyCode::Up if focus == Focus::ResponseViewer => {
                Action::ScrollResponse(-1)
            }
            _ => return None,
        };
        Some(action)
    }

    fn mouse_action(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ScrollResponse(3)),
            MouseEventKind::ScrollUp => Some(Action::ScrollResponse(-3)),
            _ => None,
        }
    }

    fn enter_insert(&mut self) {
        self.state.mode = Mode::Insert;
        if self.state.focus == Focus::UrlBar {
            self.state.request.url_cursor = self.state.request.url.len();
        } else if let Some(kind) = self.state.active_tab.list_kind() {
            let list = self.state.list_mut(kind);
            if list.is_empty() {
                list.add_row();
            }
            list.move_end();
        }
    }

    fn handle_insert_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.dispatch(Action::LeaveInsert);
            return;
        }
        match self.state.focus {
            Focus::UrlBar => self.handle_url_key(key),
            Focus::Editor => match self.state.active_tab.list_kind() {
                Some(kind) => self.handle_list_key(kind, key),
                None => self.handle_body_key(key),
            },
            Focus::TabBar | Focus::ResponseViewer => self.dispatch(Action::LeaveInsert),
        }
    }

    fn handle_url_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.dispatch(Action::Submit);
            return;
        }
        let request = &mut self.state.request;
        let cursor = request.url_cursor.min(request.url.len());
        match key.code {
            KeyCode::Char(c) => {
                request.url.insert(cursor, c);
                request.url_cursor = cursor + c.len_utf8();
            }
            KeyCode::Backspace if cursor > 0 => {
                let prev = prev_char_boundary(&request.url, cursor);
                request.url.drain(prev..cursor);
                request.url_cursor = prev;
            }
            KeyCode::Delete if cursor < request.url.len() => {
                let next = next_char_boundary(&request.url, cursor);
                request.url.drain(cursor..next);
            }
            KeyCode::Left => request.url_cursor = prev_char_boundary(&request.url, cursor),
            KeyCode::Right => request.url_cursor = next_char_boundary(&request.url, cursor),
            KeyCode::Home => request.url_cursor = 0,
            KeyCode::End => request.url_cursor = request.url.len(),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, kind: ListKind, key: KeyEvent) {
        let list = self.state.list_mut(kind);
        match key.code {
            KeyCode::Char(c) => list.insert_char(c),
            KeyCode::Backspace => list.backspace(),
            KeyCode::Delete => list.delete(),
            KeyCode::Left => list.move_left(),
            KeyCode::Right => list.move_right(),
            KeyCode::Home => list.move_home(),
            KeyCode::End => list.move_end(),
            KeyCode::Up => list.select_prev(),
            KeyCode::Down => list.select_next(),
            KeyCode::Tab => match list.column {
                Column::Key => list.set_column(Column::Value),
                Column::Value => list.advance_row(),
            },
            KeyCode::BackTab => {
                let column = list.column.toggle();
                list.set_column(column);
            }
            KeyCode::Enter => list.advance_row(),
            _ => {}
        }
    }

    fn handle_body_key(&mut self, key: KeyEvent) {
        let body = &mut self.state.request.body;
        match key.code {
            KeyCode::Char(c) => body.insert_char(c),
            KeyCode::Enter => body.insert_newline(),
            KeyCode::Tab => {
                body.insert_char(' ');
                body.insert_char(' ');
            }
            KeyCode::Backspace => body.backspace(),
            KeyCode::Delete => body.delete(),
            KeyCode::Left => body.move_left(),
            KeyCode::Right => body.move_right(),
            KeyCode::Up => body.move_up(),
            KeyCode::Down => body.move_down(),
            KeyCode::Home => body.move_home(),
            KeyCode::End => body.move_end(),
            _ => {}
        }
    }
}
