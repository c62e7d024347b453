use std::collections::HashSet;

use ratatui::text::Text;

use crate::action::ListKind;
use crate::event::RequestId;
use crate::render::response::ResponseView;
use super::{
    focus::Focus,
    kv_list::KeyValueList,
    mode::Mode,
    request_state::RequestForm,
    text_buffer::TextBuffer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Params,
    Headers,
    Body,
}

impl ActiveTab {
    pub fn next(&self) -> ActiveTab {
        match self {
            ActiveTab::Params => ActiveTab::Headers,
            ActiveTab::Headers => ActiveTab::Body,
            ActiveTab::Body => ActiveTab::Params,
        }
    }

    pub fn prev(&self) -> ActiveTab {
        match self {
            ActiveTab::Params => ActiveTab::Body,
            ActiveTab::Headers => ActiveTab::Params,
            ActiveTab::Body => ActiveTab::Headers,
        }
    }

    /// The key-value list edited under this tab, if any.
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            ActiveTab::Params => Some(ListKind::Params),
            ActiveTab::Headers => Some(ListKind::Headers),
            ActiveTab::Body => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseTab {
    #[default]
    Body,
    Headers,
}

impl ResponseTab {
    pub fn toggle(&self) -> ResponseTab {
        match self {
            ResponseTab::Body => ResponseTab::Headers,
            ResponseTab::Headers => ResponseTab::Body,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub mode: Mode,
    pub focus: Focus,
    pub request: RequestForm,
    pub active_tab: ActiveTab,
    pub response_tab: ResponseTab,
    /// Requests dispatched but not completed. The loading indicator is shown
    /// while this is non-empty.
    pub in_flight: HashSet<RequestId>,
    pub spinner_tick: u8,
    /// Hidden until the first response arrives.
    pub response_visible: bool,
    pub response: Option<ResponseView>,
    /// Pretty-printed payload of the last completed response.
    pub response_body: TextBuffer,
    /// `response_body` highlighted once on arrival so frames don't redo it.
    pub response_highlight: Option<Text<'static>>,
    /// Blocking message; all keys except dismissal are swallowed while set.
    pub alert: Option<String>,
    pub should_quit: bool,
    /// Set whenever visible state changes. The render loop skips
    /// `terminal.draw()` when `false`.
    pub dirty: bool,
}

impl AppState {
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn list(&self, kind: ListKind) -> &KeyValueList {
        match kind {
            ListKind::Params => &self.request.params,
            ListKind::Headers => &self.request.headers,
        }
    }

    pub fn list_mut(&mut self, kind: ListKind) -> &mut KeyValueList {
        match kind {
            ListKind::Params => &mut self.request.params,
            ListKind::Headers => &mut self.request.headers,
        }
    }
}
