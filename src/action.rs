use crate::state::focus::Focus;
use crate::state::kv_list::{Column, RowId};

/// The two independent key-value editors of the request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Params,
    Headers,
}

/// Everything the UI can ask the controller to do. Key and mouse events are
/// translated into these before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddRow(ListKind),
    RemoveRow(ListKind, RowId),
    SelectNextRow(ListKind),
    SelectPrevRow(ListKind),
    SelectColumn(ListKind, Column),
    Submit,
    NextMethod,
    PrevMethod,
    FocusNext,
    FocusPrev,
    FocusOn(Focus),
    NextTab,
    PrevTab,
    ToggleResponseTab,
    EnterInsert,
    LeaveInsert,
    DismissAlert,
    ScrollResponse(i16),
    Quit,
}
