use crossterm::event::{KeyEvent, MouseEvent};
use uuid::Uuid;

use crate::state::response_state::ResponseResult;

/// Correlates a completion with the submit that started it.
pub type RequestId = Uuid;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Response { id: RequestId, result: ResponseResult },
    Resize(u16, u16),
}
