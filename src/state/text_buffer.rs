/// Multi-line text with a byte cursor. Backs the request body editor and
/// the response body view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
    pub scroll_offset: u16,
}

impl TextBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole content. Cursor and scroll go back to the top.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Zero-based (row, column) of the cursor, column counted in chars.
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let row = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (row, before[line_start..].chars().count())
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = prev_char_boundary(&self.text, self.cursor);
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        let next = next_char_boundary(&self.text, self.cursor);
        self.text.drain(self.cursor..next);
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_char_boundary(&self.text, self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = next_char_boundary(&self.text, self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = self.text[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
    }

    pub fn move_end(&mut self) {
        let after = &self.text[self.cursor..];
        self.cursor = match after.find('\n') {
            Some(i) => self.cursor + i,
            None => self.text.len(),
        };
    }

    pub fn move_up(&mut self) {
        let (row, col) = self.cursor_row_col();
        if row == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = offset_of(&self.text, row - 1, col);
    }

    pub fn move_down(&mut self) {
        let (row, col) = self.cursor_row_col();
        if row + 1 >= self.text.split('\n').count() {
            self.cursor = self.text.len();
            return;
        }
        self.cursor = offset_of(&self.text, row + 1, col);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let max = self.text.lines().count().saturating_sub(1) as u16;
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(max);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

/// Byte offset of `col` chars into line `row`, clamped to the line length.
fn offset_of(text: &str, row: usize, col: usize) -> usize {
    let lines: Vec<&str> = text.split('\n').collect();
    let line = lines.get(row).copied().unwrap_or("");
    let row_start: usize = lines[..row.min(lines.len())].iter().map(|l| l.len() + 1).sum();
    let col_bytes = line
        .char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    row_start + col_bytes
}

pub fn prev_char_boundary(text: &str, pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }
    let mut p = pos - 1;
    while p > 0 && !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}

pub fn next_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos + 1;
    while p < text.len() && !text.is_char_boundary(p) {
        p += 1;
    }
    p
}
