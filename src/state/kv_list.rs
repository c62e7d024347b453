use std::collections::BTreeMap;

use super::text_buffer::{next_char_boundary, prev_char_boundary};

/// Stable identity of a row inside one [`KeyValueList`]. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValuePair {
    pub id: RowId,
    pub key: String,
    pub value: String,
}

/// Which column of a row is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Column {
    #[default]
    Key,
    Value,
}

impl Column {
    pub fn toggle(self) -> Column {
        match self {
            Column::Key => Column::Value,
            Column::Value => Column::Key,
        }
    }
}

/// Ordered list of editable key/value rows, used for query params and headers.
#[derive(Debug, Clone)]
pub struct KeyValueList {
    rows: Vec<KeyValuePair>,
    next_id: u64,
    selected: Option<RowId>,
    pub column: Column,
    /// Byte cursor within the selected cell.
    pub cursor: usize,
}

impl Default for KeyValueList {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueList {
    /// A list holding exactly one empty row.
    pub fn new() -> Self {
        let mut list = Self {
            rows: Vec::new(),
            next_id: 0,
            selected: None,
            column: Column::Key,
            cursor: 0,
        };
        list.add_row();
        list
    }

    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(KeyValuePair {
            id,
            key: String::new(),
            value: String::new(),
        });
        self.selected = Some(id);
        self.column = Column::Key;
        self.cursor = 0;
        id
    }

    /// Remove exactly the row with `id`. Returns `false` if no such row exists.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let Some(pos) = self.rows.iter().position(|r| r.id == id) else {
            return false;
        };
        self.rows.remove(pos);
        if self.selected == Some(id) {
            // Keep the selection near where it was.
            let next = pos.min(self.rows.len().saturating_sub(1));
            self.selected = self.rows.get(next).map(|r| r.id);
            self.cursor = 0;
        }
        true
    }

    pub fn rows(&self) -> &[KeyValuePair] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_mut(&mut self, id: RowId) -> Option<&mut KeyValuePair> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    pub fn selected_id(&self) -> Option<RowId> {
        self.selected
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn select_next(&mut self) {
        self.step_selection(1);
    }

    pub fn select_prev(&mut self) {
        self.step_selection(-1);
    }

    fn step_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            self.selected = None;
            return;
        }
        let current = self.selected_index().unwrap_or(0) as isize;
        let last = self.rows.len() as isize - 1;
        let next = (current + delta).clamp(0, last) as usize;
        self.selected = Some(self.rows[next].id);
        self.cursor = self.active_cell().map(str::len).unwrap_or(0);
    }

    pub fn set_column(&mut self, column: Column) {
        self.column = column;
        self.cursor = self.active_cell().map(str::len).unwrap_or(0);
    }

    /// Text of the selected row's active column.
    pub fn active_cell(&self) -> Option<&str> {
        let row = self.rows.get(self.selected_index()?)?;
        Some(match self.column {
            Column::Key => row.key.as_str(),
            Column::Value => row.value.as_str(),
        })
    }

    pub fn active_cell_mut(&mut self) -> Option<&mut String> {
        let id = self.selected?;
        let column = self.column;
        let row = self.row_mut(id)?;
        Some(match column {
            Column::Key => &mut row.key,
            Column::Value => &mut row.value,
        })
    }

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        if let Some(text) = self.active_cell_mut() {
            let at = cursor.min(text.len());
            text.insert(at, c);
            self.cursor = at + c.len_utf8();
        }
    }

    pub fn backspace(&mut self) {
        let cursor = self.cursor;
        if cursor == 0 {
            return;
        }
        if let Some(text) = self.active_cell_mut() {
            let prev = prev_char_boundary(text, cursor);
            text.drain(prev..cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        let cursor = self.cursor;
        if let Some(text) = self.active_cell_mut() {
            if cursor < text.len() {
                let next = next_char_boundary(text, cursor);
                text.drain(cursor..next);
            }
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.active_cell().map(|t| prev_char_boundary(t, self.cursor)) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.active_cell().map(|t| next_char_boundary(t, self.cursor)) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.active_cell().map(str::len).unwrap_or(0);
    }

    /// Move to the next row's key cell, appending a row at the end.
    pub fn advance_row(&mut self) {
        let at_end = match self.selected_index() {
            Some(i) => i + 1 >= self.rows.len(),
            None => true,
        };
        if at_end {
            self.add_row();
        } else {
            self.select_next();
            self.set_column(Column::Key);
        }
    }

    /// Rows with an empty key are skipped; the last row wins on duplicate keys.
    pub fn serialize(&self) -> BTreeMap<String, String> {
        self.rows
            .iter()
            .filter(|r| !r.key.is_empty())
            .map(|r| (r.key.clone(), r.value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(list: &mut KeyValueList, id: RowId, key: &str, value: &str) {
        let row = list.row_mut(id).unwrap();
        row.key = key.to_string();
        row.value = value.to_string();
    }

    #[test]
    fn test_starts_with_one_empty_row() {
        let list = KeyValueList::new();
        assert_eq!(list.len(), 1);
        assert!(list.rows()[0].key.is_empty());
        assert!(list.serialize().is_empty());
    }

    #[test]
    fn test_empty_key_rows_are_skipped() {
        let mut list = KeyValueList::new();
        let first = list.rows()[0].id;
        fill(&mut list, first, "", "x");
        let second = list.add_row();
        fill(&mut list, second, "Accept", "application/json");

        let map = list.serialize();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Accept").map(String::as_str), Some("application/json"));
        // The empty-key row stays in the list.
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let mut list = KeyValueList::new();
        let a = list.rows()[0].id;
        fill(&mut list, a, "q", "first");
        let b = list.add_row();
        fill(&mut list, b, "q", "second");

        assert_eq!(list.serialize().get("q").map(String::as_str), Some("second"));

        list.remove_row(b);
        assert_eq!(list.serialize().get("q").map(String::as_str), Some("first"));
    }

    #[test]
    fn test_remove_only_touches_target_row() {
        let mut list = KeyValueList::new();
        let a = list.rows()[0].id;
        let b = list.add_row();
        let c = list.add_row();
        fill(&mut list, a, "a", "1");
        fill(&mut list, b, "b", "2");
        fill(&mut list, c, "c", "3");

        assert!(list.remove_row(b));
        let ids: Vec<RowId> = list.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(!list.remove_row(b));

        let d = list.add_row();
        assert_ne!(d, b);
    }

    #[test]
    fn test_remove_all_rows_then_add() {
        let mut list = KeyValueList::new();
        let a = list.rows()[0].id;
        list.remove_row(a);
        assert!(list.is_empty());
        assert_eq!(list.selected_id(), None);
        list.select_next();
        assert_eq!(list.selected_id(), None);

        let b = list.add_row();
        assert_eq!(list.selected_id(), Some(b));
    }

    #[test]
    fn test_serialize_never_has_empty_key_after_mixed_ops() {
        let mut list = KeyValueList::new();
        let mut ids = vec![list.rows()[0].id];
        for i in 0..10 {
            let id = list.add_row();
            let key = if i % 3 == 0 { String::new() } else { format!("k{}", i % 4) };
            fill(&mut list, id, &key, &i.to_string());
            ids.push(id);
            if i % 4 == 1 {
                list.remove_row(ids[i / 2]);
            }
        }
        let map = list.serialize();
        assert!(!map.contains_key(""));
        for (k, v) in &map {
            let last = list.rows().iter().rev().find(|r| &r.key == k).unwrap();
            assert_eq!(&last.value, v);
        }
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut list = KeyValueList::new();
        let a = list.rows()[0].id;
        let b = list.add_row();
        assert_eq!(list.selected_id(), Some(b));
        list.select_next();
        assert_eq!(list.selected_id(), Some(b));
        list.select_prev();
        list.select_prev();
        assert_eq!(list.selected_id(), Some(a));
    }

    #[test]
    fn test_cell_editing() {
        let mut list = KeyValueList::new();
        for c in "Accépt".chars() {
            list.insert_char(c);
        }
        list.backspace();
        list.move_left();
        list.delete();
        assert_eq!(list.rows()[0].key, "Accé");
        list.move_home();
        list.insert_char('x');
        assert_eq!(list.rows()[0].key, "xAccé");
        list.set_column(Column::Value);
        list.insert_char('v');
        assert_eq!(list.serialize().get("xAccé").map(String::as_str), Some("v"));
    }

    #[test]
    fn test_advance_row_appends_at_end() {
        let mut list = KeyValueList::new();
        let first = list.rows()[0].id;
        list.advance_row();
        assert_eq!(list.len(), 2);
        list.select_prev();
        assert_eq!(list.selected_id(), Some(first));
        list.advance_row();
        assert_eq!(list.len(), 2);
        assert_eq!(list.column, Column::Key);
    }

    #[test]
    fn test_active_cell_follows_column() {
        let mut list = KeyValueList::new();
        let a = list.rows()[0].id;
        fill(&mut list, a, "key", "value");
        list.set_column(Column::Value);
        assert_eq!(list.active_cell(), Some("value"));
        assert_eq!(list.cursor, 5);
        list.active_cell_mut().unwrap().push('!');
        assert_eq!(list.rows()[0].value, "value!");
    }
}
