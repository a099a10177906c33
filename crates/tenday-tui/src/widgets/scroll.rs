//! Cursor and viewport bookkeeping shared by the table and list views.
//!
//! `cursor` is the absolute index of the highlighted row and `offset` the
//! index of the first visible row. The cursor is always kept inside the
//! visible window; moving it past an edge scrolls the window.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};

#[derive(Debug)]
pub struct ScrollState {
    len: usize,
    pub cursor: usize,
    pub offset: usize,
    /// Cached from the last render so `handle()` can page by screenfuls.
    last_height: Cell<usize>,
}

impl ScrollState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            cursor: 0,
            offset: 0,
            last_height: Cell::new(10),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Record the rendered height and return the `[start, end)` range of
    /// rows that fit, keeping the cursor visible.
    pub fn viewport(&self, height: usize) -> (usize, usize) {
        self.last_height.set(height);
        let height = height.max(1);
        let mut start = self.offset.min(self.len.saturating_sub(1));
        if self.cursor < start {
            start = self.cursor;
        } else if self.cursor >= start + height {
            start = self.cursor + 1 - height;
        }
        (start, (start + height).min(self.len))
    }

    pub fn handle(&mut self, event: &AppEvent) {
        if self.len == 0 {
            return;
        }
        let last = self.len - 1;
        let page = self.height();

        match event {
            AppEvent::Move(Direction::Up) => self.cursor = self.cursor.saturating_sub(1),
            AppEvent::Move(Direction::Down) => self.cursor = (self.cursor + 1).min(last),
            AppEvent::PageUp => self.cursor = self.cursor.saturating_sub(page),
            AppEvent::PageDown => self.cursor = (self.cursor + page).min(last),
            AppEvent::First => self.cursor = 0,
            AppEvent::Last => self.cursor = last,
            _ => return,
        }

        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + page {
            self.offset = self.cursor + 1 - page;
        }
        tracing::trace!(cursor = self.cursor, offset = self.offset, "scroll");
    }
}
