/// Cursor into a slot's filtered view.
///
/// The view length is never cached: every operation takes the live length so
/// a view that shrank since the last swipe cannot be indexed out of bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    cursor: usize,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cursor(cursor: usize) -> Self {
        Self { cursor }
    }

    /// Raw cursor, possibly larger than the current view.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        self.cursor = (self.cursor + 1) % len;
    }

    pub fn retreat(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        self.cursor = (self.cursor % len + len - 1) % len;
    }

    /// Index of the displayed meal, `None` when nothing can be displayed.
    pub fn current_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        Some(self.cursor % len)
    }
}
