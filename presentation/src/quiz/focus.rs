//! Keyboard focus over a question's choices

/// Focused choice index with wrap-around movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChoiceFocus {
    index: usize,
    len: usize,
}

impl ChoiceFocus {
    /// Focus the first of `len` choices
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Focused index, `None` when there are no choices
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Move down, wrapping from the last choice to the first
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Move up, wrapping from the first choice to the last
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Focus `index` if it is in range
    pub fn set(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}
