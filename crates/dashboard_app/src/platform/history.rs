use std::collections::VecDeque;

use dashboard_core::Location;

/// Oldest entries are dropped past this many.
const MAX_ENTRIES: usize = 100;

/// Back/forward stack of visited addresses, capped at [`MAX_ENTRIES`].
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Location>,
    cursor: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: VecDeque::from([initial]),
            cursor: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    /// Adds `location` after the current entry, discarding any forward entries.
    /// Pushing the current address again is a no-op.
    pub fn push(&mut self, location: Location) {
        if *self.current() == location {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push_back(location);
        if self.entries.len() > MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> Option<&Location> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&Location> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}
