//! The session history log.
//!
//! [`HistoryLog`] is an ordered record of committed lines plus one live,
//! uncommitted slot at the top. `current` points at the slot the buffer is
//! showing. Navigation always writes the buffer's text back into the slot
//! being left, so in-progress edits are never silently discarded; leaving
//! the live slot additionally saves its text into the stash so an accept
//! performed elsewhere can restore it. The log is bounded: once the number
//! of committed entries exceeds the configured maximum, the oldest are
//! evicted.
//!
//! The log never touches the buffer itself: navigation methods take the
//! buffer's current text and hand back the text to load, and the session
//! moves it in and out.

/// Ordered, append-only record of committed lines with a navigation pointer.
///
/// # Examples
///
/// ```
/// use linekit_core::history::HistoryLog;
///
/// let mut history = HistoryLog::new(50);
/// history.accept("first");
/// history.accept("second");
/// assert_eq!(history.entries(), ["first", "second", ""]);
/// assert_eq!(history.current(), history.top());
/// ```
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: Vec<String>,
    current: usize,
    stash: String,
    max_entries: usize,
}

impl HistoryLog {
    /// Create a log holding at most `max_entries` committed lines.
    pub fn new(max_entries: usize) -> Self {
        HistoryLog {
            entries: vec![String::new()],
            current: 0,
            stash: String::new(),
            max_entries,
        }
    }

    /// Index of the live, uncommitted slot.
    pub fn top(&self) -> usize {
        self.entries.len() - 1
    }

    /// Index of the slot the buffer is currently showing.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether navigation is at the live slot.
    pub fn is_at_top(&self) -> bool {
        self.current == self.top()
    }

    /// All slots, committed entries first, the live slot last.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The configured bound on committed entries.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Mirror the buffer's text into the live slot.
    ///
    /// Called after every text mutation made while `current == top`, so the
    /// live slot always equals the buffer between operations.
    pub fn record_live(&mut self, text: &str) {
        if self.is_at_top() {
            let top = self.top();
            self.entries[top] = text.to_string();
        }
    }

    /// Move the navigation pointer to `target`.
    ///
    /// The buffer's text is written into the slot being left (stashed as
    /// well when that slot is the live one) and the target slot's text is
    /// returned for the session to load. Returns `None`, with no state
    /// change, when the target is out of range or already current.
    pub fn jump(&mut self, target: usize, buffer_text: &str) -> Option<String> {
        if target > self.top() || target == self.current {
            return None;
        }
        if self.is_at_top() {
            self.stash = buffer_text.to_string();
        }
        let leaving = self.current;
        self.entries[leaving] = buffer_text.to_string();
        self.current = target;
        Some(self.entries[target].clone())
    }

    /// Step one entry back. No-op at the oldest entry.
    pub fn previous(&mut self, buffer_text: &str) -> Option<String> {
        if self.current == 0 {
            return None;
        }
        self.jump(self.current - 1, buffer_text)
    }

    /// Step one entry forward. No-op at the live slot.
    pub fn next(&mut self, buffer_text: &str) -> Option<String> {
        self.jump(self.current + 1, buffer_text)
    }

    /// Jump to the oldest entry.
    pub fn first(&mut self, buffer_text: &str) -> Option<String> {
        self.jump(0, buffer_text)
    }

    /// Jump to the live slot.
    pub fn last(&mut self, buffer_text: &str) -> Option<String> {
        self.jump(self.top(), buffer_text)
    }

    /// Index of the nearest entry strictly before `current` whose text
    /// starts with `prefix`.
    pub fn search_backward(&self, prefix: &str) -> Option<usize> {
        (0..self.current)
            .rev()
            .find(|&index| self.entries[index].starts_with(prefix))
    }

    /// Index of the nearest entry strictly after `current` whose text
    /// starts with `prefix`. The live slot is not part of history and is
    /// excluded from the scan.
    pub fn search_forward(&self, prefix: &str) -> Option<usize> {
        (self.current + 1..self.top()).find(|&index| self.entries[index].starts_with(prefix))
    }

    /// Commit a line and return the text that was submitted.
    ///
    /// When navigation sits away from the live slot, the buffer's text
    /// stays in the slot it was edited in and the stashed live text is what
    /// gets committed; no edit is lost either way. A fresh empty slot is
    /// appended and both pointers advance to it. Every accept produces
    /// exactly one committed entry; the oldest entries are evicted once the
    /// bound is exceeded.
    pub fn accept(&mut self, buffer_text: &str) -> String {
        let submitted = if self.is_at_top() {
            buffer_text.to_string()
        } else {
            let edited = self.current;
            self.entries[edited] = buffer_text.to_string();
            std::mem::take(&mut self.stash)
        };

        let top = self.top();
        self.entries[top] = submitted.clone();
        self.entries.push(String::new());
        self.stash.clear();

        while self.entries.len() - 1 > self.max_entries {
            self.entries.remove(0);
        }
        self.current = self.top();
        submitted
    }
}

impl Default for HistoryLog {
    /// A log with the default bound of 50 committed entries.
    fn default() -> Self {
        HistoryLog::new(50)
    }
}
