/// Number of recent entries shown by default.
pub const DEFAULT_HISTORY_LEN: usize = 4;

/// Separator between entries in the rendered history line.
pub const ENTRY_SEPARATOR: &str = " | ";

/// One successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The buffer text as the user typed it.
    pub expression: String,
    /// The formatted result.
    pub result:     String,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// In-memory log of successful evaluations, oldest first.
///
/// Every entry is kept; only the most recent `display_len` are shown.
///
/// ## Example
/// ```
/// use calcrs::session::history::History;
///
/// let mut history = History::new(2);
/// history.push("1+1", "2");
/// history.push("2*3", "6");
/// history.push("ans-1", "5");
///
/// assert_eq!(history.len(), 3);
/// assert_eq!(history.render(), "2*3 = 6 | ans-1 = 5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries:     Vec<HistoryEntry>,
    display_len: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LEN)
    }
}

impl History {
    /// Creates an empty history showing at most `display_len` entries.
    #[must_use]
    pub const fn new(display_len: usize) -> Self {
        Self { entries: Vec::new(),
               display_len }
    }

    /// Appends an entry.
    pub fn push(&mut self, expression: impl Into<String>, result: impl Into<String>) {
        self.entries.push(HistoryEntry { expression: expression.into(),
                                         result:     result.into(), });
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recent entries that fit the display window, oldest first.
    #[must_use]
    pub fn recent(&self) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(self.display_len);
        &self.entries[start..]
    }

    /// The display window as one line.
    #[must_use]
    pub fn render(&self) -> String {
        self.recent()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries. A front end hides its clear-history
    /// control in that case.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_is_a_suffix() {
        let mut history = History::default();
        for i in 0..6 {
            history.push(format!("{i}+0"), i.to_string());
        }
        let recent: Vec<_> = history.recent().iter().map(|e| e.result.as_str()).collect();
        assert_eq!(recent, vec!["2", "3", "4", "5"]);
        assert_eq!(history.entries().len(), 6);
    }

    #[test]
    fn short_history_is_shown_whole() {
        let mut history = History::new(4);
        history.push("2*(3+4)", "14");
        assert_eq!(history.render(), "2*(3+4) = 14");
    }

    #[test]
    fn clear_empties() {
        let mut history = History::new(4);
        history.push("1", "1");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.render(), "");
    }
}
