use crate::report::Position;

/// Tracks the current line and column while scanning.
///
/// Findings are reported as 1-based (line, column) pairs; the tracker is
/// advanced once per line and once per character within a line.
#[derive(Debug, Clone, Copy)]
pub struct LocationTracker {
    /// Current 1-based line index in the input stream.
    pub line_index: usize,
    /// Current 1-based column index within the line.
    pub column_index: usize,
}

impl LocationTracker {
    /// Creates a new tracker at the start of a stream.
    pub fn new() -> Self {
        LocationTracker {
            line_index: 0,
            column_index: 0,
        }
    }

    /// Advances the tracker to the next line, resetting the column.
    pub fn next_line(&mut self) {
        self.line_index += 1;
        self.column_index = 0;
    }

    /// Advances the tracker to the next character on the current line.
    pub fn next_column(&mut self) {
        self.column_index += 1;
    }

    /// The current location as a [`Position`].
    pub fn position(&self) -> Position {
        Position::new(self.line_index, self.column_index)
    }
}

impl Default for LocationTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::LocationTracker;

    #[test]
    fn tracker_counts_lines_and_columns() {
        let mut location = LocationTracker::new();
        location.next_line();
        location.next_column();
        location.next_column();
        assert_eq!(location.line_index, 1);
        assert_eq!(location.column_index, 2);

        location.next_line();
        assert_eq!(location.line_index, 2);
        assert_eq!(location.column_index, 0, "new line resets the column");
    }

    #[test]
    fn tracker_position_is_current_location() {
        let mut location = LocationTracker::new();
        location.next_line();
        location.next_column();
        let p = location.position();
        assert_eq!((p.line, p.column), (1, 1));
    }
}
