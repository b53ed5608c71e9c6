use std::fmt;

/// Immutable snapshot of the input cursor
///
/// A state is two offsets and a shared reference to the input, so it is
/// `Copy`. Parsers never mutate a state; advancing produces a new one, and
/// backtracking simply reuses a state captured earlier.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct State<'code> {
    input: &'code [char],
    pos: usize,
    max_pos: usize,
}

impl<'code> State<'code> {
    /// The initial state for `input`: cursor at 0, `max_pos` at its length
    pub fn new(input: &'code [char]) -> Self {
        State {
            input,
            pos: 0,
            max_pos: input.len(),
        }
    }

    /// Current offset in characters
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Length of the input in characters
    pub fn max_position(&self) -> usize {
        self.max_pos
    }

    /// The complete input, independent of the cursor
    pub fn source(&self) -> &'code [char] {
        self.input
    }

    /// Characters from the cursor to the end of input
    pub fn remaining(&self) -> &'code [char] {
        &self.input[self.pos..]
    }

    /// The character under the cursor, or `None` at end of input
    pub fn peek(&self) -> Option<char> {
        if self.pos < self.max_pos {
            Some(self.input[self.pos])
        } else {
            None
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.max_pos
    }

    /// A state `count` characters further along, clamped at end of input
    pub fn advance(self, count: usize) -> Self {
        State {
            pos: self.pos.saturating_add(count).min(self.max_pos),
            ..self
        }
    }

    /// Whether the input at the cursor starts with `literal`
    pub fn starts_with(&self, literal: &str) -> bool {
        let mut rest = self.remaining().iter();
        literal
            .chars()
            .all(|expected| rest.next().is_some_and(|&found| found == expected))
    }
}

impl fmt::Debug for State<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("input", &self.input.iter().collect::<String>())
            .field("pos", &self.pos)
            .field("max_pos", &self.max_pos)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_initial_state() {
        let input = chars("hello");
        let state = State::new(&input);

        assert_eq!(state.position(), 0);
        assert_eq!(state.max_position(), 5);
        assert_eq!(state.peek(), Some('h'));
        assert!(!state.is_at_end());
    }

    #[test]
    fn test_empty_input_is_at_end() {
        let input = chars("");
        let state = State::new(&input);

        assert!(state.is_at_end());
        assert_eq!(state.peek(), None);
        assert_eq!(state.max_position(), 0);
    }

    #[test]
    fn test_advance_is_a_new_state() {
        let input = chars("abcd");
        let start = State::new(&input);
        let saved = start;

        let moved = start.advance(2);
        assert_eq!(moved.peek(), Some('c'));
        assert_eq!(moved.position(), 2);

        // Earlier snapshots are unaffected
        assert_eq!(saved.peek(), Some('a'));
        assert_eq!(saved.advance(1).peek(), Some('b'));
    }

    #[test]
    fn test_advance_clamps_at_end() {
        let input = chars("ab");
        let state = State::new(&input).advance(10);

        assert_eq!(state.position(), 2);
        assert!(state.is_at_end());
        assert_eq!(state.advance(1).position(), 2);
    }

    #[test]
    fn test_positions_count_characters_not_bytes() {
        let input = chars("åäö!");
        let state = State::new(&input).advance(3);

        assert_eq!(state.max_position(), 4);
        assert_eq!(state.peek(), Some('!'));
    }

    #[test]
    fn test_starts_with() {
        let input = chars("let x");
        let state = State::new(&input);

        assert!(state.starts_with("let"));
        assert!(state.starts_with(""));
        assert!(!state.starts_with("Let"));
        assert!(!state.starts_with("let x = 1"));
        assert!(state.advance(4).starts_with("x"));
    }

    #[test]
    fn test_remaining() {
        let input = chars("abc");
        let state = State::new(&input).advance(1);

        assert_eq!(state.remaining(), &['b', 'c']);
        assert_eq!(state.source(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_debug_shows_all_fields() {
        let input = chars("xy");
        let state = State::new(&input).advance(1);

        let shown = format!("{:?}", state);
        assert_eq!(shown, r#"State { input: "xy", pos: 1, max_pos: 2 }"#);
    }
}
