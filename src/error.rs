use crate::state::State;
use std::borrow::Cow;
use thiserror::Error;

/// The single failure kind of the engine: where it was detected and why
///
/// `Display` produces the user-facing form
/// `Parse failed at position <N>: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse failed at position {position}: {message}")]
pub struct ParseError {
    position: usize,
    message: Cow<'static, str>,
}

#[derive(Debug)]
struct ReadablePosition {
    line: usize,
    offset: usize,
}

impl ParseError {
    pub fn new(position: usize, message: impl Into<Cow<'static, str>>) -> Self {
        ParseError {
            position,
            message: message.into(),
        }
    }

    /// A failure detected at the cursor of `state`
    pub fn at(state: &State<'_>, message: impl Into<Cow<'static, str>>) -> Self {
        ParseError::new(state.position(), message)
    }

    /// Character offset at which the failure was detected
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The same failure position with a different message
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        ParseError {
            message: message.into(),
            ..self
        }
    }

    /// Multi-line diagnostic for `input`, the text that was parsed
    ///
    /// Shows the line number, the character offset within that line, up to
    /// two lines of context around the failing line, and a pointer under
    /// the failure position.
    pub fn render(&self, input: &str) -> String {
        let pos = readable_position(input, self.position);
        let mut out = format!(
            "{} (line {}, offset {})\n\n",
            self, pos.line, pos.offset
        );

        for (index, line) in input.split('\n').enumerate() {
            let number = index + 1;
            if number + 2 < pos.line || number > pos.line + 2 {
                continue;
            }

            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            out.push_str(&prefix);
            out.push_str(line);
            out.push('\n');

            if number == pos.line {
                let pointer = " ".repeat(prefix.len() + pos.offset);
                out.push_str(&pointer);
                out.push_str("^--- here\n");
            }
        }

        out
    }
}

/// Line number (1-based) and offset within that line for a character position
///
/// Offsets are in characters, not columns: tab width and wide glyphs depend
/// on the renderer.
fn readable_position(input: &str, position: usize) -> ReadablePosition {
    let mut line = 1;
    let mut line_start = 0;

    for (i, ch) in input.chars().enumerate() {
        if i >= position {
            break;
        }
        if ch == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    ReadablePosition {
        line,
        offset: position.saturating_sub(line_start),
    }
}
