use crate::effect::Effect;
use crate::error::ParseError;
use crate::parser::{Outcome, Parser};
use crate::state::State;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that collects the longest run of characters accepted by a predicate
///
/// Built for `take_while` (never fails) and `take_while1` (fails with
/// `"satisfy"` when the run is empty).
pub struct TakeWhile<M, F> {
    predicate: F,
    non_empty: bool,
    _phantom: PhantomData<fn() -> M>,
}

impl<M, F> TakeWhile<M, F> {
    pub fn new(predicate: F, non_empty: bool) -> Self {
        TakeWhile {
            predicate,
            non_empty,
            _phantom: PhantomData,
        }
    }
}

impl<'code, M, F> Parser<'code> for TakeWhile<M, F>
where
    M: Effect,
    F: Fn(char) -> bool,
{
    type Effect = M;
    type Output = String;

    fn run(&self, state: State<'code>) -> Outcome<'code, M, String> {
        let taken = state
            .remaining()
            .iter()
            .take_while(|&&c| (self.predicate)(c))
            .count();

        M::pure(if taken == 0 && self.non_empty {
            Err(ParseError::at(&state, "satisfy"))
        } else {
            let text = state.remaining()[..taken].iter().collect();
            Ok((text, state.advance(taken)))
        })
    }
}

/// Parser that returns the text before a terminator and consumes the terminator
///
/// Fails at the end of input with `end of string reached - <stop> not found`
/// when the terminator never appears.
pub struct TakeUntil<M> {
    stop: Cow<'static, str>,
    _phantom: PhantomData<fn() -> M>,
}

impl<M> TakeUntil<M> {
    pub fn new(stop: impl Into<Cow<'static, str>>) -> Self {
        TakeUntil {
            stop: stop.into(),
            _phantom: PhantomData,
        }
    }
}

impl<'code, M> Parser<'code> for TakeUntil<M>
where
    M: Effect,
{
    type Effect = M;
    type Output = String;

    fn run(&self, state: State<'code>) -> Outcome<'code, M, String> {
        let stop_length = self.stop.chars().count();
        let mut cursor = state;

        loop {
            if cursor.starts_with(&self.stop) {
                let taken = cursor.position() - state.position();
                let text = state.remaining()[..taken].iter().collect();
                return M::pure(Ok((text, cursor.advance(stop_length))));
            }
            if cursor.is_at_end() {
                let message = format!("end of string reached - {} not found", self.stop);
                return M::pure(Err(ParseError::at(&cursor, message)));
            }
            cursor = cursor.advance(1);
        }
    }
}

/// Characters while `predicate` holds, possibly none
pub fn take_while<M, F>(predicate: F) -> TakeWhile<M, F>
where
    M: Effect,
    F: Fn(char) -> bool,
{
    TakeWhile::new(predicate, false)
}

/// Characters while `predicate` holds, at least one
pub fn take_while1<M, F>(predicate: F) -> TakeWhile<M, F>
where
    M: Effect,
    F: Fn(char) -> bool,
{
    TakeWhile::new(predicate, true)
}

/// Text up to `stop`; `stop` itself is consumed but not returned
pub fn take_until<M: Effect>(stop: impl Into<Cow<'static, str>>) -> TakeUntil<M> {
    TakeUntil::new(stop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::run::parse;
    use crate::text::char;

    #[test]
    fn test_take_while_run() {
        let (text, position) = parse(take_while(|c| c.is_ascii_digit()), "123abc").unwrap();
        assert_eq!(text, "123");
        assert_eq!(position, 3);
    }

    #[test]
    fn test_take_while_empty_run() {
        let (text, position) = parse(take_while(|c| c.is_ascii_digit()), "abc").unwrap();
        assert_eq!(text, "");
        assert_eq!(position, 0);
    }

    #[test]
    fn test_take_while_whole_input() {
        let (text, position) = parse(take_while(|_| true), "héllo").unwrap();
        assert_eq!(text, "héllo");
        assert_eq!(position, 5);
    }

    #[test]
    fn test_take_while1() {
        assert_eq!(parse(take_while1(char::is_alphabetic), "ab1").unwrap(), ("ab".to_string(), 2));

        let error = parse(take_while1(char::is_alphabetic), "1ab").unwrap_err();
        assert_eq!(error.position(), 0);
        assert_eq!(error.message(), "satisfy");
    }

    #[test]
    fn test_take_until_quote() {
        let parser = char('"').ignore_then(take_until("\""));

        let (text, position) = parse(parser, r#""hello world"more"#).unwrap();
        assert_eq!(text, "hello world");
        assert_eq!(position, 13);
    }

    #[test]
    fn test_take_until_multichar_terminator() {
        let (text, position) = parse(take_until("*/"), "comment */ code").unwrap();
        assert_eq!(text, "comment ");
        assert_eq!(position, 10);
    }

    #[test]
    fn test_take_until_immediate_terminator() {
        assert_eq!(parse(take_until(";"), ";x").unwrap(), (String::new(), 1));
    }

    #[test]
    fn test_take_until_missing_terminator() {
        let error = parse(take_until("*/"), "never closed").unwrap_err();
        assert_eq!(error.position(), 12);
        assert_eq!(error.message(), "end of string reached - */ not found");
    }
}
