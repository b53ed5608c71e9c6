use crate::effect::Effect;
use crate::error::ParseError;
use crate::label::Label;
use crate::parser::{Outcome, Parser};
use crate::state::State;
use std::marker::PhantomData;

/// Parser that consumes one character accepted by a predicate
///
/// Fails with `"satisfy"` at the current position when the input is
/// exhausted or the predicate rejects the character.
pub struct Satisfy<M, F> {
    predicate: F,
    _phantom: PhantomData<fn() -> M>,
}

impl<M, F> Satisfy<M, F> {
    pub fn new(predicate: F) -> Self {
        Satisfy {
            predicate,
            _phantom: PhantomData,
        }
    }
}

impl<'code, M, F> Parser<'code> for Satisfy<M, F>
where
    M: Effect,
    F: Fn(char) -> bool,
{
    type Effect = M;
    type Output = char;

    fn run(&self, state: State<'code>) -> Outcome<'code, M, char> {
        M::pure(match state.peek() {
            Some(c) if (self.predicate)(c) => Ok((c, state.advance(1))),
            _ => Err(ParseError::at(&state, "satisfy")),
        })
    }
}

/// Parser that matches one specific character and discards it
pub struct Char<M> {
    expected: char,
    _phantom: PhantomData<fn() -> M>,
}

impl<M> Char<M> {
    pub fn new(expected: char) -> Self {
        Char {
            expected,
            _phantom: PhantomData,
        }
    }
}

impl<'code, M> Parser<'code> for Char<M>
where
    M: Effect,
{
    type Effect = M;
    type Output = ();

    fn run(&self, state: State<'code>) -> Outcome<'code, M, ()> {
        M::pure(match state.peek() {
            Some(c) if c == self.expected => Ok(((), state.advance(1))),
            _ => Err(ParseError::at(&state, "satisfy")),
        })
    }
}

/// Parser that returns the next character without consuming it
pub struct Peek<M>(PhantomData<fn() -> M>);

impl<'code, M> Parser<'code> for Peek<M>
where
    M: Effect,
{
    type Effect = M;
    type Output = char;

    fn run(&self, state: State<'code>) -> Outcome<'code, M, char> {
        M::pure(match state.peek() {
            Some(c) => Ok((c, state)),
            None => Err(ParseError::at(&state, "unexpected end of input")),
        })
    }
}

/// Parser that succeeds only at the end of input
pub struct Eos<M>(PhantomData<fn() -> M>);

impl<'code, M> Parser<'code> for Eos<M>
where
    M: Effect,
{
    type Effect = M;
    type Output = ();

    fn run(&self, state: State<'code>) -> Outcome<'code, M, ()> {
        M::pure(if state.is_at_end() {
            Ok(((), state))
        } else {
            Err(ParseError::at(&state, "expected the end of the string"))
        })
    }
}

/// A character class test usable as a named parser type
pub type Class<M> = Satisfy<M, fn(char) -> bool>;

fn anything(_: char) -> bool {
    true
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<M, F>(predicate: F) -> Satisfy<M, F>
where
    M: Effect,
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Match exactly `expected`
pub fn char<M: Effect>(expected: char) -> Char<M> {
    Char::new(expected)
}

/// Any single character
pub fn any_char<M: Effect>() -> Class<M> {
    Satisfy::new(anything as fn(char) -> bool)
}

/// An alphabetic character, failing with `"expected letter"`
pub fn letter<M: Effect>() -> Label<Class<M>> {
    Label::new(Satisfy::new(char::is_alphabetic as fn(char) -> bool), "expected letter")
}

/// An alphanumeric character, failing with `"expected alphanum"`
pub fn alpha_num<M: Effect>() -> Label<Class<M>> {
    Label::new(Satisfy::new(char::is_alphanumeric as fn(char) -> bool), "expected alphanum")
}

pub fn peek<M: Effect>() -> Peek<M> {
    Peek(PhantomData)
}

/// End of input
pub fn eos<M: Effect>() -> Eos<M> {
    Eos(PhantomData)
}
