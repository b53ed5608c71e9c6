use crate::effect::Effect;
use crate::error::ParseError;
use crate::parser::{Outcome, Parser};
use crate::state::State;
use std::marker::PhantomData;

/// Parser that matches a single ASCII digit (0-9) and returns its value
pub struct Digit<M>(PhantomData<fn() -> M>);

impl<M> Digit<M> {
    pub fn new() -> Self {
        Digit(PhantomData)
    }
}

impl<M> Default for Digit<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, M> Parser<'code> for Digit<M>
where
    M: Effect,
{
    type Effect = M;
    type Output = u8;

    fn run(&self, state: State<'code>) -> Outcome<'code, M, u8> {
        M::pure(match state.peek() {
            Some(c @ '0'..='9') => Ok((c as u8 - b'0', state.advance(1))),
            _ => Err(ParseError::at(&state, "not a digit")),
        })
    }
}

pub fn digit<M: Effect>() -> Digit<M> {
    Digit::new()
}
