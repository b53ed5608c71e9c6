use crate::effect::Effect;
use crate::error::ParseError;
use crate::parser::{Outcome, Parser};
use crate::state::State;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always fails at the current position without consuming input
pub struct Fail<M, T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn() -> (M, T)>,
}

impl<M, T> Fail<M, T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<'code, M, T> Parser<'code> for Fail<M, T>
where
    M: Effect,
{
    type Effect = M;
    type Output = T;

    fn run(&self, state: State<'code>) -> Outcome<'code, M, T> {
        M::pure(Err(ParseError::at(&state, self.message.clone())))
    }
}

/// Convenience function to create a parser that fails with `message`
pub fn fail<M, T>(message: impl Into<Cow<'static, str>>) -> Fail<M, T>
where
    M: Effect,
{
    Fail::new(message)
}

/// The identity of alternation: fails with `"no alternative left"`
pub fn empty<M, T>() -> Fail<M, T>
where
    M: Effect,
{
    Fail::new("no alternative left")
}
