use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value without consuming input
pub struct Pure<M, T> {
    value: T,
    _effect: PhantomData<fn() -> M>,
}

impl<M, T> Pure<M, T> {
    pub fn new(value: T) -> Self {
        Pure {
            value,
            _effect: PhantomData,
        }
    }
}

impl<'code, M, T> Parser<'code> for Pure<M, T>
where
    M: Effect,
    T: Clone,
{
    type Effect = M;
    type Output = T;

    fn run(&self, state: State<'code>) -> Outcome<'code, M, T> {
        M::pure(Ok((self.value.clone(), state)))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<M, T>(value: T) -> Pure<M, T>
where
    M: Effect,
    T: Clone,
{
    Pure::new(value)
}
