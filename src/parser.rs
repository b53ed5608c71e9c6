use crate::effect::Effect;
use crate::error::ParseError;
use crate::state::State;
use std::marker::PhantomData;
use std::rc::Rc;

/// Outcome of one parse step: the value and the state after it, or a failure
pub type Reply<'code, T> = Result<(T, State<'code>), ParseError>;

/// A [`Reply`] inside the effect `M`
pub type Outcome<'code, M, T> = <M as Effect>::Wrap<Reply<'code, T>>;

/// Core parser trait for parser combinators
///
/// A parser is an immutable description of how to consume a prefix of the
/// input. Running it never changes the parser; combinators build new parsers
/// that wrap existing ones.
pub trait Parser<'code> {
    /// The effect context parse steps are sequenced in
    type Effect: Effect;
    type Output;

    /// Attempt to parse from `state`
    ///
    /// Returns the parsed value with the state after it, or a failure that
    /// carries the position at which it was detected.
    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Effect = P::Effect;
    type Output = P::Output;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        (**self).run(state)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Effect = P::Effect;
    type Output = P::Output;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        (**self).run(state)
    }
}

/// Parser backed by a plain function over [`State`]
///
/// This is the escape hatch for primitives the combinators do not cover.
pub struct FromFn<M, F, T> {
    function: F,
    _phantom: PhantomData<fn() -> (M, T)>,
}

impl<'code, M, F, T> Parser<'code> for FromFn<M, F, T>
where
    M: Effect,
    F: Fn(State<'code>) -> Outcome<'code, M, T>,
{
    type Effect = M;
    type Output = T;

    fn run(&self, state: State<'code>) -> Outcome<'code, M, T> {
        (self.function)(state)
    }
}

/// Convenience function to create a parser from a function over [`State`]
pub fn from_fn<M, F, T>(function: F) -> FromFn<M, F, T>
where
    M: Effect,
    F: for<'code> Fn(State<'code>) -> Outcome<'code, M, T>,
{
    FromFn {
        function,
        _phantom: PhantomData,
    }
}
