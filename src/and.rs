use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. The
/// destructuring pattern is explicit about the parsing order.
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Effect = P1::Effect>,
{
    type Effect = P1::Effect;
    type Output = (P1::Output, P2::Output);

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        sequence(&self.parser1, &self.parser2, state, |first, second| (first, second))
    }
}

/// Sequences two parsers and keeps only the first result
pub struct ThenIgnore<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for ThenIgnore<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Effect = P1::Effect>,
{
    type Effect = P1::Effect;
    type Output = P1::Output;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        sequence(&self.parser1, &self.parser2, state, |first, _| first)
    }
}

/// Sequences two parsers and keeps only the second result
pub struct IgnoreThen<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<'code, P1, P2> Parser<'code> for IgnoreThen<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Effect = P1::Effect>,
{
    type Effect = P1::Effect;
    type Output = P2::Output;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        sequence(&self.parser1, &self.parser2, state, |_, second| second)
    }
}

/// Run `first` then `second` from where `first` stopped, combining the values
///
/// The first failure is returned unchanged.
pub(crate) fn sequence<'code, P1, P2, F, T>(
    first: &P1,
    second: &P2,
    state: State<'code>,
    combine: F,
) -> Outcome<'code, P1::Effect, T>
where
    P1: Parser<'code>,
    P2: Parser<'code, Effect = P1::Effect>,
    F: FnOnce(P1::Output, P2::Output) -> T,
{
    <P1::Effect as Effect>::bind(first.run(state), |reply| match reply {
        Ok((value1, next)) => <P1::Effect as Effect>::fmap(second.run(next), |reply| {
            reply.map(|(value2, end)| (combine(value1, value2), end))
        }),
        Err(error) => <P1::Effect as Effect>::pure(Err(error)),
    })
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Effect = P1::Effect>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and(), .then_ignore() and .ignore_then() to parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, Effect = Self::Effect>,
    {
        And::new(self, other)
    }

    fn then_ignore<P>(self, other: P) -> ThenIgnore<Self, P>
    where
        P: Parser<'code, Effect = Self::Effect>,
    {
        ThenIgnore {
            parser1: self,
            parser2: other,
        }
    }

    fn ignore_then<P>(self, other: P) -> IgnoreThen<Self, P>
    where
        P: Parser<'code, Effect = Self::Effect>,
    {
        IgnoreThen {
            parser1: self,
            parser2: other,
        }
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
