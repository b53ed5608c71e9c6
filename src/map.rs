use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// Failures pass through untouched, position and message included.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Effect = P::Effect;
    type Output = U;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, U> {
        <P::Effect as Effect>::fmap(self.parser.run(state), |reply| {
            reply.map(|(value, next)| ((self.mapper)(value), next))
        })
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
