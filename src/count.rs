use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;
use std::ops::ControlFlow;

/// Parser combinator that applies a parser exactly `times` times
///
/// The first failing repetition fails the whole parser.
pub struct Count<P> {
    parser: P,
    times: usize,
}

impl<P> Count<P> {
    pub fn new(times: usize, parser: P) -> Self {
        Count { parser, times }
    }
}

impl<'code, P> Parser<'code> for Count<P>
where
    P: Parser<'code>,
{
    type Effect = P::Effect;
    type Output = Vec<P::Output>;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        let seed = (Vec::with_capacity(self.times), state);
        <P::Effect as Effect>::tail_rec(seed, |(mut values, state)| {
            if values.len() == self.times {
                return <P::Effect as Effect>::pure(ControlFlow::Break(Ok((values, state))));
            }
            <P::Effect as Effect>::fmap(self.parser.run(state), move |reply| match reply {
                Ok((value, next)) => {
                    values.push(value);
                    ControlFlow::Continue((values, next))
                }
                Err(error) => ControlFlow::Break(Err(error)),
            })
        })
    }
}

/// Convenience function to create a Count parser
pub fn count<'code, P>(times: usize, parser: P) -> Count<P>
where
    P: Parser<'code>,
{
    Count::new(times, parser)
}
