use crate::effect::Effect;
use crate::many::repeat;
use crate::parser::{Outcome, Parser};
use crate::state::State;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first application must succeed and its failure is returned
/// unchanged; the rest behaves like [`crate::many::Many`]. The same
/// termination precondition applies: the inner parser must consume input
/// whenever it succeeds.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'code, P> Parser<'code> for Some<P>
where
    P: Parser<'code>,
{
    type Effect = P::Effect;
    type Output = Vec<P::Output>;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        <P::Effect as Effect>::bind(self.parser.run(state), |reply| match reply {
            Ok((first, next)) => repeat(&self.parser, vec![first], next),
            Err(error) => <P::Effect as Effect>::pure(Err(error)),
        })
    }
}

/// Convenience function to create a Some parser
pub fn some<'code, P>(parser: P) -> Some<P>
where
    P: Parser<'code>,
{
    Some::new(parser)
}
