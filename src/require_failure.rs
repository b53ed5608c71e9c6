use crate::effect::Effect;
use crate::error::ParseError;
use crate::parser::{Outcome, Parser};
use crate::state::State;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct RequireFailure<P> {
    parser: P,
}

impl<P> RequireFailure<P> {
    pub fn new(parser: P) -> Self {
        RequireFailure { parser }
    }
}

impl<'code, P> Parser<'code> for RequireFailure<P>
where
    P: Parser<'code>,
{
    type Effect = P::Effect;
    type Output = ();

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        <P::Effect as Effect>::fmap(self.parser.run(state), |reply| match reply {
            Ok(_) => Err(ParseError::at(
                &state,
                "negative lookahead failed: unexpected match",
            )),
            Err(_) => Ok(((), state)),
        })
    }
}

/// Convenience function to create a RequireFailure parser for negative lookahead
pub fn require_failure<'code, P>(parser: P) -> RequireFailure<P>
where
    P: Parser<'code>,
{
    RequireFailure::new(parser)
}

/// Extension trait to add .require_failure() method support for parsers
pub trait RequireFailureExt<'code>: Parser<'code> + Sized {
    fn require_failure(self) -> RequireFailure<Self> {
        RequireFailure::new(self)
    }
}

/// Implement RequireFailureExt for all parsers
impl<'code, P> RequireFailureExt<'code> for P where P: Parser<'code> {}
