use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;

/// Applicative sequencing: a parser of functions applied to a parser of arguments
///
/// The argument parser runs first and the function parser continues from
/// where it stopped. Effect order follows: argument, then function. Either
/// failure is returned unchanged.
pub struct Apply<PF, PA> {
    function: PF,
    argument: PA,
}

impl<PF, PA> Apply<PF, PA> {
    pub fn new(function: PF, argument: PA) -> Self {
        Apply { function, argument }
    }
}

impl<'code, PF, PA, F, B> Parser<'code> for Apply<PF, PA>
where
    PA: Parser<'code>,
    PF: Parser<'code, Effect = PA::Effect, Output = F>,
    F: FnOnce(PA::Output) -> B,
{
    type Effect = PA::Effect;
    type Output = B;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, B> {
        <PA::Effect as Effect>::bind(self.argument.run(state), |reply| match reply {
            Ok((argument, next)) => <PA::Effect as Effect>::fmap(self.function.run(next), |reply| {
                reply.map(|(function, end)| (function(argument), end))
            }),
            Err(error) => <PA::Effect as Effect>::pure(Err(error)),
        })
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'code, PF, PA, F, B>(function: PF, argument: PA) -> Apply<PF, PA>
where
    PA: Parser<'code>,
    PF: Parser<'code, Effect = PA::Effect, Output = F>,
    F: FnOnce(PA::Output) -> B,
{
    Apply::new(function, argument)
}

/// Extension trait to add .apply() to parsers that produce functions
pub trait ApplyExt<'code>: Parser<'code> + Sized {
    fn apply<PA, B>(self, argument: PA) -> Apply<Self, PA>
    where
        PA: Parser<'code, Effect = Self::Effect>,
        Self::Output: FnOnce(PA::Output) -> B,
    {
        Apply::new(self, argument)
    }
}

/// Implement ApplyExt for all parsers
impl<'code, P> ApplyExt<'code> for P where P: Parser<'code> {}
