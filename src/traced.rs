use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;
use std::borrow::Cow;
use tracing::trace;

/// Parser combinator that reports what a parser does to `tracing`
///
/// Emits a `TRACE` event when the parser is entered and another when it
/// matches or fails, all carrying the `parser` name. Parsing behaviour is
/// unchanged.
pub struct Traced<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Traced<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Traced {
            parser,
            name: name.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Traced<P>
where
    P: Parser<'code>,
{
    type Effect = P::Effect;
    type Output = P::Output;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        let name = &*self.name;
        trace!(parser = name, position = state.position(), "enter");

        <P::Effect as Effect>::fmap(self.parser.run(state), |reply| {
            match &reply {
                Ok((_, next)) => trace!(
                    parser = name,
                    start = state.position(),
                    end = next.position(),
                    "matched"
                ),
                Err(error) => trace!(
                    parser = name,
                    position = error.position(),
                    message = error.message(),
                    "failed"
                ),
            }
            reply
        })
    }
}

/// Extension trait to add .traced() method support for parsers
pub trait TracedExt<'code>: Parser<'code> + Sized {
    fn traced(self, name: impl Into<Cow<'static, str>>) -> Traced<Self> {
        Traced::new(self, name)
    }
}

/// Implement TracedExt for all parsers
impl<'code, P> TracedExt<'code> for P where P: Parser<'code> {}
