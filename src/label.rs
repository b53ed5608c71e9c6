use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;
use std::borrow::Cow;
use std::fmt;

/// Parser combinator that replaces the message of a failure (`<?>`)
///
/// The failure position is kept as detected by the inner parser. Success
/// passes through unchanged.
pub struct Label<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Label<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        Label {
            parser,
            message: message.into(),
        }
    }
}

impl<P> fmt::Debug for Label<P>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("parser", &self.parser)
            .field("message", &self.message)
            .finish()
    }
}

impl<'code, P> Parser<'code> for Label<P>
where
    P: Parser<'code>,
{
    type Effect = P::Effect;
    type Output = P::Output;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        <P::Effect as Effect>::fmap(self.parser.run(state), |reply| {
            reply.map_err(|error| error.with_message(self.message.clone()))
        })
    }
}

/// Extension trait to add .label() method support for parsers
pub trait LabelExt<'code>: Parser<'code> + Sized {
    fn label(self, message: impl Into<Cow<'static, str>>) -> Label<Self> {
        Label::new(self, message)
    }
}

/// Implement LabelExt for all parsers
impl<'code, P> LabelExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Label parser
pub fn label<'code, P>(parser: P, message: impl Into<Cow<'static, str>>) -> Label<P>
where
    P: Parser<'code>,
{
    Label::new(parser, message)
}
