use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;

/// Parser combinator that makes a parser optional
///
/// Succeeds with `Some(value)` when the inner parser matches, otherwise
/// with `None` at the original position.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Effect = P::Effect;
    type Output = Option<P::Output>;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        <P::Effect as Effect>::fmap(self.parser.run(state), |reply| match reply {
            Ok((value, next)) => Ok((Some(value), next)),
            Err(_) => Ok((None, state)),
        })
    }
}

/// Parser combinator that falls back to a default value
///
/// Same as [`Optional`] but yields `default` instead of `None`.
pub struct WithDefault<P, T> {
    parser: P,
    default: T,
}

impl<P, T> WithDefault<P, T> {
    pub fn new(default: T, parser: P) -> Self {
        WithDefault { parser, default }
    }
}

impl<'code, P, T> Parser<'code> for WithDefault<P, T>
where
    P: Parser<'code, Output = T>,
    T: Clone,
{
    type Effect = P::Effect;
    type Output = T;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        <P::Effect as Effect>::fmap(self.parser.run(state), |reply| match reply {
            Ok(success) => Ok(success),
            Err(_) => Ok((self.default.clone(), state)),
        })
    }
}

/// Parser combinator that runs a parser for its effect on the input only
pub struct Skip<P> {
    parser: P,
}

impl<P> Skip<P> {
    pub fn new(parser: P) -> Self {
        Skip { parser }
    }
}

impl<'code, P> Parser<'code> for Skip<P>
where
    P: Parser<'code>,
{
    type Effect = P::Effect;
    type Output = ();

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        <P::Effect as Effect>::fmap(self.parser.run(state), |reply| {
            reply.map(|(_, next)| ((), next))
        })
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Run `parser`, or succeed with `default` without consuming input
pub fn option<'code, P, T>(default: T, parser: P) -> WithDefault<P, T>
where
    P: Parser<'code, Output = T>,
    T: Clone,
{
    WithDefault::new(default, parser)
}

/// Convenience function to create a Skip parser
pub fn skip<'code, P>(parser: P) -> Skip<P>
where
    P: Parser<'code>,
{
    Skip::new(parser)
}

/// Extension trait to add .optional(), .or_default_to() and .skip() to parsers
pub trait OptionExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    fn or_default_to(self, default: Self::Output) -> WithDefault<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        WithDefault::new(default, self)
    }

    fn skip(self) -> Skip<Self> {
        Skip::new(self)
    }
}

/// Implement OptionExt for all parsers
impl<'code, P> OptionExt<'code> for P where P: Parser<'code> {}
