use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;

/// Monadic bind: the value of one parser chooses the parser that runs next
///
/// The second parser starts where the first stopped. A failure of the first
/// parser is returned unchanged and `binder` is never called.
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Effect = P::Effect>,
{
    type Effect = P::Effect;
    type Output = Q::Output;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        <P::Effect as Effect>::bind(self.parser.run(state), |reply| match reply {
            Ok((value, next)) => (self.binder)(value).run(next),
            Err(error) => <P::Effect as Effect>::pure(Err(error)),
        })
    }
}

/// Convenience function to create a Bind parser
pub fn bind<'code, P, F, Q>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code, Effect = P::Effect>,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .and_then() method support for parsers
pub trait BindExt<'code>: Parser<'code> + Sized {
    fn and_then<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code, Effect = Self::Effect>,
    {
        Bind::new(self, binder)
    }
}

/// Implement BindExt for all parsers
impl<'code, P> BindExt<'code> for P where P: Parser<'code> {}
