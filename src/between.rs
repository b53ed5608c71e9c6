use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open`, then `content`, then `close`, and returns just the
/// `content` value with the delimiters discarded. Whitespace is not handled
/// here; wrap the delimiters in [`crate::text::lexeme`] for that.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Between<PO, P, PC> {
    open: PO,
    content: P,
    close: PC,
}

impl<PO, P, PC> Between<PO, P, PC> {
    pub fn new(open: PO, content: P, close: PC) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, PO, P, PC> Parser<'code> for Between<PO, P, PC>
where
    PO: Parser<'code>,
    P: Parser<'code, Effect = PO::Effect>,
    PC: Parser<'code, Effect = PO::Effect>,
{
    type Effect = PO::Effect;
    type Output = P::Output;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        <PO::Effect as Effect>::bind(self.open.run(state), |reply| match reply {
            Ok((_, state)) => <PO::Effect as Effect>::bind(self.content.run(state), |reply| match reply {
                Ok((value, state)) => <PO::Effect as Effect>::fmap(self.close.run(state), |reply| {
                    reply.map(|(_, end)| (value, end))
                }),
                Err(error) => <PO::Effect as Effect>::pure(Err(error)),
            }),
            Err(error) => <PO::Effect as Effect>::pure(Err(error)),
        })
    }
}

/// Convenience function to create a Between parser
pub fn between<'code, PO, P, PC>(open: PO, content: P, close: PC) -> Between<PO, P, PC>
where
    PO: Parser<'code>,
    P: Parser<'code, Effect = PO::Effect>,
    PC: Parser<'code, Effect = PO::Effect>,
{
    Between::new(open, content, close)
}
