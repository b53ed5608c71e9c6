use crate::effect::Effect;
use crate::error::ParseError;
use crate::parser::{Outcome, Parser};
use crate::state::State;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that matches a literal string
///
/// On success the literal is returned and the cursor moves past it. On
/// failure nothing is consumed and the message is `string "<literal>"`,
/// reported at the position the match was attempted.
pub struct StringParser<M> {
    literal: Cow<'static, str>,
    length: usize,
    _phantom: PhantomData<fn() -> M>,
}

impl<M> StringParser<M> {
    pub fn new(literal: impl Into<Cow<'static, str>>) -> Self {
        let literal = literal.into();
        StringParser {
            length: literal.chars().count(),
            literal,
            _phantom: PhantomData,
        }
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl<'code, M> Parser<'code> for StringParser<M>
where
    M: Effect,
{
    type Effect = M;
    type Output = Cow<'static, str>;

    fn run(&self, state: State<'code>) -> Outcome<'code, M, Self::Output> {
        M::pure(if state.starts_with(&self.literal) {
            Ok((self.literal.clone(), state.advance(self.length)))
        } else {
            Err(ParseError::at(&state, format!("string {:?}", self.literal)))
        })
    }
}

/// Convenience function to create a StringParser
pub fn string<M: Effect>(literal: impl Into<Cow<'static, str>>) -> StringParser<M> {
    StringParser::new(literal)
}
