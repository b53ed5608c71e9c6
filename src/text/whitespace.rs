use crate::and::sequence;
use crate::between::Between;
use crate::effect::Effect;
use crate::label::Label;
use crate::many::Many;
use crate::option::Skip;
use crate::parser::{Outcome, Parser};
use crate::some::Some;
use crate::state::State;
use crate::text::character::{Class, Satisfy};
use crate::text::string::StringParser;
use std::borrow::Cow;

/// Zero or more whitespace characters, discarded
pub type Spaces<M> = Label<Skip<Many<Class<M>>>>;

/// One or more whitespace characters, discarded
pub type Spaces1<M> = Label<Skip<Some<Class<M>>>>;

/// A literal followed by optional whitespace
pub type Token<M> = Label<Lexeme<Skip<StringParser<M>>>>;

/// A single Unicode whitespace character
pub fn space<M: Effect>() -> Class<M> {
    Satisfy::new(char::is_whitespace as fn(char) -> bool)
}

/// Skip any amount of whitespace, including none; labelled `"white space"`
pub fn spaces<M: Effect>() -> Spaces<M> {
    Label::new(Skip::new(Many::new(space())), "white space")
}

/// Skip at least one whitespace character; labelled `"whitespaces"`
pub fn spaces1<M: Effect>() -> Spaces1<M> {
    Label::new(Skip::new(Some::new(space())), "whitespaces")
}

/// Parser combinator that consumes trailing whitespace after a parser
pub struct Lexeme<P> {
    parser: P,
}

impl<P> Lexeme<P> {
    pub fn new(parser: P) -> Self {
        Lexeme { parser }
    }
}

impl<'code, P> Parser<'code> for Lexeme<P>
where
    P: Parser<'code>,
{
    type Effect = P::Effect;
    type Output = P::Output;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        sequence(&self.parser, &spaces::<P::Effect>(), state, |value, ()| value)
    }
}

/// Convenience function to create a Lexeme parser
pub fn lexeme<'code, P>(parser: P) -> Lexeme<P>
where
    P: Parser<'code>,
{
    Lexeme::new(parser)
}

/// Match `literal` and any whitespace after it
///
/// Fails with `token "<literal>"` at the position the literal was expected.
pub fn token<M: Effect>(literal: impl Into<Cow<'static, str>>) -> Token<M> {
    let literal = StringParser::new(literal);
    let message = format!("token {:?}", literal.literal());
    Label::new(Lexeme::new(Skip::new(literal)), message)
}

/// `parser` between `(` and `)` tokens
pub fn parens<M, P>(parser: P) -> Between<Token<M>, P, Token<M>>
where
    M: Effect,
{
    Between::new(token("("), parser, token(")"))
}
