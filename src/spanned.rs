use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;

/// Character range `[start, end)` of the input a parser consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The characters of `source` this span covers
    ///
    /// Returns an empty slice when the span lies outside `source`.
    pub fn slice<'a>(&self, source: &'a [char]) -> &'a [char] {
        source.get(self.start..self.end).unwrap_or(&[])
    }

    /// The spanned text of `input` as a string
    pub fn as_string(&self, input: &str) -> String {
        input.chars().skip(self.start).take(self.len()).collect()
    }
}

/// A parser combinator that captures the span of a successful parse
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<'code, P> Parser<'code> for Spanned<P>
where
    P: Parser<'code>,
{
    type Effect = P::Effect;
    type Output = (P::Output, Span);

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        let start = state.position();
        <P::Effect as Effect>::fmap(self.parser.run(state), |reply| {
            reply.map(|(value, next)| ((value, Span::new(start, next.position())), next))
        })
    }
}

/// Extension trait to add span tracking to any parser
pub trait SpannedExt<'code>: Parser<'code> + Sized {
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<'code, P> SpannedExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Spanned combinator
pub fn spanned<'code, P>(parser: P) -> Spanned<P>
where
    P: Parser<'code>,
{
    Spanned::new(parser)
}
