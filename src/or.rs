use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Backtracking is total: whatever the first parser consumed before failing
/// is discarded and the second runs from the original state. The second
/// parser's result, success or failure, is returned unchanged.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Effect = P1::Effect, Output = P1::Output>,
{
    type Effect = P1::Effect;
    type Output = P1::Output;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        <P1::Effect as Effect>::bind(self.parser1.run(state), |reply| match reply {
            Ok(success) => <P1::Effect as Effect>::pure(Ok(success)),
            Err(_) => self.parser2.run(state),
        })
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Effect = Self::Effect, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Effect = P1::Effect, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::effect::Writer;
    use crate::lift::tell;
    use crate::map::MapExt;
    use crate::run::{parse, parse_t};
    use crate::text::{char, string};

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(string("a"), string("b"));

        let (value, position) = parse(parser, "abc").unwrap();
        assert_eq!(value, "a");
        assert_eq!(position, 1);
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(string("a"), string("b"));

        let (value, position) = parse(parser, "bcd").unwrap();
        assert_eq!(value, "b");
        assert_eq!(position, 1);
    }

    #[test]
    fn test_or_both_fail_reports_second() {
        let parser = string("a").or(string("b"));

        let error = parse(parser, "xyz").unwrap_err();
        assert_eq!(error.message(), "string \"b\"");
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_or_backtracks_after_partial_progress() {
        // "let" consumes two characters before failing on 'x'
        let parser = string("let").or(string("lexer"));

        let (value, position) = parse(parser, "lexer").unwrap();
        assert_eq!(value, "lexer");
        assert_eq!(position, 5);
    }

    #[test]
    fn test_or_backtracks_over_sequences() {
        let first = char('a').and(char('b')).map(|_| 1);
        let second = char('a').and(char('c')).map(|_| 2);
        let parser = first.or(second);

        assert_eq!(parse(parser, "ac").unwrap(), (2, 2));
    }

    #[test]
    fn test_or_second_failure_position_is_its_own() {
        let first = char('a').and(char('b'));
        let second = char('a').and(char('c'));
        let parser = first.or(second);

        let error = parse(parser, "ax").unwrap_err();
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_or_method_chain() {
        let parser = string("a").or(string("b")).or(string("c")).or(string("d"));

        let (value, _) = parse(parser, "d").unwrap();
        assert_eq!(value, "d");
    }

    #[test]
    fn test_or_left_effects_are_kept() {
        let left = tell("left").and(char('x')).map(|_| "left");
        let right = tell("right").map(|()| "right");
        let parser = left.or(right);

        let (result, log) = parse_t::<Writer<&str>, _, _>(parser, "y");
        assert_eq!(result.unwrap(), ("right", 0));
        assert_eq!(log, vec!["left", "right"]);
    }
}
