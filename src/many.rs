use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;
use std::ops::ControlFlow;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Stops at the first failure and returns the state just after the last
/// success; the failing attempt is never consumed. `Many` itself never fails.
///
/// The inner parser must consume input whenever it succeeds. A parser that
/// can succeed on nothing makes this loop forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Effect = P::Effect;
    type Output = Vec<P::Output>;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        repeat(&self.parser, Vec::new(), state)
    }
}

/// Keep applying `parser` from `state`, appending to `values`
///
/// Shared by [`Many`] and [`crate::some::Some`]. Always succeeds.
pub(crate) fn repeat<'code, P>(
    parser: &P,
    values: Vec<P::Output>,
    state: State<'code>,
) -> Outcome<'code, P::Effect, Vec<P::Output>>
where
    P: Parser<'code>,
{
    <P::Effect as Effect>::tail_rec((values, state), |(mut values, state)| {
        <P::Effect as Effect>::fmap(parser.run(state), move |reply| match reply {
            Ok((value, next)) => {
                values.push(value);
                ControlFlow::Continue((values, next))
            }
            Err(_) => ControlFlow::Break(Ok((values, state))),
        })
    })
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::run::parse;
    use crate::text::{any_char, char, satisfy, string};

    #[test]
    fn test_many_zero_matches() {
        let parser = many(satisfy(|c| c == 'a'));

        let (results, position) = parse(parser, "xyz").unwrap();
        assert_eq!(results, vec![]);
        assert_eq!(position, 0);
    }

    #[test]
    fn test_many_one_match() {
        let parser = many(satisfy(|c| c == 'a'));

        let (results, position) = parse(parser, "abc").unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(position, 1);
    }

    #[test]
    fn test_many_multiple_matches() {
        let parser = many(satisfy(|c| c == 'a'));

        let (results, position) = parse(parser, "aaabcd").unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(position, 3);
    }

    #[test]
    fn test_many_all_matches() {
        let parser = many(any_char());

        let (results, position) = parse(parser, "hello").unwrap();
        assert_eq!(results, vec!['h', 'e', 'l', 'l', 'o']);
        assert_eq!(position, 5);
    }

    #[test]
    fn test_many_empty_input() {
        let parser = many(satisfy(|c| c == 'a'));

        let (results, position) = parse(parser, "").unwrap();
        assert_eq!(results, vec![]);
        assert_eq!(position, 0);
    }

    #[test]
    fn test_many_does_not_consume_failing_attempt() {
        // The third "ab" attempt reads 'a' and then fails on 'c'
        let parser = many(string("ab"));

        let (results, position) = parse(parser, "ababac").unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(position, 4);
    }

    #[test]
    fn test_many_of_sequences() {
        let parser = many(char('(').and(char(')')));

        let (results, position) = parse(parser, "()()(]").unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(position, 4);
    }

    #[test]
    fn test_many_long_input() {
        let input = "a".repeat(200_000);
        let parser = many(char('a'));

        let (results, position) = parse(parser, &input).unwrap();
        assert_eq!(results.len(), 200_000);
        assert_eq!(position, 200_000);
    }
}
