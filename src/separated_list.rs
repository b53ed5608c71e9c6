use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;
use crate::text::Char;
use std::ops::ControlFlow;

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses an item, followed by zero or more occurrences of
/// (separator + item), and returns all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"1;2;3"` with separator `;` → `vec![1, 2, 3]`
///
/// # Note
/// - A separator not followed by an item is left unconsumed
/// - Does not handle whitespace automatically
/// - With `allow_empty`, a missing first item gives an empty list
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
    allow_empty: bool,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS, allow_empty: bool) -> Self {
        SeparatedList {
            parser,
            separator,
            allow_empty,
        }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Effect = P::Effect>,
{
    type Effect = P::Effect;
    type Output = Vec<P::Output>;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        <P::Effect as Effect>::bind(self.parser.run(state), |reply| match reply {
            Ok((first, next)) => rest(&self.parser, &self.separator, vec![first], next),
            Err(_) if self.allow_empty => <P::Effect as Effect>::pure(Ok((Vec::new(), state))),
            Err(error) => <P::Effect as Effect>::pure(Err(error)),
        })
    }
}

/// Keep reading `separator` then `parser`, stopping before the first
/// separator that is not followed by an item
fn rest<'code, P, PS>(
    parser: &P,
    separator: &PS,
    values: Vec<P::Output>,
    state: State<'code>,
) -> Outcome<'code, P::Effect, Vec<P::Output>>
where
    P: Parser<'code>,
    PS: Parser<'code, Effect = P::Effect>,
{
    <P::Effect as Effect>::tail_rec((values, state), |(mut values, state)| {
        <P::Effect as Effect>::bind(separator.run(state), move |reply| match reply {
            Ok((_, after_separator)) => {
                <P::Effect as Effect>::fmap(parser.run(after_separator), move |reply| match reply {
                    Ok((value, next)) => {
                        values.push(value);
                        ControlFlow::Continue((values, next))
                    }
                    Err(_) => ControlFlow::Break(Ok((values, state))),
                })
            }
            Err(_) => <P::Effect as Effect>::pure(ControlFlow::Break(Ok((values, state)))),
        })
    })
}

/// Zero or more `parser` separated by `separator`
pub fn sep_by<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Effect = P::Effect>,
{
    SeparatedList::new(parser, separator, true)
}

/// One or more `parser` separated by `separator`
pub fn sep_by1<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code, Effect = P::Effect>,
{
    SeparatedList::new(parser, separator, false)
}

/// Zero or more `parser` separated by `,`
pub fn comma_sep<'code, P>(parser: P) -> SeparatedList<P, Char<P::Effect>>
where
    P: Parser<'code>,
{
    sep_by(parser, Char::new(','))
}

/// One or more `parser` separated by `,`
pub fn comma_sep1<'code, P>(parser: P) -> SeparatedList<P, Char<P::Effect>>
where
    P: Parser<'code>,
{
    sep_by1(parser, Char::new(','))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::natural;
    use crate::run::parse;
    use crate::text::{char, letter, lexeme, token};

    #[test]
    fn test_separated_list_single_item() {
        let parser = sep_by1(letter(), char(','));

        let (items, position) = parse(parser, "a").unwrap();
        assert_eq!(items, vec!['a']);
        assert_eq!(position, 1);
    }

    #[test]
    fn test_separated_list_multiple_items() {
        let parser = sep_by1(letter(), char(','));

        let (items, position) = parse(parser, "a,b,c").unwrap();
        assert_eq!(items, vec!['a', 'b', 'c']);
        assert_eq!(position, 5);
    }

    #[test]
    fn test_separated_list_numbers() {
        let parser = sep_by(natural(), char(';'));

        let (items, _) = parse(parser, "1;22;333").unwrap();
        assert_eq!(items, vec![1, 22, 333]);
    }

    #[test]
    fn test_separated_list_trailing_separator_is_left() {
        let parser = comma_sep1(natural());

        let (items, position) = parse(parser, "1,2,").unwrap();
        assert_eq!(items, vec![1, 2]);
        assert_eq!(position, 3);
    }

    #[test]
    fn test_sep_by_empty() {
        let (items, position) = parse(comma_sep(natural()), "x").unwrap();
        assert!(items.is_empty());
        assert_eq!(position, 0);
    }

    #[test]
    fn test_sep_by1_requires_an_item() {
        let error = parse(comma_sep1(natural()), "x").unwrap_err();
        assert_eq!(error.position(), 0);
        assert_eq!(error.message(), "not a digit");
    }

    #[test]
    fn test_separated_list_with_lexemes() {
        let parser = sep_by(lexeme(natural()), token(","));

        let (items, position) = parse(parser, "1 ,  2,3  ").unwrap();
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(position, 10);
    }
}
