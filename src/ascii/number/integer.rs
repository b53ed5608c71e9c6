use super::digit::Digit;
use super::fold_digits;
use crate::and::sequence;
use crate::effect::Effect;
use crate::error::ParseError;
use crate::option::Optional;
use crate::parser::{Outcome, Parser};
use crate::some::some;
use crate::state::State;
use crate::text::Char;
use std::marker::PhantomData;

/// Parser for an optionally negative decimal integer
///
/// An optional `-` is followed by one or more ASCII digits; no whitespace is
/// allowed in between. The digits are folded into a magnitude first and the
/// sign is applied afterwards, so `-0` is `0` and `i64::MIN` is out of range.
/// Out-of-range literals fail at their start with `"integer too large"`.
pub struct Integer<M>(PhantomData<fn() -> M>);

impl<'code, M> Parser<'code> for Integer<M>
where
    M: Effect,
{
    type Effect = M;
    type Output = i64;

    fn run(&self, state: State<'code>) -> Outcome<'code, M, i64> {
        let sign = Optional::new(Char::<M>::new('-'));
        let digits = some(Digit::<M>::new());

        let reply = sequence(&sign, &digits, state, |minus, digits| {
            (minus.is_some(), digits)
        });
        M::fmap(reply, |reply| match reply {
            Ok(((negative, digits), next)) => {
                let magnitude = fold_digits(&digits).and_then(|value| i64::try_from(value).ok());
                match magnitude {
                    Some(value) if negative => Ok((-value, next)),
                    Some(value) => Ok((value, next)),
                    None => Err(ParseError::at(&state, "integer too large")),
                }
            }
            Err(error) => Err(error),
        })
    }
}

pub fn integer<M: Effect>() -> Integer<M> {
    Integer(PhantomData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::parse;
    use rstest::rstest;

    #[rstest]
    #[case("42", 42, 2)]
    #[case("-42", -42, 3)]
    #[case("0", 0, 1)]
    #[case("-0", 0, 2)]
    #[case("-007", -7, 4)]
    #[case("12-3", 12, 2)]
    #[case("9223372036854775807", i64::MAX, 19)]
    #[case("-9223372036854775807", -i64::MAX, 20)]
    fn test_integer(#[case] input: &str, #[case] expected: i64, #[case] position: usize) {
        assert_eq!(parse(integer(), input).unwrap(), (expected, position));
    }

    #[rstest]
    #[case("", 0)]
    #[case("x", 0)]
    #[case("-", 1)]
    #[case("--1", 1)]
    #[case("- 1", 1)]
    #[case("+1", 0)]
    fn test_integer_rejects(#[case] input: &str, #[case] position: usize) {
        let error = parse(integer(), input).unwrap_err();
        assert_eq!(error.position(), position);
        assert_eq!(error.message(), "not a digit");
    }

    #[test]
    fn test_integer_overflow() {
        let error = parse(integer(), "9223372036854775808").unwrap_err();
        assert_eq!(error.position(), 0);
        assert_eq!(error.message(), "integer too large");
    }

    #[test]
    fn test_integer_min_is_out_of_range() {
        // The magnitude is folded before the sign is applied
        let error = parse(integer(), "-9223372036854775808").unwrap_err();
        assert_eq!(error.position(), 0);
        assert_eq!(error.message(), "integer too large");
    }
}
