use super::digit::Digit;
use super::fold_digits;
use crate::effect::Effect;
use crate::error::ParseError;
use crate::parser::{Outcome, Parser};
use crate::some::some;
use crate::state::State;
use std::marker::PhantomData;

/// Parser that matches one or more ASCII digits and returns them as a u64
///
/// Fails with `"not a digit"` when no digit is present. A literal that does
/// not fit in a `u64` fails at its first digit with
/// `"natural number too large"`.
pub struct Natural<M>(PhantomData<fn() -> M>);

impl<'code, M> Parser<'code> for Natural<M>
where
    M: Effect,
{
    type Effect = M;
    type Output = u64;

    fn run(&self, state: State<'code>) -> Outcome<'code, M, u64> {
        M::fmap(some(Digit::<M>::new()).run(state), |reply| match reply {
            Ok((digits, next)) => match fold_digits(&digits) {
                Some(value) => Ok((value, next)),
                None => Err(ParseError::at(&state, "natural number too large")),
            },
            Err(error) => Err(error),
        })
    }
}

pub fn natural<M: Effect>() -> Natural<M> {
    Natural(PhantomData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::parse;
    use rstest::rstest;

    #[rstest]
    #[case("5abc", 5, 1)]
    #[case("123", 123, 3)]
    #[case("123abc", 123, 3)]
    #[case("0", 0, 1)]
    #[case("007", 7, 3)]
    #[case("18446744073709551615", u64::MAX, 20)]
    fn test_natural(#[case] input: &str, #[case] expected: u64, #[case] position: usize) {
        assert_eq!(parse(natural(), input).unwrap(), (expected, position));
    }

    #[rstest]
    #[case("")]
    #[case("x")]
    #[case("-1")]
    fn test_natural_requires_a_digit(#[case] input: &str) {
        let error = parse(natural(), input).unwrap_err();
        assert_eq!(error.position(), 0);
        assert_eq!(error.message(), "not a digit");
    }

    #[test]
    fn test_natural_overflow() {
        let error = parse(natural(), "18446744073709551616").unwrap_err();
        assert_eq!(error.position(), 0);
        assert_eq!(error.message(), "natural number too large");
    }
}
