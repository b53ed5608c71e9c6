use crate::effect::Effect;
use crate::parser::{Outcome, Parser};
use crate::state::State;
use std::ops::ControlFlow;

/// One or more `parser` separated by `operator`, folded to the left
///
/// The operator parser yields the function that combines its two operands,
/// so `1-2-3` with subtraction gives `(1 - 2) - 3`. An operator that is not
/// followed by an operand is left unconsumed.
pub struct ChainLeft<P, PO> {
    parser: P,
    operator: PO,
}

/// One or more `parser` separated by `operator`, folded to the right
///
/// `2^3^2` with exponentiation gives `2 ^ (3 ^ 2)`.
pub struct ChainRight<P, PO> {
    parser: P,
    operator: PO,
}

impl<'code, P, PO> Parser<'code> for ChainLeft<P, PO>
where
    P: Parser<'code>,
    PO: Parser<'code, Effect = P::Effect>,
    PO::Output: FnOnce(P::Output, P::Output) -> P::Output,
{
    type Effect = P::Effect;
    type Output = P::Output;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        <P::Effect as Effect>::bind(self.parser.run(state), |reply| match reply {
            Ok((first, next)) => {
                <P::Effect as Effect>::tail_rec((first, next), |(acc, state)| {
                    <P::Effect as Effect>::bind(self.operator.run(state), move |reply| match reply {
                        Ok((combine, after_operator)) => <P::Effect as Effect>::fmap(
                            self.parser.run(after_operator),
                            move |reply| match reply {
                                Ok((rhs, next)) => ControlFlow::Continue((combine(acc, rhs), next)),
                                Err(_) => ControlFlow::Break(Ok((acc, state))),
                            },
                        ),
                        Err(_) => <P::Effect as Effect>::pure(ControlFlow::Break(Ok((acc, state)))),
                    })
                })
            }
            Err(error) => <P::Effect as Effect>::pure(Err(error)),
        })
    }
}

impl<'code, P, PO> Parser<'code> for ChainRight<P, PO>
where
    P: Parser<'code>,
    PO: Parser<'code, Effect = P::Effect>,
    PO::Output: FnOnce(P::Output, P::Output) -> P::Output,
{
    type Effect = P::Effect;
    type Output = P::Output;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        <P::Effect as Effect>::bind(self.parser.run(state), |reply| match reply {
            Ok((first, next)) => {
                // Operands and operators are collected first, then folded from the right
                let seed = (first, Vec::new(), next);
                let collected = <P::Effect as Effect>::tail_rec(seed, |(first, mut rest, state)| {
                    <P::Effect as Effect>::bind(self.operator.run(state), move |reply| match reply {
                        Ok((combine, after_operator)) => <P::Effect as Effect>::fmap(
                            self.parser.run(after_operator),
                            move |reply| match reply {
                                Ok((operand, next)) => {
                                    rest.push((combine, operand));
                                    ControlFlow::Continue((first, rest, next))
                                }
                                Err(_) => ControlFlow::Break((first, rest, state)),
                            },
                        ),
                        Err(_) => <P::Effect as Effect>::pure(ControlFlow::Break((first, rest, state))),
                    })
                });
                <P::Effect as Effect>::fmap(collected, |(first, rest, end)| {
                    Ok((fold_right(first, rest), end))
                })
            }
            Err(error) => <P::Effect as Effect>::pure(Err(error)),
        })
    }
}

/// `x0 f1 x1 f2 x2` as `f1(x0, f2(x1, x2))`
fn fold_right<T, F>(first: T, mut rest: Vec<(F, T)>) -> T
where
    F: FnOnce(T, T) -> T,
{
    let Some((mut pending, mut acc)) = rest.pop() else {
        return first;
    };
    while let Some((combine, operand)) = rest.pop() {
        acc = pending(operand, acc);
        pending = combine;
    }
    pending(first, acc)
}

/// Convenience function to create a left-associative chain
pub fn chainl1<'code, P, PO>(parser: P, operator: PO) -> ChainLeft<P, PO>
where
    P: Parser<'code>,
    PO: Parser<'code, Effect = P::Effect>,
    PO::Output: FnOnce(P::Output, P::Output) -> P::Output,
{
    ChainLeft { parser, operator }
}

/// Convenience function to create a right-associative chain
pub fn chainr1<'code, P, PO>(parser: P, operator: PO) -> ChainRight<P, PO>
where
    P: Parser<'code>,
    PO: Parser<'code, Effect = P::Effect>,
    PO::Output: FnOnce(P::Output, P::Output) -> P::Output,
{
    ChainRight { parser, operator }
}
