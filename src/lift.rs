use crate::effect::{Effect, Writer};
use crate::parser::{Outcome, Parser};
use crate::state::State;
use std::marker::PhantomData;

/// Parser that performs an action of its effect context
///
/// The action runs every time the parser runs. It always succeeds with the
/// action's result and never consumes input.
pub struct Lift<M, F, T> {
    action: F,
    _phantom: PhantomData<fn() -> (M, T)>,
}

impl<M, F, T> Lift<M, F, T> {
    pub fn new(action: F) -> Self {
        Lift {
            action,
            _phantom: PhantomData,
        }
    }
}

impl<'code, M, F, T> Parser<'code> for Lift<M, F, T>
where
    M: Effect,
    F: Fn() -> M::Wrap<T>,
{
    type Effect = M;
    type Output = T;

    fn run(&self, state: State<'code>) -> Outcome<'code, M, T> {
        M::fmap((self.action)(), |value| Ok((value, state)))
    }
}

/// Convenience function to embed an effect action in a parse
pub fn lift<M, F, T>(action: F) -> Lift<M, F, T>
where
    M: Effect,
    F: Fn() -> M::Wrap<T>,
{
    Lift::new(action)
}

/// Append `entry` to the [`Writer`] log each time the parser runs
pub fn tell<W>(entry: W) -> Lift<Writer<W>, impl Fn() -> ((), Vec<W>), ()>
where
    W: Clone,
{
    lift(move || Writer::tell(entry.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{Fallible, Identity};
    use crate::or::OrExt;
    use crate::pure::pure;
    use crate::run::{parse, parse_t};
    use std::cell::Cell;

    #[test]
    fn test_lift_runs_on_every_parse() {
        let counter = Cell::new(0);
        let parser = lift::<Identity, _, _>(|| {
            counter.set(counter.get() + 1);
            counter.get()
        });

        assert_eq!(parse(&parser, "abc").unwrap(), (1, 0));
        assert_eq!(parse(&parser, "abc").unwrap(), (2, 0));
    }

    #[test]
    fn test_lift_does_not_consume() {
        let input: Vec<char> = "xyz".chars().collect();
        let state = State::new(&input).advance(1);

        let (value, after) = lift::<Identity, _, _>(|| "value").run(state).unwrap();
        assert_eq!(value, "value");
        assert_eq!(after.position(), 1);
    }

    #[test]
    fn test_tell_appends_each_run() {
        let parser = tell("entry");

        let (result, log) = parse_t(&parser, "");
        assert!(result.is_ok());
        assert_eq!(log, vec!["entry"]);
    }

    #[test]
    fn test_fallible_abort_is_not_backtracked() {
        let parser = lift::<Fallible<&str>, _, ()>(|| Err("disk gone")).or(pure(()));

        let outcome = parse_t(parser, "abc");
        assert_eq!(outcome, Err("disk gone"));
    }
}
