//! Effect contexts that parsers run in.
//!
//! Every parser in this crate is generic over an [`Effect`]: the computation
//! that wraps each parse step. [`Identity`] gives plain, pure parsing.
//! [`Writer`] threads an append-only log through the parse, and [`Fallible`]
//! lets a lifted host action abort the whole parse with its own error type.
//!
//! Effects here are strict: `bind` runs its continuation immediately. Actions
//! that should happen while parsing (rather than while building the parser)
//! are supplied as thunks to [`crate::lift`].

use std::fmt;
use std::marker::PhantomData;
use std::ops::ControlFlow;

/// A monad that parse steps are sequenced in
pub trait Effect: Sized {
    /// The computation producing a `T`
    type Wrap<T>;

    /// Wrap a value without performing any effect
    fn pure<T>(value: T) -> Self::Wrap<T>;

    /// Run `action`, then feed its value to `next`
    fn bind<A, B, F>(action: Self::Wrap<A>, next: F) -> Self::Wrap<B>
    where
        F: FnOnce(A) -> Self::Wrap<B>;

    /// Transform the value of `action`
    fn fmap<A, B, F>(action: Self::Wrap<A>, f: F) -> Self::Wrap<B>
    where
        F: FnOnce(A) -> B,
    {
        Self::bind(action, |value| Self::pure(f(value)))
    }

    /// Repeat `step` until it breaks
    ///
    /// The default goes through `bind` recursively, so its stack depth grows
    /// with the number of iterations. The effects shipped with this crate
    /// override it with a loop; custom effects that see long repetitions
    /// should do the same.
    fn tail_rec<S, T, F>(seed: S, mut step: F) -> Self::Wrap<T>
    where
        F: FnMut(S) -> Self::Wrap<ControlFlow<T, S>>,
    {
        fn go<M, S, T, F>(seed: S, step: &mut F) -> M::Wrap<T>
        where
            M: Effect,
            F: FnMut(S) -> M::Wrap<ControlFlow<T, S>>,
        {
            let action = step(seed);
            M::bind(action, |flow| match flow {
                ControlFlow::Continue(next) => go::<M, S, T, F>(next, step),
                ControlFlow::Break(done) => M::pure(done),
            })
        }

        go::<Self, S, T, F>(seed, &mut step)
    }
}

/// The effect of pure parsing: a computation is just its value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Effect for Identity {
    type Wrap<T> = T;

    fn pure<T>(value: T) -> Self::Wrap<T> {
        value
    }

    fn bind<A, B, F>(action: Self::Wrap<A>, next: F) -> Self::Wrap<B>
    where
        F: FnOnce(A) -> Self::Wrap<B>,
    {
        next(action)
    }

    fn tail_rec<S, T, F>(seed: S, mut step: F) -> Self::Wrap<T>
    where
        F: FnMut(S) -> Self::Wrap<ControlFlow<T, S>>,
    {
        let mut current = seed;
        loop {
            match step(current) {
                ControlFlow::Continue(next) => current = next,
                ControlFlow::Break(done) => return done,
            }
        }
    }
}

/// Accumulates entries of type `W` alongside the parse
///
/// Entries are kept in the order the actions ran, including actions inside
/// alternatives that later failed: backtracking restores the input position,
/// not the log.
pub struct Writer<W>(PhantomData<fn() -> W>);

impl<W> Writer<W> {
    /// An action that appends a single entry
    pub fn tell(entry: W) -> ((), Vec<W>) {
        ((), vec![entry])
    }
}

impl<W> fmt::Debug for Writer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Writer")
    }
}

impl<W> Effect for Writer<W> {
    type Wrap<T> = (T, Vec<W>);

    fn pure<T>(value: T) -> Self::Wrap<T> {
        (value, Vec::new())
    }

    fn bind<A, B, F>(action: Self::Wrap<A>, next: F) -> Self::Wrap<B>
    where
        F: FnOnce(A) -> Self::Wrap<B>,
    {
        let (value, mut log) = action;
        let (result, more) = next(value);
        log.extend(more);
        (result, log)
    }

    fn tail_rec<S, T, F>(seed: S, mut step: F) -> Self::Wrap<T>
    where
        F: FnMut(S) -> Self::Wrap<ControlFlow<T, S>>,
    {
        let mut log = Vec::new();
        let mut current = seed;
        loop {
            let (flow, more) = step(current);
            log.extend(more);
            match flow {
                ControlFlow::Continue(next) => current = next,
                ControlFlow::Break(done) => return (done, log),
            }
        }
    }
}

/// Host computations that may abort with an `E`
///
/// An `Err` here is not a parse failure: alternation never recovers from it
/// and it surfaces directly from [`crate::parse_t`].
pub struct Fallible<E>(PhantomData<fn() -> E>);

impl<E> fmt::Debug for Fallible<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fallible")
    }
}

impl<E> Effect for Fallible<E> {
    type Wrap<T> = Result<T, E>;

    fn pure<T>(value: T) -> Self::Wrap<T> {
        Ok(value)
    }

    fn bind<A, B, F>(action: Self::Wrap<A>, next: F) -> Self::Wrap<B>
    where
        F: FnOnce(A) -> Self::Wrap<B>,
    {
        action.and_then(next)
    }

    fn tail_rec<S, T, F>(seed: S, mut step: F) -> Self::Wrap<T>
    where
        F: FnMut(S) -> Self::Wrap<ControlFlow<T, S>>,
    {
        let mut current = seed;
        loop {
            match step(current)? {
                ControlFlow::Continue(next) => current = next,
                ControlFlow::Break(done) => return Ok(done),
            }
        }
    }
}
