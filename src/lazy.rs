use crate::parser::{Outcome, Parser};
use crate::state::State;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is what lets a grammar refer to itself.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Lazy { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Effect = P::Effect;
    type Output = P::Output;

    fn run(&self, state: State<'code>) -> Outcome<'code, Self::Effect, Self::Output> {
        let parser = (self.factory)();
        parser.run(state)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::boxed::{Boxed, BoxedExt};
    use crate::effect::Identity;
    use crate::many::many;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::pure::pure;
    use crate::run::parse;
    use crate::text::char;
    use std::cell::Cell;

    /// Nesting depth of balanced parentheses: `(())` is 2
    fn nesting() -> Boxed<Identity, usize> {
        char('(')
            .ignore_then(lazy(nesting))
            .then_ignore(char(')'))
            .map(|depth| depth + 1)
            .or(pure(0))
            .boxed()
    }

    #[test]
    fn test_lazy_basic() {
        let (value, position) = parse(lazy(|| char('a')), "aaaa").unwrap();
        assert_eq!(value, ());
        assert_eq!(position, 1);
    }

    #[test]
    fn test_lazy_with_many() {
        let (output, position) = parse(lazy(|| many(char('a'))), "aaaa").unwrap();
        assert_eq!(output.len(), 4);
        assert_eq!(position, 4);
    }

    #[test]
    fn test_lazy_deferred_construction() {
        let built = Cell::new(0);
        let parser = lazy(|| {
            built.set(built.get() + 1);
            char('x')
        });
        assert_eq!(built.get(), 0);

        assert!(parse(&parser, "xyz").is_ok());
        assert!(parse(&parser, "xyz").is_ok());
        assert_eq!(built.get(), 2);
    }

    #[test]
    fn test_lazy_recursive_grammar() {
        assert_eq!(parse(nesting(), "((()))").unwrap(), (3, 6));
        assert_eq!(parse(nesting(), "").unwrap(), (0, 0));
        // Unbalanced input backtracks to the empty alternative
        assert_eq!(parse(nesting(), "(()").unwrap(), (0, 0));
    }
}
