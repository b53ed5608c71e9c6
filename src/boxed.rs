use crate::effect::Effect;
use crate::parser::Parser;
use std::rc::Rc;

/// A shared, type-erased parser
///
/// Cloning is cheap and every clone runs the same parser. Recursive grammars
/// name their rules as functions returning `Boxed` and refer to themselves
/// through [`crate::lazy::lazy`]. Boxed parsers are `Rc`-based and therefore
/// not `Send`.
pub type Boxed<M, T> = Rc<dyn for<'code> Parser<'code, Effect = M, Output = T>>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<M, T>: for<'code> Parser<'code, Effect = M, Output = T> + Sized + 'static
where
    M: Effect,
{
    fn boxed(self) -> Boxed<M, T> {
        Rc::new(self)
    }
}

/// Implement BoxedExt for all parsers that work on any input
impl<M, T, P> BoxedExt<M, T> for P
where
    M: Effect,
    P: for<'code> Parser<'code, Effect = M, Output = T> + 'static,
{
}

/// Convenience function to erase the type of a parser
pub fn boxed<M, T, P>(parser: P) -> Boxed<M, T>
where
    M: Effect,
    P: for<'code> Parser<'code, Effect = M, Output = T> + 'static,
{
    Rc::new(parser)
}
