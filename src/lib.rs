//! # Parsimon - Monadic Parser Combinators
//!
//! A parser combinator library for text, generic over the effect context the
//! parse runs in.
//!
//! Parsimon provides composable, type-safe parsers that can be combined to build
//! complex parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Full backtracking**: Alternatives always restart from the original position
//! - **Effects**: The same combinators run pure, with a log, or with host actions
//! - **Character positions**: Errors report character offsets and render with context
//!
//! ```
//! use parsimon::{AndExt, integer, lexeme, parse, token};
//!
//! let assignment = token("let")
//!     .ignore_then(lexeme(parsimon::take_while1(char::is_alphabetic)))
//!     .then_ignore(token("="))
//!     .and(integer());
//!
//! let ((name, value), _) = parse(assignment, "let x = -42").unwrap();
//! assert_eq!(name, "x");
//! assert_eq!(value, -42);
//! ```

pub mod and;
pub mod apply;
pub mod ascii;
pub mod between;
pub mod bind;
pub mod boxed;
pub mod chain;
pub mod count;
pub mod effect;
pub mod error;
pub mod fail;
pub mod label;
pub mod lazy;
pub mod lift;
pub mod many;
pub mod map;
pub mod option;
pub mod or;
pub mod parser;
pub mod pure;
pub mod require_failure;
pub mod run;
pub mod separated_list;
pub mod some;
pub mod spanned;
pub mod state;
pub mod text;
pub mod traced;

pub use and::{AndExt, and};
pub use apply::{ApplyExt, apply};
pub use ascii::{digit, integer, natural};
pub use between::between;
pub use bind::{BindExt, bind};
pub use boxed::{Boxed, BoxedExt, boxed};
pub use chain::{chainl1, chainr1};
pub use count::count;
pub use effect::{Effect, Fallible, Identity, Writer};
pub use error::ParseError;
pub use fail::{empty, fail};
pub use label::{LabelExt, label};
pub use lazy::lazy;
pub use lift::{lift, tell};
pub use many::many;
pub use map::{MapExt, map};
pub use option::{OptionExt, option, optional, skip};
pub use or::{OrExt, or};
pub use parser::{Outcome, Parser, Reply, from_fn};
pub use pure::pure;
pub use require_failure::{RequireFailureExt, require_failure};
pub use run::{ParseConfig, parse, parse_t, parse_t_with, parse_with};
pub use separated_list::{comma_sep, comma_sep1, sep_by, sep_by1};
pub use some::some;
pub use spanned::{Span, SpannedExt, spanned};
pub use state::State;
pub use text::{
    alpha_num, any_char, char, eos, letter, lexeme, parens, peek, satisfy, space, spaces,
    spaces1, string, take_until, take_while, take_while1, token,
};
pub use traced::TracedExt;
