//! Character-level parsers over text: single characters, literals,
//! whitespace handling and runs of characters.

pub mod character;
pub mod string;
pub mod take;
pub mod whitespace;

pub use character::{Char, Class, Eos, Peek, Satisfy, alpha_num, any_char, char, eos, letter, peek, satisfy};
pub use string::{StringParser, string};
pub use take::{TakeUntil, TakeWhile, take_until, take_while, take_while1};
pub use whitespace::{Lexeme, Spaces, Spaces1, Token, lexeme, parens, space, spaces, spaces1, token};
