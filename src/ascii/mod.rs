pub mod number;

pub use number::{Digit, Integer, Natural, digit, integer, natural};
