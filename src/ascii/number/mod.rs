pub mod digit;
pub mod integer;
pub mod natural;

pub use digit::{Digit, digit};
pub use integer::{Integer, integer};
pub use natural::{Natural, natural};

/// Fold decimal digits into a `u64`, or `None` on overflow
fn fold_digits(digits: &[u8]) -> Option<u64> {
    digits
        .iter()
        .try_fold(0u64, |acc, &d| acc.checked_mul(10)?.checked_add(u64::from(d)))
}
