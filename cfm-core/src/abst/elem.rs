use std::fmt::{Debug, Display};

/// A value of some algebraic structure, which is named by `math_symbol`
/// (`Z`, `F₅`, `Z<i32>`).
///
/// Coefficients and free module elements are both `Elem`s: they have a
/// default value, compare by value, print, and move across threads.
pub trait Elem:
    Default +
    Eq +
    Clone +
    Send +
    Sync +
    Display +
    Debug +
    'static
{
    fn math_symbol() -> String;
}
