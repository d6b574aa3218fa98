use std::ops::{Mul, MulAssign, Div, DivAssign};
use num_traits::One;
use crate::{Elem, AddGrp, AddGrpOps};

// Multiplicative structures

pub trait MonOps<T = Self>:
    Sized +
    Mul<T, Output = T> +
    for<'a> Mul<&'a T, Output = T>
{}

pub trait RingOps<T = Self>:
    AddGrpOps<T> +
    MonOps<T>
{}

pub trait FieldOps<T = Self>:
    RingOps<T> +
    Div<T, Output = T> +
    for<'a> Div<&'a T, Output = T>
{}

pub trait Mon:
    Elem +
    MonOps +
    MulAssign +
    for<'a> MulAssign<&'a Self> +
    One
where
    for<'a> &'a Self: MonOps<Self>
{}

/// Coefficient rings of free modules.
///
/// `From<i32>` is the canonical map from the integers, so that
/// coefficients like `2` or `-3` can be written in any ring.
pub trait Ring:
    AddGrp +
    Mon +
    RingOps +
    From<i32>
where
    for<'a> &'a Self: RingOps<Self>
{
    fn is_pm_one(&self) -> bool {
        self.is_one() || (-self).is_one()
    }
}

pub trait Field:
    Ring +
    FieldOps +
    DivAssign +
    for<'a> DivAssign<&'a Self>
where
    for<'a> &'a Self: FieldOps<Self>
{
    /// The multiplicative inverse, `None` for zero.
    fn inv(&self) -> Option<Self>;
}

// Modules over rings

/// Scalar multiplication from the right, `x * r` and `x * &r`,
/// on top of the additive group operations.
pub trait RModOps<R, T>:
    AddGrpOps<T> +
    Mul<R, Output = T> +
    for<'a> Mul<&'a R, Output = T>
where
    R: Ring, for<'x> &'x R: RingOps<R>
{}

pub trait RMod:
    AddGrp +
    RModOps<Self::R, Self> +
    MulAssign<Self::R> +
    for<'a> MulAssign<&'a Self::R>
where
    Self::R: Ring, for<'x> &'x Self::R: RingOps<Self::R>,
    for<'a> &'a Self: RModOps<Self::R, Self>,
{
    type R;
}
