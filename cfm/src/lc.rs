use std::collections::HashMap;
use std::fmt::{Display, Debug};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Index};
use ahash::AHashMap;
use itertools::Itertools;
use num_bigint::BigInt;
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;
use cfm_core::{Elem, AddMon, AddMonOps, AddGrp, AddGrpOps, Ring, RingOps, Field, FieldOps, RMod, RModOps, FF};

use crate::{Gen, Error, LcDisplay, DEFAULT_PREFIX};
use crate::gen::short_type_name;

/// A finite linear combination `Σ r_x x` of basis elements.
///
/// Only nonzero coefficients are stored, so two combinations are equal
/// iff their coefficient maps are, and `is_zero` iff no term remains.
#[derive(PartialEq, Eq, Clone)]
pub struct Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    data: AHashMap<X, R>,
    r_zero: R
}

impl<X, R> Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    pub fn new() -> Self {
        let hasher = ahash::RandomState::with_seeds(0, 0, 0, 0);
        let data = AHashMap::with_hasher(hasher);
        let r_zero = R::zero();
        Self { data, r_zero }
    }

    fn clean(&mut self) {
        self.data.retain(|_, r| !r.is_zero());
    }

    // must clean after call
    fn add_pair(&mut self, rhs: (X, R)) {
        let (x, r) = rhs;
        if r.is_zero() { return }

        if let Some(v) = self.data.get_mut(&x) {
            v.add_assign(r);
        } else {
            self.data.insert(x, r);
        }
    }

    // must clean after call
    fn add_pair_ref(&mut self, rhs: (&X, &R)) {
        let (x, r) = rhs;
        if r.is_zero() { return }

        if let Some(v) = self.data.get_mut(x) {
            v.add_assign(r);
        } else {
            self.data.insert(x.clone(), r.clone());
        }
    }

    pub fn nterms(&self) -> usize {
        self.data.len()
    }

    pub fn is_monomial(&self) -> bool {
        self.nterms() == 1 &&
        self.data.values().all(|r| r.is_one())
    }

    pub fn as_monomial(&self) -> Option<&X> {
        if !self.is_monomial() {
            None?
        }
        self.data.keys().next()
    }

    pub fn coeff(&self, x: &X) -> &R {
        self.data.get(x).unwrap_or(&self.r_zero)
    }

    /// Items `(x, r)` from the least index to the greatest.
    /// Unordered index types come in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (&X, &R)> {
        self.data.iter().sorted_by(|(x, _), (y, _)| x.cmp_gen(y))
    }

    pub fn support(&self) -> Vec<&X> {
        self.iter().map(|(x, _)| x).collect()
    }

    pub fn coefficients(&self) -> Vec<&R> {
        self.iter().map(|(_, r)| r).collect()
    }

    pub fn monomials(&self) -> Vec<Self> {
        self.iter().map(|(x, _)| Self::from(x.clone())).collect()
    }

    pub fn terms(&self) -> Vec<Self> {
        self.iter().map(|(x, r)| Self::from((x.clone(), r.clone()))).collect()
    }

    pub fn items(&self) -> Vec<(&X, &R)> {
        self.iter().collect()
    }

    pub fn monomial_coefficients(&self) -> &AHashMap<X, R> {
        &self.data
    }

    fn extremal_item(&self, greatest: bool) -> Result<(&X, &R), Error> {
        if !X::ORDERED {
            let index_type = short_type_name::<X>();
            return Err(Error::Unordered { index_type })
        }

        let item = if greatest {
            self.data.iter().max_by(|(x, _), (y, _)| x.cmp_gen(y))
        } else {
            self.data.iter().min_by(|(x, _), (y, _)| x.cmp_gen(y))
        };

        item.ok_or(Error::Zero)
    }

    pub fn leading_item(&self) -> Result<(&X, &R), Error> {
        self.extremal_item(true)
    }

    pub fn leading_support(&self) -> Result<&X, Error> {
        self.leading_item().map(|(x, _)| x)
    }

    pub fn leading_coefficient(&self) -> Result<&R, Error> {
        self.leading_item().map(|(_, r)| r)
    }

    pub fn leading_monomial(&self) -> Result<Self, Error> {
        self.leading_item().map(|(x, _)| Self::from(x.clone()))
    }

    pub fn leading_term(&self) -> Result<Self, Error> {
        self.leading_item().map(|(x, r)| Self::from((x.clone(), r.clone())))
    }

    pub fn trailing_item(&self) -> Result<(&X, &R), Error> {
        self.extremal_item(false)
    }

    pub fn trailing_support(&self) -> Result<&X, Error> {
        self.trailing_item().map(|(x, _)| x)
    }

    pub fn trailing_coefficient(&self) -> Result<&R, Error> {
        self.trailing_item().map(|(_, r)| r)
    }

    pub fn trailing_monomial(&self) -> Result<Self, Error> {
        self.trailing_item().map(|(x, _)| Self::from(x.clone()))
    }

    pub fn trailing_term(&self) -> Result<Self, Error> {
        self.trailing_item().map(|(x, r)| Self::from((x.clone(), r.clone())))
    }

    /// Sends each item `(x, r)` to `f(x, r)`. Colliding indices add up.
    pub fn map_item<Y, S, F>(&self, f: F) -> Lc<Y, S>
    where
        Y: Gen,
        S: Ring, for<'x> &'x S: RingOps<S>,
        F: Fn(&X, &R) -> (Y, S)
    {
        self.data.iter().map(|(x, r)| f(x, r)).collect()
    }

    pub fn into_map_item<Y, S, F>(self, f: F) -> Lc<Y, S>
    where
        Y: Gen,
        S: Ring, for<'x> &'x S: RingOps<S>,
        F: Fn(X, R) -> (Y, S)
    {
        self.data.into_iter().map(|(x, r)| f(x, r)).collect()
    }

    pub fn map_support<Y, F>(&self, f: F) -> Lc<Y, R>
    where
        Y: Gen,
        F: Fn(&X) -> Y
    {
        self.map_item(|x, r| (f(x), r.clone()))
    }

    pub fn map_coefficients<S, F>(&self, f: F) -> Lc<X, S>
    where
        S: Ring, for<'x> &'x S: RingOps<S>,
        F: Fn(&R) -> S
    {
        self.map_item(|x, r| (x.clone(), f(r)))
    }

    pub fn into_map_coefficients<S, F>(self, f: F) -> Lc<X, S>
    where
        S: Ring, for<'x> &'x S: RingOps<S>,
        F: Fn(R) -> S
    {
        self.into_map_item(|x, r| (x, f(r)))
    }
}

impl<X, R> Default for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<X, R> From<X> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn from(x: X) -> Self {
        Self::from((x, R::one()))
    }
}

impl<X, R> From<(X, R)> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn from(value: (X, R)) -> Self {
        Self::from_iter([value])
    }
}

impl<X, R> From<HashMap<X, R>> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn from(value: HashMap<X, R>) -> Self {
        Self::from_iter(value)
    }
}

impl<X, R> FromIterator<(X, R)> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn from_iter<T: IntoIterator<Item = (X, R)>>(iter: T) -> Self {
        let mut res = Self::new();
        for e in iter.into_iter() {
            res.add_pair(e);
        }
        res.clean();
        res
    }
}

impl<X, R> IntoIterator for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type Item = (X, R);
    type IntoIter = std::vec::IntoIter<(X, R)>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter().sorted_by(|(x, _), (y, _)| x.cmp_gen(y))
    }
}

#[cfg(feature = "serde")]
impl<X, R> serde::Serialize for Lc<X, R>
where
    X: Gen + serde::Serialize,
    R: Ring + serde::Serialize, for<'x> &'x R: RingOps<R>
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        serializer.collect_map(self.iter())
    }
}

// Goes through `from_iter`, so zero coefficients are dropped and the
// map gets the fixed-seed hasher.
#[cfg(feature = "serde")]
impl<'de, X, R> serde::Deserialize<'de> for Lc<X, R>
where
    X: Gen + serde::Deserialize<'de>,
    R: Ring + serde::Deserialize<'de>, for<'x> &'x R: RingOps<R>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        let data = HashMap::<X, R>::deserialize(deserializer)?;
        Ok(Self::from(data))
    }
}

impl<'a, X, R> IntoIterator for &'a Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type Item = (&'a X, &'a R);
    type IntoIter = std::vec::IntoIter<(&'a X, &'a R)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter().collect_vec().into_iter()
    }
}

impl<X, R> Index<&X> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type Output = R;

    fn index(&self, x: &X) -> &R {
        self.coeff(x)
    }
}

impl<X, R> Display for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&LcDisplay::new(self, DEFAULT_PREFIX), f)
    }
}

impl<X, R> Debug for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<X, R> Zero for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }
}

impl<X, R> Neg for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.into_map_coefficients(|r| -r)
    }
}

impl<X, R> Neg for &Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type Output = Lc<X, R>;

    fn neg(self) -> Self::Output {
        self.map_coefficients(|r| -r)
    }
}

#[auto_ops]
impl<X, R> AddAssign<&Lc<X, R>> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn add_assign(&mut self, rhs: &Self) {
        for e in rhs.data.iter() {
            self.add_pair_ref(e);
        }
        self.clean()
    }
}

#[auto_ops]
impl<X, R> SubAssign<&Lc<X, R>> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn sub_assign(&mut self, rhs: &Self) {
        for (x, r) in rhs.data.iter() {
            self.add_pair_ref((x, &-r));
        }
        self.clean()
    }
}

#[auto_ops]
impl<X, R> MulAssign<&R> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn mul_assign(&mut self, rhs: &R) {
        for r in self.data.values_mut() {
            r.mul_assign(rhs);
        }
        self.clean()
    }
}

// over a field the combinations form a vector space.

#[auto_ops]
impl<X, K> DivAssign<&K> for Lc<X, K>
where
    X: Gen,
    K: Field, for<'x> &'x K: FieldOps<K>
{
    fn div_assign(&mut self, rhs: &K) {
        for r in self.data.values_mut() {
            r.div_assign(rhs);
        }
    }
}

macro_rules! impl_scalar_mul {
    ($type:ty) => {
        impl<X> Mul<Lc<X, $type>> for $type
        where X: Gen {
            type Output = Lc<X, $type>;
            fn mul(self, rhs: Lc<X, $type>) -> Self::Output {
                rhs * self
            }
        }

        impl<'a, X> Mul<&'a Lc<X, $type>> for $type
        where X: Gen {
            type Output = Lc<X, $type>;
            fn mul(self, rhs: &'a Lc<X, $type>) -> Self::Output {
                rhs * self
            }
        }
    };
}

impl_scalar_mul!(i32);
impl_scalar_mul!(i64);
impl_scalar_mul!(i128);
impl_scalar_mul!(BigInt);

#[allow(non_upper_case_globals)]
impl<X, const p: i32> Mul<Lc<X, FF<p>>> for FF<p>
where X: Gen {
    type Output = Lc<X, FF<p>>;
    fn mul(self, rhs: Lc<X, FF<p>>) -> Self::Output {
        rhs * self
    }
}

#[allow(non_upper_case_globals)]
impl<'a, X, const p: i32> Mul<&'a Lc<X, FF<p>>> for FF<p>
where X: Gen {
    type Output = Lc<X, FF<p>>;
    fn mul(self, rhs: &'a Lc<X, FF<p>>) -> Self::Output {
        rhs * self
    }
}

macro_rules! impl_alg_ops {
    ($trait:ident) => {
        impl<X, R> $trait<Self> for Lc<X, R>
        where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}

        impl<X, R> $trait<Lc<X, R>> for &Lc<X, R>
        where X: Gen, R: Ring, for<'x> &'x R: RingOps<R> {}
    };
}

impl_alg_ops!(AddMonOps);
impl_alg_ops!(AddGrpOps);

impl<X, R> Elem for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn math_symbol() -> String {
        format!("{}<{}>", R::math_symbol(), short_type_name::<X>())
    }
}

impl<X, R> AddMon for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{}

impl<X, R> AddGrp for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{}

impl<X, R> RModOps<R, Self> for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{}

impl<X, R> RModOps<R, Lc<X, R>> for &Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{}

impl<X, R> RMod for Lc<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    type R = R;
}
