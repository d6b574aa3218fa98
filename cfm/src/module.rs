use std::fmt::Display;
use std::marker::PhantomData;
use std::ops::AddAssign;
use std::sync::Arc;
use log::{debug, trace};
use cfm_core::{AddMon, Ring, RingOps};

use crate::{Gen, IndexSet, Lc, LcDisplay, Error, DEFAULT_PREFIX};

/// The free `R`-module with basis `(B_x)` indexed by an [`IndexSet`].
///
/// Its elements are the values of type [`Lc<X, R>`]. The module itself
/// carries what the element type cannot: the index set and the display
/// prefix. Clones share the same state.
pub struct FreeModule<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    inner: Arc<Inner<X>>,
    _ring: PhantomData<R>
}

struct Inner<X>
where X: Gen {
    index_set: IndexSet<X>,
    prefix: String
}

impl<X, R> FreeModule<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    pub fn new<S>(index_set: S) -> Self
    where S: Into<IndexSet<X>> {
        Self::with_prefix(index_set, DEFAULT_PREFIX)
    }

    pub fn with_prefix<S>(index_set: S, prefix: &str) -> Self
    where S: Into<IndexSet<X>> {
        let index_set = index_set.into();
        let prefix = prefix.to_string();
        let inner = Arc::new(Inner { index_set, prefix });
        let module = Self { inner, _ring: PhantomData };

        debug!("{module} (prefix: {})", module.prefix());

        module
    }

    pub fn index_set(&self) -> &IndexSet<X> {
        &self.inner.index_set
    }

    pub fn prefix(&self) -> &str {
        &self.inner.prefix
    }

    pub fn basis(&self) -> Basis<X, R> {
        Basis { module: self.clone() }
    }

    pub fn zero(&self) -> Lc<X, R> {
        Lc::new()
    }

    /// The basis element `B_x`. `x` is not checked against the index set.
    pub fn monomial(&self, x: X) -> Lc<X, R> {
        self.term(x, R::one())
    }

    /// The term `r B_x`. `x` is not checked against the index set.
    pub fn term(&self, x: X, r: R) -> Lc<X, R> {
        if log::log_enabled!(log::Level::Trace) && !self.index_set().contains(&x) {
            trace!("unchecked index {x:?} is not in {}", self.index_set());
        }
        Lc::from((x, r))
    }

    pub fn try_term(&self, x: X, r: R) -> Result<Lc<X, R>, Error> {
        self.validate(&x)?;
        Ok(Lc::from((x, r)))
    }

    fn validate(&self, x: &X) -> Result<(), Error> {
        if self.index_set().contains(x) {
            Ok(())
        } else {
            let index = format!("{x:?}");
            let index_set = self.index_set().to_string();
            Err(Error::InvalidIndex { index, index_set })
        }
    }

    pub fn sum_of_monomials<I>(&self, indices: I) -> Lc<X, R>
    where I: IntoIterator<Item = X> {
        self.sum_of_terms(indices.into_iter().map(|x| (x, R::one())))
    }

    pub fn sum_of_terms<I>(&self, terms: I) -> Lc<X, R>
    where I: IntoIterator<Item = (X, R)> {
        let res = Lc::from_iter(terms);
        trace!("sum of terms: {}", self.display(&res));
        res
    }

    /// Sums owned or borrowed elements. An empty input gives `self.zero()`.
    pub fn sum<A, I>(&self, elems: I) -> Lc<X, R>
    where
        Lc<X, R>: AddAssign<A>,
        I: IntoIterator<Item = A>
    {
        let res = Lc::<X, R>::sum(elems);
        trace!("sum: {}", self.display(&res));
        res
    }

    /// A sample element: the first three indices with coefficients 2, 2, 3.
    pub fn an_element(&self) -> Lc<X, R> {
        let coeffs = [2, 2, 3].map(|c: i32| R::from(c));
        self.sum_of_terms(self.index_set().iter().zip(coeffs))
    }

    pub fn display<'a>(&'a self, elem: &'a Lc<X, R>) -> LcDisplay<'a, X, R> {
        LcDisplay::new(elem, self.prefix())
    }
}

impl<X, R> Clone for FreeModule<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn clone(&self) -> Self {
        let inner = Arc::clone(&self.inner);
        Self { inner, _ring: PhantomData }
    }
}

impl<X, R> PartialEq for FreeModule<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || (
            self.index_set() == other.index_set() &&
            self.prefix() == other.prefix()
        )
    }
}

impl<X, R> Eq for FreeModule<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{}

impl<X, R> Display for FreeModule<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Free module generated by {} over {}", self.index_set(), R::math_symbol())
    }
}

impl<X, R> std::fmt::Debug for FreeModule<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// The canonical basis `(B_x)_{x ∈ I}` of a [`FreeModule`], as a lazy family.
#[derive(Clone)]
pub struct Basis<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    module: FreeModule<X, R>
}

impl<X, R> Basis<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    pub fn module(&self) -> &FreeModule<X, R> {
        &self.module
    }

    pub fn keys(&self) -> &IndexSet<X> {
        self.module.index_set()
    }

    /// Runs through `B_x` in the order of the index set.
    /// Each call starts over, and never ends for an infinite index set.
    pub fn iter(&self) -> impl Iterator<Item = Lc<X, R>> + '_ {
        self.keys().iter().map(|x| Lc::from(x))
    }

    /// `B_x`, without checking that `x` is in the index set.
    pub fn get(&self, x: X) -> Lc<X, R> {
        self.module.monomial(x)
    }

    pub fn try_get(&self, x: X) -> Result<Lc<X, R>, Error> {
        self.module.try_term(x, R::one())
    }
}

impl<X, R> Display for Basis<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lazy family (Term map from {} to {}(i))_{{i in {}}}", self.keys(), self.module, self.keys())
    }
}
