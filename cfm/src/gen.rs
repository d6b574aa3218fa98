use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;
use cfm_core::FF;

/// Values that can index the basis of a free module.
/// 
/// Indices are displayed by their `Debug` representation. A total order 
/// is optional: types that leave `ORDERED` false compare everything as 
/// equal, so sorting by `cmp_gen` keeps the storage order, and 
/// leading / trailing queries are refused.
pub trait Gen: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    const ORDERED: bool = false;

    fn cmp_gen(&self, _other: &Self) -> Ordering { 
        Ordering::Equal
    }
}

/// `type_name::<T>()` with the module path stripped from every path in it,
/// e.g. `(i32, my::Loose)` becomes `(i32, Loose)`.
pub(crate) fn short_type_name<T>() -> String { 
    let full_name = std::any::type_name::<T>();
    let last = |path: &str| path.rsplit("::").next().unwrap_or(path).to_string();

    let mut res = String::new();
    let mut path = String::new();
    for c in full_name.chars() { 
        if c.is_alphanumeric() || c == '_' || c == ':' { 
            path.push(c);
        } else { 
            res += &last(&path);
            path.clear();
            res.push(c);
        }
    }
    res += &last(&path);
    res
}

macro_rules! impl_ordered_gen {
    ($($type:ty),*) => {
        $(
            impl Gen for $type {
                const ORDERED: bool = true;

                fn cmp_gen(&self, other: &Self) -> Ordering { 
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_ordered_gen!(
    i8, i16, i32, i64, i128, isize, 
    u8, u16, u32, u64, u128, usize, 
    char, bool, String, &'static str, 
    num_bigint::BigInt
);

#[allow(non_upper_case_globals)]
impl<const p: i32> Gen for FF<p> {
    const ORDERED: bool = true;

    fn cmp_gen(&self, other: &Self) -> Ordering { 
        self.cmp(other)
    }
}

// tuples are ordered lexicographically, and only if every component is.

impl<A> Gen for (A,)
where A: Gen { 
    const ORDERED: bool = A::ORDERED;

    fn cmp_gen(&self, other: &Self) -> Ordering { 
        self.0.cmp_gen(&other.0)
    }
}

impl<A, B> Gen for (A, B)
where A: Gen, B: Gen { 
    const ORDERED: bool = A::ORDERED && B::ORDERED;

    fn cmp_gen(&self, other: &Self) -> Ordering { 
        self.0.cmp_gen(&other.0)
            .then_with(|| self.1.cmp_gen(&other.1))
    }
}

impl<A, B, C> Gen for (A, B, C)
where A: Gen, B: Gen, C: Gen { 
    const ORDERED: bool = A::ORDERED && B::ORDERED && C::ORDERED;

    fn cmp_gen(&self, other: &Self) -> Ordering { 
        self.0.cmp_gen(&other.0)
            .then_with(|| self.1.cmp_gen(&other.1))
            .then_with(|| self.2.cmp_gen(&other.2))
    }
}
