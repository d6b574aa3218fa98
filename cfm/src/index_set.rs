use std::fmt::Display;
use std::sync::Arc;
use indexmap::IndexSet as OrderedSet;
use itertools::Itertools;
use cfm_core::FF;

use crate::Gen;

type Enumerate<X> = Arc<dyn Fn() -> Box<dyn Iterator<Item = X>> + Send + Sync>;
type Contains<X> = Arc<dyn Fn(&X) -> bool + Send + Sync>;

/// The set indexing the basis of a free module. 
/// 
/// A finite set keeps its elements in insertion order. An infinite set is 
/// given by a name, an enumeration that is re-run on every call to 
/// [`IndexSet::iter`], and a membership test.
#[derive(Clone)]
pub struct IndexSet<X>
where X: Gen { 
    repr: Repr<X>
}

#[derive(Clone)]
enum Repr<X>
where X: Gen { 
    Finite { 
        name: Option<String>,
        elems: OrderedSet<X, ahash::RandomState>
    },
    Infinite { 
        name: String,
        enumerate: Enumerate<X>,
        contains: Contains<X>
    }
}

impl<X> IndexSet<X>
where X: Gen { 
    pub fn finite<I>(elems: I) -> Self
    where I: IntoIterator<Item = X> { 
        let mut set = OrderedSet::with_hasher(ahash::RandomState::with_seeds(0, 0, 0, 0));
        set.extend(elems);
        let repr = Repr::Finite { name: None, elems: set };
        Self { repr }
    }

    pub fn infinite<E, I, C>(name: &str, enumerate: E, contains: C) -> Self
    where 
        E: Fn() -> I + Send + Sync + 'static,
        I: Iterator<Item = X> + 'static,
        C: Fn(&X) -> bool + Send + Sync + 'static
    { 
        let enumerate: Enumerate<X> = Arc::new(move || Box::new(enumerate()));
        let contains: Contains<X> = Arc::new(contains);
        let repr = Repr::Infinite { name: name.to_string(), enumerate, contains };
        Self { repr }
    }

    /// Names a finite set. The name replaces the element listing on display.
    pub fn named(self, name: &str) -> Self { 
        match self.repr { 
            Repr::Finite { elems, .. } => {
                let repr = Repr::Finite { name: Some(name.to_string()), elems };
                Self { repr }
            },
            Repr::Infinite { enumerate, contains, .. } => {
                let repr = Repr::Infinite { name: name.to_string(), enumerate, contains };
                Self { repr }
            }
        }
    }

    pub fn is_finite(&self) -> bool { 
        matches!(self.repr, Repr::Finite { .. })
    }

    /// The number of elements, `None` if infinite.
    pub fn len(&self) -> Option<usize> { 
        match &self.repr { 
            Repr::Finite { elems, .. } => Some(elems.len()),
            Repr::Infinite { .. } => None
        }
    }

    pub fn is_empty(&self) -> bool { 
        self.len() == Some(0)
    }

    pub fn contains(&self, x: &X) -> bool { 
        match &self.repr { 
            Repr::Finite { elems, .. } => elems.contains(x),
            Repr::Infinite { contains, .. } => contains(x)
        }
    }

    /// A fresh enumeration of the elements, lazy for infinite sets.
    pub fn iter(&self) -> Box<dyn Iterator<Item = X> + '_> { 
        match &self.repr { 
            Repr::Finite { elems, .. } => Box::new(elems.iter().cloned()),
            Repr::Infinite { enumerate, .. } => enumerate()
        }
    }
}

impl IndexSet<usize> { 
    pub fn naturals() -> Self { 
        Self::infinite("Non negative integers", || 0.., |_| true)
    }
}

#[allow(non_upper_case_globals)]
impl<const p: i32> IndexSet<FF<p>> { 
    pub fn zmod() -> Self { 
        let name = format!("Ring of integers modulo {p}");
        Self::finite(FF::<p>::elements()).named(&name)
    }
}

impl<X> FromIterator<X> for IndexSet<X>
where X: Gen { 
    fn from_iter<T: IntoIterator<Item = X>>(iter: T) -> Self {
        Self::finite(iter)
    }
}

impl<X> From<Vec<X>> for IndexSet<X>
where X: Gen { 
    fn from(elems: Vec<X>) -> Self {
        Self::finite(elems)
    }
}

impl<X, const N: usize> From<[X; N]> for IndexSet<X>
where X: Gen { 
    fn from(elems: [X; N]) -> Self {
        Self::finite(elems)
    }
}

impl<X> PartialEq for IndexSet<X>
where X: Gen { 
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) { 
            (Repr::Finite { elems: e1, .. }, Repr::Finite { elems: e2, .. }) => 
                e1.len() == e2.len() && e1.iter().all(|x| e2.contains(x)),
            (Repr::Infinite { name: n1, .. }, Repr::Infinite { name: n2, .. }) => 
                n1 == n2,
            _ => false
        }
    }
}

impl<X> Eq for IndexSet<X>
where X: Gen {}

impl<X> Display for IndexSet<X>
where X: Gen { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr { 
            Repr::Finite { name: Some(name), .. } | 
            Repr::Infinite { name, .. } => write!(f, "{name}"),
            Repr::Finite { name: None, elems } => { 
                let elems = elems.iter().map(|x| format!("{x:?}")).join(", ");
                write!(f, "{{{elems}}}")
            }
        }
    }
}

impl<X> std::fmt::Debug for IndexSet<X>
where X: Gen { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite() { 
        let s = IndexSet::finite(["spam", "eggs", "42", "eggs"]);
        assert!(s.is_finite());
        assert_eq!(s.len(), Some(3));
        assert!(s.contains(&"eggs"));
        assert!(!s.contains(&"ham"));
        assert_eq!(s.iter().collect_vec(), vec!["spam", "eggs", "42"]);
        assert_eq!(s.to_string(), r#"{"spam", "eggs", "42"}"#);
    }

    #[test]
    fn empty() { 
        let s = IndexSet::<i32>::finite([]);
        assert!(s.is_empty());
        assert_eq!(s.iter().count(), 0);
        assert_eq!(s.to_string(), "{}");
    }

    #[test]
    fn zmod() { 
        let s = IndexSet::<FF<5>>::zmod();
        assert_eq!(s.len(), Some(5));
        assert!(s.contains(&FF::new(7)));
        assert_eq!(s.to_string(), "Ring of integers modulo 5");
        assert_eq!(s.iter().map(|a| *a.rep()).collect_vec(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn naturals() { 
        let s = IndexSet::<usize>::naturals();
        assert!(!s.is_finite());
        assert_eq!(s.len(), None);
        assert!(!s.is_empty());
        assert!(s.contains(&1_000_000));
        assert_eq!(s.to_string(), "Non negative integers");
    }

    #[test]
    fn iter_is_restartable() { 
        let s = IndexSet::<usize>::naturals();
        let a = s.iter().take(3).collect_vec();
        let b = s.iter().take(3).collect_vec();
        assert_eq!(a, vec![0, 1, 2]);
        assert_eq!(a, b);
    }

    #[test]
    fn infinite_contains() { 
        let evens = IndexSet::infinite("Even integers", || (0..).map(|i: i64| 2 * i), |x| x % 2 == 0);
        assert!(evens.contains(&4));
        assert!(!evens.contains(&3));
        assert_eq!(evens.iter().take(3).collect_vec(), vec![0, 2, 4]);
    }

    #[test]
    fn eq() { 
        let s1 = IndexSet::from([1, 2, 3]);
        let s2 = IndexSet::from(vec![3, 2, 1]);
        let s3 = IndexSet::from([1, 2]);
        assert_eq!(s1, s2);
        assert_ne!(s1, s3);

        assert_eq!(IndexSet::<usize>::naturals(), IndexSet::<usize>::naturals());
        assert_ne!(IndexSet::<usize>::naturals(), IndexSet::from_iter(0..3));
    }
}
