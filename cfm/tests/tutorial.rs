use itertools::Itertools;
use num_traits::Zero;
use cfm::{FreeModule, IndexSet, Lc, Error};
use cfm_core::FF;

type F5 = FF<5>;

fn a(i: i32) -> F5 {
    F5::new(i)
}

fn show<X, R>(m: &FreeModule<X, R>, z: &Lc<X, R>) -> String
where
    X: cfm::Gen,
    R: cfm_core::Ring, for<'x> &'x R: cfm_core::RingOps<R>
{
    m.display(z).to_string()
}

#[test]
fn construction() {
    let m = FreeModule::<F5, i32>::new(IndexSet::<F5>::zmod());
    assert_eq!(m.an_element().to_string(), "2*B[0] + 2*B[1] + 3*B[2]");

    let m = FreeModule::<&str, i32>::new(["spam", "eggs", "42"]);
    assert_eq!(m.an_element().to_string(), r#"3*B["42"] + 2*B["eggs"] + 2*B["spam"]"#);

    let m = FreeModule::<(i32,), i32>::new([(1,), (2,), (3,)]);
    assert_eq!(m.an_element().to_string(), "2*B[(1,)] + 2*B[(2,)] + 3*B[(3,)]");

    let m = FreeModule::<F5, i32>::with_prefix(IndexSet::<F5>::zmod(), "a");
    assert_eq!(show(&m, &m.an_element()), "2*a[0] + 2*a[1] + 3*a[2]");
}

#[test]
fn arithmetic() {
    let m = FreeModule::<F5, i32>::with_prefix(IndexSet::<F5>::zmod(), "a");
    let f = m.an_element();

    assert_eq!(show(&m, &(2 * &f)), "4*a[0] + 4*a[1] + 6*a[2]");
    assert_eq!(show(&m, &(2 * &f - &f)), "2*a[0] + 2*a[1] + 3*a[2]");
    assert_eq!(2 * &f - &f, f);
}

#[test]
fn canonical_basis() {
    let m = FreeModule::<F5, i32>::with_prefix(IndexSet::<F5>::zmod(), "a");
    let f = m.an_element();
    let b = m.basis();

    let all = b.iter().map(|e| show(&m, &e)).collect_vec();
    assert_eq!(all, vec!["a[0]", "a[1]", "a[2]", "a[3]", "a[4]"]);
    assert_eq!(b.keys().to_string(), "Ring of integers modulo 5");
    assert_eq!(show(&m, &b.get(a(2))), "a[2]");

    let z = b.get(a(0)) + 3 * b.get(a(1));
    assert_eq!(show(&m, &z), "a[0] + 3*a[1]");

    let g = 2 * b.get(a(0)) + 2 * b.get(a(1)) + 3 * b.get(a(2));
    assert_eq!(g, f);
}

#[test]
fn introspection() {
    let m = FreeModule::<F5, i32>::with_prefix(IndexSet::<F5>::zmod(), "a");
    let f = m.an_element();

    assert_eq!(show(&m, &f.leading_term().unwrap()), "3*a[2]");
    assert_eq!(show(&m, &f.leading_monomial().unwrap()), "a[2]");
    assert_eq!(f.leading_support(), Ok(&a(2)));
    assert_eq!(f.leading_coefficient(), Ok(&3));
    assert_eq!(f.leading_item(), Ok((&a(2), &3)));

    assert_eq!(f.trailing_item(), Ok((&a(0), &2)));

    assert_eq!(f.support(), vec![&a(0), &a(1), &a(2)]);
    assert_eq!(f.monomials().iter().map(|e| show(&m, e)).collect_vec(), vec!["a[0]", "a[1]", "a[2]"]);
    assert_eq!(f.coefficients(), vec![&2, &2, &3]);

    let lines = f.iter().map(|(i, c)|
        format!("The coefficient of a_{{{i:?}}} is {c}")
    ).collect_vec();
    assert_eq!(lines, vec![
        "The coefficient of a_{0} is 2",
        "The coefficient of a_{1} is 2",
        "The coefficient of a_{2} is 3",
    ]);

    assert_eq!((f[&a(0)], f[&a(1)], f[&a(2)]), (2, 2, 3));
    assert_eq!(f[&a(4)], 0);

    let mc = f.monomial_coefficients();
    assert_eq!(mc.len(), 3);
    for x in f.support() {
        assert_eq!(mc[x], f[x]);
    }
}

#[test]
fn mapping() {
    let m = FreeModule::<F5, i32>::with_prefix(IndexSet::<F5>::zmod(), "a");
    let f = m.an_element();
    let one = a(1);

    assert_eq!(show(&m, &f.map_support(|i| i + one)), "2*a[1] + 2*a[2] + 3*a[3]");
    assert_eq!(show(&m, &f.map_coefficients(|c| c - 3)), "-a[0] - a[1]");
    assert_eq!(show(&m, &f.map_item(|i, c| (i + one, c - 3))), "-a[1] - a[2]");
    assert_eq!(f.map_coefficients(|c| *c), f);

    let g = f.map_support(|i| if *i == a(1) { a(0) } else { *i });
    assert_eq!(show(&m, &g), "4*a[0] + 3*a[2]");
}

#[test]
fn module_helpers() {
    let m = FreeModule::<F5, i32>::with_prefix(IndexSet::<F5>::zmod(), "a");
    let b = m.basis();
    let large = || F5::elements().filter(|i| *i.rep() > 2);

    assert_eq!(show(&m, &m.zero()), "0");
    assert_eq!(show(&m, &m.term(a(1), 1)), "a[1]");
    assert_eq!(show(&m, &m.sum_of_monomials(large())), "a[3] + a[4]");
    assert_eq!(show(&m, &m.sum_of_terms(large().map(|i| (i + a(1), *i.rep())))), "4*a[0] + 3*a[4]");
    assert_eq!(show(&m, &m.sum(large().map(|i| *i.rep() * b.get(i + a(1))))), "4*a[0] + 3*a[4]");

    let empty = m.sum(Vec::<Lc<F5, i32>>::new());
    assert!(empty.is_zero());
    assert_eq!(empty, m.zero());
    assert_eq!(m.zero(), FreeModule::<F5, i32>::with_prefix(IndexSet::<F5>::zmod(), "a").zero());
}

#[test]
fn unchecked_lookup() {
    let m = FreeModule::<&str, i32>::with_prefix(["spam", "eggs", "42"], "a");
    let b = m.basis();

    let z = b.get("is") + b.get("this") + b.get("a") + b.get("bug");
    assert_eq!(show(&m, &z), r#"a["a"] + a["bug"] + a["is"] + a["this"]"#);

    assert!(matches!(b.try_get("bug"), Err(Error::InvalidIndex { .. })));
}

#[test]
fn round_trip() {
    let m = FreeModule::<&str, i64>::new(["x", "y", "z"]);
    let b = m.basis();
    let f = 5i64 * b.get("x") - 7i64 * b.get("z") + b.get("w");

    let g = m.sum_of_terms(f.monomial_coefficients().iter().map(|(x, r)| (*x, *r)));
    assert_eq!(f, g);
}

#[test]
fn merge_sum() {
    let m1 = [(0, 1), (1, 2), (2, -3)];
    let m2 = [(1, -2), (2, 4), (5, 6)];

    let f = Lc::<i32, i32>::from_iter(m1);
    let g = Lc::<i32, i32>::from_iter(m2);
    let merged = Lc::from_iter(m1.into_iter().chain(m2));

    assert_eq!(&f + &g, merged);
    assert!(!(&f + &g).monomial_coefficients().contains_key(&1));
    assert_eq!((&f + &g).nterms(), 3);
}

#[test]
fn vector_space() {
    type K = FF<7>;
    let m = FreeModule::<usize, K>::new(IndexSet::<usize>::naturals());
    let b = m.basis();

    let v = K::new(3) * b.get(0) + K::new(6) * b.get(4);
    let w = &v / K::new(3);
    assert_eq!(w.to_string(), "B[0] + 2*B[4]");
    assert_eq!(w * K::new(3), v);
    assert_eq!(m.to_string(), "Free module generated by Non negative integers over F₇");
}
