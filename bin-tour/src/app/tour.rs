use std::collections::HashMap;
use std::fmt::Display;
use itertools::Itertools;
use log::info;
use cfm::{FreeModule, Gen, IndexSet, Lc, Error};
use cfm_core::{FF, Ring, RingOps};
use cfm_core::util::format::table;

use crate::app::app::CliArgs;
use crate::app::utils::{IType, CType};
use crate::app::err::*;

pub type Int = i64;

pub fn dispatch(args: &CliArgs) -> TourResult<String> {
    macro_rules! run {
        ($set:expr, $outsider:expr) => {
            match args.ring {
                CType::Z  => Tour::<_, Int>::new(args, $set, $outsider).run(),
                CType::F5 => Tour::<_, FF<5>>::new(args, $set, $outsider).run(),
            }
        };
    }

    match args.index_set {
        IType::Zmod5    => run!(IndexSet::<FF<5>>::zmod(), None),
        IType::Strings  => run!(IndexSet::finite(["spam", "eggs", "42"]), Some("bug")),
        IType::Tuples   => run!(IndexSet::finite([(1i32,), (2,), (3,)]), Some((4,))),
        IType::Naturals => run!(IndexSet::<usize>::naturals(), None),
    }
}

/// Replays the tutorial session on a free module, writing
/// `label = value` lines grouped by topic.
pub struct Tour<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    module: FreeModule<X, R>,
    outsider: Option<X>,
    show_table: bool,
    buff: String
}

impl<X, R> Tour<X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    pub fn new(args: &CliArgs, index_set: IndexSet<X>, outsider: Option<X>) -> Self {
        let module = FreeModule::with_prefix(index_set, &args.prefix);
        let buff = String::with_capacity(1024);
        Tour { module, outsider, show_table: args.table, buff }
    }

    pub fn run(&mut self) -> TourResult<String> {
        ensure!(!self.module.prefix().is_empty(), "prefix must not be empty.");

        let keys = self.module.index_set().iter().take(5).collect_vec();
        ensure!(keys.len() >= 3, "{} has less than 3 elements.", self.module.index_set());

        info!("tour: {}", self.module);

        self.line("M", self.module.clone());
        self.out("");

        let f = self.module.an_element();

        self.show_element(&f);
        self.show_basis(&keys);
        self.show_introspection(&f, &keys);
        self.show_mapping(&f, &keys);
        self.show_helpers(&keys);

        Ok(self.flush())
    }

    fn show_element(&mut self, f: &Lc<X, R>) {
        let g = f * R::from(2);

        self.header("element");
        self.line("f", self.fmt(f));
        self.line("2*f", self.fmt(&g));
        self.line("2*f - f", self.fmt(&(&g - f)));

        if self.show_table {
            let t = self.coeff_table(f);
            self.out(&t);
        }

        self.out("");
    }

    fn show_basis(&mut self, keys: &[X]) {
        let b = self.module.basis();
        let (x0, x1) = (&keys[0], &keys[1]);
        let first = b.iter().take(5).map(|e| self.fmt(&e)).join(", ");

        self.header("basis");
        self.line("basis", &b);
        self.line("keys", b.keys());
        self.line("list(basis)", format!("[{first}]"));
        self.line(format!("basis[{x0:?}]"), self.fmt(&b.get(x0.clone())));

        let z = b.get(x0.clone()) + b.get(x1.clone()) * R::from(3);
        self.line(format!("basis[{x0:?}] + 3*basis[{x1:?}]"), self.fmt(&z));

        let checked = b.try_get(x0.clone()).map(|e| self.fmt(&e));
        self.line_res(format!("try_get({x0:?})"), checked);

        if let Some(y) = self.outsider.clone() {
            let unchecked = self.fmt(&b.get(y.clone()));
            self.line(format!("basis[{y:?}]"), unchecked);

            let checked = b.try_get(y.clone()).map(|e| self.fmt(&e));
            self.line_res(format!("try_get({y:?})"), checked);
        }

        self.out("");
    }

    fn show_introspection(&mut self, f: &Lc<X, R>, keys: &[X]) {
        self.header("introspection");

        let res = f.leading_term().map(|z| self.fmt(&z));
        self.line_res("leading_term", res);

        let res = f.leading_monomial().map(|z| self.fmt(&z));
        self.line_res("leading_monomial", res);

        let res = f.leading_support().map(|x| format!("{x:?}"));
        self.line_res("leading_support", res);

        let res = f.leading_coefficient().map(|r| r.to_string());
        self.line_res("leading_coefficient", res);

        let res = f.trailing_item().map(|(x, r)| format!("({x:?}, {r})"));
        self.line_res("trailing_item", res);

        let monomials = f.monomials().iter().map(|e| self.fmt(e)).join(", ");
        let coefficients = f.coefficients().iter().join(", ");

        self.line("support", format!("{:?}", f.support()));
        self.line("monomials", format!("[{monomials}]"));
        self.line("coefficients", format!("[{coefficients}]"));

        let prefix = self.module.prefix().to_string();
        for (x, c) in f.iter() {
            self.out(&format!("The coefficient of {prefix}_{{{x:?}}} is {c}"));
        }

        for x in keys.iter().take(4) {
            self.line(format!("f[{x:?}]"), &f[x]);
        }

        let mc = f.monomial_coefficients();
        let entries = f.support().into_iter().map(|x|
            format!("{x:?}: {}", f[x])
        ).join(", ");
        self.line(format!("monomial_coefficients ({} entries)", mc.len()), format!("{{{entries}}}"));

        self.out("");
    }

    fn show_mapping(&mut self, f: &Lc<X, R>, keys: &[X]) {
        let three = R::from(3);
        let succ = |x: &X| shift(keys, x);
        let (x0, x1) = (&keys[0], &keys[1]);

        self.header("mapping");
        self.line("map_support(shift)", self.fmt(&f.map_support(succ)));
        self.line("map_coefficients(c - 3)", self.fmt(&f.map_coefficients(|c| c - &three)));
        self.line("map_item(shift, c - 3)", self.fmt(&f.map_item(|x, c| (succ(x), c - &three))));

        let merged = f.map_support(|x| if x == x1 { x0.clone() } else { x.clone() });
        self.line(format!("map_support({x1:?} -> {x0:?})"), self.fmt(&merged));

        self.out("");
    }

    /// `x_k` is the `k`-th listed index. The helpers are fed the indices
    /// from `x_3` on, each shifted and weighted by its position `k`.
    fn show_helpers(&mut self, keys: &[X]) {
        let m = &self.module;
        let large = || keys.iter().enumerate().skip(3);
        let coeff = |k: usize| R::from(k as i32);

        let zero = m.zero();
        let term = m.term(keys[1].clone(), R::from(1));
        let monomials = m.sum_of_monomials(large().map(|(_, x)| x.clone()));
        let terms = m.sum_of_terms(
            large().map(|(k, x)| (shift(keys, x), coeff(k)))
        );
        let sum = m.sum(
            large().map(|(k, x)| m.monomial(shift(keys, x)) * coeff(k))
        );
        let empty = m.sum(Vec::<Lc<X, R>>::new());

        self.header("module helpers");
        self.line("zero", self.fmt(&zero));
        self.line(format!("term({:?}, 1)", keys[1]), self.fmt(&term));
        self.line("sum_of_monomials(x_k for k >= 3)", self.fmt(&monomials));
        self.line("sum_of_terms((shift(x_k), k) for k >= 3)", self.fmt(&terms));
        self.line("sum(k * shift(x_k) for k >= 3)", self.fmt(&sum));
        self.line("sum([])", self.fmt(&empty));
    }

    fn coeff_table(&self, f: &Lc<X, R>) -> String {
        let prefix = self.module.prefix();
        let label = |x: &X| format!("{prefix}[{x:?}]");
        let entries: HashMap<_, _> = f.iter().map(|(x, r)|
            (label(x), r.to_string())
        ).collect();

        table(
            "f",
            f.iter().map(|(x, _)| label(x)),
            ["coefficient"].into_iter(),
            |i, _| entries.get(i).cloned().unwrap_or_default()
        )
    }

    fn fmt(&self, z: &Lc<X, R>) -> String {
        self.module.display(z).to_string()
    }

    fn header(&mut self, title: &str) {
        self.out(&format!("# {title}"));
    }

    fn line<S, T>(&mut self, label: S, value: T)
    where S: Display, T: Display {
        self.out(&format!("{label} = {value}"));
    }

    fn line_res<S>(&mut self, label: S, res: Result<String, Error>)
    where S: Display {
        match res {
            Ok(value) => self.line(label, value),
            Err(e)    => self.line(label, format!("error: {e}"))
        }
    }

    fn out(&mut self, str: &str) {
        self.buff.push_str(str);
        self.buff.push('\n');
    }

    fn flush(&mut self) -> String {
        let res = std::mem::take(&mut self.buff);
        res.trim().to_string()
    }
}

// the cyclic successor of `x` among the first indices, `x` itself if absent.
fn shift<X>(keys: &[X], x: &X) -> X
where X: Gen {
    match keys.iter().position(|y| y == x) {
        Some(i) => keys[(i + 1) % keys.len()].clone(),
        None => x.clone()
    }
}
