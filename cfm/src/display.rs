use std::fmt::Display;
use num_traits::Zero;
use cfm_core::{Ring, RingOps};
use cfm_core::util::format::paren_expr;

use crate::{Gen, Lc};

pub const DEFAULT_PREFIX: &str = "B";

/// Renders a linear combination as `2*B[0] + 2*B[1] + 3*B[2]` 
/// with a chosen basis prefix.
pub struct LcDisplay<'a, X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{ 
    lc: &'a Lc<X, R>,
    prefix: &'a str
}

impl<'a, X, R> LcDisplay<'a, X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{ 
    pub fn new(lc: &'a Lc<X, R>, prefix: &'a str) -> Self { 
        Self { lc, prefix }
    }

    fn basis_elem(&self, x: &X) -> String { 
        format!("{}[{:?}]", self.prefix, x)
    }
}

impl<'a, X, R> Display for LcDisplay<'a, X, R>
where
    X: Gen,
    R: Ring, for<'x> &'x R: RingOps<R>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.lc.is_zero() { 
            return write!(f, "0");
        }

        let mut terms = self.lc.iter();

        if let Some((x, r)) = terms.next() {
            let r = paren_expr(r);
            let x = self.basis_elem(x);

            if r == "1" { 
                write!(f, "{x}")?
            } else if r == "-1" { 
                write!(f, "-{x}")?
            } else { 
                write!(f, "{r}*{x}")?
            };
        };

        for (x, r) in terms {
            let r = paren_expr(r);
            let x = self.basis_elem(x);

            let (op, r) = if let Some(r) = r.strip_prefix('-') { 
                ("-", r) 
            } else { 
                ("+", r.as_str())
            };

            if r == "1" { 
                write!(f, " {op} {x}")?
            } else { 
                write!(f, " {op} {r}*{x}")?
            };
        }

        Ok(())
    }
}
