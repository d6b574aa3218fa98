mod elem;
mod add;
mod ring;

pub use elem::Elem;
pub use add::{AddMon, AddMonOps, AddGrp, AddGrpOps};
pub use ring::{Mon, MonOps, Ring, RingOps, Field, FieldOps, RMod, RModOps};
