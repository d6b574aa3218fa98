mod macros;
mod gen;
mod index_set;
mod lc;
mod display;
mod module;
mod err;

pub use gen::*;
pub use index_set::*;
pub use lc::*;
pub use display::*;
pub use module::*;
pub use err::Error;
