mod ff;

pub use ff::*;
