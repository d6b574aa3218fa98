/// Builds an [`Lc`](crate::Lc) from `index => coefficient` pairs.
/// Repeated indices add up and zero coefficients are dropped.
#[macro_export]
macro_rules! lc {
    {$( $x:expr => $r:expr ),* $(,)?} => {{
        <$crate::Lc<_, _> as ::std::iter::FromIterator<_>>::from_iter([$(($x, $r),)*])
    }}
}
