use num_traits::{AsPrimitive, PrimInt, Unsigned};

/// Unsigned integer type usable as a hierarchical level or index.
///
/// Callers are responsible for choosing a width where `1 << level` does not overflow.
pub trait GridInt: PrimInt + Unsigned + AsPrimitive<i64> + AsPrimitive<u32> + Send + Sync {}

impl<T> GridInt for T where T: PrimInt + Unsigned + AsPrimitive<i64> + AsPrimitive<u32> + Send + Sync {}

#[inline]
pub(crate) fn level_u32<L: GridInt>(level: L) -> u32
{
    <L as AsPrimitive<u32>>::as_(level)
}

#[inline]
pub(crate) fn index_i64<I: GridInt>(index: I) -> i64
{
    <I as AsPrimitive<i64>>::as_(index)
}

/// `2^level`, the number of subintervals at `level`.
#[inline]
pub(crate) fn h_inv(level: u32) -> i64
{
    1_i64 << level
}

#[test]
fn check_conversions()
{
    assert_eq!(level_u32(5_u8), 5);
    assert_eq!(level_u32(7_usize), 7);
    assert_eq!(index_i64(31_u16), 31);
    assert_eq!(index_i64(1023_u64), 1023);
    assert_eq!(h_inv(0), 1);
    assert_eq!(h_inv(6), 64);
}
