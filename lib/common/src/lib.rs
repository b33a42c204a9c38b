use std::hash::Hash;

use num_traits::{AsPrimitive, PrimInt};

pub mod macros;

/// Trait for types which can act as indices within an array (or an array-like structure).
///
/// Conversion *into* `usize` is infallible; conversion *from* `usize` goes through
/// [`num_traits::NumCast`] and fails when the value doesn't fit.
pub trait ArrayIndex: PrimInt + AsPrimitive<usize> + Hash + std::fmt::Debug + 'static {
    /// Convert a position within an array into `Self`, if it fits.
    #[inline]
    fn from_position(pos: usize) -> Option<Self> {
        <Self as num_traits::NumCast>::from(pos)
    }

    /// Convert `self` into a position within an array.
    #[inline]
    fn position(self) -> usize {
        self.as_()
    }
}
impl<P> ArrayIndex for P where P: PrimInt + AsPrimitive<usize> + Hash + std::fmt::Debug + 'static {}
