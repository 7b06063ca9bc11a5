use std::ops::Add;

/// Edge weights.
///
/// Weights must be totally ordered, so that spanning trees and shortest paths are well-defined.
/// This is implemented for all primitive integer types.
pub trait Weight: Copy + Ord + Add<Output = Self> + std::fmt::Debug {
    const ZERO: Self;

    /// `None` if the sum does not fit in the type.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// A distance which is either finite or infinite.
///
/// Every finite distance is less than [Distance::Infinite].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    pub fn zero() -> Self {
        Self::Finite(W::ZERO)
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    pub fn finite(self) -> Option<W> {
        match self {
            Self::Finite(w) => Some(w),
            Self::Infinite => None,
        }
    }

    /// Extends this distance by one more edge.
    ///
    /// Infinity stays infinity, and so does a sum out of the range of `W`.
    pub fn extend(self, w: W) -> Self {
        match self {
            Self::Finite(d) => d.checked_add(w).map_or(Self::Infinite, Self::Finite),
            Self::Infinite => Self::Infinite,
        }
    }

    /// Adds up weights from zero, giving [Distance::Infinite] on overflow.
    pub fn sum<I: IntoIterator<Item = W>>(weights: I) -> Self {
        weights
            .into_iter()
            .fold(Self::zero(), |acc, w| acc.extend(w))
    }
}

impl<W> From<W> for Distance<W> {
    fn from(w: W) -> Self {
        Self::Finite(w)
    }
}
