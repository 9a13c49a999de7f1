/*!
# Capacities

Capacities, flows and cut values share one numeric type `C`. Any signed primitive integer
qualifies; `i64` is the default throughout the crate. Signedness is required since flows are
stored antisymmetrically (`F[u][v] = -F[v][u]`).

All accumulating arithmetic (parallel edges, flow pushes, flow totals, cut values) goes
through [`Capacity::try_add`] / [`Capacity::try_sub`], which report an
[`Overflow`](crate::CutTreeError::Overflow) instead of wrapping.
*/

use std::{
    fmt::{Debug, Display},
    hash::Hash,
    str::FromStr,
};

use num::{PrimInt, Signed};

use crate::error::{CutTreeError, Result};

/// Numeric type used for capacities, flows and cut values
pub trait Capacity:
    PrimInt + Signed + Default + Hash + Debug + Display + FromStr + Send + Sync + 'static
{
    /// Adds `rhs`, failing with an overflow error instead of wrapping
    fn try_add(self, rhs: Self) -> Result<Self> {
        self.checked_add(&rhs).ok_or_else(|| {
            CutTreeError::Overflow(format!("{self} + {rhs} exceeds the capacity type"))
        })
    }

    /// Subtracts `rhs`, failing with an overflow error instead of wrapping
    fn try_sub(self, rhs: Self) -> Result<Self> {
        self.checked_sub(&rhs).ok_or_else(|| {
            CutTreeError::Overflow(format!("{self} - {rhs} exceeds the capacity type"))
        })
    }

    /// Widens the value for type-independent encodings (e.g. digests)
    fn widen(self) -> i128 {
        // every signed primitive fits into i128
        self.to_i128().unwrap_or_default()
    }
}

impl<T> Capacity for T where
    T: PrimInt + Signed + Default + Hash + Debug + Display + FromStr + Send + Sync + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_arithmetic() {
        assert_eq!(3i64.try_add(4).unwrap(), 7);
        assert_eq!(3i64.try_sub(4).unwrap(), -1);
        assert!(i64::MAX.try_add(1).unwrap_err().is_overflow());
        assert!(i8::MIN.try_sub(1).unwrap_err().is_overflow());
        assert_eq!((-5i16).widen(), -5i128);
    }
}
