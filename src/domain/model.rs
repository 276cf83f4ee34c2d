use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Numeric element type the finder can search over.
pub trait Operand: Copy + PartialOrd + fmt::Display + fmt::Debug {
    fn is_finite_value(self) -> bool;

    /// Orders `self + other` against `target` without overflowing.
    fn cmp_sum(self, other: Self, target: Self) -> Ordering;
}

macro_rules! impl_integer_operand {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                fn is_finite_value(self) -> bool {
                    true
                }

                fn cmp_sum(self, other: Self, target: Self) -> Ordering {
                    (self as i128 + other as i128).cmp(&(target as i128))
                }
            }
        )*
    };
}

impl_integer_operand!(i32, i64);

impl Operand for f64 {
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }

    fn cmp_sum(self, other: Self, target: Self) -> Ordering {
        // Finite operands never produce NaN; an overflow becomes +/-inf and still orders.
        (self + other)
            .partial_cmp(&target)
            .unwrap_or(Ordering::Greater)
    }
}

/// 1-based positions of the two elements, `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairPositions {
    pub first: usize,
    pub second: usize,
}

impl PairPositions {
    pub(crate) fn from_indices(left: usize, right: usize) -> Self {
        Self {
            first: left + 1,
            second: right + 1,
        }
    }

    pub fn as_array(&self) -> [usize; 2] {
        [self.first, self.second]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Sum comparisons performed by the scan.
    pub probes: usize,
}

/// A found pair together with the values it refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution<T> {
    pub positions: PairPositions,
    pub values: [T; 2],
    pub target: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_sum_does_not_overflow() {
        assert_eq!(i32::MAX.cmp_sum(i32::MAX, i32::MAX), Ordering::Greater);
        assert_eq!(i64::MIN.cmp_sum(i64::MIN, 0), Ordering::Less);
        assert_eq!(2i32.cmp_sum(7, 9), Ordering::Equal);
    }

    #[test]
    fn test_float_sum_ordering() {
        assert_eq!(f64::MAX.cmp_sum(f64::MAX, 0.0), Ordering::Greater);
        assert_eq!((-1.0f64).cmp_sum(1.0, -0.0), Ordering::Equal);
        assert!(!f64::NAN.is_finite_value());
        assert!(!f64::INFINITY.is_finite_value());
    }

    #[test]
    fn test_positions_are_one_based() {
        let positions = PairPositions::from_indices(0, 3);
        assert_eq!(positions.as_array(), [1, 4]);
    }
}
