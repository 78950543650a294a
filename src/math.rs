//! Numeric abstraction used throughout the crate.
//!
//! The breaker is generic over the representation used for widths, stretch,
//! shrink, and demerits so that it can run against plain floats or against a
//! fixed-point type when floating point is unavailable or undesirable (e.g.
//! deterministic layout across platforms). [`Num`] collects exactly the
//! operations the item model and breaker need; it intentionally does not
//! require `std`.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// A numeric type usable for item widths, adjustment ratios, and demerits.
///
/// `+∞` and `−∞` are first-class values in the Knuth-Plass formulation (an
/// infinitely stretchable glue, a forbidden or forced penalty); any
/// implementation must provide values satisfying the usual ordering with
/// respect to finite values.
pub trait Num:
    Copy
    + Default
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The value used for infinite stretch and for a forbidden penalty (`p = +∞`).
    const INFINITY: Self;
    /// The value used for a forcing penalty (`p = −∞`).
    const NEG_INFINITY: Self;

    /// Converts a small integer literal to `Self`, e.g. `N::from(100)`.
    fn from(v: i32) -> Self;

    /// Converts the rational `n/d` to `Self`, e.g. `N::rat(-1, 2)` for `-0.5`.
    fn rat(n: i32, d: i32) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Raises `self` to the integer power `n` (`n >= 0`).
    fn powi(self, n: i32) -> Self;
}

#[cfg(feature = "std")]
impl Num for f32 {
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;

    fn from(v: i32) -> Self {
        v as f32
    }

    fn rat(n: i32, d: i32) -> Self {
        n as f32 / d as f32
    }

    fn abs(self) -> Self {
        f32::abs(self)
    }

    fn powi(self, n: i32) -> Self {
        f32::powi(self, n)
    }
}

#[cfg(feature = "std")]
impl Num for f64 {
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;

    fn from(v: i32) -> Self {
        v as f64
    }

    fn rat(n: i32, d: i32) -> Self {
        n as f64 / d as f64
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn powi(self, n: i32) -> Self {
        f64::powi(self, n)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl Num for f32 {
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;

    fn from(v: i32) -> Self {
        v as f32
    }

    fn rat(n: i32, d: i32) -> Self {
        n as f32 / d as f32
    }

    fn abs(self) -> Self {
        libm::fabsf(self)
    }

    fn powi(self, n: i32) -> Self {
        libm::powf(self, n as f32)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl Num for f64 {
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;

    fn from(v: i32) -> Self {
        v as f64
    }

    fn rat(n: i32, d: i32) -> Self {
        n as f64 / d as f64
    }

    fn abs(self) -> Self {
        libm::fabs(self)
    }

    fn powi(self, n: i32) -> Self {
        libm::pow(self, n as f64)
    }
}

#[cfg(feature = "fixed")]
mod fixed_point {
    use super::Num;
    use core::ops::{Add, Div, Mul, Neg, Sub};
    use fixed::traits::FixedSigned;

    /// A [`Num`] implementation backed by a fixed-point representation from the
    /// `fixed` crate (e.g. `Fixed<I16F16>`). Useful when layout must be bit-for-bit
    /// reproducible across platforms, which IEEE-754 floats do not guarantee for
    /// every operation.
    #[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
    pub struct Fixed<F>(pub F);

    impl<F: FixedSigned> From<F> for Fixed<F> {
        fn from(f: F) -> Self {
            Fixed(f)
        }
    }

    impl<F: FixedSigned> Add for Fixed<F> {
        type Output = Self;
        fn add(self, rhs: Self) -> Self {
            Fixed(self.0 + rhs.0)
        }
    }

    impl<F: FixedSigned> Sub for Fixed<F> {
        type Output = Self;
        fn sub(self, rhs: Self) -> Self {
            Fixed(self.0 - rhs.0)
        }
    }

    impl<F: FixedSigned> Mul for Fixed<F> {
        type Output = Self;
        fn mul(self, rhs: Self) -> Self {
            Fixed(self.0 * rhs.0)
        }
    }

    impl<F: FixedSigned> Div for Fixed<F> {
        type Output = Self;
        fn div(self, rhs: Self) -> Self {
            Fixed(self.0 / rhs.0)
        }
    }

    impl<F: FixedSigned> Neg for Fixed<F> {
        type Output = Self;
        fn neg(self) -> Self {
            Fixed(-self.0)
        }
    }

    impl<F: FixedSigned> Num for Fixed<F> {
        const INFINITY: Self = Fixed(F::MAX);
        const NEG_INFINITY: Self = Fixed(F::MIN);

        fn from(v: i32) -> Self {
            Fixed(F::from_num(v))
        }

        fn rat(n: i32, d: i32) -> Self {
            Fixed(F::from_num(n) / F::from_num(d))
        }

        fn abs(self) -> Self {
            Fixed(self.0.abs())
        }

        fn powi(self, n: i32) -> Self {
            // `fixed` has no native `powi`; the breaker only ever cubes the
            // adjustment ratio, so a small unrolled loop avoids pulling in a
            // general integer-exponentiation routine for one call site.
            let mut acc = F::from_num(1);
            for _ in 0..n {
                acc *= self.0;
            }
            Fixed(acc)
        }
    }
}

#[cfg(feature = "fixed")]
pub use fixed_point::Fixed;
