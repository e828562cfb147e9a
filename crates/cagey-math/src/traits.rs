//! Numeric traits used to constrain [`Vector`] and [`Matrix`] elements.
//!
//! [`Vector`]: crate::Vector
//! [`Matrix`]: crate::Matrix

use std::{fmt, ops};

use crate::consts::FloatConst;

mod private {
    pub trait Sealed {}
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// The element types accepted by [`Vector`] and [`Matrix`].
///
/// This trait is sealed. It is implemented for [`f32`], [`f64`], and the signed and unsigned
/// integers of 8, 16, 32 and 64 bits. Using any other type as a vector or matrix element is a
/// compile error:
///
/// ```compile_fail
/// # use cagey_math::*;
/// let v: Vector<bool, 2> = Vector::splat(true);
/// ```
///
/// [`Vector`]: crate::Vector
/// [`Matrix`]: crate::Matrix
pub trait Scalar:
    private::Sealed
    + Zero
    + One
    + MinMax
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
{
    /// Machine epsilon of the type.
    ///
    /// This is the difference between `1.0` and the next larger representable number for floats,
    /// and `0` for integers.
    const EPSILON: Self;

    /// Returns `true` if `self` and `other` differ by at most `epsilon`.
    ///
    /// Integers are compared through their unsigned distance, so the result is exact even when the
    /// difference doesn't fit into `Self`. A negative `epsilon` never matches.
    fn abs_diff_le(self, other: Self, epsilon: Self) -> bool;
}

/// A [`Scalar`] that can be negated (floats and signed integers).
pub trait Number: Scalar + ops::Neg<Output = Self> {}

impl<T> Number for T where T: Scalar + ops::Neg<Output = Self> {}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Floating-point scalars ([`f32`] and [`f64`]).
pub trait Float: Number + Sqrt + Trig + FloatConst {
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;
}

/// Lossy `as`-conversion between [`Scalar`] types.
///
/// Drives [`Vector::cast`][crate::Vector::cast] and [`Matrix::cast`][crate::Matrix::cast].
pub trait CastInto<U>: Scalar {
    fn cast_into(self) -> U;
}

macro_rules! scalar_impls {
    (float: $($t:ty),+) => {
        $(
            impl private::Sealed for $t {}
            impl Zero for $t {
                const ZERO: Self = 0.0;
            }
            impl One for $t {
                const ONE: Self = 1.0;
            }
            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    <$t>::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    <$t>::max(self, other)
                }
            }
            impl Scalar for $t {
                const EPSILON: Self = <$t>::EPSILON;

                #[inline]
                fn abs_diff_le(self, other: Self, epsilon: Self) -> bool {
                    (self - other).abs() <= epsilon
                }
            }
        )+
    };
    (signed: $($t:ty => $u:ty),+) => {
        $(
            scalar_impls!(@int $t);
            impl Scalar for $t {
                const EPSILON: Self = 0;

                #[inline]
                fn abs_diff_le(self, other: Self, epsilon: Self) -> bool {
                    epsilon >= 0 && <$t>::abs_diff(self, other) <= epsilon as $u
                }
            }
        )+
    };
    (unsigned: $($t:ty),+) => {
        $(
            scalar_impls!(@int $t);
            impl Scalar for $t {
                const EPSILON: Self = 0;

                #[inline]
                fn abs_diff_le(self, other: Self, epsilon: Self) -> bool {
                    <$t>::abs_diff(self, other) <= epsilon
                }
            }
        )+
    };
    (@int $t:ty) => {
        impl private::Sealed for $t {}
        impl Zero for $t {
            const ZERO: Self = 0;
        }
        impl One for $t {
            const ONE: Self = 1;
        }
        impl MinMax for $t {
            fn min(self, other: Self) -> Self {
                Ord::min(self, other)
            }

            fn max(self, other: Self) -> Self {
                Ord::max(self, other)
            }
        }
    };
}

scalar_impls!(float: f32, f64);
scalar_impls!(signed: i8 => u8, i16 => u16, i32 => u32, i64 => u64);
scalar_impls!(unsigned: u8, u16, u32, u64);

macro_rules! float_impls {
    ($($t:ty),+) => {
        $(
            impl Sqrt for $t {
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }

            impl Trig for $t {
                fn sin(self) -> Self {
                    <$t>::sin(self)
                }

                fn cos(self) -> Self {
                    <$t>::cos(self)
                }

                fn tan(self) -> Self {
                    <$t>::tan(self)
                }

                fn acos(self) -> Self {
                    <$t>::acos(self)
                }

                fn atan2(self, other: Self) -> Self {
                    <$t>::atan2(self, other)
                }
            }

            impl Float for $t {
                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }

                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }

                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }
            }
        )+
    };
}

float_impls!(f32, f64);

macro_rules! cast_impls {
    (@from $from:ty => $($to:ty),+) => {
        $(
            impl CastInto<$to> for $from {
                #[inline]
                fn cast_into(self) -> $to {
                    self as $to
                }
            }
        )+
    };
    ($($from:ty),+) => {
        $(
            cast_impls!(@from $from => f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
        )+
    };
}

cast_impls!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon() {
        assert_eq!(<f32 as Scalar>::EPSILON, f32::EPSILON);
        assert_eq!(<f64 as Scalar>::EPSILON, f64::EPSILON);
        assert_eq!(<i32 as Scalar>::EPSILON, 0);
        assert_eq!(<u8 as Scalar>::EPSILON, 0);
    }

    #[test]
    fn abs_diff_le() {
        assert!(Scalar::abs_diff_le(3u8, 5u8, 2));
        assert!(Scalar::abs_diff_le(5u8, 3u8, 2));
        assert!(!Scalar::abs_diff_le(5u8, 3u8, 1));
        assert!(Scalar::abs_diff_le(-3i32, 5i32, 8));
        assert!(!Scalar::abs_diff_le(-3i32, 5i32, 7));
        assert!(Scalar::abs_diff_le(1.5f64, -1.5f64, 3.0));
        assert!(!Scalar::abs_diff_le(f32::NAN, f32::NAN, 1.0));
    }

    #[test]
    fn abs_diff_le_wide_integer_range() {
        // 255 apart, which doesn't fit into an i8
        assert!(!Scalar::abs_diff_le(i8::MIN, i8::MAX, i8::MAX));
        assert!(!Scalar::abs_diff_le(i8::MIN, 0, i8::MAX));
        assert!(Scalar::abs_diff_le(i8::MIN, -1, i8::MAX));
        assert!(!Scalar::abs_diff_le(i64::MIN, i64::MAX, i64::MAX));
        assert!(!Scalar::abs_diff_le(0i16, 0, -1));
    }

    #[test]
    fn cast() {
        assert_eq!(CastInto::<i32>::cast_into(2.9f32), 2);
        assert_eq!(CastInto::<u8>::cast_into(-1.0f64), 0);
        assert_eq!(CastInto::<f64>::cast_into(7u16), 7.0);
        assert_eq!(CastInto::<i8>::cast_into(300i32), 44);
    }

    #[test]
    fn min_max() {
        assert_eq!(MinMax::min(1, 2), 1);
        assert_eq!(MinMax::max(1.0, 2.0), 2.0);
        assert_eq!(MinMax::clamp(7u32, 0, 5), 5);
        assert_eq!(MinMax::clamp(-1.0f32, 0.0, 1.0), 0.0);
    }
}
