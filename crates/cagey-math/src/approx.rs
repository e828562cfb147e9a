//! Approximate equality.
//!
//! Two flavors are offered: the [`ApproxEq`] trait with its configurable assertion macros, used
//! throughout the tests, and the plain [`equals`] predicate, which compares two floats relative to
//! their magnitude and backs [`Angle::equals`][crate::Angle::equals].

mod impls;

use std::{fmt, panic::Location};

use crate::traits::Float;

/// Compares two floats for equality relative to their magnitude.
///
/// Identical values are always equal. When either value is zero, or the two are closer together
/// than [`EPSILON`][crate::Scalar::EPSILON], the absolute difference must be below
/// `EPSILON`. Otherwise the difference divided by the sum of magnitudes must be below
/// `EPSILON`.
///
/// `NaN` is never equal to anything.
///
/// ```
/// # use cagey_math::approx::equals;
/// assert!(equals(1.0f32, 1.0 + f32::EPSILON / 2.0));
/// assert!(equals(1.0e6f32, 1.0e6 + 0.1));
/// assert!(!equals(1.0f32, 1.001));
/// assert!(!equals(0.0f32, 1.0e-3));
/// ```
pub fn equals<T: Float>(x: T, y: T) -> bool {
    if x == y {
        return true;
    }

    let diff = (x - y).abs();
    if x == T::ZERO || y == T::ZERO || diff < T::EPSILON {
        return diff < T::EPSILON;
    }

    diff / (x.abs() + y.abs()) < T::EPSILON
}

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their elements are.
///
/// For more information on the subtleties of approximate floating-point number comparison, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type representing the tolerance for absolute and relative comparisons.
    ///
    /// This is either [`f32`] or [`f64`], matching the element type being compared.
    type Tolerance: DefaultTolerances + Copy;

    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// The values are equal if their absolute difference is at most `abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// The values are equal if their absolute difference is at most the larger magnitude of the
    /// two, times `rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Compares `self` and `other` by the number of [*units in the last place*] (ULPs) between
    /// them.
    ///
    /// `NaN` is never considered equal to anything. `-0.0` and `+0.0` are always considered equal,
    /// other values with differing signs never are.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances of an [`ApproxEq::Tolerance`] type.
///
/// Used by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne] when no comparison is configured.
pub trait DefaultTolerances {
    /// Default tolerance for [`ApproxEq::abs_diff_eq`].
    const DEFAULT_ABS_TOLERANCE: Self;
    /// Default tolerance for [`ApproxEq::rel_diff_eq`].
    const DEFAULT_REL_TOLERANCE: Self;
    /// Default tolerance for [`ApproxEq::ulps_diff_eq`].
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// Guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. Before that, the comparison can be
/// configured with [`Asserter::abs`], [`Asserter::rel`] and [`Asserter::ulps`]. When several are
/// configured, the values are equal if *any* of the comparisons says so.
///
/// Without configuration, the values are equal if an absolute comparison with
/// [`DEFAULT_ABS_TOLERANCE`] or a relative comparison with [`DEFAULT_REL_TOLERANCE`] succeeds.
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
/// [`DEFAULT_REL_TOLERANCE`]: DefaultTolerances::DEFAULT_REL_TOLERANCE
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compares the absolute difference of the values against `abs`.
    ///
    /// Works well for values close to zero, including values of opposing signs.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compares the absolute difference of the values against their larger magnitude times `rel`.
    ///
    /// Any non-zero number only compares equal to 0.0 with a relative tolerance of at least 1.0.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Allows at most `ulps` representable values between the compared values.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&mut self) -> bool {
        let abs = self
            .abs
            .take()
            .is_some_and(|abs| self.left.abs_diff_eq(self.right, abs));
        let rel = self
            .rel
            .take()
            .is_some_and(|rel| self.left.rel_diff_eq(self.right, rel));
        let ulps = self
            .ulps
            .take()
            .is_some_and(|ulps| self.left.ulps_diff_eq(self.right, ulps));
        abs || rel || ulps
    }
}

impl<'a, T> fmt::Debug for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Asserter")
            .field("left", self.left)
            .field("right", self.right)
            .field("kind", &self.kind)
            .field("location", self.location)
            .finish_non_exhaustive()
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on `drop`, so the location is captured in `new` instead.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            assert_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    // The panic location reported by the runtime points at the destructor, so the location of
    // the assertion is part of the message.
    match args {
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can be used to pick the kind of
/// comparison and its tolerance.
///
/// Also see [`assert_approx_ne!`].
///
/// # Examples
///
/// ```
/// # use cagey_math::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// let v = vec3(1.0f32, 2.0, 3.0).normalize();
/// assert_approx_eq!(v.length(), 1.0).abs(1e-6);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// Works like [`assert_ne!`], but returns an [`Asserter`] that can be used to pick the kind of
/// comparison and its tolerance.
///
/// Also see [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use cagey_math::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(100.0, 99.0).rel(0.005);
/// assert_approx_ne!(1.0, 1.0 + f64::EPSILON + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::equals;

    #[test]
    fn fail_ne() {
        let result = std::panic::catch_unwind(|| {
            assert_approx_ne!(1.0, 1.0);
        });
        assert!(result.is_err());
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "vectors differ")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "vectors differ");
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn ulps() {
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON).ulps(1);
        assert_approx_ne!(1.0, 1.0 + f32::EPSILON).ulps(0);
        assert_approx_eq!(-0.0f32, 0.0f32).ulps(0);
    }

    #[test]
    fn nan_and_inf() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, 0.0).rel(1.0);
        assert_approx_ne!(f64::NAN, f64::NAN).ulps(100);

        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::MAX).abs(10000.0);
        assert_approx_eq!(f64::MAX, f64::INFINITY).ulps(1);
    }

    #[test]
    fn equals_exact_and_zero() {
        assert!(equals(0.0f32, 0.0));
        assert!(equals(0.0f32, -0.0));
        assert!(equals(0.0f64, f64::EPSILON / 2.0));
        assert!(!equals(0.0f64, f64::EPSILON));
        assert!(equals(f32::INFINITY, f32::INFINITY));
        assert!(!equals(f32::NAN, f32::NAN));
    }

    #[test]
    fn equals_relative() {
        // 1e6 and 1e6 + 0.0625 are 1 ulp apart in f32
        assert!(equals(1.0e6f32, 1.0e6 + 0.0625));
        assert!(!equals(1.0e6f32, 1.0e6 + 1.0));
        assert!(equals(-3.0f64, -3.0 - 2.0 * f64::EPSILON));
        assert!(!equals(1.0f32, -1.0));
    }
}
