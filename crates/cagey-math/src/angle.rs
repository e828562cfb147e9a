//! Angles tagged with their unit.
//!
//! [`Degree`] and [`Radian`] wrap a single [`Scalar`] and share their implementation through
//! [`Angle`]. Converting between the two units is always explicit:
//!
//! ```
//! # use cagey_math::*;
//! let right = Degree::new(90.0f64);
//! let rad = Radian::from(right);
//! assert_approx_eq!(rad.value(), std::f64::consts::FRAC_PI_2);
//! assert_approx_eq!(Degree::from(rad), right).rel(1e-12);
//! ```

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{
    approx::{self, ApproxEq},
    traits::{CastInto, Float, Number, Scalar},
};

/// Unit tag of an [`Angle`].
pub trait Unit {
    /// Name used in the `Debug` output.
    const NAME: &'static str;
    /// Appended to the value in the `Display` output.
    const SUFFIX: &'static str;
}

/// Unit tag for angles in degrees.
#[derive(Debug)]
pub enum Deg {}

/// Unit tag for angles in radians.
#[derive(Debug)]
pub enum Rad {}

impl Unit for Deg {
    const NAME: &'static str = "Degree";
    const SUFFIX: &'static str = "°";
}

impl Unit for Rad {
    const NAME: &'static str = "Radian";
    const SUFFIX: &'static str = " rad";
}

/// An angle in degrees.
pub type Degree<T> = Angle<Deg, T>;

/// An angle in radians.
pub type Radian<T> = Angle<Rad, T>;

/// An angle value of type `T`, measured in unit `U`.
///
/// Angles of the same unit can be added, subtracted, compared and scaled by a `T`. Dividing two
/// angles yields their ratio as a plain `T`.
///
/// ```
/// # use cagey_math::*;
/// let a = 30.0f32.deg();
/// assert_eq!(a + a, 60.0f32.deg());
/// assert_eq!(3.0 * a, 90.0f32.deg());
/// assert_eq!(90.0f32.deg() / a, 3.0);
/// assert!(a < 45.0f32.deg());
/// ```
#[repr(transparent)]
pub struct Angle<U, T: Scalar> {
    value: T,
    unit: PhantomData<U>,
}

impl<U, T: Scalar> Angle<U, T> {
    /// Creates an angle of `value` units.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Returns the raw value of this angle, in its own unit.
    #[inline]
    pub fn value(self) -> T {
        self.value
    }

    /// Converts the value to `V` like an `as` cast would, keeping the unit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// assert_eq!(Degree::new(89.9f32).cast::<i32>(), Degree::new(89));
    /// ```
    pub fn cast<V>(self) -> Angle<U, V>
    where
        T: CastInto<V>,
        V: Scalar,
    {
        Angle::new(self.value.cast_into())
    }
}

impl<U, T: Float> Angle<U, T> {
    /// Compares two angles relative to their magnitude (see [`approx::equals`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let a = Radian::new(0.1f32 + 0.2);
    /// assert!(a.equals(Radian::new(0.3)));
    /// assert!(!a.equals(Radian::new(0.31)));
    /// ```
    pub fn equals(self, other: Self) -> bool {
        approx::equals(self.value, other.value)
    }
}

impl<T: Float> Radian<T> {
    /// Computes the sine of this angle.
    pub fn sin(self) -> T {
        self.value.sin()
    }

    /// Computes the cosine of this angle.
    pub fn cos(self) -> T {
        self.value.cos()
    }

    /// Computes the tangent of this angle.
    pub fn tan(self) -> T {
        self.value.tan()
    }
}

impl<T: Float> From<Degree<T>> for Radian<T> {
    fn from(deg: Degree<T>) -> Self {
        Self::new(deg.value * T::DEG_TO_RAD)
    }
}

impl<T: Float> From<Radian<T>> for Degree<T> {
    fn from(rad: Radian<T>) -> Self {
        Self::new(rad.value * T::RAD_TO_DEG)
    }
}

/// Suffix-style construction of angles: `90.0f32.deg()`, `1.5f64.rad()`.
pub trait AngleExt: Scalar {
    /// Interprets `self` as an angle in degrees.
    fn deg(self) -> Degree<Self> {
        Angle::new(self)
    }

    /// Interprets `self` as an angle in radians.
    fn rad(self) -> Radian<Self> {
        Angle::new(self)
    }
}

impl<T: Scalar> AngleExt for T {}

impl<U, T: Scalar> Clone for Angle<U, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<U, T: Scalar> Copy for Angle<U, T> {}

impl<U, T: Scalar> Default for Angle<U, T> {
    fn default() -> Self {
        Self::new(T::ZERO)
    }
}

impl<U, T: Scalar + Hash> Hash for Angle<U, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<U, T: Scalar> PartialEq for Angle<U, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U, T: Scalar + Eq> Eq for Angle<U, T> {}

impl<U, T: Scalar> PartialOrd for Angle<U, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<U, T> ApproxEq for Angle<U, T>
where
    T: Scalar + ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.value.abs_diff_eq(&other.value, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.value.rel_diff_eq(&other.value, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.value.ulps_diff_eq(&other.value, ulps_tolerance)
    }
}

impl<U, T: Scalar> AddAssign for Angle<U, T> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<U, T: Scalar> Add for Angle<U, T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<U, T: Scalar> SubAssign for Angle<U, T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<U, T: Scalar> Sub for Angle<U, T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<U, T: Scalar> MulAssign<T> for Angle<U, T> {
    fn mul_assign(&mut self, rhs: T) {
        self.value *= rhs;
    }
}

impl<U, T: Scalar> Mul<T> for Angle<U, T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<U, T: Scalar> DivAssign<T> for Angle<U, T> {
    fn div_assign(&mut self, rhs: T) {
        self.value /= rhs;
    }
}

impl<U, T: Scalar> Div<T> for Angle<U, T> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

/// The ratio between two angles.
impl<U, T: Scalar> Div for Angle<U, T> {
    type Output = T;

    fn div(self, rhs: Self) -> T {
        self.value / rhs.value
    }
}

impl<U, T: Number> Neg for Angle<U, T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl<U> Mul<Angle<U, $t>> for $t {
                type Output = Angle<U, $t>;

                fn mul(self, rhs: Angle<U, $t>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

impl<U: Unit, T: Scalar> fmt::Debug for Angle<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(U::NAME).field(&self.value).finish()
    }
}

impl<U: Unit, T: Scalar + fmt::Display> fmt::Display for Angle<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        f.write_str(U::SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn conversions() {
        assert_approx_eq!(Radian::from(180.0f64.deg()), Radian::new(PI));
        assert_approx_eq!(Degree::from(Radian::new(PI)), 180.0f64.deg()).rel(1e-12);
        assert_approx_eq!(Radian::from(Degree::new(-45.0f32)).value(), -PI as f32 / 4.0).abs(1e-6);

        for deg in [0.0f64, 1.0, 33.3, 90.0, -270.0, 1234.5] {
            let back = Degree::from(Radian::from(Degree::new(deg)));
            assert_approx_eq!(back.value(), deg).rel(1e-12);
        }
    }

    #[test]
    fn arithmetic() {
        let mut a = 30.0f32.deg();
        a += 60.0f32.deg();
        assert_eq!(a, Degree::new(90.0));
        a *= 2.0;
        assert_eq!(a.value(), 180.0);
        a /= 4.0;
        assert_eq!(a, 45.0f32.deg());
        a -= 15.0f32.deg();
        assert_eq!(a, 30.0f32.deg());

        assert_eq!(a - 10.0f32.deg(), 20.0f32.deg());
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(a / 2.0, 15.0f32.deg());
        assert_eq!(a / 15.0f32.deg(), 2.0);
        assert_eq!(-a, Degree::new(-30.0));

        assert_eq!(Degree::new(90) + Degree::new(45), 135i32.deg());
        assert_eq!(Degree::new(90u8) / Degree::new(45), 2);
        assert_eq!(Radian::<f64>::default(), Radian::new(0.0));
    }

    #[test]
    fn comparisons() {
        assert!(10.0f32.deg() < 20.0f32.deg());
        assert!(20.0f32.deg() >= 20.0f32.deg());
        assert_ne!(1.0f64.rad(), 1.5f64.rad());
        assert_eq!(Radian::new(f32::NAN).partial_cmp(&Radian::new(0.0)), None);
    }

    #[test]
    fn equals() {
        assert!(Radian::new(1.0e6f32).equals(Radian::new(1.0e6 + 0.1)));
        assert!(!Radian::new(1.0f32).equals(Radian::new(1.001)));
        assert!(Degree::new(0.0f64).equals(Degree::new(f64::EPSILON / 2.0)));
        assert!(!Degree::new(f64::NAN).equals(Degree::new(f64::NAN)));
    }

    #[test]
    fn trig() {
        assert_eq!(Radian::new(0.0f64).sin(), 0.0);
        assert_eq!(Radian::new(0.0f64).cos(), 1.0);
        assert_approx_eq!(Radian::from(90.0f64.deg()).sin(), 1.0);
        assert_approx_eq!(Radian::from(60.0f64.deg()).cos(), 0.5).abs(1e-12);
        assert_approx_eq!(Radian::from(45.0f64.deg()).tan(), 1.0).abs(1e-12);
    }

    #[test]
    fn cast() {
        assert_eq!(Radian::new(1.5f64).cast::<f32>(), Radian::new(1.5f32));
        assert_eq!(Degree::new(90.7f32).cast::<i32>(), Degree::new(90));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", 90.0f32.deg()), "90°");
        assert_eq!(format!("{:.2}", Radian::new(0.5f64)), "0.50 rad");
        assert_eq!(format!("{:?}", Radian::new(1.5f32)), "Radian(1.5)");
        assert_eq!(format!("{:?}", Degree::new(-3)), "Degree(-3)");
    }
}
