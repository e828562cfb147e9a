//! Mathematical constants.

/// Floating-point types that provide the constants needed for angle conversions.
pub trait FloatConst: Sized {
    /// Archimedes' constant (π).
    const PI: Self;
    /// The full circle constant (τ = 2π).
    const TAU: Self;
    /// Multiplier converting degrees to radians (π / 180).
    const DEG_TO_RAD: Self;
    /// Multiplier converting radians to degrees (180 / π).
    const RAD_TO_DEG: Self;
}

impl FloatConst for f32 {
    const PI: Self = std::f32::consts::PI;
    const TAU: Self = std::f32::consts::TAU;
    const DEG_TO_RAD: Self = Self::PI / 180.0;
    const RAD_TO_DEG: Self = 180.0 / Self::PI;
}

impl FloatConst for f64 {
    const PI: Self = std::f64::consts::PI;
    const TAU: Self = std::f64::consts::TAU;
    const DEG_TO_RAD: Self = Self::PI / 180.0;
    const RAD_TO_DEG: Self = 180.0 / Self::PI;
}

/// Returns π in the requested precision.
///
/// ```
/// # use cagey_math::consts::pi;
/// assert_eq!(pi::<f32>(), std::f32::consts::PI);
/// ```
#[inline]
pub fn pi<T: FloatConst>() -> T {
    T::PI
}

/// Returns π / 180.
#[inline]
pub fn deg_to_rad<T: FloatConst>() -> T {
    T::DEG_TO_RAD
}

/// Returns 180 / π.
#[inline]
pub fn rad_to_deg<T: FloatConst>() -> T {
    T::RAD_TO_DEG
}
