//! Free-function forms of the vector and matrix operations.
//!
//! Each of these forwards to the corresponding method, so `dot(a, b)` and `a.dot(b)` are
//! interchangeable. They are re-exported at the crate root.
//!
//! ```
//! # use cagey_math::*;
//! let m = mat22(1.0f32, 2.0, 3.0, 4.0);
//! assert_eq!(determinant(&m), -2.0);
//! assert_eq!(transpose(transpose(m)), m);
//! assert_eq!(dot(Vec3f::X, Vec3f::Y), 0.0);
//! assert_eq!(cross(Vec3f::X, Vec3f::Y), Vec3f::Z);
//! ```

use crate::{
    matrix::{Determinant, Inverse},
    traits::{Float, Number, Scalar},
    Matrix, Vector,
};

/// Computes the dot product of `a` and `b`. See [`Vector::dot`].
#[inline]
pub fn dot<T: Scalar, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.dot(b)
}

/// Computes the cross product of `a` and `b`. See [`Vector::cross`].
#[inline]
pub fn cross<T: Number>(a: Vector<T, 3>, b: Vector<T, 3>) -> Vector<T, 3> {
    a.cross(b)
}

/// Returns the length of `v`. See [`Vector::length`].
#[inline]
pub fn length<T: Float, const N: usize>(v: Vector<T, N>) -> T {
    v.length()
}

/// Returns the squared length of `v`. See [`Vector::length_squared`].
#[inline]
#[doc(alias = "length2")]
pub fn length_squared<T: Scalar, const N: usize>(v: Vector<T, N>) -> T {
    v.length_squared()
}

/// Returns `1 / length(v)`. See [`Vector::length_inverted`].
#[inline]
pub fn length_inverted<T: Float, const N: usize>(v: Vector<T, N>) -> T {
    v.length_inverted()
}

/// See [`Vector::is_zero_length`].
#[inline]
pub fn is_zero_length<T: Float, const N: usize>(v: Vector<T, N>) -> bool {
    v.is_zero_length()
}

/// Scales `v` to unit length. See [`Vector::normalize`].
#[inline]
pub fn normalize<T: Float, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.normalize()
}

/// See [`Vector::try_normalize`].
#[inline]
pub fn try_normalize<T: Float, const N: usize>(v: Vector<T, N>) -> Option<Vector<T, N>> {
    v.try_normalize()
}

/// Returns `true` if every element of `a` is within `epsilon` of the matching element of `b`.
/// See [`Vector::fuzzy_equals`].
#[inline]
pub fn fuzzy_equals<T: Scalar, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
    epsilon: T,
) -> bool {
    a.fuzzy_equals(b, epsilon)
}

/// [`fuzzy_equals`] with `T::EPSILON` as the tolerance. See [`Vector::nearly_equal`].
#[inline]
pub fn nearly_equal<T: Scalar, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> bool {
    a.nearly_equal(b)
}

/// Swaps the rows and columns of `m`. See [`Matrix::transpose`].
#[inline]
pub fn transpose<T: Scalar, const C: usize, const R: usize>(
    m: Matrix<T, C, R>,
) -> Matrix<T, R, C> {
    m.transpose()
}

/// Computes the determinant of a 2x2, 3x3 or 4x4 matrix.
#[inline]
pub fn determinant<M: Determinant>(m: &M) -> M::Output {
    m.determinant()
}

/// Inverts a 2x2, 3x3 or 4x4 float matrix. See [`Inverse::inverse`].
#[inline]
pub fn inverse<M: Inverse>(m: &M) -> M {
    m.inverse()
}

/// See [`Inverse::try_inverse`].
#[inline]
pub fn try_inverse<M: Inverse>(m: &M) -> Option<M> {
    m.try_inverse()
}
