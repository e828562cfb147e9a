use std::{array, fmt};

use crate::{
    angle::Radian,
    error::DimensionError,
    traits::{CastInto, Float, MinMax, Number, Scalar},
    Mat2,
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`u32`] elements.
pub type Vec2u = Vec2<u32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type Vec3u = Vec3<u32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type Vec4u = Vec4<u32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// `T` is restricted to the primitive numeric types (see [`Scalar`]).
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] copies the given value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices via
///   [`TryFrom`].
/// - [`Vector::ZERO`] and the [`Default`] implementation are all-zeroes.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are the unit vectors of 2, 3 and
///   4-dimensional vectors, as far as the dimension allows. [`Vector::basis`] works for any `N`.
/// - [`Vector::extend`] appends an element, [`Vector::truncate`] and [`Vector::truncated_from`]
///   drop trailing ones.
/// - [`Vector::cast`] converts the elements to another [`Scalar`] type.
///
/// # Element Access
///
/// - Elements of 2, 3 and 4-dimensional vectors can be accessed as fields `x`, `y`, `z` and `w`.
///   The aliases `r`, `g`, `b` and `a` are also provided, as well as `w` and `h` for
///   2-dimensional vectors. All of them refer to the same storage.
/// - The [`Index`] and [`IndexMut`] impls work just like on arrays (including the panic when
///   out of bounds).
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`] expose the underlying
///   elements.
///
/// ```
/// # use cagey_math::*;
/// let mut v = vec2(1, 2);
/// v.x = 10;
/// assert_eq!(v.r, 10);
/// assert_eq!(v.w, 10);
/// assert_eq!(v[0], 10);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T: Scalar, const N: usize>(pub(crate) [T; N]);

#[cfg(feature = "bytemuck")]
unsafe impl<T: Scalar + bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: Scalar + bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Scalar> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Scalar> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Scalar> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

struct AssertNotLonger<const N: usize, const M: usize>;

impl<const N: usize, const M: usize> AssertNotLonger<N, M> {
    const OK: () = assert!(N <= M, "cannot truncate a vector into a longer one");
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let v = Vector::from_fn(|i| i as u32 + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Returns the unit vector along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is not less than `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// assert_eq!(Vec3f::basis(2), Vec3f::Z);
    /// assert_eq!(Vector::<i8, 6>::basis(4), [0, 0, 0, 0, 1, 0]);
    /// ```
    pub fn basis(axis: usize) -> Self {
        assert!(axis < N, "axis {axis} is out of range for a {N}-element vector");
        Self::from_fn(|i| if i == axis { T::ONE } else { T::ZERO })
    }

    /// Creates a vector from the first `N` elements of a vector of length `M`.
    ///
    /// Using this to lengthen a vector (`N > M`) fails to compile:
    ///
    /// ```compile_fail
    /// # use cagey_math::*;
    /// let v: Vec4f = Vector::truncated_from(vec2(1.0, 2.0));
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let v: Vec2<i32> = Vector::truncated_from(vec4(1, 2, 3, 4));
    /// assert_eq!(v, vec2(1, 2));
    /// ```
    pub fn truncated_from<const M: usize>(v: Vector<T, M>) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = AssertNotLonger::<N, M>::OK;
        Self::from_fn(|i| v[i])
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
        U: Scalar,
    {
        Vector(self.0.map(f))
    }

    /// Converts each element to `U` like an `as` cast would.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let v = vec3(1.7f32, -2.2, 300.0).cast::<u8>();
    /// assert_eq!(v, vec3(1, 0, 255));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: CastInto<U>,
        U: Scalar,
    {
        self.map(CastInto::cast_into)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_array()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// Also see [`Vector::abs_angle_to`] for computing the exact angle between them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// assert_eq!(Vec3d::X.dot(Vec3d::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// This is cheaper than [`Vector::length`] and preserves ordering, so it is the better choice
    /// for comparing lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// assert_eq!(vec2(4, 0).length_squared(), 16);
    /// ```
    #[doc(alias = "length2")]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Returns `true` if every pair of elements of `self` and `other` differs by at most
    /// `epsilon`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let a = vec2(1.0, 2.0);
    /// assert!(a.fuzzy_equals(vec2(1.05, 1.95), 0.1));
    /// assert!(!a.fuzzy_equals(vec2(1.2, 2.0), 0.1));
    /// assert!(vec2(10u8, 20).fuzzy_equals(vec2(12, 19), 2));
    /// assert!(!vec2(i8::MIN, 0).fuzzy_equals(vec2(i8::MAX, 0), i8::MAX));
    /// ```
    pub fn fuzzy_equals(self, other: Self, epsilon: T) -> bool {
        self.0
            .into_iter()
            .zip(other.0)
            .all(|(a, b)| a.abs_diff_le(b, epsilon))
    }

    /// [`Vector::fuzzy_equals`] with the machine epsilon of `T` as the tolerance.
    ///
    /// For integer vectors this is exact equality.
    pub fn nearly_equal(self, other: Self) -> bool {
        self.fuzzy_equals(other, T::EPSILON)
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), b.min(a));
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self {
        Self::from_fn(|i| MinMax::min(self[i], other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), b.max(a));
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self {
        Self::from_fn(|i| MinMax::max(self[i], other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let v = vec3(-1, 5, 12).clamp(Vector::splat(0), Vector::splat(10));
    /// assert_eq!(v, vec3(0, 5, 10));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::from_fn(|i| MinMax::clamp(self[i], min[i], max[i]))
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// assert_eq!(Vec3f::Z.length(), 1.0);
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns `1 / length`.
    ///
    /// A zero-length vector yields infinity.
    pub fn length_inverted(self) -> T {
        T::ONE / self.length()
    }

    /// Returns `true` if the squared length is smaller than the squared machine epsilon.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// assert!(Vec3f::ZERO.is_zero_length());
    /// assert!(vec2(1e-8f32, 0.0).is_zero_length());
    /// assert!(!vec2(1e-3f32, 0.0).is_zero_length());
    /// ```
    pub fn is_zero_length(self) -> bool {
        self.length_squared().abs() < T::EPSILON * T::EPSILON
    }

    /// Scales this vector by its inverse length, resulting in a unit vector.
    ///
    /// The length is not checked: normalizing a zero-length vector yields `NaN` elements. Use
    /// [`Vector::try_normalize`] if that can happen.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// assert!(Vec2f::ZERO.normalize()[0].is_nan());
    /// ```
    pub fn normalize(self) -> Self {
        self * self.length_inverted()
    }

    /// Normalizes this vector, or returns [`None`] if its length is zero (or too close to zero to
    /// be inverted).
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// assert_eq!(vec2(0.0, -2.0).try_normalize(), Some(vec2(0.0, -1.0)));
    /// assert_eq!(Vec2f::ZERO.try_normalize(), None);
    /// ```
    pub fn try_normalize(self) -> Option<Self> {
        let inv = self.length_inverted();
        if self.is_zero_length() || !inv.is_finite() {
            log::trace!("cannot normalize {self:?}: length is zero");
            return None;
        }
        Some(self * inv)
    }

    /// Computes the smallest positive angle between `self` and `other`.
    ///
    /// Both `self` and `other` must have non-zero length. A zero-length operand yields `NaN`.
    ///
    /// Also see [`Vector::signed_angle_to`] for getting a signed result depending on the relative
    /// orientation of the vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// use std::f32::consts::TAU;
    ///
    /// let a = Vec3f::Y;
    /// let b = Vec3f::X;
    /// assert_approx_eq!(a.abs_angle_to(b), Radian::new(TAU / 4.0));
    /// assert_approx_eq!(a.abs_angle_to(-a), Radian::new(TAU / 2.0));
    /// ```
    pub fn abs_angle_to(self, other: Self) -> Radian<T> {
        let cos = self.dot(other) / (self.length() * other.length());
        // `MinMax::clamp` would turn NaN into -1
        if cos.is_nan() {
            return Radian::new(cos);
        }
        Radian::new(cos.clamp(-T::ONE, T::ONE).acos())
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        vec3(x, y, value)
    }
}

impl<T: Number> Vector<T, 2> {
    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is the Z coordinate of the cross product of `self` and `other` extended with Z=0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// assert_eq!(Vec2f::X.perp_dot(Vec2f::Y), 1.0);
    /// assert_eq!(Vec2f::Y.perp_dot(Vec2f::X), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T {
        let [a1, a2] = self.0;
        let [b1, b2] = other.0;
        a1 * b2 - a2 * b1
    }
}

impl<T: Float> Vector<T, 2> {
    /// Rotates `self` clockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// assert_approx_eq!(Vec2f::Y.rotate_clockwise(90.0f32.deg()), Vec2f::X).abs(1e-6);
    /// assert_approx_eq!(Vec2f::Y.rotate_clockwise(180.0f32.deg()), -Vec2f::Y).abs(1e-6);
    /// ```
    pub fn rotate_clockwise(self, angle: impl Into<Radian<T>>) -> Self {
        Mat2::rotation_clockwise(angle) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    pub fn rotate_counterclockwise(self, angle: impl Into<Radian<T>>) -> Self {
        Mat2::rotation_counterclockwise(angle) * self
    }

    /// Computes the (signed) clockwise rotation needed to align `self` with `other`.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right. If the
    /// Y axis points *down*, swap the arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// use std::f32::consts::TAU;
    ///
    /// // The Y axis can be aligned with the X axis by rotating it clockwise by a quarter turn.
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), Radian::new(TAU / 4.0));
    /// assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), Radian::new(-TAU / 4.0));
    /// ```
    pub fn signed_angle_to(self, other: Self) -> Radian<T> {
        Radian::new(-self.perp_dot(other).atan2(self.dot(other)))
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        vec4(x, y, z, value)
    }

    /// Returns the first two elements.
    pub fn xy(self) -> Vector<T, 2> {
        self.truncate()
    }

    /// Returns the first two elements.
    pub fn rg(self) -> Vector<T, 2> {
        self.xy()
    }
}

impl<T: Number> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// Only signed element types are supported.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    ///
    /// ```compile_fail
    /// # use cagey_math::*;
    /// Vec2f::X.cross(Vec2f::Y);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 1.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }

    /// Returns the first two elements.
    pub fn xy(self) -> Vector<T, 2> {
        let [x, y, ..] = self.0;
        vec2(x, y)
    }

    /// Returns the first two elements.
    pub fn rg(self) -> Vector<T, 2> {
        self.xy()
    }

    /// Returns the first three elements.
    pub fn xyz(self) -> Vector<T, 3> {
        self.truncate()
    }

    /// Returns the first three elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let color = vec4(0.2, 0.4, 0.6, 1.0);
    /// assert_eq!(color.rgb(), vec3(0.2, 0.4, 0.6));
    /// ```
    pub fn rgb(self) -> Vector<T, 3> {
        self.xyz()
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    /// Returns [`Vector::ZERO`].
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: Scalar> From<(Vector<T, 2>, T)> for Vector<T, 3> {
    #[inline]
    fn from((xy, z): (Vector<T, 2>, T)) -> Self {
        xy.extend(z)
    }
}

impl<T: Scalar> From<(Vector<T, 3>, T)> for Vector<T, 4> {
    #[inline]
    fn from((xyz, w): (Vector<T, 3>, T)) -> Self {
        xyz.extend(w)
    }
}

/// Fails with a [`DimensionError`] unless the slice has exactly `N` elements.
///
/// ```
/// # use cagey_math::*;
/// let v = Vec3::try_from(&[1, 2, 3][..]).unwrap();
/// assert_eq!(v, vec3(1, 2, 3));
///
/// let err = Vec3::try_from(&[1, 2][..]).unwrap_err();
/// assert_eq!(err, DimensionError { expected: 3, actual: 2 });
/// ```
impl<T: Scalar, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = DimensionError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        DimensionError::check(N, slice.len())?;
        Ok(Self::from_fn(|i| slice[i]))
    }
}

impl<T: Scalar, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: Scalar + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str(")")
    }
}

impl<T: Scalar, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: Scalar, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T: Scalar, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: Scalar, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T: Scalar>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{assert_approx_eq, AngleExt};

    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Vec3f::X, [1.0, 0.0, 0.0]);
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec4i::W, [0, 0, 0, 1]);
        assert_eq!(Vec2u::ZERO, Vec2u::default());
        assert_eq!(Vector::<f64, 5>::basis(0), [1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn basis_out_of_range() {
        Vec2f::basis(2);
    }

    #[test]
    fn extend_truncate() {
        let v = vec2(1, 2).extend(3);
        assert_eq!(v, vec3(1, 2, 3));
        assert_eq!(Vec3::from((vec2(1, 2), 3)), v);
        assert_eq!(Vec4::from((v, 4)), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate(), v);
        assert_eq!(vec4(1, 2, 3, 4).xy(), vec2(1, 2));
        assert_eq!(v.rg(), vec2(1, 2));

        let same: Vec3<i32> = Vector::truncated_from(v);
        assert_eq!(same, v);
    }

    #[test]
    fn cast() {
        let v = vec3(1.5f64, -0.5, 2.0).cast::<i32>();
        assert_eq!(v, vec3(1, 0, 2));
        assert_eq!(vec2(1u8, 255).cast::<f32>(), vec2(1.0, 255.0));
    }

    #[test]
    fn slices() {
        let data = [1.0f32, 2.0, 3.0, 4.0];
        let v = Vec4f::try_from(&data[..]).unwrap();
        assert_eq!(v, data);
        assert_eq!(
            Vec2f::try_from(&data[..3]),
            Err(DimensionError {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.1}", vec2(0.3f64, 1.0)), "(0.3, 1.0)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(vec2(3u32, 4).length_squared(), 25);
    }

    #[test]
    fn lengths() {
        let v = vec2(3.0f64, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_inverted(), 0.2);
        assert_eq!(Vec2d::ZERO.length_inverted(), f64::INFINITY);
        assert!(!v.is_zero_length());
        assert!(Vec3d::ZERO.is_zero_length());
    }

    #[test]
    fn normalize() {
        assert_approx_eq!(vec3(1.0f32, 1.0, 1.0).normalize().length(), 1.0).abs(1e-6);
        assert!(vec3(0.0f32, 0.0, 0.0).normalize().as_slice().iter().all(|e| e.is_nan()));
        assert_eq!(Vec3f::ZERO.try_normalize(), None);
        assert_eq!(vec2(1e-30f32, 0.0).try_normalize(), None);
        assert_eq!(vec2(0.0f32, 5.0).try_normalize(), Some(Vec2f::Y));
    }

    #[test]
    fn fuzzy() {
        let a = vec3(1.0f32, 2.0, 3.0);
        assert!(a.nearly_equal(a));
        assert!(a.nearly_equal(vec3(1.0 + f32::EPSILON, 2.0, 3.0)));
        assert!(!a.nearly_equal(vec3(1.001, 2.0, 3.0)));
        assert!(a.fuzzy_equals(vec3(1.001, 2.0, 3.0), 0.01));
        assert!(vec2(-5i32, 5).nearly_equal(vec2(-5, 5)));
        assert!(!vec2(-5i32, 5).nearly_equal(vec2(-4, 5)));
    }

    #[test]
    fn fuzzy_integer_extremes() {
        let lo = Vector::<i8, 2>::from([i8::MIN, 0]);
        assert!(!lo.fuzzy_equals([i8::MAX, 0].into(), i8::MAX));
        assert!(!lo.fuzzy_equals(Vector::ZERO, i8::MAX));
        assert!(lo.fuzzy_equals([-1, 0].into(), i8::MAX));
        assert!(!lo.fuzzy_equals(lo, -1));
        assert!(vec2(u8::MIN, 1).fuzzy_equals(vec2(u8::MAX, 1), u8::MAX));
    }

    #[test]
    fn rotate() {
        assert_approx_eq!(Vec2f::Y.rotate_clockwise(Radian::new(TAU / 4.0)), Vec2f::X).abs(1e-6);
        assert_approx_eq!(Vec2f::Y.rotate_clockwise(Radian::new(TAU / 2.0)), -Vec2f::Y).abs(1e-6);
        assert_approx_eq!(Vec2f::X.rotate_clockwise(180.0f32.deg()), -Vec2f::X).abs(1e-6);
        assert_approx_eq!(Vec2f::X.rotate_counterclockwise(90.0f32.deg()), Vec2f::Y).abs(1e-6);
    }

    #[test]
    fn abs_angle() {
        let quarter = Radian::new(TAU / 4.0);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::X), quarter);
        assert_approx_eq!(Vec3f::X.abs_angle_to(Vec3f::Y), quarter);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::Y), Radian::new(0.0));
        assert_approx_eq!(Vec3f::Y.abs_angle_to(-Vec3f::Y), Radian::new(TAU / 2.0));
        assert_approx_eq!(vec2(0.0, 2.0).abs_angle_to(vec2(-3.0, 0.0)), quarter);
        assert_approx_eq!(vec2(1.0, 1.0).abs_angle_to(vec2(1.0, -1.0)), quarter);
    }

    #[test]
    fn abs_angle_to_zero_length_is_nan() {
        assert!(Vec3f::ZERO.abs_angle_to(Vec3f::X).value().is_nan());
        assert!(Vec2d::X.abs_angle_to(Vec2d::ZERO).value().is_nan());
    }

    #[test]
    fn signed_angle() {
        assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), Radian::new(TAU / 4.0));
        assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), Radian::new(-TAU / 4.0));
        assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::Y), Radian::new(0.0));
        assert_approx_eq!(Vec2f::Y.signed_angle_to(-Vec2f::Y), Radian::new(-TAU / 2.0));

        let turned = Vec2f::Y.rotate_counterclockwise(100.0f32.deg());
        assert_approx_eq!(turned.signed_angle_to(Vec2f::Y), Radian::from(100.0f32.deg())).abs(1e-6);
    }
}
