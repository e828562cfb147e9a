//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    approx::ApproxEq,
    traits::{Number, Scalar},
};

use super::Vector;

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: Scalar, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Scalar + Eq, const N: usize> Eq for Vector<T, N> {}

impl<T: Scalar, const N: usize> PartialEq<[T; N]> for Vector<T, N> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.0 == *other
    }
}

impl<T: Scalar, const N: usize> PartialEq<Vector<T, N>> for [T; N] {
    fn eq(&self, other: &Vector<T, N>) -> bool {
        *self == other.0
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: Scalar + ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T: Number, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Element-wise addition.
impl<T: Scalar, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Element-wise subtraction.
impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

/// Element-wise subtraction.
impl<T: Scalar, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Element-wise multiplication.
impl<T: Scalar, const N: usize> Mul for Vector<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

/// Element-wise multiplication.
impl<T: Scalar, const N: usize> MulAssign for Vector<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs *= rhs);
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T: Scalar, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Element-wise division.
impl<T: Scalar, const N: usize> Div for Vector<T, N> {
    type Output = Self;

    fn div(mut self, rhs: Self) -> Self {
        self /= rhs;
        self
    }
}

/// Element-wise division.
impl<T: Scalar, const N: usize> DivAssign for Vector<T, N> {
    fn div_assign(&mut self, rhs: Self) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs /= rhs);
    }
}

/// Vector-Scalar division (divides every element by the scalar).
impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

/// Vector-Scalar division (divides every element by the scalar).
impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|lhs| *lhs /= rhs);
    }
}

// Coherence rules out a generic `impl<T> Mul<Vector<T, N>> for T`, so the scalar-on-the-left
// operators are spelled out for every element type.
macro_rules! scalar_lhs_ops {
    ($($t:ty),+) => {
        $(
            /// Scalar-Vector multiplication (scaling).
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs * self
                }
            }

            /// Scalar-Vector division: divides the scalar by every element.
            impl<const N: usize> Div<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn div(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|elem| self / elem)
                }
            }
        )+
    };
}

scalar_lhs_ops!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn add_sub() {
        assert_eq!(vec2(1.0f32, 2.0) + vec2(3.0, 4.0), vec2(4.0, 6.0));
        assert_eq!(vec3(5, 5, 5) - vec3(1, 2, 3), vec3(4, 3, 2));

        let mut v = vec3(1u8, 2, 3);
        v += Vector::splat(1);
        assert_eq!(v, [2, 3, 4]);
        v -= vec3(2, 2, 2);
        assert_eq!(v, [0, 1, 2]);
    }

    #[test]
    fn neg() {
        let v = vec3(1.0f64, -2.0, 0.5);
        assert_eq!(-v, vec3(-1.0, 2.0, -0.5));
        assert_eq!(v + -v, Vec3d::ZERO);
    }

    #[test]
    fn scale() {
        let v = vec2(2.0f32, -4.0);
        assert_eq!(v * 2.0, vec2(4.0, -8.0));
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(v / 2.0, vec2(1.0, -2.0));

        let mut m = vec4(1, 2, 3, 4);
        m *= 3;
        assert_eq!(m, [3, 6, 9, 12]);
        m /= 3;
        assert_eq!(m, [1, 2, 3, 4]);
    }

    #[test]
    fn scalar_divided_by_vector() {
        let v = vec2(2.0f32, 4.0);
        assert_eq!(8.0 / v, vec2(4.0, 2.0));
        assert_eq!(v / 8.0, vec2(0.25, 0.5));
        assert_eq!(12i32 / vec3(1, 2, 3), vec3(12, 6, 4));
    }

    #[test]
    fn elementwise() {
        assert_eq!(vec3(1, 2, 3) * vec3(4, 5, 6), vec3(4, 10, 18));
        assert_eq!(vec3(4.0, 10.0, 18.0) / vec3(4.0, 5.0, 6.0), vec3(1.0, 2.0, 3.0));

        let mut v = vec2(3i16, 4);
        v *= vec2(2, 3);
        assert_eq!(v, vec2(6, 12));
        v /= vec2(3, 4);
        assert_eq!(v, vec2(2, 3));
    }

    #[test]
    fn equality() {
        assert_eq!([1, 2], vec2(1, 2));
        assert_ne!(vec2(1.0, 2.0), vec2(1.0, 2.0 + f64::EPSILON * 2.0));
        assert_ne!(Vec2f::splat(f32::NAN), Vec2f::splat(f32::NAN));
    }
}
