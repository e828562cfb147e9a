//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    approx::ApproxEq,
    traits::{Number, Scalar},
    Vector,
};

use super::Matrix;

/// Indexing a matrix yields one of its column vectors.
impl<T: Scalar, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[inline]
    fn index(&self, col: usize) -> &Self::Output {
        &self.0[col]
    }
}

impl<T: Scalar, const C: usize, const R: usize> IndexMut<usize> for Matrix<T, C, R> {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.0[col]
    }
}

impl<T: Scalar, const C: usize, const R: usize> PartialEq for Matrix<T, C, R> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Scalar + Eq, const C: usize, const R: usize> Eq for Matrix<T, C, R> {}

impl<T, const C: usize, const R: usize> ApproxEq for Matrix<T, C, R>
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

impl<T: Number, const C: usize, const R: usize> Neg for Matrix<T, C, R> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T: Scalar, const C: usize, const R: usize> Add for Matrix<T, C, R> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// Element-wise addition.
impl<T: Scalar, const C: usize, const R: usize> AddAssign for Matrix<T, C, R> {
    fn add_assign(&mut self, rhs: Self) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Element-wise subtraction.
impl<T: Scalar, const C: usize, const R: usize> Sub for Matrix<T, C, R> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

/// Element-wise subtraction.
impl<T: Scalar, const C: usize, const R: usize> SubAssign for Matrix<T, C, R> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0
            .iter_mut()
            .zip(rhs.0)
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Adds a scalar to every element.
impl<T: Scalar, const C: usize, const R: usize> Add<T> for Matrix<T, C, R> {
    type Output = Self;

    fn add(mut self, rhs: T) -> Self {
        self += rhs;
        self
    }
}

/// Adds a scalar to every element.
impl<T: Scalar, const C: usize, const R: usize> AddAssign<T> for Matrix<T, C, R> {
    fn add_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|col| *col += Vector::splat(rhs));
    }
}

/// Subtracts a scalar from every element.
impl<T: Scalar, const C: usize, const R: usize> Sub<T> for Matrix<T, C, R> {
    type Output = Self;

    fn sub(mut self, rhs: T) -> Self {
        self -= rhs;
        self
    }
}

/// Subtracts a scalar from every element.
impl<T: Scalar, const C: usize, const R: usize> SubAssign<T> for Matrix<T, C, R> {
    fn sub_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|col| *col -= Vector::splat(rhs));
    }
}

/// Matrix-Scalar multiplication.
impl<T: Scalar, const C: usize, const R: usize> Mul<T> for Matrix<T, C, R> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

/// Matrix-Scalar multiplication.
impl<T: Scalar, const C: usize, const R: usize> MulAssign<T> for Matrix<T, C, R> {
    fn mul_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|col| *col *= rhs);
    }
}

/// Matrix-Scalar division.
impl<T: Scalar, const C: usize, const R: usize> Div<T> for Matrix<T, C, R> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

/// Matrix-Scalar division.
impl<T: Scalar, const C: usize, const R: usize> DivAssign<T> for Matrix<T, C, R> {
    fn div_assign(&mut self, rhs: T) {
        self.0.iter_mut().for_each(|col| *col /= rhs);
    }
}

/// Matrix-Vector multiplication.
///
/// The result is the linear combination of the matrix columns, weighted by the vector elements.
impl<T: Scalar, const C: usize, const R: usize> Mul<Vector<T, C>> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        self.0
            .into_iter()
            .zip(rhs.0)
            .fold(Vector::ZERO, |acc, (col, factor)| acc + col * factor)
    }
}

/// Vector-Matrix multiplication (the vector is treated as a row vector).
impl<T: Scalar, const C: usize, const R: usize> Mul<Matrix<T, C, R>> for Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, C, R>) -> Self::Output {
        Vector::from_fn(|col| self.dot(rhs.0[col]))
    }
}

/// Matrix multiplication.
///
/// Multiplies an `R`x`K` matrix with a `K`x`C` matrix, yielding an `R`x`C` matrix (in rows x
/// columns notation).
impl<T: Scalar, const K: usize, const C: usize, const R: usize> Mul<Matrix<T, C, K>>
    for Matrix<T, K, R>
{
    type Output = Matrix<T, C, R>;

    fn mul(self, rhs: Matrix<T, C, K>) -> Self::Output {
        Matrix(rhs.0.map(|col| self * col))
    }
}

macro_rules! scalar_lhs_ops {
    ($($t:ty),+) => {
        $(
            /// Adds the scalar to every element.
            impl<const C: usize, const R: usize> Add<Matrix<$t, C, R>> for $t {
                type Output = Matrix<$t, C, R>;

                fn add(self, rhs: Matrix<$t, C, R>) -> Self::Output {
                    rhs + self
                }
            }

            /// Subtracts every element from the scalar.
            impl<const C: usize, const R: usize> Sub<Matrix<$t, C, R>> for $t {
                type Output = Matrix<$t, C, R>;

                fn sub(self, rhs: Matrix<$t, C, R>) -> Self::Output {
                    rhs.map(|elem| self - elem)
                }
            }

            /// Scalar-Matrix multiplication.
            impl<const C: usize, const R: usize> Mul<Matrix<$t, C, R>> for $t {
                type Output = Matrix<$t, C, R>;

                fn mul(self, rhs: Matrix<$t, C, R>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs_ops!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
