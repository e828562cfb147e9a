use std::{array, fmt};

use crate::{
    angle::Radian,
    error::DimensionError,
    traits::{CastInto, Float, Number, Scalar},
    Vector,
};

mod ops;

/// A 2x2 matrix.
pub type Mat22<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat22f = Mat22<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat22d = Mat22<f64>;
/// A 2x2 matrix with [`i32`] elements.
pub type Mat22i = Mat22<i32>;
/// A 2x2 matrix with [`u32`] elements.
pub type Mat22u = Mat22<u32>;
/// A 3x3 matrix.
pub type Mat33<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat33f = Mat33<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat33d = Mat33<f64>;
/// A 3x3 matrix with [`i32`] elements.
pub type Mat33i = Mat33<i32>;
/// A 3x3 matrix with [`u32`] elements.
pub type Mat33u = Mat33<u32>;
/// A 4x4 matrix.
pub type Mat44<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat44f = Mat44<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat44d = Mat44<f64>;
/// A 4x4 matrix with [`i32`] elements.
pub type Mat44i = Mat44<i32>;
/// A 4x4 matrix with [`u32`] elements.
pub type Mat44u = Mat44<u32>;

/// A 2x2 matrix.
pub type Mat2<T> = Mat22<T>;
/// A 3x3 matrix.
pub type Mat3<T> = Mat33<T>;
/// A 4x4 matrix.
pub type Mat4<T> = Mat44<T>;

/// A matrix with 2 columns and 3 rows.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 columns and 4 rows.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 columns and 2 rows.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 columns and 4 rows.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 columns and 2 rows.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 columns and 3 rows.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A column-major matrix with `C` columns and `R` rows, and element type `T`.
///
/// The matrix is stored as `C` column vectors of type [`Vector<T, R>`], without padding: its
/// layout is that of `[T; C * R]`, listing the elements column by column.
///
/// # Construction
///
/// - [`Matrix::from_columns`] and [`Matrix::from_rows`] take arrays of column or row vectors.
/// - [`mat22`], [`mat33`] and [`mat44`] take the elements one by one, column by column. The
///   [`From`] impls for arrays of length `C * R` and the [`TryFrom`] impl for slices read the
///   same order.
/// - [`Matrix::from_fn`] invokes a closure with the column and row of each element.
/// - [`Matrix::fill`] copies one value into every element, [`Matrix::ZERO`] and [`Default`] are
///   all-zeroes.
/// - Square matrices additionally have [`Matrix::identity`] and [`Matrix::from_diagonal`], and
///   2x2 matrices have [`Matrix::rotation_clockwise`] and [`Matrix::rotation_counterclockwise`].
///
/// # Element Access
///
/// Indexing a matrix with a `usize` yields a column vector, so `m[c][r]` is the element in column
/// `c` and row `r`. Indexing out of bounds panics, just like it does for slices.
/// [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s instead:
///
/// ```
/// # use cagey_math::*;
/// let mut m = mat22(1, 2, 3, 4);
/// assert_eq!(m[1], vec2(3, 4));
/// assert_eq!(m[1][0], 3);
///
/// m[0][1] = 7;
/// assert_eq!(m.get(0, 1), Some(&7));
/// assert_eq!(m.get(2, 0), None);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T: Scalar, const C: usize, const R: usize>(pub(crate) [Vector<T, R>; C]);

#[rustfmt::skip]
#[cfg(feature = "bytemuck")]
unsafe impl<T: Scalar + bytemuck::Zeroable, const C: usize, const R: usize> bytemuck::Zeroable for Matrix<T, C, R> {}
#[rustfmt::skip]
#[cfg(feature = "bytemuck")]
unsafe impl<T: Scalar + bytemuck::Pod, const C: usize, const R: usize> bytemuck::Pod for Matrix<T, C, R> {}

impl<T: Scalar, const C: usize, const R: usize> Matrix<T, C, R> {
    /// The number of elements in the matrix.
    pub const SIZE: usize = C * R;

    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::ZERO; C]);

    /// Creates a matrix with every element set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// assert_eq!(Mat22f::fill(2.0), mat22(2.0, 2.0, 2.0, 2.0));
    /// assert_eq!(Mat33i::fill(0), Mat33i::ZERO);
    /// ```
    pub fn fill(value: T) -> Self {
        Self([Vector::splat(value); C])
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(Into::into))
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let m = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(m, Mat3x2::from_columns([[1, 4], [2, 5], [3, 6]]));
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Matrix::<T, R, C>::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (column and row) of each
    /// element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let m = Mat3x2::from_fn(|col, row| (col * 10 + row) as i32);
    /// assert_eq!(m, Matrix::from_rows([
    ///     [0, 10, 20],
    ///     [1, 11, 21],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| Vector::from_fn(|row| cb(col, row))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, C, R>
    where
        F: FnMut(T) -> U,
        U: Scalar,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Converts each element to `U` like an `as` cast would.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let m = mat22(0.5f32, 1.5, 2.5, -3.5).cast::<i32>();
    /// assert_eq!(m, mat22(0, 1, 2, -3));
    /// ```
    pub fn cast<U>(self) -> Matrix<U, C, R>
    where
        T: CastInto<U>,
        U: Scalar,
    {
        self.map(CastInto::cast_into)
    }

    /// Returns the column vectors of this matrix.
    #[inline]
    pub fn columns(&self) -> &[Vector<T, R>; C] {
        &self.0
    }

    /// Converts this matrix into its column vectors.
    #[inline]
    pub fn into_columns(self) -> [Vector<T, R>; C] {
        self.0
    }

    /// Returns row `row` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than `R`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let m = mat22(1, 2, 3, 4);
    /// assert_eq!(m.row(0), vec2(1, 3));
    /// assert_eq!(m.row(1), vec2(2, 4));
    /// ```
    pub fn row(&self, row: usize) -> Vector<T, C> {
        Vector::from_fn(|col| self.0[col][row])
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let m = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(m, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, R, C> {
        Matrix::from_fn(|col, row| self.0[row][col])
    }

    /// Returns a reference to the element at `(col, row)`, or [`None`] if out of bounds.
    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        self.0.get(col).and_then(|column| column.0.get(row))
    }

    /// Returns a mutable reference to the element at `(col, row)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let mut m = Mat2x3::<i32>::ZERO;
    /// if let Some(elem) = m.get_mut(1, 2) {
    ///     *elem = 999;
    /// }
    /// assert!(m.get_mut(2, 1).is_none());
    /// assert_eq!(m[1], vec3(0, 0, 999));
    /// ```
    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|column| column.0.get_mut(row))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector
    /// or matrix with it returns that vector or matrix unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let m = mat33(1, 2, 3, 4, 5, 6, 7, 8, 9);
    /// assert_eq!(Mat33i::identity() * m, m);
    /// assert_eq!(m * Mat33i::identity(), m);
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|col, row| if col == row { T::ONE } else { T::ZERO })
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self {
        let diag = diag.into();
        Self::from_fn(|col, row| if col == row { diag[col] } else { T::ZERO })
    }

    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// assert_eq!(Matrix::from_diagonal([1, 2, 3]).trace(), 1 + 2 + 3);
    /// assert_eq!(Mat44f::identity().trace(), 4.0);
    /// ```
    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }

    /// Removes column `col` and row `row`. `M` must be `N - 1`.
    fn minor<const M: usize>(&self, col: usize, row: usize) -> Matrix<T, M, M> {
        Matrix::from_fn(|c, r| {
            let c = if c < col { c } else { c + 1 };
            let r = if r < row { r } else { r + 1 };
            self.0[c][r]
        })
    }

    /// The signed minor of the element at `(col, row)`.
    fn cofactor<const M: usize>(&self, col: usize, row: usize) -> T
    where
        T: Number,
        Matrix<T, M, M>: Determinant<Output = T>,
    {
        let minor = self.minor::<M>(col, row).determinant();
        if (col + row) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }
}

impl<T: Float> Matrix<T, 2, 2> {
    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// let m = Mat22f::rotation_clockwise(90.0f32.deg());
    /// assert_approx_eq!(m * Vec2f::Y, Vec2f::X).abs(1e-6);
    /// ```
    pub fn rotation_clockwise(angle: impl Into<Radian<T>>) -> Self {
        let angle: Radian<T> = angle.into();
        Self::rotation_counterclockwise(-angle)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    pub fn rotation_counterclockwise(angle: impl Into<Radian<T>>) -> Self {
        let angle: Radian<T> = angle.into();
        let (sin, cos) = (angle.sin(), angle.cos());
        Self::from_columns([[cos, sin], [-sin, cos]])
    }
}

/// Square matrices that have a [determinant].
///
/// Implemented for 2x2, 3x3 and 4x4 matrices of signed element types. There is no generic
/// implementation for other sizes:
///
/// ```compile_fail
/// # use cagey_math::*;
/// Matrix::<f32, 5, 5>::identity().determinant();
/// ```
///
/// [determinant]: https://en.wikipedia.org/wiki/Determinant
pub trait Determinant {
    type Output;

    fn determinant(&self) -> Self::Output;
}

impl<T: Number> Determinant for Matrix<T, 2, 2> {
    type Output = T;

    #[inline]
    fn determinant(&self) -> T {
        self.0[0][0] * self.0[1][1] - self.0[1][0] * self.0[0][1]
    }
}

impl<T: Number> Determinant for Matrix<T, 3, 3> {
    type Output = T;

    fn determinant(&self) -> T {
        let [[a, d, g], [b, e, h], [c, f, i]] = self.0.map(Vector::into_array);
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }
}

impl<T: Number> Determinant for Matrix<T, 4, 4> {
    type Output = T;

    /// Laplace expansion along the first column.
    fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, row| {
            let term = self.0[0][row] * self.minor::<3>(0, row).determinant();
            if row % 2 == 0 {
                acc + term
            } else {
                acc - term
            }
        })
    }
}

/// Square matrices that can be inverted.
///
/// Implemented for 2x2, 3x3 and 4x4 matrices of [`f32`] and [`f64`]. Integer matrices can't be
/// inverted:
///
/// ```compile_fail
/// # use cagey_math::*;
/// Mat22i::identity().inverse();
/// ```
pub trait Inverse: Sized {
    /// Returns the inverse of `self`, computed as the adjugate scaled by `1 / determinant`.
    ///
    /// The determinant is not checked: inverting a singular matrix yields non-finite elements.
    /// Use [`Inverse::try_inverse`] if that can happen.
    fn inverse(&self) -> Self;

    /// Returns the inverse of `self`, or [`None`] if its determinant is zero or not finite.
    fn try_inverse(&self) -> Option<Self>;
}

fn invertible<T: Float>(det: T) -> bool {
    let invertible = det != T::ZERO && det.is_finite();
    if !invertible {
        log::trace!("matrix is not invertible (determinant is {det:?})");
    }
    invertible
}

impl<T: Float> Inverse for Matrix<T, 2, 2> {
    /// # Examples
    ///
    /// ```
    /// # use cagey_math::*;
    /// assert_eq!(Mat22f::identity().inverse(), Mat22f::identity());
    ///
    /// let m = mat22(4.0, 7.0, 2.0, 6.0);
    /// assert_approx_eq!(m * m.inverse(), Mat22d::identity()).abs(1e-12);
    /// ```
    fn inverse(&self) -> Self {
        let [[a, c], [b, d]] = self.0.map(Vector::into_array);
        Matrix::from_columns([[d, -c], [-b, a]]) * (T::ONE / self.determinant())
    }

    fn try_inverse(&self) -> Option<Self> {
        invertible(self.determinant()).then(|| self.inverse())
    }
}

macro_rules! cofactor_inverse {
    ($($n:literal => $m:literal),+) => {
        $(
            impl<T: Float> Inverse for Matrix<T, $n, $n> {
                fn inverse(&self) -> Self {
                    let inv_det = T::ONE / self.determinant();
                    Matrix::from_fn(|col, row| self.cofactor::<$m>(row, col) * inv_det)
                }

                fn try_inverse(&self) -> Option<Self> {
                    invertible(self.determinant()).then(|| self.inverse())
                }
            }
        )+
    };
}

cofactor_inverse!(3 => 2, 4 => 3);

impl<T: Scalar, const C: usize, const R: usize> Default for Matrix<T, C, R> {
    fn default() -> Self {
        Self::ZERO
    }
}

macro_rules! from_flat_array {
    ($($c:literal x $r:literal),+) => {
        $(
            /// Reads the elements column by column.
            impl<T: Scalar> From<[T; $c * $r]> for Matrix<T, $c, $r> {
                fn from(elems: [T; $c * $r]) -> Self {
                    Self::from_fn(|col, row| elems[col * $r + row])
                }
            }
        )+
    };
}

from_flat_array!(2 x 2, 2 x 3, 2 x 4, 3 x 2, 3 x 3, 3 x 4, 4 x 2, 4 x 3, 4 x 4);

/// Reads the elements column by column, failing with a [`DimensionError`] unless the slice has
/// exactly `C * R` elements.
impl<T: Scalar, const C: usize, const R: usize> TryFrom<&[T]> for Matrix<T, C, R> {
    type Error = DimensionError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        DimensionError::check(Self::SIZE, slice.len())?;
        Ok(Self::from_fn(|col, row| slice[col * R + row]))
    }
}

/// Prints the matrix row by row, in natural writing order.
impl<T: Scalar, const C: usize, const R: usize> fmt::Debug for Matrix<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: Scalar, const C: usize, const R: usize>(&'a Matrix<T, C, R>, usize);

        impl<T: Scalar, const C: usize, const R: usize> fmt::Debug for FormatRow<'_, T, C, R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for col in 0..C {
                    if col != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}", self.0[col][self.1])?;
                }
                f.write_str("]")
            }
        }

        f.debug_list()
            .entries((0..R).map(|row| FormatRow(self, row)))
            .finish()
    }
}

/// Constructs a [`Mat22`] from its elements, column by column.
///
/// ```
/// # use cagey_math::*;
/// let m = mat22(1, 3, 5, 1);
/// assert_eq!(m[0], vec2(1, 3));
/// assert_eq!(m[1], vec2(5, 1));
/// ```
#[inline]
pub fn mat22<T: Scalar>(x1: T, y1: T, x2: T, y2: T) -> Mat22<T> {
    Matrix([Vector([x1, y1]), Vector([x2, y2])])
}

/// Constructs a [`Mat33`] from its elements, column by column.
#[inline]
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub fn mat33<T: Scalar>(
    x1: T, y1: T, z1: T,
    x2: T, y2: T, z2: T,
    x3: T, y3: T, z3: T,
) -> Mat33<T> {
    Matrix([
        Vector([x1, y1, z1]),
        Vector([x2, y2, z2]),
        Vector([x3, y3, z3]),
    ])
}

/// Constructs a [`Mat44`] from its elements, column by column.
#[inline]
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub fn mat44<T: Scalar>(
    x1: T, y1: T, z1: T, w1: T,
    x2: T, y2: T, z2: T, w2: T,
    x3: T, y3: T, z3: T, w3: T,
    x4: T, y4: T, z4: T, w4: T,
) -> Mat44<T> {
    Matrix([
        Vector([x1, y1, z1, w1]),
        Vector([x2, y2, z2, w2]),
        Vector([x3, y3, z3, w3]),
        Vector([x4, y4, z4, w4]),
    ])
}
