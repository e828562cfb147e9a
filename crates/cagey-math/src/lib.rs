//! Fixed-size vectors, small matrices and angle types.
//!
//! The building blocks are [`Vector<T, N>`] and [`Matrix<T, C, R>`], whose dimensions are const
//! generics. Element types are restricted to the primitive floats and integers (see [`Scalar`]).
//! Operations that only make sense for some dimensions (like [`Vector::cross`] or
//! [`Determinant`]) only exist on those, so misuse is a compile error rather than a panic.
//!
//! ```
//! use cagey_math::*;
//!
//! let v = vec3(1.0f32, 2.0, 2.0);
//! assert_eq!(v.length(), 3.0);
//! assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
//!
//! let m = mat22(4.0f64, 7.0, 2.0, 6.0);
//! assert_approx_eq!(m * m.inverse(), Mat22d::identity()).abs(1e-12);
//!
//! let turned = Vec2f::X.rotate_counterclockwise(90.0f32.deg());
//! assert_approx_eq!(turned, Vec2f::Y).abs(1e-6);
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Only statically-sized vectors and matrices. Relying on const generics for the dimensions
//!   keeps the API small, and every value lives on the stack.
//! - A single, column-major, unpadded data layout for matrices, so that a `Matrix<T, C, R>` has
//!   the layout of `[T; C * R]` and can be handed to graphics APIs as-is (see the `bytemuck`
//!   feature).
//! - Determinants and inverses are closed-form and provided for 2x2, 3x3 and 4x4 matrices only.
//!   There are no decompositions, and no SIMD backends.
//! - Arithmetic preconditions are not checked: normalizing a zero-length vector or inverting a
//!   singular matrix yields non-finite values. The checked variants ([`Vector::try_normalize`],
//!   [`Inverse::try_inverse`]) return an [`Option`] instead.
//! - Angles carry their unit in the type. [`Degree`] and [`Radian`] only convert into each other
//!   explicitly.
//!
//! # Cargo Features
//!
//! - `bytemuck` (enabled by default): implements [`bytemuck::Zeroable`] and [`bytemuck::Pod`] for
//!   [`Vector`] and [`Matrix`].
//!
//! [`bytemuck::Zeroable`]: https://docs.rs/bytemuck/latest/bytemuck/trait.Zeroable.html
//! [`bytemuck::Pod`]: https://docs.rs/bytemuck/latest/bytemuck/trait.Pod.html

pub mod approx;
pub mod consts;
mod angle;
mod error;
mod func;
mod matrix;
mod traits;
mod vector;

pub use angle::*;
pub use error::DimensionError;
pub use func::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;
