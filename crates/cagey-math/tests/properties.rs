//! Randomized checks of the algebraic laws vectors and matrices must obey.

use cagey_math::*;
use fastrand::Rng;

const ITERATIONS: usize = 200;

fn rand_f64(rng: &mut Rng) -> f64 {
    rng.f64() * 20.0 - 10.0
}

fn rand_vec<const N: usize>(rng: &mut Rng) -> Vector<f64, N> {
    Vector::from_fn(|_| rand_f64(rng))
}

/// Diagonally dominant, and therefore comfortably invertible.
fn rand_invertible<const N: usize>(rng: &mut Rng) -> Matrix<f64, N, N> {
    Matrix::from_fn(|col, row| rand_f64(rng) + if col == row { 50.0 } else { 0.0 })
}

#[test]
fn additive_identity_and_inverse() {
    let mut rng = Rng::with_seed(0x5eed_0001);
    for _ in 0..ITERATIONS {
        let v = rand_vec::<4>(&mut rng);
        assert_eq!(v + -v, Vec4d::ZERO);
        assert_eq!(v + Vec4d::ZERO, v);
        assert_eq!(v - v, Vec4d::default());
    }
}

#[test]
fn scaling() {
    let mut rng = Rng::with_seed(0x5eed_0002);
    for _ in 0..ITERATIONS {
        let v = Vec3i::from_fn(|_| rng.i32(-1000..1000));
        let (s, t) = (rng.i32(-30..30), rng.i32(-30..30));
        assert_eq!((v * s) * t, v * (s * t));
        assert_eq!(v * s + v * t, v * (s + t));

        let v = rand_vec::<3>(&mut rng);
        let (s, t) = (rand_f64(&mut rng), rand_f64(&mut rng));
        assert_approx_eq!((v * s) * t, v * (s * t)).abs(1e-9);
        assert_approx_eq!(v * s + v * t, v * (s + t)).abs(1e-9);
        assert_eq!(s * v, v * s);
    }
}

#[test]
fn dot_and_length() {
    let mut rng = Rng::with_seed(0x5eed_0003);
    for _ in 0..ITERATIONS {
        let v = rand_vec::<4>(&mut rng);
        assert_eq!(length(v), dot(v, v).sqrt());
        assert_eq!(length_squared(v), dot(v, v));
        assert_eq!(dot(v, -v), -dot(v, v));
    }
}

#[test]
fn normalize_is_idempotent() {
    let mut rng = Rng::with_seed(0x5eed_0004);
    for _ in 0..ITERATIONS {
        let v = rand_vec::<3>(&mut rng);
        if v.is_zero_length() {
            continue;
        }

        let n = normalize(v);
        assert_approx_eq!(length(n), 1.0).abs(1e-12);
        assert_approx_eq!(normalize(n), n).abs(1e-12);
        assert_eq!(v.try_normalize(), Some(n));
    }
}

#[test]
fn cross_is_orthogonal() {
    let mut rng = Rng::with_seed(0x5eed_0005);
    for _ in 0..ITERATIONS {
        let (a, b) = (rand_vec::<3>(&mut rng), rand_vec::<3>(&mut rng));
        let c = cross(a, b);
        assert_approx_eq!(dot(c, a), 0.0).abs(1e-9);
        assert_approx_eq!(dot(c, b), 0.0).abs(1e-9);
        assert_approx_eq!(cross(b, a), -c).abs(1e-12);
    }
}

fn check_square<const N: usize>(rng: &mut Rng)
where
    Matrix<f64, N, N>: Determinant<Output = f64> + Inverse,
{
    let identity = Matrix::<f64, N, N>::identity();
    let a = rand_invertible::<N>(rng);
    let b = rand_invertible::<N>(rng);

    assert_eq!(identity * a, a);
    assert_eq!(a * identity, a);
    assert_eq!(transpose(transpose(a)), a);
    assert_eq!(inverse(&identity), identity);

    assert_approx_eq!(a * inverse(&a), identity).abs(1e-12);
    assert_approx_eq!(inverse(&a) * a, identity).abs(1e-12);
    assert_eq!(try_inverse(&a), Some(a.inverse()));

    assert_approx_eq!(determinant(&(a * b)), determinant(&a) * determinant(&b)).rel(1e-9);
    assert_approx_eq!(determinant(&a.transpose()), determinant(&a)).rel(1e-9);
    assert_approx_eq!(determinant(&a.inverse()), 1.0 / determinant(&a)).rel(1e-9);
}

#[test]
fn square_matrices() {
    let mut rng = Rng::with_seed(0x5eed_0006);
    for _ in 0..ITERATIONS {
        check_square::<2>(&mut rng);
        check_square::<3>(&mut rng);
        check_square::<4>(&mut rng);
    }
}

#[test]
fn products_compose() {
    let mut rng = Rng::with_seed(0x5eed_0007);
    for _ in 0..ITERATIONS {
        let a = Mat2x3::from_fn(|_, _| rng.i64(-100..100));
        let b = Mat3x4::from_fn(|_, _| rng.i64(-100..100));
        let v = Vector::from_fn(|_| rng.i64(-100..100));
        assert_eq!((b * a) * v, b * (a * v));
        assert_eq!(transpose(b * a), transpose(a) * transpose(b));
    }
}

#[test]
fn angle_round_trip() {
    let mut rng = Rng::with_seed(0x5eed_0008);
    for _ in 0..ITERATIONS {
        let deg = Degree::new(rng.f64() * 720.0 - 360.0);
        assert_approx_eq!(Degree::from(Radian::from(deg)), deg).abs(1e-9);
        assert_approx_eq!(Radian::from(deg).value(), deg.value().to_radians()).abs(1e-12);
    }
}
