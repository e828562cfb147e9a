use std::mem::{align_of, size_of};

use cagey_math::*;

fn init_logger() {
    env_logger::builder()
        .is_test(true)
        .filter_module("cagey_math", log::LevelFilter::Trace)
        .try_init()
        .ok();
}

#[test]
fn vector_scenarios() {
    assert_eq!(vec2(1.0f32, 2.0) + vec2(3.0, 4.0), vec2(4.0, 6.0));
    assert_eq!(dot(vec3(1.0f64, 0.0, 0.0), vec3(0.0, 1.0, 0.0)), 0.0);
    assert_eq!(cross(vec3(1.0f32, 0.0, 0.0), vec3(0.0, 1.0, 0.0)), vec3(0.0, 0.0, 1.0));

    // `vector / scalar` and `scalar / vector` are different operations.
    let v = vec2(2.0f32, 8.0);
    assert_eq!(v / 2.0, vec2(1.0, 4.0));
    assert_eq!(2.0 / v, vec2(1.0, 0.25));
}

#[test]
fn aliases() {
    let mut v = Vec2f::from([5.0, 6.0]);
    assert_eq!([v.x, v.r, v.w], [v[0]; 3]);
    assert_eq!([v.y, v.g, v.h], [v[1]; 3]);

    v.w = 1.0;
    assert_eq!((v.x, v.r, v[0]), (1.0, 1.0, 1.0));

    let mut c = vec4(0u8, 64, 128, 255);
    c.a = 0;
    assert_eq!(c.w, 0);
    assert_eq!(c.rgb(), c.xyz());
}

#[test]
fn defaults_are_zero() {
    assert_eq!(Vec3f::default(), Vec3f::ZERO);
    assert_eq!(Vector::<u16, 7>::default(), Vector::splat(0));
    assert_eq!(Mat44d::default(), Mat44d::fill(0.0));
    assert_eq!(Degree::<f32>::default().value(), 0.0);
}

#[test]
fn matrix_scenarios() {
    let m = mat22(1.0f32, 2.0, 3.0, 4.0);
    assert_eq!(determinant(&m), -2.0);

    let t = transpose(m);
    assert_eq!(t[0][1], m[1][0]);
    assert_eq!(t[1][0], m[0][1]);
    assert_eq!(t.diagonal(), m.diagonal());

    let m = mat22(4.0f32, 7.0, 2.0, 6.0);
    assert_approx_eq!(inverse(&m) * m, Mat22f::identity()).abs(1e-6);
    assert_approx_eq!(m * inverse(&m), Mat22f::identity()).abs(1e-6);

    assert_eq!(inverse(&Mat22f::identity()), Mat22f::identity());
    assert_eq!(inverse(&Mat33f::identity()), Mat33f::identity());
    assert_eq!(inverse(&Mat44f::identity()), Mat44f::identity());
}

#[test]
fn unchecked_operations_propagate_non_finite_values() {
    init_logger();

    let n = Vec3f::ZERO.normalize();
    assert!(n.as_slice().iter().all(|e| e.is_nan()));
    assert_eq!(Vec3f::ZERO.try_normalize(), None);

    let singular = Mat33d::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
    assert_eq!(singular.determinant(), 0.0);
    assert!(singular.inverse().columns().iter().any(|col| !col[0].is_finite()));
    assert_eq!(singular.try_inverse(), None);
}

#[test]
fn slice_conversions() -> anyhow::Result<()> {
    init_logger();

    let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    let v = Vec3f::try_from(&data[..3])?;
    let m = Mat33f::try_from(&data[..])?;
    assert_eq!(m[0], v);
    assert_eq!(m, Mat33f::from(data));

    let err = Mat44f::try_from(&data[..]).unwrap_err();
    assert_eq!(err.to_string(), "expected 16 elements, got 9");
    assert_eq!(
        Vec4f::try_from(&data[..2]),
        Err(DimensionError {
            expected: 4,
            actual: 2
        })
    );
    Ok(())
}

#[test]
fn layout() {
    assert_eq!(size_of::<Vec3f>(), size_of::<[f32; 3]>());
    assert_eq!(align_of::<Vec3f>(), align_of::<f32>());
    assert_eq!(size_of::<Vector<u8, 5>>(), 5);
    assert_eq!(size_of::<Mat44f>(), size_of::<[f32; 16]>());
    assert_eq!(size_of::<Matrix<f64, 3, 4>>(), size_of::<[f64; 12]>());
    assert_eq!(align_of::<Mat33d>(), align_of::<f64>());
    assert_eq!(size_of::<Radian<f32>>(), size_of::<f32>());
}

#[cfg(feature = "bytemuck")]
#[test]
fn bytemuck_casts() {
    let m = Mat22f::from_columns([[1.0, 2.0], [3.0, 4.0]]);
    let flat: &[f32; 4] = bytemuck::cast_ref(&m);
    assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);

    let vs = [vec2(1u16, 2), vec2(3, 4)];
    let raw: &[u16] = bytemuck::cast_slice(&vs);
    assert_eq!(raw, &[1, 2, 3, 4]);
}

#[test]
fn angles() {
    let right = 90.0f64.deg();
    let rad: Radian<f64> = right.into();
    assert_approx_eq!(rad, Radian::new(std::f64::consts::FRAC_PI_2));
    assert_approx_eq!(Degree::from(rad), right).rel(1e-12);

    let turned = Vec2d::X.rotate_counterclockwise(right);
    assert_approx_eq!(turned, Vec2d::Y).abs(1e-12);
    assert_approx_eq!(Vec2d::X.abs_angle_to(turned), rad).abs(1e-12);
}
