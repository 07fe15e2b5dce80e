//! Matrix-matrix and matrix-vector multiplication

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

use vmlib::{
    make_rotation_x, make_rotation_z, make_scaling, make_translation, Mat44, Vec3, Vec4,
    IDENTITY44,
};

const EPS: f32 = 1e-6;

fn assert_near(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn identity_times_identity() {
    let result = IDENTITY44 * IDENTITY44;
    for i in 0..4 {
        for j in 0..4 {
            assert_near(result[(i, j)], IDENTITY44[(i, j)]);
        }
    }
}

#[test]
fn rotation_times_scaling() {
    let rotation = make_rotation_z(FRAC_PI_4);
    let scaling = make_scaling(2.0, 2.0, 2.0);
    let result = rotation * scaling;

    assert_near(result[(0, 0)], SQRT_2);
    assert_near(result[(0, 1)], -SQRT_2);
    assert_near(result[(1, 0)], SQRT_2);
    assert_near(result[(1, 1)], SQRT_2);
    assert_near(result[(2, 2)], 2.0);
    assert_near(result[(3, 3)], 1.0);
}

#[test]
fn rotation_times_translation() {
    let rotation = make_rotation_x(FRAC_PI_2);
    let translation = make_translation(Vec3::new(1.0, 2.0, 3.0));
    let result = rotation * translation;

    assert_near(result[(0, 3)], 1.0);
    assert_near(result[(1, 3)], -3.0);
    assert_near(result[(2, 3)], 2.0);
    assert_near(result[(3, 3)], 1.0);
}

#[test]
fn composition_order_matters() {
    let rotation = make_rotation_z(FRAC_PI_2);
    let translation = make_translation(Vec3::new(1.0, 0.0, 0.0));

    let rt = rotation * translation;
    let tr = translation * rotation;
    assert!(!rt.approx_eq(&tr, EPS));

    // Translate then rotate: (0,0,0) -> (1,0,0) -> (0,1,0)
    let p = rt * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert_near(p.x, 0.0);
    assert_near(p.y, 1.0);
}

#[test]
fn identity_times_vector() {
    let vec = Vec4::new(1.0, 2.0, 3.0, 1.0);
    let result = IDENTITY44 * vec;

    assert_near(result.x, vec.x);
    assert_near(result.y, vec.y);
    assert_near(result.z, vec.z);
    assert_near(result.w, vec.w);
}

#[test]
fn translation_times_vector() {
    let vec = Vec4::new(1.0, 1.0, 1.0, 1.0);
    let result = make_translation(Vec3::new(2.0, 3.0, 4.0)) * vec;

    assert_near(result.x, 3.0);
    assert_near(result.y, 4.0);
    assert_near(result.z, 5.0);
    assert_near(result.w, 1.0);
}

#[test]
fn scaling_times_vector() {
    let vec = Vec4::new(1.0, 1.0, 1.0, 1.0);
    let result = make_scaling(2.0, 3.0, 4.0) * vec;

    assert_near(result.x, 2.0);
    assert_near(result.y, 3.0);
    assert_near(result.z, 4.0);
    assert_near(result.w, 1.0);
}

#[test]
fn rotation_times_vector() {
    let vec = Vec4::new(1.0, 0.0, 0.0, 1.0);
    let result = make_rotation_z(FRAC_PI_2) * vec;

    assert_near(result.x, 0.0);
    assert_near(result.y, 1.0);
    assert_near(result.z, 0.0);
    assert_near(result.w, 1.0);
}

#[test]
fn chained_transforms_associate() {
    let a = make_rotation_x(0.7);
    let b = make_translation(Vec3::new(-2.0, 0.5, 9.0));
    let c = make_scaling(0.5, 3.0, -1.0);

    let left = (a * b) * c;
    let right = a * (b * c);
    assert!(left.approx_eq(&right, 1e-5));

    let v = Vec4::new(1.0, -1.0, 2.0, 1.0);
    let stepwise = a * (b * (c * v));
    let combined: Mat44 = a * b * c;
    let direct = combined * v;
    for i in 0..4 {
        assert!((stepwise[i] - direct[i]).abs() < 1e-5);
    }
}
