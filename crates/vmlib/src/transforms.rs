//! Transform factories
//!
//! All angles are in radians and follow the right-hand rule. The matrices act
//! on column vectors, so `make_translation(t) * make_rotation_z(a)` rotates
//! first and translates second.

use std::f32::consts::PI;

use crate::mat44::Mat44;
use crate::vec::Vec3;

/// Rotation around the X axis
pub fn make_rotation_x(angle: f32) -> Mat44 {
    let (s, c) = angle.sin_cos();
    Mat44::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation around the Y axis
pub fn make_rotation_y(angle: f32) -> Mat44 {
    let (s, c) = angle.sin_cos();
    Mat44::from_rows([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation around the Z axis
pub fn make_rotation_z(angle: f32) -> Mat44 {
    let (s, c) = angle.sin_cos();
    Mat44::from_rows([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Translation by `t`
///
/// Moves points (`w = 1`); directions (`w = 0`) pass through unchanged.
pub fn make_translation(t: Vec3) -> Mat44 {
    let mut m = Mat44::IDENTITY;
    m[(0, 3)] = t.x;
    m[(1, 3)] = t.y;
    m[(2, 3)] = t.z;
    m
}

/// Non-uniform scale along the coordinate axes
pub fn make_scaling(sx: f32, sy: f32, sz: f32) -> Mat44 {
    let mut m = Mat44::IDENTITY;
    m[(0, 0)] = sx;
    m[(1, 1)] = sy;
    m[(2, 2)] = sz;
    m
}

/// Right-handed perspective projection into OpenGL-style clip space
///
/// View space looks down -Z; depth maps to [-1, 1] after the perspective
/// divide. `fov_y` is the full vertical field of view.
///
/// The parameters are not validated. `near == far` divides by zero and
/// `fov_y` outside `(0, PI)` gives a negative or infinite focal scale; both
/// produce infinities or NaNs in the result. A warning is logged in those
/// cases but the matrix is still built from the inputs as given.
pub fn make_perspective_projection(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat44 {
    if near == far || !(fov_y > 0.0 && fov_y < PI) || aspect == 0.0 {
        tracing::warn!(
            fov_y,
            aspect,
            near,
            far,
            "degenerate perspective projection parameters"
        );
    }

    let s = 1.0 / (fov_y * 0.5).tan();
    let depth = far - near;

    let mut m = Mat44::ZERO;
    m[(0, 0)] = s / aspect;
    m[(1, 1)] = s;
    m[(2, 2)] = -(far + near) / depth;
    m[(2, 3)] = -(2.0 * far * near) / depth;
    m[(3, 2)] = -1.0;
    m
}

impl Mat44 {
    pub fn rotation_x(angle: f32) -> Self {
        make_rotation_x(angle)
    }

    pub fn rotation_y(angle: f32) -> Self {
        make_rotation_y(angle)
    }

    pub fn rotation_z(angle: f32) -> Self {
        make_rotation_z(angle)
    }

    pub fn translation(t: Vec3) -> Self {
        make_translation(t)
    }

    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        make_scaling(sx, sy, sz)
    }

    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        make_perspective_projection(fov_y, aspect, near, far)
    }
}
