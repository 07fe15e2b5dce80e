//! vmlib: vector and matrix math
//!
//! A small, value-typed math layer for real-time graphics:
//!
//! - **Vectors**: `Vec3` and `Vec4` with named components and indexing
//! - **Matrices**: row-major `Mat44` with bounds-checked `(row, col)` access
//! - **Transforms**: rotation, translation, scaling and perspective projection
//!
//! # Example
//!
//! ```rust
//! use std::f32::consts::FRAC_PI_2;
//! use vmlib::{make_rotation_z, make_translation, Vec3, Vec4};
//!
//! // Rotate a quarter turn around Z, then move along X
//! let model = make_translation(Vec3::new(5.0, 0.0, 0.0)) * make_rotation_z(FRAC_PI_2);
//! let p = model * Vec4::new(1.0, 0.0, 0.0, 1.0);
//!
//! assert!((p.x - 5.0).abs() < 1e-6);
//! assert!((p.y - 1.0).abs() < 1e-6);
//! ```
//!
//! All operations are pure functions over `Copy` values.

pub mod error;
pub mod mat44;
pub mod transforms;
pub mod vec;

pub use error::{MathError, Result};
pub use mat44::{mat44_mul, mat44_mul_vec, Mat44, IDENTITY44};
pub use transforms::{
    make_perspective_projection, make_rotation_x, make_rotation_y, make_rotation_z,
    make_scaling, make_translation,
};
pub use vec::{Vec3, Vec4};


#[cfg(all(test, feature = "bytemuck"))]
mod bytemuck_tests {
    use super::*;

    #[test]
    fn test_raw_bytes_are_row_major() {
        let m = make_translation(Vec3::new(1.0, 2.0, 3.0));
        let floats: &[f32; 16] = bytemuck::cast_ref(&m);
        assert_eq!(floats[3], 1.0);
        assert_eq!(floats[7], 2.0);
        assert_eq!(floats[11], 3.0);

        assert_eq!(std::mem::size_of::<Vec4>(), 16);
        assert_eq!(std::mem::size_of::<Vec3>(), 12);
    }
}
