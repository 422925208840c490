/*

    Declare numeric types used throughout this crate.

    Point and PointXYZ are plain value types borrowed from
    bevy_math, they are Copy and never shared. 2D and 3D
    points are kept as unrelated types on purpose, Sphere
    is the only shape that takes a PointXYZ.

    WARNING: If you like to use f32 instead of f64
    you need to change all three aliases below, and
    EPSILON will be too small for f32 rounding.

    @date: Oct, 2026
*/

use bevy_math::{DVec2, DVec3};

pub type Float = f64;
pub type Point = DVec2;
pub type PointXYZ = DVec3;

/// Tolerance applied by every containment test in the crate.
pub const EPSILON: Float = 1e-9;
