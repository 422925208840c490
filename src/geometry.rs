/*

    Small helper math shared by the shapes:
    min / max of three values, the doubled signed
    area of a triangle and squared point-to-segment
    distance.

*/

use crate::interval::Interval;
use crate::prelude::*;

#[inline]
pub fn min3(a: Float, b: Float, c: Float) -> Float {
    a.min(b).min(c)
}

#[inline]
pub fn max3(a: Float, b: Float, c: Float) -> Float {
    a.max(b).max(c)
}

/// Twice the signed area of triangle abc, positive when counter clockwise.
/// This is the denominator of the barycentric parameters in Triangle.
pub fn signed_area_doubled(a: &Point, b: &Point, c: &Point) -> Float {
    a.x * (b.y - c.y) + a.y * (c.x - b.x) + b.x * c.y - b.y * c.x
}

/// Squared distance from `p` to the closest point of segment [start, end].
///
/// p is projected onto the line through start and end, the projection
/// parameter is clamped to [0, 1] and the squared distance to the clamped
/// point is returned. A segment with start == end is treated as a point.
pub fn distance_square_point_to_segment(start: &Point, end: &Point, p: &Point) -> Float {
    let seg = *end - *start;
    let sq_length = seg.length_squared();
    if sq_length == 0. {
        return p.distance_squared(*start);
    }

    let t = Interval::UNIT.clamp((*p - *start).dot(seg) / sq_length);
    let closest = *start + seg * t;
    p.distance_squared(closest)
}
