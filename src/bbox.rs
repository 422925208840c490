/*

    Axis Aligned Bounding Box, stored as center + half extents.

    Every shape owns one of these, computed once at construction,
    and uses it as a cheap pre-filter before its exact test. The
    from_extents and from_circle constructors are the shared
    arithmetic shapes delegate to instead of repeating it.

    Nothing is validated on construction. Negative half extents give an
    inverted range on that axis and nothing is contained.

*/

use crate::interval::Interval;
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub center: Point,
    pub half_res: Point,
}

impl BoundingBox {

    pub fn new(center: Point, half_res: Point) -> Self {
        Self {
            center,
            half_res,
        }
    }

    pub fn from_extents(xmin: Float, xmax: Float, ymin: Float, ymax: Float) -> Self {
        let center = Point::new((xmax + xmin) / 2., (ymax + ymin) / 2.);
        let half_res = Point::new((xmax - xmin) / 2., (ymax - ymin) / 2.);
        Self::new(center, half_res)
    }

    pub fn from_circle(xcenter: Float, ycenter: Float, radius: Float) -> Self {
        Self::new(Point::new(xcenter, ycenter), Point::new(radius, radius))
    }

    pub fn x_interval(&self) -> Interval {
        Interval::new(self.center.x - self.half_res.x, self.center.x + self.half_res.x)
    }

    pub fn y_interval(&self) -> Interval {
        Interval::new(self.center.y - self.half_res.y, self.center.y + self.half_res.y)
    }

    pub fn min_corner(&self) -> Point {
        self.center - self.half_res
    }

    pub fn max_corner(&self) -> Point {
        self.center + self.half_res
    }

    /// True when the box is finite and both half extents are non-negative.
    pub fn validate(&self) -> bool {
        self.center.is_finite() && self.half_res.is_finite() && self.x_interval().validate() && self.y_interval().validate()
    }

    /// Area without any tolerance, zero for a degenerate box.
    pub fn area(&self) -> Float {
        self.x_interval().size() * self.y_interval().size()
    }

    /// Box test with `epsilon` added on every side.
    ///
    /// NOTE: this shadows `Shape::contains` for BoundingBox, call
    /// `Shape::contains(&bbox, &p)` for the fixed-EPSILON version.
    pub fn contains(&self, p: &Point, epsilon: Float) -> bool {
        self.x_interval().inflated(epsilon).contains(p.x)
            && self.y_interval().inflated(epsilon).contains(p.y)
    }
}

pub trait BBoxable {
    fn bbox(&self) -> &BoundingBox;
}

impl BBoxable for BoundingBox {
    fn bbox(&self) -> &BoundingBox {
        self
    }
}
