/*

    Declare primitives: Rectangle, Circle, Triangle, Sphere

    2D shapes implement Shape and answer contains(&Point).
    Sphere lives in 3D and implements Volume instead, the
    two families are not unified since their points differ.

    All shapes are immutable after new( ), their bounding
    box is computed once there and never touched again.

    @date: Oct, 2026
*/

use std::fmt::Debug;

use crate::bbox::{BBoxable, BoundingBox};
use crate::geometry::{distance_square_point_to_segment, max3, min3, signed_area_doubled};
use crate::interval::Interval;
use crate::prelude::*;

pub type HeapAllocatedShape = Arc<dyn Shape>;
pub type ShapeList = Vec<HeapAllocatedShape>;


// =======================================================================================================
// Shape Traits
// =======================================================================================================

/// Planar shape with a point-containment test.
///
/// The default body is the plain bounding box test with EPSILON,
/// concrete shapes override it with their exact test.
pub trait Shape : Debug + Send + Sync + BBoxable {
    fn contains(&self, p: &Point) -> bool {
        self.bbox().contains(p, EPSILON)
    }
}

/// Solid in 3D space with a point-containment test.
pub trait Volume : Debug + Send + Sync {
    fn contains(&self, p: &PointXYZ) -> bool;
}

impl Shape for BoundingBox {}


// =======================================================================================================
// Rectangle (impl Shape)
// =======================================================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    a: Point, // min corner
    b: Point, // max corner
    bbox: BoundingBox,
}

impl Rectangle {
    pub fn new(xmin: Float, xmax: Float, ymin: Float, ymax: Float) -> Self {
        if xmin > xmax || ymin > ymax {
            debug!("Rectangle with inverted bounds x: [{xmin}, {xmax}] y: [{ymin}, {ymax}], it will contain nothing");
        }
        Self {
            a: Point::new(xmin, ymin),
            b: Point::new(xmax, ymax),
            bbox: BoundingBox::from_extents(xmin, xmax, ymin, ymax),
        }
    }

    pub fn min_corner(&self) -> Point {
        self.a
    }

    pub fn max_corner(&self) -> Point {
        self.b
    }

    pub fn center(&self) -> Point {
        self.bbox.center
    }
}

impl BBoxable for Rectangle {
    fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }
}

impl Shape for Rectangle {
    // Tested against the corners directly, must agree with the bbox test
    fn contains(&self, p: &Point) -> bool {
        p.x >= self.a.x - EPSILON &&
        p.x <= self.b.x + EPSILON &&
        p.y >= self.a.y - EPSILON &&
        p.y <= self.b.y + EPSILON
    }
}


// =======================================================================================================
// Circle (impl Shape)
// =======================================================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: Float,
    bbox: BoundingBox,
}

impl Circle {
    pub fn new(xcenter: Float, ycenter: Float, radius: Float) -> Self {
        if radius < 0. {
            debug!("Circle at ({xcenter}, {ycenter}) has negative radius {radius}");
        }
        Self {
            center: Point::new(xcenter, ycenter),
            radius,
            bbox: BoundingBox::from_circle(xcenter, ycenter, radius),
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }
}

impl BBoxable for Circle {
    fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }
}

impl Shape for Circle {
    fn contains(&self, p: &Point) -> bool {
        // WARNING: tolerance goes on radius^2, not on the distance
        let d = self.center.distance_squared(*p);
        d <= self.radius * self.radius + EPSILON
    }
}


// =======================================================================================================
// Triangle (impl Shape)
// =======================================================================================================
// Degenerate (collinear) triangles are allowed, they contain their edges only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
    bbox: BoundingBox,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        let xmin = min3(a.x, b.x, c.x);
        let ymin = min3(a.y, b.y, c.y);
        let xmax = max3(a.x, b.x, c.x);
        let ymax = max3(a.y, b.y, c.y);

        if signed_area_doubled(&a, &b, &c) == 0. {
            debug!("Found degenerate triangle with vertices a: {:?}, b: {:?}, c: {:?}", a, b, c);
        }

        Self {
            a,
            b,
            c,
            bbox: BoundingBox::from_extents(xmin, xmax, ymin, ymax),
        }
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    pub fn centroid(&self) -> Point {
        (self.a + self.b + self.c) / 3.
    }

    /// Parameters (t1, t2) of p, interior iff both are in [0, 1] and t1 + t2 <= 1.
    /// Both are NaN or infinite when the triangle is degenerate.
    fn barycentric(&self, p: &Point) -> (Float, Float) {
        let (a, b, c) = (self.a, self.b, self.c);
        let denominator = signed_area_doubled(&a, &b, &c);
        let t1 = (p.x * (c.y - a.y) + p.y * (a.x - c.x) - a.x * c.y + a.y * c.x) / denominator;
        let t2 = (p.x * (b.y - a.y) + p.y * (a.x - b.x) - a.x * b.y + a.y * b.x) / -denominator;
        (t1, t2)
    }

    fn near_edge(&self, p: &Point) -> bool {
        distance_square_point_to_segment(&self.a, &self.b, p) <= EPSILON
            || distance_square_point_to_segment(&self.b, &self.c, p) <= EPSILON
            || distance_square_point_to_segment(&self.c, &self.a, p) <= EPSILON
    }
}

impl BBoxable for Triangle {
    fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }
}

impl Shape for Triangle {
    fn contains(&self, p: &Point) -> bool {
        if !self.bbox.contains(p, EPSILON) {
            return false;
        }

        let (t1, t2) = self.barycentric(p);
        let s = t1 + t2;
        if Interval::UNIT.contains(t1) && Interval::UNIT.contains(t2) && s <= 1. {
            return true;
        }

        // Points on the boundary may fall just outside after the division above,
        // and a zero denominator always ends up here.
        // See http://totologic.blogspot.com/2014/01/accurate-point-in-triangle-test.html
        self.near_edge(p)
    }
}


// =======================================================================================================
// Sphere (impl Volume)
// =======================================================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: PointXYZ,
    radius: Float,
    bbox: BoundingBox,
}

impl Sphere {
    pub fn new(xcenter: Float, ycenter: Float, zcenter: Float, radius: Float) -> Self {
        if radius < 0. {
            debug!("Sphere at ({xcenter}, {ycenter}, {zcenter}) has negative radius {radius}");
        }
        Self {
            center: PointXYZ::new(xcenter, ycenter, zcenter),
            radius,
            // WARNING: projection on xy only, z extent is not represented.
            // contains( ) never reads it, check before using it as a 3D pre-filter.
            bbox: BoundingBox::from_circle(xcenter, ycenter, radius),
        }
    }

    pub fn center(&self) -> PointXYZ {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }
}

impl BBoxable for Sphere {
    fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }
}

impl Volume for Sphere {
    fn contains(&self, p: &PointXYZ) -> bool {
        let d = self.center.distance_squared(*p);
        d <= self.radius * self.radius + EPSILON
    }
}
