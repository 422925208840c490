/*

    Closed ranges [min, max] of Float and a check if
    x is in range. Bounding boxes are tested one axis
    at a time through these, and the triangle test uses
    UNIT for its barycentric parameters.

    NaN is never contained in any interval since every
    comparison with NaN is false.

*/

use crate::numeric::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    /// [0, 1]
    pub const UNIT: Self = Self {
        min: 0.0,
        max: 1.0,
    };

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    /// [min - epsilon, max + epsilon], each side widened on its own
    pub fn inflated(&self, epsilon: Float) -> Self {
        Self {
            min: self.min - epsilon,
            max: self.max + epsilon,
        }
    }

    pub fn validate(&self) -> bool {
        self.max >= self.min
    }

    pub fn size(&self) -> Float {
        self.max - self.min
    }

    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn clamp(&self, x: Float) -> Float {
        if x < self.min { self.min }
        else if x > self.max { self.max }
        else { x }
    }
}
