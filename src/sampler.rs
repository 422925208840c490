
use rand::Rng;

use crate::bbox::BoundingBox;
use crate::prelude::*;

//////////////////////////////////////////////////////////////////////////
/// SAMPLING UTILS
//////////////////////////////////////////////////////////////////////////

/// Uniform point inside `bbox` (boundary included).
/// Caller must make sure bbox.validate( ) holds.
pub fn sample_point<R: Rng + ?Sized>(bbox: &BoundingBox, rng: &mut R) -> Point {
    let (xint, yint) = (bbox.x_interval(), bbox.y_interval());
    debug_assert!(bbox.validate());
    Point::new(
        rng.random_range(xint.min..=xint.max),
        rng.random_range(yint.min..=yint.max),
    )
}

/// `n` uniform points inside `bbox`. Returns no points for an
/// inverted or non-finite box since there is nothing to sample from.
pub fn sample_in_bbox<R: Rng + ?Sized>(bbox: &BoundingBox, n: usize, rng: &mut R) -> Vec<Point> {
    if !bbox.validate() {
        warn!("Cannot sample from invalid bounding box {:?}", bbox);
        return vec![];
    }
    (0..n).map(|_| sample_point(bbox, rng)).collect()
}

/// Same as sample_point( ) but with the thread local rng.
pub fn random_point_in(bbox: &BoundingBox) -> Option<Point> {
    if !bbox.validate() {
        return None;
    }
    Some(sample_point(bbox, &mut rand::rng()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_samples_stay_in_box() {
        let mut rng = StdRng::seed_from_u64(7);
        let bbox = BoundingBox::from_extents(-1., 3., 10., 12.);
        let points = sample_in_bbox(&bbox, 500, &mut rng);
        assert_eq!(points.len(), 500);
        assert!(points.iter().all(|p| bbox.contains(p, 0.)));
    }

    #[test]
    fn test_degenerate_box_samples_its_point() {
        let mut rng = StdRng::seed_from_u64(7);
        let bbox = BoundingBox::from_extents(2., 2., -1., -1.);
        let points = sample_in_bbox(&bbox, 10, &mut rng);
        assert!(points.iter().all(|p| *p == Point::new(2., -1.)));
    }

    #[test]
    fn test_invalid_box_gives_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        let bbox = BoundingBox::from_extents(5., 0., 0., 1.);
        assert!(sample_in_bbox(&bbox, 10, &mut rng).is_empty());
        assert!(random_point_in(&bbox).is_none());

        let unbounded = BoundingBox::new(Point::ZERO, Point::new(Float::INFINITY, 1.));
        assert!(random_point_in(&unbounded).is_none());
    }

    #[test]
    fn test_random_point_in() {
        let bbox = BoundingBox::from_circle(0., 0., 1.);
        let p = random_point_in(&bbox).unwrap();
        assert!(bbox.contains(&p, 0.));
    }
}
