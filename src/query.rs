/*

    Consumers of the uniform contains( ) capability:
    find which shape a point falls in, classify batches
    of points and estimate areas by sampling.

    These are plain linear scans over a ShapeList, there
    is no acceleration structure behind them.

*/

use rand::Rng;
use rayon::prelude::*;

use crate::bbox::BBoxable;
use crate::sampler::sample_in_bbox;
use crate::shapes::{HeapAllocatedShape, Shape};
use crate::prelude::*;

/// Index of the first shape containing p, in list order.
pub fn first_containing(shapes: &[HeapAllocatedShape], p: &Point) -> Option<usize> {
    shapes.iter().position(|shape| shape.contains(p))
}

/// Indices of every shape containing p, ascending.
pub fn containing(shapes: &[HeapAllocatedShape], p: &Point) -> Vec<usize> {
    shapes
        .iter()
        .enumerate()
        .filter(|(_, shape)| shape.contains(p))
        .map(|(i, _)| i)
        .collect()
}

/// first_containing( ) for every point, in parallel. Output is in point order.
pub fn classify(shapes: &[HeapAllocatedShape], points: &[Point]) -> Vec<Option<usize>> {
    let span = tracing::span!(tracing::Level::INFO, "classify");
    let _enter = span.enter();
    debug!("Classifying {} points against {} shapes", points.len(), shapes.len());

    // --- Rayon Multithreading ---
    points
        .par_iter()
        .map(|p| first_containing(shapes, p))
        .collect()
}

/// Number of points contained by shape, counted in parallel.
pub fn count_inside<S: Shape + ?Sized>(shape: &S, points: &[Point]) -> usize {
    points
        .par_iter()
        .filter(|p| shape.contains(p))
        .count()
}

/// Monte Carlo estimate of the shape's area from `samples` points drawn
/// in its bounding box. Returns 0 when there is nothing to sample.
pub fn estimate_area<S, R>(shape: &S, samples: usize, rng: &mut R) -> Float
where
    S: Shape + ?Sized,
    R: Rng + ?Sized,
{
    let span = tracing::span!(tracing::Level::INFO, "estimate_area");
    let _enter = span.enter();

    let bbox = shape.bbox();
    let points = sample_in_bbox(bbox, samples, rng);
    if points.is_empty() || bbox.area() <= 0. {
        return 0.;
    }

    let hits = count_inside(shape, &points);
    debug!("{} of {} samples inside {:?}", hits, points.len(), shape);
    bbox.area() * (hits as Float / points.len() as Float)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbox::BoundingBox;
    use crate::shapes::{Circle, Rectangle, ShapeList, Triangle};
    use rand::{SeedableRng, rngs::StdRng};

    fn scene() -> ShapeList {
        vec![
            Arc::new(Rectangle::new(0., 10., 0., 10.)),
            Arc::new(Circle::new(10., 10., 2.)),
            Arc::new(Triangle::new(Point::new(-5., -5.), Point::new(-1., -5.), Point::new(-3., -1.))),
        ]
    }

    #[test]
    fn test_first_containing() {
        let shapes = scene();
        assert_eq!(first_containing(&shapes, &Point::new(5., 5.)), Some(0));
        assert_eq!(first_containing(&shapes, &Point::new(10., 10.)), Some(0));
        assert_eq!(first_containing(&shapes, &Point::new(11., 11.)), Some(1));
        assert_eq!(first_containing(&shapes, &Point::new(-3., -4.)), Some(2));
        assert_eq!(first_containing(&shapes, &Point::new(50., 50.)), None);
        assert_eq!(first_containing(&[], &Point::ZERO), None);
    }

    #[test]
    fn test_containing_lists_overlaps() {
        let shapes = scene();
        assert_eq!(containing(&shapes, &Point::new(9.5, 9.5)), vec![0, 1]);
        assert_eq!(containing(&shapes, &Point::new(-3., -4.)), vec![2]);
        assert!(containing(&shapes, &Point::new(-20., 0.)).is_empty());
    }

    #[test]
    fn test_classify_keeps_point_order() {
        let shapes = scene();
        let points: Vec<Point> = vec![
            Point::new(50., 50.),
            Point::new(11., 11.),
            Point::new(1., 1.),
            Point::new(-3., -4.),
        ];
        assert_eq!(classify(&shapes, &points), vec![None, Some(1), Some(0), Some(2)]);
    }

    #[test]
    fn test_count_inside() {
        let circle = Circle::new(0., 0., 1.);
        let points: Vec<Point> = (-4..=4)
            .flat_map(|i| (-4..=4).map(move |j| Point::new(i as Float * 0.5, j as Float * 0.5)))
            .collect();
        // lattice points with x^2 + y^2 <= 1 at step 0.5
        assert_eq!(count_inside(&circle, &points), 13);
    }

    #[test]
    fn test_estimate_area() {
        let mut rng = StdRng::seed_from_u64(42);
        let circle = Circle::new(1., 1., 1.);
        let area = estimate_area(&circle, 100_000, &mut rng);
        assert!((area - std::f64::consts::PI).abs() < 0.05, "{area}");

        let tri = Triangle::new(Point::new(0., 0.), Point::new(4., 0.), Point::new(0., 4.));
        let area = estimate_area(&tri, 100_000, &mut rng);
        assert!((area - 8.).abs() < 0.1, "{area}");

        let rect = Rectangle::new(0., 3., 0., 2.);
        assert_eq!(estimate_area(&rect, 1_000, &mut rng), 6.);
    }

    #[test]
    fn test_estimate_area_of_nothing() {
        let mut rng = StdRng::seed_from_u64(42);
        let degenerate = Triangle::new(Point::new(0., 0.), Point::new(1., 1.), Point::new(2., 2.));
        assert!(estimate_area(&degenerate, 100, &mut rng) < 0.1);
        let point = BoundingBox::default();
        assert_eq!(estimate_area(&point, 100, &mut rng), 0.);
        assert_eq!(estimate_area(&Circle::new(0., 0., 1.), 0, &mut rng), 0.);
        assert_eq!(estimate_area(&Circle::new(0., 0., -1.), 100, &mut rng), 0.);
    }
}
