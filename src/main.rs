/*

    Small driver around the shapes crate: builds a handful
    of shapes, estimates their areas by sampling and logs
    where a few probe points land.

    Usage: shapecheck [num_samples]

*/

use std::{self, env, time::Instant};
use tracing_subscriber;

use fury_shapes::bbox::{BBoxable, BoundingBox};
use fury_shapes::query::{classify, estimate_area};
use fury_shapes::sampler::random_point_in;
use fury_shapes::shapes::{Circle, Rectangle, ShapeList, Sphere, Triangle, Volume};
use fury_shapes::prelude::*;

#[derive(Debug, SmartDefault)]
struct Config {
    #[default = 100_000]
    num_samples: usize,
    #[default = 8]
    num_probes: usize,
}

impl Config {
    fn from_args(args: &[String]) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Config::default();
        match args.len() {
            1 => warn!("No arguments were provided, using {} samples...", config.num_samples),
            2 => config.num_samples = args[1].parse()?,
            _ => return Err(format!("Usage: {} [num_samples]", args[0]).into()),
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let config = Config::from_args(&args).map_err(|e| {
        error!("Invalid arguments: {}", e);
        e
    })?;
    debug!("{:#?}", config);

    let shapes: ShapeList = vec![
        Arc::new(Rectangle::new(0., 10., 0., 10.)),
        Arc::new(Circle::new(0., 0., 5.)),
        Arc::new(Triangle::new(Point::new(0., 0.), Point::new(10., 0.), Point::new(0., 10.))),
        Arc::new(Triangle::new(Point::new(0., 0.), Point::new(5., 5.), Point::new(10., 10.))),
    ];
    let exact_areas: [Float; 4] = [100., 25. * std::f64::consts::PI, 50., 0.];

    let mut rng = rand::rng();
    let start = Instant::now();
    for (shape, exact) in shapes.iter().zip(exact_areas) {
        let estimate = estimate_area(shape.as_ref(), config.num_samples, &mut rng);
        info!("{:?}: estimated area {:.4}, exact {:.4}", shape, estimate, exact);
    }
    info!("Area estimation took: {:?}", start.elapsed());

    let scene_box = BoundingBox::from_extents(-6., 12., -6., 12.);
    let probes: Vec<Point> = (0..config.num_probes)
        .filter_map(|_| random_point_in(&scene_box))
        .collect();
    for (p, hit) in probes.iter().zip(classify(&shapes, &probes)) {
        match hit {
            Some(i) => info!("Point {} is inside shape #{}", p, i),
            None => info!("Point {} is outside every shape", p),
        }
    }

    let sphere = Sphere::new(0., 0., 0., 1.);
    for p in [PointXYZ::new(0., 0., 1.), PointXYZ::new(1., 1., 1.)] {
        info!("{:?} contains {}: {}", sphere, p, sphere.contains(&p));
    }
    debug!("Sphere bbox (xy only): {:?}", sphere.bbox());

    info!("Finished execution.");
    Ok(())
}
