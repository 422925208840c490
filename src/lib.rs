pub mod numeric;
pub mod interval;
pub mod bbox;
pub mod geometry;
pub mod shapes;
pub mod sampler;
pub mod query;

pub mod prelude;
