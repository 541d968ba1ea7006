pub mod model;

pub use model::{Scene, Shape};
