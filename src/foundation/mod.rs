pub mod error;
pub mod math;

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};
