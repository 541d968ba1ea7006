pub mod binder;
pub mod path;

pub use binder::{OrbitBinding, OrbitDirection, OrbitMode, OrbitQuery, orbit_point, resolve};
pub use path::{OrbitPath, collect_orbit_candidates};
