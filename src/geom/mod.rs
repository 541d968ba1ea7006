pub mod bounds;
pub mod color;
pub mod measure;
pub mod outline;
