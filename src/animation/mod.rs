pub mod bezier;
pub mod ease;
