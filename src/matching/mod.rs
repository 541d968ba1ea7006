pub mod assign;
pub mod cost;
pub mod matcher;
pub mod weights;

pub use matcher::{MatchKind, MatchResult, MatchedPair, match_shapes};
pub use weights::MatchWeights;
