pub mod normalize;

pub use normalize::{fold_for_matching, fold_to_ascii};
