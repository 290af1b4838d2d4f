pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod name;
pub mod query;
pub mod utils;

// Re-export commonly used items
pub use config::{AppConfig, NameConstants};
pub use error::NameError;
pub use name::{
    format_name, generate_name_variations, normalize_name, NameInput, NameParts, ParsedName,
};
pub use query::{wrap_queries, BoolClause};
pub use utils::fold_to_ascii;
