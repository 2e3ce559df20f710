pub mod admin;
pub mod catalog;
pub mod error;
pub mod feature_flags;
pub mod models;
pub mod selection;

pub use admin::*;
pub use catalog::*;
pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use selection::*;
