pub mod error;
pub mod identifiers;
pub mod logging;

pub use error::*;
pub use identifiers::{is_project_id, is_space_id};
