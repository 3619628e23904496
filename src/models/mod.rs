//! Data models for the Publica client.
//!
//! These models match the REST API's wire format exactly; field names on the
//! wire are the API's Spanish ones, mapped to English via serde renames.

mod comment;
mod incident;
mod post;
mod user;

pub use comment::*;
pub use incident::*;
pub use post::*;
pub use user::*;
