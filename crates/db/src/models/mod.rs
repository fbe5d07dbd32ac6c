//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Serialize` response views where the row is not exposed directly
//! - `Deserialize` DTOs for inserts and updates

pub mod category;
pub mod permission_request;
pub mod question;
pub mod user;
