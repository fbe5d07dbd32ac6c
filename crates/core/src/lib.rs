//! Domain types and rules shared by the storage and HTTP layers.
//!
//! This crate has no I/O. It defines the error taxonomy, id/timestamp
//! aliases, user roles, the category access rules, and signup validation.

pub mod access;
pub mod error;
pub mod roles;
pub mod signup;
pub mod types;
