//! Credential primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- signed, expiring bearer tokens carrying the user's identity.

pub mod jwt;
pub mod password;
