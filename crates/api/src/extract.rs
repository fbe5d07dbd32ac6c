//! Extractors that report failures as [`AppError`].
//!
//! axum's own extractors reject with plain-text bodies; these wrappers keep
//! every failure in the `{"error", "code"}` shape.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use interview_prep_core::types::DbId;
use serde::{Deserialize, Deserializer};

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Drop-in replacement for [`axum::extract::Path`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Drop-in replacement for [`axum::extract::Query`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Deserialize an optional id where an empty value (`?category_id=`) means
/// absent.
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
