//! Request extractors whose rejections render as [`AppError`].
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies. These
//! wrappers route the rejection through `AppError` so every failure shares
//! the `{"error": ...}` shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
