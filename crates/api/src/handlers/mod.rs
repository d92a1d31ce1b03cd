//! HTTP request handlers, grouped by resource.

pub mod auth;
pub mod questions;
