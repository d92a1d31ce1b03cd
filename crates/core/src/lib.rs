//! Shared domain types for the quizdeck backend.
//!
//! Everything here is transport- and storage-agnostic: primitive type
//! aliases, the domain error enum, and pure quiz helpers. Crates higher in
//! the stack (db, auth, api) depend on this one, never the other way around.

pub mod error;
pub mod quiz;
pub mod types;
