//! # Cardwall
//!
//! File-backed kanban board service.
//!
//! This crate provides the board domain model (columns and cards with
//! their ordering and id-assignment rules), whole-document JSON
//! persistence behind a storage trait, and an axum REST API over the
//! board operations.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod server;
pub mod state;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{Board, Card, CardUpdate, Column, NewCard, Priority};
pub use error::{BoardError, Result};
pub use storage::Storage;
pub use store::BoardStore;
