//! Error handling for PIP operations
//!
//! This module re-exports the error types used throughout the crate.
//! It uses thiserror for ergonomic error handling and provides
//! context-specific error variants.

pub use crate::common::PipError;
pub use crate::common::Result;
