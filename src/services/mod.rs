//! Service layer for business logic.
//!
//! Payload building and batch generation. Both sit between the data models
//! and the render pipeline and hold no state of their own.

pub mod batch;
pub mod payload;

// Re-export commonly used types and functions
pub use batch::{BatchJob, BatchReport};
pub use payload::build_payload;
