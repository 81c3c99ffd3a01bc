//! Application layer - Use case implementations
//!
//! This module coordinates domain and infrastructure layers to implement
//! the two pipelines.

pub mod enumerator;
pub mod export;
