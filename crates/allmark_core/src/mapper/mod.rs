//! Item tree to view-model projection.
//!
//! # Responsibility
//! - Project repository items into render-ready view models.
//! - Keep lookup, routing and rendering behind injected capabilities.
//!
//! # Invariants
//! - Projection is total: every failure condition is represented as data.

pub mod cache;
pub mod collaborators;
pub mod format;
pub mod geo;
pub mod projector;
pub mod tags;
