//! Asset storage contracts and filesystem implementation.
//!
//! # Responsibility
//! - Define the durable-glyph-image access contract used by the service
//!   layer.
//! - Keep filesystem details inside the store boundary.
//!
//! # Invariants
//! - A failed write never leaves a discoverable partial asset behind.
//! - `list_ids` order is lexicographic and stable across runs.

pub mod fs_store;
