//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate asset store and catalog calls into whole-symbol
//!   operations.
//! - Keep presentation layers decoupled from storage details.

pub mod symbol_service;
