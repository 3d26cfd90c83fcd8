//! Board use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, conflict detection and repository calls.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod board_service;
pub mod conflict;
