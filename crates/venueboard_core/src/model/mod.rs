//! Board domain model: venues, events, and minute-of-day times.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Turn raw form input into typed values at the model boundary.
//!
//! # Invariants
//! - Times are handled as minute-of-day integers internally; the `HH:MM`
//!   string form only exists on the wire.
//! - Events are created and deleted; there is no in-place update.

pub mod clock;
pub mod event;
pub mod venue;
