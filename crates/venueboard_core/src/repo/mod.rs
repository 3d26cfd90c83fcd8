//! Repository layer over the key-value store port.
//!
//! # Responsibility
//! - Translate typed venue/event operations into whole-collection reads and
//!   writes.
//! - Keep JSON encoding details out of the service layer.
//!
//! # Invariants
//! - Repository writes must enforce `Event::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`, `Corrupt`) in
//!   addition to store transport errors.

pub mod board_repo;
