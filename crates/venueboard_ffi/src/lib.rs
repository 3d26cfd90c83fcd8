//! UI-host bindings for the VenueBoard core.

pub mod api;
