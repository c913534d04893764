//! Components - Reusable Table Components
//!
//! Pure components that don't do I/O.

pub mod composite;
