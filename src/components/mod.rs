//! Components - Reusable UI Components
//!
//! Pure UI components that don't know about form state.

pub mod composite;
pub mod primitives;
