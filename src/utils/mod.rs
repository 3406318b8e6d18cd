//! Utils - Settings and Schema Files

pub mod config_store;
