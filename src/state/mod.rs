//! State - Runtime State of Mounted Forms
//!
//! Plain data, owned by a controller and replaced on every update.

pub mod form_state;
pub mod history;
pub mod snapshot;

pub use form_state::FormRuntimeState;
pub use history::{ActivationHistory, ActivationRecord};
pub use snapshot::{ButtonEntry, FormSnapshot, SnapshotEntry, TextEntry};
