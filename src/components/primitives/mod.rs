//! Primitive Components
//!
//! Basic building blocks: buttons and text inputs.

pub mod button;
pub mod text_input;
