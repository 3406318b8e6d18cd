//! Features - Vertical Feature Slices
//!
//! Each feature contains its controller, its pages and local helpers.

pub mod dynamic_form;
