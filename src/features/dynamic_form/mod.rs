//! Dynamic Form - Forms Assembled From Descriptors at Runtime

pub mod console;
pub mod controller;
pub mod demo;
pub mod mounted;
#[cfg(feature = "gui")]
pub mod page;

pub use controller::{FormController, SubscriptionId};
pub use demo::DemoForm;
pub use mounted::MountedForm;
