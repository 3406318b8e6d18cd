//! Eventing - Events Delivered to Form Observers

pub mod form_event;

pub use form_event::FormEvent;
