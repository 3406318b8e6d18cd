//! FormEvent - Form Event Enum
//!
//! Events a form controller delivers to its observers after each change.

/// Changes of a mounted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field received a new value
    Edited { label: String, invalid: bool },

    /// A button's activation handler ran
    Activated { title: String },

    /// The form went back to its mount state
    Reset,
}

impl FormEvent {
    /// Create an edit event
    pub fn edited(label: impl Into<String>, invalid: bool) -> Self {
        Self::Edited {
            label: label.into(),
            invalid,
        }
    }

    /// Create an activation event
    pub fn activated(title: impl Into<String>) -> Self {
        Self::Activated {
            title: title.into(),
        }
    }
}
