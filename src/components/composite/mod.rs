//! Composite Components

pub mod validated_text_field;
