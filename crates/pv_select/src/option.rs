use serde::{Deserialize, Serialize};

/// One selectable choice of a [`crate::SelectList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Text shown to the user, escaped on render
    pub display: String,
    /// Value sent on form submit
    pub value: String,
}

impl SelectOption {
    pub fn new(display: impl Into<String>, value: impl Into<String>) -> Self {
        Self { display: display.into(), value: value.into() }
    }
}
