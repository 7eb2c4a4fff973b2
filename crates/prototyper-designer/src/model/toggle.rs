use prototyper_core::TextStyle;
use serde::{Deserialize, Serialize};

use super::TextDocument;

/// Check box or radio button mockup: a labelled indicator with a checked state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleShape {
    pub text: TextDocument,
    pub style: TextStyle,
    pub checked: bool,
}

impl ToggleShape {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: TextDocument::new(text),
            style: TextStyle::default(),
            checked: false,
        }
    }
}
