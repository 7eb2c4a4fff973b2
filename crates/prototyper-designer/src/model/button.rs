use prototyper_core::TextStyle;
use serde::{Deserialize, Serialize};

use super::TextDocument;

/// Push button mockup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonShape {
    pub text: TextDocument,
    pub style: TextStyle,
    pub width: f64,
    pub height: f64,
}

impl ButtonShape {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: TextDocument::new(text),
            style: TextStyle::default(),
            width: 80.0,
            height: 24.0,
        }
    }
}

impl Default for ButtonShape {
    fn default() -> Self {
        Self::new("Button")
    }
}
