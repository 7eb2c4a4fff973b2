use prototyper_core::TextStyle;
use serde::{Deserialize, Serialize};

use super::TextDocument;

/// Spin box mockup. The displayed text is edited like any other form text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinBoxShape {
    pub text: TextDocument,
    pub style: TextStyle,
    pub minimum: i32,
    pub maximum: i32,
}

impl Default for SpinBoxShape {
    fn default() -> Self {
        Self {
            text: TextDocument::new("0"),
            style: TextStyle::default(),
            minimum: 0,
            maximum: 99,
        }
    }
}
