use serde::{Deserialize, Serialize};

/// Generic styled object (frame, placeholder box) with only pen and brush.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledShape {
    pub width: f64,
    pub height: f64,
}

impl Default for StyledShape {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 50.0,
        }
    }
}
