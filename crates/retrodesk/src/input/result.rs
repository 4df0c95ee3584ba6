//! Input result type

use serde::Serialize;
use crate::window::WindowId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// Input should be forwarded to window content
    Forward {
        /// Target window
        window_id: WindowId,
        /// X coordinate in window-local space
        local_x: f32,
        /// Y coordinate in window-local space
        local_y: f32,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Forward { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_serializes_tagged() {
        let result = InputResult::Forward {
            window_id: "finder".to_string(),
            local_x: 4.0,
            local_y: 30.0,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"type\":\"forward\""));
        assert!(json.contains("\"window_id\":\"finder\""));
        assert!(result.is_handled());
        assert!(!InputResult::Unhandled.is_handled());
    }
}
