//! Drawing element descriptors.

use serde::{Deserialize, Serialize};

/// Placement and sizing descriptor for a drawable element.
///
/// Input-handling code constructs one of these when the user places or drags
/// an element; rendering and storage code consume it. It carries no behavior
/// of its own.
///
/// The optional fields stay `None` until something sets them: an element with
/// no `width`/`height` is *unsized* (a point that has not been dragged out
/// yet), which is distinct from a zero-sized element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingElementProps {
    /// X coordinate of the element origin, in canvas units
    pub start_position_x: f64,
    /// Y coordinate of the element origin, in canvas units
    pub start_position_y: f64,
    /// Whether the element is currently selected/focused (absent = no)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active_element: Option<bool>,
    /// Whether the element exposes resize handles (absent = no)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_resize: Option<bool>,
    /// Element width, once sized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Element height, once sized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl DrawingElementProps {
    /// Creates an unsized, inactive descriptor at the given origin.
    pub fn new(start_position_x: f64, start_position_y: f64) -> Self {
        Self {
            start_position_x,
            start_position_y,
            is_active_element: None,
            support_resize: None,
            width: None,
            height: None,
        }
    }

    /// Marks the element as selected/focused.
    pub fn active(mut self) -> Self {
        self.is_active_element = Some(true);
        self
    }

    /// Marks the element as resizable.
    pub fn resizable(mut self) -> Self {
        self.support_resize = Some(true);
        self
    }

    /// Sets both dimensions.
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Whether the element is selected/focused; absent counts as no.
    pub fn is_active(&self) -> bool {
        self.is_active_element.unwrap_or(false)
    }

    /// Whether the element exposes resize handles; absent counts as no.
    pub fn supports_resize(&self) -> bool {
        self.support_resize.unwrap_or(false)
    }

    /// Returns `(width, height)` only when the element has both dimensions.
    pub fn size(&self) -> Option<(f64, f64)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_descriptor_leaves_optional_fields_absent() {
        let props = DrawingElementProps::new(10.0, 20.0);
        assert_eq!(props.start_position_x, 10.0);
        assert_eq!(props.start_position_y, 20.0);
        assert_eq!(props.is_active_element, None);
        assert_eq!(props.support_resize, None);
        assert_eq!(props.width, None);
        assert_eq!(props.height, None);
        assert!(!props.is_active());
        assert!(!props.supports_resize());
        assert_eq!(props.size(), None);
    }

    #[test]
    fn builders_set_flags_and_size() {
        let props = DrawingElementProps::new(0.0, 0.0)
            .active()
            .resizable()
            .sized(120.0, 80.0);
        assert!(props.is_active());
        assert!(props.supports_resize());
        assert_eq!(props.size(), Some((120.0, 80.0)));
    }

    #[test]
    fn size_requires_both_dimensions() {
        let mut props = DrawingElementProps::new(5.0, 5.0);
        props.width = Some(40.0);
        assert_eq!(props.size(), None);
    }

    #[test]
    fn serialization_omits_absent_fields() {
        let json = serde_json::to_string(&DrawingElementProps::new(1.5, -2.0)).unwrap();
        assert_eq!(json, "{\"start_position_x\":1.5,\"start_position_y\":-2.0}");

        let parsed: DrawingElementProps = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DrawingElementProps::new(1.5, -2.0));
    }
}
