//! The Witch Eye seal: a static descriptor attached to every composed
//! design as its branding layer.

use serde_json::{json, Value};

/// Build the Witch Eye logo descriptor.
pub fn witch_eye_logo() -> Value {
    json!({
        "name": "Witch Eye Seal",
        "elements": {
            "outer_circle": { "radius": 1.0, "color": "#2c1810" },
            "crescent_moon": { "position": "top", "color": "#c0c0c0" },
            "triangle": { "type": "equilateral", "orientation": "up", "color": "#8b4513" },
            "eye": { "position": "center", "iris_color": "#4169e1", "pupil_color": "#000000" },
            "inner_glow": { "color": "#ffd700", "opacity": 0.3 },
        },
        "sacred_meaning": "Protection, wisdom, and divine sight",
        "business_integration": "Lower left corner placement for branding",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_carries_all_elements() {
        let logo = witch_eye_logo();
        assert_eq!(logo["name"], "Witch Eye Seal");
        let elements = logo["elements"].as_object().unwrap();
        assert_eq!(elements.len(), 5);
    }
}
