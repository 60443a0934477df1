//! Professional color palettes, five hex stops each.

use std::collections::HashMap;

/// Build the palette registry.
pub fn color_palettes() -> HashMap<&'static str, Vec<&'static str>> {
    HashMap::from([
        ("cathedral_gothic", vec!["#2c1810", "#8b4513", "#daa520", "#f4a460", "#fffaf0"]),
        ("mystical_night", vec!["#191970", "#483d8b", "#6a5acd", "#9370db", "#dda0dd"]),
        ("alchemical_gold", vec!["#8b0000", "#b8860b", "#daa520", "#ffd700", "#fffacd"]),
        ("forest_wisdom", vec!["#013220", "#228b22", "#32cd32", "#9acd32", "#f0fff0"]),
        ("ocean_depths", vec!["#000080", "#191970", "#4169e1", "#6495ed", "#e0ffff"]),
        ("fire_transformation", vec!["#4b0000", "#8b0000", "#dc143c", "#ff4500", "#ffa500"]),
        ("crystal_clarity", vec!["#2f4f4f", "#708090", "#b0c4de", "#e6e6fa", "#ffffff"]),
        ("royal_purple", vec!["#301934", "#663399", "#9932cc", "#ba55d3", "#dda0dd"]),
        ("earth_grounding", vec!["#654321", "#8b4513", "#a0522d", "#cd853f", "#f5deb3"]),
        ("aurora_magic", vec!["#0d1b2a", "#1b263b", "#415a77", "#778da9", "#e0e1dd"]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::canvas::Rgb;

    #[test]
    fn test_ten_palettes_of_five_stops() {
        let palettes = color_palettes();
        assert_eq!(palettes.len(), 10);
        for (name, stops) in &palettes {
            assert_eq!(stops.len(), 5, "palette {name}");
        }
    }

    #[test]
    fn test_every_stop_parses_as_hex() {
        for stops in color_palettes().values() {
            for stop in stops {
                Rgb::from_hex(stop).unwrap();
            }
        }
    }
}
