//! # Design Templates
//!
//! Print/digital layout presets. Templates reference palettes, geometries,
//! and fractals by registry key.

use std::collections::HashMap;

use serde::Serialize;

/// Where the Witch Eye seal lands on the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoPlacement {
    LowerLeft,
    LowerRight,
    Center,
}

/// A design layout preset. Immutable once registered.
#[derive(Debug, Clone, Serialize)]
pub struct DesignTemplate {
    pub name: &'static str,
    pub category: &'static str,
    /// Physical dimensions in inches (width, height)
    pub dimensions: (f64, f64),
    pub dpi: u32,
    pub color_palette: &'static str,
    pub sacred_geometry: Option<&'static str>,
    pub fractal_overlay: Option<&'static str>,
    pub witch_eye_placement: LogoPlacement,
}

impl DesignTemplate {
    /// Pixel dimensions at the template's DPI.
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        (
            (self.dimensions.0 * self.dpi as f64) as u32,
            (self.dimensions.1 * self.dpi as f64) as u32,
        )
    }
}

/// Build the template registry.
pub fn design_templates() -> HashMap<&'static str, DesignTemplate> {
    HashMap::from([
        (
            "business_card_magical",
            DesignTemplate {
                name: "Magical Business Card",
                category: "business",
                dimensions: (3.5, 2.0),
                dpi: 300,
                color_palette: "cathedral_gothic",
                sacred_geometry: Some("vesica_piscis"),
                fractal_overlay: None,
                witch_eye_placement: LogoPlacement::LowerLeft,
            },
        ),
        (
            "poster_sacred",
            DesignTemplate {
                name: "Sacred Geometry Poster",
                category: "marketing",
                dimensions: (24.0, 36.0),
                dpi: 150,
                color_palette: "mystical_night",
                sacred_geometry: Some("flower_of_life"),
                fractal_overlay: Some("mandelbrot_cathedral"),
                witch_eye_placement: LogoPlacement::LowerLeft,
            },
        ),
        (
            "logo_mystical",
            DesignTemplate {
                name: "Mystical Logo Design",
                category: "branding",
                dimensions: (6.0, 6.0),
                dpi: 300,
                color_palette: "alchemical_gold",
                sacred_geometry: Some("merkaba"),
                fractal_overlay: None,
                witch_eye_placement: LogoPlacement::LowerLeft,
            },
        ),
        (
            "book_cover_arcane",
            DesignTemplate {
                name: "Arcane Book Cover",
                category: "publishing",
                dimensions: (6.0, 9.0),
                dpi: 300,
                color_palette: "royal_purple",
                sacred_geometry: Some("tree_of_life"),
                fractal_overlay: Some("julia_mystical"),
                witch_eye_placement: LogoPlacement::LowerLeft,
            },
        ),
        (
            "web_header_cosmic",
            DesignTemplate {
                name: "Cosmic Web Header",
                category: "digital",
                dimensions: (12.0, 3.0),
                dpi: 72,
                color_palette: "aurora_magic",
                sacred_geometry: Some("sri_yantra"),
                fractal_overlay: None,
                witch_eye_placement: LogoPlacement::LowerLeft,
            },
        ),
        (
            "tarot_card_template",
            DesignTemplate {
                name: "Tarot Card Design",
                category: "divination",
                dimensions: (2.75, 4.75),
                dpi: 300,
                color_palette: "mystical_night",
                sacred_geometry: Some("golden_spiral"),
                fractal_overlay: None,
                witch_eye_placement: LogoPlacement::LowerLeft,
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::fractals::fractal_patterns;
    use crate::design::geometry::sacred_geometries;
    use crate::design::palettes::color_palettes;

    #[test]
    fn test_six_templates() {
        assert_eq!(design_templates().len(), 6);
    }

    #[test]
    fn test_pixel_dimensions_scale_with_dpi() {
        let templates = design_templates();
        let card = &templates["business_card_magical"];
        assert_eq!(card.pixel_dimensions(), (1050, 600));
    }

    #[test]
    fn test_references_resolve_across_registries() {
        let geometries = sacred_geometries();
        let fractals = fractal_patterns();
        let palettes = color_palettes();
        for (key, template) in design_templates() {
            assert!(palettes.contains_key(template.color_palette), "template {key}");
            if let Some(g) = template.sacred_geometry {
                assert!(geometries.contains_key(g), "template {key} geometry {g}");
            }
            if let Some(f) = template.fractal_overlay {
                assert!(fractals.contains_key(f), "template {key} fractal {f}");
            }
        }
    }
}
