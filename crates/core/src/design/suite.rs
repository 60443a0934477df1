//! # Design Suite
//!
//! The facade over every design registry: builds the catalogs once at
//! startup, renders geometry and fractal presets, composes template layer
//! stacks, and exports the whole suite as a JSON document.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Value};

use crate::design::canvas::Raster;
use crate::design::fractals::{self, FractalPattern};
use crate::design::geometry::{self, SacredGeometry};
use crate::design::logo::witch_eye_logo;
use crate::design::palettes::color_palettes;
use crate::design::render::generate_sacred_geometry;
use crate::design::templates::{self, DesignTemplate, LogoPlacement};
use crate::error::DesignError;

/// How a layer is meant to sit over the ones below it. Composition itself
/// never happens here; layers are returned separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    Overlay,
    Multiply,
}

/// One layer of a composed design.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layer {
    SacredGeometry {
        name: String,
        #[serde(skip)]
        image: Raster,
        opacity: f64,
        blend_mode: BlendMode,
    },
    FractalPattern {
        name: String,
        #[serde(skip)]
        image: Raster,
        opacity: f64,
        blend_mode: BlendMode,
    },
    WitchEyeLogo {
        position: LogoPlacement,
        size: f64,
        logo: Value,
    },
    Content {
        data: Value,
    },
}

/// A composed design: template metadata plus its rendered layer stack.
#[derive(Debug, Clone, Serialize)]
pub struct Design {
    pub template_name: String,
    pub category: String,
    pub dimensions_inches: (f64, f64),
    pub dimensions_pixels: (u32, u32),
    pub dpi: u32,
    pub color_palette: Vec<String>,
    pub layers: Vec<Layer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

/// Modular Cathedral creative design suite.
pub struct DesignSuite {
    pub golden_ratio: f64,
    pub sacred_geometries: HashMap<&'static str, SacredGeometry>,
    pub fractal_patterns: HashMap<&'static str, FractalPattern>,
    pub color_palettes: HashMap<&'static str, Vec<&'static str>>,
    pub design_templates: HashMap<&'static str, DesignTemplate>,
    pub witch_eye_logo: Value,
}

impl Default for DesignSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignSuite {
    pub fn new() -> Self {
        Self {
            golden_ratio: (1.0 + 5.0_f64.sqrt()) / 2.0,
            sacred_geometries: geometry::sacred_geometries(),
            fractal_patterns: fractals::fractal_patterns(),
            color_palettes: color_palettes(),
            design_templates: templates::design_templates(),
            witch_eye_logo: witch_eye_logo(),
        }
    }

    /// Render a sacred geometry preset by registry key.
    pub fn generate_sacred_geometry(
        &self,
        name: &str,
        size: (u32, u32),
    ) -> Result<Raster, DesignError> {
        generate_sacred_geometry(&self.sacred_geometries, name, size)
    }

    /// Render a fractal preset by registry key.
    pub fn generate_fractal(&self, name: &str, size: (u32, u32)) -> Result<Raster, DesignError> {
        fractals::generate_fractal(&self.fractal_patterns, name, size)
    }

    /// Compose a template into its layer stack: background geometry, fractal
    /// overlay, the Witch Eye seal, and optional caller content. Layers stay
    /// separate arrays; no blending is performed.
    pub fn create_design_from_template(
        &self,
        template_name: &str,
        content: Option<Value>,
    ) -> Result<Design, DesignError> {
        let template = self
            .design_templates
            .get(template_name)
            .ok_or_else(|| DesignError::UnknownTemplate(template_name.to_string()))?;
        let (width_px, height_px) = template.pixel_dimensions();

        let palette = self
            .color_palettes
            .get(template.color_palette)
            .ok_or_else(|| DesignError::UnknownPalette(template.color_palette.to_string()))?;

        let mut layers = Vec::new();
        if let Some(geom_key) = template.sacred_geometry {
            let image = self.generate_sacred_geometry(geom_key, (width_px, height_px))?;
            layers.push(Layer::SacredGeometry {
                name: self.sacred_geometries[geom_key].name.to_string(),
                image,
                opacity: 0.3,
                blend_mode: BlendMode::Overlay,
            });
        }
        if let Some(frac_key) = template.fractal_overlay {
            let image = self.generate_fractal(frac_key, (width_px, height_px))?;
            layers.push(Layer::FractalPattern {
                name: self.fractal_patterns[frac_key].name.to_string(),
                image,
                opacity: 0.2,
                blend_mode: BlendMode::Multiply,
            });
        }
        layers.push(Layer::WitchEyeLogo {
            position: template.witch_eye_placement,
            size: width_px.min(height_px) as f64 * 0.1,
            logo: self.witch_eye_logo.clone(),
        });
        if let Some(data) = &content {
            layers.push(Layer::Content { data: data.clone() });
        }

        Ok(Design {
            template_name: template.name.to_string(),
            category: template.category.to_string(),
            dimensions_inches: template.dimensions,
            dimensions_pixels: (width_px, height_px),
            dpi: template.dpi,
            color_palette: palette.iter().map(|s| s.to_string()).collect(),
            layers,
            content,
        })
    }

    /// The anti-flat precision brush set.
    pub fn precision_brush_set(&self) -> Value {
        json!({
            "name": "Cathedral Precision Brushes",
            "description": "Anti-flat precision tools for highly creative minds",
            "brushes": {
                "sacred_geometry_pen": {
                    "type": "geometric",
                    "precision": "perfect",
                    "snap_to_grid": true,
                    "golden_ratio_guides": true,
                    "properties": ["pressure_sensitive", "angle_responsive", "sacred_proportions"],
                },
                "fractal_detail_brush": {
                    "type": "pattern",
                    "precision": "infinite",
                    "recursive_depth": 10,
                    "chaos_factor": 0.1,
                    "properties": ["self_similar", "infinite_zoom", "mathematical_precision"],
                },
                "color_harmony_mixer": {
                    "type": "color",
                    "precision": "spectral",
                    "color_theory": "advanced",
                    "harmony_modes": ["triadic", "complementary", "split_complementary", "tetradic"],
                    "properties": ["frequency_aware", "chakra_aligned", "psychologically_balanced"],
                },
                "texture_alchemist": {
                    "type": "texture",
                    "precision": "molecular",
                    "material_simulation": true,
                    "surface_types": ["metal", "crystal", "organic", "ethereal", "plasma"],
                    "properties": ["physically_accurate", "light_responsive", "depth_aware"],
                },
                "light_sculptor": {
                    "type": "lighting",
                    "precision": "photonic",
                    "light_physics": true,
                    "shadow_calculation": "ray_traced",
                    "properties": ["volumetric", "caustic_aware", "color_temperature_accurate"],
                },
                "dimension_shifter": {
                    "type": "perspective",
                    "precision": "mathematical",
                    "perspective_modes": ["one_point", "two_point", "three_point", "curvilinear", "impossible"],
                    "properties": ["vanishing_point_aware", "foreshortening_accurate", "spatial_depth"],
                },
            },
        })
    }

    /// Export the complete suite as one JSON document.
    pub fn export_complete_suite(&self) -> Value {
        let geometries: Value = self
            .sacred_geometries
            .iter()
            .map(|(key, geo)| {
                (
                    key.to_string(),
                    json!({
                        "name": geo.name,
                        "kind": geo.kind,
                        "frequency_resonance": geo.frequency_resonance,
                        "symbolic_meaning": geo.symbolic_meaning,
                    }),
                )
            })
            .collect::<serde_json::Map<String, Value>>()
            .into();
        let fractals: Value = self
            .fractal_patterns
            .iter()
            .map(|(key, pattern)| {
                (
                    key.to_string(),
                    json!({
                        "name": pattern.name,
                        "algorithm": pattern.algorithm,
                        "iterations": pattern.iterations,
                        "complexity": pattern.complexity,
                        "color_scheme": pattern.color_scheme,
                        "magical_properties": pattern.magical_properties,
                    }),
                )
            })
            .collect::<serde_json::Map<String, Value>>()
            .into();
        let templates: Value = self
            .design_templates
            .iter()
            .map(|(key, t)| (key.to_string(), serde_json::to_value(t).unwrap_or(Value::Null)))
            .collect::<serde_json::Map<String, Value>>()
            .into();

        json!({
            "suite_info": {
                "name": "Cathedral Creative Design Suite",
                "version": env!("CARGO_PKG_VERSION"),
                "description": "Professional design tools with sacred geometry and magical integration",
                "anti_flat_guarantee": true,
                "precision_focused": true,
                "highly_creative_optimized": true,
            },
            "sacred_geometries": geometries,
            "fractal_patterns": fractals,
            "color_palettes": self.color_palettes,
            "design_templates": templates,
            "witch_eye_logo": self.witch_eye_logo,
            "precision_brushes": self.precision_brush_set(),
            "integration_apis": {
                "generate_sacred_geometry": "Available",
                "generate_fractal": "Available",
                "create_design_from_template": "Available",
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_builds_all_registries() {
        let suite = DesignSuite::new();
        assert_eq!(suite.sacred_geometries.len(), 11);
        assert_eq!(suite.fractal_patterns.len(), 5);
        assert_eq!(suite.color_palettes.len(), 10);
        assert_eq!(suite.design_templates.len(), 6);
        assert!((suite.golden_ratio - 1.618).abs() < 0.001);
    }

    #[test]
    fn test_unknown_template_errors() {
        let suite = DesignSuite::new();
        let err = suite.create_design_from_template("nonexistent", None).unwrap_err();
        assert!(matches!(err, DesignError::UnknownTemplate(_)));
    }

    #[test]
    fn test_business_card_layer_stack() {
        let suite = DesignSuite::new();
        let design = suite
            .create_design_from_template(
                "business_card_magical",
                Some(json!({
                    "company_name": "Cathedral Circuits",
                    "tagline": "Where Art Meets Sacred Science",
                })),
            )
            .unwrap();
        assert_eq!(design.dimensions_pixels, (1050, 600));
        assert_eq!(design.dpi, 300);
        // geometry + logo + content; no fractal overlay on the card
        assert_eq!(design.layers.len(), 3);
        assert!(matches!(design.layers[0], Layer::SacredGeometry { .. }));
        assert!(matches!(design.layers[1], Layer::WitchEyeLogo { .. }));
        assert!(matches!(design.layers[2], Layer::Content { .. }));
    }

    #[test]
    fn test_fractal_overlay_layer() {
        // a small stand-in template; the real overlay templates are
        // print-sized and too slow to raster in a unit test
        let mut suite = DesignSuite::new();
        suite.design_templates.insert(
            "mini_overlay",
            crate::design::templates::DesignTemplate {
                name: "Mini Overlay",
                category: "test",
                dimensions: (0.2, 0.15),
                dpi: 100,
                color_palette: "mystical_night",
                sacred_geometry: Some("seed_of_life"),
                fractal_overlay: Some("julia_mystical"),
                witch_eye_placement: LogoPlacement::LowerLeft,
            },
        );
        let design = suite.create_design_from_template("mini_overlay", None).unwrap();
        assert_eq!(design.layers.len(), 3);
        let Layer::FractalPattern { opacity, blend_mode, image, .. } = &design.layers[1] else {
            panic!("expected fractal overlay layer");
        };
        assert_eq!(*opacity, 0.2);
        assert_eq!(*blend_mode, BlendMode::Multiply);
        let (w, h) = design.dimensions_pixels;
        assert_eq!(image.data().len(), (w * h * 3) as usize);
    }

    #[test]
    fn test_export_covers_every_registry() {
        let suite = DesignSuite::new();
        let doc = suite.export_complete_suite();
        assert_eq!(doc["sacred_geometries"].as_object().unwrap().len(), 11);
        assert_eq!(doc["fractal_patterns"].as_object().unwrap().len(), 5);
        assert_eq!(doc["color_palettes"].as_object().unwrap().len(), 10);
        assert_eq!(doc["design_templates"].as_object().unwrap().len(), 6);
        assert_eq!(doc["precision_brushes"]["brushes"].as_object().unwrap().len(), 6);
    }
}
