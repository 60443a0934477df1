//! # Fractal Catalog and Generators
//!
//! Complex-plane escape-time fractals rendered over a pixel grid. The color
//! ramp linearly partitions the preset's hex scheme across the normalized
//! escape-count range; pixels that never escape stay background black.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Value};

use crate::design::canvas::{Raster, Rgb, BLACK};
use crate::error::DesignError;

/// The escape-time recurrence a pattern evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalAlgorithm {
    Mandelbrot,
    Julia,
    DragonCurve,
}

/// A fractal preset. Immutable once registered.
#[derive(Debug, Clone, Serialize)]
pub struct FractalPattern {
    pub name: &'static str,
    pub algorithm: FractalAlgorithm,
    pub iterations: u32,
    pub complexity: f64,
    pub color_scheme: &'static [&'static str],
    pub magical_properties: Value,
}

/// Build the preset registry. Called once by the suite at startup.
pub fn fractal_patterns() -> HashMap<&'static str, FractalPattern> {
    HashMap::from([
        (
            "mandelbrot_cathedral",
            FractalPattern {
                name: "Cathedral Mandelbrot",
                algorithm: FractalAlgorithm::Mandelbrot,
                iterations: 100,
                complexity: 0.8,
                color_scheme: &["#2c1810", "#8b4513", "#daa520", "#ffd700", "#ffffff"],
                magical_properties: json!({
                    "infinite_depth": true,
                    "self_similarity": true,
                    "chaos_order_balance": true,
                    "meditation_focus": "infinity_contemplation",
                }),
            },
        ),
        (
            "julia_mystical",
            FractalPattern {
                name: "Mystical Julia Set",
                algorithm: FractalAlgorithm::Julia,
                iterations: 80,
                complexity: 0.7,
                color_scheme: &["#1a0033", "#4b0082", "#9932cc", "#dda0dd", "#f0e68c"],
                magical_properties: json!({
                    "transformation": true,
                    "boundary_dissolution": true,
                    "consciousness_expansion": true,
                    "meditation_focus": "inner_transformation",
                }),
            },
        ),
        (
            "dragon_curve_wisdom",
            FractalPattern {
                name: "Dragon Curve Wisdom",
                algorithm: FractalAlgorithm::DragonCurve,
                iterations: 15,
                complexity: 0.9,
                color_scheme: &["#8b0000", "#dc143c", "#ff4500", "#ffd700"],
                magical_properties: json!({
                    "serpent_wisdom": true,
                    "kundalini_activation": true,
                    "ancient_knowledge": true,
                    "meditation_focus": "serpent_power",
                }),
            },
        ),
        (
            "abyss_crossing",
            FractalPattern {
                name: "Abyss Crossing Fractal",
                algorithm: FractalAlgorithm::Mandelbrot,
                iterations: 333,
                complexity: 0.93,
                color_scheme: &["#000000", "#1a0033", "#330066", "#4b0082", "#8b00ff"],
                magical_properties: json!({
                    "oath_of_abyss": true,
                    "ego_dissolution": true,
                    "choronzon_confrontation": true,
                    "babalon_gateway": true,
                    "meditation_focus": "crossing_the_abyss",
                    "invocation":
                        "I will interpret every phenomenon as a particular dealing of God with my soul",
                }),
            },
        ),
        (
            "achad_reversal",
            FractalPattern {
                name: "Achad's Reversal Pattern",
                algorithm: FractalAlgorithm::Julia,
                // ABRAHADABRA
                iterations: 418,
                complexity: 0.88,
                color_scheme: &["#4b0082", "#8b00ff", "#da70d6", "#ee82ee", "#dda0dd"],
                magical_properties: json!({
                    "aeon_of_maat": true,
                    "tree_reversal": true,
                    "daughter_formula": true,
                    "magical_child": true,
                    "meditation_focus": "the_great_reversal",
                    "formula": "MAAT = 451, the completion of Thelema",
                }),
            },
        ),
    ])
}

/// Render a registered fractal preset at `(width, height)`.
pub fn generate_fractal(
    patterns: &HashMap<&'static str, FractalPattern>,
    name: &str,
    size: (u32, u32),
) -> Result<Raster, DesignError> {
    let pattern = patterns
        .get(name)
        .ok_or_else(|| DesignError::UnknownFractal(name.to_string()))?;
    let scheme = parse_scheme(pattern.color_scheme)?;
    Ok(match pattern.algorithm {
        FractalAlgorithm::Mandelbrot => escape_time(pattern, size, &scheme, Plane::Mandelbrot),
        FractalAlgorithm::Julia => escape_time(pattern, size, &scheme, Plane::Julia),
        FractalAlgorithm::DragonCurve => dragon_gradient(size, scheme[0]),
    })
}

fn parse_scheme(hex: &[&str]) -> Result<Vec<Rgb>, DesignError> {
    hex.iter().map(|h| Rgb::from_hex(h)).collect()
}

enum Plane {
    /// z <- z^2 + c over c in x [-2.5, 1.5], y [-2, 2]
    Mandelbrot,
    /// z <- z^2 + c_fixed over z in [-2, 2]^2, c = -0.7 + 0.27015i
    Julia,
}

const JULIA_C: (f64, f64) = (-0.7, 0.27015);

/// Evaluate the recurrence per pixel, recording the last iteration at which
/// the point was still inside the |z| <= 2 disc.
fn escape_time(pattern: &FractalPattern, size: (u32, u32), scheme: &[Rgb], plane: Plane) -> Raster {
    let (width, height) = size;
    let (x_min, x_max, y_min, y_max) = match plane {
        Plane::Mandelbrot => (-2.5, 1.5, -2.0, 2.0),
        Plane::Julia => (-2.0, 2.0, -2.0, 2.0),
    };
    let x_step = (x_max - x_min) / (width.saturating_sub(1).max(1)) as f64;
    let y_step = (y_max - y_min) / (height.saturating_sub(1).max(1)) as f64;

    let mut counts = vec![0u32; (width * height) as usize];
    for row in 0..height {
        let py = y_min + row as f64 * y_step;
        for col in 0..width {
            let px = x_min + col as f64 * x_step;
            let ((mut zr, mut zi), (cr, ci)) = match plane {
                Plane::Mandelbrot => ((0.0, 0.0), (px, py)),
                Plane::Julia => ((px, py), JULIA_C),
            };
            let mut count = 0u32;
            for i in 0..pattern.iterations {
                if zr * zr + zi * zi <= 4.0 {
                    let next_r = zr * zr - zi * zi + cr;
                    zi = 2.0 * zr * zi + ci;
                    zr = next_r;
                    count = i;
                }
            }
            counts[(row * width + col) as usize] = count;
        }
    }
    counts_to_rgb(&counts, width, height, scheme)
}

/// Map escape counts onto the scheme by linear band partition of the
/// normalized range [0, 1). Counts at exactly the maximum fall outside every
/// band and keep the black background.
fn counts_to_rgb(counts: &[u32], width: u32, height: u32, scheme: &[Rgb]) -> Raster {
    let max = counts.iter().copied().max().unwrap_or(0);
    let bands = scheme.len() as f64;
    let mut raster = Raster::new(width, height, BLACK);
    for row in 0..height {
        for col in 0..width {
            let count = counts[(row * width + col) as usize];
            let normalized = if max > 0 {
                count as f64 / max as f64
            } else {
                count as f64
            };
            for (i, &color) in scheme.iter().enumerate() {
                let lower = i as f64 / bands;
                let upper = (i + 1) as f64 / bands;
                if normalized >= lower && normalized < upper {
                    raster.put(col as i64, row as i64, color);
                    break;
                }
            }
        }
    }
    raster
}

/// Gradient placeholder for the dragon curve: channels ramp across the
/// plane from the scheme's first color.
fn dragon_gradient(size: (u32, u32), base: Rgb) -> Raster {
    let (width, height) = size;
    let mut raster = Raster::new(width, height, BLACK);
    let x_step = 1.0 / (width.saturating_sub(1).max(1)) as f64;
    let y_step = 1.0 / (height.saturating_sub(1).max(1)) as f64;
    for row in 0..height {
        let y = row as f64 * y_step;
        for col in 0..width {
            let x = col as f64 * x_step;
            raster.put(
                col as i64,
                row as i64,
                Rgb::new(
                    (base.r as f64 * x) as u8,
                    (base.g as f64 * y) as u8,
                    (base.b as f64 * (1.0 - x * y)) as u8,
                ),
            );
        }
    }
    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_holds_five_presets() {
        assert_eq!(fractal_patterns().len(), 5);
    }

    #[test]
    fn test_unknown_pattern_errors() {
        let patterns = fractal_patterns();
        let err = generate_fractal(&patterns, "no_such_thing", (10, 10)).unwrap_err();
        assert!(matches!(err, DesignError::UnknownFractal(_)));
    }

    #[test]
    fn test_mandelbrot_shape_matches_request() {
        let patterns = fractal_patterns();
        let raster = generate_fractal(&patterns, "mandelbrot_cathedral", (200, 150)).unwrap();
        assert_eq!(raster.width(), 200);
        assert_eq!(raster.height(), 150);
        assert_eq!(raster.data().len(), 200 * 150 * 3);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let patterns = fractal_patterns();
        let a = generate_fractal(&patterns, "mandelbrot_cathedral", (200, 150)).unwrap();
        let b = generate_fractal(&patterns, "mandelbrot_cathedral", (200, 150)).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_every_preset_renders_requested_shape() {
        let patterns = fractal_patterns();
        for name in patterns.keys() {
            let raster = generate_fractal(&patterns, name, (32, 24)).unwrap();
            assert_eq!(raster.data().len(), 32 * 24 * 3, "preset {name}");
        }
    }

    #[test]
    fn test_interior_pixels_stay_black() {
        // The Mandelbrot set interior never escapes; those pixels hold the
        // maximum count and fall outside every color band.
        let patterns = fractal_patterns();
        let raster = generate_fractal(&patterns, "mandelbrot_cathedral", (100, 100)).unwrap();
        // (-0.2, 0) is comfortably inside the main cardioid; x = -0.2 maps
        // to column (x - -2.5) / 4 * 99
        let col = ((-0.2f64 + 2.5) / 4.0 * 99.0).round() as i64;
        let row = 49;
        assert_eq!(raster.get(col, row), Some(BLACK));
    }

    #[test]
    fn test_dragon_gradient_corners() {
        let patterns = fractal_patterns();
        let raster = generate_fractal(&patterns, "dragon_curve_wisdom", (10, 10)).unwrap();
        let base = Rgb::from_hex("#8b0000").unwrap();
        // top-left: x = y = 0 -> (0, 0, b)
        assert_eq!(raster.get(0, 0), Some(Rgb::new(0, 0, base.b)));
        // bottom-right: x = y = 1 -> (r, g, 0)
        assert_eq!(raster.get(9, 9), Some(Rgb::new(base.r, base.g, 0)));
    }

    #[test]
    fn test_julia_constant_unchanged() {
        assert_eq!(JULIA_C, (-0.7, 0.27015));
    }
}
