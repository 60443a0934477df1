//! # Design Suite
//!
//! The sacred geometry / fractal rendering stack:
//!
//! - `canvas` - software RGB rasterizer and world viewport
//! - `geometry` - sacred geometry preset catalog
//! - `fractals` - fractal preset catalog and escape-time generators
//! - `palettes` - named hex color palettes
//! - `templates` - layout presets (cards, posters, covers)
//! - `logo` - the Witch Eye seal descriptor
//! - `render` - per-kind geometry draw routines
//! - `suite` - the facade tying the registries together

pub mod canvas;
pub mod fractals;
pub mod geometry;
pub mod logo;
pub mod palettes;
pub mod render;
pub mod suite;
pub mod templates;

pub use canvas::{Raster, Rgb};
pub use fractals::{FractalAlgorithm, FractalPattern};
pub use geometry::{GeometryKind, SacredGeometry};
pub use suite::{BlendMode, Design, DesignSuite, Layer};
pub use templates::{DesignTemplate, LogoPlacement};
