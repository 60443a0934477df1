//! # Cathedral Core
//!
//! The engine room of the Cathedral of Circuits: preset catalogs, the sacred
//! geometry / fractal renderer, the PNG writer, the Azure agent swarm
//! runner, and repository maintenance tools.
//!
//! ## Architecture
//!
//! - `design/` - geometry and fractal catalogs, software rasterizer, suite facade
//! - `arcana/` - tarot, shadow-work, and synth lookup-table systems
//! - `agents/` - Azure AI Foundry client and bounded fan-out runner
//! - `tools/` - dedupe and pillar-audit utilities
//! - `png` - minimal RGB PNG encoder
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cathedral_core::design::DesignSuite;
//!
//! let suite = DesignSuite::new();
//! let raster = suite.generate_fractal("mandelbrot_cathedral", (800, 800))?;
//! cathedral_core::png::save(&raster, Path::new("mandelbrot.png"))?;
//! ```

pub mod agents;
pub mod arcana;
pub mod design;
pub mod error;
pub mod png;
pub mod tools;

pub use error::DesignError;
