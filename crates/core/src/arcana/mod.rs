//! # The Halls
//!
//! Static lookup-table systems of the cathedral:
//!
//! - `tarot` - the 22 Major Arcana and the extended pantheon
//! - `shadows` - Jungian shadow-work archetypes and assessment scoring
//! - `synth` - the legendary synthesizer collection

pub mod shadows;
pub mod synth;
pub mod tarot;

pub use shadows::{HallOfShadows, PersonalShadowMap, ShadowArchetype, ShadowAspect, TherapeuticApproach};
pub use synth::{SynthEngine, SynthLab};
pub use tarot::{ExtendedPantheon, TarotCard, TarotSystem, WritingStyle};
