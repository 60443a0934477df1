//! # Maintenance Tools
//!
//! Deterministic repository chores:
//!
//! - `dedupe` - collapse runs of identical lines in text files
//! - `audit` - verify the pillar registry is complete and well-named

pub mod audit;
pub mod dedupe;

pub use audit::{audit_pillars, AuditReport};
pub use dedupe::{dedupe_content, dedupe_file, walk_targets};
