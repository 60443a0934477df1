//! # Design Errors
//!
//! Typed failures for registry lookups and color parsing. Everything else in
//! the crate uses `anyhow` at the boundary; these exist so "unknown preset"
//! is matchable rather than a stringly-typed crash.

use thiserror::Error;

/// Errors raised by the design suite registries and renderer.
#[derive(Debug, Error)]
pub enum DesignError {
    /// Sacred geometry preset key is not registered
    #[error("geometry '{0}' not found")]
    UnknownGeometry(String),

    /// Fractal preset key is not registered
    #[error("fractal pattern '{0}' not found")]
    UnknownFractal(String),

    /// Design template key is not registered
    #[error("template '{0}' not found")]
    UnknownTemplate(String),

    /// Color palette key is not registered
    #[error("palette '{0}' not found")]
    UnknownPalette(String),

    /// Hex color string is not of the form `#rrggbb`
    #[error("invalid hex color '{0}'")]
    InvalidHexColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_key() {
        let err = DesignError::UnknownGeometry("flower_of_strife".into());
        assert_eq!(err.to_string(), "geometry 'flower_of_strife' not found");

        let err = DesignError::InvalidHexColor("#zzz".into());
        assert!(err.to_string().contains("#zzz"));
    }
}
