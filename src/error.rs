//! Error types
//!
//! The only fatal condition is a missing rendering surface at startup; bad
//! viewports and input are tolerated by the simulation itself.

/// Errors raised while setting up the starfield
#[derive(Debug, thiserror::Error)]
pub enum StarfieldError {
    /// No global `window` (not running in a browser main thread)
    #[error("no window available")]
    NoWindow,

    /// Window has no document attached
    #[error("no document available")]
    NoDocument,

    /// No element matched the canvas selector
    #[error("canvas element not found (selector `{0}`)")]
    CanvasNotFound(String),

    /// Element exists but is not a `<canvas>`
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),

    /// The canvas refused to hand out a 2D context
    #[error("2d rendering context unavailable")]
    ContextUnavailable,

    /// Tuning JSON failed to parse
    #[error("invalid tuning JSON: {0}")]
    TuningParse(#[from] serde_json::Error),

    /// Tuning parsed but a value is out of range
    #[error("invalid tuning value `{field}`: {reason}")]
    TuningInvalid {
        field: &'static str,
        reason: String,
    },
}

impl StarfieldError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::TuningInvalid {
            field,
            reason: reason.into(),
        }
    }
}
