//! Error Types
//!
//! The glue layer has very few failure modes. [`ReelError`] covers them:
//! - asset import failures reported by the viewer
//! - malformed configuration (anchors, panel keys, JSON)
//! - missing DOM elements on the web front-end
//!
//! Everything else (interpolation, panel writes) is infallible.

use thiserror::Error;

/// The main error type for scrollreel.
#[derive(Error, Debug)]
pub enum ReelError {
    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The viewer rejected or failed to import the model.
    #[error("Asset load failed: {0}")]
    AssetLoadFailed(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// An anchor string such as `"top bottom"` could not be parsed.
    #[error("Invalid anchor: {0:?}")]
    InvalidAnchor(String),

    /// A debug panel change named a field that is not bound.
    #[error("Unknown panel field: {0:?}")]
    UnknownField(String),

    /// Configuration parsed but holds values the stage cannot use.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    // ========================================================================
    // Platform-Specific Errors
    // ========================================================================
    /// A required page element was not found.
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// WASM-specific error.
    #[cfg(target_arch = "wasm32")]
    #[error("WASM error: {0}")]
    WasmError(String),
}

/// Alias for `Result<T, ReelError>`.
pub type Result<T> = std::result::Result<T, ReelError>;
