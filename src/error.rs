// Error types for the FCPX Hacks distribution tools
//
// This module defines error types using thiserror for better error handling
// and debugging throughout the toolkit.

use thiserror::Error;

/// Main error type for toolkit operations
#[derive(Error, Debug)]
pub enum DistError {
    #[error("Packaging settings error: {0}")]
    Dmg(#[from] DmgError),

    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Disk-image settings errors
#[derive(Error, Debug)]
pub enum DmgError {
    #[error("Settings file IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to encode settings as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed define '{0}': expected key=value")]
    MalformedDefine(String),

    #[error("Unknown define key: {0}")]
    UnknownDefine(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Font name extraction errors
#[derive(Error, Debug)]
pub enum FontError {
    #[error("Failed to read font file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse font: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),
}

// Convenience type aliases for common Result types
pub type Result<T> = std::result::Result<T, DistError>;
pub type DmgResult<T> = std::result::Result<T, DmgError>;
pub type FontResult<T> = std::result::Result<T, FontError>;
