use thiserror::Error;

/// Errors surfaced to the host.
///
/// Gesture misuse (release without a matching press) is not an error: it is
/// reported as an ignored gesture instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SandboxError {
    /// The measured container cannot back a render surface.
    #[error("invalid container size {width}x{height}")]
    InvalidContainer { width: f64, height: f64 },

    /// The drawing surface cannot provide a rendering context.
    #[error("unsupported drawing surface: {0}")]
    UnsupportedSurface(String),

    #[error("unknown tool mode '{0}'")]
    UnknownTool(String),

    #[error("unknown object setting '{0}'")]
    UnknownSetting(String),

    #[error("'{value}' is not a number (field {field})")]
    InvalidNumber { field: String, value: String },

    #[error("invalid scene config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SandboxError>;

impl From<serde_json::Error> for SandboxError {
    fn from(err: serde_json::Error) -> Self {
        SandboxError::Config(err.to_string())
    }
}
