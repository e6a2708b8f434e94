//! Error types for portrait generation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum PortraitError {
    /// Seed was NaN or infinite and cannot drive the random stream
    InvalidSeed {
        /// The rejected seed
        value: f64,
    },

    /// Rarity tag is not one of the five known tiers
    InvalidRarity {
        /// The tag as supplied by the caller
        tag: String,
    },

    /// Target surface does not have the fixed physical dimensions
    SurfaceSize {
        /// Required (width, height) in physical pixels
        expected: (u32, u32),
        /// Dimensions reported by the surface
        actual: (u32, u32),
    },

    /// Generation or CLI parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save a finished portrait
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PortraitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeed { value } => {
                write!(f, "Invalid seed {value}: seed must be a finite number")
            }
            Self::InvalidRarity { tag } => {
                write!(
                    f,
                    "Unknown rarity '{tag}' (expected common, rare, epic, legendary or mythic)"
                )
            }
            Self::SurfaceSize { expected, actual } => {
                write!(
                    f,
                    "Surface is {}x{} but portraits need {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PortraitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, PortraitError>;

impl From<std::io::Error> for PortraitError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PortraitError {
    PortraitError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject seeds that would poison the sine transform
///
/// # Errors
///
/// Returns [`PortraitError::InvalidSeed`] for NaN and infinite values
pub fn ensure_finite_seed(seed: f64) -> Result<f64> {
    if seed.is_finite() {
        Ok(seed)
    } else {
        Err(PortraitError::InvalidSeed { value: seed })
    }
}
