use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the galaxy forge library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Star catalog could not be located at the resolved path.
    #[error("star catalog not found at {path}")]
    DataFileNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the star catalog")]
    ProjectDirsUnavailable,

    /// Raised when a star type code is not part of the star type table.
    #[error("unknown star type code: {code}")]
    UnknownStarType { code: String },

    /// Raised when a luminosity class code is not recognised.
    #[error("unknown luminosity class: {code}")]
    UnknownLuminosityClass { code: String },

    /// Raised when a planet type code is not part of the planet type table.
    #[error("unknown planet type code: {code}")]
    UnknownPlanetType { code: String },

    /// Raised when a distance is requested for an absent coordinate.
    #[error("coordinates must not be absent when computing a distance")]
    MissingCoordinate,

    /// Raised when a catalog row holds a value that cannot be parsed.
    #[error("invalid star record on row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Raised when the star catalog itself is malformed (headers, layout).
    #[error("invalid star data: {message}")]
    StarDataValidation { message: String },

    /// Raised when a star designation could not be found in the galaxy.
    #[error("unknown star designation: {designation}{}", format_suggestions(.suggestions))]
    UnknownStar {
        designation: String,
        suggestions: Vec<String>,
    },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error stems from an unrecognised type code.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownStarType { .. }
                | Error::UnknownLuminosityClass { .. }
                | Error::UnknownPlanetType { .. }
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
