use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to parse mesh file '{path}': {source}")]
    MeshParseError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Recording stream error: {0}")]
    RecordingError(#[from] rerun::RecordingStreamError),

    #[error("Configuration error: invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Extraction,
    Io,
    Sink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LoaderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MeshParseError { .. } => ErrorCategory::Extraction,
            Self::IoError(_) => ErrorCategory::Io,
            Self::RecordingError(_) => ErrorCategory::Sink,
            Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MeshParseError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Medium,
            // A broken stream means the viewer receives nothing at all.
            Self::RecordingError(_) => ErrorSeverity::Critical,
            Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MeshParseError { path, .. } => format!(
                "Verify that '{}' is a well-formed COLLADA (.dae) document",
                path
            ),
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::RecordingError(_) => {
                "Check that stdout is connected to a Rerun Viewer or a file".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Correct the value passed for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MeshParseError { path, .. } => {
                format!("Could not read mesh data from '{}'", path)
            }
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::RecordingError(_) => "Could not stream data to the Rerun Viewer".to_string(),
            Self::InvalidConfigValueError { .. } => format!("Invalid arguments: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;
