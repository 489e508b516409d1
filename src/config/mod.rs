use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_key_value_pair, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Application ID used when the viewer does not recommend one.
pub const DEFAULT_APPLICATION_ID: &str = "external_data_loader";

const COMPATIBLE_EXTENSION: &str = "dae";

/// CLI of the external data-loader protocol.
///
/// The Rerun Viewer invokes any executable on `$PATH` whose name starts with
/// `rerun-loader-` using exactly these flags, so their names must not change.
#[derive(Debug, Clone, Parser)]
#[command(name = "rerun-loader-collada")]
#[command(about = "External data-loader that logs COLLADA (.dae) files to the Rerun Viewer")]
pub struct LoaderConfig {
    /// Path of the file the viewer asked us to load
    pub filepath: PathBuf,

    /// Optional recommended ID for the application
    #[arg(long)]
    pub application_id: Option<String>,

    /// Optional recommended ID for the currently opened application
    #[arg(long)]
    pub opened_application_id: Option<String>,

    /// Optional recommended ID for the recording
    #[arg(long)]
    pub recording_id: Option<String>,

    /// Optional recommended ID for the currently opened recording
    #[arg(long)]
    pub opened_recording_id: Option<String>,

    /// Optional prefix for all entity paths
    #[arg(long)]
    pub entity_path_prefix: Option<String>,

    /// Log the data as static
    #[arg(long = "static")]
    pub statically: bool,

    /// Deprecated alias for `--static`
    #[arg(long, hide = true)]
    pub timeless: bool,

    /// Optional timestamps to log at (e.g. `--time sim_time=1709203426`) (repeatable)
    #[arg(long)]
    pub time: Vec<String>,

    /// Optional sequences to log at (e.g. `--sequence sim_frame=42`) (repeatable)
    #[arg(long)]
    pub sequence: Vec<String>,

    /// Enable verbose output (loader-local, never passed by the viewer)
    #[arg(long)]
    pub verbose: bool,
}

fn extension(path: &Path) -> String {
    path.extension()
        .unwrap_or_default()
        .to_ascii_lowercase()
        .to_string_lossy()
        .to_string()
}

impl LoaderConfig {
    /// The "opened" recommendation wins over the plain one.
    pub fn effective_application_id(&self) -> &str {
        self.opened_application_id
            .as_deref()
            .or(self.application_id.as_deref())
            .unwrap_or(DEFAULT_APPLICATION_ID)
    }

    pub fn effective_recording_id(&self) -> Option<&str> {
        self.opened_recording_id
            .as_deref()
            .or(self.recording_id.as_deref())
    }

    /// Whether this loader handles the given file at all. Anything else must
    /// be answered with the incompatible exit code, never an error.
    pub fn is_compatible(&self) -> bool {
        self.filepath.is_file() && extension(&self.filepath) == COMPATIBLE_EXTENSION
    }
}

impl ConfigProvider for LoaderConfig {
    fn filepath(&self) -> &Path {
        &self.filepath
    }

    fn entity_path_prefix(&self) -> Option<&str> {
        self.entity_path_prefix.as_deref()
    }

    fn static_logging(&self) -> bool {
        self.statically || self.timeless
    }
}

impl Validate for LoaderConfig {
    fn validate(&self) -> Result<()> {
        validate_path("filepath", &self.filepath.to_string_lossy())?;

        for (field, value) in [
            ("application-id", &self.application_id),
            ("opened-application-id", &self.opened_application_id),
            ("recording-id", &self.recording_id),
            ("opened-recording-id", &self.opened_recording_id),
            ("entity-path-prefix", &self.entity_path_prefix),
        ] {
            if let Some(value) = value {
                validate_non_empty_string(field, value)?;
            }
        }

        for entry in &self.time {
            validate_key_value_pair("time", entry)?;
        }
        for entry in &self.sequence {
            validate_key_value_pair("sequence", entry)?;
        }

        Ok(())
    }
}
