use std::io;
use std::process::ExitStatus;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("invalid package identity `{0}`: a name and a version are required")]
    InvalidIdentity(String),

    #[error("failed to start package data helper `{program}`: {source}")]
    ToolSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("package data helper `{program}` exited with {status}: {stderr}")]
    ToolExitStatus {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("malformed line {line_number} from package data helper: {line:?}")]
    MalformedLine { line_number: usize, line: String },

    #[error("unrecognized option line `[option {0}]`")]
    UnknownOptionLine(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CatalogError {
    /// Whether this error was caused by the external data helper (failed to start, non-zero
    /// exit, or output that could not be parsed).
    pub fn is_external_tool_failure(&self) -> bool {
        matches!(
            self,
            CatalogError::ToolSpawn { .. }
                | CatalogError::ToolExitStatus { .. }
                | CatalogError::MalformedLine { .. }
        )
    }
}
