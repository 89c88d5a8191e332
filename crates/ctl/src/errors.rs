use thiserror::Error;

/// Error type for controller operations.
#[derive(Debug, Error)]
pub enum CtlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A suite binary could not be launched at all (missing, not
    /// executable, bad directory). Distinct from `Io` so callers can tell
    /// a broken installation apart from a broken working directory.
    #[error("failed to launch `{tool}`: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unparseable `{tool}` output: {what}")]
    Parse { tool: &'static str, what: String },

    #[error("`{tool}` output contained no {what}")]
    MissingOutput {
        tool: &'static str,
        what: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CtlError>;
