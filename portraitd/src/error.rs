use std::io;
use std::path::PathBuf;

use portrait::error::StageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config file {path:?} not found")]
    MissingConfig { path: PathBuf },

    #[error("invalid config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value {value:?} for {var}")]
    Env { var: &'static str, value: String },

    #[error("invalid stage config: {0}")]
    Stage(#[from] StageError),

    #[error("view `{view}`: {reason}")]
    Render { view: String, reason: String },

    #[error("failed to encode stage config: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
