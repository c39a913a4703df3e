/*!
# Error System for bracket-check

Fatal conditions only. Unbalanced brackets are reported as an
[`Outcome`](crate::checker::Outcome), never as an error.
*/

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a run before a report can be produced.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The target file is missing, unreadable or not valid UTF-8.
    #[error("cannot read input file {}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be read.
    #[error("cannot read config file {}", .path.display())]
    ConfigUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or has unknown keys.
    #[error("invalid config file {}", .path.display())]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Neither the command line nor the config file named a target.
    #[error("no input file given; pass a path or set `path` in the config file")]
    MissingTarget,
}

pub type CheckResult<T> = Result<T, CheckError>;
