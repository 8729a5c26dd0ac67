use std::{io, path::PathBuf};

use thiserror::Error;

use crate::ProjectKind;

/// Every way a generation attempt can fail. The generator only reports;
/// rendering the message and choosing an exit status is the caller's job.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("directory {0} already exists")]
    TargetExists(String),

    #[error("unknown project type: {0}")]
    UnknownType(String),

    #[error("template {kind} not found at {}", path.display())]
    TemplateMissing { kind: ProjectKind, path: PathBuf },

    #[error("cannot create project directory: {0}")]
    CreateDir(#[source] io::Error),

    #[error("failed to copy template: {0}")]
    Copy(#[source] io::Error),
}
