use thiserror::Error;

use crate::arena::NodeId;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Invalid node name: names must not be empty")]
    InvalidName,

    #[error("Duplicate node name: {0}")]
    DuplicateName(String),

    #[error("Node not found: {0}")]
    NotFound(String),

    #[error("Invalid path, empty segment in: {0:?}")]
    InvalidPath(String),

    #[error("Unknown or removed node: {0}")]
    UnknownNode(NodeId),

    #[error("Invalid path separator, expected a single character: {0:?}")]
    InvalidSeparator(String),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
}

pub type TreeResult<T> = Result<T, TreeError>;
