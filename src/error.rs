use crate::field::FieldType;
use thiserror::Error;

/// Reasons a single proposed connection is rejected.
///
/// The `Display` text of each variant is the message shown to the player.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("Cannot connect a node to itself")]
    SelfConnection,

    #[error("Source or target node not found")]
    NodeNotFound,

    #[error("Can only connect invocation nodes")]
    NotInvocation,

    #[error("Output field '{0}' not found on source node")]
    MissingOutput(String),

    #[error("Input field '{0}' not found on target node")]
    MissingInput(String),

    #[error("This input does not accept connections")]
    DirectInput,

    #[error("Type mismatch: {source_type} cannot connect to {target_type}")]
    TypeMismatch {
        source_type: FieldType,
        target_type: FieldType,
    },

    #[error("This connection would create a cycle")]
    Cycle,
}

/// Errors that can occur while loading a schema catalogue.
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Failed to parse node schema catalogue: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Catalogue entry '{key}' describes node type '{declared}'")]
    KeyMismatch { key: String, declared: String },
}

/// Errors that can occur while reading a quiz or a player submission.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Failed to parse quiz JSON: {0}")]
    JsonParseError(#[source] serde_json::Error),

    #[error("Failed to parse submission JSON: {0}")]
    SubmissionParseError(#[source] serde_json::Error),

    #[error("Hidden edge '{0}' does not exist in the quiz workflow")]
    UnknownHiddenEdge(String),

    #[error("Hidden node '{0}' does not exist in the quiz workflow")]
    UnknownHiddenNode(String),
}
