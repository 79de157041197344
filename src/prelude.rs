//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the rewire crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use rewire::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let quiz = Quiz::from_json(&std::fs::read_to_string("quizzes/basic.json")?)?;
//!
//! let hint = next_hint::<&str>(&quiz, &[]);
//! println!("Next hint: {:?}", hint);
//! # Ok(())
//! # }
//! ```

// Type model and compatibility
pub use crate::field::{Cardinality, FieldType, is_compatible, types_equal};

// Schemas
pub use crate::schema::{InputMode, NodePort, NodeSchema, SchemaCatalogue, SchemaLookup};

// Graph structures
pub use crate::graph::{
    EdgeKind, GraphEdge, GraphNode, NodeKind, WorkflowGraph, would_create_cycle,
};

// Decisions
pub use crate::validator::{EdgeCheck, EdgeProposal, check_connection, validate_edge};
pub use crate::quiz::{
    Difficulty, HiddenAnswerSet, HintInfo, PlayerNodeMapping, Quiz, Submission,
    SubmissionErrorKind, SubmissionReport, next_hint, score_submission,
};

// Error types
pub use crate::error::{CatalogueError, ConnectionError, QuizError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
