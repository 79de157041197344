//! # Rewire - Workflow Reconstruction Puzzle Engine
//!
//! **Rewire** decides whether connections in a node-based workflow graph are legal and
//! grades a player's attempt to rebuild the edges and nodes that were hidden from a
//! solved workflow.
//!
//! ## Core Workflow
//!
//! The engine never touches the filesystem or the network. A caller loads the data and
//! hands it over already parsed:
//!
//! 1.  **Load a Quiz**: Parse a [`Quiz`](quiz::Quiz) (the solved workflow plus the ids of
//!     its hidden edges and nodes), e.g. with `Quiz::from_json`.
//! 2.  **Pick a Catalogue**: Use [`SchemaCatalogue::builtin`](schema::SchemaCatalogue::builtin)
//!     or load one with `SchemaCatalogue::from_json`. Node types missing from the catalogue
//!     are accepted without port or type checks.
//! 3.  **Check Single Edges**: Call [`validate_edge`](validator::validate_edge) while the
//!     player is drawing connections.
//! 4.  **Grade Submissions**: Call [`score_submission`](quiz::score_submission) with the
//!     player's edges and the nodes they added, or [`next_hint`](quiz::next_hint) for help.
//!
//! ## Quick Start
//!
//! ```rust
//! use rewire::prelude::*;
//!
//! let workflow = WorkflowGraph::new(
//!     vec![
//!         GraphNode::invocation("n1", "string"),
//!         GraphNode::invocation("n2", "compel"),
//!     ],
//!     vec![GraphEdge::connection("e1", "n1", "value", "n2", "prompt")],
//! );
//! let quiz = Quiz {
//!     id: "intro".to_string(),
//!     name: "Intro".to_string(),
//!     description: String::new(),
//!     difficulty: Difficulty::Easy,
//!     workflow,
//!     hidden: HiddenAnswerSet {
//!         edges: vec!["e1".to_string()],
//!         nodes: vec![],
//!     },
//! };
//! let catalogue = SchemaCatalogue::builtin();
//!
//! let check = validate_edge(
//!     &quiz.workflow,
//!     &catalogue,
//!     &EdgeProposal::new("n1", "value", "n2", "prompt"),
//! );
//! assert!(check.valid);
//!
//! let attempt = vec![GraphEdge::connection("mine", "n1", "value", "n2", "prompt")];
//! let report = score_submission(&quiz, &catalogue, &attempt, &[]);
//! assert!(report.completed);
//! ```

pub mod error;
pub mod field;
pub mod graph;
pub mod prelude;
pub mod quiz;
pub mod schema;
pub mod validator;
