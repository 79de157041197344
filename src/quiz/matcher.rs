//! Grading a full submission against the hidden answer set.

use super::definition::{PlayerNodeMapping, Quiz};
use crate::graph::GraphEdge;
use crate::schema::SchemaCatalogue;
use crate::validator::{EdgeProposal, check_connection};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Id-independent identity of an edge: `(source, source port, target, target port)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdentityKey<'a> {
    pub source: &'a str,
    pub source_handle: &'a str,
    pub target: &'a str,
    pub target_handle: &'a str,
}

impl<'a> IdentityKey<'a> {
    pub fn of(edge: &'a GraphEdge) -> Self {
        Self {
            source: &edge.source,
            source_handle: &edge.source_handle,
            target: &edge.target,
            target_handle: &edge.target_handle,
        }
    }
}

impl fmt::Display for IdentityKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}->{}:{}",
            self.source, self.source_handle, self.target, self.target_handle
        )
    }
}

/// Maps player-assigned node ids to the hidden node ids they stand in for.
#[derive(Debug, Clone, Default)]
pub struct NodeResolution<'a> {
    map: AHashMap<&'a str, &'a str>,
}

impl<'a> NodeResolution<'a> {
    /// Resolves each mapping, in submission order, to the first hidden node (in the
    /// quiz's listed order) of the same type that no earlier mapping has claimed.
    pub fn resolve(quiz: &'a Quiz, mappings: &'a [PlayerNodeMapping]) -> Self {
        let mut map: AHashMap<&'a str, &'a str> = AHashMap::new();

        for mapping in mappings {
            let claim = quiz.hidden.nodes.iter().map(String::as_str).find(|&hidden_id| {
                let same_type = quiz.workflow.node(hidden_id).is_some_and(|node| {
                    node.is_invocation() && node.node_type() == mapping.node_type
                });
                same_type && !map.values().any(|&claimed| claimed == hidden_id)
            });

            match claim {
                Some(hidden_id) => {
                    log::debug!(
                        "player node '{}' stands in for '{}'",
                        mapping.player_id,
                        hidden_id
                    );
                    map.insert(mapping.player_id.as_str(), hidden_id);
                }
                None => log::debug!(
                    "player node '{}' ({}) matches no unclaimed hidden node",
                    mapping.player_id,
                    mapping.node_type
                ),
            }
        }
        Self { map }
    }

    /// The hidden id for `id`, or `id` itself when it was not resolved.
    pub fn apply<'b>(&self, id: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.map.get(id).copied().unwrap_or(id)
    }

    pub fn get(&self, player_id: &str) -> Option<&'a str> {
        self.map.get(player_id).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionErrorKind {
    /// The connection is structurally illegal.
    InvalidConnection,
    /// The connection is legal but is not one of the hidden edges.
    TypeMismatch,
}

/// Feedback for one proposed edge that did not match the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionError {
    #[serde(rename = "type")]
    pub kind: SubmissionErrorKind,
    pub message: String,
    pub edge: GraphEdge,
}

pub const NOT_EXPECTED_MESSAGE: &str = "This connection is valid but not the expected one";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReport {
    pub valid: bool,
    pub errors: Vec<SubmissionError>,
    pub correct_edges: usize,
    pub total_edges: usize,
    pub completed: bool,
}

/// Scores `proposed_edges` against the quiz's hidden answer edges.
///
/// Edges that match an answer by identity key count as correct. Every other edge
/// is checked against the full quiz workflow and reported either as an invalid
/// connection or as a legal connection that is not the expected one.
pub fn score_submission(
    quiz: &Quiz,
    catalogue: &SchemaCatalogue,
    proposed_edges: &[GraphEdge],
    mappings: &[PlayerNodeMapping],
) -> SubmissionReport {
    let answer_edges = quiz.answer_edges();
    let answers: AHashSet<IdentityKey<'_>> = answer_edges
        .iter()
        .map(|edge| IdentityKey::of(edge))
        .collect();
    let resolution = NodeResolution::resolve(quiz, mappings);

    let mut errors = Vec::new();
    let mut correct_edges = 0;

    for edge in proposed_edges {
        let key = IdentityKey {
            source: resolution.apply(&edge.source),
            source_handle: &edge.source_handle,
            target: resolution.apply(&edge.target),
            target_handle: &edge.target_handle,
        };

        if answers.contains(&key) {
            correct_edges += 1;
            continue;
        }

        let proposal =
            EdgeProposal::new(key.source, key.source_handle, key.target, key.target_handle);
        let error = match check_connection(&quiz.workflow, catalogue, &proposal) {
            Err(reason) => SubmissionError {
                kind: SubmissionErrorKind::InvalidConnection,
                message: reason.to_string(),
                edge: edge.clone(),
            },
            Ok(()) => SubmissionError {
                kind: SubmissionErrorKind::TypeMismatch,
                message: NOT_EXPECTED_MESSAGE.to_string(),
                edge: edge.clone(),
            },
        };
        log::debug!("edge {} not in answer set: {}", key, error.message);
        errors.push(error);
    }

    let total_edges = answer_edges.len();
    let completed = correct_edges == total_edges && errors.is_empty();
    log::info!(
        "quiz '{}': {}/{} edges correct, {} errors, completed: {}",
        quiz.id,
        correct_edges,
        total_edges,
        errors.len(),
        completed
    );

    SubmissionReport {
        valid: errors.is_empty(),
        errors,
        correct_edges,
        total_edges,
        completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_key_renders_wire_form() {
        let edge = GraphEdge::connection("e1", "n1", "value", "n2", "prompt");
        assert_eq!(IdentityKey::of(&edge).to_string(), "n1:value->n2:prompt");
    }

    #[test]
    fn identity_key_ignores_edge_id() {
        let a = GraphEdge::connection("e1", "n1", "value", "n2", "prompt");
        let b = GraphEdge::connection("other", "n1", "value", "n2", "prompt");
        assert_eq!(IdentityKey::of(&a), IdentityKey::of(&b));
    }
}
