//! Legality check for a single proposed connection.

use crate::error::ConnectionError;
use crate::field::is_compatible;
use crate::graph::{WorkflowGraph, would_create_cycle};
use crate::schema::{SchemaCatalogue, SchemaLookup};
use serde::{Deserialize, Serialize};

/// A connection the player wants to draw, from an output port to an input port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeProposal {
    pub source_node: String,
    pub source_handle: String,
    pub target_node: String,
    pub target_handle: String,
}

impl EdgeProposal {
    pub fn new(
        source_node: impl Into<String>,
        source_handle: impl Into<String>,
        target_node: impl Into<String>,
        target_handle: impl Into<String>,
    ) -> Self {
        Self {
            source_node: source_node.into(),
            source_handle: source_handle.into(),
            target_node: target_node.into(),
            target_handle: target_handle.into(),
        }
    }
}

/// Transport form of a single-edge decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCheck {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EdgeCheck {
    pub fn accepted() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn rejected(reason: &ConnectionError) -> Self {
        Self {
            valid: false,
            error: Some(reason.to_string()),
        }
    }
}

impl From<Result<(), ConnectionError>> for EdgeCheck {
    fn from(result: Result<(), ConnectionError>) -> Self {
        match result {
            Ok(()) => EdgeCheck::accepted(),
            Err(reason) => EdgeCheck::rejected(&reason),
        }
    }
}

/// Runs the connection checks in order and stops at the first failure.
///
/// When either endpoint's node type is missing from the catalogue the proposal is
/// accepted without port, type or cycle checks.
pub fn check_connection(
    graph: &WorkflowGraph,
    catalogue: &SchemaCatalogue,
    proposal: &EdgeProposal,
) -> Result<(), ConnectionError> {
    if proposal.source_node == proposal.target_node {
        return Err(ConnectionError::SelfConnection);
    }

    let (source, target) = match (
        graph.node(&proposal.source_node),
        graph.node(&proposal.target_node),
    ) {
        (Some(source), Some(target)) => (source, target),
        _ => return Err(ConnectionError::NodeNotFound),
    };
    if !source.is_invocation() || !target.is_invocation() {
        return Err(ConnectionError::NotInvocation);
    }

    let (source_schema, target_schema) = match (
        catalogue.lookup(source.node_type()),
        catalogue.lookup(target.node_type()),
    ) {
        (SchemaLookup::Found(s), SchemaLookup::Found(t)) => (s, t),
        _ => {
            log::debug!(
                "no schema for '{}' or '{}', accepting {} -> {} unchecked",
                source.node_type(),
                target.node_type(),
                proposal.source_node,
                proposal.target_node
            );
            return Ok(());
        }
    };

    let source_port = source_schema
        .output(&proposal.source_handle)
        .ok_or_else(|| ConnectionError::MissingOutput(proposal.source_handle.clone()))?;
    let target_port = target_schema
        .input(&proposal.target_handle)
        .ok_or_else(|| ConnectionError::MissingInput(proposal.target_handle.clone()))?;

    if !target_port.input.accepts_connections() {
        return Err(ConnectionError::DirectInput);
    }

    if !is_compatible(&source_port.field_type, &target_port.field_type) {
        return Err(ConnectionError::TypeMismatch {
            source_type: source_port.field_type.clone(),
            target_type: target_port.field_type.clone(),
        });
    }

    if would_create_cycle(
        &proposal.source_node,
        &proposal.target_node,
        graph.node_ids(),
        graph.connection_edges(),
    ) {
        return Err(ConnectionError::Cycle);
    }

    Ok(())
}

/// Decides whether `proposal` may be added to `graph`.
pub fn validate_edge(
    graph: &WorkflowGraph,
    catalogue: &SchemaCatalogue,
    proposal: &EdgeProposal,
) -> EdgeCheck {
    let result = check_connection(graph, catalogue, proposal);
    if let Err(reason) = &result {
        log::debug!(
            "rejected {}:{} -> {}:{}: {}",
            proposal.source_node,
            proposal.source_handle,
            proposal.target_node,
            proposal.target_handle,
            reason
        );
    }
    result.into()
}
