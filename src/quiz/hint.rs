use super::definition::Quiz;
use serde::{Deserialize, Serialize};

/// Which two ports the next missing connection joins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintInfo {
    pub source_node_id: String,
    pub source_node_label: String,
    pub source_field_name: String,
    pub target_node_id: String,
    pub target_node_label: String,
    pub target_field_name: String,
}

/// Describes the first hidden edge, in listed order, that is not yet connected.
///
/// Returns `None` once every hidden edge is connected, or if that edge does not
/// resolve to a connection between two invocation nodes.
pub fn next_hint<S: AsRef<str>>(quiz: &Quiz, connected_edge_ids: &[S]) -> Option<HintInfo> {
    let is_connected = |id: &str| connected_edge_ids.iter().any(|c| c.as_ref() == id);
    let edge_id = quiz.hidden.edges.iter().find(|id| !is_connected(id.as_str()))?;

    let edge = quiz.workflow.edge(edge_id).filter(|e| e.is_connection())?;
    let source = quiz.workflow.node(&edge.source).filter(|n| n.is_invocation())?;
    let target = quiz.workflow.node(&edge.target).filter(|n| n.is_invocation())?;

    Some(HintInfo {
        source_node_id: source.id.clone(),
        source_node_label: source.display_label().to_string(),
        source_field_name: edge.source_handle.clone(),
        target_node_id: target.id.clone(),
        target_node_label: target.display_label().to_string(),
        target_field_name: edge.target_handle.clone(),
    })
}
