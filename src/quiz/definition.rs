use crate::error::QuizError;
use crate::graph::{GraphEdge, WorkflowGraph};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// The elements removed from a workflow that the player has to put back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenAnswerSet {
    /// Ids of the edges to reconnect, in the order hints are handed out.
    #[serde(rename = "hiddenEdges")]
    pub edges: Vec<String>,
    /// Ids of the nodes the player has to add back by type.
    #[serde(rename = "hiddenNodes", default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,
}

impl HiddenAnswerSet {
    pub fn hides_edge(&self, id: &str) -> bool {
        self.edges.iter().any(|e| e == id)
    }

    pub fn hides_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n == id)
    }
}

/// A complete puzzle: the solved workflow plus what is hidden from the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub difficulty: Difficulty,
    pub workflow: WorkflowGraph,
    #[serde(flatten)]
    pub hidden: HiddenAnswerSet,
}

impl Quiz {
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        serde_json::from_str(json).map_err(QuizError::JsonParseError)
    }

    /// Checks that every hidden edge and node id refers to something in the workflow.
    pub fn verify(&self) -> Result<(), QuizError> {
        if let Some(id) = self.hidden.edges.iter().find(|id| self.workflow.edge(id).is_none()) {
            return Err(QuizError::UnknownHiddenEdge(id.clone()));
        }
        if let Some(id) = self.hidden.nodes.iter().find(|id| self.workflow.node(id).is_none()) {
            return Err(QuizError::UnknownHiddenNode(id.clone()));
        }
        Ok(())
    }

    /// The connection edges the player must recreate, in workflow order.
    pub fn answer_edges(&self) -> Vec<&GraphEdge> {
        let hidden: AHashSet<&str> = self.hidden.edges.iter().map(String::as_str).collect();
        self.workflow
            .connection_edges()
            .filter(|edge| hidden.contains(edge.id.as_str()))
            .collect()
    }
}

/// A node the player added, identified only by the id they gave it and its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerNodeMapping {
    #[serde(rename = "id")]
    pub player_id: String,
    pub node_type: String,
}

impl PlayerNodeMapping {
    pub fn new(player_id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            node_type: node_type.into(),
        }
    }
}

/// Everything the player hands in for grading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub proposed_edges: Vec<GraphEdge>,
    #[serde(default)]
    pub player_node_mappings: Vec<PlayerNodeMapping>,
}

impl Submission {
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        serde_json::from_str(json).map_err(QuizError::SubmissionParseError)
    }
}
