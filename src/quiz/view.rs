use super::definition::{Difficulty, Quiz};
use crate::graph::WorkflowGraph;
use crate::schema::SchemaCatalogue;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// What the player is shown: the workflow with every hidden element taken out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub workflow: WorkflowGraph,
    pub hidden_edge_count: usize,
    pub hidden_node_count: usize,
    /// Schemas for every node type in the full workflow, hidden nodes included,
    /// so the player can add those nodes back.
    pub node_schemas: SchemaCatalogue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub edge_count: usize,
    pub hidden_edge_count: usize,
    pub hidden_node_count: usize,
}

impl Quiz {
    pub fn player_view(&self, catalogue: &SchemaCatalogue) -> QuizView {
        let nodes = self
            .workflow
            .nodes
            .iter()
            .filter(|node| !self.hidden.hides_node(&node.id))
            .cloned()
            .collect();
        let edges = self
            .workflow
            .edges
            .iter()
            .filter(|edge| !self.hidden.hides_edge(&edge.id))
            .cloned()
            .collect();

        QuizView {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            difficulty: self.difficulty,
            workflow: WorkflowGraph {
                nodes,
                edges,
                meta: self.workflow.meta.clone(),
            },
            hidden_edge_count: self.hidden.edges.len(),
            hidden_node_count: self.hidden.nodes.len(),
            node_schemas: catalogue.subset_for(&self.workflow),
        }
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            difficulty: self.difficulty,
            edge_count: self.workflow.edges.len(),
            hidden_edge_count: self.hidden.edges.len(),
            hidden_node_count: self.hidden.nodes.len(),
        }
    }
}

/// Orders summaries easy, medium, hard, keeping the input order within each difficulty.
pub fn sort_summaries(summaries: impl IntoIterator<Item = QuizSummary>) -> Vec<QuizSummary> {
    summaries.into_iter().sorted_by_key(|s| s.difficulty).collect()
}
