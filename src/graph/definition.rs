use serde::{Deserialize, Serialize};

/// Whether a node is an operation or a free-standing annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Invocation,
    #[serde(alias = "annotation")]
    Notes,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Per-node payload. Only the fields the engine reads are modelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub data: NodeData,
    #[serde(default)]
    pub position: Position,
}

impl GraphNode {
    pub fn invocation(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Invocation,
            data: NodeData {
                node_type: node_type.into(),
                label: String::new(),
            },
            position: Position::default(),
        }
    }

    pub fn notes(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Notes,
            data: NodeData {
                node_type: "notes".to_string(),
                label: String::new(),
            },
            position: Position::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.data.label = label.into();
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
        self
    }

    pub fn is_invocation(&self) -> bool {
        self.kind == NodeKind::Invocation
    }

    pub fn node_type(&self) -> &str {
        &self.data.node_type
    }

    /// The human label, or the node type when no label is set.
    pub fn display_label(&self) -> &str {
        if self.data.label.is_empty() {
            &self.data.node_type
        } else {
            &self.data.label
        }
    }
}

/// Edge flavour. Only `Connection` edges carry data between ports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    #[default]
    #[serde(rename = "default")]
    Connection,
    #[serde(rename = "collapsed")]
    Collapsed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: EdgeKind,
    pub source: String,
    #[serde(default)]
    pub source_handle: String,
    pub target: String,
    #[serde(default)]
    pub target_handle: String,
}

impl GraphEdge {
    pub fn connection(
        id: impl Into<String>,
        source: impl Into<String>,
        source_handle: impl Into<String>,
        target: impl Into<String>,
        target_handle: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: EdgeKind::Connection,
            source: source.into(),
            source_handle: source_handle.into(),
            target: target.into(),
            target_handle: target_handle.into(),
        }
    }

    pub fn is_connection(&self) -> bool {
        self.kind == EdgeKind::Connection
    }
}

/// A workflow: ordered nodes and edges, plus whatever metadata the source file carried.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    #[serde(flatten)]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

impl WorkflowGraph {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self {
            nodes,
            edges,
            meta: serde_json::Map::new(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn invocation_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.is_invocation())
    }

    pub fn connection_edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(|e| e.is_connection())
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }
}
