use crate::field::FieldType;
use ahash::RandomState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ports keyed by name, kept in declaration order.
pub type PortMap = IndexMap<String, NodePort, RandomState>;

/// Whether a port takes wired connections, fixed in-place values, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Connection,
    Direct,
    Any,
}

impl InputMode {
    pub fn accepts_connections(&self) -> bool {
        !matches!(self, InputMode::Direct)
    }
}

/// A named, typed input or output slot on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodePort {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub input: InputMode,
    #[serde(default)]
    pub required: bool,
}

/// Catalogue entry describing one node type and its ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSchema {
    #[serde(rename = "type")]
    pub node_type: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub inputs: PortMap,
    #[serde(default)]
    pub outputs: PortMap,
}

impl NodeSchema {
    pub fn input(&self, name: &str) -> Option<&NodePort> {
        self.inputs.get(name)
    }

    pub fn output(&self, name: &str) -> Option<&NodePort> {
        self.outputs.get(name)
    }
}
