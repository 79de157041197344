use super::definition::NodeSchema;
use crate::error::CatalogueError;
use crate::graph::WorkflowGraph;
use ahash::RandomState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Result of looking a node type up in the catalogue.
///
/// `Unknown` is a normal outcome: connections touching a node type outside the
/// catalogue are accepted without port or type checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaLookup<'a> {
    Found(&'a NodeSchema),
    Unknown,
}

impl<'a> SchemaLookup<'a> {
    pub fn found(self) -> Option<&'a NodeSchema> {
        match self {
            SchemaLookup::Found(schema) => Some(schema),
            SchemaLookup::Unknown => None,
        }
    }
}

/// Read-only set of node schemas keyed by node type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaCatalogue {
    schemas: IndexMap<String, NodeSchema, RandomState>,
}

impl SchemaCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object mapping node types to schemas.
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let schemas: IndexMap<String, NodeSchema, RandomState> = serde_json::from_str(json)?;
        if let Some((key, schema)) = schemas.iter().find(|(key, s)| **key != s.node_type) {
            return Err(CatalogueError::KeyMismatch {
                key: key.clone(),
                declared: schema.node_type.clone(),
            });
        }
        Ok(Self { schemas })
    }

    pub fn with_schema(mut self, schema: NodeSchema) -> Self {
        self.insert(schema);
        self
    }

    pub fn insert(&mut self, schema: NodeSchema) -> Option<NodeSchema> {
        self.schemas.insert(schema.node_type.clone(), schema)
    }

    pub fn lookup(&self, node_type: &str) -> SchemaLookup<'_> {
        match self.schemas.get(node_type) {
            Some(schema) => SchemaLookup::Found(schema),
            None => SchemaLookup::Unknown,
        }
    }

    pub fn get(&self, node_type: &str) -> Option<&NodeSchema> {
        self.lookup(node_type).found()
    }

    /// The schemas for every invocation node type that appears in `graph`.
    pub fn subset_for(&self, graph: &WorkflowGraph) -> SchemaCatalogue {
        let schemas = graph
            .invocation_nodes()
            .filter_map(|node| self.schemas.get_key_value(node.node_type()))
            .map(|(key, schema)| (key.clone(), schema.clone()))
            .collect();
        Self { schemas }
    }

    pub fn node_types(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
