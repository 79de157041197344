use serde::{Deserialize, Serialize};
use std::fmt;

pub mod compat;

pub use compat::{is_compatible, types_equal};

/// Type name that every port accepts and that can feed every port.
pub const ANY_FIELD: &str = "AnyField";
/// Type name of a single element taken out of a collection.
pub const COLLECTION_ITEM_FIELD: &str = "CollectionItemField";
/// Type name of an untyped collection.
pub const COLLECTION_FIELD: &str = "CollectionField";
pub const INTEGER_FIELD: &str = "IntegerField";
pub const FLOAT_FIELD: &str = "FloatField";
pub const STRING_FIELD: &str = "StringField";

/// How many values a port carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cardinality {
    Single,
    Collection,
    SingleOrCollection,
}

impl Cardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::Single => "SINGLE",
            Cardinality::Collection => "COLLECTION",
            Cardinality::SingleOrCollection => "SINGLE_OR_COLLECTION",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The data type of a node port.
///
/// `original_type` names the underlying type a port was derived from, so two
/// differently labelled types can still be recognised as the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldType {
    pub name: String,
    pub cardinality: Cardinality,
    pub batch: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_type: Option<Box<FieldType>>,
}

/// A `FieldType` with its alias stripped off, used for equality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseType<'a> {
    pub name: &'a str,
    pub cardinality: Cardinality,
    pub batch: bool,
}

impl FieldType {
    pub fn new(name: impl Into<String>, cardinality: Cardinality) -> Self {
        Self {
            name: name.into(),
            cardinality,
            batch: false,
            original_type: None,
        }
    }

    pub fn single(name: impl Into<String>) -> Self {
        Self::new(name, Cardinality::Single)
    }

    pub fn collection(name: impl Into<String>) -> Self {
        Self::new(name, Cardinality::Collection)
    }

    pub fn single_or_collection(name: impl Into<String>) -> Self {
        Self::new(name, Cardinality::SingleOrCollection)
    }

    /// Marks the type as a batch type.
    pub fn batched(mut self) -> Self {
        self.batch = true;
        self
    }

    /// Attaches the underlying type this one aliases.
    pub fn aliasing(mut self, original: FieldType) -> Self {
        self.original_type = Some(Box::new(original));
        self
    }

    pub fn base(&self) -> BaseType<'_> {
        BaseType {
            name: &self.name,
            cardinality: self.cardinality,
            batch: self.batch,
        }
    }

    /// The stripped form of the aliased type, if there is one.
    pub fn original_base(&self) -> Option<BaseType<'_>> {
        self.original_type.as_deref().map(FieldType::base)
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.cardinality)
    }
}
