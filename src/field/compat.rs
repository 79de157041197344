//! Port type compatibility.
//!
//! A fixed policy table decides whether a source port may feed a target port.
//! Rules are tried in order and the first one that applies decides.

use super::{
    ANY_FIELD, COLLECTION_FIELD, COLLECTION_ITEM_FIELD, Cardinality, FLOAT_FIELD, FieldType,
    INTEGER_FIELD, STRING_FIELD,
};

/// Two types are equal when their stripped forms match, or when one side's
/// original type matches the other side (or the other side's original type).
pub fn types_equal(first: &FieldType, second: &FieldType) -> bool {
    let first_base = first.base();
    let second_base = second.base();
    if first_base == second_base {
        return true;
    }

    let first_original = first.original_base();
    let second_original = second.original_base();

    if second_original == Some(first_base) || first_original == Some(second_base) {
        return true;
    }
    matches!((first_original, second_original), (Some(a), Some(b)) if a == b)
}

/// Decides whether a value of type `source` may be wired into a port of type `target`.
///
/// Direction matters: `is_compatible(a, b)` and `is_compatible(b, a)` can differ.
pub fn is_compatible(source: &FieldType, target: &FieldType) -> bool {
    if types_equal(source, target) {
        return true;
    }

    if source.batch != target.batch {
        return false;
    }

    if target.is_named(ANY_FIELD) || source.is_named(ANY_FIELD) {
        return true;
    }

    if source.is_named(COLLECTION_ITEM_FIELD) && target.cardinality != Cardinality::Collection {
        return true;
    }

    if source.cardinality == Cardinality::Single && target.is_named(COLLECTION_ITEM_FIELD) {
        return true;
    }

    if target.cardinality == Cardinality::SingleOrCollection && source.name == target.name {
        return true;
    }

    if source.is_named(COLLECTION_FIELD) && target.cardinality != Cardinality::Single {
        return true;
    }
    if target.is_named(COLLECTION_FIELD) && source.cardinality == Cardinality::Collection {
        return true;
    }

    if !cardinality_allows(source.cardinality, target.cardinality) {
        return false;
    }

    if source.name == target.name {
        return true;
    }

    is_widening(&source.name, &target.name)
}

fn cardinality_allows(source: Cardinality, target: Cardinality) -> bool {
    use Cardinality::*;
    matches!(
        (source, target),
        (Single, Single)
            | (Collection, Collection)
            | (Collection, SingleOrCollection)
            | (SingleOrCollection, SingleOrCollection)
            | (Single, SingleOrCollection)
    )
}

fn is_widening(source: &str, target: &str) -> bool {
    matches!(
        (source, target),
        (INTEGER_FIELD, FLOAT_FIELD) | (INTEGER_FIELD, STRING_FIELD) | (FLOAT_FIELD, STRING_FIELD)
    )
}
