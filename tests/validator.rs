//! Tests for single-edge validation.
mod common;

use common::*;
use rewire::prelude::*;

fn check(graph: &WorkflowGraph, source: (&str, &str), target: (&str, &str)) -> EdgeCheck {
    let proposal = EdgeProposal::new(source.0, source.1, target.0, target.1);
    validate_edge(graph, &SchemaCatalogue::builtin(), &proposal)
}

fn assert_rejected(result: EdgeCheck, message: &str) {
    assert!(!result.valid);
    assert_eq!(result.error.as_deref(), Some(message));
}

#[test]
fn test_valid_connection() {
    let result = check(&prompt_workflow(), ("n3", "value"), ("n2", "prompt"));
    assert_eq!(result, EdgeCheck::accepted());
    assert!(result.error.is_none());
}

#[test]
fn test_existing_edge_is_still_valid() {
    let result = check(&prompt_workflow(), ("n1", "value"), ("n2", "prompt"));
    assert!(result.valid);
}

#[test]
fn test_self_connection() {
    let result = check(&prompt_workflow(), ("n1", "value"), ("n1", "value"));
    assert_rejected(result, "Cannot connect a node to itself");
}

#[test]
fn test_unknown_node() {
    let result = check(&prompt_workflow(), ("n1", "value"), ("n9", "prompt"));
    assert_rejected(result, "Source or target node not found");
}

#[test]
fn test_notes_node_cannot_connect() {
    let result = check(&text_to_image_workflow(), ("note", "value"), ("pos", "prompt"));
    assert_rejected(result, "Can only connect invocation nodes");
}

#[test]
fn test_missing_output_port() {
    let result = check(&prompt_workflow(), ("n1", "nope"), ("n2", "prompt"));
    assert_rejected(result, "Output field 'nope' not found on source node");
}

#[test]
fn test_missing_input_port() {
    let result = check(&prompt_workflow(), ("n1", "value"), ("n2", "negative"));
    assert_rejected(result, "Input field 'negative' not found on target node");
}

#[test]
fn test_direct_input_rejects_connections() {
    let result = check(&text_to_image_workflow(), ("prompt", "value"), ("model", "model"));
    assert_rejected(result, "This input does not accept connections");
}

#[test]
fn test_type_mismatch_message() {
    let result = check(&text_to_image_workflow(), ("seed", "value"), ("decode", "latents"));
    assert_rejected(
        result,
        "Type mismatch: IntegerField (SINGLE) cannot connect to LatentsField (SINGLE)",
    );
}

#[test]
fn test_integer_widens_into_float_port() {
    let result = check(&text_to_image_workflow(), ("seed", "value"), ("denoise", "cfg_scale"));
    assert!(result.valid);
}

#[test]
fn test_cycle_is_rejected() {
    let result = check(&resize_chain(), ("c", "image"), ("a", "image"));
    assert_rejected(result, "This connection would create a cycle");

    let result = check(&resize_chain(), ("c", "width"), ("a", "width"));
    assert_rejected(result, "This connection would create a cycle");
}

#[test]
fn test_port_checks_run_before_cycle_check() {
    let result = check(&resize_chain(), ("c", "missing"), ("a", "image"));
    assert_rejected(result, "Output field 'missing' not found on source node");
}

#[test]
fn test_forward_skip_is_valid() {
    let result = check(&resize_chain(), ("a", "image"), ("c", "image"));
    assert!(result.valid);
}

#[test]
fn test_unknown_node_type_is_permissive() {
    let mut workflow = prompt_workflow();
    workflow.nodes.push(node("custom", "my_custom_node"));

    assert!(check(&workflow, ("custom", "anything"), ("n2", "whatever")).valid);
    assert!(check(&workflow, ("n2", "conditioning"), ("custom", "x")).valid);
}

#[test]
fn test_permissive_mode_skips_cycle_check() {
    let mut workflow = resize_chain();
    workflow.nodes[0] = node("a", "my_custom_node");
    assert!(check(&workflow, ("c", "image"), ("a", "image")).valid);
}

#[test]
fn test_custom_catalogue_drives_checks() {
    let workflow = prompt_workflow();
    let empty = SchemaCatalogue::new();
    let proposal = EdgeProposal::new("n1", "nope", "n2", "nope");
    assert!(validate_edge(&workflow, &empty, &proposal).valid);

    let only_string = SchemaCatalogue::new().with_schema(
        SchemaCatalogue::builtin()
            .get("string")
            .cloned()
            .expect("builtin string schema"),
    );
    let proposal = EdgeProposal::new("n1", "nope", "n2", "prompt");
    assert!(validate_edge(&workflow, &only_string, &proposal).valid);
}

#[test]
fn test_check_connection_returns_typed_error() {
    let result = check_connection(
        &text_to_image_workflow(),
        &SchemaCatalogue::builtin(),
        &EdgeProposal::new("seed", "value", "decode", "latents"),
    );
    assert_eq!(
        result,
        Err(ConnectionError::TypeMismatch {
            source_type: FieldType::single("IntegerField"),
            target_type: FieldType::single("LatentsField"),
        })
    );
}

#[test]
fn test_edge_check_wire_format() {
    let accepted = serde_json::to_value(EdgeCheck::accepted()).expect("serializes");
    assert_eq!(accepted, serde_json::json!({ "valid": true }));

    let rejected =
        serde_json::to_value(EdgeCheck::rejected(&ConnectionError::Cycle)).expect("serializes");
    assert_eq!(
        rejected,
        serde_json::json!({ "valid": false, "error": "This connection would create a cycle" })
    );
}

#[test]
fn test_flux_nodes_are_checked() {
    let workflow = flux_workflow();
    assert_rejected(
        check(&workflow, ("m", "no_such_port"), ("d", "bogus")),
        "Output field 'no_such_port' not found on source node",
    );
    assert_rejected(
        check(&workflow, ("m", "vae"), ("d", "transformer")),
        "Type mismatch: VAEField (SINGLE) cannot connect to FluxTransformerField (SINGLE)",
    );
    assert!(check(&workflow, ("m", "vae"), ("d", "controlnet_vae")).valid);
    assert!(check(&workflow, ("m", "max_seq_len"), ("d", "width")).valid);
}
