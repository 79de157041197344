//! Tests for hint selection.
mod common;

use common::*;
use rewire::prelude::*;

fn pipeline_quiz() -> Quiz {
    quiz(text_to_image_workflow(), &["e_pos", "e_latents", "e_prompt"], &[])
}

#[test]
fn test_first_hint_uses_listed_order() {
    let hint = next_hint::<&str>(&pipeline_quiz(), &[]).expect("hint available");
    assert_eq!(
        hint,
        HintInfo {
            source_node_id: "pos".to_string(),
            source_node_label: "Positive".to_string(),
            source_field_name: "conditioning".to_string(),
            target_node_id: "denoise".to_string(),
            target_node_label: "denoise_latents".to_string(),
            target_field_name: "positive_conditioning".to_string(),
        }
    );
}

#[test]
fn test_hints_advance_as_edges_connect() {
    let quiz = pipeline_quiz();

    let second = next_hint(&quiz, &["e_pos"]).expect("second hint");
    assert_eq!(second.source_node_id, "denoise");
    assert_eq!(second.target_node_label, "l2i");

    let third = next_hint(&quiz, &["e_latents", "e_pos"]).expect("third hint");
    assert_eq!(third.source_node_label, "Prompt Text");
    assert_eq!(third.target_field_name, "prompt");

    assert_eq!(next_hint(&quiz, &["e_pos", "e_latents", "e_prompt"]), None);
}

#[test]
fn test_unrelated_connected_ids_are_ignored() {
    let quiz = pipeline_quiz();
    let connected: Vec<String> = vec!["e_unet".to_string(), "e_vae".to_string()];
    let hint = next_hint(&quiz, connected.as_slice()).expect("hint available");
    assert_eq!(hint.source_node_id, "pos");

    let everything: Vec<String> = quiz.workflow.edges.iter().map(|e| e.id.clone()).collect();
    assert!(next_hint(&quiz, everything.as_slice()).is_none());
}

#[test]
fn test_no_hidden_edges() {
    let quiz = quiz(prompt_workflow(), &[], &[]);
    assert!(next_hint::<&str>(&quiz, &[]).is_none());
}

#[test]
fn test_unknown_hidden_edge_gives_no_hint() {
    let quiz = quiz(prompt_workflow(), &["ghost", "e1"], &[]);
    assert!(next_hint::<&str>(&quiz, &[]).is_none());
    assert!(next_hint(&quiz, &["ghost"]).is_some());
}

#[test]
fn test_edge_touching_notes_gives_no_hint() {
    let mut workflow = prompt_workflow();
    workflow.nodes.push(GraphNode::notes("memo"));
    workflow.edges.push(edge("to_memo", "n1", "value", "memo", "text"));

    let quiz = quiz(workflow, &["to_memo"], &[]);
    assert!(next_hint::<&str>(&quiz, &[]).is_none());
}

#[test]
fn test_hint_wire_format() {
    let quiz = quiz(prompt_workflow(), &["e1"], &[]);
    let hint = next_hint::<&str>(&quiz, &[]).expect("hint available");
    let json = serde_json::to_value(&hint).expect("serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "sourceNodeId": "n1",
            "sourceNodeLabel": "string",
            "sourceFieldName": "value",
            "targetNodeId": "n2",
            "targetNodeLabel": "compel",
            "targetFieldName": "prompt",
        })
    );
}
