//! Common test utilities for building workflows and quizzes.

use rewire::prelude::*;

#[allow(dead_code)]
pub fn node(id: &str, node_type: &str) -> GraphNode {
    GraphNode::invocation(id, node_type)
}

#[allow(dead_code)]
pub fn edge(
    id: &str,
    source: &str,
    source_handle: &str,
    target: &str,
    target_handle: &str,
) -> GraphEdge {
    GraphEdge::connection(id, source, source_handle, target, target_handle)
}

#[allow(dead_code)]
pub fn quiz(workflow: WorkflowGraph, hidden_edges: &[&str], hidden_nodes: &[&str]) -> Quiz {
    Quiz {
        id: "test-quiz".to_string(),
        name: "Test Quiz".to_string(),
        description: String::new(),
        difficulty: Difficulty::Easy,
        workflow,
        hidden: HiddenAnswerSet {
            edges: hidden_edges.iter().map(|s| s.to_string()).collect(),
            nodes: hidden_nodes.iter().map(|s| s.to_string()).collect(),
        },
    }
}

/// `n1` (string) feeds `n2` (compel) through `value -> prompt`. A spare string node
/// `n3` can legally feed the same input.
#[allow(dead_code)]
pub fn prompt_workflow() -> WorkflowGraph {
    WorkflowGraph::new(
        vec![
            node("n1", "string"),
            node("n2", "compel"),
            node("n3", "string"),
        ],
        vec![edge("e1", "n1", "value", "n2", "prompt")],
    )
}

/// A full text-to-image pipeline built from the built-in node types.
#[allow(dead_code)]
pub fn text_to_image_workflow() -> WorkflowGraph {
    WorkflowGraph::new(
        vec![
            node("model", "main_model_loader").with_label("Model"),
            node("prompt", "string").with_label("Prompt Text"),
            node("pos", "compel").with_label("Positive"),
            node("neg", "compel"),
            node("seed", "integer"),
            node("noise", "noise"),
            node("denoise", "denoise_latents"),
            node("decode", "l2i"),
            node("save", "save_image"),
            GraphNode::notes("note").with_label("Remember the VAE"),
        ],
        vec![
            edge("e_prompt", "prompt", "value", "pos", "prompt"),
            edge("e_clip_pos", "model", "clip", "pos", "clip"),
            edge("e_clip_neg", "model", "clip", "neg", "clip"),
            edge("e_unet", "model", "unet", "denoise", "unet"),
            edge("e_pos", "pos", "conditioning", "denoise", "positive_conditioning"),
            edge("e_neg", "neg", "conditioning", "denoise", "negative_conditioning"),
            edge("e_seed", "seed", "value", "noise", "seed"),
            edge("e_noise", "noise", "noise", "denoise", "noise"),
            edge("e_latents", "denoise", "latents", "decode", "latents"),
            edge("e_vae", "model", "vae", "decode", "vae"),
            edge("e_image", "decode", "image", "save", "image"),
        ],
    )
}

/// Two hidden integer nodes feeding the noise node's seed and width.
#[allow(dead_code)]
pub fn hidden_integers_quiz() -> Quiz {
    let workflow = WorkflowGraph::new(
        vec![
            node("i1", "integer"),
            node("i2", "integer"),
            node("noise", "noise"),
        ],
        vec![
            edge("h1", "i1", "value", "noise", "seed"),
            edge("h2", "i2", "value", "noise", "width"),
        ],
    );
    quiz(workflow, &["h1", "h2"], &["i1", "i2"])
}

/// Three resize nodes chained `a -> b -> c` through their image ports.
#[allow(dead_code)]
pub fn resize_chain() -> WorkflowGraph {
    WorkflowGraph::new(
        vec![
            node("a", "img_resize"),
            node("b", "img_resize"),
            node("c", "img_resize"),
        ],
        vec![
            edge("ab", "a", "image", "b", "image"),
            edge("bc", "b", "image", "c", "image"),
        ],
    )
}

#[allow(dead_code)]
pub const QUIZ_JSON: &str = r#"{
    "id": "basic-txt2img",
    "name": "Basic Text to Image",
    "description": "Reconnect the prompt",
    "difficulty": "medium",
    "workflow": {
        "name": "txt2img",
        "author": "tests",
        "meta": { "category": "default", "version": "3.0.0" },
        "nodes": [
            { "id": "n1", "type": "invocation", "data": { "id": "n1", "type": "string", "label": "", "isOpen": true }, "position": { "x": 0, "y": 0 } },
            { "id": "n2", "type": "invocation", "data": { "id": "n2", "type": "compel", "label": "Encoder" }, "position": { "x": 300, "y": 0 } },
            { "id": "n3", "type": "notes", "data": { "id": "n3", "type": "notes", "label": "Note", "notes": "hi" }, "position": { "x": 0, "y": 200 } }
        ],
        "edges": [
            { "id": "e1", "type": "default", "source": "n1", "sourceHandle": "value", "target": "n2", "targetHandle": "prompt" },
            { "id": "e2", "type": "collapsed", "source": "n1", "target": "n2" }
        ]
    },
    "hiddenEdges": ["e1"]
}"#;

/// A FLUX loader `m` wired into a FLUX denoiser `d` through the transformer.
#[allow(dead_code)]
pub fn flux_workflow() -> WorkflowGraph {
    WorkflowGraph::new(
        vec![node("m", "flux_model_loader"), node("d", "flux_denoise")],
        vec![edge("t", "m", "transformer", "d", "transformer")],
    )
}
