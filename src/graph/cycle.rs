//! Cycle detection for a single proposed connection.

use super::GraphEdge;
use ahash::AHashMap;

pub type Adjacency<'a> = AHashMap<&'a str, Vec<&'a str>>;

/// Builds the adjacency list of `node_ids` plus `edges` plus the `candidate` arc.
///
/// Every id in `node_ids` gets an entry even without outgoing arcs. Arc endpoints
/// missing from `node_ids` are added as vertices too.
pub fn build_adjacency<'a, I, E>(
    node_ids: I,
    edges: E,
    candidate: (&'a str, &'a str),
) -> Adjacency<'a>
where
    I: IntoIterator<Item = &'a str>,
    E: IntoIterator<Item = &'a GraphEdge>,
{
    let mut adjacency: Adjacency<'a> = AHashMap::new();
    for id in node_ids {
        adjacency.entry(id).or_default();
    }

    let arcs = edges
        .into_iter()
        .map(|edge| (edge.source.as_str(), edge.target.as_str()))
        .chain(std::iter::once(candidate));

    for (from, to) in arcs {
        adjacency.entry(to).or_default();
        adjacency.entry(from).or_default().push(to);
    }
    adjacency
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Whether the directed graph has any cycle. Iterative DFS, O(V + E).
pub fn has_cycle(adjacency: &Adjacency<'_>) -> bool {
    let mut marks: AHashMap<&str, Mark> = AHashMap::with_capacity(adjacency.len());

    for &root in adjacency.keys() {
        if marks.contains_key(root) {
            continue;
        }

        // (node, index of the next neighbour to visit)
        let mut stack: Vec<(&str, usize)> = vec![(root, 0)];
        marks.insert(root, Mark::Visiting);

        while let Some((node, next)) = stack.last_mut() {
            let neighbours = adjacency.get(*node).map(Vec::as_slice).unwrap_or_default();
            match neighbours.get(*next) {
                Some(&neighbour) => {
                    *next += 1;
                    match marks.get(neighbour) {
                        Some(Mark::Visiting) => return true,
                        Some(Mark::Done) => {}
                        None => {
                            marks.insert(neighbour, Mark::Visiting);
                            stack.push((neighbour, 0));
                        }
                    }
                }
                None => {
                    marks.insert(*node, Mark::Done);
                    stack.pop();
                }
            }
        }
    }
    false
}

/// Whether adding `source -> target` to `existing_edges` over `node_ids` leaves a cycle.
///
/// A self-loop always counts as a cycle. Nothing is cached between calls.
pub fn would_create_cycle<'a, I, E>(
    source: &'a str,
    target: &'a str,
    node_ids: I,
    existing_edges: E,
) -> bool
where
    I: IntoIterator<Item = &'a str>,
    E: IntoIterator<Item = &'a GraphEdge>,
{
    if source == target {
        return true;
    }
    let adjacency = build_adjacency(node_ids, existing_edges, (source, target));
    let cyclic = has_cycle(&adjacency);
    log::trace!(
        "cycle check {} -> {} over {} vertices: {}",
        source,
        target,
        adjacency.len(),
        cyclic
    );
    cyclic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_keeps_isolated_vertices() {
        let no_edges: [&GraphEdge; 0] = [];
        let adjacency = build_adjacency(["a", "b", "lonely"], no_edges, ("a", "b"));
        assert_eq!(adjacency.len(), 3);
        assert!(adjacency["lonely"].is_empty());
        assert_eq!(adjacency["a"], vec!["b"]);
    }

    #[test]
    fn adjacency_adds_unlisted_endpoints() {
        let edge = GraphEdge::connection("e", "x", "out", "y", "in");
        let no_nodes: [&str; 0] = [];
        let adjacency = build_adjacency(no_nodes, [&edge], ("y", "z"));
        assert!(adjacency.contains_key("x"));
        assert!(adjacency.contains_key("z"));
    }

    #[test]
    fn diamond_is_acyclic() {
        let edges = [
            GraphEdge::connection("1", "a", "o", "b", "i"),
            GraphEdge::connection("2", "a", "o", "c", "i"),
            GraphEdge::connection("3", "b", "o", "d", "i"),
        ];
        assert!(!would_create_cycle("c", "d", ["a", "b", "c", "d"], &edges));
    }
}
