//! Graphviz rendering of an analyzed document graph.

use crate::graph::DocumentGraph;

/// Serialize the graph as a Graphviz `digraph`.
///
/// One declaration line per node (transaction hash, document identifier,
/// Lamport clock, annotations when present) followed by one `child ->
/// parent` line per edge. Nodes and edges are emitted in hash order, so the
/// output is byte reproducible for identical input data.
pub fn render_dot(graph: &DocumentGraph) -> String {
    let mut out = String::from("digraph {\n");
    for node in graph.nodes() {
        let mut label = vec![
            node.tx.to_hex(),
            node.did.to_string(),
            format!("LC={}", node.lamport_clock),
        ];
        if !node.annotations.is_empty() {
            let notes: Vec<String> = node.annotations.iter().map(ToString::to_string).collect();
            label.push(notes.join(","));
        }
        out.push_str(&format!(
            "\tnode_{} [label=\"{}\"]\n",
            node.tx,
            label.join("\\n")
        ));
    }
    for (child, parents) in graph.edges() {
        for parent in parents {
            out.push_str(&format!("\tnode_{child} -> node_{parent}\n"));
        }
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Annotation, GraphNode};
    use didscope_types::{Did, TxHash};

    fn txh(byte: u8) -> TxHash {
        TxHash::from_raw([byte; 32])
    }

    fn make_node(byte: u8, clock: u64, annotations: Vec<Annotation>) -> GraphNode {
        GraphNode {
            tx: txh(byte),
            did: Did::parse("did:example:alice").unwrap(),
            lamport_clock: clock,
            annotations,
        }
    }

    #[test]
    fn empty_graph_renders_empty_digraph() {
        assert_eq!(render_dot(&DocumentGraph::new()), "digraph {\n}\n");
    }

    #[test]
    fn node_line_contains_hash_did_clock_and_annotations() {
        let mut graph = DocumentGraph::new();
        graph.insert_node(make_node(1, 4, vec![Annotation::Created, Annotation::Deactivated]));
        let dot = render_dot(&graph);
        let expected = format!(
            "digraph {{\n\tnode_{h} [label=\"{h}\\ndid:example:alice\\nLC=4\\ncreated,deactivated\"]\n}}\n",
            h = "01".repeat(32)
        );
        assert_eq!(dot, expected);
    }

    #[test]
    fn annotation_free_node_has_no_trailing_label_part() {
        let mut graph = DocumentGraph::new();
        graph.insert_node(make_node(1, 0, vec![]));
        let dot = render_dot(&graph);
        assert!(dot.contains("LC=0\""));
    }

    #[test]
    fn edges_render_child_to_parent() {
        let mut graph = DocumentGraph::new();
        graph.insert_node(make_node(1, 1, vec![]));
        graph.insert_node(make_node(0, 0, vec![]));
        graph.insert_edge(txh(1), txh(0));
        let dot = render_dot(&graph);
        let edge_line = format!("\tnode_{} -> node_{}\n", "01".repeat(32), "00".repeat(32));
        assert!(dot.contains(&edge_line));
    }

    #[test]
    fn output_is_sorted_by_hash() {
        let mut graph = DocumentGraph::new();
        graph.insert_node(make_node(2, 0, vec![]));
        graph.insert_node(make_node(1, 0, vec![]));
        let dot = render_dot(&graph);
        let first = dot.find(&"01".repeat(32)).unwrap();
        let second = dot.find(&"02".repeat(32)).unwrap();
        assert!(first < second);
    }

    #[test]
    fn rendering_is_reproducible() {
        let mut graph = DocumentGraph::new();
        for byte in [5u8, 3, 9, 1] {
            graph.insert_node(make_node(byte, byte as u64, vec![Annotation::Update]));
        }
        graph.insert_edge(txh(5), txh(3));
        graph.insert_edge(txh(9), txh(1));
        assert_eq!(render_dot(&graph), render_dot(&graph.clone()));
    }
}
