//! The node and edge sets accumulated by one analysis run.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use didscope_types::{Did, TxHash};

/// Label attached to a graph node, derived from the transaction and the
/// document it carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Annotation {
    /// The transaction embeds a full signing key: first version of the
    /// document.
    Created,
    /// The transaction references an existing signing key: an update.
    Update,
    /// The document has neither controllers nor verification methods.
    Deactivated,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Update => write!(f, "update"),
            Self::Deactivated => write!(f, "deactivated"),
        }
    }
}

/// Per-transaction summary recorded once relevance is established.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
    /// The transaction this node summarizes.
    pub tx: TxHash,
    /// Identifier of the document the transaction carries.
    pub did: Did,
    /// Lamport clock of the transaction.
    pub lamport_clock: u64,
    /// Annotations in derivation order: created/update first, then
    /// deactivated.
    pub annotations: Vec<Annotation>,
}

/// Node and edge sets accumulated by one traversal.
///
/// Backed by BTree collections so iteration — and therefore rendering — is
/// ordered by hash rather than by map insertion order. Edges are directed
/// child → parent: the child causally depends on the parent.
#[derive(Clone, Debug, Default)]
pub struct DocumentGraph {
    nodes: BTreeMap<TxHash, GraphNode>,
    edges: BTreeMap<TxHash, BTreeSet<TxHash>>,
}

impl DocumentGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node. Inserting the same hash twice keeps the first record;
    /// nodes are derived from immutable transactions, so a re-derivation can
    /// never disagree with the stored one.
    pub fn insert_node(&mut self, node: GraphNode) {
        self.nodes.entry(node.tx).or_insert(node);
    }

    /// Record the edge `child -> parent`.
    pub fn insert_edge(&mut self, child: TxHash, parent: TxHash) {
        self.edges.entry(child).or_default().insert(parent);
    }

    /// Returns `true` if a node was recorded for this hash.
    pub fn contains_node(&self, tx: &TxHash) -> bool {
        self.nodes.contains_key(tx)
    }

    /// Look up the node for a hash.
    pub fn node(&self, tx: &TxHash) -> Option<&GraphNode> {
        self.nodes.get(tx)
    }

    /// All nodes in hash order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// All edges grouped by child, in hash order.
    pub fn edges(&self) -> impl Iterator<Item = (&TxHash, &BTreeSet<TxHash>)> {
        self.edges.iter()
    }

    /// Parent set of a child, if any edges were recorded for it.
    pub fn parents_of(&self, child: &TxHash) -> Option<&BTreeSet<TxHash>> {
        self.edges.get(child)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
