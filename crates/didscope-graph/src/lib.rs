//! Causal graph analysis of DID documents in a transaction DAG.
//!
//! Given DIDs and/or transaction references, [`GraphAnalyzer`] fetches
//! transactions from a node, walks backward over causal-parent links, keeps
//! the transactions that carry documents for the identities under analysis
//! (the seeds themselves or their direct controllers), and renders the
//! result as a Graphviz digraph.
//!
//! All traversal state is owned by a single `analyze` call; nothing is
//! shared across calls, and a failed call returns no partial graph.

pub mod analyzer;
pub mod decode;
pub mod error;
pub mod graph;
pub mod relevance;
pub mod render;
pub mod seed;

pub use analyzer::GraphAnalyzer;
pub use decode::decode_document;
pub use error::{AnalyzeError, AnalyzeResult};
pub use graph::{Annotation, DocumentGraph, GraphNode};
pub use relevance::SeedSet;
pub use render::render_dot;
pub use seed::ResolvedSeeds;
