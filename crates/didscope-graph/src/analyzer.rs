//! The causal traversal engine and the analyzer entry point.

use std::collections::{HashSet, VecDeque};

use didscope_client::{DocumentDirectory, TransactionStore};
use didscope_types::TxHash;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::decode::read_document;
use crate::error::{AnalyzeError, AnalyzeResult};
use crate::graph::{Annotation, DocumentGraph, GraphNode};
use crate::relevance::SeedSet;
use crate::render::render_dot;
use crate::seed::{resolve_seeds, ResolvedSeeds};

/// Reconstructs the causal history of DID documents and renders it as a
/// Graphviz digraph.
///
/// Seeds may be DIDs (resolved through the document directory) or hex
/// transaction references (which must carry a DID document). The analyzer
/// walks backward over causal-parent links, keeping transactions whose
/// documents belong to the seed identities or their direct controllers.
pub struct GraphAnalyzer<S, D> {
    store: S,
    directory: D,
}

impl<S, D> GraphAnalyzer<S, D>
where
    S: TransactionStore,
    D: DocumentDirectory,
{
    /// Create an analyzer over the given capabilities.
    pub fn new(store: S, directory: D) -> Self {
        Self { store, directory }
    }

    /// Analyze the given seeds and render the resulting graph as dot text.
    ///
    /// Returns the complete rendered graph or the first error; never a
    /// partial graph.
    pub async fn analyze(
        &self,
        seeds: &[String],
        cancel: &CancellationToken,
    ) -> AnalyzeResult<String> {
        let graph = self.analyze_graph(seeds, cancel).await?;
        Ok(render_dot(&graph))
    }

    /// Analyze the given seeds and return the raw node/edge sets.
    pub async fn analyze_graph(
        &self,
        seeds: &[String],
        cancel: &CancellationToken,
    ) -> AnalyzeResult<DocumentGraph> {
        let ResolvedSeeds { roots, seed_set } =
            resolve_seeds(&self.store, &self.directory, seeds, cancel).await?;

        let mut traversal = Traversal {
            store: &self.store,
            seed_set: &seed_set,
            cancel,
            visited: HashSet::new(),
            graph: DocumentGraph::new(),
        };
        for root in &roots {
            traversal.walk(*root).await?;
        }

        info!(
            nodes = traversal.graph.node_count(),
            edges = traversal.graph.edge_count(),
            "analysis complete"
        );
        Ok(traversal.graph)
    }
}

/// State of one traversal, exclusively owned by one analysis call and
/// discarded on error.
struct Traversal<'a, S> {
    store: &'a S,
    seed_set: &'a SeedSet,
    cancel: &'a CancellationToken,
    visited: HashSet<TxHash>,
    graph: DocumentGraph,
}

impl<S: TransactionStore> Traversal<'_, S> {
    /// Walk backward from `root` through causal parents, collecting relevant
    /// transactions.
    ///
    /// The worklist carries `(referrer, tx)` pairs, where `referrer` is the
    /// child whose parent link led to `tx`. The visited gate guarantees each
    /// transaction is fetched and decoded at most once per analysis, even
    /// when shared ancestors are reachable over many paths; revisits may
    /// only contribute a new edge.
    async fn walk(&mut self, root: TxHash) -> AnalyzeResult<()> {
        let mut pending: VecDeque<(Option<TxHash>, TxHash)> = VecDeque::new();
        pending.push_back((None, root));

        while let Some((referrer, tx_ref)) = pending.pop_front() {
            if self.cancel.is_cancelled() {
                return Err(AnalyzeError::Cancelled);
            }

            if self.visited.contains(&tx_ref) {
                // Already fully processed. Edges may only connect two
                // in-scope transactions, so require an existing node.
                if let Some(referrer) = referrer {
                    if self.graph.contains_node(&tx_ref) {
                        self.graph.insert_edge(referrer, tx_ref);
                    }
                }
                continue;
            }

            let (tx, document) =
                read_document(self.store, tx_ref, referrer, self.cancel).await?;
            self.visited.insert(tx_ref);

            let Some(document) = document else {
                // Not a DID document: a dead end for this walk, even if the
                // transaction has parents of its own.
                debug!(tx = %tx_ref.short_hex(), "skipping non-document transaction");
                continue;
            };

            if !self.seed_set.is_relevant(&document) {
                // Unrelated identity that happens to share ancestry; its
                // parents are not visited.
                debug!(tx = %tx_ref.short_hex(), id = %document.id, "pruning irrelevant document");
                continue;
            }

            let mut annotations = Vec::new();
            if tx.signing_key.is_some() {
                annotations.push(Annotation::Created);
            } else if tx.signing_key_id.is_some() {
                annotations.push(Annotation::Update);
            }
            if document.is_deactivated() {
                annotations.push(Annotation::Deactivated);
            }

            self.graph.insert_node(GraphNode {
                tx: tx_ref,
                did: document.id.clone(),
                lamport_clock: tx.lamport_clock,
                annotations,
            });
            if let Some(referrer) = referrer {
                self.graph.insert_edge(referrer, tx_ref);
            }

            for prev in &tx.prevs {
                pending.push_back((Some(tx_ref), *prev));
            }
        }

        Ok(())
    }
}
