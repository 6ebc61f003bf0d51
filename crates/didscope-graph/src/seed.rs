//! Seed resolution: map input strings to traversal roots and the seed set.

use didscope_client::{DocumentDirectory, TransactionStore};
use didscope_types::{Did, TxHash};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::decode::read_document;
use crate::error::{AnalyzeError, AnalyzeResult};
use crate::relevance::SeedSet;

/// Traversal roots plus the frozen identity set produced from the seeds.
#[derive(Clone, Debug)]
pub struct ResolvedSeeds {
    /// Transaction references to start the backward walk from, in input
    /// order.
    pub roots: Vec<TxHash>,
    /// The identities under analysis: every seed document plus its direct
    /// controllers.
    pub seed_set: SeedSet,
}

/// Resolve each seed to traversal roots, accumulating the seed set.
///
/// A seed starting with `did:` is resolved through the document directory
/// and contributes its source transactions as roots. Any other seed must be
/// a hex transaction reference whose transaction carries a DID document.
/// The first failure aborts resolution; no partial result is produced.
pub(crate) async fn resolve_seeds<S, D>(
    store: &S,
    directory: &D,
    seeds: &[String],
    cancel: &CancellationToken,
) -> AnalyzeResult<ResolvedSeeds>
where
    S: TransactionStore,
    D: DocumentDirectory,
{
    let mut roots = Vec::new();
    let mut seed_set = SeedSet::new();

    for seed in seeds {
        if cancel.is_cancelled() {
            return Err(AnalyzeError::Cancelled);
        }

        if seed.starts_with("did:") {
            let id = Did::parse(seed).map_err(|source| AnalyzeError::InvalidReference {
                input: seed.clone(),
                source,
            })?;
            let resolved = tokio::select! {
                _ = cancel.cancelled() => return Err(AnalyzeError::Cancelled),
                res = directory.resolve_document(&id) => res.map_err(|source| {
                    AnalyzeError::Resolve { id: id.clone(), source }
                })?,
            };
            debug!(%id, roots = resolved.source_transactions.len(), "resolved seed DID");
            roots.extend(resolved.source_transactions.iter().copied());
            seed_set.insert_document(&resolved.document);
        } else {
            let tx_ref = TxHash::from_hex(seed).map_err(|source| AnalyzeError::InvalidReference {
                input: seed.clone(),
                source,
            })?;
            let (_, document) = read_document(store, tx_ref, None, cancel).await?;
            let document = document.ok_or(AnalyzeError::NotADocument { tx: tx_ref })?;
            debug!(tx = %tx_ref.short_hex(), id = %document.id, "resolved seed transaction");
            roots.push(tx_ref);
            seed_set.insert_document(&document);
        }
    }

    Ok(ResolvedSeeds { roots, seed_set })
}
