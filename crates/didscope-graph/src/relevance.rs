//! Relevance filtering: which documents belong to the analysis?

use std::collections::BTreeSet;

use didscope_types::{Did, DidDocument};

/// The set of identities under analysis.
///
/// Grown while seeds are resolved — each seed contributes its own identifier
/// plus its direct controllers — and frozen before traversal begins.
/// Controllers-of-controllers are not followed; only the first level is
/// analyzed.
#[derive(Clone, Debug, Default)]
pub struct SeedSet {
    dids: BTreeSet<Did>,
}

impl SeedSet {
    /// Create an empty seed set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single identifier.
    pub fn insert(&mut self, did: Did) {
        self.dids.insert(did);
    }

    /// Add a document's identifier and its direct controllers.
    pub fn insert_document(&mut self, document: &DidDocument) {
        self.dids.insert(document.id.clone());
        for controller in &document.controller {
            self.dids.insert(controller.clone());
        }
    }

    /// Membership test for a single identifier.
    pub fn contains(&self, did: &Did) -> bool {
        self.dids.contains(did)
    }

    /// `true` iff the document's own identifier or any of its controllers
    /// is under analysis. Does not expand the set.
    pub fn is_relevant(&self, document: &DidDocument) -> bool {
        self.contains(&document.id) || document.controller.iter().any(|c| self.contains(c))
    }

    /// Number of identifiers in the set.
    pub fn len(&self) -> usize {
        self.dids.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.dids.is_empty()
    }
}
