//! Indexing-config stages reached through `search_engine()`.

use super::{AlwaysStored, AlwaysTokenized, Draft, General, NotTokenizable};
use crate::field::FieldMetaData;
use crate::indexing::SearchIndexingConfig;
use std::marker::PhantomData;

/// Stored or not stored.
#[derive(Debug)]
pub struct StoredChoice<F> {
    draft: Draft,
    _family: PhantomData<F>,
}

impl<F> StoredChoice<F> {
    pub(super) fn new(draft: Draft) -> Self {
        Self {
            draft,
            _family: PhantomData,
        }
    }

    pub fn stored(self) -> IndexedChoice<F> {
        IndexedChoice::new(self.draft, true)
    }

    pub fn not_stored(self) -> IndexedChoice<F> {
        IndexedChoice::new(self.draft, false)
    }
}

/// Indexed or not indexed. What `indexed()` leads to depends on the family.
#[derive(Debug)]
pub struct IndexedChoice<F> {
    draft: Draft,
    stored: bool,
    _family: PhantomData<F>,
}

impl<F> IndexedChoice<F> {
    pub(super) fn new(draft: Draft, stored: bool) -> Self {
        Self {
            draft,
            stored,
            _family: PhantomData,
        }
    }

    /// Finishes a field the search engine does not index.
    pub fn not_indexed(self) -> FieldMetaData {
        self.draft
            .finish(SearchIndexingConfig::not_indexed(self.stored))
    }

    fn into_boost(self, tokenized: bool) -> BoostStage {
        BoostStage {
            draft: self.draft,
            stored: self.stored,
            tokenized,
        }
    }
}

impl IndexedChoice<General> {
    pub fn indexed(self) -> TokenizeChoice {
        TokenizeChoice {
            draft: self.draft,
            stored: self.stored,
        }
    }
}

impl IndexedChoice<NotTokenizable> {
    pub fn indexed(self) -> BoostStage {
        self.into_boost(false)
    }
}

impl IndexedChoice<AlwaysStored> {
    pub fn indexed(self) -> BoostStage {
        self.into_boost(false)
    }
}

impl IndexedChoice<AlwaysTokenized> {
    pub fn indexed(self) -> BoostStage {
        self.into_boost(true)
    }
}

/// Tokenized or not tokenized; only reachable for general kinds.
#[derive(Debug)]
pub struct TokenizeChoice {
    draft: Draft,
    stored: bool,
}

impl TokenizeChoice {
    pub fn tokenized(self) -> BoostStage {
        BoostStage {
            draft: self.draft,
            stored: self.stored,
            tokenized: true,
        }
    }

    pub fn not_tokenized(self) -> BoostStage {
        BoostStage {
            draft: self.draft,
            stored: self.stored,
            tokenized: false,
        }
    }
}

/// Final step for indexed fields.
#[derive(Debug)]
pub struct BoostStage {
    draft: Draft,
    stored: bool,
    tokenized: bool,
}

impl BoostStage {
    pub fn with_default_boosting(self) -> FieldMetaData {
        self.with_boosting(SearchIndexingConfig::DEFAULT_BOOST)
    }

    pub fn with_boosting(self, boost: f32) -> FieldMetaData {
        self.draft.finish(SearchIndexingConfig {
            stored: self.stored,
            boost,
            indexed: true,
            tokenized: self.tokenized,
        })
    }
}

/// Dependent object groups are never indexed; only storage is chosen.
#[derive(Debug)]
pub struct CompoundStoredChoice {
    draft: Draft,
}

impl CompoundStoredChoice {
    pub(super) fn new(draft: Draft) -> Self {
        Self { draft }
    }

    pub fn stored(self) -> FieldMetaData {
        self.draft.finish(SearchIndexingConfig::not_indexed(true))
    }

    pub fn not_stored(self) -> FieldMetaData {
        self.draft.finish(SearchIndexingConfig::not_indexed(false))
    }
}
