use serde::{Deserialize, Serialize};

/// Search-engine policy attached to every field descriptor.
///
/// The value object itself enforces nothing: which combinations can occur is
/// decided by the builder stages reachable for a field's kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchIndexingConfig {
    pub stored: bool,
    #[serde(default = "default_boost")]
    pub boost: f32,
    #[serde(default = "default_indexed")]
    pub indexed: bool,
    #[serde(default)]
    pub tokenized: bool,
}

fn default_boost() -> f32 {
    SearchIndexingConfig::DEFAULT_BOOST
}

fn default_indexed() -> bool {
    true
}

impl SearchIndexingConfig {
    pub const DEFAULT_BOOST: f32 = 1.0;

    /// Creates a config with the given storage flag and all other settings
    /// at their defaults (indexed, not tokenized, boost 1.0).
    #[must_use]
    pub const fn new(stored: bool) -> Self {
        Self {
            stored,
            boost: Self::DEFAULT_BOOST,
            indexed: true,
            tokenized: false,
        }
    }

    /// Config of a field that is neither indexed nor tokenized.
    #[must_use]
    pub const fn not_indexed(stored: bool) -> Self {
        Self {
            stored,
            boost: Self::DEFAULT_BOOST,
            indexed: false,
            tokenized: false,
        }
    }

    /// Returns true if the boost differs from the default.
    #[must_use]
    pub fn is_boosted(&self) -> bool {
        self.boost != Self::DEFAULT_BOOST
    }
}

impl Default for SearchIndexingConfig {
    fn default() -> Self {
        Self::new(false)
    }
}
