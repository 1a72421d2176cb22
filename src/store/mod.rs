//! High-score persistence.
//!
//! The session only needs two calls: read the best score once at startup and
//! write it back when a finished game beats it. `HighScoreStore` is that
//! contract. `KeyedHighScore` implements it over any `KeyValueStore`,
//! storing the score as base-10 text under [`HIGH_SCORE_KEY`].
//!
//! Storage problems never stop a game: an unreadable value reads as 0 and a
//! failed write is logged and dropped.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Key the high score lives under.
pub const HIGH_SCORE_KEY: &str = "wordMemoryHighScore";

/// Result type alias using [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures from a key-value backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not a JSON string map: {0}")]
    Json(#[from] serde_json::Error),
}

/// A string key-value backend (browser local storage, a file, a map).
pub trait KeyValueStore {
    /// Read the value under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Contract the session uses for the best score.
pub trait HighScoreStore {
    /// The stored best score; 0 when absent or unreadable.
    fn read(&self) -> u32;

    /// Persist a new best score. Last write wins.
    fn write(&mut self, score: u32);
}

/// [`HighScoreStore`] over a [`KeyValueStore`].
///
/// ## Example
///
/// ```
/// use word_memory::store::{HighScoreStore, KeyedHighScore, MemoryStore};
///
/// let mut store = KeyedHighScore::new(MemoryStore::new());
/// assert_eq!(store.read(), 0);
///
/// store.write(70);
/// assert_eq!(store.read(), 70);
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeyedHighScore<K> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> KeyedHighScore<K> {
    /// Use the standard [`HIGH_SCORE_KEY`].
    pub fn new(backend: K) -> Self {
        Self::with_key(backend, HIGH_SCORE_KEY)
    }

    /// Use a custom key.
    pub fn with_key(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &K {
        &self.backend
    }
}

impl<K: KeyValueStore> HighScoreStore for KeyedHighScore<K> {
    fn read(&self) -> u32 {
        match self.backend.get(&self.key) {
            Ok(Some(raw)) => parse_score(&raw).unwrap_or_else(|| {
                tracing::debug!(
                    key = %self.key,
                    value = %raw,
                    "stored high score is malformed, using 0"
                );
                0
            }),
            Ok(None) => 0,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to read high score, using 0");
                0
            }
        }
    }

    fn write(&mut self, score: u32) {
        if let Err(err) = self.backend.set(&self.key, &score.to_string()) {
            tracing::warn!(key = %self.key, score, error = %err, "failed to persist high score");
        }
    }
}

/// Parse a stored score. Negative, fractional or non-numeric text is rejected.
fn parse_score(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Keeps the best score in memory only.
impl HighScoreStore for u32 {
    fn read(&self) -> u32 {
        *self
    }

    fn write(&mut self, score: u32) {
        *self = score;
    }
}
