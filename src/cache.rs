use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Default time-to-live for cached tag extraction results (24 hours).
pub const DEFAULT_TAG_CACHE_TTL: Duration = Duration::from_secs(86_400);

/// Process-wide cache for tag extraction results, keyed by description digest.
///
/// The cache is advisory: the tag catalog remains the source of truth, so an
/// unavailable or lossy cache must only cost a recomputation. Implementations
/// signal any internal failure by returning `None` from [`TagCache::get`] and
/// silently dropping [`TagCache::set`] writes.
pub trait TagCache: Send + Sync {
    /// Fetch the cached tag-name list for `key`, if present and not expired.
    fn get(&self, key: &str) -> Option<Vec<String>>;
    /// Store a tag-name list under `key` for at most `ttl`.
    fn set(&self, key: &str, value: &[String], ttl: Duration);
    /// Drop every cached entry.
    fn clear(&self);

    /// TTL applied by callers that have no more specific deadline.
    fn default_ttl(&self) -> Duration {
        DEFAULT_TAG_CACHE_TTL
    }
}

struct CacheEntry {
    expires_at: Instant,
    names: Vec<String>,
}

/// In-memory [`TagCache`] shared across request handlers.
pub struct InMemoryTagCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

impl InMemoryTagCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TAG_CACHE_TTL)
    }

    /// Create a cache whose `default_ttl` is `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl: ttl,
        }
    }
}

impl Default for InMemoryTagCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TagCache for InMemoryTagCache {
    fn get(&self, key: &str) -> Option<Vec<String>> {
        // A poisoned lock degrades to a miss rather than failing the request.
        let entries = self.entries.read().ok()?;
        let entry = entries.get(key)?;
        if entry.expires_at <= Instant::now() {
            return None;
        }
        Some(entry.names.clone())
    }

    fn set(&self, key: &str, value: &[String], ttl: Duration) {
        if let Ok(mut entries) = self.entries.write() {
            // Expired entries are evicted lazily, on overwrite.
            entries.retain(|_, entry| entry.expires_at > Instant::now());
            entries.insert(
                key.to_string(),
                CacheEntry {
                    expires_at: Instant::now() + ttl,
                    names: value.to_vec(),
                },
            );
        }
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}
