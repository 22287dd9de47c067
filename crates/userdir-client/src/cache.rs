use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

struct CacheEntry {
    value: Value,
    tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Query results keyed by operation, invalidated by tag.
pub struct QueryCache {
    enabled: bool,
    entries: HashMap<String, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl QueryCache {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn get<V>(&mut self, key: &str) -> Option<V>
    where
        V: DeserializeOwned,
    {
        if !self.enabled {
            return None;
        }
        let value = self
            .entries
            .get(key)
            .and_then(|entry| serde_json::from_value(entry.value.clone()).ok());
        if value.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        value
    }

    pub fn insert<V>(&mut self, key: impl Into<String>, tags: &[&str], value: &V)
    where
        V: Serialize,
    {
        if !self.enabled {
            return;
        }
        let Ok(value) = serde_json::to_value(value) else {
            return;
        };
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
        );
    }

    /// Drops every entry carrying `tag`. Returns how many were removed.
    pub fn invalidate_tag(&mut self, tag: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.tags.iter().any(|t| t == tag));
        before - self.entries.len()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(true)
    }
}
