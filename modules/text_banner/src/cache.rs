//! Render cache for banner fragments.
//!
//! Entries are keyed by template, language and the host's shop context.
//! Any settings write drops every entry of the affected template.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::contract::{LanguageId, ShopContext};

/// Key of one rendered fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderCacheKey {
    pub template: String,
    pub language: LanguageId,
    pub context: ShopContext,
}

impl RenderCacheKey {
    pub fn new(template: impl Into<String>, language: LanguageId, context: ShopContext) -> Self {
        Self {
            template: template.into(),
            language,
            context,
        }
    }
}

/// Bounded LRU of rendered output
pub struct RenderCache {
    entries: Mutex<LruCache<RenderCacheKey, String>>,
}

impl RenderCache {
    /// A zero capacity is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, key: &RenderCacheKey) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    pub fn put(&self, key: RenderCacheKey, value: String) {
        self.entries.lock().put(key, value);
    }

    /// Drop every entry rendered from `template`. Returns how many were removed.
    pub fn invalidate(&self, template: &str) -> usize {
        let mut entries = self.entries.lock();
        let stale: Vec<RenderCacheKey> = entries
            .iter()
            .filter(|(key, _)| key.template == template)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &stale {
            entries.pop(key);
        }
        tracing::debug!(template, removed = stale.len(), "render cache invalidated");
        stale.len()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(template: &str, language: u32, context: &str) -> RenderCacheKey {
        RenderCacheKey::new(template, LanguageId::new(language), ShopContext::new(context))
    }

    #[test]
    fn test_put_then_get() {
        let cache = RenderCache::new(4);
        cache.put(key("textbanner.tpl", 1, "shop-1"), "<div>en</div>".to_string());

        assert_eq!(
            cache.get(&key("textbanner.tpl", 1, "shop-1")).as_deref(),
            Some("<div>en</div>")
        );
        assert!(cache.get(&key("textbanner.tpl", 2, "shop-1")).is_none());
        assert!(cache.get(&key("textbanner.tpl", 1, "shop-2")).is_none());
    }

    #[test]
    fn test_invalidate_only_touches_template() {
        let cache = RenderCache::new(8);
        cache.put(key("textbanner.tpl", 1, "a"), "x".to_string());
        cache.put(key("textbanner.tpl", 2, "b"), "y".to_string());
        cache.put(key("other.tpl", 1, "a"), "z".to_string());

        assert_eq!(cache.invalidate("textbanner.tpl"), 2);

        assert!(cache.get(&key("textbanner.tpl", 1, "a")).is_none());
        assert!(cache.get(&key("textbanner.tpl", 2, "b")).is_none());
        assert_eq!(cache.get(&key("other.tpl", 1, "a")).as_deref(), Some("z"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_least_recent() {
        let cache = RenderCache::new(2);
        cache.put(key("t", 1, ""), "1".to_string());
        cache.put(key("t", 2, ""), "2".to_string());
        cache.put(key("t", 3, ""), "3".to_string());

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&key("t", 1, "")).is_none());
    }

    #[test]
    fn test_zero_capacity_still_caches() {
        let cache = RenderCache::new(0);
        cache.put(key("t", 1, ""), "1".to_string());
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
