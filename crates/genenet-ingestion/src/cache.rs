//! Fetch result cache.
//!
//! Keyed by the normalised gene list (trimmed symbols, input order kept).
//! Values are immutable `Arc<[Edge]>`; an entry is only ever replaced whole.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use genenet_common::GeneSymbol;
use lru::LruCache;

use crate::models::Edge;

pub type CacheKey = Vec<String>;

pub struct EdgeCache {
    inner: Mutex<LruCache<CacheKey, Arc<[Edge]>>>,
}

impl EdgeCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { inner: Mutex::new(LruCache::new(capacity)) }
    }

    pub fn key(genes: &[GeneSymbol]) -> CacheKey {
        genes.iter().map(|g| g.as_str().to_string()).collect()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<[Edge]>> {
        let mut cache = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        cache.get(key).cloned()
    }

    pub fn insert(&self, key: CacheKey, edges: Arc<[Edge]>) {
        let mut cache = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        cache.put(key, edges);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genenet_common::parse_gene_list;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_key_preserves_order() {
        let a = EdgeCache::key(&parse_gene_list("FSHR, LHCGR"));
        let b = EdgeCache::key(&parse_gene_list("LHCGR,FSHR"));
        assert_eq!(a, vec!["FSHR", "LHCGR"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_ignores_surrounding_whitespace() {
        assert_eq!(
            EdgeCache::key(&parse_gene_list(" FSHR ,LHCGR ")),
            EdgeCache::key(&parse_gene_list("FSHR,LHCGR")),
        );
    }

    #[test]
    fn test_insert_replaces_whole_entry() {
        let cache = EdgeCache::new(cap(4));
        let key = vec!["A".to_string()];
        let first: Arc<[Edge]> = vec![Edge::new("A", "B", 0.1)].into();
        cache.insert(key.clone(), first.clone());
        cache.insert(key.clone(), vec![Edge::new("A", "C", 0.2)].into());

        // The earlier Arc is untouched.
        assert_eq!(first[0].target, "B");
        assert_eq!(cache.get(&key).unwrap()[0].target, "C");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_least_recent() {
        let cache = EdgeCache::new(cap(1));
        cache.insert(vec!["A".into()], Vec::<Edge>::new().into());
        cache.insert(vec!["B".into()], Vec::<Edge>::new().into());
        assert!(cache.get(&vec!["A".to_string()]).is_none());
        assert!(cache.get(&vec!["B".to_string()]).is_some());
    }
}
