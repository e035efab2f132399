use crate::pattern::{compile, CompileError, Matcher, Pattern};

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use tracing::debug;

static GLOBAL: Lazy<PatternCache> = Lazy::new(PatternCache::new);

/// Memoizes compiled patterns.
///
/// Path patterns are keyed by value and pre-built expressions by identity.
/// Entries are kept for the lifetime of the cache, so it is meant for a
/// bounded set of route patterns.
#[derive(Debug, Default)]
pub struct PatternCache {
    paths: DashMap<Box<str>, Arc<Matcher>>,
    // keyed by `Arc::as_ptr`; the matcher holds the `Arc`, so an address is never reused
    regexes: DashMap<usize, Arc<Matcher>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`match_route`](crate::match_route).
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Returns the cached matcher for `pattern`, compiling it on first use.
    ///
    /// Concurrent callers racing on the same pattern compile it at most once.
    /// A failed compilation is not cached.
    pub fn get_or_compile<'a>(
        &self,
        pattern: impl Into<Pattern<'a>>,
    ) -> Result<Arc<Matcher>, CompileError> {
        let pattern = pattern.into();
        match pattern {
            Pattern::Path(path) => {
                if let Some(m) = self.paths.get(path) {
                    return Ok(Arc::clone(m.value()));
                }
                let m = self.paths.entry(path.into()).or_try_insert_with(|| {
                    debug!(pattern = path, "caching route pattern");
                    compile(pattern).map(Arc::new)
                })?;
                Ok(Arc::clone(m.value()))
            }
            Pattern::Regex(regex) => {
                let key = Arc::as_ptr(regex) as usize;
                if let Some(m) = self.regexes.get(&key) {
                    return Ok(Arc::clone(m.value()));
                }
                let m = self.regexes.entry(key).or_try_insert_with(|| {
                    debug!(regex = regex.as_str(), "caching route expression");
                    compile(pattern).map(Arc::new)
                })?;
                Ok(Arc::clone(m.value()))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len() + self.regexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.regexes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use regex::Regex;
    use std::thread;

    #[test]
    fn same_instance() {
        let cache = PatternCache::new();
        let a = cache.get_or_compile("/users/{id}").unwrap();
        let b = cache.get_or_compile(&String::from("/users/{id}")).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        let c = cache.get_or_compile("/users/{uid}").unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn regex_identity() {
        let cache = PatternCache::new();
        let r1 = Arc::new(Regex::new("^/a$").unwrap());
        let r2 = Arc::new(Regex::new("^/a$").unwrap());

        let a = cache.get_or_compile(&r1).unwrap();
        let b = cache.get_or_compile(&r1.clone()).unwrap();
        let c = cache.get_or_compile(&r2).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn concurrent_insert() {
        let cache = Arc::new(PatternCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_compile("/files/*").unwrap())
            })
            .collect();
        let matchers: Vec<Arc<Matcher>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(cache.len(), 1);
        for m in &matchers[1..] {
            assert!(Arc::ptr_eq(&matchers[0], m));
        }
    }

    #[test]
    fn failed_compile_not_cached() {
        let cache = PatternCache::new();
        let pattern = "/{a}".repeat(20000);

        let err = cache.get_or_compile(&pattern).unwrap_err();
        assert!(err.to_string().starts_with("invalid route pattern"));
        assert!(cache.is_empty());

        assert!(cache.get_or_compile(&pattern).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn global_is_shared() {
        let a = PatternCache::global().get_or_compile("/cache/global/{x}").unwrap();
        let b = PatternCache::global().get_or_compile("/cache/global/{x}").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
