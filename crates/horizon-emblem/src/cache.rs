//! Brand icon cache.
//!
//! Brand icons are full SVG documents stored in an asset bundle under
//! `icons/<name>.svg`. [`BrandIconCache`] resolves a brand name to the path
//! data of its document's first `path` element and memoizes the outcome.
//! Negative outcomes are cached permanently: the bundle is fixed at build
//! time, so a name that failed once can never start succeeding.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::extract;

/// Key prefix for brand icon assets.
pub const ASSET_PREFIX: &str = "icons/";
/// Key suffix for brand icon assets.
pub const ASSET_SUFFIX: &str = ".svg";

/// Source of raw brand icon bytes.
///
/// Keys follow `icons/<lowercase name>.svg`. Implementations return `None`
/// for unknown keys; a load failure of any other kind should surface as
/// `None` as well, since brand icons are always optional.
pub trait AssetSource: Send + Sync {
    /// Loads the raw bytes stored under `key`.
    fn load(&self, key: &str) -> Option<Cow<'static, [u8]>>;
}

/// The brand icon bundle embedded in the binary.
#[cfg(feature = "bundled")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledAssets;

#[cfg(feature = "bundled")]
impl AssetSource for BundledAssets {
    fn load(&self, key: &str) -> Option<Cow<'static, [u8]>> {
        horizon_emblem_assets::get(key).map(Cow::Borrowed)
    }
}

/// Memoizing store for brand icon path data.
///
/// Lookups are case-insensitive: `"Redis"`, `"REDIS"` and `"redis"` share
/// one entry. Each entry is loaded at most once, even under concurrent
/// first access; late callers for the same name block on the in-flight
/// load instead of starting their own. Absence is an answer, not an error,
/// so [`BrandIconCache::resolve`] returns `Option` and never fails.
pub struct BrandIconCache {
    source: Box<dyn AssetSource>,
    /// One cell per lowercased name. The map lock is only held to fetch or
    /// insert a cell, never while loading or logging.
    entries: RwLock<HashMap<String, Arc<OnceLock<Option<String>>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl BrandIconCache {
    /// Creates a cache over the given asset source.
    pub fn new(source: impl AssetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Creates a cache over the bundled brand icon set.
    #[cfg(feature = "bundled")]
    pub fn with_bundled() -> Self {
        Self::new(BundledAssets)
    }

    /// Resolves a brand icon name to SVG path data.
    ///
    /// Returns the memoized result when the name has been seen before, in
    /// any casing. Blank names resolve to `None` without touching the
    /// store. `None` is definitive: the asset is missing or unusable and
    /// will stay that way for the lifetime of the cache.
    pub fn resolve(&self, name: &str) -> Option<String> {
        if name.trim().is_empty() {
            return None;
        }
        let key = name.to_lowercase();

        let cell = {
            let entries = self.entries.read();
            entries.get(&key).cloned()
        };
        let cell = match cell {
            Some(cell) => cell,
            None => self.entries.write().entry(key.clone()).or_default().clone(),
        };

        if let Some(cached) = cell.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return cached.clone();
        }
        cell.get_or_init(|| {
            self.misses.fetch_add(1, Ordering::Relaxed);
            self.load_path_data(&key)
        })
        .clone()
    }

    /// Loads and parses one asset. Runs at most once per key.
    fn load_path_data(&self, key: &str) -> Option<String> {
        let asset_key = format!("{ASSET_PREFIX}{key}{ASSET_SUFFIX}");
        let Some(bytes) = self.source.load(&asset_key) else {
            tracing::debug!("No brand icon asset at '{}'", asset_key);
            return None;
        };
        match std::str::from_utf8(&bytes) {
            Ok(svg) => extract::path_data(svg),
            Err(e) => {
                tracing::warn!("Brand icon asset '{}' is not valid UTF-8: {}", asset_key, e);
                None
            }
        }
    }

    /// Number of cached entries, including in-flight loads.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Number of lookups answered from a settled entry.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of lookups that ran the loader.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for BrandIconCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrandIconCache")
            .field("entries", &self.len())
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const REDIS_SVG: &[u8] =
        br#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M1 2"/></svg>"#;

    struct FakeAssets {
        files: HashMap<&'static str, &'static [u8]>,
        loads: Arc<AtomicU64>,
    }

    impl FakeAssets {
        fn new(files: &[(&'static str, &'static [u8])]) -> (Self, Arc<AtomicU64>) {
            let loads = Arc::new(AtomicU64::new(0));
            let fake = Self {
                files: files.iter().copied().collect(),
                loads: Arc::clone(&loads),
            };
            (fake, loads)
        }
    }

    impl AssetSource for FakeAssets {
        fn load(&self, key: &str) -> Option<Cow<'static, [u8]>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.files.get(key).map(|bytes| Cow::Borrowed(*bytes))
        }
    }

    #[test]
    fn test_resolve_found() {
        let (fake, _) = FakeAssets::new(&[("icons/redis.svg", REDIS_SVG)]);
        let cache = BrandIconCache::new(fake);
        assert_eq!(cache.resolve("redis").as_deref(), Some("M1 2"));
    }

    #[test]
    fn test_case_insensitive_lookups_share_one_entry() {
        let (fake, loads) = FakeAssets::new(&[("icons/redis.svg", REDIS_SVG)]);
        let cache = BrandIconCache::new(fake);

        for name in ["Redis", "REDIS", "redis", "rEdIs"] {
            assert_eq!(cache.resolve(name).as_deref(), Some("M1 2"));
        }
        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_negative_result_is_memoized() {
        let (fake, loads) = FakeAssets::new(&[]);
        let cache = BrandIconCache::new(fake);

        assert_eq!(cache.resolve("oracle"), None);
        assert_eq!(cache.resolve("oracle"), None);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unparseable_asset_is_memoized_as_absent() {
        let (fake, loads) = FakeAssets::new(&[("icons/bad.svg", b"<svg><path d=\"M1\"></svg>")]);
        let cache = BrandIconCache::new(fake);

        assert_eq!(cache.resolve("bad"), None);
        assert_eq!(cache.resolve("bad"), None);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invalid_utf8_resolves_to_none() {
        let (fake, _) = FakeAssets::new(&[("icons/junk.svg", &[0xff, 0xfe, 0x00, 0x01])]);
        let cache = BrandIconCache::new(fake);
        assert_eq!(cache.resolve("junk"), None);
    }

    #[test]
    fn test_blank_names_never_touch_the_store() {
        let (fake, loads) = FakeAssets::new(&[]);
        let cache = BrandIconCache::new(fake);

        assert_eq!(cache.resolve(""), None);
        assert_eq!(cache.resolve("   "), None);
        assert_eq!(loads.load(Ordering::SeqCst), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_hit_and_miss_counters() {
        let (fake, _) = FakeAssets::new(&[("icons/redis.svg", REDIS_SVG)]);
        let cache = BrandIconCache::new(fake);

        cache.resolve("redis");
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 0);

        cache.resolve("Redis");
        cache.resolve("nope");
        cache.resolve("nope");
        assert_eq!(cache.misses(), 2);
        assert_eq!(cache.hits(), 2);
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        struct SlowAssets {
            loads: Arc<AtomicU64>,
        }

        impl AssetSource for SlowAssets {
            fn load(&self, _key: &str) -> Option<Cow<'static, [u8]>> {
                self.loads.fetch_add(1, Ordering::SeqCst);
                std::thread::sleep(Duration::from_millis(50));
                Some(Cow::Borrowed(REDIS_SVG))
            }
        }

        let loads = Arc::new(AtomicU64::new(0));
        let cache = BrandIconCache::new(SlowAssets {
            loads: Arc::clone(&loads),
        });

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    assert_eq!(cache.resolve("redis").as_deref(), Some("M1 2"));
                });
            }
        });
        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[cfg(feature = "bundled")]
    #[test]
    fn test_bundled_assets_resolve() {
        let cache = BrandIconCache::with_bundled();
        assert!(cache.resolve("redis").is_some());
        assert!(cache.resolve("PostgreSQL").is_some());
        assert_eq!(cache.resolve("not-a-brand"), None);
    }
}
