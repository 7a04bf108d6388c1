use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::{Expiry, future::Cache};
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

/// 值与其存活秒数
#[derive(Clone)]
struct Entry {
    value: String,
    ttl: u64,
}

/// 按条目 TTL 过期
struct EntryExpiry;

impl Expiry<String, Entry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(Duration::from_secs(entry.ttl))
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(Duration::from_secs(entry.ttl))
    }
}

pub struct MokaCacheWrapper {
    inner: Cache<String, Entry>,
    default_ttl: u64,
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        Ok(Self::with_capacity(
            config.cache.memory.max_capacity,
            config.cache.default_ttl,
        ))
    }

    pub fn with_capacity(max_capacity: u64, default_ttl: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(EntryExpiry)
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}, default TTL: {}s",
            max_capacity, default_ttl
        );
        Self { inner, default_ttl }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some(entry) => CacheResult::Found(entry.value),
            None => {
                debug!("Key not found in cache: {}", key);
                CacheResult::NotFound
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let ttl = if ttl == 0 { self.default_ttl } else { ttl };
        self.inner.insert(key, Entry { value, ttl }).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let cache = MokaCacheWrapper::with_capacity(100, 60);
        assert_eq!(cache.get_raw("k").await, CacheResult::NotFound);

        cache.insert_raw("k".into(), "v".into(), 0).await;
        assert_eq!(cache.get_raw("k").await, CacheResult::Found("v".to_string()));

        cache.insert_raw("k".into(), "v2".into(), 30).await;
        assert_eq!(cache.get_raw("k").await, CacheResult::Found("v2".to_string()));

        cache.remove("k").await;
        assert_eq!(cache.get_raw("k").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_json_helpers() {
        let cache: Box<dyn ObjectCache> = Box::new(MokaCacheWrapper::with_capacity(100, 60));
        cache
            .insert_json("list".into(), &vec![1_i64, 2, 3], 0)
            .await;
        assert_eq!(
            cache.get_json::<Vec<i64>>("list").await,
            CacheResult::Found(vec![1, 2, 3])
        );

        cache.insert_raw("bad".into(), "{not json".into(), 0).await;
        assert_eq!(
            cache.get_json::<Vec<i64>>("bad").await,
            CacheResult::ExistsButNoValue
        );
        assert_eq!(cache.get_raw("bad").await, CacheResult::NotFound);
    }

    /// 通过非 'static 的借用调用 JSON 辅助方法
    async fn round_trip(cache: &dyn ObjectCache, key: &str) -> CacheResult<String> {
        cache.insert_json(key.to_string(), "CS101", 0).await;
        cache.get_json::<String>(key).await
    }

    #[tokio::test]
    async fn test_json_helpers_on_borrowed_cache() {
        let cache = MokaCacheWrapper::with_capacity(100, 60);
        assert_eq!(
            round_trip(&cache, "expanded").await,
            CacheResult::Found("CS101".to_string())
        );
    }
}
