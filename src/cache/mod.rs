//! 对象缓存
//!
//! 通过插件注册表按配置 (`cache.type`) 选择后端，目前提供 moka 与 redis。
//! 缓存只保存字符串，结构化数据由调用方序列化为 JSON。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    /// 后端出错或数据无法解析
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// `ttl` 为 0 时使用 `cache.default_ttl`
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
}

impl<'a> dyn ObjectCache + 'a {
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> CacheResult<T> {
        match self.get_raw(key).await {
            CacheResult::Found(json) => match serde_json::from_str::<T>(&json) {
                Ok(value) => CacheResult::Found(value),
                Err(e) => {
                    tracing::debug!("Dropping undecodable cache entry {}: {}", key, e);
                    self.remove(key).await;
                    CacheResult::ExistsButNoValue
                }
            },
            CacheResult::NotFound => CacheResult::NotFound,
            CacheResult::ExistsButNoValue => CacheResult::ExistsButNoValue,
        }
    }

    pub async fn insert_json<T: Serialize + ?Sized>(&self, key: String, value: &T, ttl: u64) {
        match serde_json::to_string(value) {
            Ok(json) => self.insert_raw(key, json, ttl).await,
            Err(e) => tracing::warn!("Failed to serialize cache entry {}: {}", key, e),
        }
    }
}

/// 声明缓存插件，进程启动时自动注册到插件表
///
/// 插件类型需提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $ty:ident) => {
        ::paste::paste! {
            #[::ctor::ctor]
            unsafe fn [<__register_object_cache_ $ty:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    ::std::sync::Arc::new(|| {
                        Box::pin(async {
                            $ty::new()
                                .map(|cache| Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                                .map_err($crate::errors::PortalError::cache_connection)
                        }) as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
