//! 对象缓存插件注册表
//!
//! 各缓存后端通过 `declare_object_cache_plugin!` 在进程启动时登记
//! 构造器，启动流程再按配置的 `cache.type` 查找并实例化。
//! 注册表与后端解耦，新增后端无需改动启动代码。

use crate::cache::traits::ObjectCache;
use crate::errors::Result;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedObjectCacheFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn ObjectCache>>> + Send>>;
pub type ObjectCacheConstructor = Arc<dyn Fn() -> BoxedObjectCacheFuture + Send + Sync>;

static OBJECT_CACHE_REGISTRY: Lazy<RwLock<HashMap<String, ObjectCacheConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// 登记一个缓存后端构造器，同名后端后登记者覆盖先登记者
pub fn register_object_cache_plugin<S: Into<String>>(name: S, constructor: ObjectCacheConstructor) {
    OBJECT_CACHE_REGISTRY
        .write()
        .expect("Cache registry lock poisoned")
        .insert(name.into(), constructor);
}

/// 按名称查找缓存后端构造器
pub fn get_object_cache_plugin(name: &str) -> Option<ObjectCacheConstructor> {
    OBJECT_CACHE_REGISTRY
        .read()
        .expect("Cache registry lock poisoned")
        .get(name)
        .cloned()
}

/// 打印已登记的缓存后端，启动期排查用
pub fn debug_object_cache_registry() {
    let registry = OBJECT_CACHE_REGISTRY
        .read()
        .expect("Cache registry lock poisoned");
    tracing::debug!("{} object cache plugin(s) registered", registry.len());
    for key in registry.keys() {
        tracing::debug!(" - {}", key);
    }
}

#[cfg(test)]
mod tests {
    use super::get_object_cache_plugin;

    // moka 后端由 ctor 在进程启动时登记
    #[test]
    fn test_moka_backend_is_registered() {
        assert!(get_object_cache_plugin("moka").is_some());
        assert!(get_object_cache_plugin("memcached").is_none());
    }
}
