//! Session Sweep Task
//!
//! Background task that periodically removes expired token entries from
//! the cache. Purely a memory-reclamation measure: reads already treat
//! elapsed entries as absent.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task loops forever, sleeping for the configured interval between
/// sweeps, and takes a write lock on the cache for each pass.
///
/// # Arguments
/// * `cache` - Shared reference to the token cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<CacheStore>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting session sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Session sweep: removed {} expired entries", removed);
            } else {
                debug!("Session sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sweep_removes_expired_entries() {
        let cache = Arc::new(RwLock::new(CacheStore::new()));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.set("expire_soon".to_string(), "u@x.com".to_string(), Some(1));
        }

        let handle = spawn_cleanup_task(cache.clone(), 1);

        // Wait for the entry to expire and the sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        {
            let cache_guard = cache.read().await;
            assert_eq!(cache_guard.len(), 0, "expired entry should be swept");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_preserves_valid_entries() {
        let cache = Arc::new(RwLock::new(CacheStore::new()));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.set("long_lived".to_string(), "u@x.com".to_string(), Some(3600));
            cache_guard.set("forever".to_string(), "v@x.com".to_string(), None);
        }

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut cache_guard = cache.write().await;
            assert_eq!(cache_guard.get("long_lived").as_deref(), Some("u@x.com"));
            assert_eq!(cache_guard.get("forever").as_deref(), Some("v@x.com"));
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_can_be_aborted() {
        let cache = Arc::new(RwLock::new(CacheStore::new()));

        let handle = spawn_cleanup_task(cache, 1);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "task should be finished after abort");
    }
}
