use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::error::AppResult;
use crate::models::{table_from_name, MasterRecordModel};
use crate::proto::master_data::MasterTable;
use crate::realtime::{ChangeAction, ChangeHub, ALL_TABLES};

const TTL: Duration = Duration::from_secs(600);

/// Cached dropdown options per lookup table.
#[derive(Clone)]
pub struct LookupCache {
    options: Cache<MasterTable, Arc<Vec<MasterRecordModel>>>,
    /// Bumped before every invalidation.
    generation: Arc<AtomicU64>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self {
            options: Cache::builder().max_capacity(16).time_to_live(TTL).build(),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn get_or_load<F, Fut>(
        &self,
        table: MasterTable,
        load: F,
    ) -> AppResult<Arc<Vec<MasterRecordModel>>>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = AppResult<Vec<MasterRecordModel>>>,
    {
        if let Some(records) = self.options.get(&table).await {
            return Ok(records);
        }
        let started = self.generation.load(Ordering::Acquire);
        let records = Arc::new(load().await?);
        self.options.insert(table, records.clone()).await;
        // An invalidation that raced the load may have missed this entry.
        if self.generation.load(Ordering::Acquire) != started {
            self.options.invalidate(&table).await;
        }
        Ok(records)
    }

    pub async fn invalidate(&self, table: MasterTable) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.options.invalidate(&table).await;
    }

    pub fn invalidate_all(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.options.invalidate_all();
    }

    /// Drops cached options whenever the change feed reports a write to their table.
    pub fn spawn_invalidator(&self, hub: &ChangeHub) -> JoinHandle<()> {
        let cache = self.clone();
        let mut rx = hub.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        if event.action == ChangeAction::Resync && event.table == ALL_TABLES {
                            cache.invalidate_all();
                        } else if let Some(table) = table_from_name(&event.table) {
                            cache.invalidate(table).await;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("Lookup cache lagged by {} events, clearing", skipped);
                        cache.invalidate_all();
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::realtime::ChangeEvent;
    use std::sync::atomic::AtomicUsize;

    fn record(name: &str) -> MasterRecordModel {
        MasterRecordModel {
            id: name.to_string(),
            name: name.to_string(),
            description: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[tokio::test]
    async fn test_loads_once_until_invalidated() {
        let cache = LookupCache::new();
        let counter = AtomicUsize::new(0);
        let loads = &counter;
        let load = move || async move {
            loads.fetch_add(1, Ordering::SeqCst);
            Ok(vec![record("Tablet")])
        };

        let first = cache.get_or_load(MasterTable::Units, load).await.unwrap();
        let second = cache.get_or_load(MasterTable::Units, load).await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second[0].name, "Tablet");
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        cache.invalidate(MasterTable::Units).await;
        cache.get_or_load(MasterTable::Units, load).await.unwrap();
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidation_during_load_is_not_lost() {
        let cache = LookupCache::new();
        let counter = AtomicUsize::new(0);
        let loads = &counter;
        let shared = &cache;
        let load = move || async move {
            if loads.fetch_add(1, Ordering::SeqCst) == 0 {
                // A write lands while the first list is still being read.
                shared.invalidate(MasterTable::Units).await;
            }
            Ok(vec![record("Tablet")])
        };

        cache.get_or_load(MasterTable::Units, load).await.unwrap();
        cache.get_or_load(MasterTable::Units, load).await.unwrap();
        assert_eq!(loads.load(Ordering::SeqCst), 2);

        cache.get_or_load(MasterTable::Units, load).await.unwrap();
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_change_feed_invalidates() {
        let hub = ChangeHub::new(8);
        let cache = LookupCache::new();
        let _task = cache.spawn_invalidator(&hub);

        cache
            .get_or_load(MasterTable::Categories, || async { Ok(vec![record("Analgesic")]) })
            .await
            .unwrap();

        let event = ChangeEvent::parse(r#"{"table":"categories","action":"INSERT"}"#).unwrap();
        hub.publish(event);

        let mut reloaded = false;
        for _ in 0..50 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            cache.options.run_pending_tasks().await;
            if cache.options.get(&MasterTable::Categories).await.is_none() {
                reloaded = true;
                break;
            }
        }
        assert!(reloaded, "categories should be evicted after a change event");
    }
}
