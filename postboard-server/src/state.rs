//! Application state shared across handlers

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::PostStore;

/// Shared application state.
///
/// Cloning is cheap; every clone points at the same store. Queries take
/// the read guard and mutations the write guard, so a mutation is never
/// observed half-applied.
#[derive(Clone, Default)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Default)]
struct AppStateInner {
    store: RwLock<PostStore>,
}

impl AppState {
    /// State with an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// State around an existing store (for testing)
    pub fn with_store(store: PostStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: RwLock::new(store),
            }),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, PostStore> {
        self.inner.store.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, PostStore> {
        self.inner.store.write().await
    }
}
