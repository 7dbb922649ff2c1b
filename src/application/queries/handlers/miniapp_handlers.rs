//! MiniApp Query Handlers

use crate::application::error::ApplicationError;
use crate::application::ports::{DocumentFilter, StoreHandle, StoredDocument};
use crate::application::queries::ListMiniApps;
use crate::domain::miniapp;

/// ListMiniApps Handler
pub struct ListMiniAppsHandler {
    store: StoreHandle,
}

impl ListMiniAppsHandler {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: ListMiniApps) -> Result<Vec<StoredDocument>, ApplicationError> {
        let store = self.store.get()?;
        let items = store
            .list(miniapp::COLLECTION, &DocumentFilter::all(), miniapp::LIST_LIMIT)
            .await?;
        Ok(items)
    }
}
