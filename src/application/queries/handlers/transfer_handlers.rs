//! Transfer Query Handlers

use crate::application::error::ApplicationError;
use crate::application::ports::{DocumentFilter, StoreHandle, StoredDocument};
use crate::application::queries::ListTransfers;
use crate::domain::transfer;

/// ListTransfers Handler
pub struct ListTransfersHandler {
    store: StoreHandle,
}

impl ListTransfersHandler {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListTransfers) -> Result<Vec<StoredDocument>, ApplicationError> {
        let limit = transfer::effective_limit(query.limit);
        let store = self.store.get()?;
        let items = store
            .list(transfer::COLLECTION, &DocumentFilter::all(), limit)
            .await?;
        Ok(items)
    }
}
