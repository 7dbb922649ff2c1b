//! Transfer Command Handlers

use crate::application::commands::LogTransfer;
use crate::application::error::ApplicationError;
use crate::application::ports::{to_document, StoreHandle};
use crate::domain::transfer::{self, TransferLog};

/// LogTransfer Handler
pub struct LogTransferHandler {
    store: StoreHandle,
}

impl LogTransferHandler {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: LogTransfer) -> Result<String, ApplicationError> {
        let log = TransferLog {
            from_pubkey: command.from_pubkey,
            to_pubkey: command.to_pubkey,
            amount_sol: command.amount_sol,
            signature: command.signature,
            network: command
                .network
                .unwrap_or_else(|| transfer::DEFAULT_NETWORK.to_string()),
            note: command.note,
        }
        .validated()?;

        let store = self.store.get()?;
        let id = store
            .create(transfer::COLLECTION, to_document(&log)?)
            .await?;

        tracing::info!(
            id = %id,
            from = %log.from_pubkey,
            to = %log.to_pubkey,
            amount_sol = log.amount_sol,
            network = %log.network,
            "Transfer logged"
        );

        Ok(id)
    }
}
