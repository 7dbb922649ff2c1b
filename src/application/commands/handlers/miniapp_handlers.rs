//! MiniApp Command Handlers

use crate::application::commands::CreateMiniApp;
use crate::application::error::ApplicationError;
use crate::application::ports::{to_document, StoreHandle};
use crate::domain::miniapp::{self, MiniApp};

/// CreateMiniApp Handler
pub struct CreateMiniAppHandler {
    store: StoreHandle,
}

impl CreateMiniAppHandler {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// 校验并写入，返回新 id
    pub async fn handle(&self, command: CreateMiniApp) -> Result<String, ApplicationError> {
        let app = MiniApp {
            name: command.name,
            description: command.description,
            url: command.url,
            icon: command.icon,
            author: command.author,
            tags: command.tags,
        }
        .validated()?;

        let store = self.store.get()?;
        let id = store
            .create(miniapp::COLLECTION, to_document(&app)?)
            .await?;

        tracing::info!(id = %id, name = %app.name, "MiniApp created");

        Ok(id)
    }
}
