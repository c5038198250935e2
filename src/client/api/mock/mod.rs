//! Simulated backend.
//!
//! Implements every resource trait against an in-process dataset that is
//! persisted as JSON in the injected key-value store, so a panel without a
//! backend keeps its data across reloads. Writes are applied to a draft copy and
//! only committed once the draft has been persisted.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::{
    client::{
        constant::MOCK_DATABASE_KEY,
        model::error::{AppError, AuthError},
        store::{
            storage::{load_json, save_json},
            KeyValueStore,
        },
    },
    model::{
        billing::{InvoiceDto, TransactionDto},
        catalog::{OsTemplateDto, PlanDto},
        node::NodeDto,
        proxmox::ProxmoxConfigDto,
        server::ServerDto,
        user::UserDto,
    },
};

mod auth;
mod billing;
mod catalog;
mod node;
mod proxmox;
pub mod seed;
mod server;
mod user;

/// A payment order awaiting capture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub id: String,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockDatabase {
    pub users: Vec<UserDto>,
    /// Password per user id.
    pub credentials: HashMap<String, String>,
    /// User id of the simulated remote session.
    pub session_user_id: Option<String>,
    pub servers: Vec<ServerDto>,
    pub nodes: Vec<NodeDto>,
    pub os_templates: Vec<OsTemplateDto>,
    pub plans: Vec<PlanDto>,
    pub invoices: Vec<InvoiceDto>,
    pub transactions: Vec<TransactionDto>,
    pub orders: Vec<PendingOrder>,
    pub proxmox: ProxmoxConfigDto,
    pub next_id: u64,
}

impl MockDatabase {
    pub fn allocate_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }

    pub fn session_user(&self) -> Result<&UserDto, AppError> {
        self.session_user_id
            .as_deref()
            .and_then(|id| self.users.iter().find(|u| u.id == id))
            .ok_or_else(|| AuthError::NotLoggedIn.into())
    }
}

#[derive(Clone)]
pub struct MockBackend {
    store: Rc<dyn KeyValueStore>,
    db: Rc<RefCell<MockDatabase>>,
}

impl MockBackend {
    /// Opens the dataset persisted in `store`, seeding a fresh one when there is
    /// none or the stored one no longer decodes.
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        let db = match load_json::<MockDatabase>(store.as_ref(), MOCK_DATABASE_KEY) {
            Ok(Some(db)) => db,
            Ok(None) => seed::database(),
            Err(err) => {
                tracing::warn!("Discarding stored mock data: {}", err);
                seed::database()
            }
        };

        Self::with_database(store, db)
    }

    pub fn with_database(store: Rc<dyn KeyValueStore>, db: MockDatabase) -> Self {
        Self {
            store,
            db: Rc::new(RefCell::new(db)),
        }
    }

    /// Snapshot of the current dataset.
    pub fn database(&self) -> MockDatabase {
        self.db.borrow().clone()
    }

    fn read<T>(&self, f: impl FnOnce(&MockDatabase) -> Result<T, AppError>) -> Result<T, AppError> {
        f(&self.db.borrow())
    }

    fn write<T>(
        &self,
        f: impl FnOnce(&mut MockDatabase) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut draft = self.db.borrow().clone();
        let value = f(&mut draft)?;

        save_json(self.store.as_ref(), MOCK_DATABASE_KEY, &draft)?;
        *self.db.borrow_mut() = draft;

        Ok(value)
    }
}
