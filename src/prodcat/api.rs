//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for catalog operations, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Owns** the per-session state: the store, the id counter and the load policy
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no stdout/stderr and no formatting.
//!
//! ## Generic Over DataStore
//!
//! `CatalogApi<S: DataStore>` runs on `FileStore` in production and on
//! `InMemoryStore` in tests.
//!
//! ## Id assignment
//!
//! Ids come from an [`IdCounter`] held by the facade. `new` starts it at 1;
//! [`CatalogApi::resume_ids`] moves it past the highest id already stored,
//! which is what a caller spanning several processes wants.

use crate::commands;
use crate::error::Result;
use crate::model::{IdCounter, ProductDraft, ProductId, ProductPatch};
use crate::store::DataStore;

pub struct CatalogApi<S: DataStore> {
    store: S,
    paths: commands::CatalogPaths,
    ids: IdCounter,
    policy: LoadPolicy,
}

impl<S: DataStore> CatalogApi<S> {
    pub fn new(store: S, paths: commands::CatalogPaths) -> Self {
        Self {
            store,
            paths,
            ids: IdCounter::new(),
            policy: LoadPolicy::default(),
        }
    }

    pub fn with_counter(mut self, ids: IdCounter) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Continue id assignment after the highest id currently stored.
    pub fn resume_ids(&mut self) -> Result<()> {
        let products = commands::helpers::load_products(&self.store, self.policy)?;
        let resumed = IdCounter::after(&products)?;
        if resumed.peek() > self.ids.peek() {
            self.ids = resumed;
        }
        Ok(())
    }

    pub fn add_product(&mut self, draft: ProductDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, self.policy, &mut self.ids, draft)
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, self.policy)
    }

    pub fn get_product(&self, id: ProductId) -> Result<commands::CmdResult> {
        commands::get::by_id(&self.store, self.policy, id)
    }

    pub fn get_product_by_code(&self, code: &str) -> Result<commands::CmdResult> {
        commands::get::by_code(&self.store, self.policy, code)
    }

    pub fn update_product(
        &mut self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, self.policy, id, patch)
    }

    pub fn remove_product(&mut self, id: ProductId) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, self.policy, id)
    }

    pub fn seed(&mut self) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store, self.policy, &mut self.ids)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, self.store.data_path(), action)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, &self.paths)
    }

    /// The id the next accepted product will get.
    pub fn next_id(&self) -> ProductId {
        self.ids.peek()
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::helpers::LoadPolicy;
pub use commands::{CatalogPaths, CmdMessage, CmdResult, MessageLevel};
