use std::sync::Arc;

use storage::{Catalog, SubmissionStore};

use crate::middleware::auth::AdminKeys;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub store: SubmissionStore,
    pub admin_keys: AdminKeys,
}

impl AppState {
    pub fn new(catalog: Catalog, store: SubmissionStore, admin_keys: AdminKeys) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store,
            admin_keys,
        }
    }
}
