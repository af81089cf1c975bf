use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::App;
use crate::error::CatalogError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        AppState {
            catalog: Arc::new(catalog),
        }
    }

    pub fn from_config(app: &App) -> Self {
        AppState::new(Catalog::new(app.id_strategy, app.seed))
    }
}

pub async fn not_found() -> CatalogError {
    CatalogError::RouteNotFound
}

pub async fn method_not_allowed() -> CatalogError {
    CatalogError::MethodNotAllowed
}
