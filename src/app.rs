//! Application wiring shared by the binary and the HTTP tests

use std::sync::Arc;

use actix_web::web;

use crate::config::StoreConfig;
use crate::core::Result;
use crate::middleware::configure_extractors;
use crate::modules::employees::repositories::{
    EmployeeRepository, InMemoryEmployeeRepository, MySqlEmployeeRepository,
};
use crate::modules::employees::EmployeeService;
use crate::modules::{employees, health};

/// Build the record store selected by configuration
pub async fn build_repository(store: &StoreConfig) -> Result<Arc<dyn EmployeeRepository>> {
    match store {
        StoreConfig::Memory => Ok(Arc::new(InMemoryEmployeeRepository::new())),
        StoreConfig::MySql(database) => {
            let pool = database.create_pool().await?;
            tracing::info!(
                "Database pool initialized ({}..{} connections)",
                database.pool_size,
                database.max_connections
            );
            Ok(Arc::new(MySqlEmployeeRepository::new(pool)))
        }
    }
}

/// Register every route and extractor config
///
/// Expects `web::Data<Arc<EmployeeService>>` to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);
    health::configure(cfg);
    employees::controllers::configure(cfg);
}

/// Service handle in the form the handlers extract it
pub fn service_data(repository: Arc<dyn EmployeeRepository>) -> web::Data<Arc<EmployeeService>> {
    web::Data::new(Arc::new(EmployeeService::new(repository)))
}
