use async_trait::async_trait;

use crate::modules::probe::model::ProbeError;

/// Opens the one connection a probe run uses.
#[async_trait]
pub trait Connector: Send + Sync {
    type Connection: Catalog;

    async fn connect(&self) -> Result<Self::Connection, ProbeError>;
}

/// Read-only view of the connected service.
#[async_trait]
pub trait Catalog: Send + Sync + Sized {
    /// Name of the handle used when no database is chosen explicitly.
    fn default_database_name(&self) -> String;

    fn database_name(&self, name: &str) -> String;

    async fn list_database_names(&self) -> Result<Vec<String>, ProbeError>;

    /// Releases the connection. Consumes the handle so it cannot be closed twice.
    async fn close(self);
}
