use async_trait::async_trait;
use bson::doc;
use mongodb::{options::ClientOptions, Client};
use tracing::{debug, info};

use crate::config::database::DatabaseSettings;
use crate::modules::probe::{
    crud::{Catalog, Connector},
    model::ProbeError,
};

/// An open session to the cluster.
pub struct MongoService {
    client: Client,
    fallback_database: String,
}

impl MongoService {
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, mongodb::error::Error> {
        let mut options = ClientOptions::parse(&settings.uri).await?;
        options.connect_timeout = Some(settings.timeout);
        options.server_selection_timeout = Some(settings.timeout);
        options.app_name = Some(settings.app_name.clone());

        debug!(
            hosts = options.hosts.len(),
            timeout_secs = settings.timeout.as_secs(),
            "creating client"
        );
        let client = Client::with_options(options)?;

        let service = Self {
            client,
            fallback_database: settings.default_database.clone(),
        };

        if settings.ping {
            service.ping().await?;
        }

        Ok(service)
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        info!("ping succeeded");
        Ok(())
    }
}

#[async_trait]
impl Catalog for MongoService {
    fn default_database_name(&self) -> String {
        match self.client.default_database() {
            Some(db) => db.name().to_string(),
            None => self.client.database(&self.fallback_database).name().to_string(),
        }
    }

    fn database_name(&self, name: &str) -> String {
        self.client.database(name).name().to_string()
    }

    async fn list_database_names(&self) -> Result<Vec<String>, ProbeError> {
        Ok(self.client.list_database_names().await?)
    }

    async fn close(self) {
        self.client.shutdown().await;
    }
}

/// Connects with the driver using settings resolved up front.
pub struct MongoConnector {
    settings: DatabaseSettings,
}

impl MongoConnector {
    pub fn new(settings: DatabaseSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Connector for MongoConnector {
    type Connection = MongoService;

    async fn connect(&self) -> Result<MongoService, ProbeError> {
        Ok(MongoService::connect(&self.settings).await?)
    }
}
