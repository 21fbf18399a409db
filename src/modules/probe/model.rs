use thiserror::Error;

use crate::config::database::ConfigError;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
    /// Failures raised by callers that implement the connection traits themselves.
    #[error("{0}")]
    Other(String),
}

/// What a single run did, for callers that need more than the printed report.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub connected: bool,
    pub closed: bool,
    pub database_names: Vec<String>,
    pub error: Option<String>,
}

impl ProbeOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

pub const CONNECTED_LINE: &str = "Successfully connected to MongoDB!";
pub const LISTING_HEADER: &str = "\nAll database names on the cluster:";
pub const CLOSED_LINE: &str = "\nMongoDB connection closed.";

pub fn default_database_line(name: &str) -> String {
    format!("\nDefault database name: {}", name)
}

pub fn selected_database_line(name: &str) -> String {
    format!("Explicitly selected database name: {}", name)
}

pub fn error_line(err: &ProbeError) -> String {
    format!("An error occurred: {}", err)
}
