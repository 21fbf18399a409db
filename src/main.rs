use std::io::{self, Write};

use dbprobe::config::{self, database::DatabaseSettings};
use dbprobe::modules::probe::{
    controller,
    model::{error_line, ProbeError},
};
use dbprobe::services::mongo::MongoConnector;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let settings = match DatabaseSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "invalid configuration");
            writeln!(out, "{}", error_line(&ProbeError::from(e)))?;
            return Ok(());
        }
    };
    tracing::debug!(?settings, "loaded settings");

    let selected = settings.selected_database.clone();
    let connector = MongoConnector::new(settings);
    let outcome = controller::run(&connector, &selected, &mut out).await?;
    tracing::debug!(
        succeeded = outcome.succeeded(),
        connected = outcome.connected,
        closed = outcome.closed,
        "probe finished"
    );

    out.flush()?;
    Ok(())
}
