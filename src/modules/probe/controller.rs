use std::io::Write;

use tracing::{debug, info, warn};

use crate::modules::probe::{
    crud::{Catalog, Connector},
    model::{
        default_database_line, error_line, selected_database_line, ProbeError, ProbeOutcome,
        CLOSED_LINE, CONNECTED_LINE, LISTING_HEADER,
    },
};

/// Connects, prints the default and selected database names, lists every
/// database, and closes.
///
/// Any failure is reported as a single `An error occurred: ...` line and ends
/// the report early. The connection is closed exactly once when it was
/// acquired, and never touched when connecting failed. Only a failure to
/// write the trailing lines is returned as `Err`.
pub async fn run<C, W>(
    connector: &C,
    selected: &str,
    out: &mut W,
) -> Result<ProbeOutcome, std::io::Error>
where
    C: Connector,
    W: Write,
{
    let mut outcome = ProbeOutcome::default();

    let conn = match connector.connect().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!(error = %e, "connection failed");
            writeln!(out, "{}", error_line(&e))?;
            outcome.error = Some(e.to_string());
            return Ok(outcome);
        }
    };
    outcome.connected = true;
    info!("connected");

    if let Err(e) = report(&conn, selected, out, &mut outcome).await {
        warn!(error = %e, "probe aborted");
        outcome.error = Some(e.to_string());
        // The error line goes out before cleanup, matching the order of the report.
        if let Err(write_err) = writeln!(out, "{}", error_line(&e)) {
            conn.close().await;
            return Err(write_err);
        }
    }

    conn.close().await;
    outcome.closed = true;
    info!("connection closed");
    writeln!(out, "{}", CLOSED_LINE)?;

    Ok(outcome)
}

async fn report<D, W>(
    conn: &D,
    selected: &str,
    out: &mut W,
    outcome: &mut ProbeOutcome,
) -> Result<(), ProbeError>
where
    D: Catalog,
    W: Write,
{
    writeln!(out, "{}", CONNECTED_LINE)?;

    let default_name = conn.default_database_name();
    debug!(database = %default_name, "default database");
    writeln!(out, "{}", default_database_line(&default_name))?;

    let selected_name = conn.database_name(selected);
    debug!(database = %selected_name, "selected database");
    writeln!(out, "{}", selected_database_line(&selected_name))?;

    writeln!(out, "{}", LISTING_HEADER)?;
    let names = conn.list_database_names().await?;
    info!(count = names.len(), "listed databases");
    for name in &names {
        writeln!(out, "{}", name)?;
    }
    outcome.database_names = names;

    Ok(())
}
