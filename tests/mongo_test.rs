use std::time::Duration;

use dbprobe::config::database::DatabaseSettings;
use dbprobe::modules::probe::{controller, crud::Catalog};
use dbprobe::services::mongo::{MongoConnector, MongoService};
use tokio_test::assert_ok;

fn unreachable_settings() -> DatabaseSettings {
    DatabaseSettings {
        // Nothing listens on port 1; server selection gives up after the timeout.
        uri: "mongodb://127.0.0.1:1/?directConnection=true".to_string(),
        default_database: "test".to_string(),
        selected_database: "myApplicationDb".to_string(),
        timeout: Duration::from_millis(300),
        ping: false,
        app_name: "dbprobe-test".to_string(),
    }
}

#[tokio::test]
async fn test_default_database_falls_back_when_uri_has_none() {
    let service = assert_ok!(MongoService::connect(&unreachable_settings()).await);

    assert_eq!(service.default_database_name(), "test");
    assert_eq!(service.database_name("orders"), "orders");

    service.close().await;
}

#[tokio::test]
async fn test_default_database_comes_from_uri() {
    let settings = DatabaseSettings {
        uri: "mongodb://127.0.0.1:1/inventory?directConnection=true".to_string(),
        ..unreachable_settings()
    };
    let service = assert_ok!(MongoService::connect(&settings).await);

    assert_eq!(service.default_database_name(), "inventory");

    service.close().await;
}

#[tokio::test]
async fn test_unreachable_cluster_is_reported_and_closed() {
    let connector = MongoConnector::new(unreachable_settings());
    let mut out = Vec::new();

    let outcome = assert_ok!(controller::run(&connector, "myApplicationDb", &mut out).await);

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.starts_with("Successfully connected to MongoDB!\n"));
    assert!(printed.contains("All database names on the cluster:\nAn error occurred: "));
    assert!(printed.ends_with("\nMongoDB connection closed.\n"));
    assert!(outcome.connected);
    assert!(outcome.closed);
    assert!(outcome.error.is_some());
}

#[tokio::test]
async fn test_ping_fails_before_connected_line() {
    let connector = MongoConnector::new(DatabaseSettings {
        ping: true,
        ..unreachable_settings()
    });
    let mut out = Vec::new();

    let outcome = assert_ok!(controller::run(&connector, "myApplicationDb", &mut out).await);

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.starts_with("An error occurred: "));
    assert!(!printed.contains("MongoDB connection closed."));
    assert!(!outcome.connected);
    assert!(!outcome.closed);
}

#[tokio::test]
#[ignore = "needs a reachable cluster in MONGODB_URI"]
async fn test_live_cluster() {
    dotenvy::dotenv().ok();

    let settings = assert_ok!(DatabaseSettings::from_env());
    let selected = settings.selected_database.clone();
    let connector = MongoConnector::new(settings);
    let mut out = Vec::new();

    let outcome = assert_ok!(controller::run(&connector, &selected, &mut out).await);

    assert!(outcome.succeeded(), "probe failed: {:?}", outcome.error);
    assert!(outcome.database_names.iter().any(|name| name == "admin"));
}
