use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use settings::Database;

mod ocr;
mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "comal={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let db = parse_database(&settings.server.database).await?;

    let mut builder = engine::Engine::builder().database(db);
    if let Some(partners) = settings.partners {
        builder = builder.partners(partners);
    }
    let engine = builder.build()?;

    let scanner = settings.ocr.map(|ocr| {
        Arc::new(ocr::HttpScanner::new(ocr.endpoint, ocr.api_key))
            as Arc<dyn engine::ReceiptScanner>
    });
    if scanner.is_some() {
        tracing::info!("receipt scanner configured");
    }

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    server::run_with_listener(engine, scanner, listener).await?;

    Ok(())
}

async fn parse_database(
    config: &Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let url = match config {
        Database::Memory => String::from("sqlite::memory:"),
        Database::Sqlite(path) => format!("sqlite:{}?mode=rwc", path),
    };

    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
