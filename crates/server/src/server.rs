use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch, post},
};

use engine::{Engine, ReceiptScanner};

use crate::{bank, catalog, closes, expenses, reports, sales};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    /// Optional receipt OCR capability; the scan endpoint answers 501
    /// without it.
    pub scanner: Option<Arc<dyn ReceiptScanner>>,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/sales/import", post(sales::import))
        .route("/sales", get(sales::list))
        .route("/closes", post(closes::create).get(closes::list))
        .route("/closes/last-balance", get(closes::last_balance))
        .route("/closes/{date}", get(closes::by_date))
        .route("/closes/{date}/cash-count", patch(closes::cash_count))
        .route("/expenses", post(expenses::create).get(expenses::list))
        .route("/expenses/scan", post(expenses::scan))
        .route("/bank/import", post(bank::import))
        .route("/bank/movements", get(bank::movements))
        .route("/reports/pl/{month}/{year}", get(reports::pl))
        .route(
            "/reports/distribution/{month}/{year}",
            get(reports::distribution),
        )
        .route("/reports/dashboard", get(reports::dashboard))
        .route("/reports/sales-by-channel", get(reports::sales_by_channel))
        .route("/reports/daily-sales", get(reports::daily_sales))
        .route(
            "/vendors",
            post(catalog::vendor_create).get(catalog::vendor_list),
        )
        .route(
            "/payables",
            post(catalog::payable_create).get(catalog::payable_list),
        )
        .route(
            "/employees",
            post(catalog::employee_create).get(catalog::employee_list),
        )
        .route("/payroll", post(catalog::payroll_create))
        .route(
            "/inventory",
            post(catalog::inventory_create).get(catalog::inventory_list),
        )
        .route("/inventory/alerts", get(catalog::inventory_alerts))
        .with_state(state)
}

pub async fn run(engine: Engine, scanner: Option<Arc<dyn ReceiptScanner>>) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, scanner, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    scanner: Option<Arc<dyn ReceiptScanner>>,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
        scanner,
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    scanner: Option<Arc<dyn ReceiptScanner>>,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, scanner, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
