use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use migration::MigratorTrait;
use sea_orm::Database;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = engine::Engine::builder().database(db).build().unwrap();
    server::router(server::ServerState {
        engine: Arc::new(engine),
        scanner: None,
    })
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn close_payload() -> Value {
    json!({
        "date": "2026-02-24",
        "manager": "Carla",
        "prepared_by": "Beto",
        "opening_balance": 5000.0,
        "cash_sales": 12500.50,
        "expenses": [
            {
                "vendor": "Proveedora del Centro",
                "category": "SUPPLIES",
                "receipt": "TICKET",
                "description": "verdura",
                "amount": 1200.0
            }
        ],
        "tips": [
            { "terminal": "PARROT", "amount": 850.0 }
        ],
        "counted_cash": null,
        "notes": null
    })
}

#[tokio::test]
async fn close_roundtrip_conflict_and_not_found() {
    let app = app().await;

    let created = app
        .clone()
        .oneshot(post_json("/closes", close_payload()))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let body = body_json(created).await;
    assert_eq!(body["expected_closing"], json!(15450.50));
    assert_eq!(body["status"], Value::Null);

    let duplicate = app
        .clone()
        .oneshot(post_json("/closes", close_payload()))
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let fetched = app
        .clone()
        .oneshot(get("/closes/2026-02-24"))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    let body = body_json(fetched).await;
    assert_eq!(body["expenses"].as_array().unwrap().len(), 1);
    assert_eq!(body["tips"].as_array().unwrap().len(), 1);

    let missing = app
        .clone()
        .oneshot(get("/closes/2026-03-01"))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cash_count_patch_reconciles() {
    let app = app().await;

    app.clone()
        .oneshot(post_json("/closes", close_payload()))
        .await
        .unwrap();

    let request = Request::builder()
        .method("PATCH")
        .uri("/closes/2026-02-24/cash-count")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "counted_cash": 16450.50 }).to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["variance"], json!(1000.0));
    assert_eq!(body["status"], json!("SURPLUS"));
}

#[tokio::test]
async fn unknown_enum_token_is_unprocessable() {
    let app = app().await;

    let mut payload = close_payload();
    payload["expenses"][0]["category"] = json!("GROCERIES");
    let response = app
        .clone()
        .oneshot(post_json("/closes", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn sales_import_endpoint_reports_counts() {
    let app = app().await;

    let csv = "\
FECHA,MES,SEMANA,EFECTIVO,PROP EF,PAY,PROP PA,TERMINALES,PROP TE,UBER EATS,RAPPI,CORTESIAS,OTROS,TOTAL VENTA,TOTAL PROPINA
24-Feb-2026,Feb,9,1000.00,50.00,200.00,10.00,300.00,15.00,100.00,80.00,0.00,20.00,1700.00,75.00
25-Feb-2026,Feb,9,-,-,-,-,-,-,-,-,-,-,-,-
";
    let request = Request::builder()
        .method("POST")
        .uri("/sales/import")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from(csv))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["imported"], json!(1));
    assert_eq!(body["skipped"], json!(1));

    let listed = app.clone().oneshot(get("/sales?month=feb")).await.unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    let rows = body_json(listed).await;
    assert_eq!(rows.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn sales_import_without_header_is_bad_request() {
    let app = app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/sales/import")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from("a,b,c\n1,2,3\n"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bank_import_and_listing() {
    let app = app().await;

    let statement = "\
24/02/2026,REF1,RENT,500.00,0.00,1000.00
25/02/2026,,DEPOSIT,0.00,750.00,1750.00
26/02/2026,X,ZERO,0.00,0.00,1750.00
";
    let request = Request::builder()
        .method("POST")
        .uri("/bank/import")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from(statement))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["imported"], json!(2));

    let listed = app
        .clone()
        .oneshot(get("/bank/movements?month=2&year=2026"))
        .await
        .unwrap();
    let rows = body_json(listed).await;
    assert_eq!(rows.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn distribution_endpoint_computes_pl_on_demand() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(get("/reports/distribution/3/2026"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["net_profit"], json!(0.0));
    assert_eq!(body["distributions"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn scan_without_scanner_is_not_implemented() {
    let app = app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/expenses/scan")
        .header(header::CONTENT_TYPE, "image/jpeg")
        .body(Body::from(vec![0u8, 1, 2]))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn month_out_of_range_is_unprocessable() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(get("/reports/pl/13/2026"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
