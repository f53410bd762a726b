use engine::{Engine, EngineError, MovementKind, SalesFilter};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db.clone()).build().unwrap();
    (engine, db)
}

const SALES_CSV: &str = "\
RESUMEN MENSUAL,,,,,,,,,,,,,,
,,,,,,,,,,,,,,
FECHA,MES,SEMANA,EFECTIVO,PROP EF,PAY,PROP PA,TERMINALES,PROP TE,UBER EATS,RAPPI,CORTESIAS,OTROS,TOTAL VENTA,TOTAL PROPINA
24-Feb-2026,Feb,9,\"$1,000.00\",50.00,200.00,10.00,300.00,15.00,100.00,80.00,-,20.00,\"$1,700.00\",75.00
25-Feb-2026,Feb,9,-,-,-,-,-,-,-,-,-,-,-,-
not-a-date,Feb,9,1.00,1.00,1.00,1.00,1.00,1.00,1.00,1.00,1.00,1.00,12.00,4.00
";

#[tokio::test]
async fn sales_import_counts_imported_and_skipped() {
    let (engine, _db) = engine_with_db().await;

    let report = engine.import_sales_csv(SALES_CSV).await.unwrap();
    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped, 1);

    let rows = engine.list_daily_sales(SalesFilter::default()).await.unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.month_label, "feb");
    assert_eq!(row.week, 9);
    assert_eq!(row.cash, 1000.0);
    assert_eq!(row.comps, 0.0);
    assert_eq!(row.total_sales, 1700.0);
    assert_eq!(row.total_tips, 75.0);
}

#[tokio::test]
async fn sales_reimport_overwrites_instead_of_duplicating() {
    let (engine, _db) = engine_with_db().await;

    engine.import_sales_csv(SALES_CSV).await.unwrap();

    let updated = SALES_CSV.replace("\"$1,700.00\"", "\"$1,850.00\"");
    let report = engine.import_sales_csv(&updated).await.unwrap();
    assert_eq!(report.imported, 1);

    let rows = engine.list_daily_sales(SalesFilter::default()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_sales, 1850.0);
}

#[tokio::test]
async fn sales_import_without_detail_header_fails() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .import_sales_csv("a,b,c\n1,2,3\n")
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::MalformedCsv(_)));

    let rows = engine.list_daily_sales(SalesFilter::default()).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn bank_import_classifies_rows_and_skips_the_rest() {
    let (engine, _db) = engine_with_db().await;

    let statement = "\
24/02/2026,REF1,RENT PAYMENT,500.00,0.00,1000.00
2026-02-25,,DEPOSIT,0.00,750.00,1750.00
26-02-2026,REF3,ZERO ROW,0.00,0.00,1750.00
not-a-date,REF4,BROKEN,10.00,0.00,1740.00
short,row
";
    let imported = engine.import_bank_csv(statement.as_bytes()).await.unwrap();
    assert_eq!(imported, 2);

    let movements = engine.list_bank_movements(None, None, false).await.unwrap();
    assert_eq!(movements.len(), 2);

    // Listed most recent first: the credit, then the charge.
    let credit = &movements[0];
    assert_eq!(credit.kind, MovementKind::Credit.as_str());
    assert_eq!(credit.amount, 750.0);
    assert_eq!(credit.reference, None);
    assert_eq!(credit.balance, Some(1750.0));

    let charge = &movements[1];
    assert_eq!(charge.kind, MovementKind::Charge.as_str());
    assert_eq!(charge.amount, 500.0);
    assert_eq!(charge.reference.as_deref(), Some("REF1"));
    assert_eq!(charge.memo, "RENT PAYMENT");
}

#[tokio::test]
async fn bank_import_decodes_invalid_bytes_lossily() {
    let (engine, _db) = engine_with_db().await;

    let statement = b"24/02/2026,R,CAF\xc9 SUPPLIES,100.00,0.00,900.00\n";
    let imported = engine.import_bank_csv(statement).await.unwrap();
    assert_eq!(imported, 1);

    let movements = engine.list_bank_movements(None, None, false).await.unwrap();
    assert!(movements[0].memo.contains("SUPPLIES"));
}

#[tokio::test]
async fn bank_movements_filter_by_period_and_reconciled_flag() {
    let (engine, _db) = engine_with_db().await;

    let statement = "\
24/02/2026,A,FEBRUARY,100.00,0.00,900.00
05/03/2026,B,MARCH,0.00,40.00,940.00
";
    engine.import_bank_csv(statement.as_bytes()).await.unwrap();

    let february = engine
        .list_bank_movements(Some(2), Some(2026), false)
        .await
        .unwrap();
    assert_eq!(february.len(), 1);
    assert_eq!(february[0].memo, "FEBRUARY");

    // Fresh imports are unreconciled, so the filter keeps them all.
    let unreconciled = engine.list_bank_movements(None, None, true).await.unwrap();
    assert_eq!(unreconciled.len(), 2);
}
