use chrono::NaiveDate;
use engine::{
    Engine, EngineError, ExpenseCategory, ExpenseClass, ExpenseLineInput, NewExpense,
    NewInventoryItem, NewPayrollPayment, NewShiftClose, PaymentMethod, PaymentStatus, ReceiptKind,
    ReconciliationStatus, TerminalOrigin, TipLineInput, monthly_pl,
};
use migration::MigratorTrait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, Database, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait,
};

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db.clone()).build().unwrap();
    (engine, db)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expense_line(category: ExpenseCategory, amount: f64) -> ExpenseLineInput {
    ExpenseLineInput {
        vendor: "Proveedora del Centro".to_string(),
        class: ExpenseClass::Nmp,
        category,
        receipt: ReceiptKind::Ticket,
        description: "compra".to_string(),
        amount,
    }
}

fn close_for(date: NaiveDate, counted_cash: Option<f64>) -> NewShiftClose {
    NewShiftClose {
        date,
        manager: "Carla".to_string(),
        prepared_by: "Beto".to_string(),
        opening_balance: 5000.0,
        cash_sales: 12500.50,
        expenses: vec![
            expense_line(ExpenseCategory::Supplies, 700.0),
            expense_line(ExpenseCategory::Cleaning, 500.0),
        ],
        tips: vec![
            TipLineInput {
                terminal: TerminalOrigin::Parrot,
                amount: 500.0,
            },
            TipLineInput {
                terminal: TerminalOrigin::Clip,
                amount: 350.0,
            },
        ],
        counted_cash,
        notes: None,
    }
}

#[tokio::test]
async fn shift_close_computes_expected_and_surplus() {
    let (engine, _db) = engine_with_db().await;

    let detail = engine
        .create_shift_close(close_for(date(2026, 2, 24), Some(16450.50)))
        .await
        .unwrap();

    // 5000 + 12500.50 - (1200 + 850)
    assert_eq!(detail.close.total_expenses, 2050.0);
    assert_eq!(detail.close.expected_closing, 15450.50);
    assert_eq!(detail.close.variance, Some(1000.0));
    assert_eq!(
        detail.close.status.as_deref(),
        Some(ReconciliationStatus::Surplus.as_str())
    );
    assert_eq!(detail.expenses.len(), 2);
    assert_eq!(detail.tips.len(), 2);
}

#[tokio::test]
async fn shift_close_balances_when_count_matches() {
    let (engine, _db) = engine_with_db().await;

    let detail = engine
        .create_shift_close(close_for(date(2026, 2, 24), Some(15450.50)))
        .await
        .unwrap();

    assert!(detail.close.variance.unwrap().abs() < engine::BALANCE_TOLERANCE);
    assert_eq!(
        detail.close.status.as_deref(),
        Some(ReconciliationStatus::Balanced.as_str())
    );
}

#[tokio::test]
async fn second_close_for_same_date_conflicts() {
    let (engine, _db) = engine_with_db().await;

    engine
        .create_shift_close(close_for(date(2026, 2, 24), None))
        .await
        .unwrap();
    let err = engine
        .create_shift_close(close_for(date(2026, 2, 24), None))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::ExistingKey(_)));
}

#[tokio::test]
async fn cash_count_recomputes_variance_and_status_together() {
    let (engine, _db) = engine_with_db().await;

    let detail = engine
        .create_shift_close(close_for(date(2026, 2, 24), None))
        .await
        .unwrap();
    assert_eq!(detail.close.variance, None);
    assert_eq!(detail.close.status, None);

    let counted = engine
        .record_cash_count(date(2026, 2, 24), 15350.50)
        .await
        .unwrap();
    assert_eq!(counted.close.variance, Some(-100.0));
    assert_eq!(
        counted.close.status.as_deref(),
        Some(ReconciliationStatus::Shortage.as_str())
    );

    // Correcting the count flips the verdict.
    let corrected = engine
        .record_cash_count(date(2026, 2, 24), 15450.50)
        .await
        .unwrap();
    assert_eq!(
        corrected.close.status.as_deref(),
        Some(ReconciliationStatus::Balanced.as_str())
    );

    let missing = engine
        .record_cash_count(date(2026, 3, 1), 100.0)
        .await
        .unwrap_err();
    assert!(matches!(missing, EngineError::KeyNotFound(_)));
}

/// Seeds March 2026 with sales of 100000, supplies of 30000 split across
/// both ledgers, 20000 of other operating costs, payroll of 15000 and taxes
/// of 5000.
async fn seed_march(engine: &Engine) {
    let sales_csv = "\
FECHA,MES,SEMANA,EFECTIVO,PROP EF,PAY,PROP PA,TERMINALES,PROP TE,UBER EATS,RAPPI,CORTESIAS,OTROS,TOTAL VENTA,TOTAL PROPINA
10-Mar-2026,Mar,11,40000.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,40000.00,0.00
11-Mar-2026,Mar,11,60000.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,60000.00,0.00
";
    engine.import_sales_csv(sales_csv).await.unwrap();

    engine
        .create_shift_close(NewShiftClose {
            date: date(2026, 3, 12),
            manager: "Carla".to_string(),
            prepared_by: "Beto".to_string(),
            opening_balance: 0.0,
            cash_sales: 0.0,
            expenses: vec![
                expense_line(ExpenseCategory::Supplies, 20000.0),
                expense_line(ExpenseCategory::Rent, 12000.0),
            ],
            tips: Vec::new(),
            counted_cash: None,
            notes: None,
        })
        .await
        .unwrap();

    for (category, amount) in [
        (ExpenseCategory::Supplies, 10000.0),
        (ExpenseCategory::Services, 8000.0),
        (ExpenseCategory::Taxes, 5000.0),
    ] {
        engine
            .create_expense(NewExpense {
                date: date(2026, 3, 15),
                vendor: "CFE".to_string(),
                category,
                amount,
                payment_method: PaymentMethod::Transfer,
                description: None,
            })
            .await
            .unwrap();
    }

    let employee = engine
        .create_employee(
            "Rosa".to_string(),
            "Cocina".to_string(),
            15000.0,
            date(2025, 6, 1),
        )
        .await
        .unwrap();
    engine
        .record_payroll_payment(NewPayrollPayment {
            employee_id: employee.id,
            period_start: date(2026, 3, 1),
            period_end: date(2026, 3, 15),
            base_salary: 15000.0,
            overtime: 0.0,
            deductions: 0.0,
            net_paid: 15000.0,
            paid_on: date(2026, 3, 15),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn monthly_pl_merges_both_ledgers_per_category() {
    let (engine, _db) = engine_with_db().await;
    seed_march(&engine).await;

    let pl = engine.monthly_pl(3, 2026).await.unwrap();
    assert_eq!(pl.total_sales, 100000.0);
    assert_eq!(pl.supplies_cost, 30000.0);
    assert_eq!(pl.services_cost, 8000.0);
    assert_eq!(pl.rent_cost, 12000.0);
    assert_eq!(pl.payroll_cost, 15000.0);
    assert_eq!(pl.taxes, 5000.0);
    assert_eq!(pl.gross_profit, 70000.0);
    assert_eq!(pl.operating_profit, 50000.0);
    assert_eq!(pl.net_profit, 30000.0);
}

#[tokio::test]
async fn monthly_pl_recompute_overwrites_in_place() {
    let (engine, db) = engine_with_db().await;
    seed_march(&engine).await;

    let first = engine.monthly_pl(3, 2026).await.unwrap();

    engine
        .create_expense(NewExpense {
            date: date(2026, 3, 20),
            vendor: "Ferretería".to_string(),
            category: ExpenseCategory::Maintenance,
            amount: 2000.0,
            payment_method: PaymentMethod::Cash,
            description: Some("plomería".to_string()),
        })
        .await
        .unwrap();

    let second = engine.monthly_pl(3, 2026).await.unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.maintenance_cost, 2000.0);
    assert_eq!(second.net_profit, 28000.0);

    let rows = monthly_pl::Entity::find().count(&db).await.unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn month_out_of_range_is_rejected() {
    let (engine, _db) = engine_with_db().await;
    let err = engine.monthly_pl(13, 2026).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[tokio::test]
async fn distribution_splits_net_profit_exactly() {
    let (engine, _db) = engine_with_db().await;
    seed_march(&engine).await;

    // No P&L yet: the distribution computes it first.
    let summary = engine.profit_distribution(3, 2026).await.unwrap();
    assert_eq!(summary.net_profit, 30000.0);

    let shares: Vec<f64> = summary
        .distributions
        .iter()
        .map(|row| row.share)
        .collect();
    assert_eq!(shares, vec![7500.0, 7500.0, 7500.0, 3750.0, 3750.0]);
    assert_eq!(shares.iter().sum::<f64>(), summary.net_profit);
}

#[tokio::test]
async fn distribution_recompute_preserves_recorded_payments() {
    let (engine, db) = engine_with_db().await;
    seed_march(&engine).await;

    let summary = engine.profit_distribution(3, 2026).await.unwrap();
    let first = summary.distributions[0].clone();

    let mut active = first.into_active_model();
    active.paid = ActiveValue::Set(7500.0);
    active.status = ActiveValue::Set(PaymentStatus::Paid.as_str().to_string());
    active.paid_on = ActiveValue::Set(Some(date(2026, 4, 2)));
    active.update(&db).await.unwrap();

    let again = engine.profit_distribution(3, 2026).await.unwrap();
    assert_eq!(again.distributions.len(), 5);
    let paid_row = &again.distributions[0];
    assert_eq!(paid_row.paid, 7500.0);
    assert_eq!(paid_row.status, PaymentStatus::Paid.as_str());
    assert_eq!(paid_row.paid_on, Some(date(2026, 4, 2)));
}

#[tokio::test]
async fn distribution_reports_period_balances() {
    let (engine, _db) = engine_with_db().await;
    seed_march(&engine).await;

    engine
        .record_cash_count(date(2026, 3, 12), 3000.0)
        .await
        .unwrap();
    engine
        .import_bank_csv(b"20/03/2026,R,DEPOSIT,0.00,500.00,42000.00\n")
        .await
        .unwrap();

    let summary = engine.profit_distribution(3, 2026).await.unwrap();
    assert_eq!(summary.cash_balance, Some(3000.0));
    assert_eq!(summary.bank_balance, Some(42000.0));
    assert_eq!(summary.total_available, Some(45000.0));
}

#[tokio::test]
async fn dashboard_summarizes_the_day() {
    let (engine, _db) = engine_with_db().await;

    let sales_csv = "\
FECHA,MES,SEMANA,EFECTIVO,PROP EF,PAY,PROP PA,TERMINALES,PROP TE,UBER EATS,RAPPI,CORTESIAS,OTROS,TOTAL VENTA,TOTAL PROPINA
10-Mar-2026,Mar,11,1000.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,1000.00,0.00
11-Mar-2026,Mar,11,1200.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,1200.00,0.00
";
    engine.import_sales_csv(sales_csv).await.unwrap();

    let vendor = engine
        .create_vendor("Abarrotes López".to_string(), ExpenseCategory::Supplies)
        .await
        .unwrap();
    engine
        .create_payable(vendor.id, 800.0, date(2026, 3, 30), None)
        .await
        .unwrap();

    engine
        .create_shift_close(close_for(date(2026, 3, 11), Some(16450.50)))
        .await
        .unwrap();

    let summary = engine.dashboard(date(2026, 3, 11)).await.unwrap();
    assert_eq!(summary.today_sales, 1200.0);
    assert_eq!(summary.month_sales, 2200.0);
    assert_eq!(summary.week_sales, 2200.0);
    assert!((summary.change_vs_yesterday.unwrap() - 20.0).abs() < 1e-9);
    assert_eq!(summary.pending_payables, 1);
    assert_eq!(summary.register_status.as_deref(), Some("SURPLUS (+1000.00)"));
    assert_eq!(summary.last_close_date, Some(date(2026, 3, 11)));
}

#[tokio::test]
async fn low_stock_alerts_report_active_deficits_only() {
    let (engine, db) = engine_with_db().await;

    engine
        .create_inventory_item(NewInventoryItem {
            name: "Arroz".to_string(),
            unit: "kg".to_string(),
            stock: 3.0,
            min_stock: 10.0,
            unit_price: 28.0,
            vendor: None,
        })
        .await
        .unwrap();
    engine
        .create_inventory_item(NewInventoryItem {
            name: "Aceite".to_string(),
            unit: "l".to_string(),
            stock: 20.0,
            min_stock: 5.0,
            unit_price: 45.0,
            vendor: None,
        })
        .await
        .unwrap();
    let retired = engine
        .create_inventory_item(NewInventoryItem {
            name: "Salsa vieja".to_string(),
            unit: "l".to_string(),
            stock: 0.0,
            min_stock: 2.0,
            unit_price: 10.0,
            vendor: None,
        })
        .await
        .unwrap();
    let mut active = retired.into_active_model();
    active.active = ActiveValue::Set(false);
    active.update(&db).await.unwrap();

    let alerts = engine.low_stock_alerts().await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].name, "Arroz");
    assert_eq!(alerts[0].deficit, 7.0);
}

#[tokio::test]
async fn roster_override_must_sum_to_100() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();

    let result = Engine::builder()
        .database(db)
        .partners(vec![engine::Partner {
            name: "Solo".to_string(),
            percentage: 80.0,
        }])
        .build();
    assert!(matches!(result, Err(EngineError::InvalidInput(_))));
}
