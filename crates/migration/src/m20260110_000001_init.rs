//! Initial schema migration - creates all tables from scratch.
//!
//! The complete schema for the back-office service:
//!
//! - `daily_sales`: channel-split sales, one row per date
//! - `shift_closes`: end-of-shift register closes with reconciliation
//! - `expense_lines` / `tip_lines`: lines owned by a close
//! - `expenses`: standalone operating expenses
//! - `bank_movements`: parsed bank-statement lines
//! - `monthly_pl` / `distributions`: monthly P&L and partner shares
//! - `vendors`, `payables`, `employees`, `payroll_payments`,
//!   `inventory_items`: reference and ledger data

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum DailySales {
    Table,
    Id,
    Date,
    MonthLabel,
    Week,
    Cash,
    CashTip,
    CardPay,
    CardPayTip,
    Terminal,
    TerminalTip,
    UberEats,
    Rappi,
    Comps,
    OtherIncome,
    TotalSales,
    TotalTips,
}

#[derive(Iden)]
enum ShiftCloses {
    Table,
    Id,
    Date,
    Manager,
    PreparedBy,
    OpeningBalance,
    CashSales,
    TotalExpenses,
    ExpectedClosing,
    CountedCash,
    Variance,
    Status,
    Notes,
    CreatedAt,
}

#[derive(Iden)]
enum ExpenseLines {
    Table,
    Id,
    CloseId,
    Vendor,
    Class,
    Category,
    Receipt,
    Description,
    Amount,
    CreatedAt,
}

#[derive(Iden)]
enum TipLines {
    Table,
    Id,
    CloseId,
    Terminal,
    Amount,
}

#[derive(Iden)]
enum Expenses {
    Table,
    Id,
    Date,
    Vendor,
    Category,
    Amount,
    PaymentMethod,
    ReceiptUrl,
    Description,
    Status,
    CreatedAt,
}

#[derive(Iden)]
enum BankMovements {
    Table,
    Id,
    Date,
    Reference,
    Memo,
    Amount,
    Kind,
    Balance,
    Reconciled,
    ExpenseId,
    CreatedAt,
}

#[derive(Iden)]
enum MonthlyPl {
    Table,
    Id,
    Month,
    Year,
    TotalSales,
    SuppliesCost,
    ServicesCost,
    RentCost,
    MaintenanceCost,
    CleaningCost,
    StaffMealsCost,
    OtherCost,
    PayrollCost,
    Taxes,
    GrossProfit,
    OperatingProfit,
    NetProfit,
    CreatedAt,
}

#[derive(Iden)]
enum Distributions {
    Table,
    Id,
    PlId,
    Partner,
    Percentage,
    Share,
    Paid,
    PaidOn,
    Status,
}

#[derive(Iden)]
enum Vendors {
    Table,
    Id,
    Name,
    DefaultCategory,
    Active,
}

#[derive(Iden)]
enum Payables {
    Table,
    Id,
    VendorId,
    Total,
    DueDate,
    Status,
    Description,
    CreatedAt,
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
    Name,
    Role,
    BaseSalary,
    HiredOn,
    Active,
}

#[derive(Iden)]
enum PayrollPayments {
    Table,
    Id,
    EmployeeId,
    PeriodStart,
    PeriodEnd,
    BaseSalary,
    Overtime,
    Deductions,
    NetPaid,
    PaidOn,
}

#[derive(Iden)]
enum InventoryItems {
    Table,
    Id,
    Name,
    Unit,
    Stock,
    MinStock,
    UnitPrice,
    Vendor,
    LastPurchase,
    Active,
}

fn pk(name: impl IntoIden) -> ColumnDef {
    let mut col = ColumnDef::new(name);
    col.integer().not_null().auto_increment().primary_key();
    col
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Daily sales
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(DailySales::Table)
                    .if_not_exists()
                    .col(pk(DailySales::Id))
                    .col(
                        ColumnDef::new(DailySales::Date)
                            .date()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(DailySales::MonthLabel).string().not_null())
                    .col(ColumnDef::new(DailySales::Week).integer().not_null())
                    .col(ColumnDef::new(DailySales::Cash).double().not_null())
                    .col(ColumnDef::new(DailySales::CashTip).double().not_null())
                    .col(ColumnDef::new(DailySales::CardPay).double().not_null())
                    .col(ColumnDef::new(DailySales::CardPayTip).double().not_null())
                    .col(ColumnDef::new(DailySales::Terminal).double().not_null())
                    .col(ColumnDef::new(DailySales::TerminalTip).double().not_null())
                    .col(ColumnDef::new(DailySales::UberEats).double().not_null())
                    .col(ColumnDef::new(DailySales::Rappi).double().not_null())
                    .col(ColumnDef::new(DailySales::Comps).double().not_null())
                    .col(ColumnDef::new(DailySales::OtherIncome).double().not_null())
                    .col(ColumnDef::new(DailySales::TotalSales).double().not_null())
                    .col(ColumnDef::new(DailySales::TotalTips).double().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Shift closes and their owned lines
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(ShiftCloses::Table)
                    .if_not_exists()
                    .col(pk(ShiftCloses::Id))
                    .col(
                        ColumnDef::new(ShiftCloses::Date)
                            .date()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ShiftCloses::Manager).string().not_null())
                    .col(ColumnDef::new(ShiftCloses::PreparedBy).string().not_null())
                    .col(
                        ColumnDef::new(ShiftCloses::OpeningBalance)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ShiftCloses::CashSales).double().not_null())
                    .col(
                        ColumnDef::new(ShiftCloses::TotalExpenses)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ShiftCloses::ExpectedClosing)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ShiftCloses::CountedCash).double())
                    .col(ColumnDef::new(ShiftCloses::Variance).double())
                    .col(ColumnDef::new(ShiftCloses::Status).string())
                    .col(ColumnDef::new(ShiftCloses::Notes).text())
                    .col(
                        ColumnDef::new(ShiftCloses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExpenseLines::Table)
                    .if_not_exists()
                    .col(pk(ExpenseLines::Id))
                    .col(ColumnDef::new(ExpenseLines::CloseId).integer().not_null())
                    .col(ColumnDef::new(ExpenseLines::Vendor).string().not_null())
                    .col(ColumnDef::new(ExpenseLines::Class).string().not_null())
                    .col(ColumnDef::new(ExpenseLines::Category).string().not_null())
                    .col(ColumnDef::new(ExpenseLines::Receipt).string().not_null())
                    .col(
                        ColumnDef::new(ExpenseLines::Description)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExpenseLines::Amount).double().not_null())
                    .col(
                        ColumnDef::new(ExpenseLines::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expense_lines-close_id")
                            .from(ExpenseLines::Table, ExpenseLines::CloseId)
                            .to(ShiftCloses::Table, ShiftCloses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TipLines::Table)
                    .if_not_exists()
                    .col(pk(TipLines::Id))
                    .col(ColumnDef::new(TipLines::CloseId).integer().not_null())
                    .col(ColumnDef::new(TipLines::Terminal).string().not_null())
                    .col(ColumnDef::new(TipLines::Amount).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tip_lines-close_id")
                            .from(TipLines::Table, TipLines::CloseId)
                            .to(ShiftCloses::Table, ShiftCloses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Standalone expenses and bank movements
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(pk(Expenses::Id))
                    .col(ColumnDef::new(Expenses::Date).date().not_null())
                    .col(ColumnDef::new(Expenses::Vendor).string().not_null())
                    .col(ColumnDef::new(Expenses::Category).string().not_null())
                    .col(ColumnDef::new(Expenses::Amount).double().not_null())
                    .col(
                        ColumnDef::new(Expenses::PaymentMethod)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenses::ReceiptUrl).string())
                    .col(ColumnDef::new(Expenses::Description).string())
                    .col(ColumnDef::new(Expenses::Status).string().not_null())
                    .col(
                        ColumnDef::new(Expenses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expenses-date")
                    .table(Expenses::Table)
                    .col(Expenses::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BankMovements::Table)
                    .if_not_exists()
                    .col(pk(BankMovements::Id))
                    .col(ColumnDef::new(BankMovements::Date).date().not_null())
                    .col(ColumnDef::new(BankMovements::Reference).string())
                    .col(ColumnDef::new(BankMovements::Memo).string().not_null())
                    .col(ColumnDef::new(BankMovements::Amount).double().not_null())
                    .col(ColumnDef::new(BankMovements::Kind).string().not_null())
                    .col(ColumnDef::new(BankMovements::Balance).double())
                    .col(
                        ColumnDef::new(BankMovements::Reconciled)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BankMovements::ExpenseId).integer())
                    .col(
                        ColumnDef::new(BankMovements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bank_movements-expense_id")
                            .from(BankMovements::Table, BankMovements::ExpenseId)
                            .to(Expenses::Table, Expenses::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-bank_movements-date")
                    .table(BankMovements::Table)
                    .col(BankMovements::Date)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Monthly P&L and partner distributions
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(MonthlyPl::Table)
                    .if_not_exists()
                    .col(pk(MonthlyPl::Id))
                    .col(ColumnDef::new(MonthlyPl::Month).integer().not_null())
                    .col(ColumnDef::new(MonthlyPl::Year).integer().not_null())
                    .col(ColumnDef::new(MonthlyPl::TotalSales).double().not_null())
                    .col(ColumnDef::new(MonthlyPl::SuppliesCost).double().not_null())
                    .col(ColumnDef::new(MonthlyPl::ServicesCost).double().not_null())
                    .col(ColumnDef::new(MonthlyPl::RentCost).double().not_null())
                    .col(
                        ColumnDef::new(MonthlyPl::MaintenanceCost)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MonthlyPl::CleaningCost).double().not_null())
                    .col(
                        ColumnDef::new(MonthlyPl::StaffMealsCost)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MonthlyPl::OtherCost).double().not_null())
                    .col(ColumnDef::new(MonthlyPl::PayrollCost).double().not_null())
                    .col(ColumnDef::new(MonthlyPl::Taxes).double().not_null())
                    .col(ColumnDef::new(MonthlyPl::GrossProfit).double().not_null())
                    .col(
                        ColumnDef::new(MonthlyPl::OperatingProfit)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MonthlyPl::NetProfit).double().not_null())
                    .col(
                        ColumnDef::new(MonthlyPl::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-monthly_pl-period")
                    .table(MonthlyPl::Table)
                    .col(MonthlyPl::Month)
                    .col(MonthlyPl::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Distributions::Table)
                    .if_not_exists()
                    .col(pk(Distributions::Id))
                    .col(ColumnDef::new(Distributions::PlId).integer().not_null())
                    .col(ColumnDef::new(Distributions::Partner).string().not_null())
                    .col(
                        ColumnDef::new(Distributions::Percentage)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Distributions::Share).double().not_null())
                    .col(ColumnDef::new(Distributions::Paid).double().not_null())
                    .col(ColumnDef::new(Distributions::PaidOn).date())
                    .col(ColumnDef::new(Distributions::Status).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-distributions-pl_id")
                            .from(Distributions::Table, Distributions::PlId)
                            .to(MonthlyPl::Table, MonthlyPl::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-distributions-pl-partner")
                    .table(Distributions::Table)
                    .col(Distributions::PlId)
                    .col(Distributions::Partner)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 5. Reference and ledger data
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Vendors::Table)
                    .if_not_exists()
                    .col(pk(Vendors::Id))
                    .col(ColumnDef::new(Vendors::Name).string().not_null())
                    .col(
                        ColumnDef::new(Vendors::DefaultCategory)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Vendors::Active).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Payables::Table)
                    .if_not_exists()
                    .col(pk(Payables::Id))
                    .col(ColumnDef::new(Payables::VendorId).integer().not_null())
                    .col(ColumnDef::new(Payables::Total).double().not_null())
                    .col(ColumnDef::new(Payables::DueDate).date().not_null())
                    .col(ColumnDef::new(Payables::Status).string().not_null())
                    .col(ColumnDef::new(Payables::Description).string())
                    .col(
                        ColumnDef::new(Payables::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-payables-vendor_id")
                            .from(Payables::Table, Payables::VendorId)
                            .to(Vendors::Table, Vendors::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(pk(Employees::Id))
                    .col(ColumnDef::new(Employees::Name).string().not_null())
                    .col(ColumnDef::new(Employees::Role).string().not_null())
                    .col(ColumnDef::new(Employees::BaseSalary).double().not_null())
                    .col(ColumnDef::new(Employees::HiredOn).date().not_null())
                    .col(ColumnDef::new(Employees::Active).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PayrollPayments::Table)
                    .if_not_exists()
                    .col(pk(PayrollPayments::Id))
                    .col(
                        ColumnDef::new(PayrollPayments::EmployeeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollPayments::PeriodStart)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollPayments::PeriodEnd)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollPayments::BaseSalary)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollPayments::Overtime)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollPayments::Deductions)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayrollPayments::NetPaid)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PayrollPayments::PaidOn).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-payroll_payments-employee_id")
                            .from(PayrollPayments::Table, PayrollPayments::EmployeeId)
                            .to(Employees::Table, Employees::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InventoryItems::Table)
                    .if_not_exists()
                    .col(pk(InventoryItems::Id))
                    .col(ColumnDef::new(InventoryItems::Name).string().not_null())
                    .col(ColumnDef::new(InventoryItems::Unit).string().not_null())
                    .col(ColumnDef::new(InventoryItems::Stock).double().not_null())
                    .col(
                        ColumnDef::new(InventoryItems::MinStock)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::UnitPrice)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InventoryItems::Vendor).string())
                    .col(ColumnDef::new(InventoryItems::LastPurchase).date())
                    .col(ColumnDef::new(InventoryItems::Active).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PayrollPayments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payables::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vendors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Distributions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MonthlyPl::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BankMovements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TipLines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExpenseLines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ShiftCloses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DailySales::Table).to_owned())
            .await?;
        Ok(())
    }
}
