//! Monthly roll-ups: P&L, profit distribution, dashboard, channel reports.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, TransactionTrait, sea_query::OnConflict,
};
use serde::Serialize;

use crate::{
    EngineError, ResultEngine, bank_movements,
    categories::{ExpenseCategory, PaymentStatus, ReconciliationStatus},
    daily_sales, distributions, expense_lines, expenses, monthly_pl, payables, payroll_payments,
    shift_closes,
};

use super::{Engine, month_bounds, with_tx};

#[derive(Clone, Debug, Serialize)]
pub struct DistributionSummary {
    pub month: i32,
    pub year: i32,
    pub net_profit: f64,
    /// Latest statement balance within the period, informational only.
    pub bank_balance: Option<f64>,
    /// Cash carried out of the latest close within the period.
    pub cash_balance: Option<f64>,
    pub total_available: Option<f64>,
    pub distributions: Vec<distributions::Model>,
}

#[derive(Clone, Debug, Serialize)]
pub struct DashboardSummary {
    pub today_sales: f64,
    pub week_sales: f64,
    pub month_sales: f64,
    pub change_vs_yesterday: Option<f64>,
    pub pending_payables: u64,
    pub register_status: Option<String>,
    pub last_close_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChannelTotal {
    pub channel: &'static str,
    pub amount: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: f64,
}

/// Category costs merged from both expense ledgers (register lines and
/// standalone expenses) for one month.
struct CategoryCosts(HashMap<String, f64>);

impl CategoryCosts {
    fn get(&self, category: ExpenseCategory) -> f64 {
        self.0.get(category.as_str()).copied().unwrap_or(0.0)
    }
}

impl Engine {
    async fn category_costs<C>(
        &self,
        db: &C,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ResultEngine<CategoryCosts>
    where
        C: sea_orm::ConnectionTrait,
    {
        let mut costs: HashMap<String, f64> = HashMap::new();

        let register_lines = expense_lines::Entity::find()
            .join(
                JoinType::InnerJoin,
                expense_lines::Relation::ShiftCloses.def(),
            )
            .filter(shift_closes::Column::Date.gte(start))
            .filter(shift_closes::Column::Date.lt(end))
            .all(db)
            .await?;
        for line in register_lines {
            *costs.entry(line.category).or_insert(0.0) += line.amount;
        }

        let standalone = expenses::Entity::find()
            .filter(expenses::Column::Date.gte(start))
            .filter(expenses::Column::Date.lt(end))
            .all(db)
            .await?;
        for expense in standalone {
            *costs.entry(expense.category).or_insert(0.0) += expense.amount;
        }

        Ok(CategoryCosts(costs))
    }

    /// Computes the P&L for a month and upserts it by (month, year).
    pub async fn monthly_pl(&self, month: i32, year: i32) -> ResultEngine<monthly_pl::Model> {
        let (start, end) = month_bounds(month, year)?;

        with_tx!(self, |db_tx| {
            let total_sales: f64 = daily_sales::Entity::find()
                .filter(daily_sales::Column::Date.gte(start))
                .filter(daily_sales::Column::Date.lt(end))
                .all(&db_tx)
                .await?
                .iter()
                .map(|row| row.total_sales)
                .sum();

            let costs = self.category_costs(&db_tx, start, end).await?;
            let supplies_cost = costs.get(ExpenseCategory::Supplies);
            let services_cost = costs.get(ExpenseCategory::Services);
            let rent_cost = costs.get(ExpenseCategory::Rent);
            let maintenance_cost = costs.get(ExpenseCategory::Maintenance);
            let cleaning_cost = costs.get(ExpenseCategory::Cleaning);
            let staff_meals_cost = costs.get(ExpenseCategory::StaffMeals);
            let other_cost = costs.get(ExpenseCategory::Other);
            let taxes = costs.get(ExpenseCategory::Taxes);

            // Payroll counts by payment date, not by the period it covers.
            let payroll_cost: f64 = payroll_payments::Entity::find()
                .filter(payroll_payments::Column::PaidOn.gte(start))
                .filter(payroll_payments::Column::PaidOn.lt(end))
                .all(&db_tx)
                .await?
                .iter()
                .map(|payment| payment.net_paid)
                .sum();

            let gross_profit = total_sales - supplies_cost;
            let operating_profit = gross_profit
                - (services_cost
                    + rent_cost
                    + maintenance_cost
                    + cleaning_cost
                    + staff_meals_cost
                    + other_cost);
            let net_profit = operating_profit - payroll_cost - taxes;

            let model = monthly_pl::ActiveModel {
                month: ActiveValue::Set(month),
                year: ActiveValue::Set(year),
                total_sales: ActiveValue::Set(total_sales),
                supplies_cost: ActiveValue::Set(supplies_cost),
                services_cost: ActiveValue::Set(services_cost),
                rent_cost: ActiveValue::Set(rent_cost),
                maintenance_cost: ActiveValue::Set(maintenance_cost),
                cleaning_cost: ActiveValue::Set(cleaning_cost),
                staff_meals_cost: ActiveValue::Set(staff_meals_cost),
                other_cost: ActiveValue::Set(other_cost),
                payroll_cost: ActiveValue::Set(payroll_cost),
                taxes: ActiveValue::Set(taxes),
                gross_profit: ActiveValue::Set(gross_profit),
                operating_profit: ActiveValue::Set(operating_profit),
                net_profit: ActiveValue::Set(net_profit),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            };
            monthly_pl::Entity::insert(model)
                .on_conflict(
                    OnConflict::columns([monthly_pl::Column::Month, monthly_pl::Column::Year])
                        .update_columns([
                            monthly_pl::Column::TotalSales,
                            monthly_pl::Column::SuppliesCost,
                            monthly_pl::Column::ServicesCost,
                            monthly_pl::Column::RentCost,
                            monthly_pl::Column::MaintenanceCost,
                            monthly_pl::Column::CleaningCost,
                            monthly_pl::Column::StaffMealsCost,
                            monthly_pl::Column::OtherCost,
                            monthly_pl::Column::PayrollCost,
                            monthly_pl::Column::Taxes,
                            monthly_pl::Column::GrossProfit,
                            monthly_pl::Column::OperatingProfit,
                            monthly_pl::Column::NetProfit,
                        ])
                        .to_owned(),
                )
                .exec(&db_tx)
                .await?;

            let stored = monthly_pl::Entity::find()
                .filter(monthly_pl::Column::Month.eq(month))
                .filter(monthly_pl::Column::Year.eq(year))
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound(format!("p&l for {month}/{year}")))?;
            Ok(stored)
        })
    }

    /// Splits the month's net profit across the partner roster, preserving
    /// any recorded payments, and reports the standalone cash and bank
    /// balances for the period.
    pub async fn profit_distribution(
        &self,
        month: i32,
        year: i32,
    ) -> ResultEngine<DistributionSummary> {
        let (start, end) = month_bounds(month, year)?;

        let pl = match monthly_pl::Entity::find()
            .filter(monthly_pl::Column::Month.eq(month))
            .filter(monthly_pl::Column::Year.eq(year))
            .one(&self.database)
            .await?
        {
            Some(pl) => pl,
            None => self.monthly_pl(month, year).await?,
        };

        let last_close = shift_closes::Entity::find()
            .filter(shift_closes::Column::Date.gte(start))
            .filter(shift_closes::Column::Date.lt(end))
            .order_by_desc(shift_closes::Column::Date)
            .one(&self.database)
            .await?;
        let cash_balance =
            last_close.map(|close| close.counted_cash.unwrap_or(close.expected_closing));

        let last_movement = bank_movements::Entity::find()
            .filter(bank_movements::Column::Date.gte(start))
            .filter(bank_movements::Column::Date.lt(end))
            .order_by_desc(bank_movements::Column::Date)
            .one(&self.database)
            .await?;
        let bank_balance = last_movement.and_then(|movement| movement.balance);

        let total_available = match (cash_balance, bank_balance) {
            (Some(cash), Some(bank)) => Some(cash + bank),
            _ => None,
        };

        let rows = with_tx!(self, |db_tx| {
            for partner in self.partners.partners() {
                let share = pl.net_profit * (partner.percentage / 100.0);
                let model = distributions::ActiveModel {
                    pl_id: ActiveValue::Set(pl.id),
                    partner: ActiveValue::Set(partner.name.clone()),
                    percentage: ActiveValue::Set(partner.percentage),
                    share: ActiveValue::Set(share),
                    paid: ActiveValue::Set(0.0),
                    paid_on: ActiveValue::Set(None),
                    status: ActiveValue::Set(PaymentStatus::Pending.as_str().to_string()),
                    ..Default::default()
                };
                // Recomputation refreshes percentage and share only; recorded
                // payments survive.
                distributions::Entity::insert(model)
                    .on_conflict(
                        OnConflict::columns([
                            distributions::Column::PlId,
                            distributions::Column::Partner,
                        ])
                        .update_columns([
                            distributions::Column::Percentage,
                            distributions::Column::Share,
                        ])
                        .to_owned(),
                    )
                    .exec(&db_tx)
                    .await?;
            }

            let rows = distributions::Entity::find()
                .filter(distributions::Column::PlId.eq(pl.id))
                .order_by_asc(distributions::Column::Id)
                .all(&db_tx)
                .await?;
            Ok::<_, EngineError>(rows)
        })?;

        Ok(DistributionSummary {
            month,
            year,
            net_profit: pl.net_profit,
            bank_balance,
            cash_balance,
            total_available,
            distributions: rows,
        })
    }

    /// Operational at-a-glance numbers for a given day.
    pub async fn dashboard(&self, today: NaiveDate) -> ResultEngine<DashboardSummary> {
        let sum_sales = |rows: Vec<daily_sales::Model>| -> f64 {
            rows.iter().map(|row| row.total_sales).sum()
        };

        let today_sales = sum_sales(
            daily_sales::Entity::find()
                .filter(daily_sales::Column::Date.eq(today))
                .all(&self.database)
                .await?,
        );

        let yesterday = today - Duration::days(1);
        let yesterday_sales = sum_sales(
            daily_sales::Entity::find()
                .filter(daily_sales::Column::Date.eq(yesterday))
                .all(&self.database)
                .await?,
        );
        let change_vs_yesterday = (yesterday_sales > 0.0)
            .then(|| (today_sales - yesterday_sales) / yesterday_sales * 100.0);

        let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
        let week_sales = sum_sales(
            daily_sales::Entity::find()
                .filter(daily_sales::Column::Date.gte(week_start))
                .filter(daily_sales::Column::Date.lte(today))
                .all(&self.database)
                .await?,
        );

        let (month_start, month_end) = month_bounds(today.month() as i32, today.year())?;
        let month_sales = sum_sales(
            daily_sales::Entity::find()
                .filter(daily_sales::Column::Date.gte(month_start))
                .filter(daily_sales::Column::Date.lt(month_end))
                .all(&self.database)
                .await?,
        );

        let pending_payables = payables::Entity::find()
            .filter(payables::Column::Status.eq(PaymentStatus::Pending.as_str()))
            .count(&self.database)
            .await?;

        let last_close = shift_closes::Entity::find()
            .order_by_desc(shift_closes::Column::Date)
            .one(&self.database)
            .await?;
        let (register_status, last_close_date) = match last_close {
            Some(close) => {
                let status = close.status.map(|status| {
                    match close.variance {
                        Some(variance)
                            if status != ReconciliationStatus::Balanced.as_str()
                                && variance != 0.0 =>
                        {
                            format!("{status} ({variance:+.2})")
                        }
                        _ => status,
                    }
                });
                (status, Some(close.date))
            }
            None => (None, None),
        };

        Ok(DashboardSummary {
            today_sales,
            week_sales,
            month_sales,
            change_vs_yesterday,
            pending_payables,
            register_status,
            last_close_date,
        })
    }

    /// Sales totals per channel, optionally bounded to one month.
    pub async fn sales_by_channel(
        &self,
        month: Option<i32>,
        year: Option<i32>,
    ) -> ResultEngine<Vec<ChannelTotal>> {
        let mut query = daily_sales::Entity::find();
        if let (Some(month), Some(year)) = (month, year) {
            let (start, end) = month_bounds(month, year)?;
            query = query
                .filter(daily_sales::Column::Date.gte(start))
                .filter(daily_sales::Column::Date.lt(end));
        }
        let rows = query.all(&self.database).await?;

        let mut cash = 0.0;
        let mut card_pay = 0.0;
        let mut terminal = 0.0;
        let mut uber_eats = 0.0;
        let mut rappi = 0.0;
        for row in &rows {
            cash += row.cash;
            card_pay += row.card_pay;
            terminal += row.terminal;
            uber_eats += row.uber_eats;
            rappi += row.rappi;
        }

        Ok(vec![
            ChannelTotal {
                channel: "cash",
                amount: cash,
            },
            ChannelTotal {
                channel: "card_pay",
                amount: card_pay,
            },
            ChannelTotal {
                channel: "terminal",
                amount: terminal,
            },
            ChannelTotal {
                channel: "uber_eats",
                amount: uber_eats,
            },
            ChannelTotal {
                channel: "rappi",
                amount: rappi,
            },
        ])
    }

    /// Per-day sales totals in chronological order, optionally bounded to
    /// one month.
    pub async fn daily_sales_series(
        &self,
        month: Option<i32>,
        year: Option<i32>,
    ) -> ResultEngine<Vec<DailyTotal>> {
        let mut query = daily_sales::Entity::find();
        if let (Some(month), Some(year)) = (month, year) {
            let (start, end) = month_bounds(month, year)?;
            query = query
                .filter(daily_sales::Column::Date.gte(start))
                .filter(daily_sales::Column::Date.lt(end));
        }
        let rows = query
            .order_by_asc(daily_sales::Column::Date)
            .all(&self.database)
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| DailyTotal {
                date: row.date,
                total: row.total_sales,
            })
            .collect())
    }
}
