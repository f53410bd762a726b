//! Sales import and read operations.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use sea_orm::{
    ActiveValue, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
    sea_query::OnConflict,
};
use serde::Serialize;

use crate::{
    EngineError, ResultEngine, daily_sales, dates::parse_sales_date, money::parse_money,
};

use super::{Engine, with_tx};

/// First cell of the row that opens the daily-detail section of the export.
const DETAIL_HEADER: &str = "FECHA";

/// Cell range holding the twelve channel amounts of a detail row.
const AMOUNT_CELLS: std::ops::Range<usize> = 3..15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SalesImport {
    pub imported: u64,
    pub skipped: u64,
}

#[derive(Clone, Debug, Default)]
pub struct SalesFilter {
    pub month_label: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

fn cell<'a>(row: &'a StringRecord, index: usize) -> &'a str {
    row.get(index).unwrap_or("").trim()
}

impl Engine {
    /// Imports a point-of-sale export.
    ///
    /// Scans for the detail header row, then upserts one [`daily_sales`] row
    /// per parsable date. Rows with placeholder-only amounts are counted as
    /// skipped; short rows and unparsable dates are dropped without a count.
    /// The whole import is one transaction.
    pub async fn import_sales_csv(&self, content: &str) -> ResultEngine<SalesImport> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record.map_err(|err| EngineError::MalformedCsv(err.to_string()))?);
        }

        let header_idx = rows
            .iter()
            .position(|row| cell(row, 0) == DETAIL_HEADER)
            .ok_or_else(|| {
                EngineError::MalformedCsv("daily detail section not found".to_string())
            })?;

        with_tx!(self, |db_tx| {
            let mut report = SalesImport::default();
            for row in rows.iter().skip(header_idx + 1) {
                if row.len() < 15 {
                    continue;
                }
                let date_cell = cell(row, 0);
                if date_cell.is_empty() || date_cell == "-" {
                    continue;
                }
                let Some(date) = parse_sales_date(date_cell) else {
                    continue;
                };

                if AMOUNT_CELLS
                    .clone()
                    .all(|i| matches!(cell(row, i), "" | "-"))
                {
                    report.skipped += 1;
                    continue;
                }

                let week_cell = cell(row, 2);
                let week = if !week_cell.is_empty()
                    && week_cell.chars().all(|c| c.is_ascii_digit())
                {
                    week_cell.parse().unwrap_or(0)
                } else {
                    0
                };

                let model = daily_sales::ActiveModel {
                    date: ActiveValue::Set(date),
                    month_label: ActiveValue::Set(cell(row, 1).to_lowercase()),
                    week: ActiveValue::Set(week),
                    cash: ActiveValue::Set(parse_money(cell(row, 3))),
                    cash_tip: ActiveValue::Set(parse_money(cell(row, 4))),
                    card_pay: ActiveValue::Set(parse_money(cell(row, 5))),
                    card_pay_tip: ActiveValue::Set(parse_money(cell(row, 6))),
                    terminal: ActiveValue::Set(parse_money(cell(row, 7))),
                    terminal_tip: ActiveValue::Set(parse_money(cell(row, 8))),
                    uber_eats: ActiveValue::Set(parse_money(cell(row, 9))),
                    rappi: ActiveValue::Set(parse_money(cell(row, 10))),
                    comps: ActiveValue::Set(parse_money(cell(row, 11))),
                    other_income: ActiveValue::Set(parse_money(cell(row, 12))),
                    total_sales: ActiveValue::Set(parse_money(cell(row, 13))),
                    total_tips: ActiveValue::Set(parse_money(cell(row, 14))),
                    ..Default::default()
                };

                daily_sales::Entity::insert(model)
                    .on_conflict(
                        OnConflict::column(daily_sales::Column::Date)
                            .update_columns([
                                daily_sales::Column::MonthLabel,
                                daily_sales::Column::Week,
                                daily_sales::Column::Cash,
                                daily_sales::Column::CashTip,
                                daily_sales::Column::CardPay,
                                daily_sales::Column::CardPayTip,
                                daily_sales::Column::Terminal,
                                daily_sales::Column::TerminalTip,
                                daily_sales::Column::UberEats,
                                daily_sales::Column::Rappi,
                                daily_sales::Column::Comps,
                                daily_sales::Column::OtherIncome,
                                daily_sales::Column::TotalSales,
                                daily_sales::Column::TotalTips,
                            ])
                            .to_owned(),
                    )
                    .exec(&db_tx)
                    .await?;
                report.imported += 1;
            }
            Ok(report)
        })
    }

    /// Lists daily sales, most recent first.
    pub async fn list_daily_sales(
        &self,
        filter: SalesFilter,
    ) -> ResultEngine<Vec<daily_sales::Model>> {
        let mut query = daily_sales::Entity::find();
        if let Some(label) = filter.month_label {
            query = query.filter(daily_sales::Column::MonthLabel.eq(label.to_lowercase()));
        }
        if let Some(from) = filter.from {
            query = query.filter(daily_sales::Column::Date.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(daily_sales::Column::Date.lte(to));
        }
        let rows = query
            .order_by_desc(daily_sales::Column::Date)
            .all(&self.database)
            .await?;
        Ok(rows)
    }
}
