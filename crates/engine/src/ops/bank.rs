//! Bank-statement import and movement listing.

use chrono::Utc;
use csv::ReaderBuilder;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::{
    EngineError, ResultEngine, bank_movements, categories::MovementKind, dates::parse_bank_date,
    money::parse_money,
};

use super::{Engine, month_bounds, with_tx};

impl Engine {
    /// Imports a bank statement, inserting one movement per classifiable
    /// row. Decoding is best-effort (invalid bytes are replaced); rows that
    /// fail date parsing or carry neither a charge nor a credit are skipped.
    /// Returns the number of movements inserted.
    pub async fn import_bank_csv(&self, content: &[u8]) -> ResultEngine<u64> {
        let text = String::from_utf8_lossy(content);
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record.map_err(|err| EngineError::MalformedCsv(err.to_string()))?);
        }

        with_tx!(self, |db_tx| {
            let mut inserted = 0u64;
            for row in &rows {
                if row.len() < 4 {
                    continue;
                }
                let Some(date) = parse_bank_date(row.get(0).unwrap_or("")) else {
                    continue;
                };
                let reference = row
                    .get(1)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(ToString::to_string);
                let memo = row.get(2).unwrap_or("").trim().to_string();
                let charge = parse_money(row.get(3).unwrap_or(""));
                let credit = parse_money(row.get(4).unwrap_or(""));
                let balance = row.get(5).map(parse_money);

                // Zero-amount rows carry no movement at all.
                let (amount, kind) = if charge > 0.0 {
                    (charge, MovementKind::Charge)
                } else if credit > 0.0 {
                    (credit, MovementKind::Credit)
                } else {
                    continue;
                };

                bank_movements::ActiveModel {
                    date: ActiveValue::Set(date),
                    reference: ActiveValue::Set(reference),
                    memo: ActiveValue::Set(memo),
                    amount: ActiveValue::Set(amount),
                    kind: ActiveValue::Set(kind.as_str().to_string()),
                    balance: ActiveValue::Set(balance),
                    reconciled: ActiveValue::Set(false),
                    expense_id: ActiveValue::Set(None),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(&db_tx)
                .await?;
                inserted += 1;
            }
            Ok(inserted)
        })
    }

    /// Lists movements, most recent first. Month and year only filter when
    /// both are given.
    pub async fn list_bank_movements(
        &self,
        month: Option<i32>,
        year: Option<i32>,
        unreconciled_only: bool,
    ) -> ResultEngine<Vec<bank_movements::Model>> {
        let mut query = bank_movements::Entity::find();
        if let (Some(month), Some(year)) = (month, year) {
            let (start, end) = month_bounds(month, year)?;
            query = query
                .filter(bank_movements::Column::Date.gte(start))
                .filter(bank_movements::Column::Date.lt(end));
        }
        if unreconciled_only {
            query = query.filter(bank_movements::Column::Reconciled.eq(false));
        }
        let rows = query
            .order_by_desc(bank_movements::Column::Date)
            .all(&self.database)
            .await?;
        Ok(rows)
    }
}
