//! Standalone expense ledger operations.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    EngineError, ResultEngine,
    categories::{ExpenseCategory, PaymentMethod, PaymentStatus},
    expenses,
};

use super::Engine;

#[derive(Clone, Debug)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub vendor: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub description: Option<String>,
}

impl Engine {
    pub async fn create_expense(&self, new: NewExpense) -> ResultEngine<expenses::Model> {
        if new.amount <= 0.0 {
            return Err(EngineError::InvalidInput(
                "expense amount must be positive".to_string(),
            ));
        }
        let model = expenses::ActiveModel {
            date: ActiveValue::Set(new.date),
            vendor: ActiveValue::Set(new.vendor),
            category: ActiveValue::Set(new.category.as_str().to_string()),
            amount: ActiveValue::Set(new.amount),
            payment_method: ActiveValue::Set(new.payment_method.as_str().to_string()),
            receipt_url: ActiveValue::Set(None),
            description: ActiveValue::Set(new.description),
            status: ActiveValue::Set(PaymentStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.database)
        .await?;
        Ok(model)
    }

    /// Lists standalone expenses, most recent first.
    pub async fn list_expenses(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        category: Option<ExpenseCategory>,
    ) -> ResultEngine<Vec<expenses::Model>> {
        let mut query = expenses::Entity::find();
        if let Some(from) = from {
            query = query.filter(expenses::Column::Date.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(expenses::Column::Date.lte(to));
        }
        if let Some(category) = category {
            query = query.filter(expenses::Column::Category.eq(category.as_str()));
        }
        let rows = query
            .order_by_desc(expenses::Column::Date)
            .all(&self.database)
            .await?;
        Ok(rows)
    }
}
