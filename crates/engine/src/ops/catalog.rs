//! Reference and ledger entities with no derived computation: vendors,
//! payables, employees, payroll, inventory.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::{
    EngineError, ResultEngine,
    categories::{ExpenseCategory, PaymentStatus},
    employees, inventory_items, payables, payroll_payments, vendors,
};

use super::Engine;

#[derive(Clone, Debug)]
pub struct NewPayrollPayment {
    pub employee_id: i32,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub base_salary: f64,
    pub overtime: f64,
    pub deductions: f64,
    pub net_paid: f64,
    pub paid_on: NaiveDate,
}

#[derive(Clone, Debug)]
pub struct NewInventoryItem {
    pub name: String,
    pub unit: String,
    pub stock: f64,
    pub min_stock: f64,
    pub unit_price: f64,
    pub vendor: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LowStockAlert {
    pub id: i32,
    pub name: String,
    pub stock: f64,
    pub min_stock: f64,
    pub deficit: f64,
}

impl Engine {
    pub async fn create_vendor(
        &self,
        name: String,
        default_category: ExpenseCategory,
    ) -> ResultEngine<vendors::Model> {
        let model = vendors::ActiveModel {
            name: ActiveValue::Set(name),
            default_category: ActiveValue::Set(default_category.as_str().to_string()),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(&self.database)
        .await?;
        Ok(model)
    }

    pub async fn list_vendors(&self) -> ResultEngine<Vec<vendors::Model>> {
        let rows = vendors::Entity::find()
            .filter(vendors::Column::Active.eq(true))
            .order_by_asc(vendors::Column::Name)
            .all(&self.database)
            .await?;
        Ok(rows)
    }

    pub async fn create_payable(
        &self,
        vendor_id: i32,
        total: f64,
        due_date: NaiveDate,
        description: Option<String>,
    ) -> ResultEngine<payables::Model> {
        if total <= 0.0 {
            return Err(EngineError::InvalidInput(
                "payable total must be positive".to_string(),
            ));
        }
        vendors::Entity::find_by_id(vendor_id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("vendor {vendor_id}")))?;

        let model = payables::ActiveModel {
            vendor_id: ActiveValue::Set(vendor_id),
            total: ActiveValue::Set(total),
            due_date: ActiveValue::Set(due_date),
            status: ActiveValue::Set(PaymentStatus::Pending.as_str().to_string()),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.database)
        .await?;
        Ok(model)
    }

    pub async fn list_payables(
        &self,
        status: Option<PaymentStatus>,
    ) -> ResultEngine<Vec<payables::Model>> {
        let mut query = payables::Entity::find();
        if let Some(status) = status {
            query = query.filter(payables::Column::Status.eq(status.as_str()));
        }
        let rows = query
            .order_by_asc(payables::Column::DueDate)
            .all(&self.database)
            .await?;
        Ok(rows)
    }

    pub async fn create_employee(
        &self,
        name: String,
        role: String,
        base_salary: f64,
        hired_on: NaiveDate,
    ) -> ResultEngine<employees::Model> {
        if base_salary <= 0.0 {
            return Err(EngineError::InvalidInput(
                "base salary must be positive".to_string(),
            ));
        }
        let model = employees::ActiveModel {
            name: ActiveValue::Set(name),
            role: ActiveValue::Set(role),
            base_salary: ActiveValue::Set(base_salary),
            hired_on: ActiveValue::Set(hired_on),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(&self.database)
        .await?;
        Ok(model)
    }

    pub async fn list_employees(&self) -> ResultEngine<Vec<employees::Model>> {
        let rows = employees::Entity::find()
            .filter(employees::Column::Active.eq(true))
            .order_by_asc(employees::Column::Name)
            .all(&self.database)
            .await?;
        Ok(rows)
    }

    pub async fn record_payroll_payment(
        &self,
        new: NewPayrollPayment,
    ) -> ResultEngine<payroll_payments::Model> {
        employees::Entity::find_by_id(new.employee_id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("employee {}", new.employee_id)))?;

        let model = payroll_payments::ActiveModel {
            employee_id: ActiveValue::Set(new.employee_id),
            period_start: ActiveValue::Set(new.period_start),
            period_end: ActiveValue::Set(new.period_end),
            base_salary: ActiveValue::Set(new.base_salary),
            overtime: ActiveValue::Set(new.overtime),
            deductions: ActiveValue::Set(new.deductions),
            net_paid: ActiveValue::Set(new.net_paid),
            paid_on: ActiveValue::Set(new.paid_on),
            ..Default::default()
        }
        .insert(&self.database)
        .await?;
        Ok(model)
    }

    pub async fn create_inventory_item(
        &self,
        new: NewInventoryItem,
    ) -> ResultEngine<inventory_items::Model> {
        let model = inventory_items::ActiveModel {
            name: ActiveValue::Set(new.name),
            unit: ActiveValue::Set(new.unit),
            stock: ActiveValue::Set(new.stock),
            min_stock: ActiveValue::Set(new.min_stock),
            unit_price: ActiveValue::Set(new.unit_price),
            vendor: ActiveValue::Set(new.vendor),
            last_purchase: ActiveValue::Set(None),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(&self.database)
        .await?;
        Ok(model)
    }

    pub async fn list_inventory_items(&self) -> ResultEngine<Vec<inventory_items::Model>> {
        let rows = inventory_items::Entity::find()
            .filter(inventory_items::Column::Active.eq(true))
            .order_by_asc(inventory_items::Column::Name)
            .all(&self.database)
            .await?;
        Ok(rows)
    }

    /// Active items whose stock fell below their minimum, with the missing
    /// quantity.
    pub async fn low_stock_alerts(&self) -> ResultEngine<Vec<LowStockAlert>> {
        let rows = inventory_items::Entity::find()
            .filter(inventory_items::Column::Active.eq(true))
            .all(&self.database)
            .await?;
        Ok(rows
            .into_iter()
            .filter(|item| item.stock < item.min_stock)
            .map(|item| LowStockAlert {
                id: item.id,
                name: item.name,
                stock: item.stock,
                min_stock: item.min_stock,
                deficit: item.min_stock - item.stock,
            })
            .collect())
    }
}
