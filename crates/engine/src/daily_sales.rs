//! Daily sales aggregate, one row per calendar date.
//!
//! Rows come from the point-of-sale export: a channel split plus the totals
//! the register already computed. Re-importing a date overwrites the row.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize, DeriveEntityModel)]
#[sea_orm(table_name = "daily_sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub date: Date,
    /// Lowercased three-letter month label as it appears in the export.
    pub month_label: String,
    pub week: i32,
    pub cash: f64,
    pub cash_tip: f64,
    pub card_pay: f64,
    pub card_pay_tip: f64,
    pub terminal: f64,
    pub terminal_tip: f64,
    pub uber_eats: f64,
    pub rappi: f64,
    pub comps: f64,
    pub other_income: f64,
    pub total_sales: f64,
    pub total_tips: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
