//! Standalone operating expense, recorded outside any shift close.
//!
//! The monthly P&L merges this ledger with the register expense lines per
//! category.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub vendor: String,
    pub category: String,
    pub amount: f64,
    pub payment_method: String,
    pub receipt_url: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bank_movements::Entity")]
    BankMovements,
}

impl Related<super::bank_movements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BankMovements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
