//! Monthly profit-and-loss statement, one row per (month, year).
//!
//! Recomputing a period overwrites the stored figures in place.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize, DeriveEntityModel)]
#[sea_orm(table_name = "monthly_pl")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub month: i32,
    pub year: i32,
    pub total_sales: f64,
    pub supplies_cost: f64,
    pub services_cost: f64,
    pub rent_cost: f64,
    pub maintenance_cost: f64,
    pub cleaning_cost: f64,
    pub staff_meals_cost: f64,
    pub other_cost: f64,
    pub payroll_cost: f64,
    pub taxes: f64,
    pub gross_profit: f64,
    pub operating_profit: f64,
    pub net_profit: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::distributions::Entity")]
    Distributions,
}

impl Related<super::distributions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Distributions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
