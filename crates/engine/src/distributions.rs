//! Per-partner slice of a monthly net profit.
//!
//! Recomputation refreshes percentage and share only; recorded payments
//! (amount, status, date) survive.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize, DeriveEntityModel)]
#[sea_orm(table_name = "distributions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pl_id: i32,
    pub partner: String,
    pub percentage: f64,
    pub share: f64,
    pub paid: f64,
    pub paid_on: Option<Date>,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::monthly_pl::Entity",
        from = "Column::PlId",
        to = "super::monthly_pl::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    MonthlyPl,
}

impl Related<super::monthly_pl::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonthlyPl.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
