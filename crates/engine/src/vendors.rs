//! Vendor reference data.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize, DeriveEntityModel)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub default_category: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::payables::Entity")]
    Payables,
}

impl Related<super::payables::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payables.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
