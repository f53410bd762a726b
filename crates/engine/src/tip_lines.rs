//! Tip line inside a shift close, split by card terminal.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize, DeriveEntityModel)]
#[sea_orm(table_name = "tip_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub close_id: i32,
    pub terminal: String,
    pub amount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shift_closes::Entity",
        from = "Column::CloseId",
        to = "super::shift_closes::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ShiftCloses,
}

impl Related<super::shift_closes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShiftCloses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
