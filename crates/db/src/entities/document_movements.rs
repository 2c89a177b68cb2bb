//! `SeaORM` Entity for document_movements table.
//!
//! Append-only ledger; UPDATE and DELETE are blocked by trigger.
//! `moved_by` is NULL for system-initiated moves (the complete
//! hand-off).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "document_movements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub document_id: Uuid,
    pub from_department_id: Uuid,
    pub to_department_id: Uuid,
    pub moved_by: Option<Uuid>,
    pub note: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::documents::Entity",
        from = "Column::DocumentId",
        to = "super::documents::Column::Id"
    )]
    Documents,
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::FromDepartmentId",
        to = "super::departments::Column::Id"
    )]
    FromDepartment,
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::ToDepartmentId",
        to = "super::departments::Column::Id"
    )]
    ToDepartment,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::MovedBy",
        to = "super::users::Column::Id"
    )]
    Users,
}

impl Related<super::documents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documents.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
