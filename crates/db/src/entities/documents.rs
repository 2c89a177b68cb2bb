//! `SeaORM` Entity for documents table.
//!
//! Status and department are only ever written by the lifecycle
//! repository; the movement and approval ledgers hold the history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::DocumentStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub doc_type: String,
    pub status: DocumentStatus,
    pub department_id: Uuid,
    pub final_destination_id: Option<Uuid>,
    pub trail_id: Option<Uuid>,
    pub file_ref: Option<String>,
    pub uploaded_by: Uuid,
    pub submitted_by: Option<Uuid>,
    pub finalized_by: Option<Uuid>,
    pub finalized_at: Option<DateTimeWithTimeZone>,
    pub finalize_note: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::FinalDestinationId",
        to = "super::departments::Column::Id"
    )]
    FinalDestination,
    #[sea_orm(
        belongs_to = "super::trails::Entity",
        from = "Column::TrailId",
        to = "super::trails::Column::Id"
    )]
    Trails,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UploadedBy",
        to = "super::users::Column::Id"
    )]
    Uploader,
    #[sea_orm(has_many = "super::document_movements::Entity")]
    DocumentMovements,
    #[sea_orm(has_many = "super::document_approvals::Entity")]
    DocumentApprovals,
}

impl Related<super::trails::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trails.def()
    }
}

impl Related<super::document_movements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentMovements.def()
    }
}

impl Related<super::document_approvals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentApprovals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
