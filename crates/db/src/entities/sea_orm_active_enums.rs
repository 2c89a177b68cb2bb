//! `SeaORM` mappings for the Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Document lifecycle status (`document_status` enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "document_status")]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Newly registered, not yet routed.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Travelling between departments.
    #[sea_orm(string_value = "in_movement")]
    InMovement,
    /// Arrived at its final destination, awaiting a decision.
    #[sea_orm(string_value = "pending_approval")]
    PendingApproval,
    /// Carries at least one approving decision.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Rejected (terminal).
    #[sea_orm(string_value = "rejected")]
    Rejected,
    /// Closed out (terminal).
    #[sea_orm(string_value = "done")]
    Done,
}

/// Recorded decision kind (`decision_type` enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "decision_type")]
#[serde(rename_all = "snake_case")]
pub enum DecisionType {
    /// Plain approval.
    #[sea_orm(string_value = "approve")]
    Approve,
    /// Terminal rejection.
    #[sea_orm(string_value = "reject")]
    Reject,
    /// Payment recorded against the document.
    #[sea_orm(string_value = "pay")]
    Pay,
    /// Completion with hand-off to the dispatch department.
    #[sea_orm(string_value = "complete")]
    Complete,
}

/// User role (`user_role` enum).
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Registers and routes documents.
    #[sea_orm(string_value = "clerk")]
    Clerk,
    /// Decides on documents in their department.
    #[sea_orm(string_value = "supervisor")]
    Supervisor,
    /// Supervisor powers plus the complete hand-off.
    #[sea_orm(string_value = "manager")]
    Manager,
    /// Unrestricted.
    #[sea_orm(string_value = "admin")]
    Admin,
}
