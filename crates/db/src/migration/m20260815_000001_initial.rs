//! Initial database migration.
//!
//! Creates all tables, enums, and the append-only enforcement triggers
//! for the movement and approval ledgers.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: ORGANIZATION
        // ============================================================
        db.execute_unprepared(DEPARTMENTS_SQL).await?;
        db.execute_unprepared(USERS_SQL).await?;

        // ============================================================
        // PART 3: TRAIL REGISTRY
        // ============================================================
        db.execute_unprepared(TRAILS_SQL).await?;
        db.execute_unprepared(TRAIL_STEPS_SQL).await?;

        // ============================================================
        // PART 4: DOCUMENTS
        // ============================================================
        db.execute_unprepared(DOCUMENTS_SQL).await?;

        // ============================================================
        // PART 5: MOVEMENT & APPROVAL LEDGERS
        // ============================================================
        db.execute_unprepared(DOCUMENT_MOVEMENTS_SQL).await?;
        db.execute_unprepared(DOCUMENT_APPROVALS_SQL).await?;

        // ============================================================
        // PART 6: TRIGGERS & FUNCTIONS
        // ============================================================
        db.execute_unprepared(TRIGGERS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Document lifecycle status
CREATE TYPE document_status AS ENUM (
    'pending',
    'in_movement',
    'pending_approval',
    'approved',
    'rejected',
    'done'
);

-- Decision kinds recorded in the approval ledger
CREATE TYPE decision_type AS ENUM (
    'approve',
    'reject',
    'pay',
    'complete'
);

-- User roles, ordered from least to most privileged
CREATE TYPE user_role AS ENUM (
    'clerk',
    'supervisor',
    'manager',
    'admin'
);
";

const DEPARTMENTS_SQL: &str = r"
CREATE TABLE departments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL UNIQUE,
    handles_dispatch BOOLEAN NOT NULL DEFAULT false,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- At most one department handles the complete hand-off
CREATE UNIQUE INDEX idx_departments_dispatch ON departments(handles_dispatch)
    WHERE handles_dispatch = true;
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    full_name VARCHAR(255) NOT NULL,
    role user_role NOT NULL DEFAULT 'clerk',
    department_id UUID NOT NULL REFERENCES departments(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_users_department ON users(department_id);
";

const TRAILS_SQL: &str = r"
CREATE TABLE trails (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL UNIQUE,
    description TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const TRAIL_STEPS_SQL: &str = r"
CREATE TABLE trail_steps (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    trail_id UUID NOT NULL REFERENCES trails(id) ON DELETE CASCADE,
    sequence INTEGER NOT NULL CHECK (sequence >= 1),
    department_id UUID NOT NULL REFERENCES departments(id),
    requires_approval BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    UNIQUE (trail_id, sequence)
);

CREATE INDEX idx_trail_steps_trail ON trail_steps(trail_id);
";

const DOCUMENTS_SQL: &str = r"
CREATE TABLE documents (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    title VARCHAR(500) NOT NULL,
    doc_type VARCHAR(100) NOT NULL,
    status document_status NOT NULL DEFAULT 'pending',
    department_id UUID NOT NULL REFERENCES departments(id),
    final_destination_id UUID REFERENCES departments(id),
    trail_id UUID REFERENCES trails(id),
    file_ref VARCHAR(500),
    uploaded_by UUID NOT NULL REFERENCES users(id),
    submitted_by UUID REFERENCES users(id),
    finalized_by UUID REFERENCES users(id),
    finalized_at TIMESTAMPTZ,
    finalize_note TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_documents_status ON documents(status);
CREATE INDEX idx_documents_department ON documents(department_id);
CREATE INDEX idx_documents_trail ON documents(trail_id);
CREATE INDEX idx_documents_uploaded_by ON documents(uploaded_by);
";

const DOCUMENT_MOVEMENTS_SQL: &str = r"
CREATE TABLE document_movements (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    document_id UUID NOT NULL REFERENCES documents(id) ON DELETE CASCADE,
    from_department_id UUID NOT NULL REFERENCES departments(id),
    to_department_id UUID NOT NULL REFERENCES departments(id),
    moved_by UUID REFERENCES users(id),
    note TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_movements_document ON document_movements(document_id, created_at);
";

const DOCUMENT_APPROVALS_SQL: &str = r"
CREATE TABLE document_approvals (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    document_id UUID NOT NULL REFERENCES documents(id) ON DELETE CASCADE,
    decided_by UUID NOT NULL REFERENCES users(id),
    decision decision_type NOT NULL,
    comment TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_approvals_document ON document_approvals(document_id, created_at);
";

const TRIGGERS_SQL: &str = r"
-- ============================================================
-- FUNCTION: prevent_ledger_modification
-- The movement and approval ledgers are append-only
-- ============================================================
CREATE OR REPLACE FUNCTION prevent_ledger_modification()
RETURNS TRIGGER AS $$
BEGIN
    RAISE EXCEPTION 'Ledger table % is append-only', TG_TABLE_NAME;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_movements_append_only
BEFORE UPDATE OR DELETE ON document_movements
FOR EACH ROW
EXECUTE FUNCTION prevent_ledger_modification();

CREATE TRIGGER trg_approvals_append_only
BEFORE UPDATE OR DELETE ON document_approvals
FOR EACH ROW
EXECUTE FUNCTION prevent_ledger_modification();

-- ============================================================
-- FUNCTION: prevent_closed_document_modification
-- Terminal documents only change through the delete cascade
-- ============================================================
CREATE OR REPLACE FUNCTION prevent_closed_document_modification()
RETURNS TRIGGER AS $$
BEGIN
    IF OLD.status IN ('rejected', 'done') AND NEW.status IS DISTINCT FROM OLD.status THEN
        RAISE EXCEPTION 'Cannot change status of a % document', OLD.status;
    END IF;

    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_documents_closed
BEFORE UPDATE ON documents
FOR EACH ROW
EXECUTE FUNCTION prevent_closed_document_modification();
";

const DROP_ALL_SQL: &str = r"
-- ============================================================
-- DROP ALL: Rollback migration
-- Order matters due to foreign key constraints
-- ============================================================

-- Drop triggers
DROP TRIGGER IF EXISTS trg_documents_closed ON documents;
DROP TRIGGER IF EXISTS trg_approvals_append_only ON document_approvals;
DROP TRIGGER IF EXISTS trg_movements_append_only ON document_movements;

-- Drop functions
DROP FUNCTION IF EXISTS prevent_closed_document_modification();
DROP FUNCTION IF EXISTS prevent_ledger_modification();

-- Drop tables (reverse order of creation)
DROP TABLE IF EXISTS document_approvals CASCADE;
DROP TABLE IF EXISTS document_movements CASCADE;
DROP TABLE IF EXISTS documents CASCADE;
DROP TABLE IF EXISTS trail_steps CASCADE;
DROP TABLE IF EXISTS trails CASCADE;
DROP TABLE IF EXISTS users CASCADE;
DROP TABLE IF EXISTS departments CASCADE;

-- Drop enums
DROP TYPE IF EXISTS user_role CASCADE;
DROP TYPE IF EXISTS decision_type CASCADE;
DROP TYPE IF EXISTS document_status CASCADE;
";
