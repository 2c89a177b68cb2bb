//! Database seeder for Doctra development and testing.
//!
//! Seeds departments (including the dispatch desk), one user per role,
//! a standard trail, and a sample document for local development and
//! testing purposes.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;
use doctra_db::entities::{
    departments, documents,
    sea_orm_active_enums::{DocumentStatus, UserRole},
    trail_steps, trails, users,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

/// Records Office department ID (consistent for all seeds)
const RECORDS_DEPT_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Finance department ID (consistent for all seeds)
const FINANCE_DEPT_ID: &str = "00000000-0000-0000-0000-000000000002";
/// Legal department ID (consistent for all seeds)
const LEGAL_DEPT_ID: &str = "00000000-0000-0000-0000-000000000003";
/// Dispatch Desk department ID; the one department that hands documents out
const DISPATCH_DEPT_ID: &str = "00000000-0000-0000-0000-000000000004";
/// Clerk user ID (consistent for all seeds)
const CLERK_USER_ID: &str = "00000000-0000-0000-0000-000000000011";
/// Supervisor user ID (consistent for all seeds)
const SUPERVISOR_USER_ID: &str = "00000000-0000-0000-0000-000000000012";
/// Manager user ID (consistent for all seeds)
const MANAGER_USER_ID: &str = "00000000-0000-0000-0000-000000000013";
/// Admin user ID (consistent for all seeds)
const ADMIN_USER_ID: &str = "00000000-0000-0000-0000-000000000014";
/// Standard review trail ID (consistent for all seeds)
const TRAIL_ID: &str = "00000000-0000-0000-0000-000000000021";
/// Sample document ID (consistent for all seeds)
const SAMPLE_DOC_ID: &str = "00000000-0000-0000-0000-000000000031";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = doctra_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding departments...");
    seed_departments(&db).await;

    println!("Seeding users...");
    seed_users(&db).await;

    println!("Seeding standard trail...");
    seed_trail(&db).await;

    println!("Seeding sample document...");
    seed_sample_document(&db).await;

    println!("Seeding complete!");
}

fn fixed_id(id: &str) -> Uuid {
    Uuid::parse_str(id).unwrap()
}

/// Seeds the departments a document can route through, one of them
/// flagged as the dispatch desk.
async fn seed_departments(db: &DatabaseConnection) {
    let rows = [
        (RECORDS_DEPT_ID, "Records Office", false),
        (FINANCE_DEPT_ID, "Finance", false),
        (LEGAL_DEPT_ID, "Legal", false),
        (DISPATCH_DEPT_ID, "Dispatch Desk", true),
    ];

    for (id, name, handles_dispatch) in rows {
        // Check if department already exists
        if departments::Entity::find_by_id(fixed_id(id))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Department {name} already exists, skipping...");
            continue;
        }

        let department = departments::ActiveModel {
            id: Set(fixed_id(id)),
            name: Set(name.to_string()),
            handles_dispatch: Set(handles_dispatch),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        if let Err(e) = department.insert(db).await {
            eprintln!("Failed to insert department {name}: {e}");
        } else {
            println!("  Created department: {name}");
        }
    }
}

/// Seeds one user per role for exercising the access policy.
async fn seed_users(db: &DatabaseConnection) {
    let rows = [
        (CLERK_USER_ID, "Records Clerk", UserRole::Clerk, RECORDS_DEPT_ID),
        (
            SUPERVISOR_USER_ID,
            "Finance Supervisor",
            UserRole::Supervisor,
            FINANCE_DEPT_ID,
        ),
        (MANAGER_USER_ID, "Legal Manager", UserRole::Manager, LEGAL_DEPT_ID),
        (ADMIN_USER_ID, "System Admin", UserRole::Admin, RECORDS_DEPT_ID),
    ];

    for (id, full_name, role, department_id) in rows {
        // Check if user already exists
        if users::Entity::find_by_id(fixed_id(id))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  User {full_name} already exists, skipping...");
            continue;
        }

        let user = users::ActiveModel {
            id: Set(fixed_id(id)),
            full_name: Set(full_name.to_string()),
            role: Set(role),
            department_id: Set(fixed_id(department_id)),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        if let Err(e) = user.insert(db).await {
            eprintln!("Failed to insert user {full_name}: {e}");
        } else {
            println!("  Created user: {full_name}");
        }
    }
}

/// Seeds the standard review trail: records intake, finance check,
/// legal sign-off.
async fn seed_trail(db: &DatabaseConnection) {
    // Check if trail already exists
    if trails::Entity::find_by_id(fixed_id(TRAIL_ID))
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Standard trail already exists, skipping...");
        return;
    }

    let trail = trails::ActiveModel {
        id: Set(fixed_id(TRAIL_ID)),
        name: Set("Standard review".to_string()),
        description: Set(Some(
            "Records intake, finance check, legal sign-off".to_string(),
        )),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };

    if let Err(e) = trail.insert(db).await {
        eprintln!("Failed to insert trail: {e}");
        return;
    }

    let steps = [
        (1, RECORDS_DEPT_ID, false),
        (2, FINANCE_DEPT_ID, true),
        (3, LEGAL_DEPT_ID, true),
    ];

    for (sequence, department_id, requires_approval) in steps {
        let step = trail_steps::ActiveModel {
            id: Set(Uuid::new_v4()),
            trail_id: Set(fixed_id(TRAIL_ID)),
            sequence: Set(sequence),
            department_id: Set(fixed_id(department_id)),
            requires_approval: Set(requires_approval),
            created_at: Set(Utc::now().into()),
        };

        if let Err(e) = step.insert(db).await {
            eprintln!("Failed to insert trail step {sequence}: {e}");
        }
    }

    println!("  Created trail: Standard review (3 steps)");
}

/// Seeds a pending sample document sitting at the Records Office,
/// destined for Legal via the standard trail.
async fn seed_sample_document(db: &DatabaseConnection) {
    // Check if document already exists
    if documents::Entity::find_by_id(fixed_id(SAMPLE_DOC_ID))
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Sample document already exists, skipping...");
        return;
    }

    let document = documents::ActiveModel {
        id: Set(fixed_id(SAMPLE_DOC_ID)),
        title: Set("Vendor service agreement".to_string()),
        doc_type: Set("contract".to_string()),
        status: Set(DocumentStatus::Pending),
        department_id: Set(fixed_id(RECORDS_DEPT_ID)),
        final_destination_id: Set(Some(fixed_id(LEGAL_DEPT_ID))),
        trail_id: Set(Some(fixed_id(TRAIL_ID))),
        file_ref: Set(Some("uploads/vendor-service-agreement.pdf".to_string())),
        uploaded_by: Set(fixed_id(CLERK_USER_ID)),
        submitted_by: Set(None),
        finalized_by: Set(None),
        finalized_at: Set(None),
        finalize_note: Set(None),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };

    if let Err(e) = document.insert(db).await {
        eprintln!("Failed to insert sample document: {e}");
    } else {
        println!("  Created sample document: Vendor service agreement");
    }
}
