mod repository_tests;

use hr_shared::DatabaseConfig;

use crate::database::{ensure_schema, DatabasePool};

/// Pool against `DATABASE_URL` with the schema in place
pub(super) async fn test_pool() -> DatabasePool {
    dotenvy::dotenv().ok();
    let pool = DatabasePool::new(DatabaseConfig::from_env())
        .await
        .expect("DATABASE_URL must point at a reachable MySQL server");
    ensure_schema(pool.get_pool()).await.expect("schema creation failed");
    pool
}

/// Address no other test run will have registered
pub(super) fn unique_email(tag: &str) -> String {
    format!("{}-{}@it.example", tag, uuid::Uuid::new_v4().simple())
}
