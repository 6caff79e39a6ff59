#![cfg(feature = "sqlite")]

use registry_core::{NewUser, UserStore};
use serde_json::json;
use sqlx_sqlite::Sqlite;
use registry_db::local::LocalUserRepo;
use registry_db::services::SqliteUserStore;
use registry_db::{connect_sqlite_with_max, migrate_local, SqlitePool};
use uuid::Uuid;

fn temp_db_url(label: &str) -> String {
    let db_path = std::env::temp_dir().join(format!(
        "registry-{label}-{}.sqlite",
        Uuid::now_v7().simple()
    ));
    format!("sqlite://{}", db_path.display())
}

async fn setup_local() -> SqlitePool {
    let pool = connect_sqlite_with_max(&temp_db_url("local"), 1)
        .await
        .expect("sqlite");
    migrate_local(&pool).await.expect("migrate");
    pool
}

#[tokio::test]
async fn create_returns_generated_ids_in_order() {
    let pool = setup_local().await;
    let repo = LocalUserRepo::new(&pool);

    let alice = repo
        .create(&NewUser::new("Alice", "alice@example.com"))
        .await
        .expect("create alice");
    let bob = repo
        .create(&NewUser::new("Bob", "bob@example.com"))
        .await
        .expect("create bob");

    assert_eq!(alice.get("name"), Some(&json!("Alice")));
    assert_eq!(alice.get("email"), Some(&json!("alice@example.com")));
    let id = |user: &registry_core::User| user.id().and_then(serde_json::Value::as_i64);
    assert!(id(&bob) > id(&alice));

    let listed = repo.list().await.expect("list");
    assert_eq!(listed, vec![alice, bob]);
}

#[tokio::test]
async fn list_on_empty_table_is_empty() {
    let pool = setup_local().await;
    let listed = LocalUserRepo::new(&pool).list().await.expect("list");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let pool = setup_local().await;
    migrate_local(&pool).await.expect("second migrate");
}

#[tokio::test]
async fn store_reports_not_null_violation_text() {
    let pool = setup_local().await;
    let store = SqliteUserStore::new(pool);

    let err = store
        .create_user(&NewUser {
            name: Some("NoEmail".to_string()),
            email: None,
        })
        .await
        .expect_err("missing email must fail");
    assert_eq!(err.kind, "users_create_failed");
    assert!(err.message.contains("NOT NULL"), "{}", err.message);
    assert!(err.message.contains("users.email"), "{}", err.message);

    assert!(store.list_users().await.expect("list").is_empty());
}

#[tokio::test]
async fn store_surfaces_missing_table() {
    let pool = connect_sqlite_with_max(&temp_db_url("bare"), 1)
        .await
        .expect("sqlite");
    let store = SqliteUserStore::new(pool);

    let create_err = store
        .create_user(&NewUser::new("Alice", "alice@example.com"))
        .await
        .expect_err("no table");
    assert_eq!(create_err.message, "no such table: users");

    let list_err = store.list_users().await.expect_err("no table");
    assert_eq!(list_err.kind, "users_list_failed");
    assert_eq!(list_err.message, "no such table: users");
}

async fn setup_external(ddl: &str) -> SqlitePool {
    let pool = connect_sqlite_with_max(&temp_db_url("external"), 1)
        .await
        .expect("sqlite");
    sqlx_core::query::query::<Sqlite>(ddl)
        .execute(&pool)
        .await
        .expect("create table");
    pool
}

#[tokio::test]
async fn externally_owned_table_returns_every_column() {
    let pool = setup_external(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY,
            name TEXT,
            email TEXT,
            created_at TEXT NOT NULL DEFAULT '2024-06-01 12:00:00',
            active BOOLEAN NOT NULL DEFAULT 1,
            score REAL
        )",
    )
    .await;
    let store = SqliteUserStore::new(pool);

    let created = store
        .create_user(&NewUser {
            name: None,
            email: Some("anon@example.com".to_string()),
        })
        .await
        .expect("nullable name is accepted");
    let expected = json!({
        "id": 1,
        "name": null,
        "email": "anon@example.com",
        "created_at": "2024-06-01 12:00:00",
        "active": 1,
        "score": null
    });
    assert_eq!(serde_json::to_value(&created).expect("json"), expected);
    let keys: Vec<&str> = created.columns().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["id", "name", "email", "created_at", "active", "score"]
    );

    let listed = store.list_users().await.expect("list");
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn column_values_keep_their_stored_type() {
    let pool = setup_external("CREATE TABLE users (id INTEGER PRIMARY KEY, name, email)").await;
    let store = SqliteUserStore::new(pool.clone());

    sqlx_core::query::query::<Sqlite>("INSERT INTO users (name, email) VALUES (3.5, x'6869')")
        .execute(&pool)
        .await
        .expect("seed");
    let listed = store.list_users().await.expect("list");
    assert_eq!(
        serde_json::to_value(&listed).expect("json"),
        json!([{ "id": 1, "name": 3.5, "email": [104, 105] }])
    );
}
