//! Startblock store against a real PostgreSQL
//!
//! Needs a Docker daemon; run with `--ignored`.

use racereg::services::{PgStartblockStore, StartblockStore};
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

async fn setup() -> (ContainerAsync<Postgres>, PgPool) {
    let container = Postgres::default()
        .start()
        .await
        .expect("Failed to start PostgreSQL container");
    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    let url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to connect to test database");

    sqlx::query(
        r#"
        CREATE TABLE startblocks (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            start_time TEXT NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create startblocks table");

    (container, pool)
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_save_and_read_startblock() {
    let (_container, pool) = setup().await;
    let store = PgStartblockStore::new(pool);

    store.add("1479312647", "My first startblock").await.unwrap();
    let blocks = store.get().await.unwrap();

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].name, "My first startblock");
    assert_eq!(blocks[0].start_time, "1479312647");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_startblock_times_in_order() {
    let (_container, pool) = setup().await;
    let store = PgStartblockStore::new(pool);

    store.add("3600", "My first startblock").await.unwrap();
    store.add("4200", "Second wave").await.unwrap();

    assert_eq!(store.times().await.unwrap(), vec!["3600", "4200"]);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_invalid_startblock_is_not_stored() {
    let (_container, pool) = setup().await;
    let store = PgStartblockStore::new(pool);

    assert!(store.add("ten past", "Broken").await.is_err());
    assert!(store.get().await.unwrap().is_empty());
}
