use crate::db::ScopedConnection;
use crate::kv_entry::{self, Model};
use super::temp_store;
use sea_orm::SqlErr;
use anyhow::Result;

fn sorted(mut rows: Vec<Model>) -> Vec<Model> {
    rows.sort_by(|a, b| a.key.cmp(&b.key));
    rows
}

fn row(key: &str, value: &str) -> Model {
    Model { key: key.into(), value: Some(value.into()) }
}

#[tokio::test]
async fn test_insert_then_list() -> Result<()> {
    let (cfg, path) = temp_store().await?;
    let scoped = ScopedConnection::open(&cfg).await?;
    let db = scoped.conn();

    assert!(kv_entry::list(db).await?.is_empty());
    let created = kv_entry::insert(db, "b", "2").await?;
    assert_eq!(created, row("b", "2"));
    kv_entry::insert(db, "a", "1").await?;

    assert_eq!(sorted(kv_entry::list(db).await?), vec![row("a", "1"), row("b", "2")]);

    scoped.close().await?;
    let _ = std::fs::remove_file(&path);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_insert_is_unique_violation() -> Result<()> {
    let (cfg, path) = temp_store().await?;
    let scoped = ScopedConnection::open(&cfg).await?;
    let db = scoped.conn();

    kv_entry::insert(db, "a", "1").await?;
    let err = kv_entry::insert(db, "a", "other").await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));

    // original value survives
    assert_eq!(kv_entry::list(db).await?, vec![row("a", "1")]);

    scoped.close().await?;
    let _ = std::fs::remove_file(&path);
    Ok(())
}

#[tokio::test]
async fn test_update_and_delete_rows_affected() -> Result<()> {
    let (cfg, path) = temp_store().await?;
    let scoped = ScopedConnection::open(&cfg).await?;
    let db = scoped.conn();

    kv_entry::insert(db, "a", "1").await?;
    kv_entry::insert(db, "b", "2").await?;

    assert_eq!(kv_entry::update_value(db, "a", "10").await?, 1);
    assert_eq!(kv_entry::update_value(db, "missing", "x").await?, 0);
    assert_eq!(sorted(kv_entry::list(db).await?), vec![row("a", "10"), row("b", "2")]);

    assert_eq!(kv_entry::delete(db, "a").await?, 1);
    assert_eq!(kv_entry::delete(db, "a").await?, 0);
    assert_eq!(kv_entry::list(db).await?, vec![row("b", "2")]);

    scoped.close().await?;
    let _ = std::fs::remove_file(&path);
    Ok(())
}

/// Keys are bound parameters, so SQL in a key is stored verbatim
#[tokio::test]
async fn test_keys_are_bound_not_interpolated() -> Result<()> {
    let (cfg, path) = temp_store().await?;
    let scoped = ScopedConnection::open(&cfg).await?;
    let db = scoped.conn();

    let nasty = "x'); DROP TABLE KeyValueStore; --";
    kv_entry::insert(db, nasty, "v").await?;
    assert_eq!(kv_entry::list(db).await?, vec![row(nasty, "v")]);
    assert_eq!(kv_entry::delete(db, nasty).await?, 1);

    scoped.close().await?;
    let _ = std::fs::remove_file(&path);
    Ok(())
}

#[test]
fn model_serializes_with_column_names() {
    let json = serde_json::to_value(row("a", "1")).unwrap();
    assert_eq!(json, serde_json::json!({"Key": "a", "Value": "1"}));
}
