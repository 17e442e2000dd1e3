use sea_orm::{entity::prelude::*, sea_query::Expr, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

/// One row of `KeyValueStore(Key TEXT PRIMARY KEY, Value TEXT)`.
///
/// Serialized with the column names (`Key`, `Value`) so the wire format
/// matches the table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "KeyValueStore")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Key")]
    #[serde(rename = "Key")]
    pub key: String,
    // The column has no NOT NULL constraint; rows written by other tools may hold NULL.
    #[sea_orm(column_name = "Value", nullable)]
    #[serde(rename = "Value")]
    pub value: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// All rows in the store's scan order. No ORDER BY is applied.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
    Entity::find().all(db).await
}

/// `INSERT INTO KeyValueStore (Key, Value) VALUES (?, ?)`.
///
/// A duplicate key surfaces as the driver's constraint error; callers inspect
/// it with [`DbErr::sql_err`].
pub async fn insert<C: ConnectionTrait>(db: &C, key: &str, value: &str) -> Result<Model, DbErr> {
    let am = ActiveModel {
        key: Set(key.to_string()),
        value: Set(Some(value.to_string())),
    };
    Entity::insert(am).exec_without_returning(db).await?;
    Ok(Model { key: key.to_string(), value: Some(value.to_string()) })
}

/// `UPDATE KeyValueStore SET Value = ? WHERE Key = ?`, returning rows affected.
pub async fn update_value<C: ConnectionTrait>(db: &C, key: &str, value: &str) -> Result<u64, DbErr> {
    let res = Entity::update_many()
        .col_expr(Column::Value, Expr::value(value.to_string()))
        .filter(Column::Key.eq(key))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// `DELETE FROM KeyValueStore WHERE Key = ?`, returning rows affected.
pub async fn delete<C: ConnectionTrait>(db: &C, key: &str) -> Result<u64, DbErr> {
    let res = Entity::delete_many()
        .filter(Column::Key.eq(key))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
