use sea_query::{InsertStatement, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{FromRow, SqlitePool, sqlite::SqliteRow};

use crate::Category;

/// A catalog item that maps onto one of the catalog tables.
pub trait Record: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    const CATEGORY: Category;

    /// Identity key, `None` until the record has been stored.
    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    fn name(&self) -> &str;

    fn insert_statement(&self) -> InsertStatement;

    fn select_by_name(name: &str) -> SelectStatement;
}

#[derive(Clone)]
pub struct Repository(pub SqlitePool);

impl Repository {
    /// Stores `record` and writes the generated key back onto it.
    pub async fn add<R: Record>(&self, record: &mut R) -> grocer_shared::Result<i64> {
        if let Some(id) = record.id() {
            grocer_shared::bail!(
                "{} '{}' is already stored with id {id}",
                R::CATEGORY,
                record.name()
            );
        }

        let (sql, values) = record.insert_statement().build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.0)
            .await?
            .last_insert_rowid();

        record.set_id(id);

        tracing::debug!(category = %R::CATEGORY, id, name = record.name(), "record stored");

        Ok(id)
    }

    /// First record of the category whose name matches exactly.
    pub async fn find_by_name<R: Record>(&self, name: &str) -> grocer_shared::Result<Option<R>> {
        let (sql, values) = R::select_by_name(name).build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, R, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }
}
