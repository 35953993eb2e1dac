//! Item repository
//!
//! - list: one query joining item, category and curriculum (via
//!   itemtocurriculum); no N+1
//! - create: item row and join row inserted in one transaction

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::ids::{IdError, IdGenerator};
use crate::models::NewItem;

/// Denormalised item as returned by the list query
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ItemRow {
    pub id: String,
    pub title: String,
    pub explanation: String,
    pub time: DateTime<Utc>,
    pub category: String,
    pub tag: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// The item points at a category or curriculum that does not exist
    #[error("referenced {0} does not exist")]
    MissingReference(String),

    #[error("identifier generation failed: {0}")]
    Id(#[from] IdError),
}

/// Storage seam used by the HTTP layer.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every item with its category and curriculum names resolved.
    /// Order is whatever the store returns.
    async fn list_items(&self) -> Result<Vec<ItemRow>, DbError>;

    /// Insert `item` and return its newly generated identifier.
    async fn create_item(&self, item: NewItem) -> Result<String, DbError>;
}

const LIST_ITEMS_SQL: &str = r#"
    SELECT
        i.id,
        i.title,
        i.explanation,
        i.time,
        c.category,
        cu.curriculum AS tag
    FROM item i
    JOIN category c ON c.id = i.category_id
    JOIN itemtocurriculum ic ON ic.item_id = i.id
    JOIN curriculum cu ON cu.id = ic.curriculum_id
"#;

/// Postgres-backed item repository
#[derive(Debug, Clone)]
pub struct ItemRepo {
    pool: PgPool,
    ids: IdGenerator,
}

impl ItemRepo {
    pub fn new(pool: PgPool, ids: IdGenerator) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl ItemStore for ItemRepo {
    async fn list_items(&self) -> Result<Vec<ItemRow>, DbError> {
        let rows = sqlx::query_as::<_, ItemRow>(LIST_ITEMS_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create_item(&self, item: NewItem) -> Result<String, DbError> {
        let item_id = self.ids.next_id()?.to_string();
        let link_id = self.ids.next_id()?.to_string();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO item (id, title, category_id, explanation, time)
            VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP)
            "#,
        )
        .bind(&item_id)
        .bind(item.title.as_str())
        .bind(item.category_id)
        .bind(item.explanation.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| classify(e, "category"))?;

        sqlx::query(
            r#"
            INSERT INTO itemtocurriculum (id, item_id, curriculum_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&link_id)
        .bind(&item_id)
        .bind(item.curriculum_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| classify(e, "curriculum"))?;

        // Dropping `tx` on any early return above rolls back.
        tx.commit().await?;

        tracing::debug!(id = %item_id, "item created");
        Ok(item_id)
    }
}

/// Map FK violations to `MissingReference`, everything else to `Sqlx`.
fn classify(err: sqlx::Error, reference: &str) -> DbError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            DbError::MissingReference(reference.to_owned())
        }
        _ => DbError::Sqlx(err),
    }
}
