//! Repository for the `records` table.

use sqlx::PgPool;

use crate::models::record::{CreateRecord, MenuEntry, Record, RecordSummary, UpdateRecord};

/// Column list for the `records` table.
const COLUMNS: &str = "id, object_class, title, containment_procedures, \
    description, additional_info, image_url, created_at, updated_at";

/// Provides CRUD operations for catalog records.
///
/// All listing queries order by ascending id, which is the canonical order
/// for every surface (public grid, menu, admin table).
pub struct RecordRepo;

impl RecordRepo {
    /// Insert a new record.
    ///
    /// Fails with a unique violation if the id is already taken; callers
    /// surface that as a conflict.
    pub async fn create(pool: &PgPool, input: &CreateRecord) -> Result<Record, sqlx::Error> {
        let query = format!(
            "INSERT INTO records \
                (id, object_class, title, containment_procedures, description, \
                 additional_info, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(&input.id)
            .bind(&input.object_class)
            .bind(&input.title)
            .bind(&input.containment_procedures)
            .bind(&input.description)
            .bind(&input.additional_info)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a record by its id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Record>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records WHERE id = $1");
        sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all records with the full column set.
    pub async fn list(pool: &PgPool) -> Result<Vec<Record>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM records ORDER BY id");
        sqlx::query_as::<_, Record>(&query).fetch_all(pool).await
    }

    /// List the column subset the public browse grid needs.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<RecordSummary>, sqlx::Error> {
        sqlx::query_as::<_, RecordSummary>(
            "SELECT id, title, object_class, image_url FROM records ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// List menu entries: id + title, excluding rows whose title is empty
    /// or whitespace-only.
    pub async fn list_menu_entries(pool: &PgPool) -> Result<Vec<MenuEntry>, sqlx::Error> {
        sqlx::query_as::<_, MenuEntry>(
            "SELECT id, title FROM records WHERE btrim(title) <> '' ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a record. Only fields present in the payload are applied;
    /// `image_url` uses the explicit-null convention from [`UpdateRecord`].
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateRecord,
    ) -> Result<Option<Record>, sqlx::Error> {
        let query = format!(
            "UPDATE records SET \
                object_class = COALESCE($2, object_class), \
                title = COALESCE($3, title), \
                containment_procedures = COALESCE($4, containment_procedures), \
                description = COALESCE($5, description), \
                additional_info = COALESCE($6, additional_info), \
                image_url = CASE WHEN $7 THEN $8 ELSE image_url END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Record>(&query)
            .bind(id)
            .bind(&input.object_class)
            .bind(&input.title)
            .bind(&input.containment_procedures)
            .bind(&input.description)
            .bind(&input.additional_info)
            .bind(input.image_url.is_some())
            .bind(input.image_url.clone().flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a record by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
