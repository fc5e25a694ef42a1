//! # Match Store
//!
//! One parameterized statement per operation against the `match` table.
//! Values coming from requests are always bound, never spliced into SQL text.

use sqlx::PgPool;
use tracing::instrument;

use crate::error::AppResult;
use crate::models::{Match, MatchPayload};

const SELECT_COLUMNS: &str = r#"
    SELECT id, home_team, away_team, home_score, away_score, match_date, status, notes
    FROM "match"
"#;

pub struct MatchStore;

impl MatchStore {
    /// All matches, earliest `match_date` first. Ties keep insertion order.
    pub async fn list(db_pool: &PgPool) -> AppResult<Vec<Match>> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            "{SELECT_COLUMNS} ORDER BY match_date ASC, id ASC"
        ))
        .fetch_all(db_pool)
        .await?;

        Ok(matches)
    }

    pub async fn find(db_pool: &PgPool, id: i32) -> AppResult<Option<Match>> {
        let found = sqlx::query_as::<_, Match>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(db_pool)
            .await?;

        Ok(found)
    }

    /// Inserts a new row and returns the id assigned by the store.
    pub async fn create(db_pool: &PgPool, payload: &MatchPayload) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO "match" (home_team, away_team, home_score, away_score, match_date, status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&payload.home_team)
        .bind(&payload.away_team)
        .bind(payload.home_score)
        .bind(payload.away_score)
        .bind(payload.match_date)
        .bind(&payload.status)
        .bind(&payload.notes)
        .fetch_one(db_pool)
        .await?;

        Ok(id)
    }

    /// Overwrites every column of the row with `id`.
    ///
    /// Returns the number of rows touched, which is zero when `id` does not exist.
    pub async fn update(db_pool: &PgPool, id: i32, payload: &MatchPayload) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE "match"
            SET match_date = $1, home_team = $2, away_team = $3, home_score = $4,
                away_score = $5, status = $6, notes = $7
            WHERE id = $8
            "#,
        )
        .bind(payload.match_date)
        .bind(&payload.home_team)
        .bind(&payload.away_team)
        .bind(payload.home_score)
        .bind(payload.away_score)
        .bind(&payload.status)
        .bind(&payload.notes)
        .bind(id)
        .execute(db_pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Returns the number of rows removed.
    pub async fn delete(db_pool: &PgPool, id: i32) -> AppResult<u64> {
        let result = sqlx::query(r#"DELETE FROM "match" WHERE id = $1"#)
            .bind(id)
            .execute(db_pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Round-trips a trivial statement to confirm the store is reachable.
    #[instrument(skip_all)]
    pub async fn check_connection(db_pool: &PgPool) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(db_pool).await?;
        Ok(())
    }
}
