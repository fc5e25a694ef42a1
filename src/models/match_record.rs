use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A row of the `match` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Match {
    pub id: i32,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    /// Format: `YYYY-MM-DD`
    #[serde(with = "iso_date")]
    pub match_date: Date,
    pub status: String,
    pub notes: Option<String>,
}

/// Body of create and update requests: every [`Match`] field except `id`.
///
/// Nothing is required here. Absent fields are bound as `NULL` and it is up
/// to the table's constraints to accept or reject them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchPayload {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    #[serde(default, with = "iso_date::option")]
    pub match_date: Option<Date>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}
