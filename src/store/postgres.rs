//! PostgreSQL store over the `konie` table.

use super::HorseStore;
use crate::error::AppError;
use crate::model::{AvailabilityFilter, Horse, HorseInput};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const HORSES_TABLE: &str = "konie";

const COLUMNS: &str = "id, rasa, wiek, dostepnosc_do_jazdy";

#[derive(Clone)]
pub struct PgHorseStore {
    pool: PgPool,
}

impl PgHorseStore {
    pub fn new(pool: PgPool) -> Self {
        PgHorseStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the horses table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id SERIAL PRIMARY KEY,
                rasa VARCHAR(100) NOT NULL,
                wiek INTEGER NOT NULL,
                dostepnosc_do_jazdy BOOLEAN NOT NULL
            )
            "#,
            quote_ident(HORSES_TABLE)
        );
        sqlx::query(&ddl).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl HorseStore for PgHorseStore {
    async fn list(&self, filter: AvailabilityFilter) -> Result<Vec<Horse>, AppError> {
        let table = quote_ident(HORSES_TABLE);
        let rows = match filter.as_bool() {
            Some(available) => {
                let sql = format!(
                    "SELECT {} FROM {} WHERE dostepnosc_do_jazdy = $1 ORDER BY id",
                    COLUMNS, table
                );
                tracing::debug!(sql = %sql, available, "query");
                sqlx::query_as::<_, Horse>(&sql)
                    .bind(available)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, table);
                tracing::debug!(sql = %sql, "query");
                sqlx::query_as::<_, Horse>(&sql).fetch_all(&self.pool).await?
            }
        };
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Horse>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, quote_ident(HORSES_TABLE));
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Horse>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, input: &HorseInput) -> Result<Horse, AppError> {
        let sql = format!(
            "INSERT INTO {} (rasa, wiek, dostepnosc_do_jazdy) VALUES ($1, $2, $3) RETURNING {}",
            quote_ident(HORSES_TABLE),
            COLUMNS
        );
        tracing::debug!(sql = %sql, params = ?input, "query");
        let row = sqlx::query_as::<_, Horse>(&sql)
            .bind(&input.breed)
            .bind(input.age)
            .bind(input.available_for_riding)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, age: i32, available_for_riding: bool) -> Result<Option<Horse>, AppError> {
        let sql = format!(
            "UPDATE {} SET wiek = $2, dostepnosc_do_jazdy = $3 WHERE id = $1 RETURNING {}",
            quote_ident(HORSES_TABLE),
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, age, available_for_riding, "query");
        let row = sqlx::query_as::<_, Horse>(&sql)
            .bind(id)
            .bind(age)
            .bind(available_for_riding)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", quote_ident(HORSES_TABLE));
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Connect to the `postgres` admin database and create the target database from the URL if missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, db_name) = admin_options(database_url)?;
    let db_name = match db_name {
        Some(name) if !name.is_empty() && name != "postgres" => name,
        _ => return Ok(()),
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` admin database on the same server, plus the target database name (if any).
fn admin_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), AppError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let db_name = opts.get_database().map(str::to_string);
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_name_is_read_from_url() {
        let (admin, name) = admin_options("postgres://u:p@localhost:5432/stadnina?sslmode=disable").unwrap();
        assert_eq!(name.as_deref(), Some("stadnina"));
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "localhost");
        assert_eq!(admin.get_port(), 5432);
    }

    #[test]
    fn url_without_database_path_has_no_target() {
        let (admin, name) = admin_options("postgres://u:p@localhost:5432").unwrap();
        assert_eq!(name, None);
        assert_eq!(admin.get_host(), "localhost");
        assert_eq!(admin.get_database(), Some("postgres"));
    }

    #[test]
    fn slashes_in_query_do_not_affect_db_name() {
        let (admin, name) = admin_options("postgres://u@localhost/stadnina?sslrootcert=/etc/ssl/root.crt").unwrap();
        assert_eq!(name.as_deref(), Some("stadnina"));
        assert_eq!(admin.get_host(), "localhost");
        assert_eq!(admin.get_database(), Some("postgres"));
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(quote_ident("konie"), "\"konie\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }
}
