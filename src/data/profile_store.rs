//! Sqlite-backed profile store. The UI drives `load_profile` and
//! `save_profile` through `Task::perform` and receives their settlement as
//! messages; nothing here blocks the event loop.

use std::path::{Path, PathBuf};

use sqlx::{sqlite::SqliteConnectOptions, sqlite::SqlitePoolOptions, Row, SqlitePool};
use tokio::fs;

use crate::profile::ProfileRecord;

pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fruitguard")
        .join("profile.db")
}

pub async fn load_profile(db_path: PathBuf) -> Result<ProfileRecord, String> {
    let pool = open_pool(&db_path).await?;
    ensure_schema(&pool).await?;

    let row = sqlx::query(
        r#"
        SELECT first_name, last_name, email, avatar_url, role
        FROM profile
        WHERE id = 1
        "#,
    )
    .fetch_optional(&pool)
    .await
    .map_err(|err| format!("Failed to load profile: {err}"))?;

    let Some(row) = row else {
        return Err("Failed to load profile".to_owned());
    };

    Ok(ProfileRecord {
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        avatar_url: row.get("avatar_url"),
        role: row.get("role"),
    })
}

pub async fn save_profile(db_path: PathBuf, record: ProfileRecord) -> Result<(), String> {
    let pool = open_pool(&db_path).await?;
    ensure_schema(&pool).await?;

    sqlx::query(
        r#"
        INSERT INTO profile (id, first_name, last_name, email, avatar_url, role)
        VALUES (1, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            first_name = excluded.first_name,
            last_name = excluded.last_name,
            email = excluded.email,
            avatar_url = excluded.avatar_url,
            role = excluded.role
        "#,
    )
    .bind(&record.first_name)
    .bind(&record.last_name)
    .bind(&record.email)
    .bind(&record.avatar_url)
    .bind(&record.role)
    .execute(&pool)
    .await
    .map_err(|err| format!("Failed to save profile: {err}"))?;

    Ok(())
}

async fn open_pool(db_path: &Path) -> Result<SqlitePool, String> {
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|err| format!("Failed to create data directory: {err}"))?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|err| format!("Failed to connect to database: {err}"))
}

async fn ensure_schema(pool: &SqlitePool) -> Result<(), String> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profile (
            id INTEGER PRIMARY KEY,
            first_name TEXT,
            last_name TEXT,
            email TEXT,
            avatar_url TEXT,
            role TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|err| format!("Failed to create schema: {err}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_without_stored_profile_fails() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("profile.db");

        let result = load_profile(db_path).await;
        assert_eq!(result, Err("Failed to load profile".to_owned()));
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("profile.db");

        let record = ProfileRecord {
            first_name: Some("Esther".to_owned()),
            last_name: Some("Nyambura".to_owned()),
            email: Some("esthernyambura@example.com".to_owned()),
            avatar_url: None,
            role: Some("Agrovet".to_owned()),
        };

        save_profile(db_path.clone(), record.clone()).await.unwrap();
        let loaded = load_profile(db_path.clone()).await.unwrap();
        assert_eq!(loaded, record);

        // A second save overwrites the stored row.
        let updated = ProfileRecord {
            first_name: Some("Jane".to_owned()),
            ..record
        };
        save_profile(db_path.clone(), updated.clone()).await.unwrap();
        assert_eq!(load_profile(db_path).await.unwrap(), updated);
    }
}
