//! handles db specific functionality
//! (initialization, integrity checking, habit and completion rows)
//! every operation opens its own short-lived connection

pub mod helpers;
pub mod queries;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::params;
use rusqlite::Connection;

use crate::error::HabitError;
use queries::*;
use helpers::*;

/// representing a row from the habits table;
/// only id, name
#[derive(Debug, Clone)]
pub struct HabitRow {
    pub id: i64,
    pub name: String,
}

/// the habit store; holds only the db file path, every operation opens
/// and drops its own connection (one self-contained unit per call)
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new<P: AsRef<Path>>(path: P) -> Store {
        Store { path: path.as_ref().to_path_buf() }
    }

    /// open a connection for the scope of one operation;
    /// foreign keys are off by default in sqlite, enable per connection
    fn connect(&self) -> Result<Connection, HabitError> {
        let conn = Connection::open(&self.path)?;
        conn.execute("PRAGMA foreign_keys=ON;", params![])?;
        Ok(conn)
    }

    /// ensure both tables exist; safe to call on every startup
    pub fn init(&self) -> Result<(), HabitError> {
        let conn = self.connect()?;
        conn.execute(SQL_CREATE_HAB, ())?;
        conn.execute(SQL_CREATE_COM, ())?;
        Ok(())
    }

    /// check existing db for integrity, conforming to expected layout;
    /// compares creation schema versus one from sqlite_master
    pub fn check(&self) -> Result<(), HabitError> {
        use rusqlite::OptionalExtension;

        let conn = self.connect()?;

        let mut stmt = conn.prepare(
            "SELECT sql FROM sqlite_master WHERE type='table' AND name=?1",
        )?;

        // an absent table reports the same way as a mutated one
        let schema_hab: String = stmt
            .query_row(params![SQL_TABLEN_HAB], |row| row.get(0))
            .optional()?
            .ok_or(HabitError::SchemaMismatch(SQL_TABLEN_HAB))?;
        let schema_com: String = stmt
            .query_row(params![SQL_TABLEN_COM], |row| row.get(0))
            .optional()?
            .ok_or(HabitError::SchemaMismatch(SQL_TABLEN_COM))?;

        if comparable(schema_hab) != comparable(SQL_CREATE_HAB.to_string()) {
            return Err(HabitError::SchemaMismatch(SQL_TABLEN_HAB));
        }
        if comparable(schema_com) != comparable(SQL_CREATE_COM.to_string()) {
            return Err(HabitError::SchemaMismatch(SQL_TABLEN_COM));
        }

        Ok(())
    }

    /// insert a habit row, returns the generated id
    pub fn create_habit(
        &self,
        name: &str,
        created_at: NaiveDate,
    ) -> Result<i64, HabitError> {
        let conn = self.connect()?;

        conn.execute(
            &format!(
                "INSERT INTO {} (name, created_at) VALUES (?1, ?2)",
                SQL_TABLEN_HAB),
            params![name, created_at.format("%Y-%m-%d").to_string()],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// insert a completion record; performs no existence check itself,
    /// the declared foreign key rejects unknown habit ids
    pub fn insert_completion(
        &self,
        habit_id: i64,
        date: NaiveDate,
    ) -> Result<(), HabitError> {
        let conn = self.connect()?;

        conn.execute(
            &format!(
                "INSERT INTO {} (habit_id, date) VALUES (?1, ?2)",
                SQL_TABLEN_COM),
            params![habit_id, date.format("%Y-%m-%d").to_string()],
        )?;

        Ok(())
    }

    /// given a habit id retrieves the habit's name, None when missing
    pub fn habit_name(&self, habit_id: i64)
        -> Result<Option<String>, HabitError> {
        use rusqlite::OptionalExtension;

        let conn = self.connect()?;

        let name = conn
            .query_row(
                &format!("SELECT name FROM {} WHERE id = ?1", SQL_TABLEN_HAB),
                params![habit_id],
                |row| row.get(0),
            )
            .optional()?;

        Ok(name)
    }

    /// all completion dates of a habit, ascending
    pub fn completion_dates(&self, habit_id: i64)
        -> Result<Vec<NaiveDate>, HabitError> {
        let conn = self.connect()?;

        let mut stmt = conn.prepare(
            &format!("SELECT date FROM {}
                     WHERE habit_id = ?1 ORDER BY date ASC",
                     SQL_TABLEN_COM)
            )?;

        let db_date_data =
            stmt.query_map(params![habit_id], |row| row.get::<_, String>(0))?;

        // create data vector and use iterator to populate it
        let mut dates = Vec::new();
        for date in db_date_data {
            dates.push(parse_iso_date(&date?)?);
        }

        Ok(dates)
    }

    /// completion dates of a habit with date >= from, ascending
    pub fn completion_dates_since(
        &self,
        habit_id: i64,
        from: NaiveDate,
    ) -> Result<Vec<NaiveDate>, HabitError> {
        let conn = self.connect()?;

        let mut stmt = conn.prepare(
            &format!("SELECT date FROM {}
                     WHERE habit_id = ?1 AND date >= ?2 ORDER BY date ASC",
                     SQL_TABLEN_COM)
            )?;

        let db_date_data = stmt.query_map(
            params![habit_id, from.format("%Y-%m-%d").to_string()],
            |row| row.get::<_, String>(0),
        )?;

        let mut dates = Vec::new();
        for date in db_date_data {
            dates.push(parse_iso_date(&date?)?);
        }

        Ok(dates)
    }

    /// all habits in store-native order
    pub fn list_habits(&self) -> Result<Vec<HabitRow>, HabitError> {
        let conn = self.connect()?;

        let mut stmt = conn.prepare(
            &format!("SELECT id, name FROM {}", SQL_TABLEN_HAB)
            )?;

        let db_habit_data = stmt.query_map([], |row| {
            Ok(HabitRow {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut habits = Vec::new();
        for habit in db_habit_data {
            habits.push(habit?);
        }

        Ok(habits)
    }
}
