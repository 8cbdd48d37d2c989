// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::analysis::Report;
use crate::errors::PersistenceError;
use crate::observability::messages::{persistence::ReportStored, StructuredLog};
use crate::traits::ReportSink;

pub const TABLE_NAME: &str = "mytextanalyzer";

/// One persisted analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredReport {
    pub id: i64,
    pub result: String,
    pub report: Option<Report>,
}

impl StoredReport {
    fn from_db_row(row: &Row) -> Result<Self, rusqlite::Error> {
        let id: i64 = row.get("id")?;
        let result: String = row.get("result")?;
        let report_json: Option<String> = row.get("report")?;

        let report = report_json
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e)))?;

        Ok(StoredReport { id, result, report })
    }
}

/// SQLite-backed [`ReportSink`].
///
/// Reports are stored as JSON; failed analyses store a `NULL` report next to
/// their CRITICAL status line.
pub struct SqliteReportSink {
    conn: Mutex<Connection>,
}

impl SqliteReportSink {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, PersistenceError> {
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {TABLE_NAME} (
                id INTEGER PRIMARY KEY,
                result TEXT NOT NULL,
                report TEXT
            );"
        ))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, PersistenceError> {
        self.conn
            .lock()
            .map_err(|e| PersistenceError::Unavailable(e.to_string()))
    }

    pub fn stored_count(&self) -> Result<i64, PersistenceError> {
        let conn = self.lock()?;
        let count = conn.query_row(&format!("SELECT COUNT(*) FROM {TABLE_NAME}"), [], |row| {
            row.get(0)
        })?;
        Ok(count)
    }

    pub fn fetch(&self, id: i64) -> Result<Option<StoredReport>, PersistenceError> {
        let conn = self.lock()?;
        let stored = conn
            .query_row(
                &format!("SELECT id, result, report FROM {TABLE_NAME} WHERE id = ?1"),
                params![id],
                StoredReport::from_db_row,
            )
            .optional()?;
        Ok(stored)
    }
}

impl ReportSink for SqliteReportSink {
    fn store(&self, status_line: &str, report: Option<&Report>) -> Result<i64, PersistenceError> {
        let report_json = report.map(serde_json::to_string).transpose()?;

        let conn = self.lock()?;
        conn.execute(
            &format!("INSERT INTO {TABLE_NAME} (result, report) VALUES (?1, ?2)"),
            params![status_line, report_json],
        )?;
        let row_id = conn.last_insert_rowid();

        ReportStored {
            row_id,
            status_line,
            with_report: report.is_some(),
        }
        .log();
        Ok(row_id)
    }
}
