// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Persistence of status lines and reports.

mod sqlite;

pub use sqlite::{SqliteReportSink, StoredReport, TABLE_NAME};
