use crate::analysis::Report;
use crate::errors::PersistenceError;

/// Destination for finished analyses.
///
/// `report` is `None` for failed analyses; the status line is always stored.
pub trait ReportSink: Send + Sync {
    fn store(&self, status_line: &str, report: Option<&Report>) -> Result<i64, PersistenceError>;
}
