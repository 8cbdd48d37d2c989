/// Default per-request timeout for remote resources (seconds)
pub const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 30;
/// User agent sent with remote fetches; some hosts refuse bare clients
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
/// Default SQLite file that receives status lines and reports
pub const DEFAULT_DATABASE: &str = "mytextanalyzer.db";
/// Subdirectory of the data dir holding the sentence model
pub const MODEL_SUBDIR: &str = "punkt";
/// File name of the sentence model inside `MODEL_SUBDIR`
pub const MODEL_FILE: &str = "english.abbrev";
