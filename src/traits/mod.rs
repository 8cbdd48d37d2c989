pub mod loader;
pub mod sink;

pub use loader::ResourceLoader;
pub use sink::ReportSink;
