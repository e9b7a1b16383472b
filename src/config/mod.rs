mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{Config, ReportConfig, SamplerKind, ScanConfig};

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
