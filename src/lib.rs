pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod reader;
pub mod report;
pub mod scan;

pub use error::{H5LintError, Result};
pub use report::{Report, exit_code};
pub use scan::Scanner;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_FATAL: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
