/*!
# Core Module

Shared building blocks for the checker: the error type, source positions
and the file reader.
*/

pub mod errors;
pub mod position;
pub mod fs_utils;

pub use errors::{CheckError, CheckResult};
pub use position::Position;
pub use fs_utils::read_source_file;
