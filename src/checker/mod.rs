/*!
# Bracket Balance Checker

Single pass over a text with a stack of open brackets. The first extra or
mismatched closer ends the scan; otherwise the remaining stack decides
between [`Outcome::Unclosed`] and [`Outcome::Balanced`].

```rust
use bracket_check::checker::check_source;

assert_eq!(check_source("(]").to_string(), "Mismatched ( vs ] at 1");
```
*/

pub mod brackets;
pub mod outcome;
pub mod scanner;

use std::path::Path;
use tracing::debug;

use crate::core::{read_source_file, CheckResult};

pub use brackets::{Bracket, BracketKind};
pub use outcome::Outcome;
pub use scanner::BracketScanner;

/// Scans in-memory text.
pub fn check_source(source: &str) -> Outcome {
    BracketScanner::new().scan(source)
}

/// Reads `path` and scans its contents.
pub fn check_file(path: &Path) -> CheckResult<Outcome> {
    let source = read_source_file(path)?;
    let outcome = check_source(&source);
    debug!(path = %path.display(), outcome = %outcome, line = ?outcome.line(), "scan finished");
    Ok(outcome)
}
