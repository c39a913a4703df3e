/*!
# bracket-check

Reports the first unbalanced bracket (`()`, `[]`, `{}`) in a source file.

The scan stops at the first extra or mismatched closer. If it reaches the end
of the file, the earliest bracket still open is reported, or `All balanced`.

## Usage

```bash
bracket-check lib/ui/tasks_page.dart
bracket-check --config bracket-check.toml --format json
```

## Library

```rust
use bracket_check::{check_source, Outcome};

let outcome = check_source("fn main() {\n    let v = vec![1, 2;\n}");
assert!(matches!(outcome, Outcome::Mismatched { .. }));
assert_eq!(outcome.to_string(), "Mismatched [ vs } at 3");
```
*/

pub mod checker;
pub mod cli_common;
pub mod config;
pub mod core;

pub use checker::{check_file, check_source, BracketKind, Outcome};
pub use config::CheckConfig;
pub use self::core::{CheckError, CheckResult, Position};
