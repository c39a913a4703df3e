/*!
# Configuration

Optional TOML file naming the file to check, so a project can pin its
target instead of passing it on every run:

```toml
path = "lib/ui/tasks_page.dart"
format = "json"
```

Relative `path` values resolve against the directory holding the config
file. Command-line values take precedence over the file.
*/

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli_common::OutputFormat;
use crate::core::{CheckError, CheckResult};

/// Contents of a `bracket-check.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// File to scan
    pub path: Option<PathBuf>,

    /// Report format
    pub format: Option<OutputFormat>,
}

impl CheckConfig {
    /// Loads a config file and resolves its `path` against the file's directory.
    pub fn load_from_file(config_path: &Path) -> CheckResult<Self> {
        let content = std::fs::read_to_string(config_path).map_err(|source| {
            CheckError::ConfigUnavailable {
                path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config = Self::from_toml(&content).map_err(|source| CheckError::ConfigInvalid {
            path: config_path.to_path_buf(),
            source,
        })?;

        if let (Some(target), Some(base)) = (config.path.as_ref(), config_path.parent()) {
            if target.is_relative() {
                config.path = Some(base.join(target));
            }
        }

        tracing::debug!(config = %config_path.display(), file = ?config.path, "loaded config");
        Ok(config)
    }

    /// Parses TOML text without touching the file system.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Picks the target: the command-line path wins over the config file.
    pub fn resolve_target(&self, cli_path: Option<&Path>) -> CheckResult<PathBuf> {
        cli_path
            .map(Path::to_path_buf)
            .or_else(|| self.path.clone())
            .ok_or(CheckError::MissingTarget)
    }

    /// Picks the output format: the command-line value wins, text by default.
    pub fn resolve_format(&self, cli_format: Option<OutputFormat>) -> OutputFormat {
        cli_format.or(self.format).unwrap_or_default()
    }
}
