//! Аргументы командной строки

use clap::Parser;
use std::path::PathBuf;

use super::output::OutputFormat;

/// Общие аргументы: формат вывода, конфиг и уровень логирования
#[derive(Parser, Debug, Clone)]
pub struct CommonArgs {
    /// TOML config file that may name the file to check
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommonArgs {
    /// Определяет уровень логирования на основе флагов
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[clap(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn test_log_level_from_flags() {
        let cli = TestCli::parse_from(["bracket-check"]);
        assert_eq!(cli.common.log_level(), tracing::Level::WARN);

        let cli = TestCli::parse_from(["bracket-check", "-v"]);
        assert_eq!(cli.common.log_level(), tracing::Level::DEBUG);

        let cli = TestCli::parse_from(["bracket-check", "--quiet"]);
        assert_eq!(cli.common.log_level(), tracing::Level::ERROR);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(TestCli::try_parse_from(["bracket-check", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_format_values() {
        let cli = TestCli::parse_from(["bracket-check", "--format", "json"]);
        assert_eq!(cli.common.format, Some(OutputFormat::Json));
        assert!(TestCli::try_parse_from(["bracket-check", "--format", "csv"]).is_err());
    }
}
