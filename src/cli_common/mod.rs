//! Общий модуль для CLI
//!
//! Содержит функциональность, используемую бинарником `bracket-check`:
//! - Инициализация логирования
//! - Вывод ошибок
//! - Форматирование отчёта

use anyhow::Result;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod output;

pub use args::CommonArgs;
pub use output::{OutputFormat, OutputWriter, Report};

/// Инициализирует систему логирования.
///
/// Логи идут в stderr: stdout занят строкой отчёта.
/// `level` действует, только если `RUST_LOG` не задан.
pub fn init_logging(level: tracing::Level) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}

/// Выводит ошибку
pub fn print_error(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red());
}
