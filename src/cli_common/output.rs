//! Модуль для форматирования и вывода отчёта

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;

use crate::checker::Outcome;

/// Формат вывода результата
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Одна строка вида `Mismatched ( vs ] at 1`
    #[default]
    Text,
    /// Одна строка JSON с позициями
    Json,
}

/// Отчёт о проверке одного файла
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub file: &'a Path,
    pub message: String,
    #[serde(flatten)]
    pub outcome: &'a Outcome,
}

impl<'a> Report<'a> {
    pub fn new(file: &'a Path, outcome: &'a Outcome) -> Self {
        Self {
            file,
            message: outcome.to_string(),
            outcome,
        }
    }
}

impl OutputFormat {
    /// Строка отчёта без завершающего перевода строки
    pub fn render(self, report: &Report<'_>) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(report.message.clone()),
            OutputFormat::Json => Ok(serde_json::to_string(report)?),
        }
    }
}

/// Writer для вывода отчёта
pub struct OutputWriter {
    writer: Box<dyn Write>,
    format: OutputFormat,
}

impl OutputWriter {
    /// Создает writer для stdout
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(Box::new(io::stdout()), format)
    }

    pub fn new(writer: Box<dyn Write>, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Записывает отчёт одной строкой и сбрасывает буфер
    pub fn write_report(&mut self, report: &Report<'_>) -> Result<()> {
        let line = self.format.render(report)?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}
