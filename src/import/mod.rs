use anyhow::*;
use std::fs;
use std::path::Path;

pub mod diagnostics;
pub mod header;
pub mod model;
mod number;
pub mod question_type;
mod row;
pub mod sections;
pub mod settings;
pub mod template;
pub mod tokenizer;

pub use self::diagnostics::{Diagnostics, Severity, ValidationError};
pub use self::model::*;
pub use self::question_type::QuestionType;
pub use self::settings::Settings;

use self::header::HeaderIndex;
use self::row::{import_row, RowOutcome};
use self::sections::SectionTable;
use self::tokenizer::split_line;


const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Default)]
pub struct CsvImporter {
    settings: Settings,
}

impl CsvImporter {
    pub fn new(settings: Settings) -> Self {
        CsvImporter { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn parse(&self, content: &str) -> CsvParseResult {
        let mut diagnostics = Diagnostics::default();

        let lines: Vec<&str> = content
            .trim_start_matches(BYTE_ORDER_MARK)
            .trim()
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .collect();

        if lines.len() < 2 {
            diagnostics.error(
                0,
                "file",
                "CSV file must contain a header row and at least one data row",
            );
            return finish(Vec::new(), diagnostics);
        }

        let header = HeaderIndex::new(&split_line(lines[0], self.settings.delimiter));
        if !header.validate(&mut diagnostics) {
            return finish(Vec::new(), diagnostics);
        }

        let mut sections = SectionTable::default();
        for (index, line) in lines.iter().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let row = index + 1;
            let values = split_line(line, self.settings.delimiter);
            let record = header.record(&values);
            if import_row(row, &record, &mut sections, &mut diagnostics) == RowOutcome::Skipped {
                tracing::debug!("skipped row {} of CSV import", row);
            }
        }

        finish(sections.finalize(), diagnostics)
    }
}

fn finish(sections: Vec<ParsedSection>, diagnostics: Diagnostics) -> CsvParseResult {
    let result = CsvParseResult {
        is_valid: diagnostics.is_clean(),
        sections,
        errors: diagnostics.errors,
        warnings: diagnostics.warnings,
    };
    tracing::info!(
        "parsed CSV import: {} sections, {} questions, {} errors, {} warnings",
        result.sections.len(),
        result.question_count(),
        result.errors.len(),
        result.warnings.len()
    );
    result
}

pub fn parse_csv(content: &str) -> CsvParseResult {
    CsvImporter::default().parse(content)
}

pub struct ImportFile;

impl ImportFile {
    pub fn open(source: &Path) -> Result<CsvParseResult> {
        ImportFile::open_with(source, &CsvImporter::default())
    }

    pub fn open_with(source: &Path, importer: &CsvImporter) -> Result<CsvParseResult> {
        let content = fs::read_to_string(source)
            .with_context(|| format!("Could not read CSV file {:?}", source))?;
        Ok(importer.parse(&content))
    }
}
