pub mod draft;
pub mod import;

pub use crate::draft::{ExamDraft, ImportSummary, PendingImage};
pub use crate::import::template::{generate_csv_template, generate_template};
pub use crate::import::{
    parse_csv, CsvImporter, CsvParseResult, Difficulty, ImportFile, ParsedOption, ParsedQuestion,
    ParsedSection, QuestionType, Settings, Severity, ValidationError,
};
