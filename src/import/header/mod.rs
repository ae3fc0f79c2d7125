use std::collections::HashMap;

use crate::import::diagnostics::Diagnostics;


pub const SECTION_NAME: &str = "section_name";
pub const SECTION_ORDER: &str = "section_order";
pub const SECTION_DURATION: &str = "section_duration";
pub const MARKS_PER_QUESTION: &str = "marks_per_question";
pub const QUESTION_TYPE: &str = "question_type";
pub const QUESTION_TEXT: &str = "question_text";
pub const MARKS: &str = "marks";
pub const NEGATIVE_MARKS: &str = "negative_marks";
pub const EXPLANATION: &str = "explanation";
pub const DIFFICULTY: &str = "difficulty";
pub const REQUIRES_IMAGE: &str = "requires_image";

pub const REQUIRED_COLUMNS: [&str; 4] = [SECTION_NAME, QUESTION_TYPE, QUESTION_TEXT, MARKS];

pub const OPTIONAL_COLUMNS: [&str; 7] = [
    SECTION_ORDER,
    SECTION_DURATION,
    MARKS_PER_QUESTION,
    NEGATIVE_MARKS,
    EXPLANATION,
    DIFFICULTY,
    REQUIRES_IMAGE,
];

pub fn option_text_column(n: usize) -> String {
    format!("option_{}_text", n)
}

pub fn option_correct_column(n: usize) -> String {
    format!("option_{}_correct", n)
}

pub fn option_requires_image_column(n: usize) -> String {
    format!("option_{}_requires_image", n)
}

/// Column name to position, built once from the header line.
#[derive(Debug)]
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn new(cells: &[String]) -> Self {
        let columns = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (cell.trim().to_lowercase(), index))
            .collect();
        HeaderIndex { columns }
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|column| !self.contains(column))
            .copied()
            .collect()
    }

    /// Records one error per missing required column and reports whether the
    /// header can be used to read data rows.
    pub fn validate(&self, diagnostics: &mut Diagnostics) -> bool {
        let missing = self.missing_required();
        for column in missing.iter() {
            diagnostics.error(
                1,
                *column,
                format!("Missing required column: {}", column),
            );
        }
        missing.is_empty()
    }

    pub fn record<'a>(&'a self, values: &'a [String]) -> Record<'a> {
        Record {
            header: self,
            values,
        }
    }
}

/// One data row viewed through the header.
pub struct Record<'a> {
    header: &'a HeaderIndex,
    values: &'a [String],
}

impl<'a> Record<'a> {
    pub fn has_column(&self, column: &str) -> bool {
        self.header.contains(column)
    }

    /// Trimmed cell value. Unknown columns and missing trailing cells read as empty.
    pub fn get(&self, column: &str) -> &'a str {
        self.header
            .columns
            .get(column)
            .and_then(|index| self.values.get(*index))
            .map(|value| value.trim())
            .unwrap_or("")
    }
}
