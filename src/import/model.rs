use serde::Serialize;

use crate::import::diagnostics::ValidationError;
use crate::import::question_type::QuestionType;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn parse(value: &str) -> Option<Difficulty> {
        match value {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParsedOption {
    pub option_text: String,
    pub is_correct: bool,
    pub requires_image: bool,
    pub option_order: usize,
    #[serde(rename = "hasError", skip_serializing_if = "std::ops::Not::not")]
    pub has_error: bool,
    #[serde(rename = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParsedQuestion {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub text: String,
    pub marks: f64,
    pub negative_marks: f64,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub requires_image: bool,
    pub options: Vec<ParsedOption>,
    #[serde(rename = "hasError", skip_serializing_if = "std::ops::Not::not")]
    pub has_error: bool,
    #[serde(rename = "errorMessages", skip_serializing_if = "Vec::is_empty")]
    pub error_messages: Vec<String>,
}

impl ParsedQuestion {
    pub fn correct_option_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_correct).count()
    }

    pub(crate) fn flag(&mut self, message: String) {
        self.has_error = true;
        self.error_messages.push(message);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParsedSection {
    pub name: String,
    pub section_order: i64,
    pub duration: i64,
    pub marks_per_question: f64,
    pub questions: Vec<ParsedQuestion>,
    #[serde(rename = "hasError", skip_serializing_if = "std::ops::Not::not")]
    pub has_error: bool,
    #[serde(rename = "errorMessages", skip_serializing_if = "Vec::is_empty")]
    pub error_messages: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CsvParseResult {
    pub sections: Vec<ParsedSection>,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
    #[serde(rename = "isValid")]
    pub is_valid: bool,
}

impl CsvParseResult {
    pub fn section(&self, name: &str) -> Option<&ParsedSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }
}
