use anyhow::*;
use serde::Serialize;

use crate::import::{CsvParseResult, Difficulty, ParsedOption, ParsedQuestion, ParsedSection, QuestionType};


/// An image that still has to be uploaded after the import is confirmed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PendingImage {
    pub section: String,
    pub question: usize,
    pub option: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImportSummary {
    pub section_count: usize,
    pub question_count: usize,
    pub total_marks: f64,
    pub total_duration: i64,
    pub error_count: usize,
    pub warning_count: usize,
    pub pending_images: Vec<PendingImage>,
}

impl ImportSummary {
    pub fn from_result(result: &CsvParseResult) -> Self {
        let mut pending_images = Vec::new();
        for section in result.sections.iter() {
            for (index, question) in section.questions.iter().enumerate() {
                if question.requires_image {
                    pending_images.push(PendingImage {
                        section: section.name.clone(),
                        question: index + 1,
                        option: None,
                    });
                }
                for option in question.options.iter().filter(|o| o.requires_image) {
                    pending_images.push(PendingImage {
                        section: section.name.clone(),
                        question: index + 1,
                        option: Some(option.option_order),
                    });
                }
            }
        }

        ImportSummary {
            section_count: result.sections.len(),
            question_count: result.question_count(),
            total_marks: result
                .sections
                .iter()
                .flat_map(|s| s.questions.iter())
                .map(|q| q.marks)
                .sum(),
            total_duration: result.sections.iter().map(|s| s.duration).sum(),
            error_count: result.errors.len(),
            warning_count: result.warnings.len(),
            pending_images,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DraftOption {
    pub option_text: String,
    pub is_correct: bool,
    pub requires_image: bool,
    pub option_order: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DraftQuestion {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub text: String,
    pub marks: f64,
    pub negative_marks: f64,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub requires_image: bool,
    pub options: Vec<DraftOption>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DraftSection {
    pub name: String,
    pub section_order: i64,
    pub duration: i64,
    pub marks_per_question: f64,
    pub questions: Vec<DraftQuestion>,
}

/// Sections ready to be sent to exam creation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExamDraft {
    pub sections: Vec<DraftSection>,
}

impl ExamDraft {
    /// Builds the payload for an import. Imports with errors cannot be confirmed;
    /// warnings do not block.
    pub fn confirm(result: &CsvParseResult) -> Result<ExamDraft> {
        if !result.errors.is_empty() {
            return Err(anyhow!(
                "Cannot confirm import with {} unresolved error(s)",
                result.errors.len()
            ));
        }
        if result.sections.is_empty() {
            return Err(anyhow!("Cannot confirm an import without sections"));
        }
        let sections = result.sections.iter().map(DraftSection::from).collect();
        Ok(ExamDraft { sections })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Could not serialize exam draft")
    }
}

impl From<&ParsedOption> for DraftOption {
    fn from(option: &ParsedOption) -> Self {
        DraftOption {
            option_text: option.option_text.clone(),
            is_correct: option.is_correct,
            requires_image: option.requires_image,
            option_order: option.option_order,
        }
    }
}

impl From<&ParsedQuestion> for DraftQuestion {
    fn from(question: &ParsedQuestion) -> Self {
        DraftQuestion {
            question_type: question.question_type,
            text: question.text.clone(),
            marks: question.marks,
            negative_marks: question.negative_marks,
            explanation: question.explanation.clone(),
            difficulty: question.difficulty,
            requires_image: question.requires_image,
            options: question.options.iter().map(DraftOption::from).collect(),
        }
    }
}

impl From<&ParsedSection> for DraftSection {
    fn from(section: &ParsedSection) -> Self {
        DraftSection {
            name: section.name.clone(),
            section_order: section.section_order,
            duration: section.duration,
            marks_per_question: section.marks_per_question,
            questions: section.questions.iter().map(DraftQuestion::from).collect(),
        }
    }
}
