use crate::import::diagnostics::Diagnostics;
use crate::import::header::*;
use crate::import::model::{Difficulty, ParsedOption, ParsedQuestion};
use crate::import::number::{parse_bool, parse_float, parse_integer};
use crate::import::question_type::QuestionType;
use crate::import::sections::{SectionMetadata, SectionTable};

#[cfg(test)]
mod tests;

#[derive(Debug, Eq, PartialEq)]
pub enum RowOutcome {
    Imported,
    Skipped,
}

/// Validates one data row and folds it into `sections`.
///
/// Problems are recorded in `diagnostics`. A missing section name, question
/// type, question text or a bad mark value stops the row before a question is
/// built. Every other problem still yields a question, flagged so it can be
/// corrected from the preview.
pub fn import_row(
    row: usize,
    record: &Record,
    sections: &mut SectionTable,
    diagnostics: &mut Diagnostics,
) -> RowOutcome {
    let section_name = record.get(SECTION_NAME);
    if section_name.is_empty() {
        diagnostics.error(row, SECTION_NAME, "Section name is required");
        return RowOutcome::Skipped;
    }

    if !sections.contains(section_name) {
        open_section(row, section_name, record, sections, diagnostics);
    }

    let raw_type = record.get(QUESTION_TYPE);
    if raw_type.is_empty() {
        diagnostics.error(row, QUESTION_TYPE, "Question type is required");
        return RowOutcome::Skipped;
    }
    let question_type = match QuestionType::normalize(raw_type) {
        Some(question_type) => question_type,
        None => {
            diagnostics.error(
                row,
                QUESTION_TYPE,
                format!(
                    "Invalid question type \"{}\". {}",
                    raw_type,
                    QuestionType::describe_accepted()
                ),
            );
            return RowOutcome::Skipped;
        }
    };

    let text = record.get(QUESTION_TEXT);
    if text.is_empty() {
        diagnostics.error(row, QUESTION_TEXT, "Question text is required");
        return RowOutcome::Skipped;
    }

    let marks = match parse_float(record.get(MARKS)) {
        Some(marks) if marks > 0.0 => marks,
        _ => {
            diagnostics.error(row, MARKS, "Marks must be a positive number");
            return RowOutcome::Skipped;
        }
    };

    let mut negative_marks = parse_float(record.get(NEGATIVE_MARKS)).unwrap_or(0.0);
    if negative_marks < 0.0 {
        diagnostics.warning(
            row,
            NEGATIVE_MARKS,
            "Negative marks cannot be below zero, using 0",
        );
        negative_marks = 0.0;
    }

    let explanation = record.get(EXPLANATION);
    if explanation.is_empty() {
        diagnostics.warning(row, EXPLANATION, "No explanation provided");
    }

    let difficulty = read_difficulty(row, record, diagnostics);

    let mut question = ParsedQuestion {
        question_type,
        text: text.to_owned(),
        marks,
        negative_marks,
        explanation: explanation.to_owned(),
        difficulty,
        requires_image: parse_bool(record.get(REQUIRES_IMAGE)),
        options: Vec::new(),
        has_error: false,
        error_messages: Vec::new(),
    };

    if question_type.has_options() {
        question.options = read_options(record);
        check_options(row, &mut question, diagnostics);
    } else if !read_options(record).is_empty() {
        diagnostics.warning(
            row,
            "options",
            "Options are ignored for numerical questions",
        );
    }

    sections.push_question(section_name, question);
    RowOutcome::Imported
}

fn open_section(
    row: usize,
    name: &str,
    record: &Record,
    sections: &mut SectionTable,
    diagnostics: &mut Diagnostics,
) {
    let metadata = SectionMetadata {
        section_order: parse_integer(record.get(SECTION_ORDER)),
        duration: parse_integer(record.get(SECTION_DURATION)),
        marks_per_question: parse_float(record.get(MARKS_PER_QUESTION)),
    };
    sections.materialize(name, metadata);

    if let Some(section) = sections.get_mut(name) {
        if section.duration == 0 {
            let message = format!("Section \"{}\" has no duration set", name);
            diagnostics.warning(row, SECTION_DURATION, message.as_str());
            section.error_messages.push(message);
        }
    }
}

fn read_difficulty(row: usize, record: &Record, diagnostics: &mut Diagnostics) -> Difficulty {
    let raw = record.get(DIFFICULTY).to_lowercase();
    if raw.is_empty() {
        return Difficulty::default();
    }
    match Difficulty::parse(&raw) {
        Some(difficulty) => difficulty,
        None => {
            diagnostics.warning(
                row,
                DIFFICULTY,
                format!(
                    "Invalid difficulty \"{}\", using medium. Valid values: easy, medium, hard",
                    raw
                ),
            );
            Difficulty::default()
        }
    }
}

/// Reads `option_{n}_*` triples for n = 1, 2, ... until the text column does
/// not exist. Options with empty text are skipped but do not stop the scan.
fn read_options(record: &Record) -> Vec<ParsedOption> {
    let mut options = Vec::new();
    let mut n = 1;
    loop {
        let text_column = option_text_column(n);
        if !record.has_column(&text_column) {
            break;
        }
        let text = record.get(&text_column);
        if !text.is_empty() {
            let requires_image = parse_bool(record.get(&option_requires_image_column(n)));
            options.push(ParsedOption {
                option_text: text.to_owned(),
                is_correct: parse_bool(record.get(&option_correct_column(n))),
                requires_image,
                option_order: n,
                has_error: requires_image,
                error_message: if requires_image {
                    Some(format!("Option {} requires an image upload", n))
                } else {
                    None
                },
            });
        }
        n += 1;
    }
    options
}

fn check_options(row: usize, question: &mut ParsedQuestion, diagnostics: &mut Diagnostics) {
    let mut problems = Vec::new();
    if question.options.is_empty() {
        problems.push(format!(
            "A {} question needs at least one option",
            question.question_type
        ));
    }
    let correct = question.correct_option_count();
    if correct == 0 {
        problems.push("At least one option must be marked correct".to_owned());
    }
    if question.question_type == QuestionType::Single && correct > 1 {
        problems.push(format!(
            "A single question must have exactly one correct option, found {}",
            correct
        ));
    }

    for problem in problems {
        diagnostics.error(row, "options", problem.as_str());
        question.flag(problem);
    }
}
