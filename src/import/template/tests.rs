use super::*;
use crate::import::{parse_csv, CsvImporter, QuestionType};

#[test]
fn is_deterministic() {
    let first = generate_csv_template().unwrap();
    let second = generate_csv_template().unwrap();
    assert_eq!(first, second);
}

#[test]
fn has_header_and_one_example_row() {
    let template = generate_csv_template().unwrap();
    let lines: Vec<&str> = template.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("section_name,section_order,section_duration"));
    assert!(lines[0].ends_with("option_4_text,option_4_correct,option_4_requires_image"));
}

#[test]
fn lists_every_column() {
    let columns = template_columns(4);
    for column in REQUIRED_COLUMNS.iter().chain(OPTIONAL_COLUMNS.iter()) {
        assert!(columns.iter().any(|c| c == column), "{}", column);
    }
    assert_eq!(columns.len(), REQUIRED_COLUMNS.len() + OPTIONAL_COLUMNS.len() + 12);
}

#[test]
fn parses_back_cleanly() {
    let result = parse_csv(&generate_csv_template().unwrap());
    assert!(result.is_valid, "{:?}", result.errors);
    assert_eq!(result.sections.len(), 1);
    assert_eq!(result.question_count(), 1);

    let question = &result.sections[0].questions[0];
    assert_eq!(question.question_type, QuestionType::Single);
    assert_eq!(question.options.len(), 4);
    assert_eq!(question.correct_option_count(), 1);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn honors_custom_delimiter_and_slots() {
    let settings = Settings {
        delimiter: ';',
        template_option_slots: 6,
    };
    let template = generate_template(&settings).unwrap();
    assert!(template.contains("option_6_requires_image"));

    let result = CsvImporter::new(settings).parse(&template);
    assert!(result.is_valid, "{:?}", result.errors);
    assert_eq!(result.sections[0].questions[0].options.len(), 4);
}

#[test]
fn rejects_non_ascii_delimiter() {
    let settings = Settings {
        delimiter: '\u{00a7}',
        ..Settings::default()
    };
    assert!(generate_template(&settings).is_err());
}
