use super::*;
use crate::import::model::Difficulty;
use crate::import::question_type::QuestionType;

fn metadata(order: Option<i64>, duration: Option<i64>, marks: Option<f64>) -> SectionMetadata {
    SectionMetadata {
        section_order: order,
        duration,
        marks_per_question: marks,
    }
}

fn question(text: &str, has_error: bool) -> ParsedQuestion {
    ParsedQuestion {
        question_type: QuestionType::Numerical,
        text: text.to_owned(),
        marks: 1.0,
        negative_marks: 0.0,
        explanation: String::new(),
        difficulty: Difficulty::Medium,
        requires_image: false,
        options: Vec::new(),
        has_error,
        error_messages: Vec::new(),
    }
}

#[test]
fn first_metadata_wins() {
    let mut table = SectionTable::default();
    assert!(table.materialize("GK", metadata(Some(2), Some(600), Some(2.0))));
    assert!(!table.materialize("GK", metadata(Some(5), Some(60), Some(4.0))));
    let sections = table.finalize();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].section_order, 2);
    assert_eq!(sections[0].duration, 600);
    assert_eq!(sections[0].marks_per_question, 2.0);
}

#[test]
fn defaults_apply_when_columns_are_missing() {
    let mut table = SectionTable::default();
    table.materialize("A", metadata(None, None, None));
    table.materialize("B", metadata(Some(0), None, Some(0.0)));
    let sections = table.finalize();
    assert_eq!(sections[0].section_order, 1);
    assert_eq!(sections[0].duration, 0);
    assert_eq!(sections[0].marks_per_question, 1.0);
    assert_eq!(sections[1].section_order, 2);
    assert_eq!(sections[1].marks_per_question, 1.0);
}

#[test]
fn sorts_by_section_order_keeping_ties_stable() {
    let mut table = SectionTable::default();
    table.materialize("Third", metadata(Some(3), None, None));
    table.materialize("First", metadata(Some(1), None, None));
    table.materialize("Also first", metadata(Some(1), None, None));
    let names: Vec<String> = table.finalize().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["First", "Also first", "Third"]);
}

#[test]
fn questions_keep_encounter_order() {
    let mut table = SectionTable::default();
    table.materialize("GK", metadata(None, None, None));
    table.push_question("GK", question("one", false));
    table.push_question("GK", question("two", false));
    let sections = table.finalize();
    let texts: Vec<&str> = sections[0].questions.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two"]);
}

#[test]
fn flags_sections_with_flagged_questions() {
    let mut table = SectionTable::default();
    table.materialize("Clean", metadata(Some(1), None, None));
    table.materialize("Dirty", metadata(Some(2), None, None));
    table.push_question("Clean", question("ok", false));
    table.push_question("Dirty", question("ok", false));
    table.push_question("Dirty", question("broken", true));
    let sections = table.finalize();
    assert!(!sections[0].has_error);
    assert!(sections[1].has_error);
}
