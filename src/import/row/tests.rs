use super::*;
use crate::import::tokenizer::split_line;

const HEADER: &str = "section_name,section_duration,question_type,question_text,marks,explanation,option_1_text,option_1_correct,option_2_text,option_2_correct";

fn run(line: &str) -> (RowOutcome, SectionTable, Diagnostics) {
    let header = HeaderIndex::new(&split_line(HEADER, ','));
    let values = split_line(line, ',');
    let mut sections = SectionTable::default();
    let mut diagnostics = Diagnostics::default();
    let outcome = import_row(2, &header.record(&values), &mut sections, &mut diagnostics);
    (outcome, sections, diagnostics)
}

#[test]
fn imports_valid_row() {
    let (outcome, sections, diagnostics) = run("GK,60,single,q,1,x,a,true,b,false");
    assert_eq!(outcome, RowOutcome::Imported);
    assert!(diagnostics.errors.is_empty());
    assert!(diagnostics.warnings.is_empty());
    assert_eq!(sections.finalize()[0].questions.len(), 1);
}

#[test]
fn section_is_opened_before_type_is_checked() {
    let (outcome, sections, diagnostics) = run("GK,,essay,q,1,x,a,true,b,false");
    assert_eq!(outcome, RowOutcome::Skipped);
    assert!(sections.contains("GK"));
    assert_eq!(diagnostics.errors.len(), 1);
    // Duration warning is recorded before the row is abandoned
    assert_eq!(diagnostics.warnings.len(), 1);
    assert_eq!(diagnostics.warnings[0].field, SECTION_DURATION);
}

#[test]
fn empty_section_name_opens_nothing() {
    let (outcome, sections, diagnostics) = run(",60,single,q,1,x,a,true,b,false");
    assert_eq!(outcome, RowOutcome::Skipped);
    assert!(sections.is_empty());
    assert_eq!(diagnostics.errors[0].field, SECTION_NAME);
}

#[test]
fn option_problems_still_import_the_question() {
    let (outcome, sections, diagnostics) = run("GK,60,single,q,1,x,,,,");
    assert_eq!(outcome, RowOutcome::Imported);
    assert_eq!(diagnostics.errors.len(), 2);
    let sections = sections.finalize();
    assert!(sections[0].questions[0].has_error);
    assert!(sections[0].has_error);
}

#[test]
fn marks_accept_decimal_values() {
    let (outcome, sections, _) = run("GK,60,multiple,q,0.5,x,a,true,b,true");
    assert_eq!(outcome, RowOutcome::Imported);
    assert_eq!(sections.finalize()[0].questions[0].marks, 0.5);
}
