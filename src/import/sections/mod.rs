use std::collections::HashMap;

use crate::import::model::{ParsedQuestion, ParsedSection};

#[cfg(test)]
mod tests;

/// Section-level columns as read from the first row naming a section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionMetadata {
    pub section_order: Option<i64>,
    pub duration: Option<i64>,
    pub marks_per_question: Option<f64>,
}

/// Sections in the order their names were first seen.
#[derive(Debug, Default)]
pub struct SectionTable {
    sections: Vec<ParsedSection>,
    positions: HashMap<String, usize>,
}

impl SectionTable {
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Creates the section on first sight of `name`. Metadata for a name that
    /// already exists is ignored. Returns true when a section was created.
    pub fn materialize(&mut self, name: &str, metadata: SectionMetadata) -> bool {
        if self.contains(name) {
            return false;
        }
        let section = ParsedSection {
            name: name.to_owned(),
            section_order: metadata
                .section_order
                .filter(|order| *order != 0)
                .unwrap_or(self.sections.len() as i64 + 1),
            duration: metadata.duration.unwrap_or(0),
            marks_per_question: metadata
                .marks_per_question
                .filter(|marks| *marks != 0.0)
                .unwrap_or(1.0),
            questions: Vec::new(),
            has_error: false,
            error_messages: Vec::new(),
        };
        self.positions.insert(name.to_owned(), self.sections.len());
        self.sections.push(section);
        true
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ParsedSection> {
        let position = *self.positions.get(name)?;
        self.sections.get_mut(position)
    }

    pub fn push_question(&mut self, name: &str, question: ParsedQuestion) {
        if let Some(section) = self.get_mut(name) {
            section.questions.push(question);
        }
    }

    /// Orders sections by `section_order` (ties keep first-seen order) and
    /// flags every section holding a flagged question.
    pub fn finalize(self) -> Vec<ParsedSection> {
        let mut sections = self.sections;
        sections.sort_by_key(|section| section.section_order);
        for section in sections.iter_mut() {
            if section.questions.iter().any(|q| q.has_error) {
                section.has_error = true;
            }
        }
        sections
    }
}
