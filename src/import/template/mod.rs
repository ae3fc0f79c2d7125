use anyhow::*;

use crate::import::header::*;
use crate::import::settings::Settings;

#[cfg(test)]
mod tests;

// (text, correct, requires image) for the example row's option slots
const EXAMPLE_OPTIONS: [(&str, &str, &str); 4] = [
    ("London", "false", "false"),
    ("Paris", "true", "false"),
    ("Berlin", "false", "false"),
    ("Madrid", "false", "false"),
];

pub fn template_columns(option_slots: usize) -> Vec<String> {
    let mut columns: Vec<String> = vec![
        SECTION_NAME,
        SECTION_ORDER,
        SECTION_DURATION,
        MARKS_PER_QUESTION,
        QUESTION_TYPE,
        QUESTION_TEXT,
        MARKS,
        NEGATIVE_MARKS,
        EXPLANATION,
        DIFFICULTY,
        REQUIRES_IMAGE,
    ]
    .into_iter()
    .map(|column| column.to_owned())
    .collect();
    for n in 1..=option_slots {
        columns.push(option_text_column(n));
        columns.push(option_correct_column(n));
        columns.push(option_requires_image_column(n));
    }
    columns
}

fn example_row(option_slots: usize) -> Vec<String> {
    let mut row: Vec<String> = vec![
        "General Knowledge",
        "1",
        "1800",
        "1",
        "single",
        "What is the capital of France?",
        "1",
        "0.25",
        "Paris has been the capital of France since the 10th century.",
        "easy",
        "false",
    ]
    .into_iter()
    .map(|cell| cell.to_owned())
    .collect();
    for n in 0..option_slots {
        let (text, correct, requires_image) = EXAMPLE_OPTIONS
            .get(n)
            .copied()
            .unwrap_or(("", "false", "false"));
        row.push(text.to_owned());
        row.push(correct.to_owned());
        row.push(requires_image.to_owned());
    }
    row
}

pub fn generate_template(settings: &Settings) -> Result<String> {
    let delimiter = settings.delimiter as u32;
    if delimiter > 0x7f {
        return Err(anyhow!(
            "Template delimiter must be an ASCII character, got {:?}",
            settings.delimiter
        ));
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter as u8)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(&template_columns(settings.template_option_slots))?;
    writer.write_record(&example_row(settings.template_option_slots))?;
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Could not flush CSV template: {}", e))?;
    String::from_utf8(bytes).context("CSV template is not valid UTF-8")
}

/// The canonical import template: every column plus one example row.
pub fn generate_csv_template() -> Result<String> {
    generate_template(&Settings::default())
}
