use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::Path;
use std::process;

use exam_import::{generate_template, CsvImporter, ImportFile, ImportSummary, Settings, ValidationError};

const USAGE: &str = "Usage: exam-import [--json] <file.csv> | exam-import --template";

fn settings_from_env() -> Result<Settings> {
    let mut settings = Settings::default();
    if let Ok(value) = env::var("EXAM_IMPORT_DELIMITER") {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(delimiter), None) => settings.delimiter = delimiter,
            _ => {
                return Err(anyhow!(
                    "EXAM_IMPORT_DELIMITER must be a single character, got {:?}",
                    value
                ))
            }
        }
    }
    Ok(settings)
}

fn print_diagnostic(diagnostic: &ValidationError) {
    println!(
        "  row {} [{}] {}",
        diagnostic.row, diagnostic.field, diagnostic.message
    );
}

fn run() -> Result<bool> {
    let settings = settings_from_env()?;
    let args: Vec<String> = env::args().skip(1).collect();

    let (json, path) = match args.iter().map(|a| a.as_str()).collect::<Vec<&str>>().as_slice() {
        ["--template"] => {
            print!("{}", generate_template(&settings)?);
            return Ok(true);
        }
        ["--json", path] => (true, path.to_string()),
        [path] => (false, path.to_string()),
        _ => return Err(anyhow!(USAGE)),
    };

    let importer = CsvImporter::new(settings);
    let path = Path::new(&path);
    let result = ImportFile::open_with(path, &importer)
        .with_context(|| format!("Could not import {:?}", path))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result.is_valid);
    }

    let summary = ImportSummary::from_result(&result);
    println!(
        "{} sections, {} questions, {} marks, {} seconds",
        summary.section_count, summary.question_count, summary.total_marks, summary.total_duration
    );
    if !summary.pending_images.is_empty() {
        println!("{} image upload(s) pending", summary.pending_images.len());
    }
    if !result.errors.is_empty() {
        println!("Errors:");
        result.errors.iter().for_each(print_diagnostic);
    }
    if !result.warnings.is_empty() {
        println!("Warnings:");
        result.warnings.iter().for_each(print_diagnostic);
    }

    Ok(result.is_valid)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(true) => (),
        Ok(false) => process::exit(1),
        Err(e) => {
            tracing::error!("{:#}", e);
            process::exit(2);
        }
    }
}
