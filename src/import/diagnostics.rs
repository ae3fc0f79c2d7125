use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found while importing. Rows are 1-based with the header on row 1;
/// problems with the file as a whole are reported on row 0.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationError {
    pub row: usize,
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

impl Diagnostics {
    pub fn error<F: Into<String>, M: Into<String>>(&mut self, row: usize, field: F, message: M) {
        self.errors.push(ValidationError {
            row,
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
        });
    }

    pub fn warning<F: Into<String>, M: Into<String>>(&mut self, row: usize, field: F, message: M) {
        self.warnings.push(ValidationError {
            row,
            field: field.into(),
            message: message.into(),
            severity: Severity::Warning,
        });
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
