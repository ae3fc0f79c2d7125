use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use unidecode::unidecode;


#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Single,
    Multiple,
    TrueFalse,
    Numerical,
}

pub const CANONICAL_TYPES: [QuestionType; 4] = [
    QuestionType::Single,
    QuestionType::Multiple,
    QuestionType::TrueFalse,
    QuestionType::Numerical,
];

// Aliases as users write them. Lookups go through `normalize` on both sides.
const ALIASES: &[(&str, QuestionType)] = &[
    ("mcq", QuestionType::Single),
    ("multiple choice", QuestionType::Single),
    ("singlechoice", QuestionType::Single),
    ("single choice", QuestionType::Single),
    ("single-correct", QuestionType::Single),
    ("single correct", QuestionType::Single),
    ("multiplechoice", QuestionType::Multiple),
    ("multi select", QuestionType::Multiple),
    ("multiselect", QuestionType::Multiple),
    ("multi-select", QuestionType::Multiple),
    ("multi correct", QuestionType::Multiple),
    ("multicorrect", QuestionType::Multiple),
    ("multi-correct", QuestionType::Multiple),
    ("multi answer", QuestionType::Multiple),
    ("multiple answers", QuestionType::Multiple),
    ("true/false", QuestionType::TrueFalse),
    ("true false", QuestionType::TrueFalse),
    ("tf", QuestionType::TrueFalse),
    ("boolean", QuestionType::TrueFalse),
    ("num", QuestionType::Numerical),
    ("numeric", QuestionType::Numerical),
];

lazy_static! {
    static ref SEPARATOR_REGEX: Regex = Regex::new("[-_]").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Single => "single",
            QuestionType::Multiple => "multiple",
            QuestionType::TrueFalse => "truefalse",
            QuestionType::Numerical => "numerical",
        }
    }

    pub fn has_options(&self) -> bool {
        *self != QuestionType::Numerical
    }

    /// Resolves a user-written type (canonical name or alias) to its canonical form.
    pub fn normalize(raw: &str) -> Option<QuestionType> {
        let key = normalize_key(raw);
        if key.is_empty() {
            return None;
        }
        CANONICAL_TYPES
            .iter()
            .find(|t| t.as_str() == key)
            .copied()
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| normalize_key(alias) == key)
                    .map(|(_, question_type)| *question_type)
            })
    }

    pub fn describe_accepted() -> String {
        format!(
            "Valid types: {}. Accepted aliases: {}",
            CANONICAL_TYPES.iter().map(|t| t.as_str()).join(", "),
            ALIASES.iter().map(|(alias, _)| *alias).join(", ")
        )
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize_key(raw: &str) -> String {
    // Spreadsheets like to autocorrect hyphens into dashes
    let folded = unidecode(raw).to_lowercase();
    let spaced = SEPARATOR_REGEX.replace_all(folded.trim(), " ");
    WHITESPACE_REGEX.replace_all(&spaced, " ").trim().to_owned()
}
