// positivador-core/src/domain/calendar.rs
//
// Monthly source tables are named `<prefix><month name>_<year>`, with the
// month spelled in Portuguese. This module maps those names to `YYYY-MM` keys.

use std::fmt;

use regex::Regex;
use serde::{Serialize, Serializer};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::error::DomainError;

const MONTH_NAMES: [&str; 12] = [
    "janeiro", "fevereiro", "marco", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Calendar month of a source table. Ordering is chronological, which is also
/// the lexicographic order of the rendered `YYYY-MM` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Short Portuguese display label (`Jan`, `Fev`, ...).
    pub fn label(&self) -> &'static str {
        MONTH_LABELS[(self.month - 1) as usize]
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Lower-cases and strips diacritics so `Março`, `MARÇO`, `marco` and the
/// decomposed `marc\u{327}o` all fold to the same token.
pub fn fold_accents(token: &str) -> String {
    token
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Month number (1-12) for a Portuguese month name, accent and case insensitive.
pub fn month_number(token: &str) -> Option<u32> {
    let folded = fold_accents(token);
    MONTH_NAMES
        .iter()
        .position(|name| *name == folded)
        .map(|idx| idx as u32 + 1)
}

/// A discovered monthly table together with its canonical month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    pub name: String,
    pub month: MonthKey,
}

/// Naming convention of the monthly tables for one reporting year.
#[derive(Debug, Clone)]
pub struct TablePattern {
    regex: Regex,
    year: i32,
}

impl TablePattern {
    pub fn new(prefix: &str, year: i32) -> Result<Self, DomainError> {
        let pattern = format!(r"(?i)^{}([\p{{L}}\p{{M}}]+)_{}$", regex::escape(prefix), year);
        let regex = Regex::new(&pattern).map_err(|e| DomainError::InvalidTablePattern {
            prefix: prefix.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { regex, year })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// `None` when the identifier does not follow the convention or the month
    /// token is not a known month name.
    pub fn month_key(&self, table_name: &str) -> Option<MonthKey> {
        let captures = self.regex.captures(table_name)?;
        let month = month_number(captures.get(1)?.as_str())?;
        MonthKey::new(self.year, month)
    }

    pub fn classify(&self, table_name: &str) -> Option<SourceTable> {
        self.month_key(table_name).map(|month| SourceTable {
            name: table_name.to_string(),
            month,
        })
    }
}
