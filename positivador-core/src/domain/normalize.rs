// positivador-core/src/domain/normalize.rs
//
// Cells arrive as free text typed by hand month after month. Nothing here
// fails: unreadable values become `0.0` / `Flag::No`.

use std::fmt;

use serde::{Serialize, Serializer};

/// Lower-cased, trimmed spellings counted as "yes".
pub const AFFIRMATIVE: [&str; 7] = ["1", "true", "t", "sim", "s", "y", "yes"];

/// Two-valued flag rendered as `Sim` / `Não`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Yes,
    No,
}

impl Flag {
    pub fn from_cell(raw: Option<&str>) -> Self {
        if is_affirmative(raw) { Flag::Yes } else { Flag::No }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Yes => "Sim",
            Flag::No => "Não",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Flag::Yes)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

pub fn is_affirmative(raw: Option<&str>) -> bool {
    raw.map(|value| value.trim().to_lowercase())
        .is_some_and(|value| AFFIRMATIVE.contains(&value.as_str()))
}

/// Parses a locale-formatted amount.
///
/// A comma preceded somewhere by a dot (`1.234,50`, `1.234.567,89`) marks
/// dots as thousands separators; otherwise commas are decimal points.
/// Blank, absent, unparsable and non-finite values yield `0.0`.
pub fn parse_amount(raw: Option<&str>) -> f64 {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return 0.0;
    }

    let canonical = if has_thousands_dots(value) {
        value.replace('.', "").replace(',', ".")
    } else {
        value.replace(',', ".")
    };

    canonical
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

// Mirrors the `regexp_matches(s, '\..*,')` test of the aggregate template.
fn has_thousands_dots(value: &str) -> bool {
    match (value.find('.'), value.rfind(',')) {
        (Some(dot), Some(comma)) => dot < comma,
        _ => false,
    }
}
