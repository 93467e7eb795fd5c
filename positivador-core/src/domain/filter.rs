// positivador-core/src/domain/filter.rs

use std::collections::BTreeSet;

/// Allow-list of advisor ids applied to both summary and detail extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvisorFilter {
    allowed: BTreeSet<String>,
}

impl AdvisorFilter {
    /// Comma-separated ids; blanks are dropped. `None` when nothing remains.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::from_ids(raw.split(','))
    }

    pub fn from_ids<I, S>(ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed: BTreeSet<String> = ids
            .into_iter()
            .map(|id| id.as_ref().trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();
        (!allowed.is_empty()).then_some(Self { allowed })
    }

    pub fn allows(&self, advisor: &str) -> bool {
        self.allowed.contains(advisor)
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

/// `true` when there is no filter or the advisor is allowed.
pub fn admits(filter: Option<&AdvisorFilter>, advisor: &str) -> bool {
    filter.is_none_or(|f| f.allows(advisor))
}
