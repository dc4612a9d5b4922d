use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::PruneError;

/// Inclusive bounds on directory numbers. `start > end` is allowed and
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    pub start: i64,
    pub end: i64,
}

impl NumberRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, value: u64) -> bool {
        let value = i128::from(value);
        i128::from(self.start) <= value && value <= i128::from(self.end)
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A directory picked for removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub name: String,
    pub value: u64,
}

/// Candidates sorted ascending by number.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    candidates: Vec<Candidate>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn first(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    pub fn last(&self) -> Option<&Candidate> {
        self.candidates.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Parse a directory name made only of ASCII digits.
///
/// Returns `None` for empty names, signs, whitespace, or any other
/// character. Returns `Some(None)` when the digits overflow `u64`: such a
/// name is numeric but larger than any range bound.
fn parse_number(name: &str) -> Option<Option<u64>> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(name.parse::<u64>().ok())
}

/// Collect the immediate subdirectories of `base` whose names are numbers
/// inside `range`, sorted ascending.
pub fn scan(base: &Path, range: NumberRange) -> Result<Selection, PruneError> {
    let read_dir = std::fs::read_dir(base).map_err(|source| PruneError::Access {
        path: base.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();

    for entry in read_dir {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(base = %base.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(parsed) = parse_number(name) else {
            continue;
        };
        let Some(value) = parsed.filter(|v| range.contains(*v)) else {
            continue;
        };

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        candidates.push(Candidate {
            path,
            name: name.to_string(),
            value,
        });
    }

    candidates.sort_by(|a, b| a.value.cmp(&b.value).then_with(|| a.name.cmp(&b.name)));

    info!(base = %base.display(), range = %range, found = candidates.len(), "scan complete");

    Ok(Selection { candidates })
}
